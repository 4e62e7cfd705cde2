//! Asynchronous asset loading.
//!
//! Asset bytes are fetched through an [`AssetSource`] supplied by the
//! frontend (HTTP fetch on the web, the filesystem natively). Contents are
//! never parsed; a descriptor lists which named nodes the asset provides so
//! the scene graph can expose them once the load has succeeded.

use crate::constants::{
    BOARD_NODE, DESK_ASSET_PATH, ENV_ASSET_PATH, ENV_MAP_ASSET_PATH, LEGS_NODE, ROOM_NODE,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssetError {
    #[error("asset unavailable: {path}: {reason}")]
    Unavailable { path: String, reason: String },
    #[error("asset {path} is empty")]
    Empty { path: String },
}

impl AssetError {
    pub fn unavailable(path: &str, reason: impl ToString) -> Self {
        Self::Unavailable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Unavailable { path, .. } | Self::Empty { path } => path,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetDescriptor {
    pub path: String,
    pub nodes: Vec<String>,
}

impl AssetDescriptor {
    pub fn new(path: &str, nodes: &[&str]) -> Self {
        Self {
            path: path.to_string(),
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// A successfully fetched asset, ready to attach to the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedAsset {
    pub path: String,
    pub nodes: Vec<String>,
    pub byte_len: usize,
}

/// The desk model, its room and the room's environment map. The map
/// provides no nodes; it is only fetched.
pub fn default_manifest() -> Vec<AssetDescriptor> {
    vec![
        AssetDescriptor::new(DESK_ASSET_PATH, &[BOARD_NODE, LEGS_NODE]),
        AssetDescriptor::new(ENV_ASSET_PATH, &[ROOM_NODE]),
        AssetDescriptor::new(ENV_MAP_ASSET_PATH, &[]),
    ]
}

#[allow(async_fn_in_trait)]
pub trait AssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, AssetError>;
}

pub async fn load_asset<S>(source: &S, desc: &AssetDescriptor) -> Result<LoadedAsset, AssetError>
where
    S: AssetSource,
{
    let bytes = match source.fetch(&desc.path).await {
        Ok(b) => b,
        Err(e) => {
            log::error!("[assets] {}", e);
            return Err(e);
        }
    };
    if bytes.is_empty() {
        let e = AssetError::Empty {
            path: desc.path.clone(),
        };
        log::error!("[assets] {}", e);
        return Err(e);
    }
    log::info!("[assets] loaded {} ({} bytes)", desc.path, bytes.len());
    Ok(LoadedAsset {
        path: desc.path.clone(),
        nodes: desc.nodes.clone(),
        byte_len: bytes.len(),
    })
}
