use crate::assets::LoadedAsset;
use crate::constants::{BOARD_NODE, BOARD_RISE, LEGS_NODE, LEGS_RISE};
use glam::Vec3;
use std::collections::HashMap;

/// Named scene nodes and the assets that provided them.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: HashMap<String, Vec3>,
    attached: Vec<LoadedAsset>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset's nodes at their rest offset. Re-attaching an asset with
    /// the same path is ignored.
    pub fn attach(&mut self, asset: LoadedAsset) -> bool {
        if self.attached.iter().any(|a| a.path == asset.path) {
            log::warn!("[scene] {} already attached", asset.path);
            return false;
        }
        for name in &asset.nodes {
            self.nodes.entry(name.clone()).or_insert(Vec3::ZERO);
        }
        log::info!(
            "[scene] attached {} ({} bytes, nodes: {})",
            asset.path,
            asset.byte_len,
            asset.nodes.join(", ")
        );
        self.attached.push(asset);
        true
    }

    pub fn node(&self, name: &str) -> Option<Vec3> {
        self.nodes.get(name).copied()
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut Vec3> {
        self.nodes.get_mut(name)
    }

    pub fn attached(&self) -> &[LoadedAsset] {
        &self.attached
    }

    pub fn is_attached(&self, path: &str) -> bool {
        self.attached.iter().any(|a| a.path == path)
    }
}

/// One node driven by the height parameter: `offset.y = rise * height`.
#[derive(Clone, Debug, PartialEq)]
pub struct RigBinding {
    pub node: String,
    pub rise: f32,
}

/// Maps the height parameter onto node offsets.
#[derive(Clone, Debug)]
pub struct DeskRig {
    bindings: Vec<RigBinding>,
}

impl Default for DeskRig {
    fn default() -> Self {
        Self {
            bindings: vec![
                RigBinding {
                    node: BOARD_NODE.to_string(),
                    rise: BOARD_RISE,
                },
                RigBinding {
                    node: LEGS_NODE.to_string(),
                    rise: LEGS_RISE,
                },
            ],
        }
    }
}

impl DeskRig {
    pub fn new(bindings: Vec<RigBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[RigBinding] {
        &self.bindings
    }

    /// Vertical offset a node should have at `height`, if the rig drives it.
    pub fn offset_for(&self, node: &str, height: f32) -> Option<f32> {
        self.bindings
            .iter()
            .find(|b| b.node == node)
            .map(|b| b.rise * height)
    }

    /// Write offsets into every bound node that exists. Returns how many
    /// nodes were updated.
    pub fn apply(&self, graph: &mut SceneGraph, height: f32) -> usize {
        let mut updated = 0;
        for b in &self.bindings {
            if let Some(pos) = graph.node_mut(&b.node) {
                pos.y = b.rise * height;
                updated += 1;
            }
        }
        updated
    }
}
