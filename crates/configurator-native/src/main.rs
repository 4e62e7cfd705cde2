//! Headless replay of the configurator interaction.
//!
//! Loads the asset manifest from a directory (default: current directory),
//! points at the desk board, clicks, and steps the scene at 60 Hz. A second
//! click lands mid-flight to show the reversal, then the desk is raised again
//! and left to settle. Without the desk there is nothing to click, so the
//! replay is skipped with a warning.

use configurator_core::{
    default_manifest, load_asset, AssetError, AssetSource, Phase, SceneContext,
};
use std::path::PathBuf;

const FRAME_DT_SEC: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 600;
const VIEWPORT: (f32, f32) = (1280.0, 720.0);

struct FsAssetSource {
    root: PathBuf,
}

impl AssetSource for FsAssetSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let full = self.root.join(path);
        std::fs::read(&full)
            .map_err(|e| AssetError::unavailable(path, format!("{}: {}", full.display(), e)))
    }
}

/// Step until the toggle settles or `limit` frames pass. Returns frames run.
fn run_until_idle(scene: &mut SceneContext, limit: usize) -> usize {
    for frame in 1..=limit {
        scene.tick(FRAME_DT_SEC);
        log::debug!("[frame {:>3}] height={:.4}", frame, scene.height());
        if scene.phase() == Phase::Idle {
            return frame;
        }
    }
    limit
}

fn run_frames(scene: &mut SceneContext, frames: usize) {
    for frame in 1..=frames {
        scene.tick(FRAME_DT_SEC);
        log::debug!("[frame {:>3}] height={:.4}", frame, scene.height());
    }
}

fn click_board(scene: &mut SceneContext) -> anyhow::Result<()> {
    let center = scene.board_region().center;
    let ndc = scene
        .camera()
        .world_to_ndc(center)
        .ok_or_else(|| anyhow::anyhow!("board is behind the camera"))?;
    if !scene.pointer_move(ndc) {
        anyhow::bail!("pointer at {:?} missed the board", ndc);
    }
    scene.click();
    Ok(())
}

/// Load the manifest from `root` and replay the toggle. Returns `Ok(false)`
/// when the desk could not be loaded and there was nothing to replay.
fn run(root: PathBuf) -> anyhow::Result<bool> {
    let source = FsAssetSource { root };

    let mut scene = SceneContext::new(VIEWPORT.0 / VIEWPORT.1);
    scene.resize(VIEWPORT.0, VIEWPORT.1);

    for desc in default_manifest() {
        match pollster::block_on(load_asset(&source, &desc)) {
            Ok(asset) => {
                scene.attach(asset);
            }
            Err(e) => log::warn!("[assets] continuing without {}: {}", desc.path, e),
        }
    }
    if !scene.desk_loaded() {
        log::warn!("[replay] desk model unavailable; nothing to interact with");
        return Ok(false);
    }

    click_board(&mut scene)?;
    run_frames(&mut scene, 20);
    let mid = scene.height();
    click_board(&mut scene)?;
    log::info!(
        "[replay] reversed at {:.3} toward {}",
        mid,
        scene.animator().target()
    );
    let frames = run_until_idle(&mut scene, MAX_FRAMES);
    log::info!("[replay] back to {:.3} after {} frames", scene.height(), frames);

    click_board(&mut scene)?;
    let frames = run_until_idle(&mut scene, MAX_FRAMES);
    log::info!("[replay] raised to {:.3} in {} frames", scene.height(), frames);

    Ok(true)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    run(root)?;
    Ok(())
}
