use crate::animator::{BistableAnimator, Phase};
use crate::assets::LoadedAsset;
use crate::camera::Camera;
use crate::constants::{
    BOARD_HALF_EXTENTS, BOARD_NODE, BOARD_REST_CENTER, HEIGHT_TOGGLE_DURATION, LEGS_HALF_EXTENTS,
    LEGS_NODE, LEGS_REST_CENTER,
};
use crate::params::ConfiguratorParams;
use crate::picking::BoxRegion;
use crate::rig::{DeskRig, SceneGraph};
use glam::{Vec2, Vec3};
use std::time::Duration;

/// Everything the frame loop and input handlers share: the height animator,
/// runtime params, camera, loaded scene nodes and the clickable board region.
pub struct SceneContext {
    animator: BistableAnimator,
    pub params: ConfiguratorParams,
    camera: Camera,
    graph: SceneGraph,
    rig: DeskRig,
    board_region: BoxRegion,
}

impl SceneContext {
    pub fn new(aspect: f32) -> Self {
        Self::with_params(aspect, ConfiguratorParams::default(), HEIGHT_TOGGLE_DURATION)
    }

    pub fn with_params(aspect: f32, params: ConfiguratorParams, toggle_duration: Duration) -> Self {
        let camera = Camera::new(aspect, params.fov_degrees());
        Self {
            animator: BistableAnimator::new(toggle_duration),
            params,
            camera,
            graph: SceneGraph::new(),
            rig: DeskRig::default(),
            board_region: BoxRegion::new(BOARD_REST_CENTER, BOARD_HALF_EXTENTS),
        }
    }

    pub fn animator(&self) -> &BistableAnimator {
        &self.animator
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn board_region(&self) -> &BoxRegion {
        &self.board_region
    }

    /// Current height parameter in `[0, 1]`.
    pub fn height(&self) -> f32 {
        self.animator.value()
    }

    pub fn phase(&self) -> Phase {
        self.animator.phase()
    }

    pub fn is_hovering(&self) -> bool {
        self.animator.is_hovering()
    }

    pub fn desk_loaded(&self) -> bool {
        self.graph.node(BOARD_NODE).is_some()
    }

    pub fn attach(&mut self, asset: LoadedAsset) -> bool {
        let attached = self.graph.attach(asset);
        if attached {
            self.apply_rig();
        }
        attached
    }

    /// Pointer moved to `ndc`. The board is only pickable once the desk is
    /// in the scene.
    pub fn pointer_move(&mut self, ndc: Vec2) -> bool {
        if !self.desk_loaded() {
            self.animator.clear_hover();
            return false;
        }
        self.animator
            .register_pointer_move(ndc, &self.camera, &self.board_region)
    }

    pub fn pointer_leave(&mut self) {
        self.animator.clear_hover();
    }

    pub fn click(&mut self) -> bool {
        self.animator.register_click()
    }

    /// Toggle without a pointer, e.g. from the keyboard. Ignored until the
    /// desk is in the scene.
    pub fn trigger(&mut self) -> bool {
        if !self.desk_loaded() {
            log::debug!("[scene] trigger ignored, desk not loaded");
            return false;
        }
        self.animator.on_trigger();
        true
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    pub fn tick(&mut self, dt_sec: f32) {
        self.animator.update_secs(dt_sec);
        if let Err(e) = self.params.set_height(self.animator.value()) {
            log::warn!("[scene] {}", e);
        }
        self.apply_rig();
        self.camera.set_fov_degrees(self.params.fov_degrees());
    }

    fn apply_rig(&mut self) {
        let h = self.params.height();
        self.rig.apply(&mut self.graph, h);
        let rise = self.rig.offset_for(BOARD_NODE, h).unwrap_or(0.0);
        self.board_region
            .set_center(BOARD_REST_CENTER + Vec3::Y * rise);
    }

    /// World-space boxes of the board and legs at the current height.
    pub fn desk_boxes(&self) -> (BoxRegion, BoxRegion) {
        let legs_rise = self.graph.node(LEGS_NODE).map(|p| p.y).unwrap_or(0.0);
        let legs = BoxRegion::new(LEGS_REST_CENTER + Vec3::Y * legs_rise, LEGS_HALF_EXTENTS);
        (self.board_region, legs)
    }
}
