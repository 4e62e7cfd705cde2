use glam::Vec3;
use std::time::Duration;

// Shared scene and interaction tuning used by both web and native frontends.

// Height toggle
pub const HEIGHT_TOGGLE_DURATION: Duration = Duration::from_millis(1000);

// Rig: how far each node rises at full height (scene units)
pub const BOARD_NODE: &str = "Board";
pub const LEGS_NODE: &str = "Legs_01";
pub const ROOM_NODE: &str = "Room";
pub const BOARD_RISE: f32 = 0.14;
pub const LEGS_RISE: f32 = 0.07;

// Desk geometry at height 0, used for picking and the preview
pub const BOARD_REST_CENTER: Vec3 = Vec3::new(0.0, 0.74, 0.0);
pub const BOARD_HALF_EXTENTS: Vec3 = Vec3::new(0.8, 0.025, 0.4);
pub const LEGS_REST_CENTER: Vec3 = Vec3::new(0.0, 0.36, 0.0);
pub const LEGS_HALF_EXTENTS: Vec3 = Vec3::new(0.7, 0.36, 0.3);

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Parameter ranges (slider bounds)
pub const HEIGHT_RANGE: (f32, f32) = (0.0, 1.0);
pub const EXPOSURE_RANGE: (f32, f32) = (0.0, 5.0);
pub const FOV_RANGE_DEGREES: (f32, f32) = (10.0, 100.0);

// Asset manifest
pub const DESK_ASSET_PATH: &str = "Desk.glb";
pub const ENV_ASSET_PATH: &str = "env.glb";
pub const ENV_MAP_ASSET_PATH: &str = "small_empty_room_1_2k.hdr";
