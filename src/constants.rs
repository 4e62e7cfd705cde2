// DOM contract and preview styling for the web frontend.

// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const HUD_ID: &str = "hud";

// Frame timing: clamp long pauses (tab switches) so the toggle doesn't jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Preview palette (CSS colours)
pub const BOARD_FILL: &str = "#c9a77c";
pub const BOARD_FILL_HOVER: &str = "#e0bf92";
pub const BOARD_STROKE: &str = "#5b4630";
pub const LEGS_FILL: &str = "#3a3f44";
pub const FLOOR_STROKE: &str = "rgba(0, 0, 0, 0.25)";
pub const DEBUG_STROKE: &str = "#ff3b7f";
pub const SHADOW_FILL: &str = "rgba(0, 0, 0, 0.18)";

// Preview line width in backing-store pixels
pub const OUTLINE_WIDTH_PX: f64 = 2.0;
