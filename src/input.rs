use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
}

// ---------------- Coordinate helpers ----------------
/// Canvas backing-store pixels (origin top-left, +y down) to NDC (+y up).
#[inline]
pub fn px_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

/// Inverse of [`px_to_ndc`].
#[inline]
pub fn ndc_to_px(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
}

#[inline]
pub fn is_inside_ndc(ndc: Vec2) -> bool {
    ndc.is_finite() && ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let rw = (rect.width() as f32).max(1.0);
    let rh = (rect.height() as f32).max(1.0);
    let sx = (x_css / rw) * canvas.width() as f32;
    let sy = (y_css / rh) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
