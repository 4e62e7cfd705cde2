//! Canvas2D preview of the desk.
//!
//! Boxes are projected through the scene camera and drawn as their screen
//! bounds; the result is a flat schematic that moves with the height rig.

use crate::constants::{
    BOARD_FILL, BOARD_FILL_HOVER, BOARD_STROKE, DEBUG_STROKE, FLOOR_STROKE, LEGS_FILL,
    OUTLINE_WIDTH_PX, SHADOW_FILL,
};
use crate::input::{self, MouseState};
use configurator_core::{BoxRegion, Camera, SceneContext};
use glam::{Vec2, Vec3};
use web_sys as web;

/// Screen-space rectangle in canvas pixels.
#[derive(Clone, Copy, Debug)]
struct ScreenRect {
    min: Vec2,
    max: Vec2,
}

fn project_box(camera: &Camera, b: &BoxRegion, width: f32, height: f32) -> Option<ScreenRect> {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for corner in b.corners() {
        let ndc = camera.world_to_ndc(corner)?;
        let px = input::ndc_to_px(ndc, width, height);
        min = min.min(px);
        max = max.max(px);
    }
    Some(ScreenRect { min, max })
}

fn fill_rect(ctx: &web::CanvasRenderingContext2d, r: ScreenRect, fill: &str) {
    ctx.set_fill_style_str(fill);
    let size = r.max - r.min;
    ctx.fill_rect(r.min.x as f64, r.min.y as f64, size.x as f64, size.y as f64);
}

fn stroke_box_edges(
    ctx: &web::CanvasRenderingContext2d,
    camera: &Camera,
    b: &BoxRegion,
    width: f32,
    height: f32,
) {
    const EDGES: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    let corners = b.corners();
    let mut px = [Vec2::ZERO; 8];
    for (i, c) in corners.iter().enumerate() {
        match camera.world_to_ndc(*c) {
            Some(ndc) => px[i] = input::ndc_to_px(ndc, width, height),
            None => return,
        }
    }
    ctx.begin_path();
    for (i, j) in EDGES {
        ctx.move_to(px[i].x as f64, px[i].y as f64);
        ctx.line_to(px[j].x as f64, px[j].y as f64);
    }
    ctx.stroke();
}

pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    scene: &SceneContext,
    mouse: &MouseState,
) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let camera = scene.camera();
    let params = &scene.params;

    // exposure 0.5 is neutral, matching the default tone mapping
    let bg = params.background.scaled(params.exposure() * 2.0);
    ctx.set_fill_style_str(&bg.to_hex());
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    ctx.set_line_width(OUTLINE_WIDTH_PX);
    if let (Some(a), Some(b)) = (
        camera.world_to_ndc(Vec3::new(-3.0, 0.0, 0.0)),
        camera.world_to_ndc(Vec3::new(3.0, 0.0, 0.0)),
    ) {
        let (a, b) = (input::ndc_to_px(a, width, height), input::ndc_to_px(b, width, height));
        ctx.set_stroke_style_str(FLOOR_STROKE);
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }

    if !scene.desk_loaded() {
        return;
    }

    let (board, legs) = scene.desk_boxes();
    let Some(board_rect) = project_box(camera, &board, width, height) else {
        return;
    };
    let Some(legs_rect) = project_box(camera, &legs, width, height) else {
        return;
    };

    if params.shadows {
        if let Some(floor) = camera.world_to_ndc(Vec3::new(0.0, 0.0, 0.0)) {
            let c = input::ndc_to_px(floor, width, height);
            let rx = ((board_rect.max.x - board_rect.min.x) * 0.55) as f64;
            ctx.set_fill_style_str(SHADOW_FILL);
            ctx.begin_path();
            if ctx
                .ellipse(c.x as f64, c.y as f64, rx, rx * 0.08, 0.0, 0.0, std::f64::consts::TAU)
                .is_ok()
            {
                ctx.fill();
            }
        }
    }

    fill_rect(ctx, legs_rect, LEGS_FILL);
    let fill = if scene.is_hovering() { BOARD_FILL_HOVER } else { BOARD_FILL };
    fill_rect(ctx, board_rect, fill);
    ctx.set_stroke_style_str(BOARD_STROKE);
    let size = board_rect.max - board_rect.min;
    ctx.stroke_rect(
        board_rect.min.x as f64,
        board_rect.min.y as f64,
        size.x as f64,
        size.y as f64,
    );

    if params.debug {
        ctx.set_stroke_style_str(DEBUG_STROKE);
        stroke_box_edges(ctx, camera, scene.board_region(), width, height);
        if mouse.inside {
            ctx.begin_path();
            ctx.move_to(mouse.x as f64 - 8.0, mouse.y as f64);
            ctx.line_to(mouse.x as f64 + 8.0, mouse.y as f64);
            ctx.move_to(mouse.x as f64, mouse.y as f64 - 8.0);
            ctx.line_to(mouse.x as f64, mouse.y as f64 + 8.0);
            ctx.stroke();
        }
    }
}
