#![cfg(target_arch = "wasm32")]
use configurator_core::SceneContext;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod preview;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("desk configurator starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;
    let ctx2d = dom::context_2d(&canvas)?;

    let aspect = canvas.width() as f32 / (canvas.height() as f32).max(1.0);
    let scene = Rc::new(RefCell::new(SceneContext::new(aspect)));
    let load_status = Rc::new(RefCell::new(overlay::LoadStatus::default()));
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let scene_resize = scene.clone();
    dom::wire_canvas_resize(&canvas, move |w, h| {
        scene_resize.borrow_mut().resize(w as f32, h as f32);
    });

    events::wire_input_handlers(events::pointer::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        mouse_state: mouse_state.clone(),
    });
    events::wire_global_keydown(scene.clone());

    // Assets are served next to the page; the loop runs while they arrive
    assets::spawn_asset_loads("", scene.clone(), load_status.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        load_status,
        mouse: mouse_state,
        canvas,
        ctx2d,
        document,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
