use crate::constants::MAX_FRAME_DT_SEC;
use crate::input;
use crate::overlay::{self, LoadStatus};
use crate::preview;
use configurator_core::SceneContext;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneContext>>,
    pub load_status: Rc<RefCell<LoadStatus>>,
    pub mouse: Rc<RefCell<input::MouseState>>,

    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub document: web::Document,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        let mut scene = self.scene.borrow_mut();
        scene.tick(dt_sec);

        preview::draw(&self.ctx2d, &self.canvas, &scene, &self.mouse.borrow());

        let text = overlay::hud_text(
            scene.height(),
            scene.phase(),
            scene.is_hovering(),
            &self.load_status.borrow(),
        );
        overlay::update_hud(&self.document, &text);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
