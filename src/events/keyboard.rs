use super::keymap::{action_for_key, apply_param_action, KeyAction};
use crate::overlay;
use configurator_core::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<SceneContext>>) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleHeight => {
            if scene.borrow_mut().trigger() {
                log::info!("[keys] toggle height");
            }
        }
        KeyAction::ToggleHud => {
            if let Some(document) = crate::dom::window_document() {
                overlay::toggle(&document);
            }
        }
        _ => {
            let mut s = scene.borrow_mut();
            match apply_param_action(action, &mut s.params) {
                Ok(_) => log::info!(
                    "[keys] {:?}: exposure={:.1} fov={:.0} shadows={} background={} debug={}",
                    action,
                    s.params.exposure(),
                    s.params.fov_degrees(),
                    s.params.shadows,
                    s.params.background.to_hex(),
                    s.params.debug
                ),
                Err(e) => log::warn!("[keys] {:?}: {}", action, e),
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(scene: Rc<RefCell<SceneContext>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &scene);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
