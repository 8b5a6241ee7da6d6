use crate::core::panel;
use crate::core::FieldParams;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global keydown wiring for the parameter panel. The key -> parameter
/// mapping itself lives in `core::panel`; this only attaches the listener and
/// refreshes the hint overlay after each edit.
pub fn wire_global_keydown(params: Rc<RefCell<FieldParams>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let Some(action) = panel::action_for_key(&ev.key()) else {
            return;
        };
        {
            let mut p = params.borrow_mut();
            panel::apply_action(&mut p, action);
            log::info!(
                "[panel] {:?} -> distortion={:.2} volume={:.2} background={}",
                action,
                p.distortion_power,
                p.volume_scale,
                p.background_index
            );
        }
        let p = params.borrow();
        if let Some(doc) = dom::window_document() {
            overlay::update_hint(&doc, p.distortion_power, p.volume_scale);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
