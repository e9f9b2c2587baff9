use super::InputWiring;
use crate::ui;
use app_core::control_for_key;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys typed into a form control belong to that control.
fn is_form_target(ev: &web::KeyboardEvent) -> bool {
    ev.target().is_some_and(|t| {
        t.dyn_ref::<web::HtmlInputElement>().is_some()
            || t.dyn_ref::<web::HtmlSelectElement>().is_some()
    })
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if ev.repeat() || is_form_target(ev) {
        return;
    }
    let key = ev.key();
    let (wireframe_on, auto_rotate_on) = {
        let state = w.state.borrow();
        (state.wireframe(), state.auto_rotate)
    };
    let Some(event) = control_for_key(&key, wireframe_on, auto_rotate_on) else {
        return;
    };
    if key == " " {
        ev.prevent_default();
    }
    w.dispatch(event);
    ui::sync_panel(&w.document, &w.state.borrow());
}

pub fn wire_global_keydown(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
