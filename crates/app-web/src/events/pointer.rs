use super::InputWiring;
use crate::{dom, input, ui};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &InputWiring) {
    wire_pointermove(w);
    wire_click(w);
    wire_wheel(w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let cursor = w.state.borrow_mut().pointer_moved(ndc);
        dom::set_body_cursor(&w.document, cursor.as_css());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Clicks are taken on the canvas only so the control panel never clears
// the selection it is editing.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let ndc = input::pointer_ndc(&ev, &w.canvas);
        let change = {
            let mut state = w.state.borrow_mut();
            // touch input has no preceding pointermove
            state.pointer = ndc;
            state.clicked()
        };
        ui::show_selection(&w.document, &change);
    }) as Box<dyn FnMut(_)>);

    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        let mut state = w.state.borrow_mut();
        state.wheel(delta);
        log::debug!("[wheel] z={:.2}", state.camera.eye.z);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        // must be non-passive for preventDefault to stop page scrolling
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
