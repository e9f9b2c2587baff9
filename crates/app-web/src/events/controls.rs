use super::InputWiring;
use crate::{dom, ui};
use app_core::{parse_hex_color, ControlEvent, Preset};
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_input(ev: &web::Event) -> Option<web::HtmlInputElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
}

fn target_select(ev: &web::Event) -> Option<web::HtmlSelectElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlSelectElement>().ok())
}

/// Wire the control panel. Every element is optional.
pub fn wire_control_panel(w: &InputWiring) {
    let doc = w.document.clone();

    {
        let w = w.clone();
        dom::add_element_listener(&doc, ui::COLOR_PICKER_ID, "input", move |ev| {
            let Some(input) = target_input(&ev) else {
                return;
            };
            match parse_hex_color(&input.value()) {
                Ok(color) => w.dispatch(ControlEvent::Color(color)),
                Err(e) => log::warn!("[controls] {e}"),
            }
        });
    }
    {
        let w = w.clone();
        dom::add_element_listener(&doc, ui::WIREFRAME_ID, "change", move |ev| {
            if let Some(input) = target_input(&ev) {
                w.dispatch(ControlEvent::Wireframe(input.checked()));
            }
        });
    }
    {
        let w = w.clone();
        dom::add_element_listener(&doc, ui::AUTO_ROTATE_ID, "change", move |ev| {
            if let Some(input) = target_input(&ev) {
                w.dispatch(ControlEvent::AutoRotate(input.checked()));
            }
        });
    }
    {
        let w = w.clone();
        dom::add_element_listener(&doc, ui::PRESET_ID, "change", move |ev| {
            let Some(select) = target_select(&ev) else {
                return;
            };
            match select.value().parse::<Preset>() {
                Ok(preset) => w.dispatch(ControlEvent::Preset(preset)),
                Err(e) => log::warn!("[controls] {e}"),
            }
        });
    }
    {
        let w = w.clone();
        dom::add_click_listener(&doc, ui::SCREENSHOT_ID, move || {
            w.dispatch(ControlEvent::Screenshot);
        });
    }
}
