pub mod controls;
pub mod keyboard;
pub mod pointer;

use crate::ui;
use app_core::{AppState, ControlEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use controls::wire_control_panel;
pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;

/// Handles shared by every DOM listener.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub state: Rc<RefCell<AppState>>,
}

impl InputWiring {
    /// Apply a control event and reflect its effect in the panel.
    pub fn dispatch(&self, event: ControlEvent) {
        let effect = self.state.borrow_mut().apply_control(event);
        log::debug!("[control] {:?} -> {:?}", event, effect);
        ui::apply_effect(&self.document, &effect);
    }
}
