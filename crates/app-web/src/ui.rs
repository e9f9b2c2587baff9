use crate::dom;
use app_core::{format_hex_color, AppState, ControlEffect, Preset, SelectionChange};
use web_sys as web;

pub const FPS_ID: &str = "fps";
pub const OBJECT_COUNT_ID: &str = "object-count";
pub const PARTICLE_COUNT_ID: &str = "particle-count";
pub const SELECTED_ID: &str = "selected";
pub const COLOR_PICKER_ID: &str = "color-picker";
pub const WIREFRAME_ID: &str = "wireframe-toggle";
pub const AUTO_ROTATE_ID: &str = "auto-rotate-toggle";
pub const PRESET_ID: &str = "preset-select";
pub const SCREENSHOT_ID: &str = "screenshot-btn";

pub fn show_selection(document: &web::Document, change: &SelectionChange) {
    dom::set_text(document, SELECTED_ID, &change.label);
    if let (Some(color), Some(picker)) = (change.color, dom::input_element(document, COLOR_PICKER_ID))
    {
        picker.set_value(&format_hex_color(color));
    }
}

pub fn show_preset(document: &web::Document, preset: Preset) {
    if let Some(select) = dom::select_element(document, PRESET_ID) {
        select.set_value(preset.name());
    }
}

/// Reflect a control effect back into the panel.
pub fn apply_effect(document: &web::Document, effect: &ControlEffect) {
    match effect {
        ControlEffect::Selection(change) => show_selection(document, change),
        ControlEffect::PresetApplied(preset) => show_preset(document, *preset),
        ControlEffect::ScreenshotQueued | ControlEffect::None => {}
    }
}

/// Push every panel value from the state; used at startup and after
/// keyboard shortcuts, which bypass the inputs.
pub fn sync_panel(document: &web::Document, state: &AppState) {
    if let Some(el) = dom::input_element(document, WIREFRAME_ID) {
        el.set_checked(state.wireframe());
    }
    if let Some(el) = dom::input_element(document, AUTO_ROTATE_ID) {
        el.set_checked(state.auto_rotate);
    }
    show_preset(document, state.preset);
}

pub fn show_counts(document: &web::Document, state: &AppState) {
    dom::set_text(document, OBJECT_COUNT_ID, &state.object_count().to_string());
    dom::set_text(document, PARTICLE_COUNT_ID, &state.particles.len().to_string());
}

#[inline]
pub fn show_fps(document: &web::Document, fps: u32) {
    dom::set_text(document, FPS_ID, &fps.to_string());
}
