#![cfg(target_arch = "wasm32")]
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod ui;

use app_core::{AppState, LoopHandle, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static RUNNING: RefCell<Option<LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::show_loading_message(&doc, "Failed to start the scene");
            }
        }
    });
    Ok(())
}

/// Stop the animation loop; the next frame callback tears itself down.
#[wasm_bindgen]
pub fn stop() {
    RUNNING.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
            log::info!("[loop] stop requested");
        }
    });
}

/// Startup config from the page URL: any of `SceneConfig::KEYS` may be given
/// as a query parameter. Without `seed` every load gets fresh sphere colors.
fn config_from_url(window: &web::Window) -> SceneConfig {
    let mut config = SceneConfig {
        seed: rand::random(),
        ..SceneConfig::default()
    };
    let Ok(search) = window.location().search() else {
        return config;
    };
    let Ok(params) = web::UrlSearchParams::new_with_str(&search) else {
        return config;
    };
    for key in SceneConfig::KEYS {
        if let Some(value) = params.get(key) {
            if let Err(e) = config.apply_param(key, &value) {
                log::warn!("[config] ignoring {key}={value}: {e}");
            }
        }
    }
    config
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * capped devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_canvas_resize(&canvas);

    let config = config_from_url(&window);
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let started = Instant::now();
    let app_state = AppState::new(&config, aspect, 0.0);

    let gpu = frame::init_gpu(&canvas, &app_state).await;
    if gpu.is_none() {
        log::warn!("[gpu] running without a renderer");
    }
    let state = Rc::new(RefCell::new(app_state));

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        state: state.clone(),
    };
    events::wire_input_handlers(&wiring);
    events::wire_control_panel(&wiring);
    events::wire_global_keydown(&wiring);

    {
        let s = state.borrow();
        ui::sync_panel(&document, &s);
        ui::show_counts(&document, &s);
    }
    overlay::hide_loading(&document);

    let handle = LoopHandle::new();
    RUNNING.with(|slot| *slot.borrow_mut() = Some(handle.clone()));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        gpu,
        canvas,
        document,
        started,
    }));
    frame::start_loop(frame_ctx, handle);
    log::info!("[loop] started");
    Ok(())
}
