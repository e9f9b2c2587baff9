use crate::{input, render, ui};
use app_core::{AppState, LoopHandle};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<AppState>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// One animation tick: step the state, draw, then take a pending
    /// screenshot while the freshly presented frame is still readable.
    pub fn frame(&mut self) {
        let now_ms = self.now_ms();
        let w = self.canvas.width();
        let h = self.canvas.height();

        let mut state = self.state.borrow_mut();
        state.resize(w as f32, h as f32);
        let stats = state.tick(now_ms);
        if let Some(fps) = stats.fps {
            ui::show_fps(&self.document, fps);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&state) {
                log::error!("render error: {:?}", e);
            }
        }

        if state.take_screenshot_request() {
            drop(state);
            if let Err(e) = save_screenshot(&self.canvas, &self.document) {
                log::error!("[screenshot] failed: {:?}", e);
            }
        }
    }
}

fn save_screenshot(
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
) -> Result<(), wasm_bindgen::JsValue> {
    let url = canvas.to_data_url_with_type("image/png")?;
    let name = input::screenshot_file_name(js_sys::Date::now());
    let link = document
        .create_element("a")?
        .dyn_into::<web::HtmlAnchorElement>()?;
    link.set_href(&url);
    link.set_download(&name);
    link.click();
    log::info!("[screenshot] {}", name);
    Ok(())
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    state: &AppState,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, state).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `handle` is stopped.
/// On stop the closure drops itself, releasing the context.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, handle: LoopHandle) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !handle.is_running() {
            log::info!("[loop] stopped");
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
