use app_core::pointer_to_ndc;
use glam::Vec2;
use web_sys as web;

/// Client pixel rectangle of the canvas on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn of(canvas: &web::HtmlCanvasElement) -> Self {
        let rect = canvas.get_bounding_client_rect();
        Self {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        }
    }

    /// Pointer in normalized device coordinates relative to this rect.
    /// Positions outside the canvas map outside [-1, 1].
    #[inline]
    pub fn ndc(&self, client_x: f32, client_y: f32) -> Vec2 {
        pointer_to_ndc(
            client_x - self.left,
            client_y - self.top,
            self.width,
            self.height,
        )
    }
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    CanvasRect::of(canvas).ndc(ev.client_x() as f32, ev.client_y() as f32)
}

/// Wheel deltas come in pixels, lines or pages; normalize to pixels.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    const LINE_PX: f64 = 16.0;
    const PAGE_PX: f64 = 800.0;
    let px = match delta_mode {
        1 => delta_y * LINE_PX,
        2 => delta_y * PAGE_PX,
        _ => delta_y,
    };
    px as f32
}

#[inline]
pub fn screenshot_file_name(unix_ms: f64) -> String {
    format!("scene-{}.png", unix_ms.max(0.0) as u64)
}
