use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels; `(1, 1)` when unavailable.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ONE;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Vec2::new(width.max(1.0) as f32, height.max(1.0) as f32)
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Match the canvas backing store to `size` (one unit per CSS pixel).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, size: Vec2) {
    let w_px = (size.x as u32).max(1);
    let h_px = (size.y as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}

pub fn set_opacity(canvas: &web::HtmlCanvasElement, opacity: f32) {
    _ = canvas
        .style()
        .set_property("opacity", &format!("{:.3}", opacity.clamp(0.0, 1.0)));
}

/// Every `<canvas data-ambient>` in the document.
pub fn ambient_canvases(document: &web::Document) -> Vec<web::HtmlCanvasElement> {
    let Ok(list) = document.query_selector_all("canvas[data-ambient]") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlCanvasElement>().ok())
        .collect()
}
