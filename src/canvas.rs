use crate::core::{css_rgb, css_rgba, ClearMode, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` backed by a canvas 2D context.
pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Acquire the 2D context of `canvas`.
    ///
    /// `opaque` requests an alpha-less backing store, which lets the browser
    /// skip compositing against content underneath.
    pub fn acquire(canvas: &web::HtmlCanvasElement, opaque: bool) -> anyhow::Result<Self> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::from_bool(!opaque))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context_with_context_options("2d", &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self, size: Vec2, mode: ClearMode) {
        let (w, h) = (size.x as f64, size.y as f64);
        match mode {
            ClearMode::Opaque(rgb) => {
                self.ctx.set_fill_style_str(&css_rgb(rgb));
                self.ctx.fill_rect(0.0, 0.0, w, h);
            }
            ClearMode::Transparent => self.ctx.clear_rect(0.0, 0.0, w, h),
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.set_fill_style_str(&css_rgba(rgb, alpha));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.set_stroke_style_str(&css_rgba(rgb, alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
