// DrawSurface backed by a 2D canvas context grabbed from a canvas on the DOM

use crate::color::Color;
use crate::surface::DrawSurface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(CanvasSurface { context, canvas })
    }

    /// Size the backing store, which also wipes whatever was drawn
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }
}

#[allow(deprecated)]
impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_string()));
        self.context.begin_path();
        if let Err(err) = self.context.arc(x, y, radius, 0.0, PI * 2.0) {
            console::warn_2(&"CanvasSurface::fill_circle".into(), &err);
            return;
        }
        self.context.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, width: f64) {
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
