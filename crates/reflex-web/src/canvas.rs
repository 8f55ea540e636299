use reflex_engine::{Color, Surface, TextStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Look up a canvas by element id and get its 2D context.
pub fn init_canvas(
    document: &Document,
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not found")))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((canvas, ctx))
}

/// `Surface` backed by a browser canvas.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.ctx
            .quadratic_curve_to(cpx as f64, cpy as f64, x as f64, y as f64);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        if let Err(err) = self.ctx.arc(
            x as f64,
            y as f64,
            radius.max(0.0) as f64,
            start_angle as f64,
            end_angle as f64,
        ) {
            log::warn!("arc failed: {err:?}");
        }
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke(&mut self, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn is_point_in_path(&self, x: f32, y: f32) -> bool {
        self.ctx.is_point_in_path_with_f64(x as f64, y as f64)
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_font(&style.css_font());
        self.ctx.set_fill_style_str(&style.color.css());
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {err:?}");
        }
    }
}
