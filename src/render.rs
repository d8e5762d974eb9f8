use crate::core::{Rgba, Surface};
use anyhow::anyhow;
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the browser will not hand out a 2D context for `canvas`.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
            Ok(None) => return None,
            Err(e) => {
                log::debug!("2d context error: {:?}", e);
                return None;
            }
        };
        Some(Self { canvas, ctx })
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&mut self, width: f64, height: f64) -> anyhow::Result<()> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) -> anyhow::Result<()> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, TAU)
            .map_err(|e| anyhow!("arc: {:?}", e))?;
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: DVec2,
        to: DVec2,
        color: Rgba,
        line_width: f64,
    ) -> anyhow::Result<()> {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }
}
