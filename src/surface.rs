use anyhow::anyhow;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::core::{Composite, Hsla, Surface};

/// The real drawing surface: a 2D canvas context plus the CSS-pixel viewport
/// it currently covers. All drawing happens in CSS pixels; `resize` installs
/// a transform so density is handled once, here.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    view_w: f64,
    view_h: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context error: {e:?}"))?
            .ok_or_else(|| anyhow!("2d context unsupported"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("unexpected 2d context type"))?;
        Ok(Self {
            canvas,
            ctx,
            view_w: 0.0,
            view_h: 0.0,
        })
    }

    /// Size the backing store to the viewport times the capped pixel ratio,
    /// keep the displayed size at the uncapped viewport, and scale drawing
    /// back into CSS pixels. Resizing implicitly clears the canvas, which the
    /// fade-based renderer tolerates.
    pub fn resize(&mut self, window: &web::Window) {
        let raw_dpr = window.device_pixel_ratio();
        let dpr = if raw_dpr > 0.0 {
            raw_dpr.min(MAX_DEVICE_PIXEL_RATIO)
        } else {
            1.0
        };
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        self.canvas.set_width((w * dpr).floor() as u32);
        self.canvas.set_height((h * dpr).floor() as u32);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{w}px"));
        _ = style.set_property("height", &format!("{h}px"));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        self.view_w = w;
        self.view_h = h;
    }

    pub fn view_size(&self) -> (f64, f64) {
        (self.view_w, self.view_h)
    }
}

impl Surface for CanvasSurface {
    fn set_composite(&mut self, mode: Composite) {
        let op = match mode {
            Composite::SourceOver => "source-over",
            Composite::Screen => "screen",
            Composite::Lighter => "lighter",
        };
        _ = self.ctx.set_global_composite_operation(op);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_glow(&mut self, cx: f64, cy: f64, radius: f64, color: Hsla) {
        let Ok(gradient) = self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &color.to_css());
        _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(cx, cy, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Hsla) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        self.ctx.stroke();
    }
}
