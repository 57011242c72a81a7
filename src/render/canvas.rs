use crate::constants::{CENTER_LIGHTNESS_PCT, PETAL_LIGHTNESS_PCT, PETAL_SATURATION_PCT};
use crate::core::{css_hsl, RoseFrame};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// 2D canvas the rose is drawn into, at the element's own width/height.
pub struct RoseCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl RoseCanvas {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        _ = canvas.style().set_property("border", "none");
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        log::info!(
            "[rose] canvas {}x{}",
            canvas.width(),
            canvas.height()
        );
        Ok(Self { canvas, ctx })
    }

    /// Clear, then draw the petals and the center disk.
    pub fn draw(&self, frame: &RoseFrame) -> Result<(), JsValue> {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let (cx, cy) = (w / 2.0, h / 2.0);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.ctx
            .set_fill_style_str(&css_hsl(frame.hue, PETAL_SATURATION_PCT, PETAL_LIGHTNESS_PCT));
        for petal in &frame.petals {
            let (dx, dy) = petal.offset();
            self.ctx.begin_path();
            self.ctx.ellipse(
                cx + dx as f64,
                cy + dy as f64,
                petal.length as f64,
                petal.width as f64,
                petal.angle as f64,
                0.0,
                TAU,
            )?;
            self.ctx.fill();
        }

        self.ctx
            .set_fill_style_str(&css_hsl(frame.hue, PETAL_SATURATION_PCT, CENTER_LIGHTNESS_PCT));
        self.ctx.begin_path();
        self.ctx
            .arc(cx, cy, frame.center_radius as f64, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}
