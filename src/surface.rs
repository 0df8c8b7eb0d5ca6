// Drawing target for the snowfall. The canvas implementation grabs the 2D
// context from a canvas on the DOM and draws each flake as a filled circle.

use crate::color::Color;
use crate::particle::Particle;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub trait RenderSurface {
    fn size(&self) -> (f64, f64);

    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self);

    fn draw_particle(&mut self, particle: &Particle);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    // Color and opacity the context's fill style was last set from
    fill_style: Option<(Color, f64)>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("2d canvas context is not available")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(CanvasSurface {
            canvas,
            context,
            fill_style: None,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // Size of the window's layout viewport, in CSS pixels
    pub fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or("window.innerWidth is not a number")?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or("window.innerHeight is not a number")?;
        Ok((width.max(0.0) as u32, height.max(0.0) as u32))
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            // Resizing a canvas resets its context state
            self.fill_style = None;
        }
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_particle(&mut self, particle: &Particle) {
        let fill = (particle.color, particle.opacity);
        if self.fill_style != Some(fill) {
            let style = particle.color.to_css(particle.opacity);
            #[allow(deprecated)]
            self.context.set_fill_style(&JsValue::from_str(&style));
            self.fill_style = Some(fill);
        }

        self.context.begin_path();
        if self
            .context
            .arc(particle.x(), particle.y(), particle.radius, 0.0, 2.0 * PI)
            .is_ok()
        {
            self.context.fill();
        }
    }
}
