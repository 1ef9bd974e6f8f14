use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::scene::Viewport;
use crate::error::MountError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f64, s: f64, l: f64, a: f64 },
}

impl Color {
    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a: alpha },
            Color::Hsla { h, s, l, .. } => Color::Hsla { h, s, l, a: alpha },
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgba { r, g, b, a } => format!("rgba({}, {}, {}, {:.3})", r, g, b, a),
            Color::Hsla { h, s, l, a } => format!("hsla({:.1}, {:.1}%, {:.1}%, {:.3})", h, s, l, a),
        }
    }
}

/// The drawing operations a frame needs. Implemented for the 2D canvas and,
/// in tests, by a recorder.
pub trait Surface {
    /// Match the backing store to the viewport.
    fn resize(&mut self, viewport: &Viewport);
    fn clear(&mut self, viewport: &Viewport);
    /// Radial gradient from `inner` at the center to transparent at `radius`.
    fn glow(&mut self, x: f64, y: f64, radius: f64, inner: Color);
    fn dot(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

/// Backing store size in device pixels: css size times pixel ratio, floored.
/// Negative or non-finite sizes give an empty store.
pub fn backing_size(viewport: &Viewport) -> (u32, u32) {
    let scale = |extent: f64| {
        let pixels = (extent * viewport.device_pixel_ratio).floor();
        if pixels.is_finite() && pixels > 0.0 {
            pixels.min(u32::MAX as f64) as u32
        } else {
            0
        }
    };
    (scale(viewport.width), scale(viewport.height))
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Find the canvas by id and grab its 2D context.
    pub fn find(document: &Document, id: &str) -> Result<Self, MountError> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| MountError::MissingElement(id.to_string()))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MountError::WrongElement(id.to_string()))?;
        let context = canvas
            .get_context("2d")
            .map_err(MountError::from)?
            .ok_or(MountError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MountError::NoContext)?;

        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: &Viewport) {
        let dpr = viewport.device_pixel_ratio;
        let (width, height) = backing_size(viewport);
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.width.max(0.0)));
        let _ = style.set_property("height", &format!("{}px", viewport.height.max(0.0)));

        // Setting the size resets the transform, so draw in css pixels again.
        if let Err(err) = self.context.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("Could not scale background canvas: {:?}", err);
        }
    }

    fn clear(&mut self, viewport: &Viewport) {
        self.context.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn glow(&mut self, x: f64, y: f64, radius: f64, inner: Color) {
        if !(radius > 0.0) || !x.is_finite() || !y.is_finite() {
            return;
        }
        let Ok(gradient) = self.context.create_radial_gradient(x, y, 0.0, x, y, radius) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &inner.to_css());
        let _ = gradient.add_color_stop(1.0, &inner.with_alpha(0.0).to_css());

        self.context.set_fill_style_canvas_gradient(&gradient);
        self.context.begin_path();
        if self.context.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.context.fill();
        }
    }

    fn dot(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        if !(radius > 0.0) || color.alpha() <= 0.0 {
            return;
        }
        self.context.set_fill_style_str(&color.to_css());
        self.context.begin_path();
        if self.context.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.context.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        let dot = Color::Rgba { r: 226, g: 232, b: 255, a: 0.25 };
        assert_eq!(dot.to_css(), "rgba(226, 232, 255, 0.250)");

        let blob = Color::Hsla { h: 205.0, s: 80.0, l: 60.0, a: 0.18 };
        assert_eq!(blob.to_css(), "hsla(205.0, 80.0%, 60.0%, 0.180)");
        assert_eq!(blob.with_alpha(0.0).to_css(), "hsla(205.0, 80.0%, 60.0%, 0.000)");
    }

    fn viewport(width: f64, height: f64, device_pixel_ratio: f64) -> Viewport {
        Viewport { width, height, device_pixel_ratio }
    }

    #[test]
    fn backing_store_scales_with_pixel_ratio() {
        assert_eq!(backing_size(&viewport(960.0, 720.0, 1.0)), (960, 720));
        assert_eq!(backing_size(&viewport(960.0, 720.0, 2.0)), (1920, 1440));
        assert_eq!(backing_size(&viewport(1280.0, 801.0, 1.5)), (1920, 1201));
    }

    #[test]
    fn fractional_sizes_are_floored() {
        assert_eq!(backing_size(&viewport(412.5, 915.3, 1.0)), (412, 915));
        assert_eq!(backing_size(&viewport(412.5, 915.0, 2.625)), (1082, 2401));
        assert_eq!(backing_size(&viewport(0.4, 0.9, 1.0)), (0, 0));
    }

    #[test]
    fn empty_or_negative_viewport_has_no_pixels() {
        assert_eq!(backing_size(&viewport(0.0, 0.0, 2.0)), (0, 0));
        assert_eq!(backing_size(&viewport(-300.0, 200.0, 1.0)), (0, 200));
        assert_eq!(backing_size(&viewport(f64::NAN, f64::INFINITY, 1.0)), (0, 0));
    }

    #[test]
    fn alpha_is_clamped() {
        let c = Color::Rgba { r: 0, g: 0, b: 0, a: 0.5 };
        assert_eq!(c.with_alpha(1.7).alpha(), 1.0);
        assert_eq!(c.with_alpha(-0.2).alpha(), 0.0);
    }
}
