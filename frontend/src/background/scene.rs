use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::blobs::{Blob, BLOBS};
use super::particles::{self, Particle, PULL_RADIUS};
use super::surface::{Color, Surface};

const PARTICLE_COLOR: Color = Color::Rgba { r: 226, g: 232, b: 255, a: 1.0 };
const BLOB_SATURATION: f64 = 80.0;
const BLOB_LIGHTNESS: f64 = 60.0;
const BLOB_ALPHA: f64 = 0.18;
const HIGHLIGHT: Color = Color::Rgba { r: 255, g: 255, b: 255, a: 0.08 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Reads the window's inner size and pixel density.
    pub fn of(window: &web_sys::Window) -> Self {
        let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        let dpr = window.device_pixel_ratio();
        Self {
            width: read(window.inner_width()),
            height: read(window.inner_height()),
            device_pixel_ratio: if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl Pointer {
    /// Pull on a particle at `(x, y)`; always 0 while the pointer is away.
    pub fn pull_at(&self, x: f64, y: f64) -> f64 {
        if !self.active {
            return 0.0;
        }
        particles::pull_strength((x - self.x).hypot(y - self.y))
    }
}

/// Everything the background animates: one instance per activation.
pub struct Scene<R: Rng = StdRng> {
    viewport: Viewport,
    particles: Vec<Particle>,
    blobs: [Blob; 5],
    pointer: Pointer,
    rng: R,
}

impl Scene<StdRng> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, StdRng::from_entropy())
    }
}

impl<R: Rng> Scene<R> {
    pub fn with_rng(viewport: Viewport, mut rng: R) -> Self {
        let particles = particles::seed(&mut rng, &viewport);
        Self {
            viewport,
            particles,
            blobs: BLOBS,
            pointer: Pointer::default(),
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// New viewport: the particle set is thrown away and seeded again.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.particles = particles::seed(&mut self.rng, &self.viewport);
        log::debug!(
            "Background reseeded for {}x{}: {} particles",
            viewport.width,
            viewport.height,
            self.particles.len()
        );
    }

    /// Resize the surface and reseed for `viewport`.
    pub fn fit<S: Surface + ?Sized>(&mut self, surface: &mut S, viewport: Viewport) {
        surface.resize(&viewport);
        self.resize(viewport);
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Pointer { x, y, active: true };
    }

    pub fn pointer_left(&mut self) {
        self.pointer.active = false;
    }

    pub fn pull_at(&self, x: f64, y: f64) -> f64 {
        self.pointer.pull_at(x, y)
    }

    /// Advance and draw one frame. `elapsed_ms` comes from the frame callback.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, elapsed_ms: f64) {
        let viewport = self.viewport;
        surface.clear(&viewport);

        let seconds = elapsed_ms / 1000.0;
        for (i, blob) in self.blobs.iter().enumerate() {
            let at = blob.at(i, seconds, &viewport, &self.pointer);
            let color = Color::Hsla {
                h: at.hue,
                s: BLOB_SATURATION,
                l: BLOB_LIGHTNESS,
                a: BLOB_ALPHA,
            };
            surface.glow(at.x, at.y, at.radius, color);
        }

        let pointer = self.pointer;
        for particle in self.particles.iter_mut() {
            particle.step(viewport.width, viewport.height);
            let (radius, alpha) = particle.rendered(pointer.pull_at(particle.x, particle.y));
            surface.dot(particle.x, particle.y, radius, PARTICLE_COLOR.with_alpha(alpha));
        }

        if pointer.active {
            surface.glow(pointer.x, pointer.y, PULL_RADIUS, HIGHLIGHT);
        }
    }
}
