use rand::Rng;

use super::scene::Viewport;

/// Upper bound on the number of particles, regardless of viewport width.
pub const MAX_PARTICLES: usize = 120;
/// One particle per this many horizontal pixels.
pub const PIXELS_PER_PARTICLE: f64 = 8.0;
/// How far a particle may leave the viewport before it wraps around.
pub const WRAP_MARGIN: f64 = 20.0;
/// Pointer influence radius in css pixels.
pub const PULL_RADIUS: f64 = 120.0;

const RADIUS_MIN: f64 = 1.0;
const RADIUS_SPAN: f64 = 2.2;
const SPEED_SPAN: f64 = 0.25;
const ALPHA_MIN: f64 = 0.12;
const ALPHA_SPAN: f64 = 0.18;

const PULL_RADIUS_GAIN: f64 = 1.6;
const PULL_ALPHA_GAIN: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    /// Advance one frame and wrap to the opposite edge once the particle is
    /// more than `WRAP_MARGIN` outside the viewport.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }

    /// Radius and opacity to draw with, given the current pull strength.
    pub fn rendered(&self, pull: f64) -> (f64, f64) {
        (
            self.radius + pull * PULL_RADIUS_GAIN,
            self.alpha + pull * PULL_ALPHA_GAIN,
        )
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if value < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if value > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        value
    }
}

pub fn particle_count(width: f64) -> usize {
    if !width.is_finite() || width <= 0.0 {
        return 0;
    }
    ((width / PIXELS_PER_PARTICLE).floor() as usize).min(MAX_PARTICLES)
}

/// Fresh particle set for the viewport. Old particles are never reused.
pub fn seed<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport) -> Vec<Particle> {
    let width = viewport.width.max(0.0);
    let height = viewport.height.max(0.0);

    (0..particle_count(viewport.width))
        .map(|_| Particle {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            vx: (rng.gen::<f64>() - 0.5) * SPEED_SPAN,
            vy: (rng.gen::<f64>() - 0.5) * SPEED_SPAN,
            radius: RADIUS_MIN + rng.gen::<f64>() * RADIUS_SPAN,
            alpha: ALPHA_MIN + rng.gen::<f64>() * ALPHA_SPAN,
        })
        .collect()
}

/// Linear falloff: 1 at the pointer, 0 at `PULL_RADIUS` and beyond.
pub fn pull_strength(distance: f64) -> f64 {
    (PULL_RADIUS - distance).max(0.0) / PULL_RADIUS
}
