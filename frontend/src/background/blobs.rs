use super::scene::{Pointer, Viewport};

const DRIFT: f64 = 40.0;
const RADIUS_SWING: f64 = 40.0;
/// Full span of the pointer offset; half of it in either direction.
const POINTER_SWAY: f64 = 60.0;

/// A soft gradient region. The parameters are fixed at design time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// Normalized anchor in [0, 1] x [0, 1].
    pub anchor: (f64, f64),
    pub radius: f64,
    pub hue: f64,
    /// Angular drift speed in radians per second.
    pub speed: f64,
}

/// Where a blob is drawn on a particular frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobFrame {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hue: f64,
}

pub const BLOBS: [Blob; 5] = [
    Blob { anchor: (0.18, 0.22), radius: 260.0, hue: 205.0, speed: 0.18 },
    Blob { anchor: (0.82, 0.18), radius: 220.0, hue: 265.0, speed: 0.22 },
    Blob { anchor: (0.52, 0.68), radius: 300.0, hue: 170.0, speed: 0.15 },
    Blob { anchor: (0.12, 0.82), radius: 200.0, hue: 320.0, speed: 0.25 },
    Blob { anchor: (0.88, 0.76), radius: 240.0, hue: 225.0, speed: 0.20 },
];

impl Blob {
    pub fn at(&self, index: usize, seconds: f64, viewport: &Viewport, pointer: &Pointer) -> BlobFrame {
        let phase = seconds * self.speed + index as f64;
        let (offset_x, offset_y) = pointer_offset(viewport, pointer);

        BlobFrame {
            x: self.anchor.0 * viewport.width + phase.sin() * DRIFT + offset_x,
            y: self.anchor.1 * viewport.height + phase.cos() * DRIFT + offset_y,
            radius: (self.radius + (phase * 0.7).sin() * RADIUS_SWING).max(0.0),
            hue: self.hue,
        }
    }
}

/// Signed sway toward the pointer, at most half of `POINTER_SWAY` per axis.
/// A zero-sized axis contributes nothing.
pub fn pointer_offset(viewport: &Viewport, pointer: &Pointer) -> (f64, f64) {
    if !pointer.active {
        return (0.0, 0.0);
    }
    let axis = |position: f64, extent: f64| {
        if extent > 0.0 && extent.is_finite() {
            ((position / extent - 0.5) * POINTER_SWAY).clamp(-POINTER_SWAY / 2.0, POINTER_SWAY / 2.0)
        } else {
            0.0
        }
    };
    (
        axis(pointer.x, viewport.width),
        axis(pointer.y, viewport.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f64, height: f64) -> Viewport {
        Viewport {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    #[test]
    fn inactive_pointer_does_not_move_blobs() {
        let vp = viewport(1000.0, 800.0);
        let pointer = Pointer { x: 0.0, y: 0.0, active: false };
        assert_eq!(pointer_offset(&vp, &pointer), (0.0, 0.0));
    }

    #[test]
    fn offset_is_signed_and_bounded() {
        let vp = viewport(1000.0, 800.0);
        let corner = Pointer { x: 0.0, y: 800.0, active: true };
        assert_eq!(pointer_offset(&vp, &corner), (-30.0, 30.0));

        let center = Pointer { x: 500.0, y: 400.0, active: true };
        assert_eq!(pointer_offset(&vp, &center), (0.0, 0.0));

        let outside = Pointer { x: 5000.0, y: -5000.0, active: true };
        assert_eq!(pointer_offset(&vp, &outside), (30.0, -30.0));
    }

    #[test]
    fn zero_sized_viewport_has_no_offset() {
        let pointer = Pointer { x: 10.0, y: 10.0, active: true };
        assert_eq!(pointer_offset(&viewport(0.0, 0.0), &pointer), (0.0, 0.0));
        assert_eq!(pointer_offset(&viewport(100.0, 0.0), &pointer).1, 0.0);
    }

    #[test]
    fn blobs_stay_near_their_anchor() {
        let vp = viewport(1200.0, 900.0);
        let pointer = Pointer { x: 1200.0, y: 900.0, active: true };
        for (i, blob) in BLOBS.iter().enumerate() {
            for tick in 0..200 {
                let frame = blob.at(i, tick as f64 * 0.37, &vp, &pointer);
                let ax = blob.anchor.0 * vp.width;
                let ay = blob.anchor.1 * vp.height;
                assert!((frame.x - ax).abs() <= DRIFT + 30.0 + 1e-9);
                assert!((frame.y - ay).abs() <= DRIFT + 30.0 + 1e-9);
                assert!((frame.radius - blob.radius).abs() <= RADIUS_SWING + 1e-9);
            }
        }
    }

    #[test]
    fn radius_never_negative() {
        let blob = Blob { anchor: (0.5, 0.5), radius: 10.0, hue: 0.0, speed: 1.0 };
        let pointer = Pointer::default();
        for tick in 0..100 {
            assert!(blob.at(0, tick as f64 * 0.1, &viewport(10.0, 10.0), &pointer).radius >= 0.0);
        }
    }
}
