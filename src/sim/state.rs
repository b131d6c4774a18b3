//! Starfield state and core simulation types
//!
//! Everything the frame loop mutates lives in one `Starfield` instance; there
//! is no global state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::PointerTracker;
use crate::tuning::Tuning;
use crate::{star_count, uniform_extent};

/// Visible drawing area in CSS pixels plus the device pixel scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Device pixels per CSS pixel
    pub scale: f32,
}

impl Viewport {
    /// Build a viewport; a missing or nonsensical pixel scale falls back to 1
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            width,
            height,
            scale,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Uniform random point in `[0, width) x [0, height)`
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let x = uniform_extent(rng, self.width);
        let y = uniform_extent(rng, self.height);
        Vec2::new(x, y)
    }

    /// Whether `pos` lies more than `margin` outside the viewport
    #[inline]
    pub fn is_outside(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin
            || pos.x > self.width + margin
            || pos.y < -margin
            || pos.y > self.height + margin
    }

    /// CSS `width`/`height` declarations for the drawing element
    pub fn css_size(&self) -> [(&'static str, String); 2] {
        [
            ("width", format!("{}px", self.width)),
            ("height", format!("{}px", self.height)),
        ]
    }

    /// Size of the backing store in device pixels
    pub fn device_size(&self) -> (u32, u32) {
        let w = (self.width * self.scale).max(0.0) as u32;
        let h = (self.height * self.scale).max(0.0) as u32;
        (w, h)
    }
}

/// A star: a point in the 3D field projected to the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Closeness; higher moves faster and draws thicker
    pub z: f32,
    /// Base stroke width
    pub size: f32,
    /// Index into `Tuning::colors`
    pub color: usize,
}

impl Star {
    /// Spawn an unplaced star with random depth, size and color
    pub fn spawn<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let z = tuning.random_depth(rng);
        let size = tuning.random_size(rng);
        let color = rng.random_range(0..tuning.colors.len().max(1));
        Self {
            pos: Vec2::ZERO,
            z,
            size,
            color,
        }
    }

    /// Advance one frame: drift, expand away from `center`, move closer
    #[inline]
    pub fn advance(&mut self, velocity: &Velocity, center: Vec2) {
        self.pos += velocity.current * self.z;
        self.pos += (self.pos - center) * velocity.expansion * self.z;
        self.z += velocity.expansion;
    }
}

/// Shared drift velocity of the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Velocity applied this frame
    pub current: Vec2,
    /// Pointer-driven target the current velocity eases toward
    pub target: Vec2,
    /// Outward expansion rate (and per-frame depth increment)
    pub expansion: f32,
}

impl Velocity {
    pub fn new(expansion: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            expansion,
        }
    }

    /// Decay the target, then ease the current velocity toward it
    #[inline]
    pub fn ease(&mut self, decay: f32, easing: f32) {
        self.target *= decay;
        self.current += (self.target - self.current) * easing;
    }
}

/// The whole simulation: stars, drift, pointer tracking and the RNG
#[derive(Debug, Clone)]
pub struct Starfield<R = Pcg32> {
    pub viewport: Viewport,
    pub tuning: Tuning,
    /// Fixed-size star collection (count set at creation)
    pub stars: Vec<Star>,
    pub velocity: Velocity,
    pub pointer: PointerTracker,
    /// Frames stepped so far
    pub frame: u64,
    pub rng: R,
}

impl Starfield<Pcg32> {
    /// Create a starfield with the default tuning and a seeded RNG
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(viewport, Tuning::default(), Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Starfield<R> {
    /// Create a starfield drawing randomness from `rng`
    ///
    /// The star count is fixed here from the initial viewport.
    pub fn with_rng(viewport: Viewport, tuning: Tuning, mut rng: R) -> Self {
        let count = star_count(viewport.width, viewport.height, tuning.density_divisor);
        let mut stars: Vec<Star> = (0..count)
            .map(|_| Star::spawn(&tuning, &mut rng))
            .collect();
        for star in &mut stars {
            star.pos = viewport.random_point(&mut rng);
        }

        log::info!(
            "Starfield created: {} stars, {}x{} @{}x",
            stars.len(),
            viewport.width,
            viewport.height,
            viewport.scale
        );

        Self {
            viewport,
            velocity: Velocity::new(tuning.expansion_rate),
            tuning,
            stars,
            pointer: PointerTracker::default(),
            frame: 0,
            rng,
        }
    }

    /// Adopt a new viewport and scatter every star across it
    ///
    /// Depth, size and color are kept; the star count never changes.
    pub fn relayout(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for star in &mut self.stars {
            star.pos = viewport.random_point(&mut self.rng);
        }
        log::debug!(
            "Starfield resized to {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.scale
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_scale_fallback() {
        assert_eq!(Viewport::new(10.0, 10.0, 0.0).scale, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, f32::NAN).scale, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, -2.0).scale, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, 2.0).scale, 2.0);
    }

    #[test]
    fn test_viewport_device_size() {
        assert_eq!(Viewport::new(800.0, 600.0, 2.0).device_size(), (1600, 1200));
        assert_eq!(Viewport::new(-5.0, 0.0, 1.0).device_size(), (0, 0));
    }

    #[test]
    fn test_viewport_css_size() {
        let css = Viewport::new(1280.0, 720.5, 2.0).css_size();
        assert_eq!(css[0], ("width", "1280px".to_string()));
        assert_eq!(css[1], ("height", "720.5px".to_string()));
    }

    #[test]
    fn test_is_outside_margin() {
        let vp = Viewport::new(100.0, 100.0, 1.0);
        assert!(!vp.is_outside(Vec2::new(-50.0, 50.0), 50.0));
        assert!(vp.is_outside(Vec2::new(-50.1, 50.0), 50.0));
        assert!(!vp.is_outside(Vec2::new(150.0, 150.0), 50.0));
        assert!(vp.is_outside(Vec2::new(50.0, 150.1), 50.0));
    }

    #[test]
    fn test_new_star_count_and_placement() {
        let vp = Viewport::new(800.0, 600.0, 1.0);
        let field = Starfield::new(vp, 12345);
        // (800 + 600) / 9 = 155.6 -> 156
        assert_eq!(field.stars.len(), 156);
        for star in &field.stars {
            assert!((0.0..=800.0).contains(&star.pos.x));
            assert!((0.0..=600.0).contains(&star.pos.y));
            assert!((0.3..=1.0).contains(&star.z));
            assert!((1.0..=5.0).contains(&star.size));
            assert!(star.color < 3);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let vp = Viewport::new(640.0, 480.0, 1.0);
        let a = Starfield::new(vp, 99);
        let b = Starfield::new(vp, 99);
        assert_eq!(a.stars, b.stars);
    }

    #[test]
    fn test_relayout_keeps_count_and_attributes() {
        let mut field = Starfield::new(Viewport::new(800.0, 600.0, 1.0), 1);
        let before = field.stars.clone();

        let vp = Viewport::new(300.0, 200.0, 2.0);
        field.relayout(vp);
        field.relayout(vp);

        assert_eq!(field.stars.len(), before.len());
        assert_eq!(field.viewport, vp);
        for (star, old) in field.stars.iter().zip(&before) {
            assert!((0.0..=300.0).contains(&star.pos.x));
            assert!((0.0..=200.0).contains(&star.pos.y));
            assert_eq!(star.z, old.z);
            assert_eq!(star.size, old.size);
            assert_eq!(star.color, old.color);
        }
    }

    #[test]
    fn test_zero_viewport_places_at_origin() {
        let mut field = Starfield::new(Viewport::new(800.0, 600.0, 1.0), 3);
        field.relayout(Viewport::new(0.0, 0.0, 1.0));
        assert!(field.stars.iter().all(|s| s.pos == Vec2::ZERO));
    }

    #[test]
    fn test_velocity_ease() {
        let mut v = Velocity::new(0.0005);
        v.target = Vec2::new(10.0, -5.0);
        v.ease(0.96, 0.8);
        assert!((v.target.x - 9.6).abs() < 1e-5);
        assert!((v.current.x - 7.68).abs() < 1e-5);
        assert!((v.current.y + 3.84).abs() < 1e-5);
    }

    #[test]
    fn test_star_advance() {
        let mut v = Velocity::new(0.0005);
        v.current = Vec2::new(2.0, 0.0);
        let mut star = Star {
            pos: Vec2::new(60.0, 50.0),
            z: 0.5,
            size: 1.0,
            color: 0,
        };
        star.advance(&v, Vec2::new(50.0, 50.0));
        // x: 60 + 2*0.5 = 61; 61 + (61-50)*0.0005*0.5 = 61.00275
        assert!((star.pos.x - 61.00275).abs() < 1e-4);
        assert_eq!(star.pos.y, 50.0);
        assert!((star.z - 0.5005).abs() < 1e-6);
    }
}
