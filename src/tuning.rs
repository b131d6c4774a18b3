//! Starfield tuning
//!
//! Every constant the simulation and render pass read, gathered in one
//! serializable record. `Tuning::default()` is the canonical look and the
//! only one the browser widget uses; JSON overrides are read by the native
//! headless runner and only need the fields they change.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::StarfieldError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// CSS colors stars pick from at creation
    pub colors: Vec<String>,
    pub min_size: f32,
    pub max_size: f32,
    /// Lower bound of the depth range for spawned / edge-recycled stars
    pub min_scale: f32,
    /// Depth for stars recycled through the center
    pub center_depth: f32,
    /// Out-of-bounds margin in pixels
    pub overflow: f32,
    pub density_divisor: f32,

    pub expansion_rate: f32,
    pub target_decay: f32,
    pub easing: f32,
    pub directional_speed: f32,

    pub pointer_divisor: f32,

    pub tail_length: f32,
    pub tail_min: f32,
    pub tail_floor: f32,
    pub alpha_min: f32,
    pub alpha_range: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            colors: STAR_COLORS.iter().map(|c| c.to_string()).collect(),
            min_size: STAR_MIN_SIZE,
            max_size: STAR_MAX_SIZE,
            min_scale: STAR_MIN_SCALE,
            center_depth: CENTER_DEPTH,
            overflow: OVERFLOW_THRESHOLD,
            density_divisor: STAR_DENSITY_DIVISOR,

            expansion_rate: EXPANSION_RATE,
            target_decay: TARGET_DECAY,
            easing: VELOCITY_EASING,
            directional_speed: DIRECTIONAL_SPEED,

            pointer_divisor: POINTER_DIVISOR,

            tail_length: TAIL_LENGTH,
            tail_min: TAIL_MIN,
            tail_floor: TAIL_FLOOR,
            alpha_min: ALPHA_MIN,
            alpha_range: ALPHA_RANGE,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON tuning record
    pub fn from_json(json: &str) -> Result<Self, StarfieldError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation can't work with
    pub fn validate(&self) -> Result<(), StarfieldError> {
        if self.colors.is_empty() {
            return Err(StarfieldError::invalid("colors", "palette is empty"));
        }

        let finite = [
            ("min_size", self.min_size),
            ("max_size", self.max_size),
            ("min_scale", self.min_scale),
            ("center_depth", self.center_depth),
            ("overflow", self.overflow),
            ("density_divisor", self.density_divisor),
            ("expansion_rate", self.expansion_rate),
            ("target_decay", self.target_decay),
            ("easing", self.easing),
            ("directional_speed", self.directional_speed),
            ("pointer_divisor", self.pointer_divisor),
            ("tail_length", self.tail_length),
            ("tail_min", self.tail_min),
            ("tail_floor", self.tail_floor),
            ("alpha_min", self.alpha_min),
            ("alpha_range", self.alpha_range),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(StarfieldError::invalid(field, "must be finite"));
            }
        }

        if self.min_size > self.max_size {
            return Err(StarfieldError::invalid(
                "min_size",
                format!("{} exceeds max_size {}", self.min_size, self.max_size),
            ));
        }
        if self.min_scale <= 0.0 || self.min_scale > 1.0 {
            return Err(StarfieldError::invalid("min_scale", "must be in (0, 1]"));
        }
        if self.center_depth <= 0.0 {
            return Err(StarfieldError::invalid("center_depth", "must be positive"));
        }
        if self.overflow < 0.0 {
            return Err(StarfieldError::invalid("overflow", "must not be negative"));
        }
        if self.expansion_rate < 0.0 {
            // Depth must never shrink between recycles
            return Err(StarfieldError::invalid("expansion_rate", "must not be negative"));
        }
        if self.density_divisor <= 0.0 {
            return Err(StarfieldError::invalid("density_divisor", "must be positive"));
        }
        if self.pointer_divisor == 0.0 {
            return Err(StarfieldError::invalid("pointer_divisor", "must not be zero"));
        }

        let unit = [
            ("target_decay", self.target_decay),
            ("easing", self.easing),
            ("alpha_min", self.alpha_min),
            ("alpha_range", self.alpha_range),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(StarfieldError::invalid(field, "must be in [0, 1]"));
            }
        }
        if self.alpha_min + self.alpha_range > 1.0 {
            return Err(StarfieldError::invalid(
                "alpha_range",
                "alpha_min + alpha_range exceeds 1",
            ));
        }
        if self.tail_min < 0.0 {
            return Err(StarfieldError::invalid("tail_min", "must not be negative"));
        }
        if self.tail_floor <= 0.0 {
            // A zero floor lets resting stars draw zero-length strokes
            return Err(StarfieldError::invalid("tail_floor", "must be positive"));
        }

        Ok(())
    }

    /// CSS color for a palette index; out-of-range indices draw white
    pub fn color(&self, index: usize) -> &str {
        self.colors
            .get(index)
            .map(String::as_str)
            .unwrap_or("#ffffff")
    }

    /// Uniform depth in `[min_scale, 1.0)`
    #[inline]
    pub fn random_depth<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min_scale + rng.random::<f32>() * (1.0 - self.min_scale)
    }

    /// Uniform base stroke width in `[min_size, max_size)`
    #[inline]
    pub fn random_size<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min_size + rng.random::<f32>() * (self.max_size - self.min_size)
    }

    /// Per-frame opacity in `[alpha_min, alpha_min + alpha_range)`
    #[inline]
    pub fn random_alpha<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.alpha_min + self.alpha_range * rng.random::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_matches_consts() {
        let t = Tuning::default();
        assert_eq!(t.colors.len(), 3);
        assert_eq!(t.overflow, 50.0);
        assert_eq!(t.expansion_rate, 0.0005);
        assert_eq!(t.target_decay, 0.96);
        assert_eq!(t.easing, 0.8);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_override() {
        let t = Tuning::from_json(r#"{ "overflow": 80.0, "colors": ["red"] }"#).unwrap();
        assert_eq!(t.overflow, 80.0);
        assert_eq!(t.colors, vec!["red".to_string()]);
        // Untouched fields keep their defaults
        assert_eq!(t.min_scale, STAR_MIN_SCALE);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "min_size": 6.0 }"#).unwrap_err();
        assert!(matches!(err, StarfieldError::TuningInvalid { field: "min_size", .. }));

        let err = Tuning::from_json(r#"{ "colors": [] }"#).unwrap_err();
        assert!(matches!(err, StarfieldError::TuningInvalid { field: "colors", .. }));

        let err = Tuning::from_json(r#"{ "min_scale": 0.0 }"#).unwrap_err();
        assert!(matches!(err, StarfieldError::TuningInvalid { field: "min_scale", .. }));

        let err = Tuning::from_json(r#"{ "tail_floor": 0.0 }"#).unwrap_err();
        assert!(matches!(err, StarfieldError::TuningInvalid { field: "tail_floor", .. }));

        let err = Tuning::from_json(r#"{ "tail_min": -0.1 }"#).unwrap_err();
        assert!(matches!(err, StarfieldError::TuningInvalid { field: "tail_min", .. }));

        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StarfieldError::TuningParse(_)));
    }

    #[test]
    fn test_rejects_out_of_unit_factors() {
        for json in [
            r#"{ "easing": 1.5 }"#,
            r#"{ "target_decay": -0.1 }"#,
            r#"{ "alpha_min": 2.0 }"#,
            r#"{ "alpha_range": -0.5 }"#,
        ] {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(matches!(err, StarfieldError::TuningInvalid { .. }), "{json}");
        }

        let err = Tuning::from_json(r#"{ "alpha_min": 0.8, "alpha_range": 0.5 }"#).unwrap_err();
        assert!(matches!(err, StarfieldError::TuningInvalid { field: "alpha_range", .. }));
    }

    #[test]
    fn test_color_lookup() {
        let t = Tuning::default();
        assert_eq!(t.color(0), "#ffffff");
        assert_eq!(t.color(1), "#ffe9c4");
        assert_eq!(t.color(2), "#d4fbff");
        assert_eq!(t.color(7), "#ffffff");
    }

    #[test]
    fn test_random_ranges() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let z = t.random_depth(&mut rng);
            assert!((0.3..=1.0).contains(&z));
            let size = t.random_size(&mut rng);
            assert!((1.0..=5.0).contains(&size));
            let alpha = t.random_alpha(&mut rng);
            assert!((0.5..=1.0).contains(&alpha));
        }
    }
}
