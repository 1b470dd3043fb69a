// trail/config.rs

use bevy::math::Vec2;
use bevy::prelude::Resource;
use serde::Deserialize;

const TRAIL_JSON: &str = include_str!("../../assets/trail.json");

/// Tuning for the pointer trail, loaded from `assets/trail.json`
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Minimum pointer displacement (logical px) between two emissions
    pub emission_threshold: f32,
    /// Opacity lost per frame
    pub opacity_step: f32,
    /// Scale lost per frame
    pub scale_step: f32,
    /// Diameter of a fresh particle (px)
    pub particle_size: f32,
    /// Glow blur radius at scale 1.0 (px)
    pub glow_blur: f32,
    /// Glow spread at scale 1.0 (px)
    pub glow_spread: f32,
    /// Glow alpha at opacity 1.0
    pub glow_alpha: f32,
    /// Where the pointer is parked once it leaves the window
    #[serde(with = "vec2_array")]
    pub offscreen: Vec2,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            emission_threshold: 5.0,
            opacity_step: 0.02,
            scale_step: 0.01,
            particle_size: 8.0,
            glow_blur: 8.0,
            glow_spread: 4.0,
            glow_alpha: 0.6,
            offscreen: Vec2::new(-100.0, -100.0),
        }
    }
}

impl TrailConfig {
    /// Load the embedded trail tuning
    pub fn load() -> Result<Self, String> {
        Self::from_json(TRAIL_JSON)
    }

    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: TrailConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid trail config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.emission_threshold >= 0.0) {
            return Err(format!(
                "emission_threshold must be >= 0, got {}",
                self.emission_threshold
            ));
        }
        if !(self.opacity_step > 0.0) {
            return Err(format!("opacity_step must be > 0, got {}", self.opacity_step));
        }
        if !(self.scale_step >= 0.0) {
            return Err(format!("scale_step must be >= 0, got {}", self.scale_step));
        }
        if !(self.particle_size > 0.0) {
            return Err(format!(
                "particle_size must be > 0, got {}",
                self.particle_size
            ));
        }
        if !(0.0..=1.0).contains(&self.glow_alpha) {
            return Err(format!(
                "glow_alpha must be within [0, 1], got {}",
                self.glow_alpha
            ));
        }
        Ok(())
    }

    /// Frames a particle stays on screen before its opacity reaches zero
    pub fn lifetime_frames(&self) -> u32 {
        (1.0 / self.opacity_step).round() as u32
    }
}

mod vec2_array {
    use bevy::math::Vec2;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f32; 2]>::deserialize(deserializer)?;
        Ok(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = TrailConfig::load().expect("embedded trail.json should parse");
        assert_eq!(config, TrailConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TrailConfig::from_json(r#"{ "emission_threshold": 12.0 }"#).unwrap();
        assert_eq!(config.emission_threshold, 12.0);
        assert_eq!(config.opacity_step, 0.02);
        assert_eq!(config.offscreen, Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn test_offscreen_parses_from_array() {
        let config = TrailConfig::from_json(r#"{ "offscreen": [-1.0, -2.0] }"#).unwrap();
        assert_eq!(config.offscreen, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_rejects_non_positive_opacity_step() {
        let err = TrailConfig::from_json(r#"{ "opacity_step": 0.0 }"#).unwrap_err();
        assert!(err.contains("opacity_step"));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let err = TrailConfig::from_json(r#"{ "emission_threshold": -1.0 }"#).unwrap_err();
        assert!(err.contains("emission_threshold"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = TrailConfig::from_json("{ not json").unwrap_err();
        assert!(err.starts_with("Invalid trail config"));
    }

    #[test]
    fn test_lifetime_frames() {
        assert_eq!(TrailConfig::default().lifetime_frames(), 50);
    }
}
