// trail/particle.rs

use bevy::math::Vec2;
use std::fmt;

/// Opacity values closer to zero than this count as fully faded.
/// Repeated `f32` subtraction leaves a little noise around zero.
pub const FADE_EPSILON: f32 = 1e-4;

/// Identity of a trail particle, sequential per animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a particle. Transitions are one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticlePhase {
    /// Emitted, not yet seen by the scheduler
    Spawned,
    /// Fading a little every frame
    Decaying,
    /// Handle released, no longer part of the set
    Removed,
}

/// One point along the recent pointer path
#[derive(Debug, Clone)]
pub struct Particle<H> {
    pub id: ParticleId,
    /// Where the pointer was when the particle was emitted
    pub origin: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub phase: ParticlePhase,
    /// On-screen representation; `None` once released
    pub handle: Option<H>,
}

impl<H> Particle<H> {
    pub fn new(id: ParticleId, origin: Vec2, handle: H) -> Self {
        Self {
            id,
            origin,
            opacity: 1.0,
            scale: 1.0,
            phase: ParticlePhase::Spawned,
            handle: Some(handle),
        }
    }

    /// Apply one frame of decay
    pub fn decay(&mut self, opacity_step: f32, scale_step: f32) {
        self.opacity -= opacity_step;
        self.scale -= scale_step;
        if self.phase == ParticlePhase::Spawned {
            self.phase = ParticlePhase::Decaying;
        }
    }

    /// Has the particle faded out completely?
    pub fn is_faded(&self) -> bool {
        self.opacity <= FADE_EPSILON
    }
}

/// Visual projection of a particle, recomputed every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    /// Screen position of the particle's centre
    pub center: Vec2,
    /// Diameter in logical px
    pub size: f32,
    pub opacity: f32,
    pub glow_blur: f32,
    pub glow_spread: f32,
    pub glow_alpha: f32,
}

/// Base dimensions the style is scaled from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowProfile {
    pub size: f32,
    pub blur: f32,
    pub spread: f32,
    pub alpha: f32,
}

impl GlowProfile {
    /// Glow radius and spread follow scale; glow alpha follows opacity
    pub fn style_for<H>(&self, particle: &Particle<H>) -> ParticleStyle {
        let scale = particle.scale.clamp(0.0, 1.0);
        let opacity = particle.opacity.clamp(0.0, 1.0);

        ParticleStyle {
            center: particle.origin,
            size: self.size * scale,
            opacity,
            glow_blur: self.blur * scale,
            glow_spread: self.spread * scale,
            glow_alpha: self.alpha * opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glow() -> GlowProfile {
        GlowProfile {
            size: 8.0,
            blur: 8.0,
            spread: 4.0,
            alpha: 0.6,
        }
    }

    #[test]
    fn test_new_particle_is_fresh() {
        let particle = Particle::new(ParticleId(3), Vec2::new(1.0, 2.0), ());
        assert_eq!(particle.opacity, 1.0);
        assert_eq!(particle.scale, 1.0);
        assert_eq!(particle.phase, ParticlePhase::Spawned);
        assert!(particle.handle.is_some());
    }

    #[test]
    fn test_decay_moves_to_decaying() {
        let mut particle = Particle::new(ParticleId(0), Vec2::ZERO, ());
        particle.decay(0.02, 0.01);

        assert_eq!(particle.phase, ParticlePhase::Decaying);
        assert!((particle.opacity - 0.98).abs() < 1e-6);
        assert!((particle.scale - 0.99).abs() < 1e-6);
    }

    #[test]
    fn test_fifty_steps_fade_out() {
        let mut particle = Particle::new(ParticleId(0), Vec2::ZERO, ());
        for _ in 0..49 {
            particle.decay(0.02, 0.01);
            assert!(!particle.is_faded());
        }
        particle.decay(0.02, 0.01);
        assert!(particle.is_faded());
    }

    #[test]
    fn test_style_scales_glow_with_particle() {
        let mut particle = Particle::new(ParticleId(0), Vec2::new(40.0, 30.0), ());
        particle.opacity = 0.5;
        particle.scale = 0.75;

        let style = glow().style_for(&particle);
        assert_eq!(style.center, Vec2::new(40.0, 30.0));
        assert!((style.size - 6.0).abs() < 1e-6);
        assert!((style.glow_blur - 6.0).abs() < 1e-6);
        assert!((style.glow_spread - 3.0).abs() < 1e-6);
        assert!((style.glow_alpha - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_style_never_goes_negative() {
        let mut particle = Particle::new(ParticleId(0), Vec2::ZERO, ());
        particle.opacity = -0.01;
        particle.scale = -0.5;

        let style = glow().style_for(&particle);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.size, 0.0);
        assert_eq!(style.glow_alpha, 0.0);
    }
}
