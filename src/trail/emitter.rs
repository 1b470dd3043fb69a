// trail/emitter.rs

use bevy::math::Vec2;

use super::particle::{Particle, ParticleId};
use super::sink::VisualSink;

/// Spawns particles along the pointer path, one per `threshold` px travelled
#[derive(Debug)]
pub struct ParticleEmitter {
    threshold: f32,
    next_id: u64,
    last_emission: Vec2,
}

impl ParticleEmitter {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            next_id: 0,
            last_emission: Vec2::ZERO,
        }
    }

    /// Position of the most recent emission (origin before the first one)
    #[cfg(test)]
    pub fn last_emission(&self) -> Vec2 {
        self.last_emission
    }

    /// Id the next particle will get
    #[cfg(test)]
    pub fn next_id(&self) -> ParticleId {
        ParticleId(self.next_id)
    }

    /// Emit a particle at `position` if the pointer travelled far enough
    pub fn try_emit<S: VisualSink>(
        &mut self,
        position: Vec2,
        sink: &mut S,
    ) -> Option<Particle<S::Handle>> {
        let displacement = position.distance(self.last_emission);
        if displacement < self.threshold {
            return None;
        }

        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.last_emission = position;

        let handle = sink.create(id, position);
        log::trace!("emitted particle {} at {:?}", id, position);

        Some(Particle::new(id, position, handle))
    }
}
