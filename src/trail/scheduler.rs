// trail/scheduler.rs

use super::particle::{GlowProfile, Particle, ParticleId, ParticlePhase};
use super::sink::VisualSink;

/// Live particles in emission order
#[derive(Debug)]
pub struct ParticleSet<H> {
    particles: Vec<Particle<H>>,
}

impl<H> Default for ParticleSet<H> {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
        }
    }
}

impl<H> ParticleSet<H> {
    pub fn push(&mut self, particle: Particle<H>) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: ParticleId) -> Option<&Particle<H>> {
        self.particles.iter().find(|p| p.id == id)
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<ParticleId> {
        self.particles.iter().map(|p| p.id).collect()
    }
}

/// Per-frame decay of the particle set
#[derive(Debug, Clone, Copy)]
pub struct ParticleScheduler {
    pub opacity_step: f32,
    pub scale_step: f32,
    pub glow: GlowProfile,
}

impl ParticleScheduler {
    /// Age every particle by one frame and evict the dead ones.
    ///
    /// Returns how many particles were removed.
    pub fn tick<S: VisualSink>(&self, set: &mut ParticleSet<S::Handle>, sink: &mut S) -> usize {
        if set.is_empty() {
            return 0;
        }

        let before = set.len();
        set.particles.retain_mut(|particle| {
            particle.decay(self.opacity_step, self.scale_step);

            let attached = particle
                .handle
                .as_ref()
                .is_some_and(|handle| sink.is_attached(handle));

            if particle.is_faded() || !attached {
                release(particle, sink);
                return false;
            }

            if let Some(handle) = particle.handle {
                sink.update(handle, &self.glow.style_for(particle));
            }
            true
        });

        before - set.len()
    }

    /// Release every particle regardless of its state
    pub fn release_all<S: VisualSink>(&self, set: &mut ParticleSet<S::Handle>, sink: &mut S) -> usize {
        let count = set.len();
        for mut particle in set.particles.drain(..) {
            release(&mut particle, sink);
        }
        count
    }
}

fn release<S: VisualSink>(particle: &mut Particle<S::Handle>, sink: &mut S) {
    if let Some(handle) = particle.handle.take() {
        sink.destroy(handle);
    }
    particle.phase = ParticlePhase::Removed;
    log::trace!("released particle {}", particle.id);
}
