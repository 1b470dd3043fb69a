// trail/sink.rs

use bevy::math::Vec2;

use super::particle::{ParticleId, ParticleStyle};

/// Capability to draw trail particles on some surface.
///
/// The trail never touches the rendering surface directly: it asks the sink
/// for a handle when a particle is born, pushes a style every frame, and gives
/// the handle back when the particle dies.
pub trait VisualSink {
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Create the on-screen representation of a new particle
    fn create(&mut self, id: ParticleId, position: Vec2) -> Self::Handle;

    /// Is the handle still backed by something on screen?
    fn is_attached(&self, handle: &Self::Handle) -> bool;

    /// Restyle a live particle
    fn update(&mut self, handle: Self::Handle, style: &ParticleStyle);

    /// Release the representation. Must tolerate already-detached handles.
    fn destroy(&mut self, handle: Self::Handle);
}

/// In-memory sink that records every call, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    next: u32,
    pub live: Vec<u32>,
    pub created: Vec<(ParticleId, Vec2)>,
    pub updates: Vec<(u32, ParticleStyle)>,
    pub destroyed: Vec<u32>,
}

#[cfg(test)]
impl RecordingSink {
    /// Simulate the surface dropping a handle behind the trail's back
    pub fn detach(&mut self, handle: u32) {
        self.live.retain(|&h| h != handle);
    }

    /// Most recent style pushed for a handle
    pub fn last_style(&self, handle: u32) -> Option<&ParticleStyle> {
        self.updates
            .iter()
            .rev()
            .find(|(h, _)| *h == handle)
            .map(|(_, style)| style)
    }
}

#[cfg(test)]
impl VisualSink for RecordingSink {
    type Handle = u32;

    fn create(&mut self, id: ParticleId, position: Vec2) -> u32 {
        let handle = self.next;
        self.next += 1;
        self.live.push(handle);
        self.created.push((id, position));
        handle
    }

    fn is_attached(&self, handle: &u32) -> bool {
        self.live.contains(handle)
    }

    fn update(&mut self, handle: u32, style: &ParticleStyle) {
        self.updates.push((handle, *style));
    }

    fn destroy(&mut self, handle: u32) {
        self.live.retain(|&h| h != handle);
        self.destroyed.push(handle);
    }
}
