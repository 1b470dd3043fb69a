// trail/animator.rs

use bevy::math::Vec2;

use super::config::TrailConfig;
use super::emitter::ParticleEmitter;
use super::frames::{FrameLoop, FrameRequest, FrameScheduler};
use super::particle::{GlowProfile, ParticleId};
use super::scheduler::{ParticleScheduler, ParticleSet};
use super::sink::VisualSink;
use super::tracker::{
    ClickableTarget, HoverTarget, InteractivePredicate, PointerState, PointerTracker,
};

/// Pointer tracker, particle emitter and frame-driven decay behind one owner.
///
/// Nothing is global: every instance has its own id counter, last-emission
/// cache and particle set, and `unmount` leaves no handle behind.
pub struct PointerTrailAnimator<H, P = ClickableTarget> {
    tracker: PointerTracker<P>,
    emitter: ParticleEmitter,
    scheduler: ParticleScheduler,
    particles: ParticleSet<H>,
    frame_loop: FrameLoop,
    mounted: bool,
}

impl<H: Copy + Eq + std::fmt::Debug> PointerTrailAnimator<H, ClickableTarget> {
    pub fn new(config: &TrailConfig) -> Self {
        Self::with_predicate(config, ClickableTarget)
    }
}

impl<H, P> PointerTrailAnimator<H, P>
where
    H: Copy + Eq + std::fmt::Debug,
    P: InteractivePredicate,
{
    /// Build an animator with a custom "is this clickable?" rule
    pub fn with_predicate(config: &TrailConfig, predicate: P) -> Self {
        Self {
            tracker: PointerTracker::new(config.offscreen, predicate),
            emitter: ParticleEmitter::new(config.emission_threshold),
            scheduler: ParticleScheduler {
                opacity_step: config.opacity_step,
                scale_step: config.scale_step,
                glow: GlowProfile {
                    size: config.particle_size,
                    blur: config.glow_blur,
                    spread: config.glow_spread,
                    alpha: config.glow_alpha,
                },
            },
            particles: ParticleSet::default(),
            frame_loop: FrameLoop::default(),
            mounted: false,
        }
    }

    // === Query Methods ===

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn pointer(&self) -> &PointerState {
        self.tracker.state()
    }

    pub fn particles(&self) -> &ParticleSet<H> {
        &self.particles
    }

    #[cfg(test)]
    pub fn last_emission(&self) -> Vec2 {
        self.emitter.last_emission()
    }

    /// Frames processed since the first mount
    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    // === Lifecycle ===

    /// Start the frame loop. Idempotent.
    pub fn mount(&mut self, frames: &mut impl FrameScheduler) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.frame_loop.start(frames);
        log::debug!("pointer trail mounted");
    }

    /// Stop the frame loop and release every particle
    pub fn unmount<S>(&mut self, frames: &mut impl FrameScheduler, sink: &mut S)
    where
        S: VisualSink<Handle = H>,
    {
        self.frame_loop.stop(frames);
        let released = self.scheduler.release_all(&mut self.particles, sink);
        if self.mounted {
            log::debug!("pointer trail unmounted, released {} particles", released);
        }
        self.mounted = false;
    }

    // === Input ===

    /// Handle a pointer move. Returns the id of the emitted particle, if any.
    pub fn pointer_moved<S>(
        &mut self,
        position: Vec2,
        target: Option<&HoverTarget>,
        sink: &mut S,
    ) -> Option<ParticleId>
    where
        S: VisualSink<Handle = H>,
    {
        self.tracker.pointer_moved(position, target);

        if !self.mounted {
            return None;
        }

        let particle = self.emitter.try_emit(position, sink)?;
        let id = particle.id;
        self.particles.push(particle);
        Some(id)
    }

    /// The pointer left the tracked surface
    pub fn pointer_left(&mut self) {
        self.tracker.pointer_left();
    }

    // === Frames ===

    /// Run one decay pass if `request` is the loop's current registration.
    ///
    /// Returns the number of particles removed, or `None` for a stale request.
    pub fn frame<S>(
        &mut self,
        request: FrameRequest,
        frames: &mut impl FrameScheduler,
        sink: &mut S,
    ) -> Option<usize>
    where
        S: VisualSink<Handle = H>,
    {
        if !self.frame_loop.fire(request, frames) {
            return None;
        }
        Some(self.scheduler.tick(&mut self.particles, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::frames::FrameQueue;
    use crate::trail::particle::ParticlePhase;
    use crate::trail::sink::RecordingSink;
    use crate::trail::tracker::ElementKind;

    struct Harness {
        animator: PointerTrailAnimator<u32>,
        frames: FrameQueue,
        sink: RecordingSink,
    }

    impl Harness {
        fn mounted() -> Self {
            let mut harness = Harness {
                animator: PointerTrailAnimator::new(&TrailConfig::default()),
                frames: FrameQueue::default(),
                sink: RecordingSink::default(),
            };
            harness.animator.mount(&mut harness.frames);
            harness
        }

        fn move_to(&mut self, x: f32, y: f32) -> Option<ParticleId> {
            self.animator
                .pointer_moved(Vec2::new(x, y), None, &mut self.sink)
        }

        /// Advance `n` display frames
        fn advance(&mut self, n: usize) {
            for _ in 0..n {
                for request in self.frames.take_due() {
                    self.animator.frame(request, &mut self.frames, &mut self.sink);
                }
            }
        }

        fn unmount(&mut self) {
            self.animator.unmount(&mut self.frames, &mut self.sink);
        }
    }

    #[test]
    fn test_end_to_end_emission_scenario() {
        let mut h = Harness::mounted();

        assert_eq!(h.move_to(10.0, 0.0), Some(ParticleId(0)));
        let first = h.animator.particles().get(ParticleId(0)).unwrap();
        assert_eq!(first.origin, Vec2::new(10.0, 0.0));

        assert_eq!(h.move_to(10.0, 0.0), None);
        assert_eq!(h.animator.particles().len(), 1);

        assert_eq!(h.move_to(20.0, 0.0), Some(ParticleId(1)));
        assert_eq!(h.animator.last_emission(), Vec2::new(20.0, 0.0));
        assert_eq!(h.animator.particles().len(), 2);
    }

    #[test]
    fn test_particle_gone_at_tick_fifty() {
        let mut h = Harness::mounted();
        h.move_to(10.0, 0.0);

        h.advance(49);
        let particle = h.animator.particles().get(ParticleId(0)).unwrap();
        assert!(particle.opacity > 0.0);
        assert_eq!(particle.phase, ParticlePhase::Decaying);

        h.advance(1);
        assert!(h.animator.particles().is_empty());
        assert_eq!(h.sink.destroyed.len(), 1);
    }

    #[test]
    fn test_sub_threshold_moves_never_emit() {
        let mut h = Harness::mounted();
        for i in 0..100 {
            let wobble = (i % 4) as f32;
            h.move_to(wobble, 4.0 - wobble);
            h.advance(1);
        }
        assert!(h.sink.created.is_empty());
        assert!(h.animator.particles().is_empty());
    }

    #[test]
    fn test_steady_state_is_bounded() {
        let mut h = Harness::mounted();
        let lifetime = TrailConfig::default().lifetime_frames() as usize;

        let mut peak = 0;
        for i in 0..500 {
            // One qualifying move per frame
            h.move_to(i as f32 * 6.0 + 6.0, 0.0);
            h.advance(1);
            peak = peak.max(h.animator.particles().len());
        }

        assert!(peak <= lifetime);
        assert_eq!(h.animator.particles().len(), lifetime - 1);
    }

    #[test]
    fn test_unmount_releases_everything() {
        let mut h = Harness::mounted();
        for i in 1..=20 {
            h.move_to(i as f32 * 10.0, 0.0);
        }
        h.advance(3);
        assert_eq!(h.animator.particles().len(), 20);

        h.unmount();
        assert!(h.animator.particles().is_empty());
        assert!(h.sink.live.is_empty());
        assert_eq!(h.sink.destroyed.len(), 20);
        assert!(h.frames.pending().is_empty());
        assert!(!h.animator.is_mounted());
    }

    #[test]
    fn test_no_frames_after_unmount() {
        let mut h = Harness::mounted();
        let stale = h.frames.pending()[0];
        h.unmount();

        assert_eq!(h.animator.frame(stale, &mut h.frames, &mut h.sink), None);
        h.advance(10);
        assert_eq!(h.animator.frames(), 0);
    }

    #[test]
    fn test_unmounted_animator_tracks_but_does_not_emit() {
        let mut animator = PointerTrailAnimator::<u32>::new(&TrailConfig::default());
        let mut sink = RecordingSink::default();

        assert_eq!(animator.pointer_moved(Vec2::new(50.0, 50.0), None, &mut sink), None);
        assert_eq!(animator.pointer().position, Vec2::new(50.0, 50.0));
        assert!(sink.created.is_empty());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut h = Harness::mounted();
        h.animator.mount(&mut h.frames);
        assert_eq!(h.frames.pending().len(), 1);
    }

    #[test]
    fn test_pointer_leave_keeps_particles() {
        let mut h = Harness::mounted();
        let button = HoverTarget::new(ElementKind::Button);
        h.animator
            .pointer_moved(Vec2::new(30.0, 40.0), Some(&button), &mut h.sink);
        assert!(h.animator.pointer().over_interactive);

        h.animator.pointer_left();
        assert_eq!(h.animator.pointer().position, Vec2::new(-100.0, -100.0));
        assert_eq!(h.animator.particles().len(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Harness::mounted();
        let mut b = Harness::mounted();

        a.move_to(10.0, 0.0);
        a.move_to(20.0, 0.0);
        assert_eq!(b.move_to(10.0, 0.0), Some(ParticleId(0)));
    }
}
