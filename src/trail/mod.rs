mod animator;
mod config;
mod emitter;
mod frames;
mod particle;
mod scheduler;
mod sink;
mod tracker;

pub use animator::PointerTrailAnimator;
pub use config::TrailConfig;
pub use frames::FrameQueue;
pub use particle::{ParticleId, ParticleStyle};
pub use sink::VisualSink;
pub use tracker::{CursorHint, ElementKind, HoverTarget, PointerState};
