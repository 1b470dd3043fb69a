// trail/frames.rs

use bevy::prelude::Resource;

/// Ticket for one pending frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Host primitive that fires a callback on the next display refresh
pub trait FrameScheduler {
    /// Ask for one callback on the next frame
    fn schedule(&mut self) -> FrameRequest;

    /// Revoke a request that has not fired yet
    fn cancel(&mut self, request: FrameRequest);
}

/// A self-rescheduling per-frame task.
///
/// Holds at most one outstanding request. Firing the outstanding request
/// registers the next one, so the loop runs until `stop` is called.
#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameRequest>,
    frames: u64,
}

impl FrameLoop {
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of frames this loop has accepted
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Register the first frame. No-op when already running.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.pending.is_none() {
            self.pending = Some(scheduler.schedule());
        }
    }

    /// Accept a fired request. Returns false for stale or foreign requests.
    pub fn fire(&mut self, request: FrameRequest, scheduler: &mut impl FrameScheduler) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        self.frames += 1;
        self.pending = Some(scheduler.schedule());
        true
    }

    /// Cancel the outstanding registration
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(request) = self.pending.take() {
            scheduler.cancel(request);
        }
    }
}

/// Requests waiting for the next refresh. The host drains it once per frame;
/// tests drain it by hand to advance logical time.
#[derive(Resource, Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameRequest>,
}

impl FrameQueue {
    /// Requests scheduled and not yet fired or cancelled
    #[cfg(test)]
    pub fn pending(&self) -> &[FrameRequest] {
        &self.pending
    }

    /// Hand out every request due on this frame
    pub fn take_due(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending.push(request);
        request
    }

    fn cancel(&mut self, request: FrameRequest) {
        self.pending.retain(|&r| r != request);
    }
}
