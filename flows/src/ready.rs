//! Startup readiness poll.
//!
//! The backend may be cold-starting. The app probes `/ready` on a fixed
//! interval (no backoff, no jitter, no retry cap) until it answers 2xx, then
//! stops for good. Cancellation is tied to the owner's lifetime through a
//! [`CancelHandle`].

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const READY_POLL_INTERVAL: Duration = Duration::from_millis(1500);

/// What the driver should do after a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStep {
    RetryAfter(Duration),
    /// First success. Emitted at most once per poll.
    Ready,
    /// Already ready or cancelled; nothing more to do.
    Stopped,
}

#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub struct ReadinessPoll {
    interval: Duration,
    attempts: u32,
    ready: bool,
    cancel: CancelHandle,
}

impl Default for ReadinessPoll {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessPoll {
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(READY_POLL_INTERVAL)
    }

    #[must_use]
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval, attempts: 0, ready: false, cancel: CancelHandle::default() }
    }

    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Feed one probe result.
    pub fn record(&mut self, probe_ok: bool) -> PollStep {
        if self.ready || self.cancel.is_cancelled() {
            return PollStep::Stopped;
        }
        self.attempts += 1;
        if probe_ok {
            self.ready = true;
            PollStep::Ready
        } else {
            PollStep::RetryAfter(self.interval)
        }
    }
}

/// Drive `poll` until the probe succeeds or the poll is cancelled.
///
/// Returns `true` exactly once per poll: on the call that observed the first
/// success. Cancelled or already-finished polls return `false`.
pub async fn poll_until_ready<P, PF, S, SF>(poll: &mut ReadinessPoll, mut probe: P, mut sleep: S) -> bool
where
    P: FnMut() -> PF,
    PF: Future<Output = bool>,
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
{
    loop {
        if poll.ready || poll.cancel.is_cancelled() {
            return false;
        }
        let ok = probe().await;
        match poll.record(ok) {
            PollStep::Ready => return true,
            PollStep::RetryAfter(delay) => sleep(delay).await,
            PollStep::Stopped => return false,
        }
    }
}
