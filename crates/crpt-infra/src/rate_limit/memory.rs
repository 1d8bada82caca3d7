//! In-memory fixed-window admission gate.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crpt_core::domain::RateLimitPolicy;
use crpt_core::ports::{AdmissionGate, Clock, Decision};

use crate::clock::SystemClock;

/// Point-in-time view of the gate's window bookkeeping.
///
/// `count` keeps growing past the policy maximum while callers are being
/// rejected; it is only reset when a new window opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub window_start: Option<Instant>,
    pub count: u32,
}

/// Fixed-window admission gate shared by all callers in the process.
///
/// Synchronisation is two-phase:
/// 1. The rollover check runs under a mutex guarding the window start, and
///    resets the counter when the window has expired.
/// 2. The counter is then incremented atomically *outside* that mutex and
///    compared against the maximum.
///
/// Between two resets the counter hands out each value at most once, so no
/// more than `max_requests` calls are admitted per reset. A caller that read
/// the clock before a rollover may still land its increment in the new
/// window, so the overshoot relative to wall-clock windows is bounded by the
/// number of callers racing the boundary.
///
/// Limits are per-process, not distributed across instances.
pub struct FixedWindowGate<C: Clock = SystemClock> {
    policy: RateLimitPolicy,
    window_start: Mutex<Option<Instant>>,
    count: AtomicU32,
    clock: C,
}

impl FixedWindowGate {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }
}

impl<C: Clock> FixedWindowGate<C> {
    pub fn with_clock(policy: RateLimitPolicy, clock: C) -> Self {
        Self {
            policy,
            window_start: Mutex::new(None),
            count: AtomicU32::new(0),
            clock,
        }
    }

    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        let window_start = *self
            .window_start
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        WindowSnapshot {
            window_start,
            count: self.count.load(Ordering::SeqCst),
        }
    }

    /// Open a new window if the current one has expired.
    fn roll_window(&self, now: Instant) {
        let mut start = self
            .window_start
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // A `now` captured before another caller's rollover counts as zero
        // elapsed and never reopens the window.
        let expired = match *start {
            None => true,
            Some(started) => now.saturating_duration_since(started) >= self.policy.window(),
        };

        if expired {
            *start = Some(now);
            self.count.store(0, Ordering::SeqCst);
            tracing::trace!(window = ?self.policy.window(), "Opened new rate limit window");
        }
    }
}

impl<C: Clock> AdmissionGate for FixedWindowGate<C> {
    fn try_admit(&self) -> Decision {
        let now = self.clock.now();

        self.roll_window(now);

        // Saturate instead of wrapping so an exhausted window stays exhausted.
        let previous = self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| Some(c.saturating_add(1)))
            .unwrap_or_else(|c| c);
        let n = previous.saturating_add(1);

        if n > self.policy.max_requests() {
            tracing::debug!(
                count = n,
                max_requests = self.policy.max_requests(),
                "Rate limit exceeded"
            );
            Decision::Rejected
        } else {
            Decision::Allowed
        }
    }
}
