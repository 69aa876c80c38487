//! Lifecycle tracking for login submissions.
//!
//! A submission moves `Idle → Pending → Settled`. Several submissions can be in
//! flight at once; each one gets a monotonically increasing generation so a late
//! response can be recognised as stale once a newer submission has started.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Observable lifecycle of the login controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// No submission has been made yet.
    Idle,
    /// At least one request is in flight.
    Pending,
    /// Every submitted request has completed.
    Settled,
}

/// How overlapping submissions are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Every response is processed; the last successful write wins.
    Concurrent,
    /// Every submission issues a request, but only the newest one's response is acted on.
    #[default]
    IgnoreStale,
    /// A submit while a request is pending is refused without touching the network.
    RejectWhilePending,
}

impl SubmitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concurrent => "concurrent",
            Self::IgnoreStale => "ignore-stale",
            Self::RejectWhilePending => "reject-while-pending",
        }
    }
}

impl fmt::Display for SubmitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(Self::Concurrent),
            "ignore-stale" | "ignore_stale" => Ok(Self::IgnoreStale),
            "reject-while-pending" | "reject_while_pending" => Ok(Self::RejectWhilePending),
            other => Err(format!(
                "unknown submit policy '{other}' (expected concurrent, ignore-stale or reject-while-pending)"
            )),
        }
    }
}

#[derive(Debug)]
struct TrackerState {
    latest: u64,
    in_flight: usize,
    state: RequestState,
}

/// Shared bookkeeping for in-flight submissions.
#[derive(Debug)]
pub struct SubmissionTracker {
    policy: SubmitPolicy,
    inner: Mutex<TrackerState>,
}

impl SubmissionTracker {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            inner: Mutex::new(TrackerState {
                latest: 0,
                in_flight: 0,
                state: RequestState::Idle,
            }),
        }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn state(&self) -> RequestState {
        self.lock().state
    }

    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        self.lock().in_flight
    }

    /// Registers a new submission.
    ///
    /// Returns `None` under [`SubmitPolicy::RejectWhilePending`] when another
    /// request is still pending. The returned guard marks the submission as
    /// finished when dropped.
    pub fn begin(&self) -> Option<Submission<'_>> {
        let mut inner = self.lock();

        if self.policy == SubmitPolicy::RejectWhilePending && inner.in_flight > 0 {
            return None;
        }

        inner.latest += 1;
        inner.in_flight += 1;
        inner.state = RequestState::Pending;

        Some(Submission {
            tracker: self,
            generation: inner.latest,
        })
    }

    fn lock(&self) -> MutexGuard<'_, TrackerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle for one in-flight submission.
#[derive(Debug)]
pub struct Submission<'a> {
    tracker: &'a SubmissionTracker,
    generation: u64,
}

impl Submission<'_> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this submission's response should still be acted on.
    ///
    /// Always true except under [`SubmitPolicy::IgnoreStale`] once a newer
    /// submission has started.
    pub fn is_current(&self) -> bool {
        self.tracker.policy != SubmitPolicy::IgnoreStale
            || self.tracker.lock().latest == self.generation
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        let mut inner = self.tracker.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        if inner.in_flight == 0 {
            inner.state = RequestState::Settled;
        }
    }
}
