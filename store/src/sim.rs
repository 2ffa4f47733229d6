//! Simulated network behavior: the artificial latency window and the
//! injected-failure policy.
//!
//! # Design
//! Both knobs are plain data instead of inline random draws so tests can
//! force deterministic outcomes: [`Latency::none`] removes the delay, and
//! [`FaultPolicy::Never`] / [`Always`](FaultPolicy::Always) /
//! [`Script`](FaultPolicy::Script) pin the failure decision per call.
//! `FaultInjector` is the store-internal evaluator; script progress sits
//! behind an atomic cursor so cloned store handles consume one shared
//! sequence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rand::Rng;

/// Default probability that any single call fails.
pub const DEFAULT_FAILURE_RATE: f64 = 0.08;

/// Default base delay before every call, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 600;

/// Default upper bound on the extra random delay, in milliseconds.
pub const DEFAULT_JITTER_MS: u64 = 400;

/// Artificial delay window applied before every operation.
///
/// Each call sleeps for a duration drawn uniformly from
/// `base ..= base + jitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    base: Duration,
    jitter: Duration,
}

impl Latency {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// No artificial delay at all. Intended for tests.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Draw one delay from the window.
    pub(crate) fn sample(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.base;
        }
        let extra = rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64);
        self.base + Duration::from_millis(extra)
    }
}

impl Default for Latency {
    /// The default 600-1000 ms window.
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_LATENCY_MS),
            Duration::from_millis(DEFAULT_JITTER_MS),
        )
    }
}

/// Decides, call by call, whether the simulated network drops a request.
///
/// Evaluated after the latency delay and before any store logic, so an
/// injected failure never observes or mutates the collection.
#[derive(Debug, Clone)]
pub enum FaultPolicy {
    /// Never inject a failure.
    Never,
    /// Fail every call.
    Always,
    /// Fail each call independently with this probability. Values outside
    /// `0.0..=1.0` are clamped when the store is built, and a NaN rate
    /// counts as zero.
    Random(f64),
    /// Follow a fixed per-call script (`true` = fail). Once the script is
    /// exhausted, no further failures are injected.
    Script(Vec<bool>),
}

impl Default for FaultPolicy {
    fn default() -> Self {
        FaultPolicy::Random(DEFAULT_FAILURE_RATE)
    }
}

/// Stateful evaluator for a [`FaultPolicy`].
#[derive(Debug)]
pub(crate) struct FaultInjector {
    policy: FaultPolicy,
    cursor: AtomicUsize,
}

impl FaultInjector {
    pub(crate) fn new(policy: FaultPolicy) -> Self {
        let policy = match policy {
            // `clamp` passes NaN through, and `gen_bool` panics on it.
            FaultPolicy::Random(p) if p.is_nan() => FaultPolicy::Random(0.0),
            FaultPolicy::Random(p) => FaultPolicy::Random(p.clamp(0.0, 1.0)),
            other => other,
        };
        Self {
            policy,
            cursor: AtomicUsize::new(0),
        }
    }

    pub(crate) fn should_fail(&self) -> bool {
        match &self.policy {
            FaultPolicy::Never => false,
            FaultPolicy::Always => true,
            FaultPolicy::Random(p) => rand::thread_rng().gen_bool(*p),
            FaultPolicy::Script(outcomes) => {
                let i = self.cursor.fetch_add(1, Ordering::Relaxed);
                outcomes.get(i).copied().unwrap_or(false)
            }
        }
    }
}
