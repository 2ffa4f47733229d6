//! In-memory todo store that behaves like a small, unreliable network
//! service.
//!
//! # Overview
//! [`TodoStore`] owns a process-local collection of [`Todo`] records and
//! exposes exactly four operations: [`list`](TodoStore::list),
//! [`create`](TodoStore::create), [`update`](TodoStore::update) and
//! [`delete`](TodoStore::delete). Every call first sleeps for a randomized
//! latency window, may then fail with an injected transient error, and only
//! afterwards touches the collection. The effect is a round-trip against a
//! flaky backend without any real I/O.
//!
//! # Design
//! - The handle is cheaply cloneable; clones share one collection, so any
//!   number of calls may be in flight concurrently.
//! - Latency and failure injection are configuration ([`Latency`],
//!   [`FaultPolicy`]) rather than hard-coded random draws, so tests run
//!   deterministically with [`Latency::none`] and scripted faults.
//! - Every returned record is an owned copy; store state can only change
//!   through the four operations.
//! - Two error kinds only: the retryable injected
//!   [`Unavailable`](StoreError::Unavailable) fault and the deterministic
//!   [`NotFound`](StoreError::NotFound).

pub mod error;
pub mod sim;
pub mod store;
pub mod types;

pub use error::{Operation, StoreError};
pub use sim::{FaultPolicy, Latency, DEFAULT_FAILURE_RATE, DEFAULT_JITTER_MS, DEFAULT_LATENCY_MS};
pub use store::{StoreConfig, TodoStore};
pub use types::{NewTodo, Todo, TodoPatch};
