//! The in-memory store and its four operations.
//!
//! # Design
//! `TodoStore` is a cheaply cloneable handle: all clones share one
//! collection behind `Arc<RwLock<..>>`, so any number of calls may be in
//! flight at once. Every operation runs the same prologue (sleep for the
//! sampled latency, then consult the fault policy) before touching the
//! collection. The delay runs outside the lock and the actual read or
//! splice happens in one uninterrupted critical section, so overlapping
//! mutations to the same id are last-write-wins rather than torn.
//! Everything returned is an owned copy; callers can never reach into
//! shared state through a result.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, trace, warn};

use crate::error::{Operation, StoreError};
use crate::sim::{FaultInjector, FaultPolicy, Latency};
use crate::types::{NewTodo, Todo, TodoPatch};

/// Tuning knobs for the simulated backend.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub latency: Latency,
    pub faults: FaultPolicy,
}

impl StoreConfig {
    /// Zero latency and no injected failures. Tests use this unless they
    /// exercise the simulation itself.
    pub fn reliable() -> Self {
        StoreConfig {
            latency: Latency::none(),
            faults: FaultPolicy::Never,
        }
    }
}

/// Collection contents plus the id counter: everything the lock guards.
#[derive(Debug)]
struct State {
    todos: Vec<Todo>,
    next_id: u64,
}

/// In-memory todo collection behind a simulated flaky network.
///
/// Cloning the handle is cheap and every clone operates on the same
/// collection. See the module docs for the shared operation contract.
#[derive(Debug, Clone)]
pub struct TodoStore {
    state: Arc<RwLock<State>>,
    faults: Arc<FaultInjector>,
    latency: Latency,
}

impl TodoStore {
    /// Empty store; the first created record gets id 1.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_todos(Vec::new(), config)
    }

    /// Store pre-seeded with the three fixed sample records (ids 1-3);
    /// the next created record gets id 4.
    pub fn with_sample_todos(config: StoreConfig) -> Self {
        Self::with_todos(sample_todos(Utc::now()), config)
    }

    fn with_todos(todos: Vec<Todo>, config: StoreConfig) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        TodoStore {
            state: Arc::new(RwLock::new(State { todos, next_id })),
            faults: Arc::new(FaultInjector::new(config.faults)),
            latency: config.latency,
        }
    }

    /// All records, as copies, in current collection order.
    pub async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        self.simulate_call(Operation::List).await?;
        let state = self.state.read().await;
        Ok(state.todos.clone())
    }

    /// Create a record from `input` and insert it at the front of the
    /// collection (newest first).
    ///
    /// No validation happens here: an empty title is accepted, rejecting
    /// it is the caller's job.
    pub async fn create(&self, input: NewTodo) -> Result<Todo, StoreError> {
        self.simulate_call(Operation::Create).await?;
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id,
            title: input.title,
            description: input.description,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        state.todos.insert(0, todo.clone());
        debug!(id, "created todo");
        Ok(todo)
    }

    /// Merge `patch` into the record with this `id`, refresh its
    /// `updated_at`, and write it back in place (ordering unchanged).
    pub async fn update(&self, id: u64, patch: TodoPatch) -> Result<Todo, StoreError> {
        self.simulate_call(Operation::Update).await?;
        let mut state = self.state.write().await;
        let slot = state
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        let mut merged = slot.merged(patch);
        merged.updated_at = Utc::now();
        *slot = merged.clone();
        debug!(id, "updated todo");
        Ok(merged)
    }

    /// Remove the record with this `id` permanently.
    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        self.simulate_call(Operation::Delete).await?;
        let mut state = self.state.write().await;
        let index = state
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        state.todos.remove(index);
        debug!(id, "deleted todo");
        Ok(())
    }

    /// Shared prologue: sampled delay, then the fault check. Runs before
    /// the collection lock is taken, so a slow call never blocks others.
    async fn simulate_call(&self, op: Operation) -> Result<(), StoreError> {
        let delay = self.latency.sample();
        if !delay.is_zero() {
            trace!(%op, delay_ms = delay.as_millis() as u64, "simulated latency");
            tokio::time::sleep(delay).await;
        }
        if self.faults.should_fail() {
            warn!(%op, "injected network failure");
            return Err(StoreError::Unavailable(op));
        }
        Ok(())
    }
}

/// The three records every seeded store starts with.
fn sample_todos(now: DateTime<Utc>) -> Vec<Todo> {
    let seed = |id, title: &str, description: &str, completed| Todo {
        id,
        title: title.to_string(),
        description: description.to_string(),
        completed,
        created_at: now,
        updated_at: now,
    };
    vec![
        seed(1, "Buy groceries", "Milk, eggs, bread", false),
        seed(2, "Read a chapter", "Finish chapter 7 of the book", false),
        seed(3, "Pay bills", "Electricity & internet", true),
    ]
}
