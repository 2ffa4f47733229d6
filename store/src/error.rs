//! Error types for the todo store.
//!
//! # Design
//! Exactly two failure kinds exist. `Unavailable` is the injected
//! transient "network" fault: raised before any store logic runs and
//! always worth retrying. `NotFound` is deterministic: the record does
//! not exist and retrying cannot bring it back. They are separate
//! variants because callers route the two cases differently. `Display`
//! output is the exact user-facing message, so a UI can show it verbatim.

use std::fmt;

/// The four store operations. Selects the transient failure message and
/// tags log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Network error: failed to fetch todos",
            Operation::Create => "Network error: failed to create todo",
            Operation::Update => "Network error: failed to update todo",
            Operation::Delete => "Network error: failed to delete todo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The simulated network dropped the call before it reached the
    /// collection. Injected by the configured fault policy independently
    /// of input validity; retrying the same call can succeed.
    Unavailable(Operation),

    /// `update` or `delete` targeted an id that does not exist, either
    /// never issued or already deleted. Retrying cannot change the outcome.
    NotFound,
}

impl StoreError {
    /// Whether retrying the exact same call can possibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(op) => f.write_str(op.failure_message()),
            StoreError::NotFound => f.write_str("Todo not found"),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_displays_the_operation_message() {
        assert_eq!(
            StoreError::Unavailable(Operation::List).to_string(),
            "Network error: failed to fetch todos"
        );
        assert_eq!(
            StoreError::Unavailable(Operation::Delete).to_string(),
            "Network error: failed to delete todo"
        );
    }

    #[test]
    fn not_found_displays_verbatim() {
        assert_eq!(StoreError::NotFound.to_string(), "Todo not found");
    }

    #[test]
    fn only_unavailable_is_retryable() {
        assert!(StoreError::Unavailable(Operation::Create).is_retryable());
        assert!(!StoreError::NotFound.is_retryable());
    }
}
