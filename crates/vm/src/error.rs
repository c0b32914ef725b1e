//! Runtime errors for the scheduler.
//!
//! Instruction dispatch itself is total — stack underflow yields zero,
//! division by zero yields zero, unknown characters are no-ops — so
//! the only runtime error is an exhausted external tick budget.

use thiserror::Error;

/// Errors from bounded execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `run_bounded` reached its tick budget with IPs still live.
    #[error("tick budget of {limit} exhausted with {live} IP(s) still live")]
    TickBudgetExhausted { limit: u64, live: usize },
}
