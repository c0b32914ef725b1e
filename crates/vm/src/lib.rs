//! The Funge execution core — stacks, IPs, instruction dispatch, and
//! the round-robin scheduler.
//!
//! The machine is a population of instruction pointers moving over a
//! shared toroidal grid:
//! - Each IP owns a stack-of-stacks of `i64` values ([`StackStack`])
//! - The [`InstructionTable`] maps character codes to [`Op`]s and is
//!   injected into the [`Scheduler`] at construction
//! - One tick advances every live IP by exactly one instruction, in
//!   ascending-id order
//!
//! # Usage
//!
//! ```
//! use funge_common::{Cell, Vector};
//! use funge_space::ProgramSpace;
//!
//! let mut space = ProgramSpace::new();
//! for (x, ch) in "12+,@".chars().enumerate() {
//!     space.write(Vector::new(x as i64, 0), Cell::from_char(ch));
//! }
//!
//! let mut output = String::new();
//! let ticks = funge_vm::run(space, &mut output);
//! assert_eq!(ticks, 5);
//! assert_eq!(output, "\u{3}");
//! ```

pub mod error;
pub mod exec;
pub mod ip;
pub mod scheduler;
pub mod sink;
pub mod stack;
pub mod table;

pub use error::RuntimeError;
pub use exec::Outcome;
pub use ip::{Ip, IpId, IpIdGen};
pub use scheduler::Scheduler;
pub use sink::{NullSink, OutputSink};
pub use stack::{Stack, StackStack};
pub use table::{InstructionTable, Op};

use funge_space::ProgramSpace;

/// Execute `space` with the standard instruction table until every IP
/// terminates. Returns the number of ticks executed.
pub fn run(space: ProgramSpace, sink: &mut dyn OutputSink) -> u64 {
    let table = InstructionTable::standard();
    Scheduler::new(space, &table, sink).run()
}

/// Like [`run`], but gives up once `max_ticks` ticks have elapsed.
pub fn run_bounded(
    space: ProgramSpace,
    sink: &mut dyn OutputSink,
    max_ticks: u64,
) -> Result<u64, RuntimeError> {
    let table = InstructionTable::standard();
    Scheduler::new(space, &table, sink).run_bounded(max_ticks)
}
