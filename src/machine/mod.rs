//! The runtime state machine.
//!
//! `StateMachine` owns a `MachineConfig`, the current state and a
//! `StateHistory`. Transitions are validated by membership only:
//!
//! - `change_state` jumps to any declared state
//! - `trigger` follows an event declared on the current state
//! - `undo` / `redo` move along the recorded history
//!
//! All operations are synchronous and mutate the machine in place.

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
