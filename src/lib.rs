//! Waypoint: a declarative state machine with undo/redo history
//!
//! A machine is described by plain data: an initial state name and, for each
//! state, the events it accepts and the state each event leads to. The
//! machine tracks the current state, rejects events and states the
//! configuration does not know, and records every state it enters so moves
//! can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, loadable from JSON or built in code
//! - **State machine**: `StateMachine`, the mutable runtime
//! - **History**: linear record of entered states with a cursor; a new
//!   transition after an undo discards the redo branch
//!
//! # Example
//!
//! ```rust
//! use waypoint::{MachineError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(
//!     r#"{
//!         "initial": "idle",
//!         "states": {
//!             "idle": { "transitions": { "start": "running" } },
//!             "running": { "transitions": { "pause": "paused", "stop": "idle" } },
//!             "paused": { "transitions": { "resume": "running" } }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(machine.trigger("start").unwrap(), "running");
//! assert_eq!(machine.trigger("pause").unwrap(), "paused");
//! assert!(machine.undo());
//! assert_eq!(machine.get_state(), "running");
//! assert!(matches!(
//!     machine.trigger("badEvent"),
//!     Err(MachineError::NoSuchTransition { .. })
//! ));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder, StateBuilder};
pub use crate::core::{MachineConfig, StateHistory, StateNode};
pub use machine::{MachineError, StateMachine};
