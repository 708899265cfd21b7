//! Core data types of the state machine.
//!
//! This module contains the plain data the machine is built from:
//! - Ordered name tables via `NamedTable`
//! - The declarative configuration (`MachineConfig`, `StateNode`)
//! - Visited-state history with an undo/redo cursor
//!
//! Nothing in here knows about the current state; `machine` ties it together.

mod config;
mod history;
mod table;

pub use config::{MachineConfig, StateNode};
pub use history::{HistoryEntry, StateHistory};
pub use table::NamedTable;
