//! State machine error types.

use thiserror::Error;

/// Errors returned by state machine construction and transitions.
///
/// Every variant is an immediate failure; the machine is left exactly as it
/// was before the call.
#[derive(Debug, Error)]
pub enum MachineError {
    /// Construction was attempted without a configuration
    #[error("No configuration supplied")]
    ConfigMissing,

    /// `change_state` named a state the configuration does not declare
    #[error("State '{state}' does not exist")]
    UnknownState { state: String },

    /// `trigger` named an event the current state does not accept
    #[error("No transition for event '{event}' from state '{from}'")]
    NoSuchTransition { from: String, event: String },

    /// A configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
