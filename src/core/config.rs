//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it accepts and where each one leads. It is plain data: nothing here checks
//! that transition targets are themselves declared states.

use super::table::NamedTable;
use serde::{Deserialize, Serialize};

/// Outbound transitions of a single state, keyed by event name.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateNode;
///
/// let node = StateNode::new()
///     .with_transition("start", "running")
///     .with_transition("fail", "broken");
///
/// assert_eq!(node.target("start"), Some("running"));
/// assert!(node.accepts("fail"));
/// assert!(!node.accepts("stop"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    /// Event name to target state name
    #[serde(default)]
    pub transitions: NamedTable<String>,
}

impl StateNode {
    /// Create a state with no outbound transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the target for an event.
    pub fn with_transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event, target.into());
        self
    }

    /// Target state for an event, if this state accepts it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn accepts(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Event names in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys()
    }
}

/// Complete configuration of a state machine.
///
/// Serializes to and from the document shape
/// `{"initial": ..., "states": {name: {"transitions": {event: target}}}}`,
/// keeping state and event order.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{MachineConfig, StateNode};
///
/// let config = MachineConfig::new("idle")
///     .with_state("idle", StateNode::new().with_transition("start", "running"))
///     .with_state("running", StateNode::new().with_transition("stop", "idle"));
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.state_names().collect::<Vec<_>>(), vec!["idle", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the state the machine starts in
    pub initial: String,
    /// State name to its outbound transitions
    pub states: NamedTable<StateNode>,
}

impl MachineConfig {
    /// Create a configuration with an initial state and no declared states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: NamedTable::new(),
        }
    }

    /// Declare (or replace) a state.
    pub fn with_state(mut self, name: impl Into<String>, node: StateNode) -> Self {
        self.states.insert(name, node);
        self
    }

    pub fn state(&self, name: &str) -> Option<&StateNode> {
        self.states.get(name)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// State names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys()
    }
}
