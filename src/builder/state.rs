//! Builder for a single state's transitions.

use crate::core::StateNode;

/// Builder for one state and its outbound transitions.
pub struct StateBuilder {
    name: String,
    node: StateNode,
}

impl StateBuilder {
    /// Start describing the state called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: StateNode::new(),
        }
    }

    /// Map `event` to `target`. A repeated event replaces its target.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.node = self.node.with_transition(event, target);
        self
    }

    /// Finish the state, yielding its name and transitions.
    pub fn build(self) -> (String, StateNode) {
        (self.name, self.node)
    }
}
