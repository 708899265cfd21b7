//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{MachineConfig, NamedTable, StateNode};

/// Builder for constructing machine configurations with a fluent API.
pub struct ConfigBuilder {
    initial: Option<String>,
    states: NamedTable<StateNode>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: NamedTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state using a builder.
    /// A state added twice keeps its first position; its transitions are merged.
    pub fn state(mut self, builder: StateBuilder) -> Self {
        let (name, node) = builder.build();
        let existing = self.states.get_or_insert_with(&name, StateNode::new);
        for (event, target) in node.transitions.iter() {
            existing.transitions.insert(event, target.clone());
        }
        self
    }

    /// Add a single transition, declaring `from` if it is new.
    /// `to` is not declared as a state.
    pub fn transition(
        mut self,
        from: &str,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .get_or_insert_with(from, StateNode::new)
            .transitions
            .insert(event, to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StateMachine;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::new().state(StateBuilder::new("a")).build();

        assert_eq!(result, Err(BuildError::MissingInitialState));
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::new()
            .initial("idle")
            .state(StateBuilder::new("idle").on("start", "running"))
            .state(StateBuilder::new("running").on("stop", "idle"))
            .build()
            .unwrap();

        assert_eq!(config.initial, "idle");
        assert_eq!(config.state_names().collect::<Vec<_>>(), vec!["idle", "running"]);

        let machine = StateMachine::new(config);
        assert_eq!(machine.get_state(), "idle");
    }

    #[test]
    fn repeated_state_merges_transitions() {
        let config = ConfigBuilder::new()
            .initial("a")
            .state(StateBuilder::new("a").on("x", "b").on("y", "b"))
            .state(StateBuilder::new("b"))
            .state(StateBuilder::new("a").on("y", "c").on("z", "c"))
            .build()
            .unwrap();

        assert_eq!(config.state_names().collect::<Vec<_>>(), vec!["a", "b"]);
        let a = config.state("a").unwrap();
        assert_eq!(a.events().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(a.target("y"), Some("c"));
    }

    #[test]
    fn transition_declares_source_only() {
        let config = ConfigBuilder::new()
            .initial("a")
            .transition("a", "go", "b")
            .transition("a", "stay", "a")
            .build()
            .unwrap();

        assert!(config.has_state("a"));
        assert!(!config.has_state("b"));
        assert_eq!(
            config.state("a").unwrap().events().collect::<Vec<_>>(),
            vec!["go", "stay"]
        );
    }
}
