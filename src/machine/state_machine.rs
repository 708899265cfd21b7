//! State machine over a declarative configuration.

use crate::core::{MachineConfig, StateHistory};
use crate::machine::error::MachineError;
use tracing::debug;

/// State machine that tracks the current state and an undo/redo history.
///
/// # Example
///
/// ```rust
/// use waypoint::machine_config;
/// use waypoint::StateMachine;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle" },
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// assert_eq!(machine.trigger("start").unwrap(), "running");
/// assert!(machine.undo());
/// assert_eq!(machine.get_state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    initial: String,
    current: String,
    history: StateHistory,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    pub fn new(config: MachineConfig) -> Self {
        let initial = config.initial.clone();
        debug!(
            initial = %initial,
            states = config.states.len(),
            "State machine created"
        );
        Self {
            history: StateHistory::new(initial.clone()),
            current: initial.clone(),
            initial,
            config,
        }
    }

    /// Create a machine from an optional configuration.
    /// Returns `ConfigMissing` when no configuration is given.
    pub fn try_new(config: Option<MachineConfig>) -> Result<Self, MachineError> {
        config.map(Self::new).ok_or(MachineError::ConfigMissing)
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// A `null` document is reported as `ConfigMissing`; anything else the
    /// parser rejects is `InvalidConfig`.
    ///
    /// ```rust
    /// use waypoint::{MachineError, StateMachine};
    ///
    /// let machine = StateMachine::from_json(
    ///     r#"{"initial": "off", "states": {"off": {"transitions": {"flip": "on"}}}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(machine.get_state(), "off");
    ///
    /// assert!(matches!(
    ///     StateMachine::from_json("null"),
    ///     Err(MachineError::ConfigMissing)
    /// ));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        let config: Option<MachineConfig> = serde_json::from_str(json)?;
        Self::try_new(config)
    }

    /// Get current state (pure)
    pub fn get_state(&self) -> &str {
        &self.current
    }

    /// Get the state the machine was constructed in (pure)
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// Get the configuration (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Jump directly to a declared state, recording it in history.
    pub fn change_state(&mut self, state: &str) -> Result<&str, MachineError> {
        if !self.config.has_state(state) {
            debug!(state, current = %self.current, "Rejected change to unknown state");
            return Err(MachineError::UnknownState {
                state: state.to_string(),
            });
        }

        self.enter(state.to_string(), None);
        Ok(&self.current)
    }

    /// Follow an event declared on the current state, recording the target
    /// in history.
    ///
    /// The target is taken from the transition table as-is; it is not
    /// checked against the declared states.
    pub fn trigger(&mut self, event: &str) -> Result<&str, MachineError> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|node| node.target(event))
            .map(str::to_string);

        let Some(target) = target else {
            debug!(event, current = %self.current, "Rejected event with no transition");
            return Err(MachineError::NoSuchTransition {
                from: self.current.clone(),
                event: event.to_string(),
            });
        };

        self.enter(target, Some(event));
        Ok(&self.current)
    }

    /// Return to the initial state.
    ///
    /// History and its cursor are left untouched, so a later `undo` or
    /// `redo` moves relative to the pre-reset position.
    pub fn reset(&mut self) -> &str {
        self.current.clone_from(&self.initial);
        debug!(state = %self.current, "State machine reset");
        &self.current
    }

    /// List declared states, optionally only those that accept `event`.
    ///
    /// `None` and an empty event name both list every state.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|e| !e.is_empty()) {
            None => self.config.state_names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, node)| node.accepts(event))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Events accepted by the current state, in declaration order.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|node| node.events().collect())
            .unwrap_or_default()
    }

    /// Step back one history entry.
    /// Returns `false` when there is no earlier entry.
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.history.step_back() else {
            return false;
        };
        self.current = state.to_string();
        debug!(state = %self.current, cursor = self.history.cursor(), "Undo");
        true
    }

    /// Step forward one history entry.
    /// Returns `false` when there is no later entry.
    pub fn redo(&mut self) -> bool {
        let Some(state) = self.history.step_forward() else {
            return false;
        };
        self.current = state.to_string();
        debug!(state = %self.current, cursor = self.history.cursor(), "Redo");
        true
    }

    /// Whether `undo` would move to an earlier entry.
    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    /// Whether `redo` would move to a later entry.
    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Forget all history. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!(state = %self.current, "History cleared");
    }

    fn enter(&mut self, state: String, event: Option<&str>) {
        debug!(
            from = %self.current,
            to = %state,
            event = ?event,
            "State changed"
        );
        self.history.record(state.clone());
        self.current = state;
    }
}
