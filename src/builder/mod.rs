//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for assembling a
//! `MachineConfig` in code instead of deserializing one.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::core::MachineConfig;

/// Create a configuration from `(from, event, to)` triples.
///
/// States are declared in the order they first appear as a source.
///
/// # Example
///
/// ```
/// use waypoint::builder::from_transitions;
///
/// let config = from_transitions(
///     "red",
///     [
///         ("red", "next", "green"),
///         ("green", "next", "yellow"),
///         ("yellow", "next", "red"),
///     ],
/// );
///
/// assert_eq!(config.states.len(), 3);
/// ```
pub fn from_transitions<'a, I>(initial: &str, transitions: I) -> MachineConfig
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let mut config = MachineConfig::new(initial);
    for (from, event, to) in transitions {
        config
            .states
            .get_or_insert_with(from, Default::default)
            .transitions
            .insert(event, to.to_string());
    }
    config
}
