//! Macros for ergonomic configuration construction.

/// Build a `MachineConfig` from a literal state table.
///
/// # Example
///
/// ```
/// use waypoint::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "pause" => "paused", "stop" => "idle" },
///         "paused" => { "resume" => "running" },
///         "archived" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 4);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:literal => {
                    $($event:literal => $target:literal),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::core::MachineConfig::new($initial)
            $(
                .with_state(
                    $state,
                    $crate::core::StateNode::new()
                        $(.with_transition($event, $target))*,
                )
            )*
    };
}
