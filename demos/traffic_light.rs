//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with history.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Building a configuration with the fluent builder
//! - Undoing and redoing moves
//! - Rejected events leave the machine untouched
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use tracing_subscriber::EnvFilter;
use waypoint::builder::{ConfigBuilder, StateBuilder};
use waypoint::StateMachine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = ConfigBuilder::new()
        .initial("red")
        .state(StateBuilder::new("red").on("next", "green"))
        .state(StateBuilder::new("green").on("next", "yellow"))
        .state(
            StateBuilder::new("yellow")
                .on("next", "red")
                .on("emergency", "red"),
        )
        .build()
        .unwrap();

    let mut machine = StateMachine::new(config);
    println!("Initial state: {}\n", machine.get_state());

    println!("Cycling:");
    for _ in 0..4 {
        let from = machine.get_state().to_string();
        let to = machine.trigger("next").unwrap();
        println!("  {from} -> {to}");
    }

    println!("\nHistory: {:?}", machine.history().path());

    println!("\nUndoing two steps:");
    machine.undo();
    machine.undo();
    println!("  now {}", machine.get_state());

    println!("\nStates with an emergency exit: {:?}", machine.get_states(Some("emergency")));

    match machine.trigger("emergency") {
        Ok(state) => println!("Emergency handled, now {state}"),
        Err(e) => println!("Rejected: {e}"),
    }

    println!("\nRedo available: {}", machine.can_redo());

    println!("\n=== Example Complete ===");
}
