//! Discrete interaction handling.

pub mod machine;
pub mod state;

pub use machine::{transition, InteractionMachine, InteractionSnapshot};
pub use state::{Capabilities, InteractionEvent, InteractionState};
