//! Shared domain primitives.

mod errors;
mod state_machine;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
