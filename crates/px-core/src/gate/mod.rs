//! Access gate domain module.
//!
//! This module defines the gate state, its pure state machine and the
//! rendering decision derived from it.

mod decision;
mod state;
pub mod state_machine;

pub use decision::AccessDecision;
pub use state::{GatePhase, GateState};
pub use state_machine::{GateAction, GateEvent, GateStateMachine};
