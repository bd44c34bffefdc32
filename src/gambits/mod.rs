//! The gambit rule system.
//!
//! A gambit is a prioritized condition→target→action rule. The three
//! primitives here are pure over the snapshot:
//! - `evaluate_condition`: does this rule apply right now?
//! - `resolve_target`: who does it apply to?
//! - `execute_action`: apply it to the working snapshot.
//!
//! Turn processing in `battle` composes them: first active gambit whose
//! condition holds and whose target resolves fires, once per turn.

mod action;
mod condition;
mod gambit;
mod targeting;

pub use action::{execute_action, CHARGE_MULTIPLIER, HEAL_BASE};
pub use condition::evaluate_condition;
pub use gambit::{ActionKind, Condition, Gambit, GambitId, Target};
pub use targeting::resolve_target;
