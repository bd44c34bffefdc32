//! Core engine types: stats, status effects, units, state snapshots, RNG.
//!
//! This module contains the building blocks the rule engine operates
//! on. Content (personas, room rosters) lives in `content`; the rules
//! themselves live in `gambits` and `battle`.

pub mod rng;
pub mod state;
pub mod stats;
pub mod status;
pub mod unit;

pub use rng::{BattleRng, BattleRngState};
pub use state::{BattleState, BattleStatus, DungeonState};
pub use stats::Stats;
pub use status::StatusEffects;
pub use unit::{Faction, Unit, UnitId, UnitKey};
