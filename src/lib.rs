//! # gambit-engine
//!
//! A deterministic turn-resolution engine for a small tactical battle
//! game. Every controllable unit carries a prioritized list of
//! condition→target→action rules ("gambits"); each tick, all living
//! units act once in speed order by firing the first rule that matches.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: the engine never mutates a
//!    `BattleState` it was given. Every operation returns a new value;
//!    callers keep old snapshots for undo, replay, or history.
//!
//! 2. **Injected determinism**: all randomness flows through a seeded
//!    `BattleRng`. Fixing the seed makes entire campaigns bit-for-bit
//!    reproducible.
//!
//! 3. **Pure core**: no I/O, no timers, no suspension points. The
//!    external caller owns the loop - it calls `tick` once per time
//!    unit while the status is `Fighting` and drives room transitions
//!    explicitly.
//!
//! ## Modules
//!
//! - `core`: stats, status effects, units, state snapshots, RNG
//! - `gambits`: the rule primitives - conditions, targeting, actions
//! - `battle`: turn processing, the tick orchestrator, end detection
//! - `dungeon`: room progression between battles
//! - `content`: static tables - personas and room rosters

pub mod battle;
pub mod content;
pub mod core;
pub mod dungeon;
pub mod gambits;

// Re-export commonly used types
pub use crate::core::{
    BattleRng, BattleRngState,
    BattleState, BattleStatus, DungeonState,
    Faction, Stats, StatusEffects, Unit, UnitId, UnitKey,
};

pub use crate::gambits::{
    evaluate_condition, execute_action, resolve_target,
    ActionKind, Condition, Gambit, GambitId, Target,
    CHARGE_MULTIPLIER, HEAL_BASE,
};

pub use crate::battle::{check_end, process_unit_turn, start_battle, tick, HUNGER_THRESHOLD};

pub use crate::dungeon::{advance_room, survivors, ROOM_HEAL_RATIO};

pub use crate::content::{new_run, Persona, PersonaId, PersonaRegistry, RoomDef, RoomTable};
