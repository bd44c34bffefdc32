//! Round resolution: turn processing, the tick orchestrator, and
//! battle-end determination.
//!
//! The external caller owns the loop: it holds a `BattleState` snapshot
//! and calls [`tick`] once per time unit while the status is
//! `Fighting`. Everything in here is a pure, terminating computation
//! producing a new snapshot.

mod end;
mod tick;
mod turn;

pub use end::check_end;
pub use tick::{start_battle, tick, HUNGER_THRESHOLD};
pub use turn::process_unit_turn;
