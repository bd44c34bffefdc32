//! Dungeon progression between battles.
//!
//! Rooms are advanced explicitly by the caller after observing a
//! `RoomCleared` status; the tick orchestrator never changes rooms on
//! its own.

use crate::content::RoomTable;
use crate::core::{BattleState, BattleStatus};

/// Fraction of max hp restored to each surviving ally on room advance.
pub const ROOM_HEAL_RATIO: f64 = 0.30;

/// Advance into the next room.
///
/// Safe no-op clone for any status other than `RoomCleared`. Produces a
/// fresh preparation-phase snapshot: room + 1, survivors healed by
/// `floor(max_hp * 0.30)`, every status flag cleared (a room transition
/// resets charge, unlike a normal turn), gambits preserved, a brand-new
/// enemy roster from the content table, tick back to 0, and the log
/// replaced by the room's narration.
#[must_use]
pub fn advance_room(state: &BattleState, rooms: &RoomTable) -> BattleState {
    if state.status != BattleStatus::RoomCleared {
        return state.clone();
    }

    let mut next = state.clone();
    next.dungeon.room += 1;
    next.tick = 0;
    next.status = BattleStatus::Preparation;

    for ally in &mut next.allies {
        if ally.is_alive() {
            let heal = (f64::from(ally.stats.max_hp) * ROOM_HEAL_RATIO).floor() as i32;
            ally.stats.apply_heal(heal);
        }
        ally.status.clear();
        ally.last_triggered = None;
    }

    next.enemies = rooms.enemies_for_room(next.dungeon.room);
    next.log = im::Vector::new();
    next.push_log(format!(
        "Room {}: {}",
        next.dungeon.room,
        rooms.description(next.dungeon.room)
    ));
    next
}

/// Count of allies still standing; presentation helper for the
/// room-clear screen.
#[must_use]
pub fn survivors(state: &BattleState) -> usize {
    state.allies.iter().filter(|u| u.is_alive()).count()
}
