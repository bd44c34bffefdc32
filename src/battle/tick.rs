//! The tick orchestrator.
//!
//! One call resolves exactly one round: snapshot the state, let every
//! living unit act once in speed order, and re-check the end condition
//! after every single action - a battle can end mid-round, in which
//! case the remaining units never act. Past a round threshold the
//! hunger mechanic deals escalating unavoidable damage to both sides so
//! no battle stalls forever.
//!
//! The input snapshot is never mutated; callers get a new value and may
//! keep old ones for undo or replay.

use crate::core::{BattleRng, BattleState, BattleStatus, Faction, UnitKey};

use super::end::check_end;
use super::turn::process_unit_turn;

/// Round count after which hunger damage starts.
pub const HUNGER_THRESHOLD: u32 = 20;

/// Leave preparation and start resolving rounds.
///
/// Safe no-op clone for any status other than `Preparation`.
#[must_use]
pub fn start_battle(state: &BattleState) -> BattleState {
    if state.status != BattleStatus::Preparation {
        return state.clone();
    }

    let mut next = state.clone();
    next.status = BattleStatus::Fighting;
    next.push_log("FIGHT!");
    next
}

/// Resolve one round and return the new snapshot.
///
/// Safe no-op clone for any status other than `Fighting`. The round
/// order is allies-then-enemies sorted by speed descending; the sort is
/// stable, so equal-speed units keep that input order.
#[must_use]
pub fn tick(state: &BattleState, rng: &mut BattleRng) -> BattleState {
    if state.status != BattleStatus::Fighting {
        return state.clone();
    }

    let mut next = state.clone();
    next.tick += 1;
    next.push_log(format!("--- Tick {} ---", next.tick));

    let mut order: Vec<(UnitKey, i32)> = next
        .living(Faction::Allies)
        .chain(next.living(Faction::Enemies))
        .map(|(key, unit)| (key, unit.stats.speed))
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1));

    for (key, _) in order {
        process_unit_turn(key, &mut next, rng);

        let result = check_end(&next);
        if result != BattleStatus::Fighting {
            return finish(next, result);
        }
    }

    apply_hunger(&mut next);
    let result = check_end(&next);
    if result != BattleStatus::Fighting {
        return finish(next, result);
    }

    next
}

fn finish(mut state: BattleState, result: BattleStatus) -> BattleState {
    state.status = result;
    state.push_log(end_banner(result));
    state
}

/// Escalating end-game damage: past the threshold, every living unit on
/// both sides takes `tick - threshold` damage, hp floored at 0.
fn apply_hunger(state: &mut BattleState) {
    if state.tick <= HUNGER_THRESHOLD {
        return;
    }
    let damage = (state.tick - HUNGER_THRESHOLD) as i32;
    state.push_log(format!("Hunger gnaws at everyone for {damage} damage!"));

    for faction in [Faction::Allies, Faction::Enemies] {
        let keys: Vec<UnitKey> = state.living(faction).map(|(key, _)| key).collect();
        for key in keys {
            let mut defeated = None;
            if let Some(unit) = state.unit_mut(key) {
                if unit.stats.apply_damage(damage) {
                    unit.is_dead = true;
                    defeated = Some(format!("{} {}", unit.icon, unit.name));
                }
            }
            if let Some(label) = defeated {
                state.push_log(format!("{label} has been defeated!"));
            }
        }
    }
}

fn end_banner(status: BattleStatus) -> &'static str {
    match status {
        BattleStatus::Victory => "=== VICTORY! ===",
        BattleStatus::Defeat => "=== DEFEAT! ===",
        BattleStatus::RoomCleared => "=== ROOM CLEARED! ===",
        BattleStatus::Fighting | BattleStatus::Preparation => "",
    }
}
