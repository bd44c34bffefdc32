//! Target resolution.
//!
//! Maps a gambit's target selector to a concrete roster slot, or `None`
//! when no candidate exists - an unresolvable target skips the gambit,
//! it is never an error. Tie-breaks are explicit: scans use strict
//! comparisons, so the first candidate in roster order wins.

use crate::core::{BattleState, Unit, UnitKey};

use super::gambit::Target;

/// Resolve a target selector for the acting unit.
///
/// `actor` must address a live slot in `state`; rosters are read
/// relative to the actor's faction.
#[must_use]
pub fn resolve_target(target: Target, actor: UnitKey, state: &BattleState) -> Option<UnitKey> {
    let own = actor.faction;
    let opposing = own.opposing();

    match target {
        Target::Self_ => Some(actor),
        Target::AllyLowestHp => lowest_hp(state.living(own)),
        Target::EnemyClosest => state.living(opposing).map(|(key, _)| key).next(),
        Target::EnemyLowestHp => lowest_hp(state.living(opposing)),
        Target::EnemyStrongest => highest_atk(state.living(opposing)),
    }
}

/// First-encountered minimum by current hp.
fn lowest_hp<'a>(candidates: impl Iterator<Item = (UnitKey, &'a Unit)>) -> Option<UnitKey> {
    let mut best: Option<(UnitKey, i32)> = None;
    for (key, unit) in candidates {
        match best {
            Some((_, hp)) if unit.stats.hp >= hp => {}
            _ => best = Some((key, unit.stats.hp)),
        }
    }
    best.map(|(key, _)| key)
}

/// First-encountered maximum by atk.
fn highest_atk<'a>(candidates: impl Iterator<Item = (UnitKey, &'a Unit)>) -> Option<UnitKey> {
    let mut best: Option<(UnitKey, i32)> = None;
    for (key, unit) in candidates {
        match best {
            Some((_, atk)) if unit.stats.atk <= atk => {}
            _ => best = Some((key, unit.stats.atk)),
        }
    }
    best.map(|(key, _)| key)
}
