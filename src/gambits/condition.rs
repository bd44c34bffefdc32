//! Condition evaluation.
//!
//! Decides whether a gambit may fire for a unit given the current
//! snapshot. Pure read-only checks; ratio comparisons use true division
//! with strict inequalities.

use crate::core::{BattleState, Unit};

use super::gambit::{Condition, Gambit};

/// Evaluate a gambit's condition for the acting unit.
///
/// Inactive gambits never fire. "Opposing" means living members of the
/// other faction's roster.
#[must_use]
pub fn evaluate_condition(gambit: &Gambit, unit: &Unit, state: &BattleState) -> bool {
    if !gambit.active {
        return false;
    }

    let opposing = unit.faction.opposing();

    match gambit.condition {
        Condition::Always => true,
        Condition::HpBelow30 => unit.stats.hp_ratio() < 0.30,
        Condition::HpBelow50 => unit.stats.hp_ratio() < 0.50,
        Condition::EnemyHpAbove50 => state
            .living(opposing)
            .any(|(_, enemy)| enemy.stats.hp_ratio() > 0.50),
        Condition::EnemyIsBlocking => state
            .living(opposing)
            .any(|(_, enemy)| enemy.status.blocking),
        // No mana pool exists; the predicate is a stub and always holds.
        Condition::ManaFull => true,
    }
}
