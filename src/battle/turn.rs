//! Per-unit turn processing.
//!
//! One turn is a small state machine: reset the per-turn status flags,
//! walk the unit's gambits in priority order, fire the first one whose
//! condition holds AND whose target resolves, then stop. At most one
//! action per unit per round. A gambit whose target fails to resolve is
//! skipped, not an error; the scan moves on to the next priority.

use crate::core::{BattleRng, BattleState, UnitKey};
use crate::gambits::{evaluate_condition, execute_action, resolve_target};

/// Run one unit's turn against the working snapshot.
///
/// Dead units are skipped; a unit killed earlier in the round does not
/// act even if it was scheduled.
pub fn process_unit_turn(actor: UnitKey, state: &mut BattleState, rng: &mut BattleRng) {
    let order = {
        let Some(unit) = state.unit_mut(actor) else { return };
        if unit.is_dead {
            return;
        }
        unit.status.begin_turn();
        unit.last_triggered = None;
        unit.gambit_order()
    };

    for idx in order {
        let Some(unit) = state.unit(actor) else { return };
        let Some(&gambit) = unit.gambits.get(idx) else { continue };

        if !evaluate_condition(&gambit, unit, state) {
            continue;
        }
        let Some(target) = resolve_target(gambit.target, actor, state) else {
            continue;
        };

        execute_action(gambit.action, actor, target, state, rng);
        if let Some(unit) = state.unit_mut(actor) {
            unit.last_triggered = Some(gambit.id);
        }
        return;
    }

    // No gambit matched: distinct from an explicit Wait action.
    let Some(unit) = state.unit(actor) else { return };
    let line = format!("{} {} is confused and does nothing...", unit.icon, unit.name);
    state.push_log(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DungeonState, Faction, Stats, Unit, UnitId};
    use crate::gambits::{ActionKind, Condition, Gambit, GambitId, Target};

    const ALLY: UnitKey = UnitKey::new(Faction::Allies, 0);

    fn enemy() -> Unit {
        Unit::new(
            UnitId::new(99),
            "Enemy",
            "E",
            Faction::Enemies,
            Stats::new(60, 6, 0, 6),
        )
    }

    fn state_with(ally: Unit) -> BattleState {
        BattleState::new(vec![ally], vec![enemy()], DungeonState::new(3))
    }

    #[test]
    fn test_first_matching_gambit_fires_and_records() {
        let ally = Unit::new(
            UnitId::new(1),
            "Ally",
            "A",
            Faction::Allies,
            Stats::new(80, 12, 3, 15),
        )
        // Priority 1 never matches (hp is full), priority 2 does.
        .with_gambit(Gambit::new(
            GambitId::new(1),
            1,
            Condition::HpBelow30,
            Target::Self_,
            ActionKind::Heal,
        ))
        .with_gambit(Gambit::new(
            GambitId::new(2),
            2,
            Condition::Always,
            Target::EnemyClosest,
            ActionKind::Attack,
        ));
        let mut state = state_with(ally);
        let mut rng = BattleRng::new(1);

        process_unit_turn(ALLY, &mut state, &mut rng);

        assert!(state.enemies[0].stats.hp < 60);
        assert_eq!(state.allies[0].last_triggered, Some(GambitId::new(2)));
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn test_unresolvable_target_falls_through() {
        let ally = Unit::new(
            UnitId::new(1),
            "Ally",
            "A",
            Faction::Allies,
            Stats::new(80, 12, 3, 15),
        )
        .with_gambit(Gambit::new(
            GambitId::new(1),
            1,
            Condition::Always,
            Target::EnemyClosest,
            ActionKind::Attack,
        ))
        .with_gambit(Gambit::new(
            GambitId::new(2),
            2,
            Condition::Always,
            Target::Self_,
            ActionKind::Block,
        ));
        let mut state = BattleState::new(vec![ally], vec![], DungeonState::new(3));
        let mut rng = BattleRng::new(1);

        process_unit_turn(ALLY, &mut state, &mut rng);

        // No enemies: the attack is skipped, the block fires instead.
        assert!(state.allies[0].status.blocking);
        assert_eq!(state.allies[0].last_triggered, Some(GambitId::new(2)));
    }

    #[test]
    fn test_no_match_logs_confusion() {
        let ally = Unit::new(
            UnitId::new(1),
            "Ally",
            "A",
            Faction::Allies,
            Stats::new(80, 12, 3, 15),
        )
        .with_gambit(Gambit::new(
            GambitId::new(1),
            1,
            Condition::HpBelow30,
            Target::Self_,
            ActionKind::Heal,
        ));
        let mut state = state_with(ally);
        let mut rng = BattleRng::new(1);

        process_unit_turn(ALLY, &mut state, &mut rng);

        assert_eq!(state.allies[0].last_triggered, None);
        assert_eq!(state.log.len(), 1);
        assert!(state.log[0].contains("does nothing"));
    }

    #[test]
    fn test_turn_start_resets_block_and_dodge_not_charge() {
        let mut ally = Unit::new(
            UnitId::new(1),
            "Ally",
            "A",
            Faction::Allies,
            Stats::new(80, 12, 3, 15),
        );
        ally.status.blocking = true;
        ally.status.dodging = true;
        ally.status.charged = true;
        let mut state = state_with(ally);
        let mut rng = BattleRng::new(1);

        process_unit_turn(ALLY, &mut state, &mut rng);

        let status = state.allies[0].status;
        assert!(!status.blocking);
        assert!(!status.dodging);
        assert!(status.charged);
    }

    #[test]
    fn test_dead_unit_does_not_act() {
        let mut ally = Unit::new(
            UnitId::new(1),
            "Ally",
            "A",
            Faction::Allies,
            Stats::new(80, 12, 3, 15),
        )
        .with_gambit(Gambit::new(
            GambitId::new(1),
            1,
            Condition::Always,
            Target::EnemyClosest,
            ActionKind::Attack,
        ));
        ally.is_dead = true;
        let mut state = state_with(ally);
        let mut rng = BattleRng::new(1);

        process_unit_turn(ALLY, &mut state, &mut rng);

        assert_eq!(state.enemies[0].stats.hp, 60);
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_inactive_gambits_are_skipped() {
        let ally = Unit::new(
            UnitId::new(1),
            "Ally",
            "A",
            Faction::Allies,
            Stats::new(80, 12, 3, 15),
        )
        .with_gambit(
            Gambit::new(
                GambitId::new(1),
                1,
                Condition::Always,
                Target::EnemyClosest,
                ActionKind::Attack,
            )
            .inactive(),
        )
        .with_gambit(Gambit::new(
            GambitId::new(2),
            2,
            Condition::Always,
            Target::Self_,
            ActionKind::Wait,
        ));
        let mut state = state_with(ally);
        let mut rng = BattleRng::new(1);

        process_unit_turn(ALLY, &mut state, &mut rng);

        assert_eq!(state.enemies[0].stats.hp, 60);
        assert_eq!(state.allies[0].last_triggered, Some(GambitId::new(2)));
    }
}
