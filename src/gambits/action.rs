//! Action execution.
//!
//! Applies a fired gambit's action to the working snapshot. Each
//! invocation mutates only the actor's and target's stat/status fields
//! and appends exactly one log line (two when the target dies).
//!
//! Numeric rules: damage and heal amounts are variance-scaled with a
//! multiplier drawn from `[0.8, 1.2]`, floored to integers before
//! application; connecting attacks always deal at least 1.

use crate::core::{BattleRng, BattleState, Unit, UnitKey};

use super::gambit::ActionKind;

/// Base amount restored by a heal before variance.
pub const HEAL_BASE: i32 = 12;
/// Damage multiplier consumed by a charged attack.
pub const CHARGE_MULTIPLIER: f64 = 3.0;

/// Execute an action from actor to target.
///
/// Keys that no longer address a slot are ignored; the engine treats
/// that as a skipped action, not an error.
pub fn execute_action(
    action: ActionKind,
    actor: UnitKey,
    target: UnitKey,
    state: &mut BattleState,
    rng: &mut BattleRng,
) {
    match action {
        ActionKind::Attack => attack(actor, target, state, rng),
        ActionKind::Heal => heal(actor, target, state, rng),
        ActionKind::Block => {
            let Some(label) = set_flag(state, actor, |u| u.status.blocking = true) else {
                return;
            };
            state.push_log(format!("{label} takes a defensive stance!"));
        }
        ActionKind::Dodge => {
            let Some(label) = set_flag(state, actor, |u| u.status.dodging = true) else {
                return;
            };
            state.push_log(format!("{label} prepares to dodge the next attack!"));
        }
        ActionKind::Charge => {
            let Some(label) = set_flag(state, actor, |u| u.status.charged = true) else {
                return;
            };
            state.push_log(format!("{label} gathers energy for a devastating strike!"));
        }
        ActionKind::Wait => {
            let Some(unit) = state.unit(actor) else { return };
            let label = label(unit);
            state.push_log(format!("{label} is waiting..."));
        }
    }
}

fn attack(actor: UnitKey, target: UnitKey, state: &mut BattleState, rng: &mut BattleRng) {
    let Some(target_unit) = state.unit(target) else { return };
    let target_label = label(target_unit);
    let dodging = target_unit.status.dodging;
    let blocking = target_unit.status.blocking;
    let def = target_unit.stats.def;

    let Some(actor_unit) = state.unit(actor) else { return };
    let actor_label = label(actor_unit);
    let atk = actor_unit.stats.atk;
    let charged = actor_unit.status.charged;

    // A dodging target is a guaranteed miss: no state change, no
    // variance draw, and the charge is NOT consumed.
    if dodging {
        state.push_log(format!(
            "{actor_label} attacks {target_label}, but the attack is dodged!"
        ));
        return;
    }

    let mut multiplier = rng.variance();
    if charged {
        multiplier *= CHARGE_MULTIPLIER;
        if let Some(actor_unit) = state.unit_mut(actor) {
            actor_unit.status.charged = false;
        }
    }

    let raw = (f64::from(atk) * multiplier).floor() as i32;
    let mitigation = if blocking { def * 2 } else { def };
    let damage = (raw - mitigation).max(1);

    let Some(target_unit) = state.unit_mut(target) else { return };
    let died = target_unit.stats.apply_damage(damage);
    if died {
        target_unit.is_dead = true;
    }

    if charged {
        state.push_log(format!(
            "{actor_label} unleashes a charged strike on {target_label} for {damage} damage!"
        ));
    } else if blocking {
        state.push_log(format!(
            "{actor_label} attacks {target_label} for {damage} damage (blocked)!"
        ));
    } else {
        state.push_log(format!(
            "{actor_label} attacks {target_label} for {damage} damage!"
        ));
    }

    if died {
        state.push_log(format!("{target_label} has been defeated!"));
    }
}

fn heal(actor: UnitKey, target: UnitKey, state: &mut BattleState, rng: &mut BattleRng) {
    let Some(target_unit) = state.unit(target) else { return };
    let target_label = label(target_unit);

    let Some(actor_unit) = state.unit(actor) else { return };
    let actor_label = label(actor_unit);

    let amount = (f64::from(HEAL_BASE) * rng.variance()).floor() as i32;

    let Some(target_unit) = state.unit_mut(target) else { return };
    let applied = target_unit.stats.apply_heal(amount);

    if applied == 0 {
        state.push_log(format!(
            "{actor_label} tries to heal {target_label}, but HP is already full!"
        ));
    } else {
        state.push_log(format!(
            "{actor_label} heals {target_label} for {applied} HP!"
        ));
    }
}

/// Apply a status mutation and return the unit's log label.
fn set_flag(
    state: &mut BattleState,
    key: UnitKey,
    mutate: impl FnOnce(&mut Unit),
) -> Option<String> {
    let unit = state.unit_mut(key)?;
    mutate(unit);
    Some(label(unit))
}

fn label(unit: &Unit) -> String {
    format!("{} {}", unit.icon, unit.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DungeonState, Faction, Stats, UnitId};

    fn setup(ally_stats: Stats, enemy_stats: Stats) -> BattleState {
        let ally = Unit::new(UnitId::new(1), "Ally", "A", Faction::Allies, ally_stats);
        let enemy = Unit::new(UnitId::new(2), "Enemy", "E", Faction::Enemies, enemy_stats);
        BattleState::new(vec![ally], vec![enemy], DungeonState::new(3))
    }

    const ALLY: UnitKey = UnitKey::new(Faction::Allies, 0);
    const ENEMY: UnitKey = UnitKey::new(Faction::Enemies, 0);

    #[test]
    fn test_attack_damage_band_without_defense() {
        // atk 12, def 0: damage = floor(12 * m), m in [0.8, 1.2] => 9..=14.
        for seed in 0..50 {
            let mut state = setup(Stats::new(80, 12, 3, 15), Stats::new(200, 6, 0, 6));
            let mut rng = BattleRng::new(seed);

            execute_action(ActionKind::Attack, ALLY, ENEMY, &mut state, &mut rng);

            let dealt = 200 - state.enemies[0].stats.hp;
            assert!((9..=14).contains(&dealt), "dealt {dealt}");
        }
    }

    #[test]
    fn test_attack_damage_floor_is_one() {
        let mut state = setup(Stats::new(80, 1, 0, 15), Stats::new(200, 6, 100, 6));
        let mut rng = BattleRng::new(1);

        execute_action(ActionKind::Attack, ALLY, ENEMY, &mut state, &mut rng);

        assert_eq!(state.enemies[0].stats.hp, 199);
    }

    #[test]
    fn test_attack_kills_and_logs_defeat() {
        let mut state = setup(Stats::new(80, 12, 3, 15), Stats::new(5, 6, 0, 6));
        let mut rng = BattleRng::new(1);

        execute_action(ActionKind::Attack, ALLY, ENEMY, &mut state, &mut rng);

        assert!(state.enemies[0].is_dead);
        assert_eq!(state.enemies[0].stats.hp, 0);
        assert_eq!(state.log.len(), 2);
        assert!(state.log[1].contains("defeated"));
    }

    #[test]
    fn test_attack_against_dodging_target_misses() {
        let mut state = setup(Stats::new(80, 12, 3, 15), Stats::new(60, 6, 0, 6));
        state.enemies[0].status.dodging = true;
        let mut rng = BattleRng::new(1);
        let before = rng.state();

        execute_action(ActionKind::Attack, ALLY, ENEMY, &mut state, &mut rng);

        // Zero hp change, dodge flag untouched, and no variance drawn.
        assert_eq!(state.enemies[0].stats.hp, 60);
        assert!(state.enemies[0].status.dodging);
        assert_eq!(rng.state(), before);
        assert_eq!(state.log.len(), 1);
        assert!(state.log[0].contains("dodged"));
    }

    #[test]
    fn test_dodge_miss_preserves_charge() {
        let mut state = setup(Stats::new(80, 12, 3, 15), Stats::new(60, 6, 0, 6));
        state.allies[0].status.charged = true;
        state.enemies[0].status.dodging = true;
        let mut rng = BattleRng::new(1);

        execute_action(ActionKind::Attack, ALLY, ENEMY, &mut state, &mut rng);

        assert!(state.allies[0].status.charged);
    }

    #[test]
    fn test_charged_attack_triples_and_consumes() {
        let mut state = setup(Stats::new(80, 12, 0, 15), Stats::new(500, 6, 0, 6));
        state.allies[0].status.charged = true;

        // Predict the multiplier with a clone of the rng.
        let mut rng = BattleRng::new(9);
        let expected = (12.0 * rng.clone().variance() * CHARGE_MULTIPLIER).floor() as i32;

        execute_action(ActionKind::Attack, ALLY, ENEMY, &mut state, &mut rng);

        assert_eq!(500 - state.enemies[0].stats.hp, expected.max(1));
        assert!(!state.allies[0].status.charged);
        assert!(state.log[0].contains("charged strike"));
    }

    #[test]
    fn test_blocking_doubles_defense() {
        let mut state = setup(Stats::new(80, 12, 0, 15), Stats::new(500, 6, 5, 6));
        state.enemies[0].status.blocking = true;

        let mut rng = BattleRng::new(3);
        let raw = (12.0 * rng.clone().variance()).floor() as i32;
        let expected = (raw - 10).max(1);

        execute_action(ActionKind::Attack, ALLY, ENEMY, &mut state, &mut rng);

        assert_eq!(500 - state.enemies[0].stats.hp, expected);
    }

    #[test]
    fn test_heal_band_and_cap() {
        // floor(12 * m), m in [0.8, 1.2] => 9..=14.
        for seed in 0..50 {
            let mut state = setup(Stats::new(100, 12, 3, 15), Stats::new(60, 6, 0, 6));
            state.allies[0].stats.hp = 40;
            let mut rng = BattleRng::new(seed);

            execute_action(ActionKind::Heal, ALLY, ALLY, &mut state, &mut rng);

            let healed = state.allies[0].stats.hp - 40;
            assert!((9..=14).contains(&healed), "healed {healed}");
        }
    }

    #[test]
    fn test_heal_at_full_logs_distinct_message() {
        let mut state = setup(Stats::new(100, 12, 3, 15), Stats::new(60, 6, 0, 6));
        let mut rng = BattleRng::new(1);

        execute_action(ActionKind::Heal, ALLY, ALLY, &mut state, &mut rng);

        assert_eq!(state.allies[0].stats.hp, 100);
        assert!(state.log[0].contains("already full"));
    }

    #[test]
    fn test_status_actions_set_flags() {
        let mut state = setup(Stats::new(100, 12, 3, 15), Stats::new(60, 6, 0, 6));
        let mut rng = BattleRng::new(1);

        execute_action(ActionKind::Block, ALLY, ALLY, &mut state, &mut rng);
        execute_action(ActionKind::Dodge, ALLY, ALLY, &mut state, &mut rng);
        execute_action(ActionKind::Charge, ALLY, ALLY, &mut state, &mut rng);

        let status = state.allies[0].status;
        assert!(status.blocking);
        assert!(status.dodging);
        assert!(status.charged);
        assert_eq!(state.log.len(), 3);
    }

    #[test]
    fn test_wait_logs_only() {
        let mut state = setup(Stats::new(100, 12, 3, 15), Stats::new(60, 6, 0, 6));
        let mut rng = BattleRng::new(1);
        let before = state.clone();

        execute_action(ActionKind::Wait, ALLY, ALLY, &mut state, &mut rng);

        assert_eq!(state.allies, before.allies);
        assert_eq!(state.enemies, before.enemies);
        assert_eq!(state.log.len(), 1);
        assert!(state.log[0].contains("waiting"));
    }
}
