//! Battle-end determination.

use crate::core::{BattleState, BattleStatus, Faction};

/// Determine whether the battle has ended.
///
/// The enemy-wipe check runs first, so a simultaneous wipe of both
/// sides resolves in the allies' favor. An enemy wipe in the final
/// room is campaign victory; earlier rooms report `RoomCleared`.
#[must_use]
pub fn check_end(state: &BattleState) -> BattleStatus {
    if !state.has_living(Faction::Enemies) {
        return if state.dungeon.is_final_room() {
            BattleStatus::Victory
        } else {
            BattleStatus::RoomCleared
        };
    }

    if !state.has_living(Faction::Allies) {
        return BattleStatus::Defeat;
    }

    BattleStatus::Fighting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DungeonState, Stats, Unit, UnitId};

    fn unit(faction: Faction, dead: bool) -> Unit {
        let mut unit = Unit::new(
            UnitId::new(0),
            "U",
            "U",
            faction,
            Stats::new(10, 1, 0, 1),
        );
        unit.is_dead = dead;
        unit
    }

    fn state(ally_dead: bool, enemy_dead: bool, room: u32) -> BattleState {
        let mut dungeon = DungeonState::new(3);
        dungeon.room = room;
        BattleState::new(
            vec![unit(Faction::Allies, ally_dead)],
            vec![unit(Faction::Enemies, enemy_dead)],
            dungeon,
        )
    }

    #[test]
    fn test_both_alive_keeps_fighting() {
        assert_eq!(check_end(&state(false, false, 1)), BattleStatus::Fighting);
    }

    #[test]
    fn test_enemy_wipe_mid_campaign_clears_room() {
        assert_eq!(check_end(&state(false, true, 1)), BattleStatus::RoomCleared);
    }

    #[test]
    fn test_enemy_wipe_in_final_room_is_victory() {
        assert_eq!(check_end(&state(false, true, 3)), BattleStatus::Victory);
    }

    #[test]
    fn test_ally_wipe_is_defeat() {
        assert_eq!(check_end(&state(true, false, 1)), BattleStatus::Defeat);
    }

    #[test]
    fn test_simultaneous_wipe_favors_allies() {
        // Enemy check runs first: a full mutual wipe is never a defeat.
        assert_eq!(check_end(&state(true, true, 1)), BattleStatus::RoomCleared);
        assert_eq!(check_end(&state(true, true, 3)), BattleStatus::Victory);
    }
}
