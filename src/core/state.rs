//! Battle state snapshots.
//!
//! `BattleState` is the engine's single unit of truth: a value holding
//! both rosters, the combat log, the phase, and the dungeon position.
//! The engine never mutates a snapshot it was given - every operation
//! (tick, battle start, room advance) returns a new, fully independent
//! value, so callers can retain old snapshots for undo, replay, or
//! display history.
//!
//! The combat log is an `im::Vector`, so retained snapshots share log
//! structure instead of duplicating the full history on every round.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::unit::{Faction, Unit, UnitKey};

/// Phase of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleStatus {
    /// Gambits are editable; the fight has not started.
    Preparation,
    /// Rounds are being resolved.
    Fighting,
    /// Final room cleared - the campaign is won.
    Victory,
    /// All allies down.
    Defeat,
    /// Room won with more rooms ahead.
    RoomCleared,
}

/// Position within the dungeon run.
///
/// Invariant: `1 <= room <= max_rooms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonState {
    /// Current room, 1-based.
    pub room: u32,
    /// Total rooms in the campaign.
    pub max_rooms: u32,
}

impl DungeonState {
    /// Create a dungeon position at room 1.
    #[must_use]
    pub const fn new(max_rooms: u32) -> Self {
        Self { room: 1, max_rooms }
    }

    /// Whether the current room is the campaign's last.
    #[must_use]
    pub const fn is_final_room(&self) -> bool {
        self.room >= self.max_rooms
    }
}

/// One immutable snapshot of a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    /// Resolved round counter. Starts at 0, incremented once per tick.
    pub tick: u32,
    /// The player's roster. Dead units stay in place, flagged.
    pub allies: Vec<Unit>,
    /// The current room's roster.
    pub enemies: Vec<Unit>,
    /// Append-only human-readable combat log.
    pub log: Vector<String>,
    /// Current phase.
    pub status: BattleStatus,
    /// Dungeon position.
    pub dungeon: DungeonState,
}

impl BattleState {
    /// Create a fresh battle in preparation phase.
    #[must_use]
    pub fn new(allies: Vec<Unit>, enemies: Vec<Unit>, dungeon: DungeonState) -> Self {
        Self {
            tick: 0,
            allies,
            enemies,
            log: Vector::new(),
            status: BattleStatus::Preparation,
            dungeon,
        }
    }

    /// The roster for a faction.
    #[must_use]
    pub fn roster(&self, faction: Faction) -> &[Unit] {
        match faction {
            Faction::Allies => &self.allies,
            Faction::Enemies => &self.enemies,
        }
    }

    /// Mutable roster access for turn processing.
    pub fn roster_mut(&mut self, faction: Faction) -> &mut Vec<Unit> {
        match faction {
            Faction::Allies => &mut self.allies,
            Faction::Enemies => &mut self.enemies,
        }
    }

    /// Look up a unit by roster slot.
    #[must_use]
    pub fn unit(&self, key: UnitKey) -> Option<&Unit> {
        self.roster(key.faction).get(key.index)
    }

    /// Mutable unit lookup by roster slot.
    pub fn unit_mut(&mut self, key: UnitKey) -> Option<&mut Unit> {
        self.roster_mut(key.faction).get_mut(key.index)
    }

    /// Living units of a faction, in roster order.
    pub fn living(&self, faction: Faction) -> impl Iterator<Item = (UnitKey, &Unit)> {
        self.roster(faction)
            .iter()
            .enumerate()
            .filter(|(_, u)| u.is_alive())
            .map(move |(i, u)| (UnitKey::new(faction, i), u))
    }

    /// Whether any unit of a faction is still alive.
    #[must_use]
    pub fn has_living(&self, faction: Faction) -> bool {
        self.roster(faction).iter().any(Unit::is_alive)
    }

    /// Append a line to the combat log.
    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push_back(line.into());
    }

    /// The most recent `n` log lines, oldest first.
    ///
    /// Presentation helper; the log itself is never truncated.
    #[must_use]
    pub fn recent_log(&self, n: usize) -> Vec<&str> {
        let skip = self.log.len().saturating_sub(n);
        self.log.iter().skip(skip).map(String::as_str).collect()
    }

    /// Serialize to an opaque save blob.
    ///
    /// The save layer stores this verbatim; the engine imposes no
    /// schema on it beyond round-tripping through [`from_bytes`].
    ///
    /// [`from_bytes`]: BattleState::from_bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Rehydrate a snapshot from a save blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::Stats;
    use crate::core::unit::UnitId;

    fn two_sided_state() -> BattleState {
        let ally = Unit::new(
            UnitId::new(1),
            "Ally",
            "A",
            Faction::Allies,
            Stats::new(80, 12, 3, 15),
        );
        let enemy = Unit::new(
            UnitId::new(2),
            "Enemy",
            "E",
            Faction::Enemies,
            Stats::new(60, 10, 5, 5),
        );
        BattleState::new(vec![ally], vec![enemy], DungeonState::new(3))
    }

    #[test]
    fn test_new_state_defaults() {
        let state = two_sided_state();

        assert_eq!(state.tick, 0);
        assert_eq!(state.status, BattleStatus::Preparation);
        assert_eq!(state.dungeon.room, 1);
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_unit_lookup_by_key() {
        let state = two_sided_state();

        let key = UnitKey::new(Faction::Enemies, 0);
        assert_eq!(state.unit(key).unwrap().name, "Enemy");
        assert!(state.unit(UnitKey::new(Faction::Enemies, 5)).is_none());
    }

    #[test]
    fn test_living_skips_dead() {
        let mut state = two_sided_state();
        state.enemies[0].is_dead = true;

        assert!(!state.has_living(Faction::Enemies));
        assert_eq!(state.living(Faction::Enemies).count(), 0);
        assert_eq!(state.living(Faction::Allies).count(), 1);
    }

    #[test]
    fn test_recent_log_truncates_from_front() {
        let mut state = two_sided_state();
        for i in 0..5 {
            state.push_log(format!("line {i}"));
        }

        assert_eq!(state.recent_log(2), vec!["line 3", "line 4"]);
        assert_eq!(state.recent_log(10).len(), 5);
    }

    #[test]
    fn test_is_final_room() {
        let mut dungeon = DungeonState::new(3);
        assert!(!dungeon.is_final_room());
        dungeon.room = 3;
        assert!(dungeon.is_final_room());
    }

    #[test]
    fn test_save_blob_round_trip() {
        let mut state = two_sided_state();
        state.push_log("a line");
        state.status = BattleStatus::Fighting;

        let bytes = state.to_bytes().unwrap();
        let restored = BattleState::from_bytes(&bytes).unwrap();

        assert_eq!(state, restored);
    }

    #[test]
    fn test_json_round_trip() {
        let state = two_sided_state();

        let json = serde_json::to_string(&state).unwrap();
        let restored: BattleState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, restored);
    }
}
