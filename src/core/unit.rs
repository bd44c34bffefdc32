//! Units and rosters.
//!
//! A `Unit` is one combatant: identity, display info, stats, an ordered
//! list of gambits, and transient status flags. Units carry an explicit
//! `Faction` tag, resolved once at roster assembly, so opposition checks
//! never scan rosters for membership.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::stats::Stats;
use super::status::StatusEffects;
use crate::gambits::{Gambit, GambitId};

/// Unique identifier for a unit within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a new unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// Which side of the battle a unit fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The player's roster.
    Allies,
    /// The current room's roster.
    Enemies,
}

impl Faction {
    /// The other side.
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            Faction::Allies => Faction::Enemies,
            Faction::Enemies => Faction::Allies,
        }
    }
}

/// Address of a roster slot: faction plus index.
///
/// Slots are stable for the duration of a battle (death flags a unit,
/// it is never removed), so a key resolved at the start of an action
/// stays valid through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitKey {
    /// Roster the unit belongs to.
    pub faction: Faction,
    /// Index within that roster.
    pub index: usize,
}

impl UnitKey {
    /// Create a key for a roster slot.
    #[must_use]
    pub const fn new(faction: Faction, index: usize) -> Self {
        Self { faction, index }
    }
}

/// One combatant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier.
    pub id: UnitId,
    /// Display name.
    pub name: String,
    /// Display icon (emoji in the stock content).
    pub icon: String,
    /// Side this unit fights on.
    pub faction: Faction,
    /// Combat statistics.
    pub stats: Stats,
    /// Prioritized rules. List order breaks priority ties.
    ///
    /// SmallVec optimizes for the typical 1-4 gambit loadout.
    pub gambits: SmallVec<[Gambit; 4]>,
    /// Set when hp reaches 0; dead units never act or get targeted.
    pub is_dead: bool,
    /// Transient combat flags.
    pub status: StatusEffects,
    /// Gambit that fired on this unit's last turn.
    ///
    /// Presentation feedback only - recomputed every tick, never
    /// authoritative.
    pub last_triggered: Option<GambitId>,
}

impl Unit {
    /// Create a unit with no gambits.
    #[must_use]
    pub fn new(
        id: UnitId,
        name: impl Into<String>,
        icon: impl Into<String>,
        faction: Faction,
        stats: Stats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            faction,
            stats,
            gambits: SmallVec::new(),
            is_dead: false,
            status: StatusEffects::default(),
            last_triggered: None,
        }
    }

    /// Add a gambit (builder pattern).
    #[must_use]
    pub fn with_gambit(mut self, gambit: Gambit) -> Self {
        self.gambits.push(gambit);
        self
    }

    /// Whether this unit can still act and be targeted.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    /// Gambit indices sorted ascending by priority.
    ///
    /// Stable: equal priorities keep list order. Evaluation walks this
    /// order and fires the first match.
    #[must_use]
    pub fn gambit_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.gambits.len()).collect();
        order.sort_by_key(|&i| self.gambits[i].priority);
        order
    }

    /// Look up a gambit for editing between battles.
    pub fn gambit_mut(&mut self, id: GambitId) -> Option<&mut Gambit> {
        self.gambits.iter_mut().find(|g| g.id == id)
    }
}
