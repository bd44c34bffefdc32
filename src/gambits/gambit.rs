//! Gambit data model.
//!
//! A gambit is one prioritized condition→target→action rule. Units
//! carry an ordered list of them; every turn the first active gambit
//! whose condition holds and whose target resolves fires, and the rest
//! are ignored.

use serde::{Deserialize, Serialize};

/// Unique identifier for a gambit within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GambitId(pub u32);

impl GambitId {
    /// Create a new gambit ID.
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

impl std::fmt::Display for GambitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gambit({})", self.0)
    }
}

/// Predicate deciding whether a gambit may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Always fires.
    Always,
    /// Own hp strictly below 30% of max.
    HpBelow30,
    /// Own hp strictly below 50% of max.
    HpBelow50,
    /// Some living opposing unit strictly above 50% of its max hp.
    EnemyHpAbove50,
    /// Some living opposing unit currently blocking.
    EnemyIsBlocking,
    /// Inert placeholder: there is no mana system, so this always
    /// holds. Kept as data so saved loadouts referencing it stay valid.
    ManaFull,
}

/// Who a gambit's action applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// The acting unit itself.
    Self_,
    /// Living same-roster unit with the lowest current hp.
    AllyLowestHp,
    /// First living opposing unit in roster order. There is no spatial
    /// model; "closest" is roster position.
    EnemyClosest,
    /// Living opposing unit with the lowest current hp.
    EnemyLowestHp,
    /// Living opposing unit with the highest atk.
    EnemyStrongest,
}

/// What a gambit does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Deal variance-scaled damage, mitigated by the target's defense.
    Attack,
    /// Restore variance-scaled hp, capped at max.
    Heal,
    /// Double own defense against attacks until next turn.
    Block,
    /// Fully evade the next incoming attack until next turn.
    Dodge,
    /// Triple the next successful attack. Persists until consumed.
    Charge,
    /// Do nothing, on purpose.
    Wait,
}

/// One prioritized condition→target→action rule.
///
/// Immutable while a tick is being resolved; edited only between
/// battles via [`Unit::gambit_mut`].
///
/// [`Unit::gambit_mut`]: crate::core::Unit::gambit_mut
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gambit {
    /// Unique identifier.
    pub id: GambitId,
    /// Inactive gambits never fire but keep their slot.
    pub active: bool,
    /// Lower fires first. Equal priorities keep list order.
    pub priority: i32,
    /// When the rule applies.
    pub condition: Condition,
    /// Who it applies to.
    pub target: Target,
    /// What it does.
    pub action: ActionKind,
}

impl Gambit {
    /// Create an active gambit.
    #[must_use]
    pub const fn new(
        id: GambitId,
        priority: i32,
        condition: Condition,
        target: Target,
        action: ActionKind,
    ) -> Self {
        Self {
            id,
            active: true,
            priority,
            condition,
            target,
            action,
        }
    }

    /// Create an inactive placeholder slot.
    ///
    /// Matches the loadout editor's "empty" rows: harmless defaults,
    /// switched on when the player fills the slot in.
    #[must_use]
    pub const fn empty_slot(id: GambitId, priority: i32) -> Self {
        Self {
            id,
            active: false,
            priority,
            condition: Condition::Always,
            target: Target::EnemyClosest,
            action: ActionKind::Wait,
        }
    }

    /// Deactivate (builder pattern).
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
