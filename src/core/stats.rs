//! Unit combat statistics.
//!
//! `Stats` holds the mutable numeric state of a unit. The invariant
//! `0 <= hp <= max_hp` is preserved by the mutation helpers; callers
//! apply damage and healing through them rather than writing `hp`
//! directly.

use serde::{Deserialize, Serialize};

/// Combat statistics for a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Current hit points. Always in `0..=max_hp`.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Attack power.
    pub atk: i32,
    /// Defense, subtracted from incoming damage.
    pub def: i32,
    /// Turn-order speed. Higher acts first.
    pub speed: i32,
}

impl Stats {
    /// Create stats at full health.
    #[must_use]
    pub const fn new(max_hp: i32, atk: i32, def: i32, speed: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            atk,
            def,
            speed,
        }
    }

    /// Current hp as a fraction of max, using true division.
    #[must_use]
    pub fn hp_ratio(&self) -> f64 {
        f64::from(self.hp) / f64::from(self.max_hp)
    }

    /// Whether hp is at max.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.hp >= self.max_hp
    }

    /// Subtract damage, flooring hp at 0.
    ///
    /// Returns true if this drop brought the unit to 0 hp.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount).max(0);
        self.hp == 0
    }

    /// Add healing, capped at max hp.
    ///
    /// Returns the amount actually applied (0 when already full).
    pub fn apply_heal(&mut self, amount: i32) -> i32 {
        let applied = amount.min(self.max_hp - self.hp);
        self.hp += applied;
        applied
    }
}
