//! Per-unit status effects.
//!
//! Three independent flags with two reset scopes: blocking and dodging
//! last until the unit's own next turn starts; charged persists across
//! turns until consumed by a successful attack (or a room transition).

use serde::{Deserialize, Serialize};

/// Transient combat flags on a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffects {
    /// Halves incoming damage (defense counts double) until next turn.
    pub blocking: bool,
    /// The next incoming attack fully misses. Cleared at next turn
    /// start, not on being targeted.
    pub dodging: bool,
    /// Triples the next successful attack's damage. Persists across
    /// turns until consumed.
    pub charged: bool,
}

impl StatusEffects {
    /// Reset applied at the start of the unit's own turn.
    ///
    /// Charged is deliberately NOT reset here.
    pub fn begin_turn(&mut self) {
        self.blocking = false;
        self.dodging = false;
    }

    /// Full reset, including charged. Used on room transitions.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
