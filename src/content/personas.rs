//! Playable character templates.
//!
//! A `Persona` is pure data: base stats plus an initial gambit loadout.
//! It exists only at roster-creation time - `spawn` stamps out the
//! actual `Unit`, and from then on the persona plays no part in battle
//! state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Faction, Stats, Unit, UnitId};
use crate::gambits::{ActionKind, Condition, Gambit, GambitId, Target};

/// Unique identifier for a persona template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonaId(pub u32);

impl PersonaId {
    /// Create a new persona ID.
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

/// A playable character template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique identifier.
    pub id: PersonaId,
    /// Display name.
    pub name: String,
    /// Display icon.
    pub icon: String,
    /// Flavor text for the character select screen.
    pub description: String,
    /// Stats a spawned unit starts with.
    pub base_stats: Stats,
    /// Gambit loadout a spawned unit starts with.
    pub initial_gambits: Vec<Gambit>,
}

impl Persona {
    /// Stamp out an ally unit from this template.
    #[must_use]
    pub fn spawn(&self, unit_id: UnitId) -> Unit {
        let mut unit = Unit::new(
            unit_id,
            self.name.clone(),
            self.icon.clone(),
            Faction::Allies,
            self.base_stats,
        );
        unit.gambits.extend(self.initial_gambits.iter().copied());
        unit
    }
}

/// Registry of persona templates, keyed by ID.
#[derive(Clone, Debug, Default)]
pub struct PersonaRegistry {
    personas: FxHashMap<PersonaId, Persona>,
}

impl PersonaRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock roster of playable cats.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(commander_mitzie());
        registry.register(big_tom());
        registry.register(doc_purrkins());
        registry
    }

    /// Register a persona.
    ///
    /// Panics if a persona with the same ID already exists.
    pub fn register(&mut self, persona: Persona) {
        if self.personas.contains_key(&persona.id) {
            panic!("Persona with ID {:?} already registered", persona.id);
        }
        self.personas.insert(persona.id, persona);
    }

    /// Get a persona by ID.
    #[must_use]
    pub fn get(&self, id: PersonaId) -> Option<&Persona> {
        self.personas.get(&id)
    }

    /// Number of registered personas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Iterate over all personas.
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.values()
    }
}

// Gambit IDs are derived from the persona ID so repeated spawns are
// reproducible: persona N owns IDs N*10 + slot.
fn slot(persona: u32, index: u32) -> GambitId {
    GambitId::new(persona * 10 + index)
}

/// Nimble attacker: fast, fragile, heals herself in a pinch.
fn commander_mitzie() -> Persona {
    let id = 1;
    Persona {
        id: PersonaId::new(id),
        name: "Commander Mitzie".to_string(),
        icon: "\u{1F63C}".to_string(),
        description: "Fast paws, faster claws.".to_string(),
        base_stats: Stats::new(80, 12, 3, 15),
        initial_gambits: vec![
            Gambit::new(slot(id, 1), 1, Condition::HpBelow30, Target::Self_, ActionKind::Heal),
            Gambit::new(slot(id, 2), 2, Condition::Always, Target::EnemyClosest, ActionKind::Attack),
            Gambit::empty_slot(slot(id, 3), 3),
        ],
    }
}

/// Tanky bruiser: blocks when pressured, hunts the biggest threat.
fn big_tom() -> Persona {
    let id = 2;
    Persona {
        id: PersonaId::new(id),
        name: "Big Tom".to_string(),
        icon: "\u{1F408}".to_string(),
        description: "An immovable loaf.".to_string(),
        base_stats: Stats::new(120, 9, 6, 7),
        initial_gambits: vec![
            Gambit::new(slot(id, 1), 1, Condition::HpBelow50, Target::Self_, ActionKind::Block),
            Gambit::new(slot(id, 2), 2, Condition::Always, Target::EnemyStrongest, ActionKind::Attack),
            Gambit::empty_slot(slot(id, 3), 3),
        ],
    }
}

/// Support: charges up against healthy foes, finishes weakened ones.
fn doc_purrkins() -> Persona {
    let id = 3;
    Persona {
        id: PersonaId::new(id),
        name: "Doc Purrkins".to_string(),
        icon: "\u{1F431}".to_string(),
        description: "Prescribes naps and knockouts.".to_string(),
        base_stats: Stats::new(70, 8, 2, 11),
        initial_gambits: vec![
            Gambit::new(slot(id, 1), 1, Condition::HpBelow50, Target::Self_, ActionKind::Heal),
            Gambit::new(slot(id, 2), 2, Condition::EnemyHpAbove50, Target::Self_, ActionKind::Charge),
            Gambit::new(slot(id, 3), 3, Condition::Always, Target::EnemyLowestHp, ActionKind::Attack),
        ],
    }
}
