//! Room rosters and descriptions.
//!
//! The dungeon is a fixed sequence of rooms, each mapping to a static
//! enemy roster and a line of narration. `enemies_for_room` stamps out
//! fresh units every call with IDs derived from the room number, so
//! re-entering a room (or replaying a save) produces identical rosters.

use rustc_hash::FxHashMap;

use crate::core::{Faction, Stats, Unit, UnitId};
use crate::gambits::{ActionKind, Condition, Gambit, GambitId, Target};

/// Static definition of one room: narration plus enemy prototypes.
#[derive(Clone, Debug)]
pub struct RoomDef {
    /// Narration shown on entering the room.
    pub description: String,
    /// Enemy prototypes. IDs are reassigned on spawn.
    pub roster: Vec<Unit>,
}

/// The room→roster content table.
#[derive(Clone, Debug, Default)]
pub struct RoomTable {
    rooms: FxHashMap<u32, RoomDef>,
    max_rooms: u32,
}

impl RoomTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock three-room campaign against the household appliances.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(
            1,
            RoomDef {
                description: "The Living Room. A dusty expanse; The Vacuum powers on.".to_string(),
                roster: vec![the_vacuum()],
            },
        );
        table.register(
            2,
            RoomDef {
                description: "The Kitchen. Countertop appliances rattle to life.".to_string(),
                roster: vec![the_toaster(), the_blender()],
            },
        );
        table.register(
            3,
            RoomDef {
                description: "The Charging Dock. Roomba Prime awakens.".to_string(),
                roster: vec![roomba_prime(), the_toaster()],
            },
        );
        table
    }

    /// Register a room definition.
    ///
    /// Panics if the room number is already taken.
    pub fn register(&mut self, room: u32, def: RoomDef) {
        if self.rooms.contains_key(&room) {
            panic!("Room {room} already registered");
        }
        self.max_rooms = self.max_rooms.max(room);
        self.rooms.insert(room, def);
    }

    /// Total number of rooms in the campaign.
    #[must_use]
    pub fn max_rooms(&self) -> u32 {
        self.max_rooms
    }

    /// Narration for a room. Unknown rooms get a silent corridor.
    #[must_use]
    pub fn description(&self, room: u32) -> &str {
        self.rooms
            .get(&room)
            .map_or("A silent corridor.", |def| def.description.as_str())
    }

    /// Spawn a fresh enemy roster for a room.
    ///
    /// Unit IDs are `room * 100 + slot`, so rosters are reproducible
    /// without any shared counter. Unknown rooms yield an empty roster;
    /// validating content completeness is the caller's contract.
    #[must_use]
    pub fn enemies_for_room(&self, room: u32) -> Vec<Unit> {
        let Some(def) = self.rooms.get(&room) else {
            return Vec::new();
        };

        def.roster
            .iter()
            .enumerate()
            .map(|(slot, prototype)| {
                let mut unit = prototype.clone();
                unit.id = UnitId::new(room * 100 + slot as u32);
                unit
            })
            .collect()
    }
}

// Enemy gambit IDs live above 1000 to stay clear of persona slots.
fn enemy_slot(base: u32, index: u32) -> GambitId {
    GambitId::new(1000 + base * 10 + index)
}

fn enemy(name: &str, icon: &str, stats: Stats) -> Unit {
    Unit::new(UnitId::new(0), name, icon, Faction::Enemies, stats)
}

/// Slow, tanky opener.
fn the_vacuum() -> Unit {
    enemy("The Vacuum", "\u{1F916}", Stats::new(60, 10, 5, 5)).with_gambit(Gambit::new(
        enemy_slot(1, 1),
        1,
        Condition::Always,
        Target::EnemyClosest,
        ActionKind::Attack,
    ))
}

/// Quick and fragile; picks off the weakest cat.
fn the_toaster() -> Unit {
    enemy("The Toaster", "\u{1F35E}", Stats::new(35, 8, 2, 12)).with_gambit(Gambit::new(
        enemy_slot(2, 1),
        1,
        Condition::Always,
        Target::EnemyLowestHp,
        ActionKind::Attack,
    ))
}

/// Turtles up when hurt.
fn the_blender() -> Unit {
    enemy("The Blender", "\u{1F300}", Stats::new(45, 11, 1, 10))
        .with_gambit(Gambit::new(
            enemy_slot(3, 1),
            1,
            Condition::HpBelow30,
            Target::Self_,
            ActionKind::Block,
        ))
        .with_gambit(Gambit::new(
            enemy_slot(3, 2),
            2,
            Condition::Always,
            Target::EnemyClosest,
            ActionKind::Attack,
        ))
}

/// The boss: dodges when hurt, focuses the strongest cat.
fn roomba_prime() -> Unit {
    enemy("Roomba Prime", "\u{1F47E}", Stats::new(110, 13, 4, 8))
        .with_gambit(Gambit::new(
            enemy_slot(4, 1),
            1,
            Condition::HpBelow30,
            Target::Self_,
            ActionKind::Dodge,
        ))
        .with_gambit(Gambit::new(
            enemy_slot(4, 2),
            2,
            Condition::EnemyHpAbove50,
            Target::EnemyStrongest,
            ActionKind::Attack,
        ))
        .with_gambit(Gambit::new(
            enemy_slot(4, 3),
            3,
            Condition::Always,
            Target::EnemyClosest,
            ActionKind::Attack,
        ))
}
