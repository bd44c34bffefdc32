//! Static content tables: personas and room rosters.
//!
//! Pure data with no behavior beyond stamping units out of templates.
//! The engine consumes these through `new_run` (campaign start) and
//! `dungeon::advance_room` (next roster); nothing in here mutates
//! battle state.

mod personas;
mod rooms;

pub use personas::{Persona, PersonaId, PersonaRegistry};
pub use rooms::{RoomDef, RoomTable};

use crate::core::{BattleState, DungeonState, UnitId};

/// Start a fresh campaign run for a chosen persona.
///
/// Spawns the persona into the ally roster, spawns room 1's enemies,
/// and returns a preparation-phase snapshot with opening narration.
#[must_use]
pub fn new_run(persona: &Persona, rooms: &RoomTable) -> BattleState {
    let allies = vec![persona.spawn(UnitId::new(1))];
    let enemies = rooms.enemies_for_room(1);

    let mut state = BattleState::new(allies, enemies, DungeonState::new(rooms.max_rooms()));
    state.push_log(format!(
        "{} {} enters the dungeon!",
        persona.icon, persona.name
    ));
    state.push_log(format!("Room 1: {}", rooms.description(1)));
    state
}
