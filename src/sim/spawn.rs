//! Spawn controller
//!
//! Decides when and where entities appear: scenery and the player once per
//! run, a cloud per tick while under the cap, a bullet per shot.

use super::Vector2;
use super::entity::{Entity, EntityId, EntityKind};
use super::state::{GameEvent, GameState};
use crate::consts::CENTER_RADIUS;

/// Background and center obstacle (permanent)
pub fn spawn_scenery(state: &mut GameState) {
    let id = state.next_entity_id();
    state
        .entities
        .push(Entity::new(id, EntityKind::Background, Vector2::ZERO));

    // Circle view is drawn at (+r/2, +r/2), so it sits on the field center
    let center = state.field.center() - Vector2::splat(CENTER_RADIUS / 2.0);
    let id = state.next_entity_id();
    state
        .entities
        .push(Entity::new(id, EntityKind::Center, center));
    log::debug!("Spawned center obstacle at {center}");
}

/// The player at the field origin with the start direction
pub fn spawn_player(state: &mut GameState) {
    let id = state.next_entity_id();
    state.player = Entity::new(id, EntityKind::Player, Vector2::ZERO)
        .with_direction(state.tuning.player_start_direction);
    log::debug!("Spawned duke {:?}", id);
}

/// Add one cloud if the population is below the cap
pub fn top_up_clouds(state: &mut GameState) -> Option<EntityId> {
    if state.is_game_over() || state.cloud_count() >= state.tuning.cloud_cap {
        return None;
    }
    Some(spawn_cloud(state))
}

/// A cloud at the field center with a fresh random direction
pub fn spawn_cloud(state: &mut GameState) -> EntityId {
    let dir = state.random_direction();
    let id = state.next_entity_id();
    let pos = state.field.center();
    state
        .entities
        .push(Entity::new(id, EntityKind::Cloud, pos).with_direction(dir));
    state.events.push(GameEvent::CloudSpawned { id });
    log::debug!("Spawned cloud {:?} heading {dir}", id);
    id
}

/// A bullet just ahead of the player, inheriting its current direction
pub fn spawn_bullet(state: &mut GameState) -> Option<EntityId> {
    if state.is_game_over() {
        return None;
    }
    let pos = state.player.pos + state.tuning.bullet_offset;
    let dir = state.player_direction();
    let id = state.next_entity_id();
    state
        .entities
        .push(Entity::new(id, EntityKind::Bullet, pos).with_direction(dir));
    state.events.push(GameEvent::BulletFired { id });
    log::debug!("Fired bullet {:?} from {pos} heading {dir}", id);
    Some(id)
}
