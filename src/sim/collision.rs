//! Collision reactions
//!
//! Overlap detection belongs to the host; this module only decides what a
//! reported pair does to the game. Pairs are order-insensitive.

use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind};
use super::state::{GameEvent, GameState};

/// What a colliding pair does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    /// Player touched the center or a cloud
    PlayerDies,
    /// Bullet hit a cloud: +1 score, both removed
    CloudShot,
}

/// A newly overlapping pair reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
}

impl Contact {
    pub fn new(a: EntityId, b: EntityId) -> Self {
        Self { a, b }
    }
}

/// Reaction table keyed by kind pair
pub struct CollisionRules;

impl CollisionRules {
    pub fn reaction(a: EntityKind, b: EntityKind) -> Option<Reaction> {
        use EntityKind::*;
        match (a, b) {
            (Player, Center) | (Center, Player) => Some(Reaction::PlayerDies),
            (Player, Cloud) | (Cloud, Player) => Some(Reaction::PlayerDies),
            (Bullet, Cloud) | (Cloud, Bullet) => Some(Reaction::CloudShot),
            _ => None,
        }
    }
}

/// Apply each contact in order; returns how many had an effect.
///
/// An entity removed by an earlier contact is gone for the rest of the batch,
/// so a cloud hit by two bullets scores once.
pub fn resolve_collisions(state: &mut GameState, contacts: &[Contact]) -> usize {
    let mut applied = 0;
    for contact in contacts {
        if state.is_game_over() {
            break;
        }
        if contact.a == contact.b {
            continue;
        }
        let (Some(a), Some(b)) = (state.get(contact.a), state.get(contact.b)) else {
            log::debug!("Skipping stale contact {:?}", contact);
            continue;
        };
        let (a_kind, b_kind) = (a.kind, b.kind);
        let Some(reaction) = CollisionRules::reaction(a_kind, b_kind) else {
            continue;
        };

        match reaction {
            Reaction::PlayerDies => state.die(),
            Reaction::CloudShot => {
                let (bullet, cloud) = if a_kind == EntityKind::Bullet {
                    (contact.a, contact.b)
                } else {
                    (contact.b, contact.a)
                };
                state.remove(bullet);
                state.remove(cloud);
                state.award(1);
                state.events.push(GameEvent::CloudDestroyed { cloud, bullet });
            }
        }
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Vector2;
    use crate::sim::boundary::Field;
    use crate::sim::spawn;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(Field::new(800, 600), Tuning::default(), 3)
    }

    fn center_id(state: &GameState) -> EntityId {
        state
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Center)
            .map(|e| e.id)
            .unwrap()
    }

    #[test]
    fn test_reaction_table() {
        use EntityKind::*;
        assert_eq!(CollisionRules::reaction(Player, Center), Some(Reaction::PlayerDies));
        assert_eq!(CollisionRules::reaction(Cloud, Player), Some(Reaction::PlayerDies));
        assert_eq!(CollisionRules::reaction(Cloud, Bullet), Some(Reaction::CloudShot));
        assert_eq!(CollisionRules::reaction(Bullet, Center), None);
        assert_eq!(CollisionRules::reaction(Cloud, Center), None);
        assert_eq!(CollisionRules::reaction(Player, Bullet), None);
    }

    #[test]
    fn test_bullet_cloud_scores_and_removes_both() {
        let mut state = new_state();
        let cloud = spawn::spawn_cloud(&mut state);
        let bullet = state.shoot().unwrap();

        let applied = resolve_collisions(&mut state, &[Contact::new(cloud, bullet)]);
        assert_eq!(applied, 1);
        assert_eq!(state.score, 1);
        assert!(!state.is_live(cloud));
        assert!(!state.is_live(bullet));
    }

    #[test]
    fn test_cloud_hit_by_two_bullets_scores_once() {
        let mut state = new_state();
        let cloud = spawn::spawn_cloud(&mut state);
        let b1 = state.shoot().unwrap();
        let b2 = state.shoot().unwrap();

        let contacts = [Contact::new(b1, cloud), Contact::new(b2, cloud)];
        assert_eq!(resolve_collisions(&mut state, &contacts), 1);
        assert_eq!(state.score, 1);
        // The second bullet keeps flying
        assert!(state.is_live(b2));
    }

    #[test]
    fn test_player_center_on_last_life_ends_game() {
        let mut state = new_state();
        state.lives = 1;
        state.score = 4;
        let center = center_id(&state);
        let player = state.player.id;
        resolve_collisions(&mut state, &[Contact::new(player, center)]);
        assert_eq!(state.lives, 0);
        assert!(state.is_game_over());

        state.restart();
        assert_eq!(state.lives, 5);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_player_cloud_costs_a_life() {
        let mut state = new_state();
        let cloud = spawn::spawn_cloud(&mut state);
        state.player.pos = Vector2::new(400.0, 300.0);
        let player = state.player.id;
        resolve_collisions(&mut state, &[Contact::new(cloud, player)]);
        assert_eq!(state.lives, 4);
        assert_eq!(state.player.pos, Vector2::ZERO);
        // Clouds are not removed by hitting the player
        assert!(state.is_live(cloud));
    }

    #[test]
    fn test_unregistered_and_stale_pairs_are_noops() {
        let mut state = new_state();
        let center = center_id(&state);
        let bullet = state.shoot().unwrap();
        let contacts = [
            Contact::new(bullet, center),
            Contact::new(EntityId(777), state.player.id),
            Contact::new(bullet, bullet),
        ];
        assert_eq!(resolve_collisions(&mut state, &contacts), 0);
        assert_eq!(state.lives, 5);
        assert_eq!(state.score, 0);
        assert!(state.is_live(bullet));
    }

    #[test]
    fn test_contacts_after_game_over_are_ignored() {
        let mut state = new_state();
        state.lives = 1;
        let center = center_id(&state);
        let cloud = spawn::spawn_cloud(&mut state);
        let bullet = state.shoot().unwrap();
        let contacts = [
            Contact::new(state.player.id, center),
            Contact::new(bullet, cloud),
        ];
        assert_eq!(resolve_collisions(&mut state, &contacts), 1);
        assert_eq!(state.score, 0);
        assert!(state.is_live(cloud));
    }

    proptest! {
        #[test]
        fn prop_score_counts_destroyed_clouds(hits in prop::collection::vec((0usize..6, 0usize..6), 0..40)) {
            let mut state = new_state();
            let clouds: Vec<_> = (0..6).map(|_| spawn::spawn_cloud(&mut state)).collect();
            let bullets: Vec<_> = (0..6).map(|_| state.shoot().unwrap()).collect();

            let mut last_score = state.score;
            for (b, c) in hits {
                let contact = Contact::new(bullets[b], clouds[c]);
                let both_live = state.is_live(bullets[b]) && state.is_live(clouds[c]);
                resolve_collisions(&mut state, &[contact]);
                let expected = if both_live { last_score + 1 } else { last_score };
                prop_assert_eq!(state.score, expected);
                last_score = state.score;
            }
            let destroyed = clouds.iter().filter(|c| !state.is_live(**c)).count() as u64;
            prop_assert_eq!(state.score, destroyed);
        }
    }
}
