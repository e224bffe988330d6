//! Per-frame simulation tick
//!
//! Order within a tick is fixed: input, movement, boundaries, cloud top-up.
//! A tick with a non-finite or non-positive `dt` does nothing at all.
//! Collision resolution runs afterwards, once the host has found the
//! overlapping pairs.

use super::boundary::BoundaryEffect;
use super::movement::Steer;
use super::spawn;
use super::state::{GameEvent, GameState};

/// Input commands delivered between ticks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Directional keys (held: one step per frame each)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire (one-shot, host clears after the frame)
    pub shoot: bool,
}

/// Apply steering and shooting. Inert after game over.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if state.is_game_over() {
        return;
    }
    let steers = [
        (input.left, Steer::Left),
        (input.right, Steer::Right),
        (input.up, Steer::Up),
        (input.down, Steer::Down),
    ];
    for (held, steer) in steers {
        if held {
            state.steer(steer);
        }
    }
    if input.shoot {
        state.shoot();
    }
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) {
    // Don't tick after game over
    if state.is_game_over() {
        return;
    }

    // A bad dt drops the whole tick, input included
    if !dt.is_finite() || dt <= 0.0 {
        log::debug!("Ignoring tick with dt={dt}");
        return;
    }

    apply_input(state, input);

    state.time_ticks += 1;

    // Movement
    let tuning = &state.tuning;
    let player = &mut state.player;
    player.pos = player.kind.movement(tuning).advance(player.pos, player.dir, dt);
    for entity in &mut state.entities {
        entity.pos = entity
            .kind
            .movement(tuning)
            .advance(entity.pos, entity.dir, dt);
    }

    // Boundaries
    let field = state.field;
    if state.player.kind.boundary().evaluate(&field, state.player.pos) == BoundaryEffect::Die {
        log::debug!("Player left the field at {}", state.player.pos);
        state.die();
    }

    let escaped: Vec<_> = state
        .entities
        .iter()
        .filter(|e| e.kind.boundary().evaluate(&field, e.pos) == BoundaryEffect::Remove)
        .map(|e| e.id)
        .collect();
    for id in escaped {
        if state.remove(id) {
            state.events.push(GameEvent::CloudEscaped { id });
        }
    }

    if state.is_game_over() {
        return;
    }

    // Cloud top-up
    spawn::top_up_clouds(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Vector2;
    use crate::sim::entity::EntityKind;
    use crate::sim::boundary::Field;
    use crate::sim::state::GamePhase;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const DT: f64 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(Field::new(1920, 1080), Tuning::default(), 12345)
    }

    #[test]
    fn test_clouds_fill_to_cap_one_per_tick() {
        let mut state = new_state();
        let input = TickInput::default();
        for i in 1..=12 {
            tick(&mut state, &input, DT);
            assert_eq!(state.cloud_count(), i.min(10));
        }
    }

    #[test]
    fn test_player_moves_by_direction_times_tpf() {
        let mut state = new_state();
        state.player.pos = Vector2::new(100.0, 100.0);
        tick(&mut state, &TickInput::default(), 0.5);
        assert_eq!(state.player.pos, Vector2::new(100.5, 100.5));
    }

    #[test]
    fn test_player_leaving_field_dies() {
        let mut state = new_state();
        state.player.pos = Vector2::new(10.0, 10.0);
        state.player.dir = Some(Vector2::new(-1.0, 0.0));
        tick(&mut state, &TickInput::default(), 20.0);
        assert_eq!(state.lives, 4);
        assert_eq!(state.player.pos, Vector2::ZERO);
        assert_eq!(state.player_direction(), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_escaped_cloud_removed_without_score() {
        let mut state = new_state();
        let id = spawn::spawn_cloud(&mut state);
        if let Some(cloud) = state.entities.iter_mut().find(|e| e.id == id) {
            cloud.pos = Vector2::new(1919.9, 500.0);
            cloud.dir = Some(Vector2::new(1.0, 0.0));
        }
        tick(&mut state, &TickInput::default(), 1.0);
        assert!(!state.is_live(id));
        assert_eq!(state.score, 0);
        assert!(state.drain_events().contains(&GameEvent::CloudEscaped { id }));
    }

    #[test]
    fn test_bullets_are_left_to_host_cleanup() {
        let mut state = new_state();
        state.player.pos = Vector2::new(1800.0, 500.0);
        state.player.dir = Some(Vector2::new(1.0, 0.0));
        let id = state.shoot().unwrap();
        tick(&mut state, &TickInput::default(), 1.0);
        let bullet = state.get(id).unwrap();
        assert_eq!(bullet.pos, Vector2::new(1820.0 + 350.0, 495.0));
    }

    #[test]
    fn test_input_steers_and_shoots() {
        let mut state = new_state();
        let input = TickInput {
            up: true,
            left: true,
            shoot: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.player_direction(), Vector2::new(0.99, 0.99));
        assert_eq!(state.count_of(EntityKind::Bullet), 1);
    }

    #[test]
    fn test_bad_dt_is_noop() {
        let mut state = new_state();
        let input = TickInput {
            up: true,
            right: true,
            shoot: true,
            ..Default::default()
        };
        state.player.dir = Some(Vector2::new(0.5, 0.5));
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            tick(&mut state, &input, dt);
        }
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.cloud_count(), 0);
        assert_eq!(state.count_of(EntityKind::Bullet), 0);
        assert_eq!(state.player_direction(), Vector2::new(0.5, 0.5));
        assert_eq!(state.player.pos, Vector2::ZERO);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_game_over_is_inert() {
        let mut state = new_state();
        state.lives = 1;
        state.die();
        assert_eq!(state.phase, GamePhase::GameOver);
        let pos = state.player.pos;
        let input = TickInput {
            down: true,
            shoot: true,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.pos, pos);
        assert_eq!(state.cloud_count(), 0);
        assert_eq!(state.count_of(EntityKind::Bullet), 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state();
        let mut state2 = new_state();
        let inputs = [
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput {
                shoot: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..30 {
            for input in &inputs {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }
        assert_eq!(state1.entities, state2.entities);
        assert_eq!(state1.player, state2.player);
        assert!(state1.entities.is_sorted_by_key(|e| e.id));
    }

    proptest! {
        #[test]
        fn prop_cloud_cap_holds(dts in prop::collection::vec(0.0f64..2.0, 1..60)) {
            let mut state = new_state();
            for dt in dts {
                let before = state.cloud_count();
                tick(&mut state, &TickInput::default(), dt);
                prop_assert!(state.cloud_count() <= 10);
                if dt > 0.0 && before < 10 && !state.is_game_over() {
                    // At most one new cloud per tick
                    prop_assert!(state.cloud_count() <= before + 1);
                }
            }
        }
    }
}
