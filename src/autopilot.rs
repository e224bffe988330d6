//! Demo autopilot
//!
//! Orbits the center obstacle at a safe distance, keeps clear of the field
//! edges and fires on a fixed cadence. Fully deterministic.

use crate::consts::{CENTER_RADIUS, DUKE_SIZE};
use crate::sim::{GameState, TickInput, Vector2};

/// Frames between shots
const FIRE_INTERVAL: u64 = 12;
/// Distance from an edge at which the pilot turns back inward
const EDGE_MARGIN: f64 = 80.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    frame: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction the pilot would like the player to travel
    pub fn desired_direction(state: &GameState) -> Vector2 {
        let field = state.field;
        let half = Vector2::splat(DUKE_SIZE / 2.0);
        let me = state.player.pos + half;
        let center = field.center();
        let to_me = me - center;

        let orbit = (field.width.min(field.height) as f64 * 0.3).max(CENTER_RADIUS * 2.0);
        let radial = to_me.normalize_or(Vector2::X);
        // Clockwise tangent plus a pull toward the orbit radius
        let tangent = radial.perp();
        let correction = (orbit - to_me.length()) / orbit;
        let mut desired = tangent + radial * correction.clamp(-1.0, 1.0);

        // Turn back from the edges
        if me.x < EDGE_MARGIN {
            desired.x = 1.0;
        } else if me.x > field.width as f64 - EDGE_MARGIN {
            desired.x = -1.0;
        }
        if me.y < EDGE_MARGIN {
            desired.y = 1.0;
        } else if me.y > field.height as f64 - EDGE_MARGIN {
            desired.y = -1.0;
        }

        desired.clamp(Vector2::NEG_ONE, Vector2::ONE)
    }

    /// Input for the next frame
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        self.frame += 1;
        let desired = Self::desired_direction(state);
        let dir = state.player_direction();
        let dead_zone = state.tuning.steer_step / 2.0;

        TickInput {
            left: desired.x < dir.x - dead_zone,
            right: desired.x > dir.x + dead_zone,
            up: desired.y < dir.y - dead_zone,
            down: desired.y > dir.y + dead_zone,
            shoot: self.frame % FIRE_INTERVAL == 0,
        }
    }
}
