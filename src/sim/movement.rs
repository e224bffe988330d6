//! Movement integration and player steering
//!
//! Both are pure: they take the current values and return new ones.

use serde::{Deserialize, Serialize};

use super::Vector2;

/// Per-kind rule mapping (position, direction, tpf) to a new position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MovementPolicy {
    /// Never moves (background, center)
    Static,
    /// Player: direction * tpf * speed, direction changed only by steering
    Steered { speed: f64 },
    /// Cloud: fixed spawn-time direction * tpf * speed
    Drift { speed: f64 },
    /// Bullet: straight line at `speed` units/second along the normalized direction
    Projectile { speed: f64 },
}

impl MovementPolicy {
    pub fn advance(&self, pos: Vector2, dir: Option<Vector2>, tpf: f64) -> Vector2 {
        let Some(dir) = dir else {
            return pos;
        };
        match *self {
            MovementPolicy::Static => pos,
            MovementPolicy::Steered { speed } | MovementPolicy::Drift { speed } => {
                pos + dir * tpf * speed
            }
            MovementPolicy::Projectile { speed } => pos + dir.normalize_or_zero() * speed * tpf,
        }
    }
}

/// Steering operations for the player direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    Up,
    Down,
    Left,
    Right,
}

impl Steer {
    /// Nudge one axis by `step` toward its bound.
    ///
    /// The step only happens while the axis is strictly inside [-1, 1]; the
    /// result is then clamped so accumulated rounding cannot overshoot.
    /// No normalization: diagonals stay faster than straight lines.
    pub fn apply(self, dir: Vector2, step: f64) -> Vector2 {
        let mut dir = dir;
        match self {
            Steer::Up => {
                if dir.y > -1.0 {
                    dir.y = (dir.y - step).max(-1.0);
                }
            }
            Steer::Down => {
                if dir.y < 1.0 {
                    dir.y = (dir.y + step).min(1.0);
                }
            }
            Steer::Left => {
                if dir.x > -1.0 {
                    dir.x = (dir.x - step).max(-1.0);
                }
            }
            Steer::Right => {
                if dir.x < 1.0 {
                    dir.x = (dir.x + step).min(1.0);
                }
            }
        }
        dir
    }
}
