//! Field bounds and what leaving them does

use serde::{Deserialize, Serialize};

use super::Vector2;
use super::entity::Hitbox;

/// The visible play area, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: u32,
    pub height: u32,
}

impl Field {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Inside [0, width) x [0, height)
    pub fn contains(&self, pos: Vector2) -> bool {
        pos.x >= 0.0
            && pos.x < self.width as f64
            && pos.y >= 0.0
            && pos.y < self.height as f64
    }

    /// Center point using integer halving of the dimensions
    pub fn center(&self) -> Vector2 {
        Vector2::new((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// True when the whole box lies outside the field
    pub fn box_is_offscreen(&self, pos: Vector2, hitbox: &Hitbox) -> bool {
        let (min, max) = hitbox.bounds(pos);
        max.x < 0.0 || max.y < 0.0 || min.x > self.width as f64 || min.y > self.height as f64
    }
}

/// Per-kind reaction to being off-field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Permanent scenery
    Ignore,
    /// Player loses a life
    Die,
    /// Removed silently, no score
    Despawn,
    /// Left to the host's generic off-screen cleanup
    OffscreenClean,
}

/// Outcome of a boundary check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryEffect {
    Stay,
    Die,
    Remove,
}

impl BoundaryPolicy {
    pub fn evaluate(&self, field: &Field, pos: Vector2) -> BoundaryEffect {
        match self {
            BoundaryPolicy::Ignore | BoundaryPolicy::OffscreenClean => BoundaryEffect::Stay,
            _ if field.contains(pos) => BoundaryEffect::Stay,
            BoundaryPolicy::Die => BoundaryEffect::Die,
            BoundaryPolicy::Despawn => BoundaryEffect::Remove,
        }
    }
}
