//! Entity kinds and their behavior table
//!
//! Each kind maps to one movement policy, one boundary policy and a hitbox.
//! Nothing is dispatched through per-kind component objects.

use serde::{Deserialize, Serialize};

use super::Vector2;
use super::boundary::BoundaryPolicy;
use super::movement::MovementPolicy;
use crate::consts::*;
use crate::tuning::Tuning;

/// Stable entity identity (allocation order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Background,
    Center,
    /// The player ("duke")
    Player,
    Cloud,
    Bullet,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Background => "background",
            EntityKind::Center => "center",
            EntityKind::Player => "duke",
            EntityKind::Cloud => "cloud",
            EntityKind::Bullet => "bullet",
        }
    }

    /// How this kind moves each tick
    pub fn movement(&self, tuning: &Tuning) -> MovementPolicy {
        match self {
            EntityKind::Background | EntityKind::Center => MovementPolicy::Static,
            EntityKind::Player => MovementPolicy::Steered {
                speed: tuning.player_speed,
            },
            EntityKind::Cloud => MovementPolicy::Drift {
                speed: tuning.cloud_speed,
            },
            EntityKind::Bullet => MovementPolicy::Projectile {
                speed: tuning.bullet_speed,
            },
        }
    }

    /// What leaving the field does to this kind
    pub fn boundary(&self) -> BoundaryPolicy {
        match self {
            EntityKind::Background | EntityKind::Center => BoundaryPolicy::Ignore,
            EntityKind::Player => BoundaryPolicy::Die,
            EntityKind::Cloud => BoundaryPolicy::Despawn,
            EntityKind::Bullet => BoundaryPolicy::OffscreenClean,
        }
    }

    /// Collision box for this kind (None = never collides)
    pub fn hitbox(&self) -> Option<Hitbox> {
        match self {
            EntityKind::Background => None,
            EntityKind::Center => Some(Hitbox {
                offset: Vector2::splat(-CENTER_RADIUS / 2.0),
                size: Vector2::splat(CENTER_RADIUS * 2.0),
            }),
            EntityKind::Player => Some(Hitbox::at_origin(DUKE_SIZE, DUKE_SIZE)),
            EntityKind::Cloud => Some(Hitbox::at_origin(CLOUD_SIZE, CLOUD_SIZE)),
            EntityKind::Bullet => Some(Hitbox::at_origin(BULLET_WIDTH, BULLET_HEIGHT)),
        }
    }

    /// Permanent kinds survive restarts and refuse removal
    pub fn is_irremovable(&self) -> bool {
        matches!(self, EntityKind::Background | EntityKind::Center)
    }
}

/// Axis-aligned collision box relative to the entity position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub offset: Vector2,
    pub size: Vector2,
}

impl Hitbox {
    pub fn at_origin(width: f64, height: f64) -> Self {
        Self {
            offset: Vector2::ZERO,
            size: Vector2::new(width, height),
        }
    }

    /// World-space (min, max) corners for an entity at `pos`
    pub fn bounds(&self, pos: Vector2) -> (Vector2, Vector2) {
        let min = pos + self.offset;
        (min, min + self.size)
    }

    /// Strict overlap; boxes sharing only an edge do not overlap
    pub fn overlaps(&self, pos: Vector2, other: &Hitbox, other_pos: Vector2) -> bool {
        let (a_min, a_max) = self.bounds(pos);
        let (b_min, b_max) = other.bounds(other_pos);
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// A live entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vector2,
    /// Travel direction (player, clouds, bullets)
    pub dir: Option<Vector2>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, pos: Vector2) -> Self {
        Self {
            id,
            kind,
            pos,
            dir: None,
        }
    }

    pub fn with_direction(mut self, dir: Vector2) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn hitbox(&self) -> Option<Hitbox> {
        self.kind.hitbox()
    }
}
