//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes in from the host
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod entity;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

/// 2D position/direction vector (double precision)
pub type Vector2 = glam::DVec2;

pub use boundary::{BoundaryEffect, BoundaryPolicy, Field};
pub use collision::{CollisionRules, Contact, Reaction, resolve_collisions};
pub use entity::{Entity, EntityId, EntityKind, Hitbox};
pub use movement::{MovementPolicy, Steer};
pub use state::{GameEvent, GamePhase, GameState, Scoreboard};
pub use tick::{TickInput, apply_input, tick};
