//! Duke & Clouds - a tiny arcade dodge-and-shoot game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, boundaries, spawning, collisions, game state)
//! - `host`: Headless engine glue (overlap detection, off-screen cleanup, dialog, globals)
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime configuration loaded from JSON
//! - `autopilot`: Demo input for unattended runs

pub mod autopilot;
pub mod error;
pub mod host;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use error::ConfigError;
pub use host::{Dialog, Engine};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default field size (stand-in for the display resolution)
    pub const DEFAULT_FIELD_WIDTH: u32 = 1920;
    pub const DEFAULT_FIELD_HEIGHT: u32 = 1080;

    /// Longest frame the host will simulate in one go (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Lives at the start of every game
    pub const START_LIVES: u8 = 5;
    /// Most clouds alive at once
    pub const CLOUD_CAP: usize = 10;

    /// Per-event change of one direction axis
    pub const STEER_STEP: f64 = 0.01;

    /// Speed multipliers applied to direction * tpf
    pub const PLAYER_SPEED: f64 = 1.0;
    pub const CLOUD_SPEED: f64 = 3.0;
    /// Bullet travel speed (units/second)
    pub const BULLET_SPEED: f64 = 350.0;
    /// Bullet spawn offset from the player position
    pub const BULLET_OFFSET: (f64, f64) = (20.0, -5.0);

    /// Hitbox sizes
    pub const DUKE_SIZE: f64 = 50.0;
    pub const CLOUD_SIZE: f64 = 50.0;
    pub const BULLET_WIDTH: f64 = 22.0;
    pub const BULLET_HEIGHT: f64 = 11.0;
    /// Center obstacle circle radius
    pub const CENTER_RADIUS: f64 = 80.0;
}
