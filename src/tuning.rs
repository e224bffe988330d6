//! Gameplay tuning
//!
//! Every number that shapes how the game plays. The defaults reproduce the
//! classic behavior exactly; a settings file may override any of them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives granted at the start of each game
    pub start_lives: u8,
    /// Cloud population cap
    pub cloud_cap: usize,
    /// Direction change per steering event
    pub steer_step: f64,
    /// Player speed multiplier
    pub player_speed: f64,
    /// Cloud speed multiplier
    pub cloud_speed: f64,
    /// Bullet speed in units per second
    pub bullet_speed: f64,
    /// Bullet spawn offset relative to the player
    pub bullet_offset: DVec2,
    /// Player direction after spawn or death reset
    pub player_start_direction: DVec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_lives: START_LIVES,
            cloud_cap: CLOUD_CAP,
            steer_step: STEER_STEP,
            player_speed: PLAYER_SPEED,
            cloud_speed: CLOUD_SPEED,
            bullet_speed: BULLET_SPEED,
            bullet_offset: DVec2::new(BULLET_OFFSET.0, BULLET_OFFSET.1),
            player_start_direction: DVec2::ONE,
        }
    }
}

impl Tuning {
    /// Name of the first non-finite float field, if any
    pub fn first_non_finite(&self) -> Option<&'static str> {
        let scalars = [
            ("steer_step", self.steer_step),
            ("player_speed", self.player_speed),
            ("cloud_speed", self.cloud_speed),
            ("bullet_speed", self.bullet_speed),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Some(*name);
        }
        if !self.bullet_offset.is_finite() {
            return Some("bullet_offset");
        }
        if !self.player_start_direction.is_finite() {
            return Some("player_start_direction");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_values() {
        let t = Tuning::default();
        assert_eq!(t.start_lives, 5);
        assert_eq!(t.cloud_cap, 10);
        assert_eq!(t.steer_step, 0.01);
        assert_eq!(t.bullet_speed, 350.0);
        assert_eq!(t.bullet_offset, DVec2::new(20.0, -5.0));
        assert_eq!(t.player_start_direction, DVec2::new(1.0, 1.0));
        assert!(t.first_non_finite().is_none());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "cloud_cap": 4 }"#).unwrap();
        assert_eq!(t.cloud_cap, 4);
        assert_eq!(t.start_lives, 5);
        assert_eq!(t.cloud_speed, 3.0);
    }

    #[test]
    fn non_finite_field_is_named() {
        let t = Tuning {
            cloud_speed: f64::NAN,
            ..Default::default()
        };
        assert_eq!(t.first_non_finite(), Some("cloud_speed"));
    }
}
