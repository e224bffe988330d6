//! Game state and core simulation types
//!
//! Score, lives, the player and every other live entity are owned here.

use core::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::Vector2;
use super::boundary::Field;
use super::entity::{Entity, EntityId, EntityKind};
use super::movement::Steer;
use super::spawn;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; inert until restart
    GameOver,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CloudSpawned { id: EntityId },
    BulletFired { id: EntityId },
    /// A bullet took out a cloud (+1 score)
    CloudDestroyed { cloud: EntityId, bullet: EntityId },
    /// A cloud drifted off the field
    CloudEscaped { id: EntityId },
    PlayerDied { lives_left: u8 },
    GameOver { score: u64 },
    Restarted,
}

/// The two numeric readouts shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u8,
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score {}\nLives {}", self.score, self.lives)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Play area
    pub field: Field,
    /// Balance values
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Score (only ever increases within a game)
    pub score: u64,
    /// Player lives
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The one and only player
    pub player: Entity,
    /// Every other live entity, in spawn order
    pub entities: Vec<Entity>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game: scenery, then the player at the field origin
    pub fn new(field: Field, tuning: Tuning, seed: u64) -> Self {
        let lives = tuning.start_lives;
        let mut state = Self {
            field,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: Entity::new(EntityId(0), EntityKind::Player, Vector2::ZERO),
            entities: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };

        spawn::spawn_scenery(&mut state);
        spawn::spawn_player(&mut state);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.checked_add(1).unwrap_or_else(|| {
            // 0 is the player's; long-gone ids get reused
            log::warn!("Entity ids exhausted, wrapping to 1");
            1
        });
        id
    }

    /// Uniform sample from [-1, 1] x [-1, 1]
    pub(crate) fn random_direction(&mut self) -> Vector2 {
        Vector2::new(
            self.rng.random_range(-1.0..=1.0),
            self.rng.random_range(-1.0..=1.0),
        )
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player first, then everything else in id order
    pub fn live_entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player).chain(self.entities.iter())
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.live_entities().find(|e| e.id == id)
    }

    pub fn is_live(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.live_entities().filter(|e| e.kind == kind).count()
    }

    pub fn cloud_count(&self) -> usize {
        self.count_of(EntityKind::Cloud)
    }

    /// Remove a transient entity. The player and permanent scenery are refused.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(idx) = self.entities.iter().position(|e| e.id == id) else {
            if id == self.player.id {
                log::warn!("Refusing to remove the player ({:?})", id);
            }
            return false;
        };
        let kind = self.entities[idx].kind;
        if kind.is_irremovable() {
            log::warn!("Refusing to remove irremovable {} ({:?})", kind.as_str(), id);
            return false;
        }
        self.entities.remove(idx);
        log::debug!("Removed {} {:?}", kind.as_str(), id);
        true
    }

    pub fn player_direction(&self) -> Vector2 {
        self.player
            .dir
            .unwrap_or(self.tuning.player_start_direction)
    }

    /// Apply one steering step to the player direction
    pub fn steer(&mut self, steer: Steer) {
        if self.is_game_over() {
            return;
        }
        self.player.dir = Some(steer.apply(self.player_direction(), self.tuning.steer_step));
    }

    /// Fire a bullet from the player
    pub fn shoot(&mut self) -> Option<EntityId> {
        spawn::spawn_bullet(self)
    }

    /// Lose a life; reset the player or end the game.
    pub fn die(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::PlayerDied {
            lives_left: self.lives,
        });

        if self.lives == 0 {
            log::info!("Game over with score {}", self.score);
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            return;
        }

        log::info!("Player died, {} lives left", self.lives);
        self.player.pos = Vector2::ZERO;
        self.player.dir = Some(self.tuning.player_start_direction);
        // x is already at +1, so this leaves the direction unchanged
        self.steer(Steer::Right);
    }

    /// Add points for a destroyed cloud
    pub(crate) fn award(&mut self, points: u64) {
        self.score += points;
    }

    /// Start over: fresh score, lives and player; only permanent scenery survives.
    pub fn restart(&mut self) {
        self.entities.retain(|e| e.kind.is_irremovable());
        self.score = 0;
        self.lives = self.tuning.start_lives;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.player.pos = Vector2::ZERO;
        self.player.dir = Some(self.tuning.player_start_direction);
        self.events.push(GameEvent::Restarted);
        log::info!("New game started");
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            score: self.score,
            lives: self.lives,
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
