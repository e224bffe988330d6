//! Headless engine host
//!
//! Stands in for the game engine around the simulation: drives frames,
//! finds overlapping pairs, cleans up off-screen bullets, exposes the
//! score/lives globals and owns the Game Over dialog.

pub mod physics;

use crate::settings::Settings;
use crate::sim::{
    EntityKind, Field, GameEvent, GameState, Scoreboard, TickInput, resolve_collisions, tick,
};

pub use physics::OverlapTracker;

/// Modal dialogs the host can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Blocks play until acknowledged; acknowledging starts a new game
    GameOver { score: u64 },
}

impl Dialog {
    pub fn message(&self) -> &'static str {
        match self {
            Dialog::GameOver { .. } => "Game Over",
        }
    }
}

/// Game instance holding all state
pub struct Engine {
    state: GameState,
    physics: OverlapTracker,
    dialog: Option<Dialog>,
    max_frame_dt: f64,
    frames: u64,
}

impl Engine {
    pub fn new(settings: &Settings) -> Self {
        let field = Field::new(settings.width, settings.height);
        log::info!(
            "Starting {}x{} field, seed {}",
            field.width,
            field.height,
            settings.seed
        );
        Self {
            state: GameState::new(field, settings.tuning.clone(), settings.seed),
            physics: OverlapTracker::new(),
            dialog: None,
            max_frame_dt: settings.max_frame_dt,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Frames actually simulated
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame; returns the events it produced.
    ///
    /// Nothing happens while a dialog is open or when `dt` is not a
    /// positive number.
    pub fn frame(&mut self, input: &TickInput, dt: f64) -> Vec<GameEvent> {
        if self.dialog.is_some() {
            return Vec::new();
        }

        if !dt.is_finite() || dt <= 0.0 {
            log::debug!("Skipping frame with dt={dt}");
            return Vec::new();
        }
        // Clamp long frames
        let dt = dt.min(self.max_frame_dt);

        tick(&mut self.state, input, dt);
        self.cleanup_offscreen();

        let contacts = self.physics.detect(&self.state);
        resolve_collisions(&mut self.state, &contacts);

        if self.state.is_game_over() {
            let score = self.state.score;
            log::info!(
                "{} (score {}, seed {})",
                Dialog::GameOver { score }.message(),
                score,
                self.state.seed
            );
            self.dialog = Some(Dialog::GameOver { score });
        }

        self.frames += 1;
        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::PlayerDied { .. }
                | GameEvent::GameOver { .. }
                | GameEvent::Restarted => log::info!("{:?}", event),
                _ => log::debug!("{:?}", event),
            }
        }
        events
    }

    /// Close the open dialog and run its continuation. False if none was open.
    pub fn acknowledge(&mut self) -> bool {
        match self.dialog.take() {
            Some(Dialog::GameOver { .. }) => {
                self.state.restart();
                self.physics.reset();
                true
            }
            None => false,
        }
    }

    /// Named integer globals bound by the scoreboard
    pub fn global(&self, name: &str) -> Option<i64> {
        match name {
            "score" => i64::try_from(self.state.score).ok(),
            "lives" => Some(i64::from(self.state.lives)),
            _ => None,
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.state.scoreboard()
    }

    /// Drop bullets whose box has left the field entirely
    fn cleanup_offscreen(&mut self) {
        let field = self.state.field;
        let gone: Vec<_> = self
            .state
            .entities
            .iter()
            .filter(|e| e.kind == EntityKind::Bullet)
            .filter(|e| {
                e.hitbox()
                    .is_some_and(|hb| field.box_is_offscreen(e.pos, &hb))
            })
            .map(|e| e.id)
            .collect();
        for id in gone {
            self.state.remove(id);
        }
    }
}
