//! Duke & Clouds entry point
//!
//! Runs a headless session driven by the autopilot and reports the result.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use duke_clouds::sim::{GameEvent, Scoreboard};
use duke_clouds::{Autopilot, Engine, Settings};

#[derive(Parser, Debug)]
#[command(name = "duke-clouds", about = "Run a headless Duke & Clouds session")]
struct Args {
    /// JSON settings file (flags below override it)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Field width
    #[arg(long)]
    width: Option<u32>,
    /// Field height
    #[arg(long)]
    height: Option<u32>,
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,
    /// Frames per simulated second
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Acknowledge this many Game Over dialogs before stopping
    #[arg(long, default_value_t = 0)]
    restarts: u32,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    games: u32,
    best_score: u64,
    clouds_destroyed: u64,
    clouds_escaped: u64,
    bullets_fired: u64,
    deaths: u64,
    game_over: bool,
    scoreboard: Option<Scoreboard>,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn run(settings: &Settings, args: &Args) -> Result<RunSummary> {
    if args.fps == 0 {
        bail!("--fps must be at least 1");
    }
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        bail!("--seconds must be a non-negative number, got {}", args.seconds);
    }

    let dt = 1.0 / args.fps as f64;
    let total_frames = (args.seconds * args.fps as f64).round() as u64;
    let mut engine = Engine::new(settings);
    let mut pilot = Autopilot::new();
    let mut restarts_left = args.restarts;
    let mut summary = RunSummary {
        seed: engine.state().seed,
        games: 1,
        ..Default::default()
    };

    for _ in 0..total_frames {
        if engine.dialog().is_some() {
            if restarts_left == 0 {
                break;
            }
            restarts_left -= 1;
            engine.acknowledge();
            summary.games += 1;
        }

        let input = pilot.next_input(engine.state());
        for event in engine.frame(&input, dt) {
            match event {
                GameEvent::CloudDestroyed { .. } => summary.clouds_destroyed += 1,
                GameEvent::CloudEscaped { .. } => summary.clouds_escaped += 1,
                GameEvent::BulletFired { .. } => summary.bullets_fired += 1,
                GameEvent::PlayerDied { .. } => summary.deaths += 1,
                GameEvent::GameOver { score } => {
                    summary.best_score = summary.best_score.max(score)
                }
                GameEvent::CloudSpawned { .. } | GameEvent::Restarted => {}
            }
        }
        summary.best_score = summary.best_score.max(engine.state().score);
    }

    summary.frames = engine.frames();
    summary.game_over = engine.dialog().is_some();
    summary.scoreboard = Some(engine.scoreboard());
    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = load_settings(&args)?;
    log::info!("Duke & Clouds (headless) starting...");
    let summary = run(&settings, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        if let Some(board) = summary.scoreboard {
            println!("{board}");
        }
        println!(
            "seed {}: {} frames, {} game(s), best score {}, {} deaths{}",
            summary.seed,
            summary.frames,
            summary.games,
            summary.best_score,
            summary.deaths,
            if summary.game_over { " - Game Over" } else { "" }
        );
    }
    Ok(())
}
