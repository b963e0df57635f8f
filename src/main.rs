//! Lane Dodger headless host
//!
//! Drives the simulation with the demo autopilot, logs what happens and
//! prints the final HUD (or a JSON snapshot). Rendering hosts follow the
//! same loop: build a state, tick once per frame, stop when it ends.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use lane_dodger::Tuning;
use lane_dodger::consts::TICKS_PER_SECOND;
use lane_dodger::sim::{GameEvent, GameState, TickInput, steer, tick};

/// Lane Dodger: dodge the traffic, survive as long as you can
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the round is still going
    #[arg(long, default_value_t = 60 * 60 * 5)]
    ticks: u64,

    /// JSON file overriding the default tuning
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,

    /// Sleep between ticks to run at real-time speed
    #[arg(long)]
    paced: bool,

    /// Leave the vehicle parked instead of using the autopilot
    #[arg(long)]
    idle: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut state = GameState::with_tuning(seed, tuning)?;
    let mut rng = state.rng();
    let frame = Duration::from_secs_f64(1.0 / f64::from(TICKS_PER_SECOND));

    while state.is_running() && state.time_ticks < cli.ticks {
        let input = if cli.idle {
            TickInput::default()
        } else {
            steer(&state)
        };
        tick(&mut state, &input, &mut rng);

        for event in state.take_events() {
            if let GameEvent::Crashed { id, lives_left } = event {
                log::warn!(
                    "Tick {}: hit obstacle {}, {} lives left",
                    state.time_ticks,
                    id,
                    lives_left
                );
            }
        }

        if cli.paced {
            std::thread::sleep(frame);
        }
    }

    if state.is_running() {
        log::info!("Tick limit reached with the round still running");
    }

    let snapshot = state.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for line in snapshot.hud_lines() {
            println!("{line}");
        }
        println!("Ticks: {}", snapshot.tick);
    }
    Ok(())
}
