//! Headless demo session
//!
//! Runs the simulation core on autopilot for a few minutes, logs what
//! happens, then prints the session records as JSON. Doubles as a smoke
//! test and as a reference for driving the core from a frontend.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use bigger_fish::Config;
use bigger_fish::consts::TICKS_PER_SECOND;
use bigger_fish::sim::{GameEvent, GamePhase, GameState, SpriteBank, TickInput, render, tick};

const DEMO_MINUTES: i32 = 3;
const MAX_RESTARTS: u32 = 2;

fn main() {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed);
    log::info!("Demo session starting with seed {}", seed);

    let mut state = GameState::new(seed, Config::default(), SpriteBank::placeholder());

    let confirm = TickInput {
        confirm: true,
        ..TickInput::default()
    };
    let idle = TickInput {
        idle: true,
        ..TickInput::default()
    };

    // select PLAY on the main menu
    tick(&mut state, &confirm);

    let mut restarts = 0;
    let mut drawn = 0;
    for _ in 0..DEMO_MINUTES * 60 * TICKS_PER_SECOND {
        tick(&mut state, &idle);
        let frame = render(&mut state);
        drawn = frame.commands.len();

        for event in state.take_events() {
            match event {
                GameEvent::FishEaten { species, size } => {
                    log::info!("Ate a {} of size {}", species.as_str(), size);
                }
                GameEvent::PlayerDied => log::info!("Player was eaten"),
                GameEvent::Victory => log::info!("Player outgrew the screen"),
                GameEvent::GameOver => {
                    log::info!("Run over: \"{}\"", state.game_over_quote());
                }
            }
        }

        match state.phase {
            GamePhase::GameOver if restarts < MAX_RESTARTS => {
                restarts += 1;
                tick(&mut state, &confirm);
            }
            GamePhase::GameOver | GamePhase::Victory => break,
            _ => {}
        }
    }

    log::info!(
        "Session done after {} ticks ({} sprites in the last frame)",
        state.time_ticks,
        drawn
    );
    match serde_json::to_string_pretty(&state.records) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Could not serialize records: {}", err),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
