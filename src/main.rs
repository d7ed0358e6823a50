//! Sidewalk Run headless host
//!
//! Drives the simulation with a simulated 60 Hz frame clock, the way a
//! windowed host would drive it from its render loop. Jump requests go
//! through the same latch a keyboard handler would post to: by default the
//! autopilot posts them, `--jump-every N` taps every N frames instead.
//!
//! Usage: `sidewalk-run [seed] [seconds] [--trace] [--jump-every N]`
//! Set `SIDEWALK_TUNING` to a JSON file to override balance values.

use sidewalk_run::platform::JumpLatch;
use sidewalk_run::sim::{GameEvent, GameState, autopilot, tick};
use sidewalk_run::{HighScores, Tuning, format_score};

const FRAME_RATE: f64 = 60.0;

fn load_tuning() -> Tuning {
    let Ok(path) = std::env::var("SIDEWALK_TUNING") else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => Tuning::load_or_default(&json),
        Err(e) => {
            log::warn!("Can't read tuning file {}: {}", path, e);
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut seed: u64 = 42;
    let mut seconds: f64 = 120.0;
    let mut trace = false;
    let mut jump_every: Option<u64> = None;
    let mut positional = 0;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--trace" {
            trace = true;
            continue;
        }
        if arg == "--jump-every" {
            match args.next().and_then(|n| n.parse::<u64>().ok()) {
                Some(n) if n > 0 => jump_every = Some(n),
                _ => log::warn!("--jump-every needs a positive frame count"),
            }
            continue;
        }
        match positional {
            0 => seed = arg.parse().unwrap_or(seed),
            1 => seconds = arg.parse().unwrap_or(seconds),
            _ => log::warn!("Ignoring extra argument {}", arg),
        }
        positional += 1;
    }

    log::info!("Sidewalk Run (headless) starting...");

    let mut state = GameState::with_tuning(seed, load_tuning());
    let mut latch = JumpLatch::new();
    let mut leaderboard = HighScores::new();
    let mut gems = 0u32;

    let frames = (seconds.max(0.0) * FRAME_RATE) as u64;
    for frame in 0..frames {
        let now = frame as f64 / FRAME_RATE;
        let tap = match jump_every {
            Some(n) => frame % n == 0,
            None => autopilot::wants_jump(&state),
        };
        if tap {
            latch.post();
        }
        let input = latch.tick_input(false);
        tick(&mut state, &input, now);

        for event in state.drain_events() {
            match event {
                GameEvent::GameOver { score, ticks, .. } => {
                    leaderboard.add_score(score, ticks, now * 1000.0);
                }
                GameEvent::GemCollected { .. } => gems += 1,
                _ => {}
            }
        }

        if trace && frame % FRAME_RATE as u64 == 0 {
            match serde_json::to_string(&state.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Snapshot failed: {}", e),
            }
        }
    }

    println!(
        "Simulated {:.0}s: {} runs, {} jump taps, {} gems, score {} / best {}",
        seconds,
        state.runs,
        latch.posted(),
        gems,
        format_score(state.score),
        format_score(state.high_score)
    );
    match leaderboard.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Leaderboard export failed: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Embedded builds drive the library from their own loop
}
