//! Per-frame simulation tick
//!
//! Turns the host's frame clock into a scroll amount and runs the pipeline
//! in a fixed order: track, physics, scoring, then the game-over check.

use super::state::{GameEvent, GamePhase, GameState};
use super::{autopilot, physics, scoring, track};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// A jump was requested since the last tick
    pub jump: bool,
    /// Idle/demo mode - the autopilot decides when to jump
    pub idle_mode: bool,
}

/// Seconds since the previous tick, sanitized.
///
/// A missing previous timestamp counts as no time passing. Negative or
/// non-finite deltas are clamped to zero so the world never runs backwards,
/// and long stalls are capped at `max_frame_time`.
pub fn frame_elapsed(state: &mut GameState, current_time: f64) -> f32 {
    let previous = state.last_frame_time;
    let elapsed = match previous {
        Some(last) => current_time - last,
        None => 0.0,
    };

    if current_time.is_finite() {
        let latest = previous.map_or(current_time, |last| last.max(current_time));
        state.last_frame_time = Some(latest);
    }

    if !elapsed.is_finite() || elapsed < 0.0 {
        log::warn!("Frame clock went from {:?} to {}, clamping to 0", previous, current_time);
        return 0.0;
    }

    (elapsed as f32).min(state.tuning.max_frame_time)
}

/// Units to scroll for a frame that took `elapsed` seconds
#[inline]
pub fn scroll_amount(scroll_speed: f32, elapsed: f32, target_frame_time: f32) -> f32 {
    scroll_speed * (elapsed / target_frame_time)
}

/// Advance the game by one rendered frame at frame-clock time `current_time`
pub fn tick(state: &mut GameState, input: &TickInput, current_time: f64) {
    let elapsed = frame_elapsed(state, current_time);
    let scroll = scroll_amount(state.scroll_speed, elapsed, state.tuning.target_frame_time);

    track::advance(state, scroll);
    track::advance_gems(state, scroll);

    let jump = input.jump || (input.idle_mode && autopilot::wants_jump(state));
    let collected = physics::step(state, jump, elapsed);

    scoring::award_gems(state, &collected);
    scoring::tick(state, current_time);

    state.time_ticks += 1;
    state.run_ticks += 1;

    check_game_over(state);
}

/// End the run if the skater has failed. Returns whether it did.
pub fn check_game_over(state: &mut GameState) -> bool {
    if !physics::run_failed(&state.skater, &state.tuning) {
        return false;
    }
    game_over(state);
    true
}

/// Record the finished run and restart straight away
pub fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;

    let score = state.score;
    let new_high_score = score > state.high_score;
    if new_high_score {
        state.high_score = score;
    }
    state.runs += 1;

    log::info!(
        "Game over after {} ticks: score {}{}",
        state.run_ticks,
        score,
        if new_high_score { " (new high score)" } else { "" }
    );
    state.events.push(GameEvent::GameOver {
        score,
        ticks: state.run_ticks,
        new_high_score,
    });

    state.reset_run();
}
