//! Score and difficulty
//!
//! Points trickle in once per `score_interval` seconds, worth the current
//! scroll speed, and the scroll speed creeps up every tick without bound.

use super::state::{GameEvent, GameState};

/// Per-tick score/speed update against the frame clock
pub fn tick(state: &mut GameState, current_time: f64) {
    if current_time - state.last_score_time > state.tuning.score_interval {
        state.score += state.scroll_speed.floor() as u64;
        state.last_score_time = current_time;
    }
    state.scroll_speed += state.tuning.speed_ramp;
}

/// Award the gem bonus for each collected gem
pub fn award_gems(state: &mut GameState, gem_ids: &[u32]) {
    for &gem_id in gem_ids {
        let bonus = state.tuning.gem_bonus;
        state.score += bonus;
        state.events.push(GameEvent::GemCollected { gem_id, bonus });
    }
}
