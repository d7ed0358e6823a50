//! Procedural sidewalk generation
//!
//! Keeps a rolling window of bricks: everything scrolls left by the frame's
//! scroll amount, bricks that leave the screen are dropped, and new bricks are
//! appended until the track reaches past the right edge of the frame.

use glam::Vec2;
use rand::Rng;

use super::state::{Brick, GameEvent, GameState, Gem};

/// Exclusive upper bound of the spawn roll
pub const ROLL_RANGE: u32 = 99;

/// What a spawn roll decided for the next brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnDecision {
    /// Leave a gap of `width` before the brick and put a gem in it
    Gap { width: f32 },
    /// Flip the brick level before placing the brick
    ToggleLevel,
    /// Place the brick right after the previous one
    Continue,
}

/// Interpret a roll in `[0, ROLL_RANGE)` against the current score.
///
/// Gap and level thresholds are cumulative: a roll that qualifies for a gap
/// never also toggles the level.
pub fn decide_spawn(state: &GameState, roll: u32) -> SpawnDecision {
    let tuning = &state.tuning;
    if roll < tuning.gap_chance && state.score > tuning.gap_score {
        SpawnDecision::Gap {
            width: tuning.gap_factor * state.scroll_speed,
        }
    } else if roll < tuning.level_chance && state.score > tuning.level_score {
        SpawnDecision::ToggleLevel
    } else {
        SpawnDecision::Continue
    }
}

/// Scroll the track left by `scroll` units and refill the frontier
pub fn advance(state: &mut GameState, scroll: f32) {
    for brick in &mut state.bricks {
        brick.pos.x -= scroll;
    }
    state.bricks.retain(|b| b.right() >= 0.0);

    while state.frontier() < state.tuning.frame_width {
        let roll = state.rng.random_range(0..ROLL_RANGE);
        let lift = state.rng.random_range(0..state.tuning.gem_max_lift.max(1));
        spawn_next(state, roll, lift);
    }

    debug_assert!(
        state.frontier() >= state.tuning.frame_width,
        "track frontier left unfilled"
    );
}

/// Append one brick after the current rightmost one.
///
/// `roll` is the spawn roll in `[0, ROLL_RANGE)`; `lift` is how far above
/// the skater's head height a gem is placed if this roll opens a gap.
pub fn spawn_next(state: &mut GameState, roll: u32, lift: u32) {
    let width = state.tuning.brick_width;
    let height = state.tuning.brick_height;

    // An empty track starts from the left edge of the frame
    let last_center = state
        .bricks
        .iter()
        .map(|b| b.pos.x)
        .reduce(f32::max)
        .unwrap_or(0.0);
    let mut x = last_center + width + state.tuning.brick_margin;
    let y = height / 2.0 + state.brick_level.offset(&state.tuning);

    match decide_spawn(state, roll) {
        SpawnDecision::Gap { width: gap } => {
            let gap_left = x - width / 2.0 - state.tuning.brick_margin;
            x += gap;
            let gap_right = x - width / 2.0;

            // Keep the whole gem inside the visible frame
            let gem_size = state.tuning.gem_size;
            let ceiling = state.tuning.frame_height - gem_size / 2.0;
            let gem_y = (y + state.tuning.skater_height + lift as f32).min(ceiling);

            let gem = Gem {
                id: state.next_entity_id(),
                pos: Vec2::new((gap_left + gap_right) / 2.0, gem_y),
                size: Vec2::splat(gem_size),
            };
            log::debug!("Gap of {:.1} at x={:.1}, gem {}", gap, gap_left, gem.id);
            state.gems.push(gem);
            state.events.push(GameEvent::GapSpawned { width: gap });
        }
        SpawnDecision::ToggleLevel => {
            state.brick_level = state.brick_level.toggled();
            log::debug!("Brick level now {:?}", state.brick_level);
            state.events.push(GameEvent::LevelChanged {
                level: state.brick_level,
            });
        }
        SpawnDecision::Continue => {}
    }

    // Level toggles take effect from this brick on
    let y = height / 2.0 + state.brick_level.offset(&state.tuning);
    let brick = Brick {
        id: state.next_entity_id(),
        pos: Vec2::new(x, y),
        size: Vec2::new(width, height),
        level: state.brick_level,
    };
    state.bricks.push(brick);
}

/// Scroll gems left by `scroll` units and drop the ones past the left edge
pub fn advance_gems(state: &mut GameState, scroll: f32) {
    for gem in &mut state.gems {
        gem.pos.x -= scroll;
    }
    state.gems.retain(|g| g.pos.x >= 0.0);
}
