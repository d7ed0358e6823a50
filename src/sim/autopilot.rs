//! Idle/demo mode: decides when to jump without player input

use super::collision::STEP_TOLERANCE;
use super::state::GameState;

/// How many frames of scrolling ahead of the skater the autopilot looks
pub const LOOKAHEAD_FRAMES: f32 = 45.0;

/// Whether the autopilot wants to jump this tick.
///
/// Looks at the track a fixed number of frames ahead of the skater's front
/// edge and jumps when there's a gap or a higher brick there.
pub fn wants_jump(state: &GameState) -> bool {
    let skater = &state.skater;
    if !skater.grounded {
        return false;
    }

    let look_x = skater.pos.x + skater.size.x / 2.0 + state.scroll_speed * LOOKAHEAD_FRAMES;
    let feet = skater.feet();

    match state
        .bricks
        .iter()
        .find(|b| b.left() <= look_x && look_x <= b.right())
    {
        Some(brick) => brick.top() > feet + STEP_TOLERANCE,
        // Margins between bricks are narrower than the skater; only real gaps count
        None => !state
            .bricks
            .iter()
            .any(|b| (b.left() - look_x).abs() <= state.tuning.brick_margin * 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::track;

    #[test]
    fn test_flat_track_no_jump() {
        let mut state = GameState::new(9);
        track::advance(&mut state, 0.0);
        assert!(!wants_jump(&state));
    }

    #[test]
    fn test_jumps_for_gap_ahead() {
        let mut state = GameState::new(9);
        track::advance(&mut state, 0.0);
        let look_x = state.skater.pos.x + state.skater.size.x / 2.0 + state.scroll_speed * LOOKAHEAD_FRAMES;
        state.bricks.retain(|b| b.right() < look_x - 10.0);
        assert!(wants_jump(&state));
    }

    #[test]
    fn test_jumps_for_wall_ahead() {
        let mut state = GameState::new(9);
        track::advance(&mut state, 0.0);
        let look_x = state.skater.pos.x + state.skater.size.x / 2.0 + state.scroll_speed * LOOKAHEAD_FRAMES;
        let offset = state.tuning.high_level_offset;
        for brick in state.bricks.iter_mut().filter(|b| b.right() >= look_x) {
            brick.pos.y += offset;
        }
        assert!(wants_jump(&state));
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut state = GameState::new(9);
        state.skater.grounded = false;
        assert!(!wants_jump(&state));
    }
}
