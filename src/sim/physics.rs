//! Skater physics
//!
//! Semi-implicit Euler integration under constant gravity, followed by
//! contact resolution against bricks and gems. Brick contact is the only
//! thing that grounds the skater; there is no separate floor clamp.

use super::collision::{BrickContact, skater_brick_contact};
use super::state::{GameEvent, GameState, Skater};
use crate::tuning::Tuning;

/// Try to start a jump. Only honored while grounded.
pub fn try_jump(skater: &mut Skater, jump_speed: f32) -> bool {
    if !skater.grounded {
        return false;
    }
    skater.vel.y = jump_speed;
    skater.grounded = false;
    true
}

/// Advance the skater by `dt` seconds and resolve contacts.
///
/// Returns the IDs of gems picked up this step (already removed from the
/// state); scoring turns them into points.
pub fn step(state: &mut GameState, jump: bool, dt: f32) -> Vec<u32> {
    let tuning = &state.tuning;
    let skater = &mut state.skater;
    let prev_feet = skater.feet();

    let jumped = jump && try_jump(skater, tuning.jump_speed);
    if jumped {
        state.events.push(GameEvent::Jumped);
    }

    if !skater.grounded {
        // The impulse tick keeps its full launch speed
        if !jumped {
            skater.vel.y -= tuning.gravity * dt;
        }
        skater.pos.y += skater.vel.y * dt;
    }

    resolve_bricks(state, prev_feet);
    collect_gems(state)
}

/// Land on brick tops, get shoved by brick faces, fall off edges
fn resolve_bricks(state: &mut GameState, prev_feet: f32) {
    let was_grounded = state.skater.grounded;
    let mut support: Option<f32> = None;

    for brick in &state.bricks {
        let skater = &mut state.skater;
        match skater_brick_contact(&skater.aabb(), prev_feet, &brick.aabb()) {
            BrickContact::Top { top } => {
                // Rising skaters pass through the landing zone
                if skater.vel.y <= 0.0 {
                    support = Some(support.map_or(top, |s: f32| s.max(top)));
                }
            }
            BrickContact::Side { x } => {
                skater.pos.x = skater.pos.x.min(x);
            }
            BrickContact::None => {}
        }
    }

    match support {
        Some(top) => {
            state.skater.land_on(top);
            if !was_grounded {
                state.events.push(GameEvent::Landed);
            }
        }
        None => {
            // Ran off the end of the sidewalk
            state.skater.grounded = false;
        }
    }
}

/// Remove every gem the skater touches
fn collect_gems(state: &mut GameState) -> Vec<u32> {
    let skater_box = state.skater.aabb();
    let mut collected = Vec::new();
    state.gems.retain(|gem| {
        if skater_box.overlaps(&gem.aabb()) {
            collected.push(gem.id);
            false
        } else {
            true
        }
    });
    collected
}

/// Whether the run has failed: off the left or bottom of the screen, or
/// tipped past the tilt limit. Pure, so repeated calls agree.
pub fn run_failed(skater: &Skater, tuning: &Tuning) -> bool {
    let off_screen = skater.pos.x < 0.0 || skater.pos.y < 0.0;
    let tipped_over = skater.rotation.abs() > tuning.max_tilt();
    off_screen || tipped_over
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_FRAME_TIME;
    use crate::sim::state::Gem;
    use crate::sim::track;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(11);
        track::advance(&mut state, 0.0);
        state
    }

    #[test]
    fn test_grounded_skater_stays_put() {
        let mut state = playing_state();
        let start = state.skater.pos;
        step(&mut state, false, TARGET_FRAME_TIME);
        assert!(state.skater.grounded);
        assert_eq!(state.skater.pos, start);
        assert_eq!(state.skater.vel.y, 0.0);
        assert_eq!(state.skater.pos.y, state.skater.minimum_y);
    }

    #[test]
    fn test_jump_sets_impulse() {
        let mut state = playing_state();
        step(&mut state, true, TARGET_FRAME_TIME);
        assert!(!state.skater.grounded);
        assert_eq!(state.skater.vel.y, state.tuning.jump_speed);
        assert!(state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut state = playing_state();
        state.skater.grounded = false;
        state.skater.pos.y += 50.0;
        state.skater.vel.y = 10.0;
        step(&mut state, true, TARGET_FRAME_TIME);
        assert!(state.skater.vel.y < 10.0);
        assert!(!state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_falling_without_contact() {
        let mut state = playing_state();
        state.bricks.clear();
        state.skater.grounded = false;
        state.skater.vel.y = -150.0;
        let y0 = state.skater.pos.y;
        step(&mut state, false, TARGET_FRAME_TIME);
        let y1 = state.skater.pos.y;
        step(&mut state, false, TARGET_FRAME_TIME);
        let y2 = state.skater.pos.y;
        assert!(!state.skater.grounded);
        assert!(y1 < y0 && y2 < y1);
    }

    #[test]
    fn test_jump_arc_lands_back_on_track() {
        let mut state = playing_state();
        step(&mut state, true, TARGET_FRAME_TIME);
        let mut landed = false;
        for _ in 0..600 {
            step(&mut state, false, TARGET_FRAME_TIME);
            if state.skater.grounded {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(state.skater.feet(), state.tuning.brick_height);
        assert_eq!(state.skater.vel.y, 0.0);
        assert!(state.events.contains(&GameEvent::Landed));
    }

    #[test]
    fn test_walking_off_edge_ungrounds() {
        let mut state = playing_state();
        // Skater far right of every brick
        state.bricks.retain(|b| b.right() < state.skater.pos.x - 100.0);
        step(&mut state, false, TARGET_FRAME_TIME);
        assert!(!state.skater.grounded);
    }

    #[test]
    fn test_gem_pickup_removes_gem() {
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.gems.push(Gem {
            id,
            pos: state.skater.pos + Vec2::new(5.0, 10.0),
            size: Vec2::splat(30.0),
        });
        let collected = step(&mut state, false, TARGET_FRAME_TIME);
        assert_eq!(collected, vec![id]);
        assert!(state.gems.is_empty());
    }

    #[test]
    fn test_step_keeps_host_tilt() {
        let mut state = playing_state();
        state.skater.rotation = 0.3;
        step(&mut state, true, TARGET_FRAME_TIME);
        for _ in 0..120 {
            step(&mut state, false, TARGET_FRAME_TIME);
        }
        assert_eq!(state.skater.rotation, 0.3);
    }

    #[test]
    fn test_run_failed_conditions() {
        let tuning = Tuning::default();
        let mut skater = Skater::new(&tuning);
        assert!(!run_failed(&skater, &tuning));

        skater.pos.x = -1.0;
        assert!(run_failed(&skater, &tuning));
        // Idempotent
        assert!(run_failed(&skater, &tuning));

        skater.reset(&tuning);
        skater.pos.y = -0.5;
        assert!(run_failed(&skater, &tuning));

        skater.reset(&tuning);
        skater.rotation = 84f32.to_radians();
        assert!(!run_failed(&skater, &tuning));
        skater.rotation = -86f32.to_radians();
        assert!(run_failed(&skater, &tuning));
    }
}
