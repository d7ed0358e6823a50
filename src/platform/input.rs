//! Jump input capture
//!
//! Taps, key presses and clicks can arrive any number of times between
//! two ticks. A jump has one discrete effect (and none while airborne), so
//! the host only needs to remember whether one is pending.

use crate::sim::TickInput;

/// Single-slot pending jump request
#[derive(Debug, Clone, Default)]
pub struct JumpLatch {
    pending: bool,
    /// Requests posted since the latch was created
    posted: u64,
}

impl JumpLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a jump request from the input device
    pub fn post(&mut self) {
        self.pending = true;
        self.posted += 1;
    }

    /// Whether a request is waiting for the next tick
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Total requests posted (including coalesced ones)
    pub fn posted(&self) -> u64 {
        self.posted
    }

    /// Drain the latch into the input for one tick
    pub fn tick_input(&mut self, idle_mode: bool) -> TickInput {
        TickInput {
            jump: self.take(),
            idle_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_coalesce() {
        let mut latch = JumpLatch::new();
        assert!(!latch.take());
        latch.post();
        latch.post();
        latch.post();
        assert!(latch.is_pending());
        assert!(latch.take());
        // Drained once per tick
        assert!(!latch.take());
        assert_eq!(latch.posted(), 3);
    }

    #[test]
    fn test_tick_input_drains() {
        let mut latch = JumpLatch::new();
        latch.post();
        let input = latch.tick_input(false);
        assert!(input.jump);
        assert!(!input.idle_mode);
        assert!(!latch.tick_input(true).jump);
    }

    #[test]
    fn test_posted_jump_reaches_the_skater() {
        use crate::sim::{GameEvent, GameState, autopilot, tick};

        let mut state = GameState::new(9);
        let mut latch = JumpLatch::new();
        tick(&mut state, &latch.tick_input(false), 0.0);
        assert!(!autopilot::wants_jump(&state));

        latch.post();
        tick(&mut state, &latch.tick_input(false), 1.0 / 60.0);
        assert!(!state.skater.grounded);
        assert_eq!(state.skater.vel.y, state.tuning.jump_speed);
        assert!(state.drain_events().contains(&GameEvent::Jumped));
        assert!(!latch.is_pending());
    }
}
