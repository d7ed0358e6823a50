//! Sidewalk Run - A side-scrolling skateboard runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (track generation, physics, scoring, game state)
//! - `platform`: Host-facing input plumbing
//! - `tuning`: Data-driven game balance
//! - `highscores`: Leaderboard the host may persist between runs

pub mod highscores;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame duration the scroll speed is expressed against (60 Hz)
    pub const TARGET_FRAME_TIME: f32 = 1.0 / 60.0;
    /// Longest elapsed time a single tick will simulate
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Visible frame dimensions
    pub const FRAME_WIDTH: f32 = 800.0;
    pub const FRAME_HEIGHT: f32 = 450.0;

    /// Sidewalk brick size
    pub const BRICK_WIDTH: f32 = 120.0;
    pub const BRICK_HEIGHT: f32 = 64.0;
    /// Horizontal spacing between adjacent bricks
    pub const BRICK_MARGIN: f32 = 1.0;
    /// Vertical offset of the upper platform
    pub const HIGH_LEVEL_OFFSET: f32 = 100.0;

    /// Skater footprint
    pub const SKATER_WIDTH: f32 = 40.0;
    pub const SKATER_HEIGHT: f32 = 60.0;

    /// Gem footprint (square)
    pub const GEM_SIZE: f32 = 30.0;

    /// Scroll speed at the start of every run (units per 60 Hz frame)
    pub const STARTING_SCROLL_SPEED: f32 = 5.0;
    /// Scroll speed gained every tick
    pub const SPEED_RAMP: f32 = 0.001;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 300.0;
    /// Upward velocity applied by a jump (units/s)
    pub const JUMP_SPEED: f32 = 260.0;
    /// Rotation past which the skater has tipped over
    pub const MAX_TILT_DEGREES: f32 = 85.0;

    /// Bonus points for a collected gem
    pub const GEM_BONUS: u64 = 50;
    /// Seconds between passive score awards
    pub const SCORE_INTERVAL: f64 = 1.0;
}

/// Format a score the way the HUD shows it (zero-padded to four digits)
pub fn format_score(score: u64) -> String {
    format!("{:04}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_pads() {
        assert_eq!(format_score(0), "0000");
        assert_eq!(format_score(57), "0057");
        assert_eq!(format_score(12345), "12345");
    }
}
