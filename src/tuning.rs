//! Data-driven game balance
//!
//! Every knob of the simulation lives here so hosts can load a JSON file
//! instead of recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub frame_width: f32,
    /// Gems are never placed above this height
    pub frame_height: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_margin: f32,
    pub high_level_offset: f32,

    // === Skater ===
    pub skater_width: f32,
    pub skater_height: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub max_tilt_degrees: f32,

    // === Speed ===
    pub starting_scroll_speed: f32,
    pub speed_ramp: f32,

    // === Track generation ===
    /// Rolls below this (out of 99) open a gap
    pub gap_chance: u32,
    /// Rolls below this (and not a gap) toggle the brick level
    pub level_chance: u32,
    /// Score that must be exceeded before gaps appear
    pub gap_score: u64,
    /// Score that must be exceeded before level changes appear
    pub level_score: u64,
    /// Gap width as a multiple of the scroll speed
    pub gap_factor: f32,
    pub gem_size: f32,
    /// Exclusive upper bound of the random gem lift
    pub gem_max_lift: u32,

    // === Scoring ===
    pub gem_bonus: u64,
    pub score_interval: f64,

    // === Frame timing ===
    pub target_frame_time: f32,
    pub max_frame_time: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_margin: BRICK_MARGIN,
            high_level_offset: HIGH_LEVEL_OFFSET,

            skater_width: SKATER_WIDTH,
            skater_height: SKATER_HEIGHT,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            max_tilt_degrees: MAX_TILT_DEGREES,

            starting_scroll_speed: STARTING_SCROLL_SPEED,
            speed_ramp: SPEED_RAMP,

            gap_chance: 2,
            level_chance: 4,
            gap_score: 10,
            level_score: 20,
            gap_factor: 20.0,
            gem_size: GEM_SIZE,
            gem_max_lift: 150,

            gem_bonus: GEM_BONUS,
            score_interval: SCORE_INTERVAL,

            target_frame_time: TARGET_FRAME_TIME,
            max_frame_time: MAX_FRAME_TIME,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::validated)
    }

    /// Parse tuning from JSON, falling back to defaults on malformed input
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values the simulation cannot run with by their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        fn positive(name: &str, value: &mut f32, fallback: f32) {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Tuning `{}` = {} is invalid, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        fn non_negative(name: &str, value: &mut f32, fallback: f32) {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Tuning `{}` = {} is invalid, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        positive("frame_width", &mut self.frame_width, defaults.frame_width);
        positive("frame_height", &mut self.frame_height, defaults.frame_height);
        positive("brick_width", &mut self.brick_width, defaults.brick_width);
        positive("brick_height", &mut self.brick_height, defaults.brick_height);
        positive("skater_width", &mut self.skater_width, defaults.skater_width);
        positive("skater_height", &mut self.skater_height, defaults.skater_height);
        positive("gem_size", &mut self.gem_size, defaults.gem_size);
        positive(
            "starting_scroll_speed",
            &mut self.starting_scroll_speed,
            defaults.starting_scroll_speed,
        );
        positive(
            "target_frame_time",
            &mut self.target_frame_time,
            defaults.target_frame_time,
        );
        positive("max_frame_time", &mut self.max_frame_time, defaults.max_frame_time);

        non_negative("brick_margin", &mut self.brick_margin, defaults.brick_margin);
        non_negative(
            "high_level_offset",
            &mut self.high_level_offset,
            defaults.high_level_offset,
        );
        non_negative("gravity", &mut self.gravity, defaults.gravity);
        non_negative("jump_speed", &mut self.jump_speed, defaults.jump_speed);
        positive(
            "max_tilt_degrees",
            &mut self.max_tilt_degrees,
            defaults.max_tilt_degrees,
        );
        non_negative("speed_ramp", &mut self.speed_ramp, defaults.speed_ramp);
        non_negative("gap_factor", &mut self.gap_factor, defaults.gap_factor);

        if !self.score_interval.is_finite() || self.score_interval <= 0.0 {
            log::warn!(
                "Tuning `score_interval` = {} is invalid, using {}",
                self.score_interval,
                defaults.score_interval
            );
            self.score_interval = defaults.score_interval;
        }

        // Gap rolls are checked first, so the level threshold can't sit below them
        if self.level_chance < self.gap_chance {
            log::warn!(
                "Tuning `level_chance` ({}) below `gap_chance` ({}), raising it",
                self.level_chance,
                self.gap_chance
            );
            self.level_chance = self.gap_chance;
        }

        self
    }

    /// Tip-over limit in radians
    pub fn max_tilt(&self) -> f32 {
        self.max_tilt_degrees.to_radians()
    }
}
