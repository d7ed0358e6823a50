//! Game state and core simulation types
//!
//! The simulation owns every entity outright. Hosts read positions after a
//! tick completes (or take a [`Snapshot`]) and never mutate them directly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; transient, the controller resets straight back to Playing
    GameOver,
}

/// Vertical tier that new bricks are spawned at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickLevel {
    #[default]
    Low,
    High,
}

impl BrickLevel {
    /// Extra height added to bricks spawned at this level
    pub fn offset(self, tuning: &Tuning) -> f32 {
        match self {
            BrickLevel::Low => 0.0,
            BrickLevel::High => tuning.high_level_offset,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BrickLevel::Low => BrickLevel::High,
            BrickLevel::High => BrickLevel::Low,
        }
    }
}

/// Something the host may want to react to (sound, HUD, menus)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Skater left the ground
    Jumped,
    /// Skater landed on a brick
    Landed,
    /// Gem picked up; `bonus` points were awarded
    GemCollected { gem_id: u32, bonus: u64 },
    /// A gap of `width` units opened in the track
    GapSpawned { width: f32 },
    /// Newly spawned bricks now use `level`
    LevelChanged { level: BrickLevel },
    /// The run ended after `ticks` ticks and the game restarted
    GameOver {
        score: u64,
        ticks: u64,
        new_high_score: bool,
    },
}

/// The player's skater
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skater {
    /// Center of the skater
    pub pos: Vec2,
    /// Velocity in units per second
    pub vel: Vec2,
    pub size: Vec2,
    /// Rotation from upright (radians, counter-clockwise positive).
    /// Physics never turns the skater; only the host sets this.
    pub rotation: f32,
    pub grounded: bool,
    /// Center height the skater rests at on its current support
    pub minimum_y: f32,
}

impl Skater {
    pub fn new(tuning: &Tuning) -> Self {
        let mut skater = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.skater_width, tuning.skater_height),
            rotation: 0.0,
            grounded: true,
            minimum_y: 0.0,
        };
        skater.reset(tuning);
        skater
    }

    /// Put the skater back at its starting spot, standing on the low level
    pub fn reset(&mut self, tuning: &Tuning) {
        let start = Self::start_position(tuning);
        self.pos = start;
        self.vel = Vec2::ZERO;
        self.size = Vec2::new(tuning.skater_width, tuning.skater_height);
        self.rotation = 0.0;
        self.grounded = true;
        self.minimum_y = start.y;
    }

    /// A quarter of the way across the frame, feet on top of a low brick
    pub fn start_position(tuning: &Tuning) -> Vec2 {
        Vec2::new(
            tuning.frame_width / 4.0,
            tuning.skater_height / 2.0 + tuning.brick_height,
        )
    }

    /// Height of the skater's feet
    #[inline]
    pub fn feet(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Stand on a surface whose top is at `top`
    pub fn land_on(&mut self, top: f32) {
        self.pos.y = top + self.size.y / 2.0;
        self.minimum_y = self.pos.y;
        self.vel.y = 0.0;
        self.grounded = true;
    }
}

/// A sidewalk brick (one tile of walkable track)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    /// Center of the brick
    pub pos: Vec2,
    pub size: Vec2,
    pub level: BrickLevel,
}

impl Brick {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Walkable surface height
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// A bonus gem floating over a gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gem {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Gem {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Track generation RNG
    pub rng: Pcg32,
    /// Balance parameters (fixed for the lifetime of the state)
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub skater: Skater,
    /// Bricks in left-to-right spawn order
    pub bricks: Vec<Brick>,
    /// Gems in spawn order
    pub gems: Vec<Gem>,
    /// Level used for the next spawned brick
    pub brick_level: BrickLevel,
    pub score: u64,
    /// Best score across runs (in memory only)
    pub high_score: u64,
    /// Units scrolled per 60 Hz frame
    pub scroll_speed: f32,
    /// Frame-clock time of the last passive score award
    pub last_score_time: f64,
    /// Frame-clock time of the previous tick (None right after a reset)
    pub last_frame_time: Option<f64>,
    /// Ticks simulated in the current run
    pub run_ticks: u64,
    /// Ticks simulated since the state was created
    pub time_ticks: u64,
    /// Completed runs
    pub runs: u32,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with the given tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.validated();
        log::info!("New game with seed {}", seed);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            skater: Skater::new(&tuning),
            phase: GamePhase::Playing,
            bricks: Vec::new(),
            gems: Vec::new(),
            brick_level: BrickLevel::Low,
            score: 0,
            high_score: 0,
            scroll_speed: tuning.starting_scroll_speed,
            last_score_time: 0.0,
            last_frame_time: None,
            run_ticks: 0,
            time_ticks: 0,
            runs: 0,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Return to the starting conditions of a run.
    ///
    /// High score, the RNG stream and the score clock carry over.
    pub fn reset_run(&mut self) {
        self.skater.reset(&self.tuning);
        self.score = 0;
        self.scroll_speed = self.tuning.starting_scroll_speed;
        self.brick_level = BrickLevel::Low;
        self.bricks.clear();
        self.gems.clear();
        self.last_frame_time = None;
        self.run_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Right edge of the rightmost brick (0 when there are none)
    pub fn frontier(&self) -> f32 {
        self.bricks
            .iter()
            .map(Brick::right)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }

    /// Read-only projection for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            skater_pos: self.skater.pos,
            skater_rotation: self.skater.rotation,
            grounded: self.skater.grounded,
            bricks: self
                .bricks
                .iter()
                .map(|b| SpriteView {
                    id: b.id,
                    pos: b.pos,
                    size: b.size,
                })
                .collect(),
            gems: self
                .gems
                .iter()
                .map(|g| SpriteView {
                    id: g.id,
                    pos: g.pos,
                    size: g.size,
                })
                .collect(),
            score: self.score,
            high_score: self.high_score,
            scroll_speed: self.scroll_speed,
        }
    }
}

/// Position and size of one drawable entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub skater_pos: Vec2,
    pub skater_rotation: f32,
    pub grounded: bool,
    pub bricks: Vec<SpriteView>,
    pub gems: Vec<SpriteView>,
    pub score: u64,
    pub high_score: u64,
    pub scroll_speed: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_initial_values() {
        let state = GameState::new(7);
        let tuning = Tuning::default();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_speed, tuning.starting_scroll_speed);
        assert_eq!(state.brick_level, BrickLevel::Low);
        assert!(state.bricks.is_empty());
        assert!(state.skater.grounded);
        assert_eq!(state.skater.pos, Skater::start_position(&tuning));
        // Feet rest on top of a low brick
        assert_eq!(state.skater.feet(), tuning.brick_height);
    }

    #[test]
    fn test_level_toggle() {
        assert_eq!(BrickLevel::Low.toggled(), BrickLevel::High);
        assert_eq!(BrickLevel::High.toggled(), BrickLevel::Low);
        let tuning = Tuning::default();
        assert_eq!(BrickLevel::High.offset(&tuning), tuning.high_level_offset);
    }

    #[test]
    fn test_frontier_empty_and_filled() {
        let mut state = GameState::new(1);
        assert_eq!(state.frontier(), 0.0);
        let id = state.next_entity_id();
        state.bricks.push(Brick {
            id,
            pos: Vec2::new(100.0, 32.0),
            size: Vec2::new(120.0, 64.0),
            level: BrickLevel::Low,
        });
        assert_eq!(state.frontier(), 160.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(3);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state.snapshot());
    }
}
