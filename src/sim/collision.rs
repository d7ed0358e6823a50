//! Collision detection for axis-aligned boxes
//!
//! Everything in the world is an upright rectangle: the skater, bricks and
//! gems. Contacts are resolved by classifying how the skater's box meets a
//! brick (standing on top of it, or running into its side).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How far below a brick top the skater's feet may be and still step onto it
pub const STEP_TOLERANCE: f32 = 2.0;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap (touching edges don't count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other)
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Strict overlap of the horizontal spans
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }
}

/// How the skater touches a brick this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrickContact {
    /// Not touching
    None,
    /// Feet reached the brick top from above; stand at `top`
    Top { top: f32 },
    /// Ran into the brick's left face; skater must be moved to `x`
    Side { x: f32 },
}

/// Classify the contact between the skater and one brick.
///
/// `prev_feet` is the skater's feet height before this tick's integration;
/// a landing only counts if the feet were at or above the top then.
pub fn skater_brick_contact(skater: &Aabb, prev_feet: f32, brick: &Aabb) -> BrickContact {
    if !skater.overlaps_x(brick) {
        return BrickContact::None;
    }

    let top = brick.max.y;
    let feet = skater.min.y;

    if feet > top {
        return BrickContact::None;
    }

    // Coming down onto (or resting on) the top surface
    if prev_feet >= top - STEP_TOLERANCE || feet >= top - STEP_TOLERANCE {
        return BrickContact::Top { top };
    }

    // Below the top surface and overlapping vertically: hit the face
    if skater.max.y > brick.min.y {
        return BrickContact::Side {
            x: brick.min.x - skater.width() / 2.0,
        };
    }

    BrickContact::None
}
