//! Platform abstraction layer
//!
//! Glue between a host's event loop and the simulation:
//! - Input: jump requests captured between ticks

pub mod input;

pub use input::JumpLatch;
