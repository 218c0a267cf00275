//! Core types shared across the Orbitfolio scene stack.
//!
//! This crate provides the foundational pieces every scene builds on:
//! - Frame clock and elapsed-time tracking
//! - Spatial transform for scene nodes
//! - Timer scope with explicit cancellation tokens

pub mod time;
pub mod timers;
pub mod transform;

pub use time::*;
pub use timers::*;
pub use transform::*;

// Re-export commonly used math types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
