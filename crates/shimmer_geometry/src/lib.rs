//! Shimmer Geometry
//!
//! Rectangle and quad value types plus the containment and collision tests
//! the scene graph's hit-testing is built on:
//!
//! - **Half-open containment**: left/top inclusive, right/bottom exclusive
//! - **Strict intersection**: touching edges never count as overlap
//! - **Rotated tests**: point-in-rotated-rect and the two-phase
//!   rotated-rect vs axis-aligned-rect collision
//!
//! All queries are pure and assume both operands share a coordinate space.
//!
//! # Example
//!
//! ```rust
//! use shimmer_geometry::{rect_collide, Point, Rect};
//!
//! let panel = Rect::new(0.0, 0.0, 100.0, 40.0);
//! assert!(panel.contains(Point::new(99.0, 20.0)));
//! assert!(!panel.contains(Point::new(100.0, 20.0)));
//!
//! let cursor = Rect::new(90.0, 30.0, 6.0, 6.0);
//! assert!(rect_collide(0.3, &panel, &cursor, Point::new(50.0, 20.0)));
//! ```

pub mod collide;
pub mod primitives;

pub use collide::{rect_collide, rotated_contains};
pub use primitives::{Point, Quad, Rect, Size, Vec2};
