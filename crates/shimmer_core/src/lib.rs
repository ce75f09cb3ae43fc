//! Shimmer Core
//!
//! Foundational primitives for the Shimmer scene-graph core:
//!
//! - **Invalidatable Caches**: memoized values with explicit, caller-driven
//!   staleness marking
//! - **Scheduler**: a FIFO queue of deferred actions drained once per tick
//! - **Errors**: shared error kinds for the core and animation layers
//!
//! # Example
//!
//! ```rust
//! use shimmer_core::{CacheCell, Scheduler};
//!
//! let layout: CacheCell<(f32, f32)> = CacheCell::new();
//! let size = layout.refresh(|| (320.0, 240.0)).unwrap();
//! assert_eq!(size, (320.0, 240.0));
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.add(|_| println!("runs on the next update tick"));
//! scheduler.update();
//! ```

pub mod cache;
pub mod error;
pub mod scheduler;

pub use cache::CacheCell;
pub use error::{CoreError, Result};
pub use scheduler::{Action, Scheduler};
