//! Shimmer Animation System
//!
//! Easing curves and the time-based property transform engine.
//!
//! # Features
//!
//! - **Easing Library**: 31 curves; Out and InOut variants derived from each
//!   shape's In primitive by reflection
//! - **Transform Engine**: per-target, per-property transforms with start/end
//!   values, timing, looping, and completion records returned per tick
//! - **Fail-fast validation**: timing and value contracts are checked at
//!   schedule time, never inside the frame loop
//!
//! # Example
//!
//! ```rust
//! use shimmer_animation::{AnimValue, Easing, Property, PropertySink, TargetId, TransformEngine};
//!
//! struct Printer;
//! impl PropertySink for Printer {
//!     fn set_property(&mut self, _: TargetId, property: Property, value: AnimValue) {
//!         println!("{property:?} <- {value:?}");
//!     }
//! }
//!
//! let mut engine = TransformEngine::new();
//! let target = engine.register_target();
//! engine
//!     .schedule(
//!         target,
//!         Property::Opacity,
//!         AnimValue::Scalar(0.0),
//!         AnimValue::Scalar(1.0),
//!         0.0,
//!         250.0,
//!         Easing::QuadOut,
//!         0,
//!     )
//!     .unwrap();
//!
//! let completions = engine.evaluate(250.0, &mut Printer);
//! assert_eq!(completions.len(), 1);
//! ```

pub mod easing;
pub mod engine;
pub mod transform;

pub use easing::Easing;
pub use engine::{Completion, PropertySink, Repeat, TargetId, TransformEngine, TransformId};
pub use transform::{AnimValue, Property, ValueKind};
