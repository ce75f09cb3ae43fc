//! Shimmer Scene
//!
//! The consumer layer tying the core together: elements with animatable
//! properties, lazily cached bounds invalidated by the property setters the
//! transform engine writes through, and hit-test input routing over the
//! geometry primitives.
//!
//! # Frame tick
//!
//! ```rust
//! use shimmer_animation::{AnimValue, Easing, Property, TransformEngine};
//! use shimmer_core::Scheduler;
//! use shimmer_geometry::{Point, Rect};
//! use shimmer_scene::Scene;
//!
//! let mut engine = TransformEngine::new();
//! let mut scene = Scene::new();
//! let mut scheduler = Scheduler::new();
//!
//! let button = scene.insert(&mut engine, Rect::new(0.0, 0.0, 100.0, 40.0));
//! let target = scene.element(button).unwrap().target();
//! engine
//!     .schedule(
//!         target,
//!         Property::X,
//!         AnimValue::Scalar(0.0),
//!         AnimValue::Scalar(200.0),
//!         0.0,
//!         1000.0,
//!         Easing::Linear,
//!         0,
//!     )
//!     .unwrap();
//!
//! // One frame at t = 500ms: drain deferred work, evaluate transforms,
//! // then consumers read lazily and route input
//! scheduler.update();
//! engine.evaluate(500.0, &mut scene);
//! assert_eq!(scene.bounds(button).unwrap().x, 100.0);
//! assert_eq!(scene.hit_test(Point::new(150.0, 20.0)), Some(button));
//! ```

pub mod element;
pub mod scene;

pub use element::Element;
pub use scene::{ElementId, Scene};
