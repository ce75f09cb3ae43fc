//! Scene elements with animatable properties
//!
//! An element owns its property values and the cache of derived state built
//! from them. Every setter that feeds the bounds computation invalidates the
//! bounds cache; readers recompute lazily through
//! [`Element::bounds`]. Setters for properties the bounds does not depend on
//! (opacity, colour) leave the cache alone.

use rustc_hash::FxHashMap;

use shimmer_animation::{AnimValue, Property, TargetId};
use shimmer_core::CacheCell;
use shimmer_geometry::{Point, Quad, Rect};

/// One visual element: animatable properties plus lazily cached bounds
pub struct Element {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    scale_x: f32,
    scale_y: f32,
    /// Radians, about [`rotation_origin`](Self::set_rotation_origin)
    rotation: f32,
    /// Relative to the element position; `None` rotates about the frame
    /// centre
    rotation_origin: Option<Point>,
    opacity: f32,
    color: [f32; 4],
    /// Values written to `Property::Custom` tags; no derived state depends
    /// on them
    custom: FxHashMap<u16, AnimValue>,
    /// World-space axis-aligned bounding box, including rotation and scale
    bounds: CacheCell<Rect>,
    target: TargetId,
}

impl Element {
    pub(crate) fn new(target: TargetId, frame: Rect) -> Self {
        let frame = frame.with_positive_extent();
        Self {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            rotation_origin: None,
            opacity: 1.0,
            color: [1.0, 1.0, 1.0, 1.0],
            custom: FxHashMap::default(),
            bounds: CacheCell::new(),
            target,
        }
    }

    /// Handle this element is animated under
    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn custom(&self, tag: u16) -> Option<AnimValue> {
        self.custom.get(&tag).copied()
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.bounds.invalidate();
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
        self.bounds.invalidate();
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.bounds.invalidate();
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.bounds.invalidate();
    }

    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.scale_x = sx;
        self.scale_y = sy;
        self.bounds.invalidate();
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
        self.bounds.invalidate();
    }

    /// Set the rotation pivot, relative to the element position
    pub fn set_rotation_origin(&mut self, origin: Point) {
        self.rotation_origin = Some(origin);
        self.bounds.invalidate();
    }

    /// Opacity feeds no cached geometry; no invalidation
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    /// Route an animated property write to the matching setter.
    ///
    /// Kind mismatches (a pair written to a scalar property) are diagnosed
    /// and dropped rather than faulting the frame loop.
    pub(crate) fn apply(&mut self, property: Property, value: AnimValue) {
        match (property, value) {
            (Property::X, AnimValue::Scalar(v)) => self.set_x(v),
            (Property::Y, AnimValue::Scalar(v)) => self.set_y(v),
            (Property::Width, AnimValue::Scalar(v)) => self.set_width(v),
            (Property::Height, AnimValue::Scalar(v)) => self.set_height(v),
            (Property::Rotation, AnimValue::Scalar(v)) => self.set_rotation(v),
            (Property::Opacity, AnimValue::Scalar(v)) => self.set_opacity(v),
            (Property::ScaleX, AnimValue::Scalar(v)) => self.set_scale(v, self.scale_y),
            (Property::ScaleY, AnimValue::Scalar(v)) => self.set_scale(self.scale_x, v),
            (Property::Color, AnimValue::Color(c)) => self.set_color(c),
            (Property::Custom(tag), v) => {
                self.custom.insert(tag, v);
            }
            (property, value) => {
                tracing::warn!(?property, ?value, "dropping property write of the wrong kind");
            }
        }
    }

    /// The unrotated frame rectangle, scale applied about the position
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width * self.scale_x,
            self.height * self.scale_y,
        )
        .with_positive_extent()
    }

    /// World-space rotation pivot
    pub fn rotation_pivot(&self) -> Point {
        let frame = self.frame();
        match self.rotation_origin {
            Some(origin) => Point::new(frame.x + origin.x, frame.y + origin.y),
            None => frame.center(),
        }
    }

    fn compute_bounds(&self) -> Rect {
        let frame = self.frame();
        if self.rotation == 0.0 {
            frame
        } else {
            Quad::from_rect(frame)
                .rotated(self.rotation, self.rotation_pivot())
                .bounding_rect()
        }
    }

    /// World-space axis-aligned bounding box, recomputed only when a
    /// geometry-feeding property changed since the last read
    pub fn bounds(&self) -> Rect {
        self.bounds
            .refresh(|| self.compute_bounds())
            .unwrap_or_else(|_| self.compute_bounds())
    }

    /// Whether the bounds cache is warm (no recompute on the next read)
    pub fn bounds_cached(&self) -> bool {
        self.bounds.is_valid()
    }

    /// Pointer hit test in world space: half-open against the frame,
    /// rotated back first when the element is rotated. Fully transparent
    /// elements are not hit.
    pub fn hit(&self, point: Point) -> bool {
        if self.opacity <= 0.0 {
            return false;
        }
        shimmer_geometry::rotated_contains(
            &self.frame(),
            self.rotation,
            self.rotation_pivot(),
            point,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shimmer_animation::TransformEngine;

    fn element(frame: Rect) -> Element {
        let mut engine = TransformEngine::new();
        let target = engine.register_target();
        Element::new(target, frame)
    }

    #[test]
    fn geometry_setters_invalidate_bounds() {
        let mut el = element(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!el.bounds_cached());
        assert_eq!(el.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(el.bounds_cached());

        el.set_x(5.0);
        assert!(!el.bounds_cached());
        assert_eq!(el.bounds(), Rect::new(5.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn opacity_and_color_leave_bounds_cached() {
        let mut el = element(Rect::new(0.0, 0.0, 10.0, 10.0));
        el.bounds();
        el.set_opacity(0.5);
        el.set_color([1.0, 0.0, 0.0, 1.0]);
        assert!(el.bounds_cached());
    }

    #[test]
    fn rotation_expands_bounds() {
        let mut el = element(Rect::new(-5.0, -5.0, 10.0, 10.0));
        el.set_rotation(std::f32::consts::FRAC_PI_4);
        let bounds = el.bounds();
        let expected = 10.0 * std::f32::consts::SQRT_2;
        assert!((bounds.width - expected).abs() < 1e-3);
        assert!((bounds.height - expected).abs() < 1e-3);
    }

    #[test]
    fn transparent_elements_are_not_hit() {
        let mut el = element(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(el.hit(Point::new(5.0, 5.0)));
        el.set_opacity(0.0);
        assert!(!el.hit(Point::new(5.0, 5.0)));
    }

    #[test]
    fn mismatched_write_is_dropped() {
        let mut el = element(Rect::new(0.0, 0.0, 10.0, 10.0));
        el.apply(Property::X, AnimValue::Pair(1.0, 2.0));
        assert_eq!(el.x(), 0.0);

        el.apply(Property::Custom(7), AnimValue::Scalar(3.5));
        assert_eq!(el.custom(7), Some(AnimValue::Scalar(3.5)));
    }
}
