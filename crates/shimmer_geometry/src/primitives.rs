//! Core geometry value types
//!
//! Points, sizes, rectangles, and free-form quads. Containment and
//! intersection follow raster conventions: left/top edges are inclusive,
//! right/bottom edges are exclusive, and rectangles that merely touch do not
//! intersect. All operations assume both operands live in the same coordinate
//! space; transforming them there is the caller's job.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate this point by `theta` radians about `origin`
    pub fn rotated_about(self, theta: f32, origin: Point) -> Self {
        let (sin, cos) = theta.sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Point::new(
            origin.x + dx * cos - dy * sin,
            origin.y + dx * sin + dy * cos,
        )
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Perpendicular vector (90 degrees counter-clockwise)
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle.
///
/// Width and height may be negative until normalized via
/// [`with_positive_extent`](Rect::with_positive_extent); the queries below
/// assume a normalized rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            width: (p2.x - p1.x).abs(),
            height: (p2.y - p1.y).abs(),
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Flip any negative extent so width and height are non-negative.
    ///
    /// The covered region is unchanged; only the sign convention is.
    pub fn with_positive_extent(&self) -> Self {
        let mut r = *self;
        if r.width < 0.0 {
            r.x += r.width;
            r.width = -r.width;
        }
        if r.height < 0.0 {
            r.y += r.height;
            r.height = -r.height;
        }
        r
    }

    /// Half-open containment: left/top edges inclusive, right/bottom
    /// exclusive, so adjacent rectangles never both claim a shared edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Overlap test with strict inequality: touching edges do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Translate by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Free-form convex quad, the four-corner generalization of [`Rect`].
///
/// Corner order is top-left, top-right, bottom-right, bottom-left of the
/// source rectangle; an affine placement keeps that winding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub corners: [Point; 4],
}

impl Quad {
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.with_positive_extent();
        Self {
            corners: [
                Point::new(r.x, r.y),
                Point::new(r.right(), r.y),
                Point::new(r.right(), r.bottom()),
                Point::new(r.x, r.bottom()),
            ],
        }
    }

    /// Apply an arbitrary affine placement corner-wise
    pub fn transform(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            corners: [
                f(self.corners[0]),
                f(self.corners[1]),
                f(self.corners[2]),
                f(self.corners[3]),
            ],
        }
    }

    /// Rotate every corner by `theta` radians about `origin`
    pub fn rotated(&self, theta: f32, origin: Point) -> Self {
        self.transform(|p| p.rotated_about(theta, origin))
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        self.transform(|p| Point::new(p.x + dx, p.y + dy))
    }

    /// Smallest axis-aligned rectangle covering all four corners
    pub fn bounding_rect(&self) -> Rect {
        let mut min_x = self.corners[0].x;
        let mut min_y = self.corners[0].y;
        let mut max_x = min_x;
        let mut max_y = min_y;
        for corner in &self.corners[1..] {
            min_x = min_x.min(corner.x);
            min_y = min_y.min(corner.y);
            max_x = max_x.max(corner.x);
            max_y = max_y.max(corner.y);
        }
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.999, 5.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
        assert!(!r.contains(Point::new(-0.001, 5.0)));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));

        let c = Rect::new(9.5, 0.0, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn positive_extent_preserves_region() {
        let r = Rect::new(10.0, 10.0, -4.0, -6.0);
        let n = r.with_positive_extent();
        assert_eq!(n, Rect::new(6.0, 4.0, 4.0, 6.0));
        // Same corner pair either way
        assert_eq!(
            Rect::from_points(Point::new(10.0, 10.0), Point::new(6.0, 4.0)),
            n
        );
    }

    #[test]
    fn quad_from_rect_round_trips_bounding_rect() {
        let r = Rect::new(2.0, 3.0, 5.0, 7.0);
        assert_eq!(Quad::from_rect(r).bounding_rect(), r);
    }

    #[test]
    fn rotated_quad_bounding_rect_grows() {
        let r = Rect::new(-5.0, -5.0, 10.0, 10.0);
        let q = Quad::from_rect(r).rotated(std::f32::consts::FRAC_PI_4, Point::ZERO);
        let bounds = q.bounding_rect();
        let expected = 10.0 * std::f32::consts::SQRT_2;
        assert!((bounds.width - expected).abs() < 1e-3);
        assert!((bounds.height - expected).abs() < 1e-3);
    }

    #[test]
    fn point_rotation_about_origin() {
        let p = Point::new(1.0, 0.0).rotated_about(std::f32::consts::FRAC_PI_2, Point::ZERO);
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }
}
