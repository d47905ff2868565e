use core::ops::{Add, AddAssign, Sub};

/// A 2D point or offset in pixels.
///
/// Whether the coordinates are field-local or root-relative depends on where
/// the value came from; the oracle and viewport document their spaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp this point into `rect` (edges inclusive).
    pub fn coerce_in(self, rect: Rect) -> Self {
        Self {
            x: self.x.max(rect.left).min(rect.right),
            y: self.y.max(rect.top).min(rect.bottom),
        }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
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

/// Axis-aligned rectangle stored as edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// The empty rectangle at the origin. Consumers treat it as "nothing to show".
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn bottom_center(&self) -> Point {
        Point::new(self.left + self.width() / 2.0, self.bottom)
    }

    /// Point containment with all four edges included.
    pub fn contains_inclusive(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Whether the two rects share some area. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right > other.left
            && other.right > self.left
            && self.bottom > other.top
            && other.bottom > self.top
    }

    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let mut p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
        p += Point::new(-4.0, 1.0);
        assert_eq!(p, Point::new(0.0, 7.0));
        assert_eq!(p - Point::new(0.0, 7.0), Point::ZERO);
    }

    #[test]
    fn coerce_point_into_rect() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert_eq!(Point::new(150.0, -5.0).coerce_in(bounds), Point::new(100.0, 0.0));
        assert_eq!(Point::new(50.0, 10.0).coerce_in(bounds), Point::new(50.0, 10.0));
    }

    #[test]
    fn inclusive_containment_includes_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_inclusive(Point::new(10.0, 10.0)));
        assert!(r.contains_inclusive(Point::new(0.0, 5.0)));
        assert!(!r.contains_inclusive(Point::new(10.1, 5.0)));
    }

    #[test]
    fn overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        let crossing = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert_eq!(a.intersect(&crossing), Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn bottom_center_and_origin_size() {
        let r = Rect::from_origin_size(Point::new(10.0, 20.0), Size::new(4.0, 16.0));
        assert_eq!(r, Rect::new(10.0, 20.0, 14.0, 36.0));
        assert_eq!(r.bottom_center(), Point::new(12.0, 36.0));
        assert_eq!(r.size(), Size::new(4.0, 16.0));
    }
}
