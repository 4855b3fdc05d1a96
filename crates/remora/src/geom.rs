#![forbid(unsafe_code)]

//! Shared geometry aliases over `euclid`.
//!
//! All coordinates are in diagram space (`f64`, y grows downward).

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Linear interpolation between `a` and `b` (`t = 0` yields `a`, `t = 1` yields `b`).
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    point(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Midpoint of `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    lerp(a, b, 0.5)
}

/// Sign of `b - a` on the x axis: `1` when `b` lies right of `a`, `-1` when left, `0` when equal.
pub fn direction_x(a: Point, b: Point) -> i32 {
    sign(b.x - a.x)
}

/// Sign of `b - a` on the y axis: `1` when `b` lies below `a`, `-1` when above, `0` when equal.
pub fn direction_y(a: Point, b: Point) -> i32 {
    sign(b.y - a.y)
}

fn sign(d: f64) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}
