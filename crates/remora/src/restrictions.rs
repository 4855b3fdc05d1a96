//! The read-only contract a routing strategy consumes from its owning edge.
//!
//! This is the kernel's only input: the edge object (external to this crate)
//! holds the geometry and hands it over through this trait on every
//! `recalculate` call. The kernel knows nothing about the diagram, node
//! shapes, or rendering.

use crate::geom::{Point, Rect};
use crate::model::Side;

pub trait ConnectorRestrictions {
    /// Absolute start point of the connector.
    fn start_point(&self) -> Point;

    /// Absolute end point of the connector.
    fn end_point(&self) -> Point;

    /// The face of the start host shape the connector leaves from.
    fn start_side(&self) -> Side;

    /// The face of the end host shape the connector arrives at.
    fn end_side(&self) -> Side;

    /// Ordered waypoints the connector should try to route through. These are
    /// preferences: a strategy may ignore them when it cannot draw a valid
    /// path through them.
    fn waypoint_preferences(&self) -> Vec<Point>;

    /// Queries whether the connector may cross `point`. A returned rectangle
    /// bounds the occupied region around the point that advanced strategies
    /// should route around; `None` means no restriction.
    fn may_cross(&self, point: Point) -> Option<Rect> {
        let _ = point;
        None
    }
}

/// A plain-value [`ConnectorRestrictions`] implementation.
///
/// Hosts that keep connector geometry as data (rather than deriving it from a
/// live document) can use this directly; it is also what the kernel's own
/// tests route against.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRestrictions {
    start: Point,
    end: Point,
    start_side: Side,
    end_side: Side,
    waypoints: Vec<Point>,
}

impl FixedRestrictions {
    /// An unconnected edge defaults to leaving west and arriving east, like a
    /// left-to-right drawn line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            start_side: Side::West,
            end_side: Side::East,
            waypoints: Vec::new(),
        }
    }

    pub fn with_sides(mut self, start_side: Side, end_side: Side) -> Self {
        self.start_side = start_side;
        self.end_side = end_side;
        self
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Point>) -> Self {
        self.waypoints = waypoints;
        self
    }

    pub fn set_start(&mut self, p: Point) {
        self.start = p;
    }

    pub fn set_end(&mut self, p: Point) {
        self.end = p;
    }

    pub fn push_waypoint(&mut self, p: Point) {
        self.waypoints.push(p);
    }
}

impl ConnectorRestrictions for FixedRestrictions {
    fn start_point(&self) -> Point {
        self.start
    }

    fn end_point(&self) -> Point {
        self.end
    }

    fn start_side(&self) -> Side {
        self.start_side
    }

    fn end_side(&self) -> Side {
        self.end_side
    }

    fn waypoint_preferences(&self) -> Vec<Point> {
        self.waypoints.clone()
    }
}
