//! Value types shared by every routing strategy.
//!
//! These carry no routing behavior beyond derived geometry; strategies produce
//! fresh instances on every recalculation and never mutate them in place.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, midpoint};
use crate::router::ConnectorRouter;

/// The compass face of a rectangular host shape an endpoint attaches to.
///
/// The discriminants double as indices into the elbow routing table, so the
/// N/E/S/W order is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// The axis a segment leaving this side runs along.
    pub fn axis(self) -> Axis {
        match self {
            Side::East | Side::West => Axis::X,
            Side::North | Side::South => Axis::Y,
        }
    }

    /// The sign of motion away from the host shape: North/West are negative,
    /// East/South positive (y grows downward).
    pub fn direction(self) -> f64 {
        match self {
            Side::East | Side::South => 1.0,
            Side::North | Side::West => -1.0,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    pub(crate) fn table_index(self) -> usize {
        self as usize
    }
}

/// Axis of an axis-aligned segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn opposite(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// One straight sub-span of a connector's path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn center(&self) -> Point {
        midpoint(self.start, self.end)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Signed extent on the x axis.
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Signed extent on the y axis.
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Absolute extent along one axis.
    pub fn axis_length(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx().abs(),
            Axis::Y => self.dy().abs(),
        }
    }

    /// The start point moved `gap` units toward the end, so an arrowhead glyph
    /// of width `gap` does not overlap the line. A zero-length segment returns
    /// the start unchanged.
    pub fn shortened_start(&self, gap: f64) -> Point {
        self.moved_endpoint(self.start, self.end, gap)
    }

    /// The end point moved `gap` units toward the start; see [`shortened_start`].
    ///
    /// [`shortened_start`]: Segment::shortened_start
    pub fn shortened_end(&self, gap: f64) -> Point {
        self.moved_endpoint(self.end, self.start, gap)
    }

    fn moved_endpoint(&self, from: Point, toward: Point, gap: f64) -> Point {
        let len = self.length();
        if len == 0.0 {
            return from;
        }
        let t = (gap / len).clamp(0.0, 1.0);
        crate::geom::lerp(from, toward, t)
    }
}

/// Whether a waypoint was supplied by the user or derived by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WayPointKind {
    /// Authoritative user input (segmented/free routing).
    Preferred,
    /// Computed by the routing algorithm (elbow/curved routing).
    Derived,
}

/// An intermediate point the connector's path passes through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WayPoint {
    pub point: Point,
    pub kind: WayPointKind,
}

impl WayPoint {
    pub fn preferred(point: Point) -> Self {
        Self {
            point,
            kind: WayPointKind::Preferred,
        }
    }

    pub fn derived(point: Point) -> Self {
        Self {
            point,
            kind: WayPointKind::Derived,
        }
    }
}

/// Display glyph drawn at an anchor's position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorMarker {
    #[default]
    None,
    Circle,
}

/// An attachment at a fractional position along a connector's total length.
///
/// The absolute position is always recomputed from the connector's current
/// cached segments, never cached here, so anchors stay attached while the
/// connector is reshaped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Fractional position along the path. Values outside `[0, 1]` are
    /// clamped when resolved.
    pub position: f64,
    pub marker: AnchorMarker,
}

impl Anchor {
    pub fn new(position: f64) -> Self {
        Self {
            position,
            marker: AnchorMarker::None,
        }
    }

    pub fn with_marker(position: f64, marker: AnchorMarker) -> Self {
        Self { position, marker }
    }

    /// Absolute position on the router's current path.
    pub fn resolve(&self, router: &dyn ConnectorRouter) -> Point {
        router.point_at(self.position.clamp(0.0, 1.0))
    }

    /// Places an anchor at the line coordinate nearest to `p` on the router's
    /// current path.
    pub fn at_point(router: &dyn ConnectorRouter, p: Point) -> Self {
        Self::new(router.coordinate_at(p))
    }
}
