//! Elbow routing: an axis-aligned path honoring the attachment sides with
//! the minimum number of bends the side pair requires.

use crate::cache::RouteCache;
use crate::geom::{self, Point, midpoint, point};
use crate::linecoord;
use crate::model::{Axis, Segment, Side, WayPoint};
use crate::path::{self, Path};
use crate::restrictions::ConnectorRestrictions;
use crate::router::ConnectorRouter;

/// Length of the stub leaving an attachment side before the first bend.
const SEGMENT_OFFSET: f64 = 20.0;

/// Interior waypoint count for every side pair, indexed as
/// `[left side][right side][z]` where "left" is the side attached to the
/// leftmost of the two endpoints, and `z` is 0 when the left endpoint lies
/// below the right one, 1 otherwise.
///
/// Rows/columns are in `Side` order (N, E, S, W). Total segment count is the
/// entry plus two (the stubs at either end). The table is the full
/// orthogonal-routing case analysis; every entry is covered by a test.
///
/// ```text
///           right: N  E  S  W
/// left N, z=0:     1  2  1  0
/// left N, z=1:     1  2  3  2
/// left E, z=0:     2  1  0  1
/// left E, z=1:     0  1  2  1
/// left S, z=0:     3  2  1  2
/// left S, z=1:     1  2  1  0
/// left W, z=0:     2  3  2  1
/// left W, z=1:     2  3  2  1
/// ```
const INTERIOR_WAYPOINTS: [[[usize; 2]; 4]; 4] = [
    // left = North
    [[1, 1], [2, 2], [1, 3], [0, 2]],
    // left = East
    [[2, 0], [1, 1], [0, 2], [1, 1]],
    // left = South
    [[3, 1], [2, 2], [1, 1], [2, 0]],
    // left = West
    [[2, 2], [3, 3], [2, 2], [1, 1]],
];

#[derive(Debug, Default)]
pub struct ElbowRouter {
    cache: RouteCache,
}

impl ElbowRouter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectorRouter for ElbowRouter {
    fn recalculate(&mut self, restrictions: &dyn ConnectorRestrictions) {
        let segments = compute_segments(restrictions);
        let waypoints = interior_centers(&segments);
        self.cache
            .replace(Path::polyline(&segments), segments, waypoints);
    }

    fn shape(&self) -> &Path {
        self.cache.shape()
    }

    fn segments(&self) -> &[Segment] {
        self.cache.segments()
    }

    fn waypoints(&self) -> &[WayPoint] {
        self.cache.waypoints()
    }

    fn has_valid_waypoints(&self, _restrictions: &dyn ConnectorRestrictions) -> bool {
        // The elbow path is always re-derived from the side geometry;
        // preferred waypoints are never trusted.
        false
    }

    fn coordinate_at(&self, p: Point) -> f64 {
        linecoord::chord_coordinate(self.segments(), p)
    }

    fn adjusted_shape(&self, start_gap: f64, end_gap: f64) -> Path {
        path::trimmed_polyline(self.segments(), start_gap, end_gap)
    }
}

/// Interior waypoint count for the given endpoint/side geometry.
fn interior_waypoint_count(restrictions: &dyn ConnectorRestrictions) -> usize {
    let start = restrictions.start_point();
    let end = restrictions.end_point();

    let left_to_right = geom::direction_x(start, end) > 0;
    let (left, right) = if left_to_right {
        (start, end)
    } else {
        (end, start)
    };
    let left_bottom = geom::direction_y(left, right) < 0;
    let z = if left_bottom { 0 } else { 1 };

    let (left_side, right_side) = if left_to_right {
        (restrictions.start_side(), restrictions.end_side())
    } else {
        (restrictions.end_side(), restrictions.start_side())
    };
    INTERIOR_WAYPOINTS[left_side.table_index()][right_side.table_index()][z]
}

/// The full elbow segment list. Shared with curved routing, which keeps this
/// topology for hit-testing and anchors and only renders a different shape.
pub(crate) fn compute_segments(restrictions: &dyn ConnectorRestrictions) -> Vec<Segment> {
    let start = restrictions.start_point();
    let end = restrictions.end_point();
    let start_axis = restrictions.start_side().axis();

    let waypoints = derive_waypoints(restrictions);
    let mut segments = Vec::with_capacity(waypoints.len() + 2);

    if waypoints.is_empty() {
        // One orthogonal jog: out along the start axis, then straight in.
        let first = axis_segment(start, end, start_axis);
        segments.push(first);
        segments.push(axis_segment(first.end, end, start_axis.opposite()));
        return segments;
    }

    segments.push(axis_segment(start, waypoints[0], start_axis));
    let mut axis = start_axis.opposite();
    for wp in &waypoints[1..] {
        let from = segments[segments.len() - 1].end;
        segments.push(axis_segment(from, *wp, axis));
        axis = axis.opposite();
    }
    let from = segments[segments.len() - 1].end;
    segments.push(axis_segment(from, end, axis));
    let from = segments[segments.len() - 1].end;
    segments.push(axis_segment(from, end, restrictions.end_side().axis()));
    segments
}

/// Derived interior waypoints for the 1-, 2- and 3-waypoint cases. The
/// 3-waypoint case routes through the midpoint between start and end,
/// forming the loop used when both ends face away from each other.
fn derive_waypoints(restrictions: &dyn ConnectorRestrictions) -> Vec<Point> {
    let start = restrictions.start_point();
    let end = restrictions.end_point();
    let start_side = restrictions.start_side();
    let end_side = restrictions.end_side();

    match interior_waypoint_count(restrictions) {
        1 => vec![stub_waypoint(start, end, start_side)],
        2 => {
            let clearance = SEGMENT_OFFSET * end_side.direction();
            let first = stub_waypoint(
                start,
                point(end.x + clearance, end.y + clearance),
                start_side,
            );
            let second = stub_waypoint(end, first, end_side);
            vec![first, second]
        }
        3 => {
            let mid = midpoint(start, end);
            vec![
                stub_waypoint(start, mid, start_side),
                mid,
                stub_waypoint(end, mid, end_side),
            ]
        }
        _ => Vec::new(),
    }
}

/// A waypoint one stub length out of `side`, centered between `from` and
/// `toward` on the perpendicular axis.
fn stub_waypoint(from: Point, toward: Point, side: Side) -> Point {
    let offset = SEGMENT_OFFSET * side.direction();
    match side.axis() {
        Axis::Y => point(from.x + (toward.x - from.x) / 2.0, from.y + offset),
        Axis::X => point(from.x + offset, from.y + (toward.y - from.y) / 2.0),
    }
}

/// An axis-aligned segment from `start` toward `toward`: it covers the full
/// extent on `axis` and none on the other axis. May be zero-length.
fn axis_segment(start: Point, toward: Point, axis: Axis) -> Segment {
    let end = match axis {
        Axis::X => point(toward.x, start.y),
        Axis::Y => point(start.x, toward.y),
    };
    Segment::new(start, end)
}

/// The derived waypoints reported to the host: the centers of the interior
/// segments, in path order.
pub(crate) fn interior_centers(segments: &[Segment]) -> Vec<WayPoint> {
    if segments.len() < 3 {
        return Vec::new();
    }
    segments[1..segments.len() - 1]
        .iter()
        .map(|s| WayPoint::derived(s.center()))
        .collect()
}
