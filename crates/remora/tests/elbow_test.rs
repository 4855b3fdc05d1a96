use remora::{
    ConnectorRouter, ElbowRouter, FixedRestrictions, Point, Segment, Side, WayPointKind, point,
};

/// Expected interior waypoint count per `(left side, right side, z)`, in
/// N/E/S/W order. Mirrors the routing table; every entry is driven below.
const EXPECTED: [[[usize; 2]; 4]; 4] = [
    [[1, 1], [2, 2], [1, 3], [0, 2]],
    [[2, 0], [1, 1], [0, 2], [1, 1]],
    [[3, 1], [2, 2], [1, 1], [2, 0]],
    [[2, 2], [3, 3], [2, 2], [1, 1]],
];

fn routed(start: Point, start_side: Side, end: Point, end_side: Side) -> ElbowRouter {
    let restrictions = FixedRestrictions::new(start, end).with_sides(start_side, end_side);
    let mut router = ElbowRouter::new();
    router.recalculate(&restrictions);
    router
}

fn assert_connected(segments: &[Segment], start: Point, end: Point) {
    assert_eq!(segments[0].start, start, "path must start at the start point");
    assert_eq!(
        segments[segments.len() - 1].end,
        end,
        "path must end at the end point"
    );
    for pair in segments.windows(2) {
        assert_eq!(
            pair[0].end, pair[1].start,
            "consecutive segments must share an endpoint"
        );
    }
}

fn assert_axis_aligned(segments: &[Segment]) {
    for seg in segments {
        assert!(
            seg.dx() == 0.0 || seg.dy() == 0.0,
            "segment {seg:?} is not axis-aligned"
        );
    }
}

#[test]
fn side_table_all_32_entries() {
    let start = point(0.0, 0.0);
    for (x, start_side) in Side::ALL.into_iter().enumerate() {
        for (y, end_side) in Side::ALL.into_iter().enumerate() {
            for z in 0..2 {
                // `start` is the left point; z = 0 places it below `end`.
                let end = if z == 0 {
                    point(100.0, -100.0)
                } else {
                    point(100.0, 100.0)
                };
                let router = routed(start, start_side, end, end_side);
                let segments = router.segments();

                let interior = EXPECTED[x][y][z];
                assert_eq!(
                    segments.len(),
                    interior + 2,
                    "segment count for ({start_side:?}, {end_side:?}, z={z})"
                );
                assert_eq!(
                    router.waypoints().len(),
                    interior,
                    "waypoint count for ({start_side:?}, {end_side:?}, z={z})"
                );
                assert_connected(segments, start, end);
                assert_axis_aligned(segments);
            }
        }
    }
}

#[test]
fn east_to_north_is_a_single_jog() {
    // Table entry (E, N, z=1) is 0 interior waypoints: two segments.
    let router = routed(point(0.0, 0.0), Side::East, point(100.0, 100.0), Side::North);
    assert_eq!(
        router.segments(),
        &[
            Segment::new(point(0.0, 0.0), point(100.0, 0.0)),
            Segment::new(point(100.0, 0.0), point(100.0, 100.0)),
        ]
    );
    assert!(router.waypoints().is_empty());
}

#[test]
fn right_to_left_indexes_the_table_from_the_left_point() {
    // Start right of end, so the end's side becomes the left index:
    // (E, N, z=1) again, two segments.
    let router = routed(
        point(100.0, 100.0),
        Side::North,
        point(0.0, 0.0),
        Side::East,
    );
    assert_eq!(router.segments().len(), 2);
    assert_connected(router.segments(), point(100.0, 100.0), point(0.0, 0.0));
}

#[test]
fn derived_waypoints_sit_at_interior_segment_centers() {
    // (N, N, z=0) has one interior waypoint: a stub up from the start,
    // a crossing run at y = -20, and a drop into the end.
    let router = routed(
        point(0.0, 0.0),
        Side::North,
        point(100.0, -100.0),
        Side::North,
    );
    assert_eq!(
        router.segments(),
        &[
            Segment::new(point(0.0, 0.0), point(0.0, -20.0)),
            Segment::new(point(0.0, -20.0), point(100.0, -20.0)),
            Segment::new(point(100.0, -20.0), point(100.0, -100.0)),
        ]
    );
    assert_eq!(router.waypoints().len(), 1);
    assert_eq!(router.waypoints()[0].point, point(50.0, -20.0));
    assert_eq!(router.waypoints()[0].kind, WayPointKind::Derived);
}

#[test]
fn facing_away_sides_route_through_the_midpoint() {
    // (W, E, z=1): both stubs point away from the other end; three interior
    // waypoints loop the path around, through the start/end midpoint's axis.
    let router = routed(point(0.0, 0.0), Side::West, point(100.0, 0.0), Side::East);
    let segments = router.segments();
    assert_eq!(segments.len(), 5);
    assert_connected(segments, point(0.0, 0.0), point(100.0, 0.0));
    assert_axis_aligned(segments);
    // The path leaves west and arrives east despite end lying due east.
    assert_eq!(segments[0].end, point(-20.0, 0.0));
    assert_eq!(segments[4].start, point(120.0, 0.0));
}

#[test]
fn colinear_endpoints_permit_zero_length_segments() {
    let router = routed(point(0.0, 0.0), Side::West, point(100.0, 0.0), Side::East);
    assert!(router.segments().iter().any(|s| s.length() == 0.0));
    // Zero-length segments must not poison the line-coordinate transform.
    let mid = router.point_at(0.5);
    assert!(mid.x.is_finite() && mid.y.is_finite());
}

#[test]
fn recalculate_is_deterministic() {
    let restrictions = FixedRestrictions::new(point(3.0, 7.0), point(211.0, -13.0))
        .with_sides(Side::South, Side::West);
    let mut a = ElbowRouter::new();
    let mut b = ElbowRouter::new();
    a.recalculate(&restrictions);
    b.recalculate(&restrictions);
    a.recalculate(&restrictions);
    assert_eq!(a.segments(), b.segments());
    assert_eq!(a.waypoints(), b.waypoints());
    assert_eq!(a.shape(), b.shape());
}

#[test]
fn preferred_waypoints_are_never_trusted() {
    let restrictions = FixedRestrictions::new(point(0.0, 0.0), point(100.0, 100.0))
        .with_sides(Side::East, Side::North)
        .with_waypoints(vec![point(50.0, 0.0)]);
    let mut router = ElbowRouter::new();
    router.recalculate(&restrictions);
    assert!(!router.has_valid_waypoints(&restrictions));
    // The derived path ignores the preference entirely.
    assert_eq!(router.segments().len(), 2);
}

#[test]
fn coincident_endpoints_do_not_panic() {
    let router = routed(point(10.0, 10.0), Side::East, point(10.0, 10.0), Side::West);
    assert_connected(router.segments(), point(10.0, 10.0), point(10.0, 10.0));
    assert_axis_aligned(router.segments());
    // The path still loops out of the east side and back in from the west.
    let probe = router.point_at(0.3);
    assert!(probe.x.is_finite() && probe.y.is_finite());
    // The chord is degenerate, so the inverse transform pins to 0.
    assert_eq!(router.coordinate_at(point(0.0, 0.0)), 0.0);
}

#[test]
fn coordinate_at_uses_the_chord_approximation() {
    // Two-segment L path from (0,0) to (100,100); the chord is the diagonal.
    let router = routed(point(0.0, 0.0), Side::East, point(100.0, 100.0), Side::North);
    // A point halfway along the chord projects to 0.5 even though it is far
    // from the bent path itself.
    assert!((router.coordinate_at(point(50.0, 50.0)) - 0.5).abs() < 1e-12);
    // The elbow corner projects onto the chord, not onto itself.
    let corner = router.coordinate_at(point(100.0, 0.0));
    assert!((corner - 0.5).abs() < 1e-12);
}
