//! The line-coordinate transform: mapping between a normalized `0..1`
//! distance along a connector's path and an absolute point.
//!
//! All functions operate on the *current* cached segment list of a strategy,
//! so anchors resolved through them track the connector as it is reshaped.

use crate::geom::{Point, lerp};
use crate::model::Segment;

/// Total Euclidean length of the polyline.
pub fn total_length(segments: &[Segment]) -> f64 {
    segments.iter().map(Segment::length).sum()
}

/// Walks the segments accumulating length until the cumulative fraction
/// reaches `t`, then interpolates within the matching segment.
///
/// `t` is clamped to `[0, 1]`. A zero-length path (including the empty
/// segment list) yields its start point, or the origin when there is none.
pub fn point_at(segments: &[Segment], t: f64) -> Point {
    let Some(first) = segments.first() else {
        return Point::origin();
    };
    let total = total_length(segments);
    if total == 0.0 {
        return first.start;
    }

    let target = t.clamp(0.0, 1.0) * total;
    let mut walked = 0.0;
    for seg in segments {
        let len = seg.length();
        if walked + len >= target && len > 0.0 {
            return lerp(seg.start, seg.end, (target - walked) / len);
        }
        walked += len;
    }
    segments[segments.len() - 1].end
}

/// True polyline projection: the fractional position of the point on the
/// path nearest to `p`. Used by the straight and segmented strategies.
pub fn polyline_coordinate(segments: &[Segment], p: Point) -> f64 {
    let total = total_length(segments);
    if total == 0.0 {
        return 0.0;
    }

    let mut best = 0.0;
    let mut best_dist = f64::INFINITY;
    let mut walked = 0.0;
    for seg in segments {
        let len = seg.length();
        if len > 0.0 {
            let t = segment_parameter(seg, p);
            let nearest = lerp(seg.start, seg.end, t);
            let dist = (p - nearest).length();
            if dist < best_dist {
                best_dist = dist;
                best = (walked + t * len) / total;
            }
        }
        walked += len;
    }
    best.clamp(0.0, 1.0)
}

/// Chord projection: `p` projected onto the straight line from the first
/// segment's start to the last segment's end, as a fraction of that chord.
///
/// This deliberately approximates the bent path of orthogonal connectors by
/// its chord; anchors on those connectors move primarily when the connector
/// is dragged, not when dropped at an arbitrary point, so the cheap
/// projection is good enough and keeps dragging monotonic.
pub fn chord_coordinate(segments: &[Segment], p: Point) -> f64 {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return 0.0;
    };
    let chord = Segment::new(first.start, last.end);
    if chord.length() == 0.0 {
        return 0.0;
    }
    segment_parameter(&chord, p)
}

/// Parameter `t ∈ [0, 1]` of the point on `seg` nearest to `p`.
fn segment_parameter(seg: &Segment, p: Point) -> f64 {
    let dir = seg.end - seg.start;
    let len_sq = dir.square_length();
    if len_sq == 0.0 {
        return 0.0;
    }
    ((p - seg.start).dot(dir) / len_sq).clamp(0.0, 1.0)
}
