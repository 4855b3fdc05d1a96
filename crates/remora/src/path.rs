//! Renderable path representation.
//!
//! A [`Path`] is an ordered command list the host renderer can replay into
//! whatever backend it uses (SVG path data, a canvas, a `lyon` builder). The
//! kernel only ever produces two flavors: plain polylines and the
//! midpoint-smoothed variant used by curved routing.

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::model::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier through `ctrl` ending at `to`.
    QuadTo {
        ctrl: Point,
        to: Point,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// A straight-line path through the segments in order. Consecutive
    /// segments share endpoints, so this emits one `MoveTo` and one `LineTo`
    /// per segment.
    pub fn polyline(segments: &[Segment]) -> Self {
        let Some(first) = segments.first() else {
            return Self::new();
        };
        let mut commands = Vec::with_capacity(segments.len() + 1);
        commands.push(PathCommand::MoveTo(first.start));
        for seg in segments {
            commands.push(PathCommand::LineTo(seg.end));
        }
        Self { commands }
    }

    /// Midpoint-quadratic smoothing of a polyline: straight lead-in from the
    /// overall start to the first segment's midpoint, then one quadratic per
    /// joint (control point = the shared joint, endpoint = the next segment's
    /// midpoint), then a straight lead-out to the overall end.
    ///
    /// The result is tangent-continuous at every joint and passes through the
    /// midpoint of every interior segment.
    pub fn smoothed(segments: &[Segment]) -> Self {
        let Some(first) = segments.first() else {
            return Self::new();
        };
        if segments.len() == 1 {
            return Self::polyline(segments);
        }
        let last = segments[segments.len() - 1];

        let mut commands = Vec::with_capacity(segments.len() + 3);
        commands.push(PathCommand::MoveTo(first.start));
        commands.push(PathCommand::LineTo(first.center()));
        for pair in segments.windows(2) {
            commands.push(PathCommand::QuadTo {
                ctrl: pair[0].end,
                to: pair[1].center(),
            });
        }
        commands.push(PathCommand::LineTo(last.end));
        Self { commands }
    }

    /// The path's start point, when it has one.
    pub fn start(&self) -> Option<Point> {
        match self.commands.first()? {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::QuadTo { to: p, .. } => {
                Some(*p)
            }
        }
    }

    /// The path's end point, when it has one.
    pub fn end(&self) -> Option<Point> {
        match self.commands.last()? {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::QuadTo { to: p, .. } => {
                Some(*p)
            }
        }
    }

    /// Sample points the path passes through, in order. Quadratics contribute
    /// only their endpoint; this is meant for coarse bounds and tests, not
    /// for rendering.
    pub fn knots(&self) -> Vec<Point> {
        self.commands
            .iter()
            .map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
                PathCommand::QuadTo { to, .. } => *to,
            })
            .collect()
    }
}

/// Builds a polyline like [`Path::polyline`] but with the first segment's
/// start and the last segment's end pulled in by the given arrowhead gaps.
pub(crate) fn trimmed_polyline(segments: &[Segment], start_gap: f64, end_gap: f64) -> Path {
    Path::polyline(&trim_segments(segments, start_gap, end_gap))
}

/// Smoothed counterpart of [`trimmed_polyline`].
pub(crate) fn trimmed_smoothed(segments: &[Segment], start_gap: f64, end_gap: f64) -> Path {
    Path::smoothed(&trim_segments(segments, start_gap, end_gap))
}

fn trim_segments(segments: &[Segment], start_gap: f64, end_gap: f64) -> Vec<Segment> {
    let mut trimmed = segments.to_vec();
    if let Some(first) = trimmed.first_mut() {
        first.start = first.shortened_start(start_gap);
    }
    if let Some(last) = trimmed.last_mut() {
        last.end = last.shortened_end(end_gap);
    }
    trimmed
}
