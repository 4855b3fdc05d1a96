//! Curved routing: elbow topology with the joints smoothed into quadratics.
//!
//! The segment list is identical to [`ElbowRouter`]'s for the same inputs —
//! anchors and hit-testing keep operating on the straight-line topology —
//! only the rendered shape differs.
//!
//! [`ElbowRouter`]: super::ElbowRouter

use crate::cache::RouteCache;
use crate::geom::Point;
use crate::linecoord;
use crate::model::{Segment, WayPoint};
use crate::path::{self, Path};
use crate::restrictions::ConnectorRestrictions;
use crate::router::ConnectorRouter;

use super::elbow;

#[derive(Debug, Default)]
pub struct CurvedRouter {
    cache: RouteCache,
}

impl CurvedRouter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectorRouter for CurvedRouter {
    fn recalculate(&mut self, restrictions: &dyn ConnectorRestrictions) {
        let segments = elbow::compute_segments(restrictions);
        let waypoints = elbow::interior_centers(&segments);
        self.cache
            .replace(Path::smoothed(&segments), segments, waypoints);
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
        false
    }

    fn coordinate_at(&self, p: Point) -> f64 {
        linecoord::chord_coordinate(self.segments(), p)
    }

    fn adjusted_shape(&self, start_gap: f64, end_gap: f64) -> Path {
        path::trimmed_smoothed(self.segments(), start_gap, end_gap)
    }
}
