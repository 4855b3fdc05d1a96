//! Straight routing: a single segment from start to end.

use crate::cache::RouteCache;
use crate::model::{Segment, WayPoint};
use crate::path::{self, Path};
use crate::restrictions::ConnectorRestrictions;
use crate::router::ConnectorRouter;

#[derive(Debug, Default)]
pub struct StraightRouter {
    cache: RouteCache,
}

impl StraightRouter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectorRouter for StraightRouter {
    fn recalculate(&mut self, restrictions: &dyn ConnectorRestrictions) {
        let segment = Segment::new(restrictions.start_point(), restrictions.end_point());
        let segments = vec![segment];
        self.cache
            .replace(Path::polyline(&segments), segments, Vec::new());
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
        // A straight connector has no waypoints to preserve.
        false
    }

    fn adjusted_shape(&self, start_gap: f64, end_gap: f64) -> Path {
        path::trimmed_polyline(self.segments(), start_gap, end_gap)
    }
}
