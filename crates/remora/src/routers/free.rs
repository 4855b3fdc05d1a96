//! Segmented (free) routing: the user's waypoints are authoritative and the
//! path is the straight polyline through them.

use crate::cache::RouteCache;
use crate::model::{Segment, WayPoint};
use crate::path::{self, Path};
use crate::restrictions::ConnectorRestrictions;
use crate::router::ConnectorRouter;

#[derive(Debug, Default)]
pub struct SegmentedRouter {
    cache: RouteCache,
}

impl SegmentedRouter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectorRouter for SegmentedRouter {
    fn recalculate(&mut self, restrictions: &dyn ConnectorRestrictions) {
        let preferences = restrictions.waypoint_preferences();

        let mut segments = Vec::with_capacity(preferences.len() + 1);
        let mut from = restrictions.start_point();
        for wp in &preferences {
            segments.push(Segment::new(from, *wp));
            from = *wp;
        }
        // Zero waypoints degenerates to the straight single segment.
        segments.push(Segment::new(from, restrictions.end_point()));

        let waypoints = preferences.into_iter().map(WayPoint::preferred).collect();
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

    /// True exactly when the cached topology still matches the current
    /// waypoint count. After a waypoint is added or removed this turns false,
    /// signaling the owning edge that a cheap re-link is not enough and a
    /// full `recalculate` is required.
    fn has_valid_waypoints(&self, restrictions: &dyn ConnectorRestrictions) -> bool {
        self.segments().len() == restrictions.waypoint_preferences().len() + 1
    }

    fn adjusted_shape(&self, start_gap: f64, end_gap: f64) -> Path {
        path::trimmed_polyline(self.segments(), start_gap, end_gap)
    }
}
