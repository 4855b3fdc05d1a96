//! Per-strategy result cache.

use crate::model::{Segment, WayPoint};
use crate::path::Path;

/// The last computed routing result, owned by each strategy instance.
///
/// The cache is rebuilt only on explicit `recalculate` calls and fully
/// replaced each time; reads never trigger recomputation. The owning edge is
/// responsible for serializing `recalculate` against reads (the kernel does
/// no locking).
#[derive(Debug, Clone, Default)]
pub struct RouteCache {
    shape: Path,
    segments: Vec<Segment>,
    waypoints: Vec<WayPoint>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&self) -> &Path {
        &self.shape
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn waypoints(&self) -> &[WayPoint] {
        &self.waypoints
    }

    /// Replaces the whole cached result; there is no incremental patching.
    pub fn replace(&mut self, shape: Path, segments: Vec<Segment>, waypoints: Vec<WayPoint>) {
        self.shape = shape;
        self.segments = segments;
        self.waypoints = waypoints;
    }
}
