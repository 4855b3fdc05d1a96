//! The routing strategy contract.

use crate::geom::Point;
use crate::linecoord;
use crate::model::{Segment, WayPoint};
use crate::path::Path;
use crate::restrictions::ConnectorRestrictions;

/// A routing strategy owned by a single edge.
///
/// Instances are created through the [`ConnectorRegistry`] when an edge's
/// style is set or changed, and replaced wholesale when the style changes;
/// they are never shared between edges. `recalculate` is idempotent and a
/// pure function of the restrictions plus the strategy's own type: calling
/// it twice with identical inputs yields bit-identical caches.
///
/// Strategies are `Debug` so hosts can log the boxed instances the registry
/// hands out.
///
/// [`ConnectorRegistry`]: crate::registry::ConnectorRegistry
pub trait ConnectorRouter: std::fmt::Debug {
    /// Rebuilds the cached shape, segment list and waypoint list from the
    /// given restrictions. The previous cache is fully replaced.
    fn recalculate(&mut self, restrictions: &dyn ConnectorRestrictions);

    /// The last computed renderable path. Empty before the first
    /// `recalculate`.
    fn shape(&self) -> &Path;

    /// The last computed segment list. Invariant after any `recalculate`:
    /// the first segment starts at the restriction's start point, the last
    /// ends at its end point, and consecutive segments share endpoints.
    fn segments(&self) -> &[Segment];

    /// The last computed waypoints: authoritative user input for segmented
    /// routing, derived interior points for elbow/curved routing.
    fn waypoints(&self) -> &[WayPoint];

    /// Whether the cached topology still matches the restriction's current
    /// waypoint preferences, i.e. whether the owning edge can keep the cache
    /// or must `recalculate`.
    fn has_valid_waypoints(&self, restrictions: &dyn ConnectorRestrictions) -> bool;

    /// Maps a normalized line coordinate `t ∈ [0, 1]` (clamped) to an
    /// absolute point on the current path.
    fn point_at(&self, t: f64) -> Point {
        linecoord::point_at(self.segments(), t)
    }

    /// Inverse of [`point_at`]: the line coordinate of the position on the
    /// current path nearest to `p`.
    ///
    /// The default is a true polyline projection; orthogonal strategies
    /// override it with the chord approximation (see
    /// [`linecoord::chord_coordinate`]).
    ///
    /// [`point_at`]: ConnectorRouter::point_at
    fn coordinate_at(&self, p: Point) -> f64 {
        linecoord::polyline_coordinate(self.segments(), p)
    }

    /// The current path with its ends pulled in by the given gaps, so
    /// arrowhead glyphs of those widths do not overlap the line.
    fn adjusted_shape(&self, start_gap: f64, end_gap: f64) -> Path;
}
