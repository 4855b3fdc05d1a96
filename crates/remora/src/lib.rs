#![forbid(unsafe_code)]

//! Headless connector routing kernel for diagram editors.
//!
//! Given two endpoints (each optionally attached to a side of a host shape),
//! a routing style and optional waypoints, `remora` computes a deterministic
//! path, decomposes it into straight segments for hit-testing, and maps both
//! ways between a normalized 0..1 distance along the path and an absolute
//! point — so arrowheads, markers and anchored sub-shapes can attach to a
//! fractional position and stay attached while the connector is reshaped.
//!
//! Design goals:
//! - deterministic, reproducible paths (no randomness, no history dependence)
//! - never-fatal policy: degenerate geometry and unknown styles degrade to a
//!   renderable straight path instead of failing
//! - no rendering, no I/O, no locking; the owning edge serializes access
//!
//! ```
//! use remora::{ConnectorRegistry, ConnectorRouter, FixedRestrictions, Side, point};
//!
//! let registry = ConnectorRegistry::with_builtin_styles();
//! let mut router = registry.create("elbow");
//! let edge = FixedRestrictions::new(point(0.0, 0.0), point(100.0, 100.0))
//!     .with_sides(Side::East, Side::North);
//! router.recalculate(&edge);
//!
//! assert_eq!(router.segments().first().unwrap().start, point(0.0, 0.0));
//! assert_eq!(router.segments().last().unwrap().end, point(100.0, 100.0));
//! // Every elbow segment is axis-aligned.
//! assert!(
//!     router
//!         .segments()
//!         .iter()
//!         .all(|s| s.dx() == 0.0 || s.dy() == 0.0)
//! );
//! ```

pub mod cache;
pub mod error;
pub mod geom;
pub mod linecoord;
pub mod model;
pub mod path;
pub mod registry;
pub mod restrictions;
pub mod router;
pub mod routers;

pub use cache::RouteCache;
pub use error::{Error, Result};
pub use geom::{Point, Rect, Vector, point, vector};
pub use model::{Anchor, AnchorMarker, Axis, Segment, Side, WayPoint, WayPointKind};
pub use path::{Path, PathCommand};
pub use registry::{ConnectorFactory, ConnectorRegistry};
pub use restrictions::{ConnectorRestrictions, FixedRestrictions};
pub use router::ConnectorRouter;
pub use routers::{CurvedRouter, ElbowRouter, SegmentedRouter, StraightRouter};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
