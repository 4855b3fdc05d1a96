//! The built-in routing strategies.

mod curved;
mod elbow;
mod free;
mod straight;

pub use curved::CurvedRouter;
pub use elbow::ElbowRouter;
pub use free::SegmentedRouter;
pub use straight::StraightRouter;
