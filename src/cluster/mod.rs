//! Package cluster implements zoom-adaptive greedy clustering of map markers
pub mod camera;
pub mod distance;
pub mod error;
pub mod greedy;
pub mod point;
pub mod viewport;
pub mod zoom;

#[cfg(test)]
mod viewport_test;

pub use camera::{MapCamera, ReclusterGate, TapAction, tap};
pub use distance::{DEGREE_RAD, EARTH_R, distance};
pub use error::{Error, Result};
pub use greedy::{ClusterEngine, cluster};
pub use point::{Cluster, Coordinate, LocatedEntity};
pub use viewport::{BoundingRegion, MIN_SPAN, PADDING, fit};
pub use zoom::{Breakpoint, ZoomPolicy, zoom_level};
