//! Viewport fitting: "zoom to fit" a set of coordinates

use super::error::{Error, Result};
use super::point::Coordinate;
use super::zoom::zoom_level;

/// Fraction of the raw span added as padding (split over both sides)
pub const PADDING: f64 = 0.5;

/// Minimum span in degrees (~500 m) of a fitted region
pub const MIN_SPAN: f64 = 0.005;

/// BoundingRegion is a viewport described by its center and span in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for BoundingRegion {
    /// Lower Manhattan, 0.1 degrees across
    fn default() -> Self {
        Self::new(Coordinate::new(40.7128, -74.0060), 0.1, 0.1)
    }
}

impl BoundingRegion {
    pub const fn new(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Zoom level derived from the latitudinal span
    pub fn zoom_level(&self) -> f64 {
        zoom_level(self.latitude_delta)
    }

    /// Same center, half the span
    pub fn zoomed_in(&self) -> Self {
        Self::new(
            self.center,
            self.latitude_delta * 0.5,
            self.longitude_delta * 0.5,
        )
    }

    /// Same center, twice the span
    pub fn zoomed_out(&self) -> Self {
        Self::new(
            self.center,
            self.latitude_delta * 2.0,
            self.longitude_delta * 2.0,
        )
    }

    /// Checks whether `coord` lies inside the region (edges inclusive)
    pub fn contains(&self, coord: &Coordinate) -> bool {
        (coord.latitude - self.center.latitude).abs() <= self.latitude_delta / 2.0
            && (coord.longitude - self.center.longitude).abs() <= self.longitude_delta / 2.0
    }
}

/// Computes a padded region around `coords`
///
/// Center is the bounding-box midpoint, not the centroid. Each span is the
/// raw span times `1 + PADDING`, floored at [`MIN_SPAN`].
///
/// # Errors
///
/// Returns [`Error::EmptyViewport`] if `coords` is empty
pub fn fit(coords: &[Coordinate]) -> Result<BoundingRegion> {
    let (first, rest) = coords.split_first().ok_or(Error::EmptyViewport)?;

    let mut min = *first;
    let mut max = *first;

    for pt in rest {
        min.latitude = min.latitude.min(pt.latitude);
        min.longitude = min.longitude.min(pt.longitude);
        max.latitude = max.latitude.max(pt.latitude);
        max.longitude = max.longitude.max(pt.longitude);
    }

    Ok(region_from_bounds(min, max))
}

/// Padded region for the box spanned by `min` (south-west) and `max` (north-east)
pub(crate) fn region_from_bounds(min: Coordinate, max: Coordinate) -> BoundingRegion {
    let lat_span = max.latitude - min.latitude;
    let lon_span = max.longitude - min.longitude;

    BoundingRegion::new(
        Coordinate::new(
            (min.latitude + max.latitude) / 2.0,
            (min.longitude + max.longitude) / 2.0,
        ),
        (lat_span + lat_span * PADDING).max(MIN_SPAN),
        (lon_span + lon_span * PADDING).max(MIN_SPAN),
    )
}
