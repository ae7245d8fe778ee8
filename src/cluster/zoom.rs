//! Zoom level to clustering threshold policy
//!
//! Coarser zoom gets a wider merge radius.

use std::fmt;
use std::str::FromStr;

use super::error::{Error, Result};

/// Computes zoom level from the latitudinal span of a viewport in degrees
///
/// `zoom = log2(360 / span)`; higher is more zoomed in.
pub fn zoom_level(latitude_span: f64) -> f64 {
    (360.0 / latitude_span).log2()
}

/// Breakpoint of a zoom policy: from `min_zoom` upwards, use `meters`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub min_zoom: f64,
    pub meters: f64,
}

/// Step function mapping zoom level to a threshold in meters
///
/// Buckets are half-open and left-inclusive. Zooms below the first bound
/// fall into the first bucket, so the function is total.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomPolicy {
    breakpoints: Vec<Breakpoint>,
}

impl Default for ZoomPolicy {
    /// `< 10 → 2000 m`, `[10, 12) → 1000 m`, `[12, 14) → 500 m`, `≥ 14 → 200 m`
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint { min_zoom: 0.0, meters: 2000.0 },
                Breakpoint { min_zoom: 10.0, meters: 1000.0 },
                Breakpoint { min_zoom: 12.0, meters: 500.0 },
                Breakpoint { min_zoom: 14.0, meters: 200.0 },
            ],
        }
    }
}

impl ZoomPolicy {
    /// Builds a policy from breakpoints ordered by increasing zoom
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] if the table is empty, bounds are not
    /// strictly increasing and finite, or thresholds are negative, non-finite,
    /// or grow with zoom.
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self> {
        if breakpoints.is_empty() {
            return Err(Error::InvalidPolicy("no breakpoints".into()));
        }

        for bp in &breakpoints {
            if !bp.min_zoom.is_finite() {
                return Err(Error::InvalidPolicy(format!(
                    "zoom bound {} is not finite",
                    bp.min_zoom
                )));
            }
            if !bp.meters.is_finite() || bp.meters < 0.0 {
                return Err(Error::InvalidPolicy(format!(
                    "threshold {} must be a non-negative number of meters",
                    bp.meters
                )));
            }
        }

        for pair in breakpoints.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if hi.min_zoom <= lo.min_zoom {
                return Err(Error::InvalidPolicy(format!(
                    "zoom bounds must increase: {} after {}",
                    hi.min_zoom, lo.min_zoom
                )));
            }
            if hi.meters > lo.meters {
                return Err(Error::InvalidPolicy(format!(
                    "threshold grows with zoom: {} m at {} after {} m",
                    hi.meters, hi.min_zoom, lo.meters
                )));
            }
        }

        Ok(Self { breakpoints })
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Returns the clustering threshold in meters for `zoom`
    ///
    /// NaN compares false against every bound and lands in the coarsest bucket.
    pub fn threshold_meters(&self, zoom: f64) -> f64 {
        self.breakpoints
            .iter()
            .rev()
            .find(|bp| zoom >= bp.min_zoom)
            .unwrap_or(&self.breakpoints[0])
            .meters
    }

    /// Threshold for a viewport with the given latitudinal span in degrees
    pub fn threshold_for_span(&self, latitude_span: f64) -> f64 {
        self.threshold_meters(zoom_level(latitude_span))
    }
}

/// Parses `"0=2000,10=1000,12=500,14=200"` (`min_zoom=meters` pairs)
impl FromStr for ZoomPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut breakpoints = Vec::new();

        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (zoom, meters) = part
                .split_once('=')
                .ok_or_else(|| Error::InvalidPolicy(format!("expected zoom=meters, got {part:?}")))?;

            let parse = |field: &str| {
                field
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| Error::InvalidPolicy(format!("{field:?}: {e}")))
            };

            breakpoints.push(Breakpoint {
                min_zoom: parse(zoom)?,
                meters: parse(meters)?,
            });
        }

        Self::new(breakpoints)
    }
}

impl fmt::Display for ZoomPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bp) in self.breakpoints.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", bp.min_zoom, bp.meters)?;
        }
        Ok(())
    }
}
