use thiserror::Error;

/// Errors produced by the clustering library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `fit` was called without any coordinates
    #[error("cannot fit a viewport around zero coordinates")]
    EmptyViewport,

    /// Zoom policy table is malformed
    #[error("invalid zoom policy: {0}")]
    InvalidPolicy(String),

    /// Latitude/longitude is NaN, infinite or out of range
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
