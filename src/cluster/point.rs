//! Geographic points, located entities and clusters built from them

use super::error::{Error, Result};
use super::viewport::{BoundingRegion, region_from_bounds};

/// Coordinate represents a geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// LocatedEntity is a point of interest placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedEntity {
    /// Opaque identifier supplied by the caller
    pub id: String,
    /// Display name
    pub name: String,
    pub coordinate: Coordinate,
}

/// Cluster is a group of one or more entities rendered as a single marker
///
/// The centroid is always the arithmetic mean of the members' latitude and
/// longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Creation index within one clustering pass
    pub id: usize,
    centroid: Coordinate,
    members: Vec<LocatedEntity>,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks that both components are finite and within the valid degree range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other` in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        super::distance::distance(self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl LocatedEntity {
    /// Creates an entity without validating its coordinate
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }

    /// Creates an entity, rejecting NaN or out-of-range coordinates
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let entity = Self::new(id, name, latitude, longitude);
        if !entity.coordinate.is_valid() {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(entity)
    }
}

impl Cluster {
    /// Starts a cluster seeded with a single entity
    pub fn new(id: usize, seed: LocatedEntity) -> Self {
        Self {
            id,
            centroid: seed.coordinate,
            members: vec![seed],
        }
    }

    /// Appends a member and recomputes the centroid
    pub fn add_member(&mut self, entity: LocatedEntity) {
        self.members.push(entity);
        self.recompute_centroid();
    }

    /// Recomputes the centroid as the plain mean of member coordinates
    ///
    /// Naive averaging of degrees is fine within one city; it is not valid
    /// across the antimeridian or near the poles.
    pub fn recompute_centroid(&mut self) {
        // offsets from the first member keep the mean exact when all members coincide
        let origin = self.members[0].coordinate;
        let mut offset = Coordinate::new(0.0, 0.0);

        for member in &self.members {
            offset.latitude += member.coordinate.latitude - origin.latitude;
            offset.longitude += member.coordinate.longitude - origin.longitude;
        }

        let n = self.members.len() as f64;
        self.centroid = Coordinate::new(
            origin.latitude + offset.latitude / n,
            origin.longitude + offset.longitude / n,
        );
    }

    pub fn centroid(&self) -> Coordinate {
        self.centroid
    }

    /// Members in insertion order
    pub fn members(&self) -> &[LocatedEntity] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Never true: clusters are created with a seed member
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.members.len() == 1
    }

    /// Returns the only member of a singleton cluster
    pub fn single(&self) -> Option<&LocatedEntity> {
        match self.members.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Calculates cluster bounds
    ///
    /// Returns `(min, max)` where:
    /// - `min` is the south-west corner
    /// - `max` is the north-east corner
    pub fn bounds(&self) -> (Coordinate, Coordinate) {
        let mut min = Coordinate::new(90.0, 180.0);
        let mut max = Coordinate::new(-90.0, -180.0);

        for member in &self.members {
            let pt = member.coordinate;
            min.latitude = min.latitude.min(pt.latitude);
            min.longitude = min.longitude.min(pt.longitude);
            max.latitude = max.latitude.max(pt.latitude);
            max.longitude = max.longitude.max(pt.longitude);
        }

        (min, max)
    }

    /// Padded viewport around all members, used when the marker is tapped
    pub fn region(&self) -> BoundingRegion {
        let (min, max) = self.bounds();
        region_from_bounds(min, max)
    }
}
