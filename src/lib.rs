//! Map marker clustering for geo-located points of interest
//!
//! Entities are grouped greedily around drifting centroids with a merge
//! radius chosen from the current zoom level. See [`cluster::cluster`].

pub mod cluster;
