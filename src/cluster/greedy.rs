use super::point::{Cluster, LocatedEntity};
use super::zoom::ZoomPolicy;

// Greedy first-fit clustering:
//
// CLUSTER(E, threshold)
//    sort E by latitude, north first (stable)
//    clusters = []
//    for each entity P in E
//       for each cluster C in clusters, in creation order
//          if distance(P, centroid(C)) <= threshold
//             add P to C, recompute centroid(C)
//             continue with next P
//       append new cluster {P} to clusters
//    return clusters
//
// Entities are compared with the current centroid, not the seed. Centroids
// drift as members join, so a late member can end up farther than
// `threshold` from older members of its cluster. Results depend on
// processing order, which the sort fixes.

/// Clusters entities with greedy first-fit against current centroids
///
/// # Arguments
///
/// * `entities` - Entities to cluster, left untouched
/// * `threshold_meters` - Maximum entity-to-centroid distance to join a cluster
///
/// # Returns
///
/// Clusters in creation order; every entity appears in exactly one of them.
/// Cluster ids are creation indices and are not stable across calls.
pub fn cluster(entities: &[LocatedEntity], threshold_meters: f64) -> Vec<Cluster> {
    debug_assert!(
        entities.iter().all(|e| e.coordinate.is_valid()),
        "entities must have finite, in-range coordinates"
    );

    // sort_by is stable: equal latitudes keep input order
    let mut sorted: Vec<&LocatedEntity> = entities.iter().collect();
    sorted.sort_by(|a, b| b.coordinate.latitude.total_cmp(&a.coordinate.latitude));

    let mut clusters: Vec<Cluster> = Vec::new();

    for entity in sorted {
        let found = clusters.iter().position(|c| {
            let distance = entity.coordinate.distance_to(&c.centroid());
            tracing::trace!(
                entity = %entity.name,
                cluster = c.id,
                size = c.len(),
                distance,
                "distance to cluster centroid"
            );
            distance <= threshold_meters
        });

        match found {
            Some(idx) => {
                clusters[idx].add_member(entity.clone());
                tracing::trace!(
                    entity = %entity.name,
                    cluster = idx,
                    size = clusters[idx].len(),
                    "joined cluster"
                );
            }
            None => {
                let id = clusters.len();
                tracing::trace!(entity = %entity.name, cluster = id, "opened cluster");
                clusters.push(Cluster::new(id, entity.clone()));
            }
        }
    }

    tracing::debug!(
        entities = entities.len(),
        clusters = clusters.len(),
        threshold_meters,
        "clustering pass complete"
    );

    clusters
}

/// ClusterEngine pairs the clustering pass with a zoom policy
#[derive(Debug, Clone, Default)]
pub struct ClusterEngine {
    policy: ZoomPolicy,
}

impl ClusterEngine {
    pub fn new(policy: ZoomPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ZoomPolicy {
        &self.policy
    }

    /// Clusters with an explicit threshold in meters
    pub fn cluster(&self, entities: &[LocatedEntity], threshold_meters: f64) -> Vec<Cluster> {
        cluster(entities, threshold_meters)
    }

    /// Clusters with the threshold the policy assigns to `zoom`
    pub fn cluster_at_zoom(&self, entities: &[LocatedEntity], zoom: f64) -> Vec<Cluster> {
        cluster(entities, self.policy.threshold_meters(zoom))
    }
}
