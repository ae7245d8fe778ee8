//! Camera-change glue between a map view and the clustering pass
//!
//! The engine itself is stateless. These types hold the little state a map
//! screen needs: the current region, when to recluster, and what a marker
//! tap should do.

use super::greedy::cluster;
use super::point::{Cluster, LocatedEntity};
use super::viewport::BoundingRegion;
use super::zoom::ZoomPolicy;

/// Minimum zoom change that triggers reclustering
pub const DEFAULT_MIN_ZOOM_DELTA: f64 = 1.0;

/// Debounces reclustering to zoom changes of at least `min_delta`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReclusterGate {
    last_zoom: f64,
    min_delta: f64,
}

impl Default for ReclusterGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM_DELTA)
    }
}

impl ReclusterGate {
    pub fn new(min_delta: f64) -> Self {
        Self {
            last_zoom: 0.0,
            min_delta,
        }
    }

    pub fn last_zoom(&self) -> f64 {
        self.last_zoom
    }

    /// Records `zoom` and returns true if it moved far enough from the last
    /// recorded zoom
    pub fn observe(&mut self, zoom: f64) -> bool {
        if (zoom - self.last_zoom).abs() >= self.min_delta {
            self.last_zoom = zoom;
            true
        } else {
            false
        }
    }
}

/// What a tap on a cluster marker should do
#[derive(Debug, Clone, PartialEq)]
pub enum TapAction<'a> {
    /// Single-entity marker: show its details
    Select(&'a LocatedEntity),
    /// Multi-entity marker: move the camera to fit all members
    ZoomTo(BoundingRegion),
}

pub fn tap(cluster: &Cluster) -> TapAction<'_> {
    match cluster.single() {
        Some(entity) => TapAction::Select(entity),
        None => TapAction::ZoomTo(cluster.region()),
    }
}

/// MapCamera tracks the viewport and the clusters currently on screen
///
/// Every recomputation starts from scratch over the supplied entities;
/// cluster ids are not carried between passes.
#[derive(Debug, Clone)]
pub struct MapCamera {
    region: BoundingRegion,
    policy: ZoomPolicy,
    gate: ReclusterGate,
    clusters: Vec<Cluster>,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(BoundingRegion::default(), ZoomPolicy::default())
    }
}

impl MapCamera {
    pub fn new(region: BoundingRegion, policy: ZoomPolicy) -> Self {
        Self {
            region,
            policy,
            gate: ReclusterGate::default(),
            clusters: Vec::new(),
        }
    }

    pub fn with_gate(mut self, gate: ReclusterGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn region(&self) -> BoundingRegion {
        self.region
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Threshold in meters for the current region
    pub fn threshold_meters(&self) -> f64 {
        self.policy.threshold_meters(self.region.zoom_level())
    }

    /// Handles a camera move; reclusters if the gate opens
    ///
    /// Returns whether the cluster set was recomputed.
    pub fn on_camera_change(
        &mut self,
        region: BoundingRegion,
        entities: &[LocatedEntity],
    ) -> bool {
        self.region = region;
        let zoom = region.zoom_level();

        if !self.gate.observe(zoom) {
            tracing::trace!(
                zoom,
                last_zoom = self.gate.last_zoom(),
                "zoom change below gate"
            );
            return false;
        }

        self.refresh(entities);
        true
    }

    /// Reclusters unconditionally, e.g. after the visible entity set changed
    pub fn refresh(&mut self, entities: &[LocatedEntity]) {
        let threshold = self.threshold_meters();
        tracing::debug!(
            zoom = self.region.zoom_level(),
            threshold,
            entities = entities.len(),
            "reclustering"
        );
        self.clusters = cluster(entities, threshold);
    }

    /// Resolves a tap on the cluster with `id`; moves the camera for
    /// multi-entity clusters
    ///
    /// Returns `None` if no such cluster is on screen.
    pub fn tap(&mut self, id: usize) -> Option<TapAction<'_>> {
        let cluster = self.clusters.iter().find(|c| c.id == id)?;
        let action = tap(cluster);

        if let TapAction::ZoomTo(region) = &action {
            self.region = *region;
        }

        Some(action)
    }

    /// Halves the span, as the zoom-in button does
    pub fn zoom_in(&mut self, entities: &[LocatedEntity]) -> bool {
        self.on_camera_change(self.region.zoomed_in(), entities)
    }

    /// Doubles the span, as the zoom-out button does
    pub fn zoom_out(&mut self, entities: &[LocatedEntity]) -> bool {
        self.on_camera_change(self.region.zoomed_out(), entities)
    }
}
