#[cfg(test)]
mod tests {
    use crate::cluster::viewport::{MIN_SPAN, fit};
    use crate::cluster::{BoundingRegion, Cluster, Coordinate, Error, LocatedEntity};

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_fit_padding() {
        let region = fit(&[
            Coordinate::new(40.70, -74.00),
            Coordinate::new(40.72, -74.02),
        ])
        .unwrap();

        assert_close(region.center.latitude, 40.71);
        assert_close(region.center.longitude, -74.01);
        assert_close(region.latitude_delta, 0.03);
        assert_close(region.longitude_delta, 0.03);
    }

    #[test]
    fn test_fit_single_coordinate_uses_floor() {
        let region = fit(&[Coordinate::new(40.70, -74.00)]).unwrap();

        assert_eq!(region.center, Coordinate::new(40.70, -74.00));
        assert_eq!(region.latitude_delta, MIN_SPAN);
        assert_eq!(region.longitude_delta, MIN_SPAN);
    }

    #[test]
    fn test_fit_floor_applies_per_axis() {
        // wide east-west, flat north-south
        let region = fit(&[
            Coordinate::new(40.7193, -73.9612),
            Coordinate::new(40.7193, -74.0048),
        ])
        .unwrap();

        assert_eq!(region.latitude_delta, MIN_SPAN);
        assert_close(region.longitude_delta, (74.0048 - 73.9612) * 1.5);
    }

    #[test]
    fn test_fit_center_is_box_midpoint_not_centroid() {
        let region = fit(&[
            Coordinate::new(40.70, -74.00),
            Coordinate::new(40.70, -74.00),
            Coordinate::new(40.70, -74.00),
            Coordinate::new(40.80, -73.90),
        ])
        .unwrap();

        assert_close(region.center.latitude, 40.75);
        assert_close(region.center.longitude, -73.95);
    }

    #[test]
    fn test_fit_empty_fails() {
        assert_eq!(fit(&[]), Err(Error::EmptyViewport));
    }

    #[test]
    fn test_fit_contains_all_inputs() {
        let coords = [
            Coordinate::new(40.7454, -73.9884),
            Coordinate::new(40.7422, -74.0059),
            Coordinate::new(40.7297, -73.9989),
            Coordinate::new(40.7039, -73.9867),
        ];
        let region = fit(&coords).unwrap();
        for c in &coords {
            assert!(region.contains(c), "{c:?} outside {region:?}");
        }
        assert!(!region.contains(&Coordinate::new(40.7733, -73.9154)));
    }

    #[test]
    fn test_cluster_region_matches_fit() {
        let mut cluster = Cluster::new(0, LocatedEntity::new("1", "a", 40.72, -74.02));
        cluster.add_member(LocatedEntity::new("2", "b", 40.70, -74.00));

        let coords: Vec<Coordinate> = cluster.members().iter().map(|e| e.coordinate).collect();
        assert_eq!(cluster.region(), fit(&coords).unwrap());
    }

    #[test]
    fn test_zoom_in_out() {
        let region = BoundingRegion::default();
        assert_close(region.zoom_level(), (360.0_f64 / 0.1).log2());

        let zin = region.zoomed_in();
        assert_eq!(zin.center, region.center);
        assert_close(zin.latitude_delta, 0.05);
        assert_close(zin.zoom_level() - region.zoom_level(), 1.0);

        let back = zin.zoomed_out();
        assert_close(back.latitude_delta, region.latitude_delta);
        assert_close(back.longitude_delta, region.longitude_delta);
    }
}
