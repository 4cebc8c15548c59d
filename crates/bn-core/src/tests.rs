//! Unit tests for bn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BusId, StopId};

    #[test]
    fn index_roundtrip() {
        let id = StopId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StopId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StopId::INVALID.0, u32::MAX);
        assert_eq!(BusId::default(), BusId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(StopId(7).to_string(), "StopId(7)");
        assert_eq!(BusId(750).to_string(), "750");
    }

    #[test]
    fn bus_ids_sort_numerically() {
        let mut v = vec![BusId(828), BusId(32), BusId(256)];
        v.sort();
        assert_eq!(v, vec![BusId(32), BusId(256), BusId(828)]);
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{EARTH_RADIUS_M, GeoPoint};

    #[test]
    fn degrees_become_radians() {
        let p = GeoPoint::from_degrees(180.0, -90.0);
        assert_relative_eq!(p.lat, std::f64::consts::PI, max_relative = 1e-12);
        assert_relative_eq!(p.lon, -std::f64::consts::FRAC_PI_2, max_relative = 1e-12);
        assert_relative_eq!(p.lat_deg(), 180.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_distance() {
        let p = GeoPoint::from_degrees(55.611087, 37.20829);
        assert_eq!(p.earth_distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::from_degrees(30.0, -88.0);
        let b = GeoPoint::from_degrees(31.0, -88.0);
        let d = a.earth_distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn tolstopaltsevo_to_marushkino() {
        let a = GeoPoint::from_degrees(55.611087, 37.20829);
        let b = GeoPoint::from_degrees(55.595884, 37.209755);
        assert_relative_eq!(a.earth_distance_m(b), 1693.0, max_relative = 1e-3);
    }

    #[test]
    fn radius_scales_linearly() {
        let a = GeoPoint::from_degrees(10.0, 10.0);
        let b = GeoPoint::from_degrees(11.0, 12.0);
        assert_relative_eq!(
            a.distance_m(b, 2.0 * EARTH_RADIUS_M),
            2.0 * a.earth_distance_m(b),
            max_relative = 1e-12
        );
    }

    #[test]
    fn antipodes_do_not_produce_nan() {
        let a = GeoPoint::from_degrees(0.0, 0.0);
        let b = GeoPoint::from_degrees(0.0, 180.0);
        let d = a.earth_distance_m(b);
        assert!(d.is_finite());
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_M, max_relative = 1e-9);
    }

    #[test]
    fn symmetric_for_random_points() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let a = GeoPoint::from_degrees(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
            let b = GeoPoint::from_degrees(rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0));
            let ab = a.earth_distance_m(b);
            let ba = b.earth_distance_m(a);
            assert!(ab >= 0.0);
            assert_relative_eq!(ab, ba, max_relative = 1e-9);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, NetworkConfig};

    #[test]
    fn default_is_valid() {
        let cfg = NetworkConfig::default();
        assert_eq!(cfg.earth_radius_m, 6_371_000.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = NetworkConfig { earth_radius_m: r, ..NetworkConfig::default() };
            assert!(matches!(cfg.validate(), Err(CoreError::Config(_))), "radius {r}");
        }
    }
}
