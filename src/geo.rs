//! Geographic points and great-circle distance.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Mean radius of the Earth in kilometres, as used by [`distance`].
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// A latitude/longitude pair in decimal degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point without range checks. Out of range values still produce a finite
    /// [`distance`], the trigonometry simply wraps.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Construct a point, rejecting coordinates outside the valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLatitude`] unless `latitude` is finite and within `-90..=90`.
    ///
    /// Returns [`Error::InvalidLongitude`] unless `longitude` is finite and within
    /// `-180..=180`.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let point = Self::new(latitude, longitude);
        point.validate()?;
        Ok(point)
    }

    /// Check that the point lies within the valid coordinate ranges.
    ///
    /// # Errors
    ///
    /// See [`GeoPoint::try_new`].
    pub fn validate(&self) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}

/// Approximate distance in kilometres between two points on the Earth's surface, using the
/// spherical law of cosines.
///
/// Rounding can push the cosine of the central angle just outside `[-1, 1]` for identical or
/// antipodal points, so it is clamped before `acos`. The result is never NaN for finite input.
#[must_use]
pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    if p1 == p2 {
        return 0.0;
    }
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    // abs() keeps the expression identical for both argument orders.
    let long_delta = (p1.longitude - p2.longitude).abs().to_radians();
    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * long_delta.cos();
    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sample_points() -> Vec<GeoPoint> {
        let mut points = vec![];
        for lat in (-90..=90).step_by(15) {
            for long in (-180..=180).step_by(30) {
                points.push(GeoPoint::new(f64::from(lat), f64::from(long)));
            }
        }
        points.push(GeoPoint::new(37.7749, -122.4194));
        points.push(GeoPoint::new(40.7128, -74.0060));
        points.push(GeoPoint::new(-33.8688, 151.2093));
        points
    }

    #[test]
    fn identical_points_are_zero() {
        for p in sample_points() {
            let d = distance(&p, &p);
            assert_eq!(d, 0.0, "distance({p:?}, {p:?}) = {d}");
        }
    }

    #[test]
    fn near_identical_points_stay_finite() {
        for a in sample_points() {
            for nudge in [1e-12, -1e-12, 1e-9] {
                let lat_nudged = GeoPoint::new(a.latitude + nudge, a.longitude);
                let long_nudged = GeoPoint::new(a.latitude, a.longitude + nudge);
                for b in [lat_nudged, long_nudged] {
                    let d = distance(&a, &b);
                    assert!(d.is_finite(), "distance({a:?}, {b:?}) is not finite");
                    assert!((0.0..1e-3).contains(&d), "distance({a:?}, {b:?}) = {d}");
                }
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                assert_eq!(distance(a, b), distance(b, a), "{a:?} <-> {b:?}");
            }
        }
    }

    #[test]
    fn distance_is_bounded() {
        let max = PI * EARTH_RADIUS_KM;
        let points = sample_points();
        for a in &points {
            for b in &points {
                let d = distance(a, b);
                assert!(d.is_finite(), "{a:?} <-> {b:?} is not finite");
                assert!((0.0..=max).contains(&d), "{a:?} <-> {b:?} = {d}");
            }
        }
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = distance(&GeoPoint::new(40.0, -80.0), &GeoPoint::new(-40.0, 100.0));
        assert!(d.is_finite());
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1.0, "got {d}");

        let d = distance(&GeoPoint::new(90.0, 0.0), &GeoPoint::new(-90.0, 0.0));
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn known_distance() {
        // San Francisco to New York, roughly 4130km.
        let d = distance(
            &GeoPoint::new(37.7749, -122.4194),
            &GeoPoint::new(40.7128, -74.0060),
        );
        assert!(d > 4100.0 && d < 4160.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(1.0, 0.0));
        let expected = EARTH_RADIUS_KM * PI / 180.0;
        assert!((d - expected).abs() < 1e-6, "got {d}, expected {expected}");
    }

    #[test]
    fn try_new_validates_ranges() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert!(matches!(
            GeoPoint::try_new(90.5, 0.0),
            Err(Error::InvalidLatitude(lat)) if lat == 90.5
        ));
        assert!(matches!(
            GeoPoint::try_new(0.0, -180.1),
            Err(Error::InvalidLongitude(_))
        ));
        assert!(matches!(
            GeoPoint::try_new(f64::NAN, 0.0),
            Err(Error::InvalidLatitude(_))
        ));
        assert!(matches!(
            GeoPoint::try_new(0.0, f64::INFINITY),
            Err(Error::InvalidLongitude(_))
        ));
    }
}
