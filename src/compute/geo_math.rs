//! Great-circle geometry on a spherical Earth.
//!
//! Distances are in statute miles. Both functions take `geo::Point`s with
//! `x = longitude` and `y = latitude`, in degrees.

use geo::Point;

/// Mean Earth radius in miles used for every distance in this crate.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// Haversine great-circle distance between two points, in miles.
///
/// # Examples
///
/// ```rust
/// use geo::Point;
/// use rastermap::compute::geo_math::distance;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// // One degree of arc along the equator.
/// assert!((distance(&a, &b) - 3963.0_f64.to_radians()).abs() < 1e-9);
/// ```
pub fn distance(a: &Point, b: &Point) -> f64 {
    let phi1 = a.y().to_radians();
    let phi2 = b.y().to_radians();
    let dphi = (b.y() - a.y()).to_radians();
    let dlambda = (b.x() - a.x()).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Initial bearing from `a` towards `b` along the great circle, in degrees.
///
/// The result is in `(-180, 180]`, measured clockwise from north.
///
/// # Examples
///
/// ```rust
/// use geo::Point;
/// use rastermap::compute::geo_math::bearing;
///
/// let origin = Point::new(0.0, 0.0);
/// assert!((bearing(&origin, &Point::new(0.0, 1.0)) - 0.0).abs() < 1e-9);
/// assert!((bearing(&origin, &Point::new(1.0, 0.0)) - 90.0).abs() < 1e-9);
/// ```
pub fn bearing(a: &Point, b: &Point) -> f64 {
    let phi1 = a.y().to_radians();
    let phi2 = b.y().to_radians();
    let dlambda = (b.x() - a.x()).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
    y.atan2(x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = Point::new(-122.2587, 37.8756);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(-122.2587, 37.8756);
        let b = Point::new(-122.2690, 37.8716);
        assert!((distance(&a, &b) - distance(&b, &a)).abs() < EPSILON);
    }

    #[test]
    fn test_distance_quarter_meridian() {
        let equator = Point::new(0.0, 0.0);
        let pole = Point::new(0.0, 90.0);
        let expected = EARTH_RADIUS_MILES * std::f64::consts::FRAC_PI_2;
        assert!((distance(&equator, &pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_agrees_with_geo_haversine() {
        use geo::{Distance, Haversine};

        let a = Point::new(-74.0060, 40.7128);
        let b = Point::new(-118.2437, 34.0522);

        // geo works in meters on a 6371.0088 km sphere; rescale to ours.
        let meters = Haversine.distance(a, b);
        let miles = meters / 6_371_008.8 * EARTH_RADIUS_MILES;
        assert!((distance(&a, &b) - miles).abs() < 0.01);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        assert!((bearing(&origin, &Point::new(0.0, -1.0)).abs() - 180.0).abs() < EPSILON);
        assert!((bearing(&origin, &Point::new(-1.0, 0.0)) + 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_bearing_not_symmetric_off_equator() {
        let a = Point::new(-122.0, 37.0);
        let b = Point::new(-121.0, 38.0);
        let forward = bearing(&a, &b);
        let back = bearing(&b, &a);
        assert!(forward > 0.0 && forward < 90.0);
        assert!(back < -90.0);
    }
}
