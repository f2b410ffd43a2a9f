//! Great-circle distance.

use geo::Point;

/// Mean Earth radius used for every distance in this crate.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance in meters between two lng/lat points given in degrees.
///
/// # Examples
///
/// ```
/// use quadpath::{Point, distance};
///
/// let d = distance(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0));
/// assert!((d - 157_249.0).abs() < 1.0);
/// ```
pub fn distance(a: &Point<f64>, b: &Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}
