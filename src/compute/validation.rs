//! Argument validation shared by the codec, topology, search and envelope operations.

use crate::error::{QuadError, Result};
use crate::types::AnnotatedPoint;
use geo::{Point, Rect};

/// Largest precision any codec accepts. Whole-globe cell origins stay exact
/// in f64 up to here; at the equator a cell is about 0.02 mm wide.
pub const MAX_PRECISION: usize = 40;

/// Validates region bounds.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0], min <= max on both axes.
///
/// # Examples
///
/// ```
/// use quadpath::compute::validation::validate_region_bounds;
///
/// assert!(validate_region_bounds(-180.0, -90.0, 180.0, 90.0).is_ok());
/// assert!(validate_region_bounds(-200.0, -90.0, 180.0, 90.0).is_err());
/// assert!(validate_region_bounds(10.0, -90.0, -10.0, 90.0).is_err());
/// ```
pub fn validate_region_bounds(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Result<()> {
    for (name, value) in [
        ("min_lng", min_lng),
        ("min_lat", min_lat),
        ("max_lng", max_lng),
        ("max_lat", max_lat),
    ] {
        if !value.is_finite() {
            return Err(QuadError::InvalidRegion(format!(
                "{} must be finite, got: {}",
                name, value
            )));
        }
    }

    if !(-180.0..=180.0).contains(&min_lng) || !(-180.0..=180.0).contains(&max_lng) {
        return Err(QuadError::InvalidRegion(format!(
            "Longitude bounds out of range [-180.0, 180.0]: {} .. {}",
            min_lng, max_lng
        )));
    }

    if !(-90.0..=90.0).contains(&min_lat) || !(-90.0..=90.0).contains(&max_lat) {
        return Err(QuadError::InvalidRegion(format!(
            "Latitude bounds out of range [-90.0, 90.0]: {} .. {}",
            min_lat, max_lat
        )));
    }

    if min_lng > max_lng {
        return Err(QuadError::InvalidRegion(format!(
            "min_lng ({}) must be <= max_lng ({})",
            min_lng, max_lng
        )));
    }

    if min_lat > max_lat {
        return Err(QuadError::InvalidRegion(format!(
            "min_lat ({}) must be <= max_lat ({})",
            min_lat, max_lat
        )));
    }

    Ok(())
}

/// Validates that a coordinate is finite. Range is not checked: coordinates
/// outside the region still encode.
pub fn validate_coordinate(point: &Point<f64>) -> Result<()> {
    if !point.x().is_finite() {
        return Err(QuadError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            point.x()
        )));
    }

    if !point.y().is_finite() {
        return Err(QuadError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            point.y()
        )));
    }

    Ok(())
}

pub fn validate_precision(precision: usize, max: usize) -> Result<()> {
    if precision > max {
        return Err(QuadError::InvalidPrecision { precision, max });
    }
    Ok(())
}

/// Validates a neighbor offset is one of -1, 0 or 1.
pub fn validate_offset(axis: &str, offset: i8) -> Result<()> {
    if !(-1..=1).contains(&offset) {
        return Err(QuadError::InvalidInput(format!(
            "{} offset must be -1, 0 or 1, got: {}",
            axis, offset
        )));
    }
    Ok(())
}

pub fn validate_rect(rect: &Rect<f64>) -> Result<()> {
    validate_coordinate(&Point::from(rect.min()))
        .and_then(|_| validate_coordinate(&Point::from(rect.max())))
        .map_err(|e| QuadError::InvalidInput(format!("Bounding box corner: {}", e)))
}

/// Validates the arguments of a nearest-neighbor search.
///
/// Every path, the target's included, must have exactly `precision` digits.
pub fn validate_search<U, T>(
    target: &AnnotatedPoint<U>,
    points: &[AnnotatedPoint<T>],
    precision: usize,
    k: usize,
) -> Result<()> {
    validate_precision(precision, MAX_PRECISION)?;

    if k == 0 {
        return Err(QuadError::InvalidInput(
            "k must be greater than zero".to_string(),
        ));
    }

    if target.path.len() != precision {
        return Err(QuadError::InvalidInput(format!(
            "Target path length {} does not match precision {}",
            target.path.len(),
            precision
        )));
    }

    for (idx, point) in points.iter().enumerate() {
        if point.path.len() != precision {
            return Err(QuadError::InvalidInput(format!(
                "Point at index {}: path length {} does not match precision {}",
                idx,
                point.path.len(),
                precision
            )));
        }
    }

    Ok(())
}
