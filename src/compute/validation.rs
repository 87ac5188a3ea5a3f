//! Validation for geographic coordinates and raster query boxes.

use crate::error::{RasterMapError, Result};
use geo::Point;
use rastermap_types::bbox::QueryBox;

/// Validates a 2D point has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use rastermap::compute::validation::validate_geographic_point;
/// use geo::Point;
///
/// let soda_hall = Point::new(-122.2587, 37.8756);
/// assert!(validate_geographic_point(&soda_hall).is_ok());
///
/// let invalid = Point::new(200.0, 40.0);
/// assert!(validate_geographic_point(&invalid).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(RasterMapError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(RasterMapError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(RasterMapError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(RasterMapError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates a raster query box against the dataset root.
///
/// Rejected boxes: non-finite edges, west > east, south > north, and boxes
/// that extend past the root on all four sides. Anything else is accepted;
/// parts outside the root are clamped away later.
///
/// # Examples
///
/// ```
/// use rastermap::compute::validation::validate_query_box;
/// use rastermap_types::bbox::QueryBox;
///
/// let root = QueryBox::new(-10.0, 10.0, 10.0, -10.0);
///
/// assert!(validate_query_box(&QueryBox::new(-5.0, 5.0, 5.0, -5.0), &root).is_ok());
/// assert!(validate_query_box(&QueryBox::new(-5.0, 15.0, 5.0, -5.0), &root).is_ok());
/// assert!(validate_query_box(&QueryBox::new(5.0, -5.0, 5.0, -5.0), &root).is_err());
/// assert!(validate_query_box(&QueryBox::new(-20.0, 20.0, 20.0, -20.0), &root).is_err());
/// ```
pub fn validate_query_box(bbox: &QueryBox, root: &QueryBox) -> Result<()> {
    if !bbox.is_finite() {
        return Err(RasterMapError::InvalidBoundingBox(format!(
            "Edges must be finite, got: {:?}",
            bbox
        )));
    }

    if bbox.west > bbox.east {
        return Err(RasterMapError::InvalidBoundingBox(format!(
            "West edge ({}) is east of east edge ({})",
            bbox.west, bbox.east
        )));
    }

    if bbox.south > bbox.north {
        return Err(RasterMapError::InvalidBoundingBox(format!(
            "South edge ({}) is north of north edge ({})",
            bbox.south, bbox.north
        )));
    }

    if bbox.encloses(root) {
        return Err(RasterMapError::InvalidBoundingBox(
            "Query box encloses the entire dataset".to_string(),
        ));
    }

    Ok(())
}

/// Validates viewport dimensions in pixels.
pub fn validate_viewport(width: f64, height: f64) -> Result<()> {
    for (label, value) in [("width", width), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(RasterMapError::InvalidInput(format!(
                "Viewport {} must be positive, got: {}",
                label, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> QueryBox {
        QueryBox::new(-10.0, 10.0, 10.0, -10.0)
    }

    #[test]
    fn test_valid_geographic_point() {
        assert!(validate_geographic_point(&Point::new(180.0, 0.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(-180.0, -90.0)).is_ok());
    }

    #[test]
    fn test_invalid_geographic_point() {
        assert!(validate_geographic_point(&Point::new(180.1, 0.0)).is_err());
        assert!(validate_geographic_point(&Point::new(0.0, -90.5)).is_err());
        assert!(validate_geographic_point(&Point::new(f64::NAN, 0.0)).is_err());
        assert!(validate_geographic_point(&Point::new(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_degenerate_boxes_rejected() {
        let west_of_east = QueryBox::new(1.0, -1.0, 1.0, -1.0);
        assert!(matches!(
            validate_query_box(&west_of_east, &root()),
            Err(RasterMapError::InvalidBoundingBox(_))
        ));

        let south_of_north = QueryBox::new(-1.0, 1.0, -1.0, 1.0);
        assert!(matches!(
            validate_query_box(&south_of_north, &root()),
            Err(RasterMapError::InvalidBoundingBox(_))
        ));
    }

    #[test]
    fn test_enclosing_box_rejected() {
        let everything = QueryBox::new(-11.0, 11.0, 11.0, -11.0);
        assert!(validate_query_box(&everything, &root()).is_err());
    }

    #[test]
    fn test_partial_overlap_accepted() {
        // Extends past the root on three sides only.
        let wide = QueryBox::new(-11.0, 11.0, 11.0, -5.0);
        assert!(validate_query_box(&wide, &root()).is_ok());

        // Same as the root: not strictly enclosing.
        assert!(validate_query_box(&root(), &root()).is_ok());

        // Entirely outside the root.
        let outside = QueryBox::new(20.0, 30.0, 40.0, 30.0);
        assert!(validate_query_box(&outside, &root()).is_ok());
    }

    #[test]
    fn test_viewport() {
        assert!(validate_viewport(800.0, 600.0).is_ok());
        assert!(validate_viewport(0.0, 600.0).is_err());
        assert!(validate_viewport(800.0, f64::NAN).is_err());
    }
}
