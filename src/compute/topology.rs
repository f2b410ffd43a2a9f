//! Cell adjacency and extents.
//!
//! Neighbors are found arithmetically: decode the cell, step one full cell
//! width or height from its center, and re-encode at the same precision.
//! That lands inside the adjacent cell at any depth, so no parent/child
//! traversal is needed. The region is a flat rectangle: there is no
//! wrap-around across the antimeridian or the poles.

use crate::codec::QuadCodec;
use crate::compute::validation::validate_offset;
use crate::error::Result;
use crate::types::Path;
use geo::{Point, Rect};

/// The eight cells surrounding a cell. `None` where the neighbor would fall
/// outside the region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub north: Option<Path>,
    pub north_east: Option<Path>,
    pub east: Option<Path>,
    pub south_east: Option<Path>,
    pub south: Option<Path>,
    pub south_west: Option<Path>,
    pub west: Option<Path>,
    pub north_west: Option<Path>,
}

impl Neighbors {
    /// The neighbors that exist, clockwise from north.
    pub fn present(&self) -> Vec<&Path> {
        [
            &self.north,
            &self.north_east,
            &self.east,
            &self.south_east,
            &self.south,
            &self.south_west,
            &self.west,
            &self.north_west,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl QuadCodec {
    /// Path of the cell adjacent to `path`.
    ///
    /// `east` and `north` must each be -1, 0 or 1; `(0, 0)` returns `path`
    /// unchanged. Returns `Ok(None)` when the adjacent cell would lie outside
    /// the region.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath::{Path, QuadCodec};
    ///
    /// let codec = QuadCodec::world();
    /// let south_west: Path = "C".parse()?;
    ///
    /// let north_west = codec.neighbor(&south_west, 0, 1)?;
    /// assert_eq!(north_west.map(|p| p.to_string()), Some("B".to_string()));
    ///
    /// // Nothing south of the south pole
    /// assert_eq!(codec.neighbor(&south_west, 0, -1)?, None);
    /// # Ok::<(), quadpath::QuadError>(())
    /// ```
    pub fn neighbor(&self, path: &Path, east: i8, north: i8) -> Result<Option<Path>> {
        validate_offset("east", east)?;
        validate_offset("north", north)?;

        if east == 0 && north == 0 {
            return Ok(Some(path.clone()));
        }

        let cell = self.decode(path);
        let candidate = Point::new(
            cell.origin.x() + cell.error.x * 2.0 * f64::from(east),
            cell.origin.y() + cell.error.y * 2.0 * f64::from(north),
        );

        if !self.region().contains(&candidate) {
            return Ok(None);
        }

        self.encode(&candidate, path.len()).map(Some)
    }

    /// All eight neighbors of `path`.
    pub fn neighbors(&self, path: &Path) -> Result<Neighbors> {
        Ok(Neighbors {
            north: self.neighbor(path, 0, 1)?,
            north_east: self.neighbor(path, 1, 1)?,
            east: self.neighbor(path, 1, 0)?,
            south_east: self.neighbor(path, 1, -1)?,
            south: self.neighbor(path, 0, -1)?,
            south_west: self.neighbor(path, -1, -1)?,
            west: self.neighbor(path, -1, 0)?,
            north_west: self.neighbor(path, -1, 1)?,
        })
    }

    /// The rectangle covered by `path` (`x` = longitude, `y` = latitude).
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath::{Path, QuadCodec};
    ///
    /// let codec = QuadCodec::world();
    /// let bbox = codec.bounding_box(&"D".parse::<Path>()?);
    /// assert_eq!((bbox.min().x, bbox.min().y), (0.0, -90.0));
    /// assert_eq!((bbox.max().x, bbox.max().y), (180.0, 0.0));
    /// # Ok::<(), quadpath::QuadError>(())
    /// ```
    pub fn bounding_box(&self, path: &Path) -> Rect<f64> {
        self.decode(path).bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadError;
    use crate::types::Region;

    fn path(s: &str) -> Path {
        s.parse().unwrap()
    }

    #[test]
    fn test_neighbor_literal() {
        let codec = QuadCodec::world();
        assert_eq!(codec.neighbor(&path("C"), 0, 1).unwrap(), Some(path("B")));
        assert_eq!(codec.neighbor(&path("C"), 1, 0).unwrap(), Some(path("D")));
        assert_eq!(codec.neighbor(&path("C"), 1, 1).unwrap(), Some(path("A")));
        assert_eq!(codec.neighbor(&path("A"), -1, -1).unwrap(), Some(path("C")));
    }

    #[test]
    fn test_neighbor_outside_region() {
        let codec = QuadCodec::world();
        assert_eq!(codec.neighbor(&path("A"), 0, 1).unwrap(), None);
        assert_eq!(codec.neighbor(&path("A"), 1, 0).unwrap(), None);
        assert_eq!(codec.neighbor(&path("C"), -1, 0).unwrap(), None);
        assert_eq!(codec.neighbor(&path("D"), 0, -1).unwrap(), None);
        assert_eq!(codec.neighbor(&Path::root(), 1, 0).unwrap(), None);
    }

    #[test]
    fn test_neighbor_identity() {
        let codec = QuadCodec::world();
        let p = path("ABCD");
        assert_eq!(codec.neighbor(&p, 0, 0).unwrap(), Some(p.clone()));
        assert_eq!(codec.neighbor(&Path::root(), 0, 0).unwrap(), Some(Path::root()));
    }

    #[test]
    fn test_neighbor_invalid_offset() {
        let codec = QuadCodec::world();
        assert!(matches!(
            codec.neighbor(&path("A"), 2, 0),
            Err(QuadError::InvalidInput(_))
        ));
        assert!(codec.neighbor(&path("A"), 0, -3).is_err());
    }

    #[test]
    fn test_neighbor_across_parent_boundary() {
        let codec = QuadCodec::world();
        // East edge of B borders the west edge of A
        assert_eq!(codec.neighbor(&path("BA"), 1, 0).unwrap(), Some(path("AB")));
        assert_eq!(codec.neighbor(&path("AB"), -1, 0).unwrap(), Some(path("BA")));
        // South edge of A borders the north edge of D
        assert_eq!(codec.neighbor(&path("AC"), 0, -1).unwrap(), Some(path("DB")));
    }

    #[test]
    fn test_neighbor_inverse_interior() {
        let codec = QuadCodec::world();
        let p = codec.encode(&Point::new(10.3, 20.7), 6).unwrap();
        for (east, north) in [(1, 0), (0, 1), (1, 1), (-1, 1)] {
            let there = codec.neighbor(&p, east, north).unwrap().unwrap();
            let back = codec.neighbor(&there, -east, -north).unwrap().unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn test_neighbors_interior_and_corner() {
        let codec = QuadCodec::world();
        let interior = codec.encode(&Point::new(10.3, 20.7), 5).unwrap();
        let all = codec.neighbors(&interior).unwrap();
        assert_eq!(all.present().len(), 8);
        assert!(!all.present().contains(&&interior));

        let corner = codec.neighbors(&path("A")).unwrap();
        assert_eq!(corner.west, Some(path("B")));
        assert_eq!(corner.south, Some(path("D")));
        assert_eq!(corner.south_west, Some(path("C")));
        assert_eq!(corner.present().len(), 3);
    }

    #[test]
    fn test_bounding_box_custom_region() {
        let codec = QuadCodec::new(Region::new(0.0, 0.0, 8.0, 4.0).unwrap());
        let bbox = codec.bounding_box(&path("BD"));
        assert_eq!(bbox.min(), geo::coord! { x: 2.0, y: 2.0 });
        assert_eq!(bbox.max(), geo::coord! { x: 4.0, y: 3.0 });
    }

    #[test]
    fn test_bounding_box_contains_encoded_point() {
        let codec = QuadCodec::world();
        let point = Point::new(-74.0060, 40.7128);
        for precision in [1, 5, 12, 20] {
            let bbox = codec.bounding_box(&codec.encode(&point, precision).unwrap());
            assert!(bbox.min().x <= point.x() && point.x() <= bbox.max().x);
            assert!(bbox.min().y <= point.y() && point.y() <= bbox.max().y);
        }
    }
}
