//! The quadrant-path codec.
//!
//! A [`QuadCodec`] binds the encoding to a [`Region`]. Encoding recursively
//! halves the region around a moving origin, emitting one [`Quadrant`] digit
//! per level; decoding replays the same recursion from the digits.
//!
//! ```text
//!  precision 1            precision 2 (inside A)
//! +-----+-----+          +-----+-----+
//! |  B  |  A  |          | AB  | AA  |
//! +-----+-----+    A ->  +-----+-----+
//! |  C  |  D  |          | AC  | AD  |
//! +-----+-----+          +-----+-----+
//! ```
//!
//! Topology, search and envelope operations live in [`crate::compute`] and
//! extend the codec with further `impl` blocks.

use crate::compute::validation::{MAX_PRECISION, validate_coordinate, validate_precision};
use crate::config::Config;
use crate::error::Result;
use crate::types::{DecodedCell, Path, Quadrant, Region};
use geo::{Coord, Point};

/// Encoder/decoder for quadrant paths relative to a fixed region.
///
/// The codec is immutable and `Copy`; share it freely between threads.
///
/// # Examples
///
/// ```
/// use quadpath::{Point, QuadCodec};
///
/// let codec = QuadCodec::world();
///
/// let path = codec.encode(&Point::new(45.0, 45.0), 1)?;
/// assert_eq!(path.to_string(), "A");
///
/// let cell = codec.decode(&path);
/// assert_eq!(cell.origin, Point::new(90.0, 45.0));
/// assert_eq!(cell.error.x, 90.0);
/// assert_eq!(cell.error.y, 45.0);
/// # Ok::<(), quadpath::QuadError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCodec {
    region: Region,
    max_precision: usize,
    overscan_levels: usize,
}

impl QuadCodec {
    /// Create a codec over `region` with default limits.
    pub fn new(region: Region) -> Self {
        log::debug!(
            "Creating quad codec over [{}, {}] x [{}, {}]",
            region.min_lng(),
            region.max_lng(),
            region.min_lat(),
            region.max_lat()
        );

        Self {
            region,
            max_precision: Config::default_max_precision(),
            overscan_levels: Config::default_overscan_levels(),
        }
    }

    /// Create a codec over the whole globe.
    pub fn world() -> Self {
        Self::new(Region::WORLD)
    }

    /// Create a codec from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let region = config.region.to_region()?;
        Ok(Self::new(region)
            .with_max_precision(config.max_precision)
            .with_overscan_levels(config.overscan_levels))
    }

    pub(crate) fn with_max_precision(mut self, max_precision: usize) -> Self {
        self.max_precision = max_precision.min(MAX_PRECISION);
        self
    }

    pub(crate) fn with_overscan_levels(mut self, overscan_levels: usize) -> Self {
        self.overscan_levels = overscan_levels;
        self
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn max_precision(&self) -> usize {
        self.max_precision
    }

    /// Extra prefix buckets scanned by [`QuadCodec::k_nearest`] once `k`
    /// candidates have been gathered.
    pub fn overscan_levels(&self) -> usize {
        self.overscan_levels
    }

    /// Encode `point` into a path of `precision` digits.
    ///
    /// Points outside the region still encode; at precision 1 and above
    /// they alias onto the region's edge cells, so validate containment
    /// first if it matters.
    ///
    /// # Errors
    ///
    /// [`QuadError::InvalidPrecision`](crate::QuadError::InvalidPrecision) when
    /// `precision` exceeds [`QuadCodec::max_precision`], and
    /// [`QuadError::InvalidInput`](crate::QuadError::InvalidInput) for
    /// non-finite coordinates.
    pub fn encode(&self, point: &Point<f64>, precision: usize) -> Result<Path> {
        validate_precision(precision, self.max_precision)?;
        validate_coordinate(point)?;

        let mut origin: Coord<f64> = self.region.center().into();
        let mut half = self.region.half_extent();
        let mut path = Path::with_capacity(precision);

        for _ in 0..precision {
            half.x /= 2.0;
            half.y /= 2.0;

            let quadrant = Quadrant::select(point, &origin);
            path.push(quadrant);
            shift(&mut origin, &half, quadrant);
        }

        Ok(path)
    }

    /// Decode a path into its cell center and half-extents.
    pub fn decode(&self, path: &Path) -> DecodedCell {
        let mut origin: Coord<f64> = self.region.center().into();
        let mut half = self.region.half_extent();

        for quadrant in path.iter() {
            half.x /= 2.0;
            half.y /= 2.0;
            shift(&mut origin, &half, quadrant);
        }

        DecodedCell {
            origin: origin.into(),
            error: half,
        }
    }

    /// Parse and decode a path string.
    ///
    /// # Errors
    ///
    /// [`QuadError::InvalidPath`](crate::QuadError::InvalidPath) on any symbol
    /// outside `A`, `B`, `C`, `D`.
    pub fn decode_str(&self, path: &str) -> Result<DecodedCell> {
        let path: Path = path.parse()?;
        Ok(self.decode(&path))
    }
}

impl Default for QuadCodec {
    fn default() -> Self {
        Self::world()
    }
}

fn shift(origin: &mut Coord<f64>, half: &Coord<f64>, quadrant: Quadrant) {
    let (sx, sy) = quadrant.signs();
    origin.x += sx * half.x;
    origin.y += sy * half.y;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadError;

    #[test]
    fn test_encode_first_level() {
        let codec = QuadCodec::world();
        let cases = [
            (Point::new(45.0, 45.0), "A"),
            (Point::new(-45.0, 45.0), "B"),
            (Point::new(-45.0, -45.0), "C"),
            (Point::new(45.0, -45.0), "D"),
        ];
        for (point, expected) in cases {
            assert_eq!(codec.encode(&point, 1).unwrap().to_string(), expected);
        }
    }

    #[test]
    fn test_encode_precision_zero() {
        let codec = QuadCodec::world();
        let path = codec.encode(&Point::new(12.0, 34.0), 0).unwrap();
        assert!(path.is_empty());

        let cell = codec.decode(&path);
        assert_eq!(cell.origin, Point::new(0.0, 0.0));
        assert_eq!(cell.error, Coord { x: 180.0, y: 90.0 });
    }

    #[test]
    fn test_encode_boundary_ties() {
        let codec = QuadCodec::world();
        assert_eq!(codec.encode(&Point::new(0.0, 0.0), 1).unwrap().to_string(), "A");
        assert_eq!(codec.encode(&Point::new(-10.0, 0.0), 1).unwrap().to_string(), "B");
        assert_eq!(codec.encode(&Point::new(0.0, -10.0), 1).unwrap().to_string(), "C");
    }

    #[test]
    fn test_encode_deeper() {
        let codec = QuadCodec::world();
        // A: origin (90, 45); then north-east of it
        let path = codec.encode(&Point::new(135.0, 67.5), 2).unwrap();
        assert_eq!(path.to_string(), "AA");
        let path = codec.encode(&Point::new(10.0, 10.0), 2).unwrap();
        assert_eq!(path.to_string(), "AC");
    }

    #[test]
    fn test_decode_literal() {
        let codec = QuadCodec::world();
        let cell = codec.decode_str("A").unwrap();
        assert_eq!(cell.origin, Point::new(90.0, 45.0));
        assert_eq!(cell.error, Coord { x: 90.0, y: 45.0 });

        let cell = codec.decode_str("C").unwrap();
        assert_eq!(cell.origin, Point::new(-90.0, -45.0));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let codec = QuadCodec::world();
        assert_eq!(
            codec.decode_str("AB?"),
            Err(QuadError::InvalidPath {
                symbol: '?',
                position: 2
            })
        );
        assert!(codec.decode_str("a").is_err());
    }

    #[test]
    fn test_encode_rejects_bad_input() {
        let codec = QuadCodec::world();
        assert!(matches!(
            codec.encode(&Point::new(0.0, 0.0), MAX_PRECISION + 1),
            Err(QuadError::InvalidPrecision { .. })
        ));
        assert!(matches!(
            codec.encode(&Point::new(f64::NAN, 0.0), 4),
            Err(QuadError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_custom_region() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let codec = QuadCodec::new(region);

        let path = codec.encode(&Point::new(7.0, 2.0), 1).unwrap();
        assert_eq!(path.to_string(), "D");

        let cell = codec.decode(&path);
        assert_eq!(cell.origin, Point::new(7.5, 2.5));
        assert_eq!(cell.error, Coord { x: 2.5, y: 2.5 });
    }

    #[test]
    fn test_out_of_region_aliases() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let codec = QuadCodec::new(region);
        let path = codec.encode(&Point::new(50.0, 50.0), 3).unwrap();
        assert_eq!(path.to_string(), "AAA");
    }

    #[test]
    fn test_round_trip_containment() {
        let codec = QuadCodec::world();
        let points = [
            Point::new(-74.0060, 40.7128),
            Point::new(139.6917, 35.6895),
            Point::new(-0.1278, 51.5074),
            Point::new(180.0, 90.0),
            Point::new(-180.0, -90.0),
        ];
        for point in points {
            for precision in 0..=30 {
                let cell = codec.decode(&codec.encode(&point, precision).unwrap());
                assert!(
                    cell.contains(&point),
                    "{:?} not in cell at precision {}",
                    point,
                    precision
                );
            }
        }
    }

    #[test]
    fn test_error_halves_each_level() {
        let codec = QuadCodec::world();
        let point = Point::new(-122.4194, 37.7749);
        let mut previous = codec.decode(&codec.encode(&point, 0).unwrap()).error;
        for precision in 1..=40 {
            let error = codec.decode(&codec.encode(&point, precision).unwrap()).error;
            assert_eq!(error.x, previous.x / 2.0);
            assert_eq!(error.y, previous.y / 2.0);
            previous = error;
        }
    }

    #[test]
    fn test_max_precision_from_config() {
        let config = Config::default().with_max_precision(8);
        let codec = QuadCodec::from_config(&config).unwrap();
        assert_eq!(codec.max_precision(), 8);
        assert!(codec.encode(&Point::new(0.0, 0.0), 8).is_ok());
        assert!(codec.encode(&Point::new(0.0, 0.0), 9).is_err());
    }
}
