//! Core value types: regions, quadrant paths, decoded cells and annotated points.

use crate::compute::validation::validate_region_bounds;
use crate::error::{QuadError, Result};
use geo::{Coord, Point, Rect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// The axis-aligned lng/lat rectangle an encoding is relative to.
///
/// Immutable once constructed. The default region is the whole globe.
///
/// # Examples
///
/// ```
/// use quadpath::Region;
///
/// let world = Region::world();
/// assert_eq!(world.min_lng(), -180.0);
///
/// // Tighter regions give more resolution per path digit
/// let nyc = Region::new(-74.3, 40.4, -73.6, 41.0).unwrap();
/// assert!(nyc.width() < world.width());
///
/// // Inverted bounds are rejected
/// assert!(Region::new(10.0, 0.0, -10.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    min_lng: f64,
    min_lat: f64,
    max_lng: f64,
    max_lat: f64,
}

impl Region {
    /// The whole globe: `[-180, 180] x [-90, 90]`.
    pub const WORLD: Region = Region {
        min_lng: -180.0,
        min_lat: -90.0,
        max_lng: 180.0,
        max_lat: 90.0,
    };

    /// Create a region, failing with [`QuadError::InvalidRegion`] when the
    /// bounds are non-finite, out of geographic range or inverted.
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Result<Self> {
        validate_region_bounds(min_lng, min_lat, max_lng, max_lat)?;
        Ok(Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        })
    }

    pub fn world() -> Self {
        Self::WORLD
    }

    /// Create a region from a `geo::Rect` (`x` = longitude, `y` = latitude).
    pub fn from_rect(rect: &Rect<f64>) -> Result<Self> {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    pub fn min_lng(&self) -> f64 {
        self.min_lng
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lng(&self) -> f64 {
        self.max_lng
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center of the region; the origin of every encoding.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Half-width and half-height of the region.
    pub fn half_extent(&self) -> Coord<f64> {
        Coord {
            x: self.width() / 2.0,
            y: self.height() / 2.0,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        point.x() >= self.min_lng
            && point.x() <= self.max_lng
            && point.y() >= self.min_lat
            && point.y() <= self.max_lat
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! { x: self.min_lng, y: self.min_lat },
            geo::coord! { x: self.max_lng, y: self.max_lat },
        )
    }

    /// Intersect `rect` with this region. Returns `None` when they are disjoint.
    pub fn clamp_rect(&self, rect: &Rect<f64>) -> Option<Rect<f64>> {
        let min_x = rect.min().x.max(self.min_lng);
        let min_y = rect.min().y.max(self.min_lat);
        let max_x = rect.max().x.min(self.max_lng);
        let max_y = rect.max().y.min(self.max_lat);

        if min_x > max_x || min_y > max_y {
            return None;
        }

        Some(Rect::new(
            geo::coord! { x: min_x, y: min_y },
            geo::coord! { x: max_x, y: max_y },
        ))
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::WORLD
    }
}

/// One digit of a [`Path`].
///
/// Quadrant selection against an origin `o` is checked in this order:
///
/// | digit | condition                         |
/// |-------|-----------------------------------|
/// | `A`   | `lng >= o.lng && lat >= o.lat`    |
/// | `B`   | `lng <= o.lng && lat >= o.lat`    |
/// | `C`   | `lng <= o.lng && lat <= o.lat`    |
/// | `D`   | otherwise                         |
///
/// `A` is north-east, `B` north-west, `C` south-west and `D` south-east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    A,
    B,
    C,
    D,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::A, Quadrant::B, Quadrant::C, Quadrant::D];

    /// Pick the quadrant of `origin` that `point` falls in.
    pub fn select(point: &Point<f64>, origin: &Coord<f64>) -> Self {
        let (lng, lat) = (point.x(), point.y());
        if lng >= origin.x && lat >= origin.y {
            Quadrant::A
        } else if lng <= origin.x && lat >= origin.y {
            Quadrant::B
        } else if lng <= origin.x && lat <= origin.y {
            Quadrant::C
        } else {
            Quadrant::D
        }
    }

    /// Direction of the origin shift on each axis, as `(lng, lat)` signs.
    pub fn signs(self) -> (f64, f64) {
        match self {
            Quadrant::A => (1.0, 1.0),
            Quadrant::B => (-1.0, 1.0),
            Quadrant::C => (-1.0, -1.0),
            Quadrant::D => (1.0, -1.0),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Quadrant::A => 'A',
            Quadrant::B => 'B',
            Quadrant::C => 'C',
            Quadrant::D => 'D',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Quadrant::A),
            'B' => Some(Quadrant::B),
            'C' => Some(Quadrant::C),
            'D' => Some(Quadrant::D),
            _ => None,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A quadrant path: the spatial key produced by
/// [`QuadCodec::encode`](crate::QuadCodec::encode).
///
/// Its length is the precision. The empty path denotes the whole region.
/// Paths display as their digit string and parse back from it; malformed
/// strings are rejected.
///
/// # Examples
///
/// ```
/// use quadpath::Path;
///
/// let path: Path = "ABCD".parse().unwrap();
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.to_string(), "ABCD");
///
/// let other: Path = "ABDA".parse().unwrap();
/// assert_eq!(path.common_prefix_len(&other), 2);
///
/// assert!("ABx".parse::<Path>().is_err());
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Path(SmallVec<[Quadrant; 24]>);

impl Path {
    /// The empty path, denoting the whole region.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_quadrants(quadrants: &[Quadrant]) -> Self {
        Self(SmallVec::from_slice(quadrants))
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(SmallVec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, quadrant: Quadrant) {
        self.0.push(quadrant);
    }

    /// Number of digits; equal to the precision the path was encoded at.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn quadrants(&self) -> &[Quadrant] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Quadrant> + '_ {
        self.0.iter().copied()
    }

    /// The enclosing cell one level up, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }
        Some(Self::from_quadrants(&self.0[..self.0.len() - 1]))
    }

    /// The sub-cell in `quadrant`, one level down.
    pub fn child(&self, quadrant: Quadrant) -> Path {
        let mut child = Self::with_capacity(self.len() + 1);
        child.0.extend_from_slice(&self.0);
        child.push(quadrant);
        child
    }

    /// Length of the shared leading digit run.
    pub fn common_prefix_len(&self, other: &Path) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Whether `other`'s cell is nested inside this cell. A path is its own
    /// ancestor.
    pub fn is_ancestor_of(&self, other: &Path) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quadrant in &self.0 {
            write!(f, "{}", quadrant)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self> {
        let mut path = Self::with_capacity(s.len());
        for (position, symbol) in s.chars().enumerate() {
            let quadrant =
                Quadrant::from_symbol(symbol).ok_or(QuadError::InvalidPath { symbol, position })?;
            path.push(quadrant);
        }
        Ok(path)
    }
}

impl TryFrom<String> for Path {
    type Error = QuadError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<&str> for Path {
    type Error = QuadError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

/// Result of decoding a path: the cell center and its half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedCell {
    /// Center of the cell
    pub origin: Point<f64>,
    /// Half-width (`x`, degrees of longitude) and half-height (`y`, degrees of latitude)
    pub error: Coord<f64>,
}

impl DecodedCell {
    /// The cell rectangle, `origin ± error`.
    pub fn bounding_box(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! {
                x: self.origin.x() - self.error.x,
                y: self.origin.y() - self.error.y,
            },
            geo::coord! {
                x: self.origin.x() + self.error.x,
                y: self.origin.y() + self.error.y,
            },
        )
    }

    /// Inclusive containment test against the cell rectangle.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        (point.x() - self.origin.x()).abs() <= self.error.x
            && (point.y() - self.origin.y()).abs() <= self.error.y
    }
}

/// A search candidate: a coordinate, its caller-computed path and a payload.
///
/// The search treats `path` as an opaque key and never re-encodes `point`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPoint<T = ()> {
    pub point: Point<f64>,
    pub path: Path,
    pub data: T,
}

impl<T> AnnotatedPoint<T> {
    pub fn new(point: Point<f64>, path: Path, data: T) -> Self {
        Self { point, path, data }
    }
}

impl AnnotatedPoint<()> {
    /// An annotated point with no payload, typically a search target.
    pub fn unlabeled(point: Point<f64>, path: Path) -> Self {
        Self::new(point, path, ())
    }
}
