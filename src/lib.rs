//! Variable-precision quadrant-path encoding of geographic coordinates.
//!
//! A coordinate is encoded by recursively splitting a lng/lat [`Region`]
//! into four quadrants, one [`Quadrant`] digit per level. The resulting
//! [`Path`] behaves like a geohash: shared prefixes mean shared ancestor
//! cells, which [`k_nearest`] uses to rank only nearby candidates.
//!
//! ```rust
//! use quadpath::{AnnotatedPoint, Point, QuadCodec, k_nearest};
//!
//! let codec = QuadCodec::world();
//!
//! let nyc = Point::new(-74.0060, 40.7128);
//! let path = codec.encode(&nyc, 16)?;
//! let cell = codec.decode(&path);
//! assert!(cell.contains(&nyc));
//!
//! let east = codec.neighbor(&path, 1, 0)?;
//! assert!(east.is_some());
//!
//! let points: Vec<_> = [(-73.9442, 40.6782), (-118.2437, 34.0522)]
//!     .into_iter()
//!     .map(|(lng, lat)| {
//!         let p = Point::new(lng, lat);
//!         codec.encode(&p, 16).map(|path| AnnotatedPoint::new(p, path, ()))
//!     })
//!     .collect::<Result<_, _>>()?;
//! let target = AnnotatedPoint::unlabeled(nyc, path);
//! let nearest = k_nearest(&target, &points, 16, 1)?;
//! assert_eq!(nearest[0].point.point, Point::new(-73.9442, 40.6782));
//! # Ok::<(), quadpath::QuadError>(())
//! ```

pub mod builder;
pub mod codec;
pub mod compute;
pub mod config;
pub mod error;
pub mod types;

pub use builder::CodecBuilder;
pub use codec::QuadCodec;
pub use config::{Config, RegionConfig};
pub use error::{QuadError, Result};

pub use geo::{Point, Rect, coord};

pub use compute::{
    EARTH_RADIUS_METERS, MAX_ENVELOPE_CELLS, Neighbors, SearchResult, SearchStats, distance, k_nearest,
    k_nearest_with_stats,
};

pub use types::{AnnotatedPoint, DecodedCell, Path, Quadrant, Region};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{CodecBuilder, Config, QuadCodec, QuadError, Result};

    pub use crate::{AnnotatedPoint, DecodedCell, Path, Quadrant, Region};

    pub use crate::{Neighbors, SearchResult, distance, k_nearest};

    pub use geo::{Point, Rect};
}
