//! Operations built on the codec.
//!
//! It provides:
//! - Cell topology: neighbors and bounding boxes
//! - Haversine distance
//! - Prefix-bucketed nearest-neighbor search
//! - Bounding-box coverings (envelopes)
//! - Argument validation shared by all of the above
//!
//! Every operation is a pure function of the codec's region and its inputs.

pub mod distance;
pub mod envelope;
pub mod search;
pub mod topology;
pub mod validation;

pub use distance::{EARTH_RADIUS_METERS, distance};
pub use envelope::MAX_ENVELOPE_CELLS;
pub use search::{SearchResult, SearchStats, k_nearest, k_nearest_with_stats};
pub use topology::Neighbors;
