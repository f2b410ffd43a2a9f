//! Prefix-bucketed approximate k-nearest-neighbor search.
//!
//! Candidates are grouped by how many leading path digits they share with
//! the target. Buckets are scanned from the longest shared prefix down until
//! `k` candidates have been gathered, plus a configurable number of extra
//! buckets (the overscan) to catch points just across a cell boundary. Only
//! the gathered candidates are ranked by exact Haversine distance.
//!
//! ## Algorithm
//!
//! ```text
//! 1. prefix_match(p) = common leading digits of p.path and target.path
//! 2. bucket[m] = points with prefix_match == m, for m in precision..=0
//! 3. scan buckets from precision downward, accumulating candidates
//! 4. once |candidates| >= k, scan `overscan` more buckets, then stop
//! 5. rank candidates by distance, keep the first k
//! ```
//!
//! The result is approximate: a true neighbor whose prefix match is more
//! than `overscan` buckets below the bucket that completed `k` is missed.

use super::distance::distance;
use crate::codec::QuadCodec;
use crate::compute::validation::{validate_precision, validate_search};
use crate::config::Config;
use crate::error::Result;
use crate::types::AnnotatedPoint;
use std::cmp::Ordering;

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a, T> {
    /// The matched input point
    pub point: &'a AnnotatedPoint<T>,
    /// Haversine distance to the target, in meters
    pub distance: f64,
}

/// Statistics about a search execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of input points bucketed
    pub points_examined: usize,
    /// Number of prefix buckets scanned
    pub buckets_scanned: usize,
    /// Number of candidates whose distance was computed
    pub candidates_ranked: usize,
    /// Number of results returned
    pub results_returned: usize,
}

/// Approximate k nearest neighbors of `target` among `points`, using the
/// default overscan of one bucket.
///
/// Every path must already be encoded at `precision`; the search never
/// encodes. Results are sorted by distance (nearest first) and hold at most
/// `k` entries.
///
/// # Errors
///
/// [`QuadError::InvalidInput`](crate::QuadError::InvalidInput) when `k == 0`
/// or a path length differs from `precision`.
///
/// # Examples
///
/// ```
/// use quadpath::{AnnotatedPoint, Point, QuadCodec, k_nearest};
///
/// let codec = QuadCodec::world();
/// let precision = 12;
/// let annotate = |lng: f64, lat: f64, name: &'static str| {
///     let point = Point::new(lng, lat);
///     AnnotatedPoint::new(point, codec.encode(&point, precision).unwrap(), name)
/// };
///
/// let points = vec![
///     annotate(-73.9442, 40.6782, "Brooklyn"),
///     annotate(-73.9356, 40.7306, "Queens"),
///     annotate(-118.2437, 34.0522, "LA"),
/// ];
/// let target = annotate(-74.0060, 40.7128, "NYC");
///
/// let nearest = k_nearest(&target, &points, precision, 2)?;
/// assert_eq!(nearest.len(), 2);
/// assert!(nearest.iter().all(|hit| hit.point.data != "LA"));
/// # Ok::<(), quadpath::QuadError>(())
/// ```
pub fn k_nearest<'a, U, T>(
    target: &AnnotatedPoint<U>,
    points: &'a [AnnotatedPoint<T>],
    precision: usize,
    k: usize,
) -> Result<Vec<SearchResult<'a, T>>> {
    k_nearest_with_stats(
        target,
        points,
        precision,
        k,
        Config::default_overscan_levels(),
    )
    .map(|(results, _)| results)
}

/// [`k_nearest`] with an explicit overscan, also returning [`SearchStats`].
///
/// `overscan_levels == 0` stops at the bucket that completes `k`; larger
/// values trade more distance evaluations for better recall near cell
/// boundaries.
pub fn k_nearest_with_stats<'a, U, T>(
    target: &AnnotatedPoint<U>,
    points: &'a [AnnotatedPoint<T>],
    precision: usize,
    k: usize,
    overscan_levels: usize,
) -> Result<(Vec<SearchResult<'a, T>>, SearchStats)> {
    validate_search(target, points, precision, k)?;

    let mut stats = SearchStats {
        points_examined: points.len(),
        ..SearchStats::default()
    };

    if points.is_empty() {
        return Ok((Vec::new(), stats));
    }

    // buckets[m] holds indices of points sharing exactly m leading digits
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); precision + 1];
    for (idx, point) in points.iter().enumerate() {
        buckets[target.path.common_prefix_len(&point.path)].push(idx);
    }

    let mut candidates = Vec::with_capacity(k.min(points.len()));
    let mut overscan_left: Option<usize> = None;

    for bucket in buckets.iter().rev() {
        if overscan_left == Some(0) {
            break;
        }

        candidates.extend_from_slice(bucket);
        stats.buckets_scanned += 1;

        match overscan_left.as_mut() {
            Some(left) => *left -= 1,
            None if candidates.len() >= k => overscan_left = Some(overscan_levels),
            None => {}
        }
    }

    let mut ranked: Vec<SearchResult<'a, T>> = Vec::with_capacity(candidates.len());
    for idx in candidates {
        let point = &points[idx];
        let dist = distance(&target.point, &point.point);

        // Non-finite coordinates cannot be ranked
        if !dist.is_finite() {
            continue;
        }

        ranked.push(SearchResult {
            point,
            distance: dist,
        });
    }
    stats.candidates_ranked = ranked.len();

    ranked.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    ranked.truncate(k);
    stats.results_returned = ranked.len();

    log::trace!(
        "k_nearest: k={} precision={} examined={} buckets={} ranked={} returned={}",
        k,
        precision,
        stats.points_examined,
        stats.buckets_scanned,
        stats.candidates_ranked,
        stats.results_returned
    );

    Ok((ranked, stats))
}

impl QuadCodec {
    /// [`k_nearest`] using this codec's precision limit and overscan setting.
    pub fn k_nearest<'a, U, T>(
        &self,
        target: &AnnotatedPoint<U>,
        points: &'a [AnnotatedPoint<T>],
        precision: usize,
        k: usize,
    ) -> Result<Vec<SearchResult<'a, T>>> {
        validate_precision(precision, self.max_precision())?;
        k_nearest_with_stats(target, points, precision, k, self.overscan_levels())
            .map(|(results, _)| results)
    }
}
