//! Cell coverings of bounding boxes.

use crate::codec::QuadCodec;
use crate::compute::validation::{validate_precision, validate_rect};
use crate::error::{QuadError, Result};
use crate::types::Path;
use geo::{Point, Rect};

/// Coverings larger than this are logged as a warning.
const LARGE_ENVELOPE_CELLS: usize = 100_000;

/// Largest covering `envelope` will build; a whole-globe box at precision 12.
pub const MAX_ENVELOPE_CELLS: usize = 1 << 24;

impl QuadCodec {
    /// Every cell at `precision` that covers `bbox`.
    ///
    /// The box is first clamped to the region; a box disjoint from the region
    /// yields an empty covering. Cells are returned once each, rows south to
    /// north and west to east within a row.
    ///
    /// # Errors
    ///
    /// [`QuadError::InvalidInput`] for a non-finite box, or when the covering
    /// would exceed [`MAX_ENVELOPE_CELLS`]. Coverings grow 4x per precision
    /// level, so pick the precision from the box size.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadpath::{QuadCodec, Rect, coord};
    ///
    /// let codec = QuadCodec::world();
    /// let bbox = Rect::new(coord! { x: -1.0, y: -1.0 }, coord! { x: 1.0, y: 1.0 });
    ///
    /// let cells: Vec<String> = codec
    ///     .envelope(&bbox, 1)?
    ///     .iter()
    ///     .map(|p| p.to_string())
    ///     .collect();
    /// assert_eq!(cells, vec!["C", "D", "B", "A"]);
    /// # Ok::<(), quadpath::QuadError>(())
    /// ```
    pub fn envelope(&self, bbox: &Rect<f64>, precision: usize) -> Result<Vec<Path>> {
        validate_rect(bbox)?;
        validate_precision(precision, self.max_precision())?;

        let Some(clamped) = self.region().clamp_rect(bbox) else {
            log::warn!(
                "Envelope bounding box {:?} lies outside the codec region",
                bbox
            );
            return Ok(Vec::new());
        };

        if clamped != *bbox {
            log::warn!(
                "Envelope bounding box {:?} clamped to codec region as {:?}",
                bbox,
                clamped
            );
        }

        let min = Point::from(clamped.min());
        let max = Point::from(clamped.max());

        let start = self.min_corner_cell(&min, &max, precision)?;
        let end = self.max_corner_cell(&min, &max, precision)?;

        let start_cell = self.decode(&start);
        let end_cell = self.decode(&end);

        let columns = cell_span(start_cell.origin.x(), end_cell.origin.x(), start_cell.error.x);
        let rows = cell_span(start_cell.origin.y(), end_cell.origin.y(), start_cell.error.y);
        let estimate = columns.saturating_mul(rows);
        if estimate > MAX_ENVELOPE_CELLS {
            return Err(QuadError::InvalidInput(format!(
                "Envelope at precision {} would cover {} x {} cells, more than the limit of {}",
                precision, columns, rows, MAX_ENVELOPE_CELLS
            )));
        }
        if estimate > LARGE_ENVELOPE_CELLS {
            log::warn!(
                "Envelope at precision {} covers ~{} cells ({} x {})",
                precision,
                estimate,
                columns,
                rows
            );
        }

        // East edge of the first row: end's column, start's row
        let mut row_end = self.encode(
            &Point::new(end_cell.origin.x(), start_cell.origin.y()),
            precision,
        )?;
        let mut row_start = start;
        let mut cells = Vec::with_capacity(estimate.min(LARGE_ENVELOPE_CELLS));

        loop {
            self.walk_row(&row_start, &row_end, &mut cells)?;

            if row_end == end {
                break;
            }

            // Region edge ends the scan
            match (
                self.neighbor(&row_start, 0, 1)?,
                self.neighbor(&row_end, 0, 1)?,
            ) {
                (Some(next_start), Some(next_end)) => {
                    row_start = next_start;
                    row_end = next_end;
                }
                _ => break,
            }
        }

        log::debug!(
            "Envelope at precision {} produced {} cells",
            precision,
            cells.len()
        );

        Ok(cells)
    }

    /// Collect cells from `start` east to `end`, inclusive.
    fn walk_row(&self, start: &Path, end: &Path, cells: &mut Vec<Path>) -> Result<()> {
        let mut cell = start.clone();
        loop {
            cells.push(cell.clone());
            if cell == *end {
                return Ok(());
            }
            match self.neighbor(&cell, 1, 0)? {
                Some(next) => cell = next,
                None => return Ok(()),
            }
        }
    }

    /// Cell of the south-west corner. A corner lying exactly on its cell's
    /// east (or north) edge belongs to the next cell over when the box
    /// extends that way.
    fn min_corner_cell(&self, min: &Point<f64>, max: &Point<f64>, precision: usize) -> Result<Path> {
        let mut path = self.encode(min, precision)?;

        if max.x() > min.x() && min.x() >= self.bounding_box(&path).max().x {
            path = self.neighbor(&path, 1, 0)?.unwrap_or(path);
        }
        if max.y() > min.y() && min.y() >= self.bounding_box(&path).max().y {
            path = self.neighbor(&path, 0, 1)?.unwrap_or(path);
        }

        Ok(path)
    }

    /// Cell of the north-east corner. A corner lying exactly on its cell's
    /// west (or south) edge belongs to the previous cell when the box
    /// extends that way.
    fn max_corner_cell(&self, min: &Point<f64>, max: &Point<f64>, precision: usize) -> Result<Path> {
        let mut path = self.encode(max, precision)?;

        if max.x() > min.x() && max.x() <= self.bounding_box(&path).min().x {
            path = self.neighbor(&path, -1, 0)?.unwrap_or(path);
        }
        if max.y() > min.y() && max.y() <= self.bounding_box(&path).min().y {
            path = self.neighbor(&path, 0, -1)?.unwrap_or(path);
        }

        Ok(path)
    }
}

/// Number of cells between two cell centers on one axis, inclusive.
fn cell_span(from: f64, to: f64, half_extent: f64) -> usize {
    if half_extent <= 0.0 {
        return 1;
    }
    ((to - from).abs() / (2.0 * half_extent)).round() as usize + 1
}
