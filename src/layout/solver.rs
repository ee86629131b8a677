//! Layout solver - where each child goes.
//!
//! # Algorithm
//!
//! 1. Accumulate the primary axis and reserve `max(min, preferred)`.
//! 2. Start offset = leading padding + leftover space * alignment fraction,
//!    so the whole block of children is aligned, not each child.
//! 3. Walk visible children with a cursor: each child takes
//!    `max(min, preferred)` along the axis and fills the cross axis minus
//!    padding; the cursor advances by size + spacing.
//!
//! Positions are leading-edge coordinates relative to a top-left anchor and
//! pivot. The vertical axis grows downward, so `y` is the negated cursor.
//!
//! The solver is pure over its inputs: solving twice with the same records,
//! sizes and available space yields identical targets.

use taffy::{Point, Size};
use tracing::trace;

use crate::config::LayoutConfig;
use crate::engine::SizeSource;
use crate::types::{Axis, TOP_LEFT};

use super::accumulate::{accumulate_primary, visible_extents};
use super::record::ChildRecord;

/// Summary of one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOutcome {
    /// Children that received targets.
    pub placed: usize,
    /// Space reserved along the primary axis, padding included.
    pub required: f32,
    /// Offset of the first child's leading edge.
    pub start: f32,
}

/// Assign target position, size and pivot to every visible record.
///
/// Returns `None` without touching the records when `phase` is not the
/// list's configured axis; hosts call the solver once per axis and only the
/// matching call does any work.
pub fn solve<S: SizeSource + ?Sized>(
    records: &mut [ChildRecord],
    sizes: &S,
    config: &LayoutConfig,
    phase: Axis,
    available: Size<f32>,
) -> Option<SolveOutcome> {
    let axis = config.axis;
    if phase != axis {
        return None;
    }
    let cross = axis.cross();
    let padding = &config.padding;

    let required = accumulate_primary(records, sizes, axis, padding, config.spacing).required();

    // Overflowing content stays pinned to the leading padding
    let leftover = (axis.extent(available) - required).max(0.0);
    let start = padding.leading(axis) + leftover * config.alignment.fraction(axis);

    let cross_size = (cross.extent(available) - padding.total(cross)).max(0.0);
    let cross_leftover = (cross.extent(available) - padding.total(cross) - cross_size).max(0.0);
    let cross_offset = padding.leading(cross) + cross_leftover * config.alignment.fraction(cross);

    for record in records.iter_mut() {
        record.placed = false;
    }

    let extents: Vec<_> = visible_extents(records, sizes, axis).collect();
    let mut cursor = start;

    for extent in &extents {
        let record = &mut records[extent.index];
        let main = extent.min.max(extent.preferred);

        match axis {
            Axis::Vertical => {
                record.target_position = Point { x: cross_offset, y: -cursor };
                record.target_size = Size { width: cross_size, height: main };
            }
            Axis::Horizontal => {
                record.target_position = Point { x: cursor, y: -cross_offset };
                record.target_size = Size { width: main, height: cross_size };
            }
        }
        record.target_pivot = TOP_LEFT;
        record.placed = true;

        cursor += main + config.spacing;
    }

    trace!(?axis, placed = extents.len(), required, start, "solved layout");

    Some(SolveOutcome { placed: extents.len(), required, start })
}

// =============================================================================
// Tests
// =============================================================================
