//! Axis accumulation - the list's own min/preferred size.
//!
//! Two modes:
//! - **Primary** (the list's layout axis): children are summed, with one
//!   spacing gap between each consecutive pair.
//! - **Cross**: the widest child wins.
//!
//! Both add the padding on the measured axis. Ignored and defunct children
//! are skipped and never contribute spacing.

use tracing::trace;

use crate::config::LayoutConfig;
use crate::engine::SizeSource;
use crate::types::{Axis, Padding, SizeReport};

use super::record::ChildRecord;

/// Min/preferred extent of one visible child along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Extent {
    pub index: usize,
    pub min: f32,
    pub preferred: f32,
}

/// Iterate visible children with their extents along `axis`.
pub(crate) fn visible_extents<'a, S: SizeSource + ?Sized + 'a>(
    records: &'a [ChildRecord],
    sizes: &'a S,
    axis: Axis,
) -> impl Iterator<Item = Extent> + 'a {
    records.iter().enumerate().filter_map(move |(index, record)| {
        if !record.participates(sizes) {
            return None;
        }
        let min = sizes.min_size(record.handle, axis)?;
        let preferred = sizes.preferred_size(record.handle, axis)?;
        Some(Extent { index, min, preferred })
    })
}

/// Size along the list's own axis: `sum + (n - 1) * spacing + padding`.
pub fn accumulate_primary<S: SizeSource + ?Sized>(
    records: &[ChildRecord],
    sizes: &S,
    axis: Axis,
    padding: &Padding,
    spacing: f32,
) -> SizeReport {
    let mut report = SizeReport::default();
    let mut visible = 0usize;

    for extent in visible_extents(records, sizes, axis) {
        report.min += extent.min;
        report.preferred += extent.preferred;
        visible += 1;
    }

    let gaps = spacing * visible.saturating_sub(1) as f32;
    let padding = padding.total(axis);
    report.min += gaps + padding;
    report.preferred += gaps + padding;
    report
}

/// Size across the list's axis: largest child plus padding.
pub fn accumulate_cross<S: SizeSource + ?Sized>(
    records: &[ChildRecord],
    sizes: &S,
    axis: Axis,
    padding: &Padding,
) -> SizeReport {
    let mut report = SizeReport::default();

    for extent in visible_extents(records, sizes, axis) {
        report.min = report.min.max(extent.min);
        report.preferred = report.preferred.max(extent.preferred);
    }

    let padding = padding.total(axis);
    report.min += padding;
    report.preferred += padding;
    report
}

/// Size report for `axis`, picking primary or cross mode from the config.
pub fn accumulate<S: SizeSource + ?Sized>(
    records: &[ChildRecord],
    sizes: &S,
    config: &LayoutConfig,
    axis: Axis,
) -> SizeReport {
    let report = if axis == config.axis {
        accumulate_primary(records, sizes, axis, &config.padding, config.spacing)
    } else {
        accumulate_cross(records, sizes, axis, &config.padding)
    };
    trace!(?axis, min = report.min, preferred = report.preferred, "accumulated size");
    report
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use taffy::Size;
    use crate::engine::{IgnoreLayout, LayoutHost, NodeId, SceneGraph};
    use crate::layout::snapshot;

    fn scene_with_sizes(sizes: &[(f32, f32)]) -> (SceneGraph, NodeId, Vec<ChildRecord>) {
        let mut scene = SceneGraph::new();
        let root = scene.create_node();
        for &(width, height) in sizes {
            let child = scene.create_child(root).unwrap();
            scene.set_preferred_size(child, Size { width, height }).unwrap();
            scene.set_min_size(child, Size { width: width / 2.0, height: height / 2.0 }).unwrap();
        }
        let records = snapshot::rebuild(None, &scene.active_children(root), &scene)
            .records()
            .to_vec();
        (scene, root, records)
    }

    #[test]
    fn test_empty_is_padding_only() {
        let (scene, _, records) = scene_with_sizes(&[]);
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);

        let primary = accumulate_primary(&records, &scene, Axis::Vertical, &padding, 7.0);
        assert_eq!(primary, SizeReport::new(6.0, 6.0));

        let cross = accumulate_cross(&records, &scene, Axis::Horizontal, &padding);
        assert_eq!(cross, SizeReport::new(4.0, 4.0));
    }

    #[test]
    fn test_single_child_has_no_spacing() {
        let (scene, _, records) = scene_with_sizes(&[(10.0, 20.0)]);
        let report =
            accumulate_primary(&records, &scene, Axis::Vertical, &Padding::default(), 50.0);
        assert_eq!(report, SizeReport::new(10.0, 20.0));
    }

    #[test]
    fn test_n_children_sum_with_gaps() {
        let (scene, _, records) = scene_with_sizes(&[(8.0, 12.0); 4]);
        let report =
            accumulate_primary(&records, &scene, Axis::Horizontal, &Padding::default(), 3.0);
        // 4 * 8 + 3 * 3
        assert_eq!(report.preferred, 41.0);
        // 4 * 4 + 3 * 3
        assert_eq!(report.min, 25.0);
    }

    #[test]
    fn test_vertical_scenario_uses_symmetric_formula() {
        let (scene, _, records) = scene_with_sizes(&[(10.0, 20.0); 3]);
        let padding = Padding::new(0.0, 10.0, 0.0, 10.0);
        let report = accumulate_primary(&records, &scene, Axis::Vertical, &padding, 5.0);
        assert_eq!(report.preferred, 90.0);
    }

    #[test]
    fn test_cross_takes_max() {
        let (scene, _, records) = scene_with_sizes(&[(10.0, 5.0), (30.0, 5.0), (20.0, 5.0)]);
        let padding = Padding::new(2.0, 0.0, 3.0, 0.0);
        let report = accumulate_cross(&records, &scene, Axis::Horizontal, &padding);
        assert_eq!(report, SizeReport::new(20.0, 35.0));
    }

    #[test]
    fn test_ignored_and_defunct_children_are_skipped() {
        let (mut scene, _, mut records) = scene_with_sizes(&[(10.0, 10.0); 3]);
        records[0].ignorer = Some(Rc::new(IgnoreLayout(true)));
        scene.destroy(records[2].handle);

        let report = accumulate_primary(&records, &scene, Axis::Vertical, &Padding::default(), 4.0);
        assert_eq!(report.preferred, 10.0);
    }

    #[test]
    fn test_accumulate_dispatches_on_config_axis() {
        let (scene, _, records) = scene_with_sizes(&[(10.0, 20.0), (30.0, 20.0)]);
        let config = LayoutConfig { axis: Axis::Vertical, spacing: 2.0, ..Default::default() };

        assert_eq!(accumulate(&records, &scene, &config, Axis::Vertical).preferred, 42.0);
        assert_eq!(accumulate(&records, &scene, &config, Axis::Horizontal).preferred, 30.0);
    }
}
