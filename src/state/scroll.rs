//! Scroll synchronisation.
//!
//! Keeps a scroll view following a child of an animated list:
//! - [`scroll_value_for_target`] - normalised scroll value centring a target
//! - [`AutoScrollToTarget`] - re-centres whenever the target moves
//! - [`ScrollPin`] - holds a scroll view at a fixed value
//!
//! Normalised values are in `[0, 1]`. The vertical axis is inverted to match
//! the list's downward growth: `1` shows the top of the content.

use taffy::{Point, Size};
use tracing::trace;

use crate::engine::{LayoutHost, NodeId};
use crate::types::Axis;

// =============================================================================
// Scroll View
// =============================================================================

/// A host scroll container.
pub trait ScrollView {
    /// Scrolls along x rather than y.
    fn is_horizontal(&self) -> bool;
    fn content_size(&self) -> Size<f32>;
    fn normalized_position(&self) -> f32;
    fn set_normalized_position(&mut self, value: f32);

    fn axis(&self) -> Axis {
        if self.is_horizontal() { Axis::Horizontal } else { Axis::Vertical }
    }
}

// =============================================================================
// Scroll Math
// =============================================================================

/// Normalised scroll value that brings a target into the middle of the view.
///
/// `target_offset` is the target's leading-edge position along `axis` (the
/// sign is ignored, since vertical positions are negative). The value is
/// pushed away from the centre by the target's share of the content so large
/// targets near either end are fully revealed.
pub fn scroll_value_for_target(
    content_extent: f32,
    target_extent: f32,
    target_offset: f32,
    axis: Axis,
) -> f32 {
    if content_extent <= 0.0 || !content_extent.is_finite() {
        return 0.0;
    }

    let centre = target_offset.abs() + target_extent / 2.0;
    let fraction = centre / content_extent;
    let mut value = match axis {
        Axis::Vertical => 1.0 - fraction,
        Axis::Horizontal => fraction,
    };

    let share = target_extent / content_extent;
    value += share * (value - 0.5);
    value.clamp(0.0, 1.0)
}

// =============================================================================
// Auto Scroll
// =============================================================================

/// Scrolls a view to keep `target` centred as it moves.
#[derive(Debug, Clone)]
pub struct AutoScrollToTarget {
    target: NodeId,
    last_position: Option<Point<f32>>,
}

impl AutoScrollToTarget {
    pub fn new(target: NodeId) -> Self {
        Self { target, last_position: None }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Remember where the target is now without scrolling.
    pub fn on_enable(&mut self, host: &dyn LayoutHost) {
        self.last_position = host.position(self.target);
    }

    /// Scroll if the target moved since the last tick. Returns whether the
    /// view was written.
    pub fn tick(&mut self, host: &dyn LayoutHost, view: &mut dyn ScrollView) -> bool {
        let Some(position) = host.position(self.target) else { return false };
        if self.last_position == Some(position) {
            return false;
        }
        self.scroll_to_target(host, view);
        self.last_position = Some(position);
        true
    }

    /// Write the centring value for the target's current position.
    pub fn scroll_to_target(&self, host: &dyn LayoutHost, view: &mut dyn ScrollView) {
        let (Some(position), Some(size)) = (host.position(self.target), host.rect_size(self.target))
        else {
            return;
        };
        let axis = view.axis();
        let offset = match axis {
            Axis::Horizontal => position.x,
            Axis::Vertical => position.y,
        };
        let value = scroll_value_for_target(
            axis.extent(view.content_size()),
            axis.extent(size),
            offset,
            axis,
        );
        trace!(target = %self.target, value, "auto scroll");
        view.set_normalized_position(value);
    }
}

// =============================================================================
// Pin
// =============================================================================

/// Re-applies a fixed normalised value every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPin {
    value: f32,
}

impl ScrollPin {
    /// `value` is clamped to `[0, 1]`.
    pub fn new(value: f32) -> Self {
        Self { value: clamp_unit(value) }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = clamp_unit(value);
    }

    pub fn tick(&self, view: &mut dyn ScrollView) {
        view.set_normalized_position(self.value);
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SceneGraph;

    struct View {
        horizontal: bool,
        content: Size<f32>,
        value: f32,
        writes: usize,
    }

    impl View {
        fn vertical(height: f32) -> Self {
            Self {
                horizontal: false,
                content: Size { width: 100.0, height },
                value: 1.0,
                writes: 0,
            }
        }
    }

    impl ScrollView for View {
        fn is_horizontal(&self) -> bool {
            self.horizontal
        }
        fn content_size(&self) -> Size<f32> {
            self.content
        }
        fn normalized_position(&self) -> f32 {
            self.value
        }
        fn set_normalized_position(&mut self, value: f32) {
            self.value = value;
            self.writes += 1;
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-5, "{actual} != {expected}");
    }

    #[test]
    fn test_vertical_value_is_inverted() {
        // Centre at 500 of 1000, tiny target
        assert_close(scroll_value_for_target(1000.0, 0.0, -500.0, Axis::Vertical), 0.5);
        // Target at the very top
        assert_close(scroll_value_for_target(1000.0, 0.0, 0.0, Axis::Vertical), 1.0);
    }

    #[test]
    fn test_horizontal_value_is_not_inverted() {
        assert_close(scroll_value_for_target(1000.0, 0.0, 250.0, Axis::Horizontal), 0.25);
    }

    #[test]
    fn test_target_share_widens_value() {
        // centre = 100 + 50, fraction 0.15, value 0.85, share 0.1
        let value = scroll_value_for_target(1000.0, 100.0, -100.0, Axis::Vertical);
        assert_close(value, 0.85 + 0.1 * 0.35);
    }

    #[test]
    fn test_value_is_clamped() {
        assert_eq!(scroll_value_for_target(100.0, 80.0, -90.0, Axis::Vertical), 0.0);
        assert_eq!(scroll_value_for_target(100.0, 20.0, 90.0, Axis::Horizontal), 1.0);
    }

    #[test]
    fn test_zero_content_yields_zero() {
        assert_eq!(scroll_value_for_target(0.0, 10.0, -5.0, Axis::Vertical), 0.0);
        assert_eq!(scroll_value_for_target(-4.0, 10.0, -5.0, Axis::Horizontal), 0.0);
    }

    #[test]
    fn test_auto_scroll_only_when_target_moves() {
        let mut scene = SceneGraph::new();
        let target = scene.create_node();
        scene.set_size(target, Size { width: 100.0, height: 0.0 });
        let mut view = View::vertical(1000.0);
        let mut auto = AutoScrollToTarget::new(target);

        auto.on_enable(&scene);
        assert!(!auto.tick(&scene, &mut view));
        assert_eq!(view.writes, 0);

        scene.set_position(target, Point { x: 0.0, y: -500.0 });
        assert!(auto.tick(&scene, &mut view));
        assert_close(view.normalized_position(), 0.5);

        assert!(!auto.tick(&scene, &mut view));
        assert_eq!(view.writes, 1);
    }

    #[test]
    fn test_auto_scroll_ignores_defunct_target() {
        let mut scene = SceneGraph::new();
        let target = scene.create_node();
        let mut view = View::vertical(1000.0);
        let mut auto = AutoScrollToTarget::new(target);
        auto.on_enable(&scene);

        scene.destroy(target);

        assert!(!auto.tick(&scene, &mut view));
        assert_eq!(view.writes, 0);
    }

    #[test]
    fn test_pin_reapplies_every_tick() {
        let mut view = View::vertical(500.0);
        let pin = ScrollPin::new(0.3);

        pin.tick(&mut view);
        view.value = 0.9;
        pin.tick(&mut view);

        assert_close(view.normalized_position(), 0.3);
        assert_eq!(view.writes, 2);
    }

    #[test]
    fn test_pin_clamps() {
        assert_eq!(ScrollPin::new(1.5).value(), 1.0);
        assert_eq!(ScrollPin::new(f32::NAN).value(), 0.0);
        let mut pin = ScrollPin::new(0.5);
        pin.set_value(-2.0);
        assert_eq!(pin.value(), 0.0);
    }
}
