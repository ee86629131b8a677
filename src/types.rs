//! Core types for spark-list.
//!
//! Geometry is expressed with taffy's `Point<f32>` and `Size<f32>` so hosts
//! that already speak taffy can pass values straight through.
//!
//! Coordinates follow an anchor-relative, y-up convention: children are
//! anchored to the container's top-left corner, so a child sitting below the
//! top edge has a negative `y`.

use serde::{Deserialize, Serialize};
use taffy::{Point, Size};

// =============================================================================
// Geometry constants
// =============================================================================

/// Origin point.
pub const ZERO_POINT: Point<f32> = Point { x: 0.0, y: 0.0 };

/// Zero size.
pub const ZERO_SIZE: Size<f32> = Size { width: 0.0, height: 0.0 };

/// Top-left anchor/pivot in normalized rect space (x right, y up).
pub const TOP_LEFT: Point<f32> = Point { x: 0.0, y: 1.0 };

// =============================================================================
// Axis
// =============================================================================

/// Layout axis of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Children stack left to right.
    Horizontal,
    /// Children stack top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Read the component of a size along this axis.
    pub fn extent(self, size: Size<f32>) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Both axes in the order hosts query them.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub(crate) fn slot(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

// =============================================================================
// Padding
// =============================================================================

/// Padding inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// Explicit padding, in left/top/right/bottom order.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Padding on the leading edge of `axis` (left or top).
    pub fn leading(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Padding on the trailing edge of `axis` (right or bottom).
    pub fn trailing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Leading + trailing padding along `axis`.
    pub fn total(&self, axis: Axis) -> f32 {
        self.leading(axis) + self.trailing(axis)
    }

    pub(crate) fn sides(&self) -> [(&'static str, f32); 4] {
        [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ]
    }
}

// =============================================================================
// Alignment
// =============================================================================

/// Where along one axis a block is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignFraction {
    #[default]
    Start,
    Center,
    End,
}

impl AlignFraction {
    /// 0.0, 0.5 or 1.0.
    pub fn fraction(self) -> f32 {
        match self {
            AlignFraction::Start => 0.0,
            AlignFraction::Center => 0.5,
            AlignFraction::End => 1.0,
        }
    }
}

/// 9-point alignment: each axis independently start/center/end.
///
/// Horizontal `Start` is the left edge, vertical `Start` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    pub horizontal: AlignFraction,
    pub vertical: AlignFraction,
}

impl Alignment {
    pub const UPPER_LEFT: Alignment = Alignment::new(AlignFraction::Start, AlignFraction::Start);
    pub const UPPER_CENTER: Alignment = Alignment::new(AlignFraction::Center, AlignFraction::Start);
    pub const UPPER_RIGHT: Alignment = Alignment::new(AlignFraction::End, AlignFraction::Start);
    pub const MIDDLE_LEFT: Alignment = Alignment::new(AlignFraction::Start, AlignFraction::Center);
    pub const MIDDLE_CENTER: Alignment =
        Alignment::new(AlignFraction::Center, AlignFraction::Center);
    pub const MIDDLE_RIGHT: Alignment = Alignment::new(AlignFraction::End, AlignFraction::Center);
    pub const LOWER_LEFT: Alignment = Alignment::new(AlignFraction::Start, AlignFraction::End);
    pub const LOWER_CENTER: Alignment = Alignment::new(AlignFraction::Center, AlignFraction::End);
    pub const LOWER_RIGHT: Alignment = Alignment::new(AlignFraction::End, AlignFraction::End);

    pub const fn new(horizontal: AlignFraction, vertical: AlignFraction) -> Self {
        Self { horizontal, vertical }
    }

    /// Alignment fraction along `axis`.
    pub fn fraction(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal.fraction(),
            Axis::Vertical => self.vertical.fraction(),
        }
    }
}

// =============================================================================
// Size Report
// =============================================================================

/// What a list reports to its parent layout for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeReport {
    pub min: f32,
    pub preferred: f32,
}

impl SizeReport {
    pub fn new(min: f32, preferred: f32) -> Self {
        Self { min, preferred }
    }

    /// Space the list actually needs: the larger of min and preferred.
    pub fn required(&self) -> f32 {
        self.min.max(self.preferred)
    }

    /// Lists never ask for leftover space.
    pub fn flexible(&self) -> f32 {
        0.0
    }

    /// Layout priority reported alongside the sizes.
    pub fn priority(&self) -> i32 {
        0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_cross_and_extent() {
        let size = Size { width: 30.0, height: 12.0 };
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Horizontal.extent(size), 30.0);
        assert_eq!(Axis::Vertical.extent(size), 12.0);
    }

    #[test]
    fn test_padding_per_axis() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padding.leading(Axis::Horizontal), 1.0);
        assert_eq!(padding.trailing(Axis::Horizontal), 3.0);
        assert_eq!(padding.total(Axis::Horizontal), 4.0);
        assert_eq!(padding.leading(Axis::Vertical), 2.0);
        assert_eq!(padding.total(Axis::Vertical), 6.0);
    }

    #[test]
    fn test_alignment_fractions() {
        assert_eq!(Alignment::UPPER_LEFT.fraction(Axis::Horizontal), 0.0);
        assert_eq!(Alignment::MIDDLE_CENTER.fraction(Axis::Vertical), 0.5);
        assert_eq!(Alignment::LOWER_RIGHT.fraction(Axis::Horizontal), 1.0);
        assert_eq!(Alignment::LOWER_LEFT.fraction(Axis::Vertical), 1.0);
    }

    #[test]
    fn test_size_report_required() {
        let report = SizeReport::new(40.0, 25.0);
        assert_eq!(report.required(), 40.0);
        assert_eq!(report.flexible(), 0.0);
        assert_eq!(report.priority(), 0);
    }
}
