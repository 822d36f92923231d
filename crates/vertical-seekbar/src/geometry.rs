//! Pointer↔progress mapping and bar geometry.
//!
//! The bar's *fill height* is the pixel extent of the draggable range, the
//! widget height minus the computed [`BarMargins`]. Progress grows towards
//! the top, so a pointer at `0` maps to the maximum value and a pointer at
//! `fill_height` maps to `0`.

use serde::{Deserialize, Serialize};
use zng_unit::Px;

/// Converts a pointer Y position inside the fill range to a progress value.
///
/// Positions at or above the top edge saturate to `max_value`, positions at
/// or below the bottom edge saturate to `0`, in-between positions map
/// linearly, rounded to the nearest unit.
///
/// `fill_height` must be a real measurement, callers skip the update while
/// the bar is not measured.
pub fn pointer_to_progress(position_y: Px, fill_height: Px, max_value: i32) -> i32 {
    debug_assert!(fill_height > Px(0));
    if position_y <= Px(0) {
        max_value
    } else if position_y >= fill_height {
        0
    } else {
        let v = max_value as f64 - (position_y.0 as f64 * max_value as f64 / fill_height.0 as f64);
        v.round() as i32
    }
}

/// Converts a progress value to the thumb top offset inside the fill range.
///
/// This is the inverse of [`pointer_to_progress`], `0` progress sits at the
/// bottom of the range (`fill_height`), `max_value` progress at the top (`0`).
///
/// `max_value` is clamped to `>= 1`, like everywhere else in the widget.
pub fn thumb_offset(progress: i32, fill_height: Px, max_value: i32) -> Px {
    let max_value = max_value.max(1);
    let filled = progress as i64 * fill_height.0 as i64 / max_value as i64;
    fill_height - Px(filled as i32)
}

/// Converts a progress value to the Y translation of the fill overlay.
///
/// The fill overlay is a full-bar element shifted down so only the filled
/// portion stays visible inside the bar.
///
/// `max_value` is clamped to `>= 1`, like everywhere else in the widget.
pub fn fill_translation(progress: i32, fill_height: Px, max_value: i32) -> Px {
    let max_value = max_value.max(1);
    Px((fill_height.0 as i64 * (max_value - progress) as i64 / max_value as i64) as i32)
}

/// Position of a min/max placeholder relative to the bar edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Placeholder {
    /// Fully outside the bar.
    Outside,
    /// Flush with the bar edge, inside.
    Inside,
    /// Centered on the bar edge.
    #[default]
    Middle,
}

/// Bar margins derived from the thumb and placeholder sizes.
///
/// `top`/`bottom` shrink the bar so the thumb and placeholders never
/// overflow the widget bounds; the placeholder offsets position each
/// placeholder relative to the widget top/bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BarMargins {
    /// Space above the bar.
    pub top: Px,
    /// Space below the bar.
    pub bottom: Px,
    /// Top offset of the max placeholder, from the widget top edge.
    pub max_placeholder_top: Px,
    /// Bottom offset of the min placeholder, from the widget bottom edge.
    pub min_placeholder_bottom: Px,
}
impl BarMargins {
    /// Compute margins for one widget edge.
    ///
    /// Returns `(bar_margin, placeholder_offset)`.
    fn measure_edge(thumb_half: Px, placeholder_height: Px, position: Placeholder) -> (Px, Px) {
        match position {
            Placeholder::Inside => (thumb_half, thumb_half),
            Placeholder::Outside => {
                let margin = placeholder_height + (thumb_half - placeholder_height).max(Px(0));
                (margin, margin - placeholder_height)
            }
            Placeholder::Middle => {
                let half = Px(placeholder_height.0 / 2);
                let margin = thumb_half.max(half);
                (margin, margin - half)
            }
        }
    }

    /// Compute the margins from measured element heights.
    ///
    /// `thumb_height` is ignored when the thumb is hidden; placeholder
    /// heights of zero collapse that placeholder's contribution.
    pub fn measure(
        show_thumb: bool,
        thumb_height: Px,
        max_placeholder_height: Px,
        max_placeholder_position: Placeholder,
        min_placeholder_height: Px,
        min_placeholder_position: Placeholder,
    ) -> Self {
        let thumb_half = if show_thumb { Px(thumb_height.0 / 2) } else { Px(0) };

        let (top, max_placeholder_top) =
            Self::measure_edge(thumb_half, max_placeholder_height, max_placeholder_position);
        let (bottom, min_placeholder_bottom) =
            Self::measure_edge(thumb_half, min_placeholder_height, min_placeholder_position);

        Self {
            top,
            bottom,
            max_placeholder_top,
            min_placeholder_bottom,
        }
    }

    /// Fill height for a widget of `height`.
    pub fn fill_height(&self, height: Px) -> Px {
        height - self.top - self.bottom
    }
}
