//! Two-phase update model.
//!
//! Property mutations only flip [`UpdateFlags`] bits, the host drains them
//! once before the next paint and runs the layout pass then. Because the
//! layout pass reads live state, duplicate requests coalesce for free.

use serde::{Deserialize, Serialize};
use zng_unit::{Dip, DipToPx, Factor, FactorUnits, Px, PxToDip};

use crate::geometry::{self, BarMargins};

bitflags::bitflags! {
    /// Pending work requested by property mutations and gestures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct UpdateFlags: u8 {
        /// Bar margins and fill height must be recomputed.
        const LAYOUT = 0b01;
        /// Thumb and fill offsets must be recomputed and reapplied.
        const RENDER = 0b10;
    }
}

/// Dimensions measured by the host layout system.
///
/// All lengths are in pixels, `scale_factor` converts host inputs given in
/// device-independent [`Dip`] lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Total widget height.
    pub height: Px,
    /// Measured thumb element height.
    pub thumb_height: Px,
    /// Measured max placeholder height, zero if not set.
    pub max_placeholder_height: Px,
    /// Measured min placeholder height, zero if not set.
    pub min_placeholder_height: Px,
    /// Display scale factor of the host surface.
    pub scale_factor: Factor,
}
impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            height: Px(0),
            thumb_height: Px(0),
            max_placeholder_height: Px(0),
            min_placeholder_height: Px(0),
            scale_factor: 1.fct(),
        }
    }
}
impl LayoutMetrics {
    /// New with only the widget and thumb heights set, scale factor `1`.
    pub fn new(height: Px, thumb_height: Px) -> Self {
        Self {
            height,
            thumb_height,
            ..Self::default()
        }
    }

    /// New from device-independent heights, converted with `scale_factor`.
    pub fn from_dip(height: Dip, thumb_height: Dip, scale_factor: Factor) -> Self {
        Self {
            height: height.to_px(scale_factor),
            thumb_height: thumb_height.to_px(scale_factor),
            scale_factor,
            ..Self::default()
        }
    }

    /// Convert a device-independent length using this measure's scale factor.
    pub fn dip_to_px(&self, length: Dip) -> Px {
        length.to_px(self.scale_factor)
    }

    /// Convert a pixel length using this measure's scale factor.
    pub fn px_to_dip(&self, length: Px) -> Dip {
        length.to_dip(self.scale_factor)
    }
}

/// Offsets the host must apply to its elements after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualLayout {
    /// Bar margins, position the bar and placeholders.
    pub margins: BarMargins,
    /// Extent of the draggable range.
    pub fill_height: Px,
    /// Thumb top offset from the widget top edge.
    pub thumb_top_margin: Px,
    /// Downwards translation of the fill overlay.
    pub fill_translation_y: Px,
    /// The thumb element must be displayed.
    pub thumb_visible: bool,
}

/// Inputs of a layout pass.
///
/// `margins` come from the widget's cache, recomputed only when a `LAYOUT`
/// update was pending; the rest is live widget state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutRequest {
    pub metrics: LayoutMetrics,
    pub margins: BarMargins,
    pub progress: i32,
    pub max_value: i32,
    pub show_thumb: bool,
}

/// Run a layout pass.
///
/// Returns `None` for degenerate measurements (fill height not positive),
/// the caller keeps the update pending until a real measurement arrives.
pub(crate) fn layout(request: LayoutRequest) -> Option<VisualLayout> {
    let LayoutRequest {
        metrics,
        margins,
        progress,
        max_value,
        show_thumb,
    } = request;

    let fill_height = margins.fill_height(metrics.height);
    if fill_height <= Px(0) {
        tracing::debug!("layout skipped, fill height {fill_height:?} not measured yet");
        return None;
    }

    let mut thumb_top_margin = geometry::thumb_offset(progress, fill_height, max_value);
    let thumb_half = if show_thumb { Px(metrics.thumb_height.0 / 2) } else { Px(0) };
    if margins.top > thumb_half {
        // keep the thumb centered on the fill position when the bar is
        // inset more than the thumb overhang
        thumb_top_margin += margins.top - thumb_half;
    }

    Some(VisualLayout {
        margins,
        fill_height,
        thumb_top_margin,
        fill_translation_y: geometry::fill_translation(progress, fill_height, max_value),
        thumb_visible: show_thumb,
    })
}
