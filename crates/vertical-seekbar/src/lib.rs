//!
//! Host-agnostic vertical seekbar widget.
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod geometry;
pub mod gesture;

mod update;
mod value;

use std::fmt;

pub use update::{LayoutMetrics, UpdateFlags, VisualLayout};
pub use zng_unit::{Dip, Factor, FactorUnits, Px};

use geometry::{BarMargins, Placeholder};
use gesture::{GestureController, GestureEvent, GestureModes, PointerEvent};
use update::LayoutRequest;
use value::{ProgressChange, ValueModel};

/// Single-slot widget callback, receives the current progress.
pub type ProgressHandler = Box<dyn FnMut(i32) + Send>;

/// Vertical seekbar widget.
///
/// The widget owns the logical state only. The host feeds measured
/// dimensions with [`measure`] and pointer events with [`pointer_event`],
/// drains [`take_updates`] once before each paint and applies the offsets
/// computed by [`layout`] to its own elements.
///
/// ```
/// use vertical_seekbar::{LayoutMetrics, Px, VerticalSeekBar};
/// use vertical_seekbar::gesture::{PointerEvent, PointerPhase, PointerTarget};
///
/// let mut bar = VerticalSeekBar::new();
///
/// // host measured 220px of height for the widget, 20px for the thumb
/// bar.measure(LayoutMetrics::new(Px(220), Px(20)));
/// let updates = bar.take_updates();
/// assert!(updates.contains(vertical_seekbar::UpdateFlags::LAYOUT));
/// let visual = bar.layout(updates).unwrap();
/// assert_eq!(visual.fill_height, Px(200));
///
/// // press the bar near the top
/// bar.pointer_event(PointerEvent {
///     phase: PointerPhase::Start,
///     target: PointerTarget::Bar,
///     position_y: Px(10),
///     raw_y: Px(10),
/// });
/// assert_eq!(bar.progress(), 95);
/// ```
///
/// [`measure`]: VerticalSeekBar::measure
/// [`pointer_event`]: VerticalSeekBar::pointer_event
/// [`take_updates`]: VerticalSeekBar::take_updates
/// [`layout`]: VerticalSeekBar::layout
#[derive(Default)]
pub struct VerticalSeekBar {
    value: ValueModel,
    gesture: GestureController,
    modes: GestureModes,
    max_placeholder_position: Placeholder,
    min_placeholder_position: Placeholder,
    metrics: LayoutMetrics,
    margins: Option<BarMargins>,
    visual: Option<VisualLayout>,
    pending: UpdateFlags,

    progress_change_handler: Option<ProgressHandler>,
    press_handler: Option<ProgressHandler>,
    release_handler: Option<ProgressHandler>,
}
impl fmt::Debug for VerticalSeekBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerticalSeekBar")
            .field("progress", &self.value.progress())
            .field("max_value", &self.value.max_value())
            .field("modes", &self.modes)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
impl VerticalSeekBar {
    /// New with default value (`50` of `100`) and all gesture modes enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress value.
    pub fn progress(&self) -> i32 {
        self.value.progress()
    }

    /// Set the progress, clamped into `[0, max_value]`.
    ///
    /// Fires the progress change callback if the clamped value differs from
    /// the stored one, and requests a visual update either way.
    pub fn set_progress(&mut self, value: i32) {
        self.apply_progress(value);
    }

    /// Maximum progress value.
    pub fn max_value(&self) -> i32 {
        self.value.max_value()
    }

    /// Set the maximum progress value, clamped to `>= 1`.
    ///
    /// If the current progress exceeds the new maximum it is lowered first,
    /// firing the progress change callback.
    pub fn set_max_value(&mut self, value: i32) {
        let change = self.value.set_max_value(value);
        self.notify_change(change);
        self.pending |= UpdateFlags::RENDER;
    }

    /// Bar presses set the progress directly.
    pub fn click_to_set_progress(&self) -> bool {
        self.modes.click_to_set_progress
    }

    /// Enable or disable the bar press region.
    ///
    /// When disabled, bar presses are reported unhandled and propagate in
    /// the host.
    pub fn set_click_to_set_progress(&mut self, enabled: bool) {
        self.modes.click_to_set_progress = enabled;
    }

    /// The thumb can be dragged.
    pub fn use_thumb_to_set_progress(&self) -> bool {
        self.modes.use_thumb_to_set_progress
    }

    /// Enable or disable thumb dragging.
    pub fn set_use_thumb_to_set_progress(&mut self, enabled: bool) {
        self.modes.use_thumb_to_set_progress = enabled;
    }

    /// The thumb element is displayed.
    pub fn show_thumb(&self) -> bool {
        self.modes.show_thumb
    }

    /// Show or hide the thumb.
    ///
    /// A hidden thumb does not receive gestures and does not reserve bar
    /// margins.
    pub fn set_show_thumb(&mut self, show: bool) {
        if self.modes.show_thumb != show {
            self.modes.show_thumb = show;
            self.pending |= UpdateFlags::LAYOUT | UpdateFlags::RENDER;
        }
    }

    /// Max placeholder position relative to the bar top edge.
    pub fn max_placeholder_position(&self) -> Placeholder {
        self.max_placeholder_position
    }

    /// Set the max placeholder position.
    pub fn set_max_placeholder_position(&mut self, position: Placeholder) {
        if self.max_placeholder_position != position {
            self.max_placeholder_position = position;
            self.pending |= UpdateFlags::LAYOUT | UpdateFlags::RENDER;
        }
    }

    /// Min placeholder position relative to the bar bottom edge.
    pub fn min_placeholder_position(&self) -> Placeholder {
        self.min_placeholder_position
    }

    /// Set the min placeholder position.
    pub fn set_min_placeholder_position(&mut self, position: Placeholder) {
        if self.min_placeholder_position != position {
            self.min_placeholder_position = position;
            self.pending |= UpdateFlags::LAYOUT | UpdateFlags::RENDER;
        }
    }

    /// Set the progress change callback. The last registration wins.
    pub fn on_progress_change(&mut self, handler: impl FnMut(i32) + Send + 'static) {
        self.progress_change_handler = Some(Box::new(handler));
    }

    /// Remove the progress change callback.
    pub fn clear_on_progress_change(&mut self) {
        self.progress_change_handler = None;
    }

    /// Set the gesture press callback. The last registration wins.
    pub fn on_press(&mut self, handler: impl FnMut(i32) + Send + 'static) {
        self.press_handler = Some(Box::new(handler));
    }

    /// Remove the gesture press callback.
    pub fn clear_on_press(&mut self) {
        self.press_handler = None;
    }

    /// Set the gesture release callback. The last registration wins.
    pub fn on_release(&mut self, handler: impl FnMut(i32) + Send + 'static) {
        self.release_handler = Some(Box::new(handler));
    }

    /// Remove the gesture release callback.
    pub fn clear_on_release(&mut self) {
        self.release_handler = None;
    }

    /// Update the host-measured dimensions.
    ///
    /// Requests a layout update if the metrics changed.
    pub fn measure(&mut self, metrics: LayoutMetrics) {
        if self.metrics != metrics {
            self.metrics = metrics;
            self.pending |= UpdateFlags::LAYOUT | UpdateFlags::RENDER;
        }
    }

    /// Last measured dimensions.
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Drain the pending update flags.
    ///
    /// The host calls this once before each paint and passes the drained
    /// flags to [`layout`] if any is set. Mutations between paints coalesce
    /// into the same flags.
    ///
    /// [`layout`]: VerticalSeekBar::layout
    pub fn take_updates(&mut self) -> UpdateFlags {
        std::mem::take(&mut self.pending)
    }

    /// Run a layout pass over the current state and measurements.
    ///
    /// `updates` are the flags drained by [`take_updates`], the bar margins
    /// are recomputed only when `LAYOUT` is among them, `RENDER`-only passes
    /// reuse the cached margins and recompute just the offsets.
    ///
    /// Returns `None` while the bar has no measured fill extent, in that
    /// case the update stays pending and the next measured pass recomputes.
    ///
    /// [`take_updates`]: VerticalSeekBar::take_updates
    pub fn layout(&mut self, updates: UpdateFlags) -> Option<VisualLayout> {
        let margins = match self.margins {
            Some(m) if !updates.contains(UpdateFlags::LAYOUT) => m,
            _ => {
                let m = BarMargins::measure(
                    self.modes.show_thumb,
                    self.metrics.thumb_height,
                    self.metrics.max_placeholder_height,
                    self.max_placeholder_position,
                    self.metrics.min_placeholder_height,
                    self.min_placeholder_position,
                );
                self.margins = Some(m);
                m
            }
        };
        let visual = update::layout(LayoutRequest {
            metrics: self.metrics,
            margins,
            progress: self.value.progress(),
            max_value: self.value.max_value(),
            show_thumb: self.modes.show_thumb,
        });
        match visual {
            Some(v) => self.visual = Some(v),
            None => self.pending |= UpdateFlags::LAYOUT | UpdateFlags::RENDER,
        }
        visual
    }

    /// Offsets computed by the last successful [`layout`] pass.
    ///
    /// [`layout`]: VerticalSeekBar::layout
    pub fn visual(&self) -> Option<&VisualLayout> {
        self.visual.as_ref()
    }

    /// Process a pointer event dispatched by the host.
    ///
    /// Returns `true` if the event was handled. Events for disabled gesture
    /// regions and events received before the first successful layout are
    /// not handled and must propagate in the host.
    pub fn pointer_event(&mut self, event: PointerEvent) -> bool {
        let Some(visual) = self.visual else {
            tracing::debug!("pointer event before layout, ignored");
            return false;
        };

        let thumb_offset = geometry::thumb_offset(self.value.progress(), visual.fill_height, self.value.max_value());
        let Some(update) = self.gesture.on_pointer(event, self.modes, thumb_offset) else {
            return false;
        };

        if let Some(position_y) = update.apply_position_y {
            let progress = geometry::pointer_to_progress(position_y, visual.fill_height, self.value.max_value());
            self.apply_progress(progress);
        }
        match update.event {
            Some(GestureEvent::Press) => {
                let p = self.value.progress();
                if let Some(h) = &mut self.press_handler {
                    h(p);
                }
            }
            Some(GestureEvent::Release) => {
                let p = self.value.progress();
                if let Some(h) = &mut self.release_handler {
                    h(p);
                }
            }
            None => {}
        }
        true
    }

    /// Is a press/drag gesture active.
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_pressed()
    }

    fn apply_progress(&mut self, value: i32) {
        let change = self.value.set_progress(value);
        self.notify_change(change);
        self.pending |= UpdateFlags::RENDER;
    }

    fn notify_change(&mut self, change: ProgressChange) {
        if let ProgressChange::Changed(new) = change {
            if let Some(h) = &mut self.progress_change_handler {
                h(new);
            }
        }
    }
}
