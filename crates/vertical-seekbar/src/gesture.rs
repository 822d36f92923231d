//! Pointer gesture interpretation.
//!
//! The host dispatches pointer events per hit region (bar or thumb), the
//! controller tracks the drag session and reports what the widget must do:
//! map a position to progress, fire the press/release callback, or ignore
//! the event entirely so it can propagate in the host.

use serde::{Deserialize, Serialize};
use zng_unit::Px;

/// Phase of a pointer contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Pointer pressed down.
    Start,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    End,
    /// The host cancelled tracking for the contact.
    Cancel,
}

/// Widget region hit by a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The draggable thumb element.
    Thumb,
    /// The bar, outside the thumb.
    Bar,
}

/// A pointer event dispatched to the widget.
///
/// Only the press `target` starts a gesture, move and release events are
/// routed by the active drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Contact phase.
    pub phase: PointerPhase,
    /// Hit region.
    pub target: PointerTarget,
    /// Y position relative to the bar top edge.
    pub position_y: Px,
    /// Y position in the host window, stable across widget relayouts,
    /// used to compute drag deltas.
    pub raw_y: Px,
}

/// Gesture regions enabled in the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureModes {
    /// Bar presses set the progress directly.
    pub click_to_set_progress: bool,
    /// The thumb can be dragged.
    pub use_thumb_to_set_progress: bool,
    /// The thumb element is visible at all.
    pub show_thumb: bool,
}
impl Default for GestureModes {
    fn default() -> Self {
        Self {
            click_to_set_progress: true,
            use_thumb_to_set_progress: true,
            show_thumb: true,
        }
    }
}

/// Callback the widget must fire after processing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureEvent {
    Press,
    Release,
}

/// What the widget must do with a handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct GestureUpdate {
    /// Feed this position through the pointer→progress mapping.
    pub apply_position_y: Option<Px>,
    /// Fire this callback, after applying the position.
    pub event: Option<GestureEvent>,
}

/// Active drag session.
///
/// `y_delta` is the offset between the raw pointer position and the thumb
/// offset at press time, captured once so the thumb does not jump under
/// the finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Pressed { target: PointerTarget, y_delta: Px },
}

/// Press/move/release state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GestureController {
    state: DragState,
}
impl Default for GestureController {
    fn default() -> Self {
        Self { state: DragState::Idle }
    }
}
impl GestureController {
    /// Process a pointer event.
    ///
    /// `thumb_offset` is the current thumb top offset inside the fill range.
    /// Returns `None` when the event's region is disabled and must pass
    /// through the widget unhandled.
    pub(crate) fn on_pointer(
        &mut self,
        event: PointerEvent,
        modes: GestureModes,
        thumb_offset: Px,
    ) -> Option<GestureUpdate> {
        match event.phase {
            PointerPhase::Start => match event.target {
                PointerTarget::Thumb => {
                    if !modes.use_thumb_to_set_progress || !modes.show_thumb {
                        return None;
                    }
                    self.state = DragState::Pressed {
                        target: PointerTarget::Thumb,
                        y_delta: event.raw_y - thumb_offset,
                    };
                    tracing::trace!("thumb drag started");
                    Some(GestureUpdate {
                        apply_position_y: None,
                        event: Some(GestureEvent::Press),
                    })
                }
                PointerTarget::Bar => {
                    if !modes.click_to_set_progress {
                        return None;
                    }
                    self.state = DragState::Pressed {
                        target: PointerTarget::Bar,
                        y_delta: Px(0),
                    };
                    tracing::trace!("bar press started");
                    // bar presses apply the value immediately
                    Some(GestureUpdate {
                        apply_position_y: Some(event.position_y),
                        event: Some(GestureEvent::Press),
                    })
                }
            },
            PointerPhase::Move => match self.state {
                DragState::Pressed {
                    target: PointerTarget::Thumb,
                    y_delta,
                } => Some(GestureUpdate {
                    apply_position_y: Some(event.raw_y - y_delta),
                    event: None,
                }),
                DragState::Pressed {
                    target: PointerTarget::Bar,
                    ..
                } => Some(GestureUpdate {
                    // a bar press only tracks the pointer when thumb dragging
                    // is also enabled
                    apply_position_y: modes.use_thumb_to_set_progress.then_some(event.position_y),
                    event: None,
                }),
                DragState::Idle => None,
            },
            PointerPhase::End => match self.state {
                DragState::Pressed { .. } => {
                    self.state = DragState::Idle;
                    Some(GestureUpdate {
                        apply_position_y: None,
                        event: Some(GestureEvent::Release),
                    })
                }
                DragState::Idle => None,
            },
            PointerPhase::Cancel => match self.state {
                DragState::Pressed { .. } => {
                    self.state = DragState::Idle;
                    tracing::trace!("drag cancelled");
                    Some(GestureUpdate::default())
                }
                DragState::Idle => None,
            },
        }
    }

    /// Is a drag session active.
    pub(crate) fn is_pressed(&self) -> bool {
        matches!(self.state, DragState::Pressed { .. })
    }
}
