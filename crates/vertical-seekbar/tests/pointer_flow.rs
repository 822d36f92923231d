//! Full pointer → value → layout flow over the public API.

use std::sync::{Arc, Mutex};

use vertical_seekbar::gesture::{PointerEvent, PointerPhase, PointerTarget};
use vertical_seekbar::{LayoutMetrics, Px, UpdateFlags, VerticalSeekBar};

fn event(phase: PointerPhase, target: PointerTarget, y: i32) -> PointerEvent {
    PointerEvent {
        phase,
        target,
        position_y: Px(y),
        raw_y: Px(y),
    }
}

/// Measure and layout a widget with a 200px fill range (220px total, 20px thumb).
fn measured_bar() -> VerticalSeekBar {
    let mut bar = VerticalSeekBar::new();
    bar.measure(LayoutMetrics::new(Px(220), Px(20)));
    let updates = bar.take_updates();
    assert_eq!(updates, UpdateFlags::LAYOUT | UpdateFlags::RENDER);
    let visual = bar.layout(updates).expect("measured bar must layout");
    assert_eq!(visual.fill_height, Px(200));
    bar
}

#[test]
fn bar_press_sets_progress_and_fires_callbacks() {
    let mut bar = measured_bar();

    let changes = Arc::new(Mutex::new(Vec::new()));
    let presses = Arc::new(Mutex::new(Vec::new()));
    let c = changes.clone();
    bar.on_progress_change(move |p| c.lock().unwrap().push(p));
    let p = presses.clone();
    bar.on_press(move |v| p.lock().unwrap().push(v));

    assert!(bar.pointer_event(event(PointerPhase::Start, PointerTarget::Bar, 10)));

    assert_eq!(bar.progress(), 95);
    assert_eq!(*changes.lock().unwrap(), vec![95]);
    // the press callback observes the already applied value
    assert_eq!(*presses.lock().unwrap(), vec![95]);
}

#[test]
fn thumb_drag_follows_pointer_and_releases() {
    let mut bar = measured_bar();
    bar.set_progress(50);
    let updates = bar.take_updates();
    bar.layout(updates).unwrap();

    let releases = Arc::new(Mutex::new(Vec::new()));
    let r = releases.clone();
    bar.on_release(move |v| r.lock().unwrap().push(v));

    // thumb offset for progress 50 is 100px inside the fill range
    assert!(bar.pointer_event(event(PointerPhase::Start, PointerTarget::Thumb, 300)));
    assert_eq!(bar.progress(), 50, "press alone does not move the thumb");

    // drag 80px up
    assert!(bar.pointer_event(event(PointerPhase::Move, PointerTarget::Thumb, 220)));
    assert_eq!(bar.progress(), 90);

    assert!(bar.pointer_event(event(PointerPhase::End, PointerTarget::Thumb, 220)));
    assert_eq!(*releases.lock().unwrap(), vec![90]);
    assert!(!bar.is_pressed());
}

#[test]
fn lowering_max_value_clamps_progress_with_single_callback() {
    let mut bar = measured_bar();
    bar.set_progress(75);

    let changes = Arc::new(Mutex::new(Vec::new()));
    let c = changes.clone();
    bar.on_progress_change(move |p| c.lock().unwrap().push(p));

    bar.set_max_value(50);

    assert_eq!(bar.max_value(), 50);
    assert_eq!(bar.progress(), 50);
    assert_eq!(*changes.lock().unwrap(), vec![50]);
}

#[test]
fn setting_same_progress_does_not_fire_callback() {
    let mut bar = measured_bar();
    bar.set_progress(75);

    let changes = Arc::new(Mutex::new(Vec::new()));
    let c = changes.clone();
    bar.on_progress_change(move |p| c.lock().unwrap().push(p));

    bar.set_progress(75);
    // clamped duplicate is a no-op too
    bar.set_progress(130);
    bar.set_progress(100);

    assert_eq!(*changes.lock().unwrap(), vec![100]);
    // a visual update is still requested
    assert!(bar.take_updates().contains(UpdateFlags::RENDER));
}

#[test]
fn events_before_layout_pass_through() {
    let mut bar = VerticalSeekBar::new();
    assert!(!bar.pointer_event(event(PointerPhase::Start, PointerTarget::Bar, 10)));
    assert_eq!(bar.progress(), 50);
}

#[test]
fn degenerate_measure_defers_update() {
    let mut bar = VerticalSeekBar::new();
    bar.measure(LayoutMetrics::new(Px(0), Px(20)));
    let updates = bar.take_updates();

    assert_eq!(bar.layout(updates), None);
    // the update stays pending until a real measurement arrives
    let pending = bar.take_updates();
    assert!(pending.contains(UpdateFlags::LAYOUT));

    bar.measure(LayoutMetrics::new(Px(220), Px(20)));
    let updates = pending | bar.take_updates();
    assert!(bar.layout(updates).is_some());
}

#[test]
fn render_only_update_reuses_margins() {
    let mut bar = measured_bar();

    bar.set_progress(25);
    let updates = bar.take_updates();
    // progress changes do not invalidate the margins
    assert_eq!(updates, UpdateFlags::RENDER);
    let visual = bar.layout(updates).unwrap();
    assert_eq!(visual.margins.top, Px(10));
    assert_eq!(visual.thumb_top_margin, Px(150));

    // hiding the thumb requests a layout and the margins follow
    bar.set_show_thumb(false);
    let updates = bar.take_updates();
    assert!(updates.contains(UpdateFlags::LAYOUT));
    let visual = bar.layout(updates).unwrap();
    assert_eq!(visual.margins.top, Px(0));
    assert_eq!(visual.fill_height, Px(220));
    assert!(!visual.thumb_visible);
}

#[test]
fn disabled_click_to_set_ignores_bar_press() {
    let mut bar = measured_bar();
    bar.set_click_to_set_progress(false);

    assert!(!bar.pointer_event(event(PointerPhase::Start, PointerTarget::Bar, 10)));
    assert_eq!(bar.progress(), 50);

    // thumb drag still works
    assert!(bar.pointer_event(event(PointerPhase::Start, PointerTarget::Thumb, 100)));
}

#[test]
fn last_callback_registration_wins() {
    let mut bar = measured_bar();

    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    let f = first.clone();
    bar.on_progress_change(move |p| f.lock().unwrap().push(p));
    let s = second.clone();
    bar.on_progress_change(move |p| s.lock().unwrap().push(p));

    bar.set_progress(10);

    assert!(first.lock().unwrap().is_empty());
    assert_eq!(*second.lock().unwrap(), vec![10]);

    bar.clear_on_progress_change();
    bar.set_progress(20);
    assert_eq!(*second.lock().unwrap(), vec![10]);
}
