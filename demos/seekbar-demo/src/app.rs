//! Demo state: the widget plus the screen region it was last drawn into.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use vertical_seekbar::gesture::{PointerEvent, PointerPhase, PointerTarget};
use vertical_seekbar::{FactorUnits, LayoutMetrics, Px, VerticalSeekBar, VisualLayout};

/// Thumb height in terminal cells.
pub const THUMB_HEIGHT: i32 = 3;

/// Cycled by the `m` key to demo max value clamping.
const MAX_VALUES: &[i32] = &[100, 50, 10];

pub struct App {
    pub bar: VerticalSeekBar,
    pub visual: Option<VisualLayout>,
    /// Inner screen area of the bar region, set on every draw, maps mouse
    /// coordinates back into widget space.
    pub bar_area: Rect,
    /// Recent callback activity, pushed by the widget callbacks.
    pub log: Arc<Mutex<VecDeque<String>>>,
    pub quit: bool,
}

fn push_log(log: &Arc<Mutex<VecDeque<String>>>, entry: String) {
    let mut log = log.lock().unwrap();
    if log.len() == 16 {
        log.pop_front();
    }
    log.push_back(entry);
}

impl App {
    pub fn new() -> Self {
        let log = Arc::new(Mutex::new(VecDeque::new()));

        let mut bar = VerticalSeekBar::new();
        bar.set_progress(75);
        let l = log.clone();
        bar.on_progress_change(move |p| push_log(&l, format!("change {p}")));
        let l = log.clone();
        bar.on_press(move |p| push_log(&l, format!("press {p}")));
        let l = log.clone();
        bar.on_release(move |p| push_log(&l, format!("release {p}")));

        Self {
            bar,
            visual: None,
            bar_area: Rect::default(),
            log,
            quit: false,
        }
    }

    /// Re-measure against the current bar area and re-layout if anything
    /// is pending. Runs once per frame, before drawing.
    pub fn update(&mut self) {
        self.bar.measure(LayoutMetrics {
            height: Px(self.bar_area.height as i32),
            thumb_height: Px(THUMB_HEIGHT),
            max_placeholder_height: Px(1),
            min_placeholder_height: Px(1),
            // one terminal cell per pixel
            scale_factor: 1.fct(),
        });
        let updates = self.bar.take_updates();
        if !updates.is_empty() {
            if let Some(v) = self.bar.layout(updates) {
                self.visual = Some(v);
            }
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') => {
                let e = !self.bar.click_to_set_progress();
                self.bar.set_click_to_set_progress(e);
            }
            KeyCode::Char('t') => {
                let e = !self.bar.use_thumb_to_set_progress();
                self.bar.set_use_thumb_to_set_progress(e);
            }
            KeyCode::Char('s') => self.bar.set_show_thumb(!self.bar.show_thumb()),
            KeyCode::Char('m') => {
                let current = self.bar.max_value();
                let i = MAX_VALUES.iter().position(|&m| m == current).unwrap_or(0);
                self.bar.set_max_value(MAX_VALUES[(i + 1) % MAX_VALUES.len()]);
            }
            KeyCode::Up => self.bar.set_progress(self.bar.progress() + 5),
            KeyCode::Down => self.bar.set_progress(self.bar.progress() - 5),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let phase = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerPhase::Start,
            MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerPhase::End,
            _ => return,
        };

        let area = self.bar_area;
        let row = mouse.row as i32;
        let in_columns = mouse.column >= area.x && mouse.column < area.x + area.width;
        if phase == PointerPhase::Start && (!in_columns || row < area.y as i32 || row >= (area.y + area.height) as i32) {
            return;
        }

        let Some(visual) = self.visual else { return };

        // widget-space coordinates, one cell per pixel
        let bar_top = area.y as i32 + visual.margins.top.0;
        let position_y = Px(row - bar_top);
        let target = if visual.thumb_visible && self.hits_thumb(row) {
            PointerTarget::Thumb
        } else {
            PointerTarget::Bar
        };

        self.bar.pointer_event(PointerEvent {
            phase,
            target,
            position_y,
            raw_y: Px(row),
        });
    }

    fn hits_thumb(&self, row: i32) -> bool {
        let Some(visual) = &self.visual else { return false };
        let top = self.bar_area.y as i32 + visual.thumb_top_margin.0;
        row >= top && row < top + THUMB_HEIGHT
    }
}
