//! Frame rendering.
//!
//! The bar panel is the "host element tree": it positions the fill, thumb
//! and placeholder cells from the widget's [`VisualLayout`] offsets, one
//! terminal cell per pixel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, THUMB_HEIGHT};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(13), Constraint::Min(30)])
        .split(frame.area());

    draw_seekbar(frame, app, chunks[0]);
    draw_info(frame, app, chunks[1]);
}

fn draw_seekbar(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().title("seekbar").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // the widget region the mouse handler maps back from
    app.bar_area = inner;

    let mut lines = Vec::with_capacity(inner.height as usize);
    for i in 0..inner.height as i32 {
        lines.push(match &app.visual {
            Some(v) => seekbar_row(i, v, inner.height as i32),
            None => Line::raw(""),
        });
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn seekbar_row(row: i32, v: &vertical_seekbar::VisualLayout, height: i32) -> Line<'static> {
    let bar_top = v.margins.top.0;
    let bar_bottom = bar_top + v.fill_height.0;

    let marker = if row == v.margins.max_placeholder_top.0 {
        Span::styled("▲", Style::default().fg(Color::DarkGray))
    } else if row == height - 1 - v.margins.min_placeholder_bottom.0 {
        Span::styled("▼", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(" ")
    };

    let thumb_top = v.thumb_top_margin.0;
    let body = if v.thumb_visible && row >= thumb_top && row < thumb_top + THUMB_HEIGHT {
        Span::styled("▐████▌", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    } else if row >= bar_top && row < bar_bottom {
        if row - bar_top >= v.fill_translation_y.0 {
            Span::styled(" ████ ", Style::default().fg(Color::Blue))
        } else {
            Span::styled(" ░░░░ ", Style::default().fg(Color::DarkGray))
        }
    } else {
        Span::raw("      ")
    };

    Line::from(vec![marker, body])
}

fn draw_info(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    let flag = |on: bool| if on { "on" } else { "off" };
    let state = vec![
        Line::from(vec![
            Span::raw("progress  "),
            Span::styled(
                format!("{} / {}", app.bar.progress(), app.bar.max_value()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(format!("[c] click to set progress: {}", flag(app.bar.click_to_set_progress()))),
        Line::raw(format!("[t] use thumb to set progress: {}", flag(app.bar.use_thumb_to_set_progress()))),
        Line::raw(format!("[s] show thumb: {}", flag(app.bar.show_thumb()))),
        Line::raw("[m] cycle max value"),
        Line::raw("[↑/↓] nudge progress, [q] quit"),
    ];
    frame.render_widget(
        Paragraph::new(state).block(Block::default().title("state").borders(Borders::ALL)),
        chunks[0],
    );

    let log = app.log.lock().unwrap();
    let events: Vec<Line> = log.iter().rev().map(|e| Line::raw(e.clone())).collect();
    frame.render_widget(
        Paragraph::new(events).block(Block::default().title("callbacks").borders(Borders::ALL)),
        chunks[1],
    );
}
