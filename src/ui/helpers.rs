//! Shared drawing helpers for the section screens.

use crate::app::App;
use crate::util::{sanitize, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};
use std::borrow::Cow;

/// Braille spinner, one frame per tick.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub(super) fn spinner(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// Bordered block whose border follows the focus state.
pub(super) fn panel<'a>(app: &App, title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
    let role = if focused {
        "panel_border_focused"
    } else {
        "panel_border"
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.style(role))
        .title(title)
}

/// Split `area` into a list and, when `detail_open`, a detail pane on the right.
pub(super) fn list_and_detail(area: Rect, detail_open: bool) -> (Rect, Option<Rect>) {
    if !detail_open {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

/// Create a centered rectangle with the given percentage of the parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    fixed_rect(width, height, area)
}

/// Centered rectangle of at most `width` x `height`.
pub(super) fn fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Catalog text is external input; strip escapes and fit it to `width` columns.
pub(super) fn fit(text: &str, width: usize) -> String {
    let clean = sanitize(text);
    truncate_to_width(&clean, width).into_owned()
}

pub(super) fn rating(value: f64) -> String {
    format!("★ {:.1}", value)
}

pub(super) fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// "Label: value" line for detail panes.
pub(super) fn field<'a>(app: &App, label: &'a str, value: impl Into<Cow<'a, str>>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), app.style("detail_label")),
        Span::styled(value.into(), app.style("detail_body")),
    ])
}

pub(super) fn heading<'a>(app: &App, text: impl Into<Cow<'a, str>>) -> Line<'a> {
    Line::from(Span::styled(text.into(), app.style("detail_heading")))
}

/// Bulleted list under a heading; omitted entirely when `items` is empty.
pub(super) fn bullets<'a, I, S>(app: &App, title: &'a str, items: I) -> Vec<Line<'a>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let body: Vec<Line<'a>> = items
        .into_iter()
        .map(|item| Line::from(format!("  • {}", sanitize(item.as_ref()))))
        .collect();
    if body.is_empty() {
        return body;
    }
    let mut lines = vec![Line::from(""), heading(app, title)];
    lines.extend(body);
    lines
}

/// Style for a list row under (or away from) the cursor.
pub(super) fn row_style(app: &App, selected: bool) -> Style {
    if selected {
        app.style("list_selected")
    } else {
        Style::default()
    }
}
