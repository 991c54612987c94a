use crate::app::App;
use crate::views::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Borders, Paragraph, Tabs},
    Frame,
};

use super::helpers::{panel, spinner};

/// Render the header: section tabs on the left, city and user on the right.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let block = panel(app, " cityguide ", false)
        .borders(Borders::BOTTOM)
        .title_style(app.style("header_title"));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(inner);

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.label())))
        .collect();
    let selected = Section::ALL
        .iter()
        .position(|s| *s == app.section)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.style("section_inactive"))
        .highlight_style(app.style("section_active"))
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    let state = app.state();
    let mut spans = Vec::new();
    if state.loading {
        spans.push(Span::styled(
            format!("{} ", spinner(app.spinner_frame)),
            app.style("badge"),
        ));
    }
    spans.push(Span::styled(
        format!("📍 {}", state.current_city),
        app.style("list_title"),
    ));
    let user = match &state.user {
        Some(user) => format!("  {} ({})", user.name, user.subscription_tier.label()),
        None => "  Guest".to_string(),
    };
    spans.push(Span::styled(user, app.style("list_muted")));

    let info = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Right);
    f.render_widget(info, chunks[1]);
}
