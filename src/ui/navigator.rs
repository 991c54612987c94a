//! Street navigator: route form with suggestions, results and route detail.

use crate::app::{suggestion_at, App, Suggestion, SUGGESTION_COUNT};
use crate::domain::Route;
use crate::views::NavField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::helpers::{bullets, field, fit, heading, panel, row_style, spinner};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(columns[0]);
    render_form(f, app, left[0]);
    render_suggestions(f, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(columns[1]);
    render_routes(f, app, right[0]);
    render_route_detail(f, app, right[1]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let nav = &app.navigator;
    let input_line = |label: &'static str, value: &str, which: NavField| {
        let active = nav.editing && nav.field == which;
        let style = if active {
            app.style("input_active")
        } else {
            app.style("detail_body")
        };
        let cursor = if active { "_" } else { "" };
        Line::from(vec![
            Span::styled(label, app.style("detail_label")),
            Span::styled(format!("{}{}", fit(value, 40), cursor), style),
        ])
    };

    let action = if nav.searching {
        Line::from(Span::styled(
            format!("{} Finding routes...", spinner(app.spinner_frame)),
            app.style("badge"),
        ))
    } else {
        Line::from(Span::styled(
            "g search · m mode · / edit",
            app.style("list_muted"),
        ))
    };

    let lines = vec![
        input_line("From: ", &nav.from, NavField::From),
        input_line("To:   ", &nav.to, NavField::To),
        field(app, "Mode", nav.mode.label()),
        Line::from(""),
        action,
    ];
    let block = panel(app, " Plan a Route ", nav.editing);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = (0..SUGGESTION_COUNT)
        .filter_map(|i| suggestion_at(i).map(|s| (i, s)))
        .map(|(i, suggestion)| {
            let text = match suggestion {
                Suggestion::Landmark(name) => format!("📍 {}", name),
                Suggestion::Popular(route) => format!(
                    "⇄ {} → {} ({} users)",
                    route.from, route.to, route.users
                ),
            };
            ListItem::new(text).style(row_style(app, i == app.navigator.suggestion))
        })
        .collect();

    let list = List::new(items).block(panel(
        app,
        " Landmarks & Popular Routes (n/N, a to use) ",
        false,
    ));
    f.render_widget(list, area);
}

fn render_routes(f: &mut Frame, app: &App, area: Rect) {
    let nav = &app.navigator;
    let selected_id = nav.selected.id();

    let items: Vec<ListItem> = if nav.routes.is_empty() {
        vec![ListItem::new(Span::styled(
            "Enter a start and destination to find routes",
            app.style("list_muted"),
        ))]
    } else {
        nav.routes
            .iter()
            .enumerate()
            .map(|(i, route)| {
                let marker = if Some(&route.id) == selected_id { "● " } else { "  " };
                let line = Line::from(vec![
                    Span::raw(marker),
                    Span::styled(route.name.clone(), app.style("list_title")),
                    Span::styled(
                        format!("  {} min · {}", route.duration_minutes, route.distance),
                        app.style("list_muted"),
                    ),
                ]);
                ListItem::new(line).style(row_style(app, i == nav.cursor))
            })
            .collect()
    };

    let list = List::new(items).block(panel(app, " Routes ", !nav.routes.is_empty()));
    f.render_widget(list, area);
}

fn render_route_detail(f: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, " Route Details ", false);
    let Some(route) = app.navigator.selected_route() else {
        f.render_widget(block, area);
        return;
    };
    f.render_widget(
        Paragraph::new(route_lines(app, route))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn route_lines<'a>(app: &App, route: &'a Route) -> Vec<Line<'a>> {
    let mut lines = vec![
        heading(app, route.name.as_str()),
        field(app, "From", route.from.as_str()),
        field(app, "To", route.to.as_str()),
        field(app, "Mode", route.mode.label()),
        field(
            app,
            "Duration",
            format!("{} min ({})", route.duration_minutes, route.distance),
        ),
        field(app, "Safety", format!("{:.1} / 5", route.safety_rating)),
    ];
    if !route.steps.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading(app, "Directions"));
        lines.extend(
            route
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| Line::from(format!("  {}. {}", i + 1, step))),
        );
    }
    lines.extend(bullets(app, "Landmarks", &route.landmarks));
    lines
}
