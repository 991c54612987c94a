//! Local shops screen: directory filters, shop list and shop detail.

use crate::app::App;
use crate::domain::{is_closed_text, weekday_name, Shop};
use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::helpers::{bullets, field, fit, heading, list_and_detail, panel, rating, row_style};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filters(f, app, chunks[0]);

    let detail = app.detail_shop();
    let (list_area, detail_area) = list_and_detail(chunks[1], detail.is_some());
    render_list(f, app, list_area);
    if let (Some(shop), Some(rect)) = (detail, detail_area) {
        render_detail(f, app, shop, rect);
    }
}

fn render_filters(f: &mut Frame, app: &App, area: Rect) {
    let filter = &app.shops.filter;
    let search_style = if app.shops.editing {
        app.style("input_active")
    } else {
        app.style("detail_body")
    };
    let cursor = if app.shops.editing { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled("Search: ", app.style("detail_label")),
        Span::styled(format!("{}{}", filter.search, cursor), search_style),
        Span::styled("   Category: ", app.style("detail_label")),
        Span::raw(filter.category.map_or("All", |c| c.label())),
        Span::styled("   Price: ", app.style("detail_label")),
        Span::styled(filter.price.map_or("Any", |p| p.symbol()), app.style("price")),
        Span::styled("   Sort: ", app.style("detail_label")),
        Span::raw(filter.sort.label()),
    ]);

    let block = panel(app, " Filters ", app.shops.editing);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let shops = app.filtered_shops();
    let state = app.state();
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = if shops.is_empty() {
        let msg = if state.loading {
            "Loading shops..."
        } else {
            "No shops match your filters"
        };
        vec![ListItem::new(Span::styled(msg, app.style("list_muted")))]
    } else {
        shops
            .iter()
            .enumerate()
            .map(|(i, shop)| {
                let marker = if app.shops.favorites.contains(&shop.id) {
                    Span::styled("♥ ", app.style("favorite"))
                } else {
                    Span::raw("  ")
                };
                let (open_text, open_role) = if shop.is_open {
                    ("Open", "open_now")
                } else {
                    ("Closed", "closed")
                };
                let title = Line::from(vec![
                    marker,
                    Span::styled(fit(&shop.name, text_width), app.style("list_title")),
                ]);
                let meta = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(shop.category.label(), app.style("badge")),
                    Span::styled(format!("  {}  ", shop.price.symbol()), app.style("price")),
                    Span::styled(rating(shop.rating), app.style("rating")),
                    Span::styled(
                        format!("  {}  ", fit(&shop.distance, 16)),
                        app.style("list_muted"),
                    ),
                    Span::styled(open_text, app.style(open_role)),
                ]);
                ListItem::new(vec![title, meta]).style(row_style(app, i == app.shops.cursor))
            })
            .collect()
    };

    let title = format!(" Local Shops ({}/{}) ", shops.len(), state.shops.len());
    let list = List::new(items).block(panel(app, title, !app.shops.detail.is_open()));
    f.render_widget(list, area);
}

fn render_detail(f: &mut Frame, app: &App, shop: &Shop, area: Rect) {
    let today = chrono::Local::now().weekday();

    let mut lines = vec![
        heading(app, fit(&shop.name, area.width as usize)),
        Line::from(Span::styled(
            format!("{} · {}", shop.category.label(), fit(&shop.subcategory, 40)),
            app.style("badge"),
        )),
        Line::from(""),
        field(app, "Address", fit(&shop.address, 80)),
        field(app, "Distance", fit(&shop.distance, 20)),
        field(
            app,
            "Rating",
            format!("{} ({} reviews)", rating(shop.rating), shop.reviews),
        ),
        field(app, "Price", shop.price.symbol()),
        Line::from(""),
        Line::from(fit(&shop.description, 2000)),
    ];

    if !shop.hours.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading(app, "Hours"));
        for (day, hours) in shop.week_hours() {
            let role = if is_closed_text(hours) {
                "closed"
            } else if day == today {
                "open_now"
            } else {
                "detail_body"
            };
            let marker = if day == today { "▸" } else { " " };
            lines.push(Line::from(Span::styled(
                format!("{} {:<10} {}", marker, weekday_name(day), fit(hours, 30)),
                app.style(role),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading(app, "Contact"));
    lines.push(field(app, "Phone", fit(&shop.contact.phone, 40)));
    lines.push(field(app, "Email", fit(&shop.contact.email, 60)));
    if let Some(website) = &shop.contact.website {
        lines.push(field(app, "Website", format!("{} (o to open)", fit(website, 60))));
    }

    lines.extend(bullets(app, "Features", &shop.features));
    lines.extend(bullets(app, "Deals", &shop.deals));

    let paragraph = Paragraph::new(lines)
        .block(panel(app, " Details (Esc to close) ", true))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
