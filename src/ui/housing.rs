//! Housing screen: filter bar, listing list and listing detail.

use crate::app::App;
use crate::domain::Listing;
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

    let detail = app.detail_listing();
    let (list_area, detail_area) = list_and_detail(chunks[1], detail.is_some());
    render_list(f, app, list_area);
    if let (Some(listing), Some(rect)) = (detail, detail_area) {
        render_detail(f, app, listing, rect);
    }
}

fn render_filters(f: &mut Frame, app: &App, area: Rect) {
    let filter = &app.housing.filter;
    let search_style = if app.housing.editing {
        app.style("input_active")
    } else {
        app.style("detail_body")
    };
    let cursor = if app.housing.editing { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled("Search: ", app.style("detail_label")),
        Span::styled(format!("{}{}", filter.search, cursor), search_style),
        Span::styled("   Price: ", app.style("detail_label")),
        Span::styled(
            format!("${} - ${}", filter.min_price, filter.max_price),
            app.style("price"),
        ),
        Span::styled("   Rooms: ", app.style("detail_label")),
        Span::raw(filter.rooms.label()),
    ]);

    let block = panel(app, " Filters ", app.housing.editing);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let listings = app.filtered_listings();
    let state = app.state();
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = if listings.is_empty() {
        let msg = if state.loading {
            "Loading listings..."
        } else if state.listings.is_empty() {
            "No listings for this city"
        } else {
            "No listings match your filters"
        };
        vec![ListItem::new(Span::styled(msg, app.style("list_muted")))]
    } else {
        listings
            .iter()
            .enumerate()
            .map(|(i, listing)| {
                let selected = i == app.housing.cursor;
                let marker = if app.housing.favorites.contains(&listing.id) {
                    Span::styled("♥ ", app.style("favorite"))
                } else {
                    Span::raw("  ")
                };
                let title = Line::from(vec![
                    marker,
                    Span::styled(fit(&listing.title, text_width), app.style("list_title")),
                ]);
                let meta = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("${}/mo", listing.price), app.style("price")),
                    Span::styled(
                        format!(
                            "  {}  {} bd  {} ba  ",
                            fit(&listing.location, 24),
                            listing.rooms,
                            listing.bathrooms
                        ),
                        app.style("list_muted"),
                    ),
                    Span::styled(rating(listing.rating), app.style("rating")),
                ]);
                ListItem::new(vec![title, meta]).style(row_style(app, selected))
            })
            .collect()
    };

    let title = format!(
        " Housing in {} ({}/{}) ",
        state.current_city,
        listings.len(),
        state.listings.len()
    );
    let list = List::new(items).block(panel(app, title, !app.housing.detail.is_open()));
    f.render_widget(list, area);
}

fn render_detail(f: &mut Frame, app: &App, listing: &Listing, area: Rect) {
    let mut lines = vec![
        heading(app, fit(&listing.title, area.width as usize)),
        Line::from(""),
        field(app, "Rent", format!("${} / month", listing.price)),
        field(app, "Location", fit(&listing.location, 60)),
        field(
            app,
            "Size",
            format!(
                "{} rooms, {} bathrooms, {} sq ft",
                listing.rooms, listing.bathrooms, listing.area
            ),
        ),
        field(
            app,
            "Rating",
            format!("{} ({} reviews)", rating(listing.rating), listing.reviews),
        ),
    ];
    if listing.virtual_tour {
        lines.push(Line::from(Span::styled(
            "Virtual tour available",
            app.style("badge"),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(fit(&listing.description, 2000)));
    lines.extend(bullets(app, "Features", &listing.features));

    let landlord = &listing.landlord;
    lines.push(Line::from(""));
    lines.push(heading(app, "Landlord"));
    lines.push(field(
        app,
        "Name",
        format!("{} {}", fit(&landlord.name, 40), rating(landlord.rating)),
    ));
    lines.push(field(app, "Phone", fit(&landlord.phone, 40)));
    lines.push(field(app, "Email", fit(&landlord.email, 60)));

    if !listing.images.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} photos", listing.images.len()),
            app.style("list_muted"),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel(app, " Details (Esc to close) ", true))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
