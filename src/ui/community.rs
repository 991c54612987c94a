//! Community article with reactions, the paginated comments and the author card.

use crate::app::App;
use crate::domain::Reaction;
use crate::views::{page_tokens, total_pages, PageToken};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::helpers::{bullets, centered_rect, field, fit, heading, panel, row_style};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_article(f, app, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(columns[1]);
    render_comments(f, app, right[0]);
    render_pager(f, app, right[1]);
}

fn reaction_bar<'a>(app: &App, active: Option<Reaction>, keys: [char; 3]) -> Vec<Span<'a>> {
    Reaction::ALL
        .iter()
        .zip(keys)
        .map(|(reaction, key)| {
            let role = if active == Some(*reaction) {
                "reaction_active"
            } else {
                "list_muted"
            };
            Span::styled(format!("[{}] {}  ", key, reaction.label()), app.style(role))
        })
        .collect()
}

fn render_article(f: &mut Frame, app: &App, area: Rect) {
    let article = &app.article;
    let picker = &app.community.article_reaction;

    let mut lines = vec![
        heading(app, article.title),
        Line::from(vec![
            Span::styled("By ", app.style("list_muted")),
            Span::styled(article.author, app.style("list_title")),
            Span::styled("  (a for profile)", app.style("list_muted")),
        ]),
        Line::from(""),
    ];
    for paragraph in &article.paragraphs {
        lines.push(Line::from(*paragraph));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(reaction_bar(app, picker.active(), ['l', 'v', 's'])));
    if let Some(feedback) = picker.feedback() {
        lines.push(Line::from(Span::styled(feedback, app.style("reaction_active"))));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel(app, " Community ", false))
        .wrap(Wrap { trim: false })
        .scroll((app.community.scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_comments(f: &mut Frame, app: &App, area: Rect) {
    let text_width = area.width.saturating_sub(4) as usize;
    let comments = app.visible_comments();

    let items: Vec<ListItem> = if comments.is_empty() {
        vec![ListItem::new(Span::styled("No comments yet", app.style("list_muted")))]
    } else {
        comments
            .iter()
            .enumerate()
            .map(|(i, comment)| {
                let mut header = vec![
                    Span::styled(fit(&comment.author, 30), app.style("list_title")),
                    Span::styled(
                        format!("  {}", fit(&comment.timestamp, 20)),
                        app.style("list_muted"),
                    ),
                ];
                if let Some(reaction) = app.community.comment_reaction(comment.id) {
                    header.push(Span::styled(
                        format!("  {}", reaction.label()),
                        app.style("reaction_active"),
                    ));
                }
                ListItem::new(vec![
                    Line::from(header),
                    Line::from(format!("  {}", fit(&comment.content, text_width))),
                    Line::from(""),
                ])
                .style(row_style(app, i == app.community.cursor))
            })
            .collect()
    };

    let title = format!(" Comments ({}) · L/V/S react ", app.comments.len());
    f.render_widget(List::new(items).block(panel(app, title, true)), area);
}

fn render_pager(f: &mut Frame, app: &App, area: Rect) {
    let total = total_pages(app.comments.len(), app.community.per_page);
    let current = app.community.page;

    let mut spans = vec![Span::styled("◀ p  ", app.style("list_muted"))];
    for token in page_tokens(current, total) {
        match token {
            PageToken::Page(n) if n == current => {
                spans.push(Span::styled(format!(" {} ", n), app.style("page_current")));
            }
            PageToken::Page(n) => spans.push(Span::raw(format!(" {} ", n))),
            PageToken::Ellipsis => spans.push(Span::styled(" … ", app.style("list_muted"))),
        }
    }
    spans.push(Span::styled("  n ▶", app.style("list_muted")));

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(panel(app, "", false)),
        area,
    );
}

/// Author profile card drawn over the article.
pub fn render_author(f: &mut Frame, app: &App) {
    let overlay = centered_rect(60, 70, f.area());
    if overlay.width < 20 || overlay.height < 8 {
        return;
    }
    f.render_widget(Clear, overlay);

    let author = &app.author;
    let mut lines = vec![
        heading(app, author.name),
        Line::from(Span::styled(author.headline, app.style("badge"))),
        Line::from(""),
        Line::from(author.bio),
        Line::from(""),
        field(app, "Location", author.location),
        field(app, "Education", author.education),
        field(app, "Member since", author.joined),
    ];
    lines.extend(bullets(app, "Expertise", &author.expertise));
    lines.extend(bullets(app, "Achievements", &author.achievements));

    let paragraph = Paragraph::new(lines)
        .block(panel(app, " Author (Esc to close) ", true))
        .wrap(Wrap { trim: false })
        .style(app.style("detail_body"));
    f.render_widget(paragraph, overlay);
}
