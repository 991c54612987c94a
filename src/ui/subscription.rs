//! Subscription plans and the payment dialog.

use crate::app::App;
use crate::domain::{BillingPeriod, Plan};
use crate::payment::PaymentMethod;
use crate::views::Checkout;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{fixed_rect, money, panel, spinner};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_period(f, app, chunks[0]);

    if app.plans.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, app.plans.len() as u32); app.plans.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);
    for (i, (plan, rect)) in app.plans.iter().zip(cards.iter()).enumerate() {
        render_plan(f, app, plan, *rect, i == app.subscription.cursor);
    }
}

fn render_period(f: &mut Frame, app: &App, area: Rect) {
    let period = app.subscription.period;
    let option = |label: &'static str, which: BillingPeriod| {
        let role = if period == which {
            "section_active"
        } else {
            "section_inactive"
        };
        Span::styled(format!(" {} ", label), app.style(role))
    };
    let line = Line::from(vec![
        option("Monthly", BillingPeriod::Monthly),
        Span::raw(" "),
        option("Yearly", BillingPeriod::Yearly),
        Span::styled(
            format!("   Current plan: {}   (y to switch billing)", app.current_tier().label()),
            app.style("list_muted"),
        ),
    ]);
    f.render_widget(
        Paragraph::new(line).block(panel(app, " Choose Your Plan ", false)),
        area,
    );
}

fn render_plan(f: &mut Frame, app: &App, plan: &Plan, area: Rect, focused: bool) {
    let period = app.subscription.period;
    let is_current = plan.tier == app.current_tier();

    let mut lines = Vec::new();
    if plan.popular {
        lines.push(Line::from(Span::styled("★ Most Popular", app.style("badge"))));
    }
    lines.push(Line::from(vec![
        Span::styled(money(plan.price(period)), app.style("price")),
        Span::styled(format!(" / {}", period.unit()), app.style("list_muted")),
    ]));
    if period == BillingPeriod::Yearly && plan.yearly_savings() > 0.0 {
        lines.push(Line::from(Span::styled(
            format!("Save {} a year", money(plan.yearly_savings())),
            app.style("open_now"),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(plan.description));
    lines.push(Line::from(""));

    for feature in &plan.features {
        let (mark, role) = if feature.included {
            ("✓", "open_now")
        } else {
            ("✗", "list_muted")
        };
        let mut spans = vec![
            Span::styled(format!("{} ", mark), app.style(role)),
            Span::raw(feature.name),
        ];
        if feature.premium {
            spans.push(Span::styled(" ◆", app.style("badge")));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let footer = if is_current {
        Span::styled("Current Plan", app.style("badge"))
    } else if plan.is_free() {
        Span::styled("Free forever", app.style("list_muted"))
    } else {
        Span::styled("Enter to upgrade", app.style("detail_label"))
    };
    lines.push(Line::from(footer));

    let title = format!(" {} ", plan.name);
    let paragraph = Paragraph::new(lines)
        .block(panel(app, title, focused))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Payment dialog drawn over the plans while a checkout is open.
pub fn render_checkout(f: &mut Frame, app: &App, checkout: &Checkout) {
    let overlay = fixed_rect(56, 12, f.area());
    if overlay.width < 20 || overlay.height < 8 {
        return;
    }
    f.render_widget(Clear, overlay);

    let period = app.subscription.period;
    let method_line = |method: PaymentMethod| {
        let chosen = checkout.method == method;
        let mark = if chosen { "(•)" } else { "( )" };
        let style = if chosen {
            app.style("list_selected")
        } else {
            app.style("detail_body")
        };
        Line::from(Span::styled(format!("  {} {}", mark, method.label()), style))
    };

    let status = if checkout.processing {
        Line::from(Span::styled(
            format!("{} Processing payment...", spinner(app.spinner_frame)),
            app.style("badge"),
        ))
    } else {
        Line::from(Span::styled(
            "p/Tab change method · Enter pay · Esc cancel",
            app.style("list_muted"),
        ))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} plan  ", checkout.plan.name), app.style("list_title")),
            Span::styled(
                format!("{} / {}", money(checkout.plan.price(period)), period.unit()),
                app.style("price"),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Payment method", app.style("detail_label"))),
        method_line(PaymentMethod::Stripe),
        method_line(PaymentMethod::PayPal),
        Line::from(""),
        status,
    ];

    let paragraph = Paragraph::new(lines)
        .block(panel(app, " Checkout ", true))
        .alignment(Alignment::Left)
        .style(app.style("detail_body"));
    f.render_widget(paragraph, overlay);
}
