//! Render functions for the TUI.
//!
//! Draws the header, the active section and the status bar, then any
//! overlays on top.

use crate::app::App;
use crate::views::Section;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use super::{community, header, help, housing, navigator, shops, status, subscription, toast};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 80;
pub(super) const MIN_HEIGHT: u16 = 20;

/// Main render dispatch function.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(f, app, chunks[0]);
    match app.section {
        Section::Housing => housing::render(f, app, chunks[1]),
        Section::Navigator => navigator::render(f, app, chunks[1]),
        Section::Shops => shops::render(f, app, chunks[1]),
        Section::Subscription => subscription::render(f, app, chunks[1]),
        Section::Community => community::render(f, app, chunks[1]),
    }
    status::render(f, app, chunks[2]);

    match app.section {
        Section::Subscription => {
            if let Some(checkout) = &app.subscription.checkout {
                subscription::render_checkout(f, app, checkout);
            }
        }
        Section::Community if app.community.show_author => community::render_author(f, app),
        _ => {}
    }

    toast::render(f, app);

    if app.show_help {
        help::render(f, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;
    use crate::catalog::Catalog;
    use crate::storage::Database;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;
    use tokio::sync::mpsc;

    async fn test_app() -> (App, mpsc::Receiver<AppEvent>) {
        let db = Database::open(":memory:").await.unwrap();
        let (tx, rx) = mpsc::channel(16);
        (App::new(db, Catalog::mock(Duration::ZERO), tx), rx)
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[tokio::test]
    async fn test_too_small_terminal_shows_notice() {
        let (app, _rx) = test_app().await;
        let screen = draw(&app, 40, 10);
        assert!(screen.contains("Terminal too small"));
    }

    #[tokio::test]
    async fn test_every_section_renders() {
        let (mut app, _rx) = test_app().await;
        for section in Section::ALL {
            app.switch_section(section);
            let screen = draw(&app, 120, 40);
            assert!(screen.contains(section.label()), "{:?} header missing", section);
        }
    }

    #[tokio::test]
    async fn test_help_overlay_lists_contexts() {
        let (mut app, _rx) = test_app().await;
        app.show_help = true;
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("-- Global --"));
    }
}
