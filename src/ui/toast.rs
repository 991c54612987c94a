use crate::app::App;
use crate::util::{display_width, sanitize};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 42;
const MAX_VISIBLE: usize = 3;

/// Render the newest toasts stacked in the top-right corner.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    if app.toasts.is_empty() || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let inner_width = TOAST_WIDTH.saturating_sub(2) as usize;
    let mut y = area.y + 1;
    for toast in app.toasts.iter().rev().take(MAX_VISIBLE) {
        let message = sanitize(&toast.message);
        let text_lines = display_width(&message).div_ceil(inner_width).max(1) as u16;
        let height = text_lines + 2;
        if y + height > area.y + area.height {
            break;
        }

        let rect = Rect::new(area.x + area.width - TOAST_WIDTH - 1, y, TOAST_WIDTH, height);
        f.render_widget(Clear, rect);
        let paragraph = Paragraph::new(message.into_owned())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" x to dismiss "),
            )
            .style(app.style(toast.kind.role()));
        f.render_widget(paragraph, rect);
        y += height;
    }
}
