use crate::app::App;
use crate::keybindings::Context;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let state = app.state();
    let (text, role): (Cow<'_, str>, &str) = if let Some((msg, _)) = &app.status_message {
        (Cow::Borrowed(msg.as_ref()), "status_bar")
    } else if let Some(err) = &state.last_error {
        (Cow::Owned(format!("⚠ {}  (r retry, x dismiss)", err)), "error")
    } else {
        (Cow::Borrowed(hints(app.key_context())), "status_bar")
    };

    let paragraph = Paragraph::new(Span::raw(text)).style(app.style(role));
    f.render_widget(paragraph, area);
}

/// Static keybinding hints for the current context.
fn hints(context: Context) -> &'static str {
    match context {
        Context::Input => "Type to edit | Tab switch field | Enter confirm | Esc cancel",
        Context::Checkout => "p/Tab method | Enter pay | Esc cancel",
        Context::Housing => {
            "[/]search [n]rooms [h/l]min [H/L]max [c]lear [f]av [ ] ]city [?]help [q]uit"
        }
        Context::Shops => {
            "[/]search [c]ategory [p]rice [s]ort [o]pen site [f]av [?]help [q]uit"
        }
        Context::Navigator => "[/]edit [m]ode [g]o [n/N]suggest [a]pply [?]help [q]uit",
        Context::Subscription => "[Enter]choose [y]early/monthly [u]ser [?]help [q]uit",
        Context::Community => {
            "[l/v/s]react [L/V/S]comment [n/p]page [J/K]scroll [a]uthor [?]help [q]uit"
        }
        Context::Global => "[Tab]section [?]help [q]uit",
    }
}
