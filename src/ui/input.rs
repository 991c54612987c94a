//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry for the current
//! context (section, text input or payment dialog) and dispatched to `App`.

use crate::app::App;
use crate::domain::Reaction;
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::views::Section;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Help overlay captures all keys when visible
    if app.show_help {
        handle_help_input(app, code);
        return Action::Continue;
    }

    let context = app.key_context();
    let action = app.keybindings.action_for_key(code, modifiers, context);

    if context == KbContext::Input {
        handle_text_input(app, code, modifiers, action);
        return Action::Continue;
    }

    match action {
        Some(action) => dispatch(app, action),
        None => Action::Continue,
    }
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
}

/// Handle input while a text field has focus.
///
/// Bound keys (Esc, Enter, Tab) act on the field; printable characters are
/// typed into it.
fn handle_text_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Option<KbAction>,
) {
    match action {
        Some(KbAction::Back) => app.cancel_editing(),
        Some(KbAction::Select) => app.finish_editing(),
        Some(KbAction::SwitchField) => app.switch_field(),
        _ => match code {
            KeyCode::Backspace => app.input_backspace(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.input_char(c),
            _ => {}
        },
    }
}

fn dispatch(app: &mut App, action: KbAction) -> Action {
    match action {
        KbAction::Quit => return Action::Quit,

        // Navigation
        KbAction::NavDown => app.nav_down(),
        KbAction::NavUp => app.nav_up(),
        KbAction::NextSection => app.switch_section(app.section.next()),
        KbAction::PrevSection => app.switch_section(app.section.prev()),
        KbAction::GoHousing => app.switch_section(Section::Housing),
        KbAction::GoNavigator => app.switch_section(Section::Navigator),
        KbAction::GoShops => app.switch_section(Section::Shops),
        KbAction::GoSubscription => app.switch_section(Section::Subscription),
        KbAction::GoCommunity => app.switch_section(Section::Community),
        KbAction::Select => app.select(),
        KbAction::Back => {
            app.back();
        }

        // Global
        KbAction::NextCity => app.cycle_city(true),
        KbAction::PrevCity => app.cycle_city(false),
        KbAction::Reload => app.reload(),
        KbAction::DismissToast => {
            app.dismiss_latest();
        }
        KbAction::ToggleUser => app.toggle_user(),
        KbAction::CycleTheme => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KbAction::ShowHelp => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        KbAction::EnterSearch => app.start_editing(),
        KbAction::SwitchField => app.switch_field(),
        KbAction::ToggleFavorite => app.toggle_favorite(),

        // Housing
        KbAction::CycleRooms => app.cycle_rooms(),
        KbAction::RaiseMin => app.adjust_price(true, true),
        KbAction::LowerMin => app.adjust_price(false, true),
        KbAction::RaiseMax => app.adjust_price(true, false),
        KbAction::LowerMax => app.adjust_price(false, false),
        KbAction::ResetFilters => app.reset_filters(),

        // Shops
        KbAction::CycleCategory => app.cycle_category(),
        KbAction::CyclePrice => app.cycle_price(),
        KbAction::CycleSort => app.cycle_sort(),
        KbAction::OpenWebsite => app.open_shop_website(),

        // Navigator
        KbAction::CycleTransport => app.cycle_transport(),
        KbAction::SearchRoutes => app.search_routes(),
        KbAction::NextSuggestion => app.next_suggestion(),
        KbAction::PrevSuggestion => app.prev_suggestion(),
        KbAction::UseSuggestion => app.use_suggestion(),

        // Subscription
        KbAction::TogglePeriod => app.toggle_period(),
        KbAction::TogglePaymentMethod => app.toggle_payment_method(),
        KbAction::ConfirmPayment => app.confirm_payment(),

        // Community
        KbAction::ReactLike => app.react_to_article(Reaction::Like),
        KbAction::ReactLove => app.react_to_article(Reaction::Love),
        KbAction::ReactSmile => app.react_to_article(Reaction::Smile),
        KbAction::CommentLike => app.react_to_comment(Reaction::Like),
        KbAction::CommentLove => app.react_to_comment(Reaction::Love),
        KbAction::CommentSmile => app.react_to_comment(Reaction::Smile),
        KbAction::NextPage => app.next_comment_page(),
        KbAction::PrevPage => app.prev_comment_page(),
        KbAction::ScrollDown => app.scroll_article(true),
        KbAction::ScrollUp => app.scroll_article(false),
        KbAction::ShowAuthor => app.toggle_author(),
    }
    Action::Continue
}
