//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Every screen dispatches through this registry instead of matching raw key
//! codes, so users can rebind any action from config.toml or the preference
//! table.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    NextSection,
    PrevSection,
    GoHousing,
    GoNavigator,
    GoShops,
    GoSubscription,
    GoCommunity,
    Select,
    Back,
    NextCity,
    PrevCity,
    Reload,
    DismissToast,
    ToggleUser,
    CycleTheme,
    ShowHelp,
    EnterSearch,
    SwitchField,
    ToggleFavorite,
    CycleRooms,
    RaiseMin,
    LowerMin,
    RaiseMax,
    LowerMax,
    ResetFilters,
    CycleCategory,
    CyclePrice,
    CycleSort,
    OpenWebsite,
    CycleTransport,
    SearchRoutes,
    NextSuggestion,
    PrevSuggestion,
    UseSuggestion,
    TogglePeriod,
    TogglePaymentMethod,
    ConfirmPayment,
    ReactLike,
    ReactLove,
    ReactSmile,
    CommentLike,
    CommentLove,
    CommentSmile,
    NextPage,
    PrevPage,
    ScrollDown,
    ScrollUp,
    ShowAuthor,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Navigate down",
            Self::NavUp => "Navigate up",
            Self::NextSection => "Next section",
            Self::PrevSection => "Previous section",
            Self::GoHousing => "Go to housing",
            Self::GoNavigator => "Go to navigator",
            Self::GoShops => "Go to local shops",
            Self::GoSubscription => "Go to subscription",
            Self::GoCommunity => "Go to community",
            Self::Select => "Select / open details",
            Self::Back => "Go back / close",
            Self::NextCity => "Next city",
            Self::PrevCity => "Previous city",
            Self::Reload => "Reload city data",
            Self::DismissToast => "Dismiss notification",
            Self::ToggleUser => "Sign in / sign out demo user",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
            Self::EnterSearch => "Edit search",
            Self::SwitchField => "Switch input field",
            Self::ToggleFavorite => "Toggle favorite",
            Self::CycleRooms => "Cycle room filter",
            Self::RaiseMin => "Raise minimum rent",
            Self::LowerMin => "Lower minimum rent",
            Self::RaiseMax => "Raise maximum rent",
            Self::LowerMax => "Lower maximum rent",
            Self::ResetFilters => "Reset filters",
            Self::CycleCategory => "Cycle category",
            Self::CyclePrice => "Cycle price range",
            Self::CycleSort => "Cycle sort order",
            Self::OpenWebsite => "Open shop website",
            Self::CycleTransport => "Cycle transport mode",
            Self::SearchRoutes => "Find routes",
            Self::NextSuggestion => "Next suggestion",
            Self::PrevSuggestion => "Previous suggestion",
            Self::UseSuggestion => "Use suggestion",
            Self::TogglePeriod => "Toggle monthly / yearly",
            Self::TogglePaymentMethod => "Switch payment method",
            Self::ConfirmPayment => "Confirm payment",
            Self::ReactLike => "Like article",
            Self::ReactLove => "Love article",
            Self::ReactSmile => "Smile at article",
            Self::CommentLike => "Like comment",
            Self::CommentLove => "Love comment",
            Self::CommentSmile => "Smile at comment",
            Self::NextPage => "Next comment page",
            Self::PrevPage => "Previous comment page",
            Self::ScrollDown => "Scroll article down",
            Self::ScrollUp => "Scroll article up",
            Self::ShowAuthor => "Show author profile",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context: determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Housing,
    Navigator,
    Shops,
    Subscription,
    Community,
    /// A text field has focus.
    Input,
    /// The payment dialog is open.
    Checkout,
}

impl Context {
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Housing => "Housing",
            Self::Navigator => "Navigator",
            Self::Shops => "Local Shops",
            Self::Subscription => "Subscription",
            Self::Community => "Community",
            Self::Input => "Text input",
            Self::Checkout => "Payment",
        }
    }
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "BackTab", "Up", "Down", "Left", "Right"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeySpec::ctrl(c)),
            _ => None,
        };
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "backtab" | "shift+tab" => return Some(KeySpec::plain(KeyCode::BackTab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::ch(' ')),
        _ => {}
    }

    // Function keys
    if let Some(n) = s
        .strip_prefix(['F', 'f'])
        .and_then(|rest| rest.parse::<u8>().ok())
    {
        return (1..=12)
            .contains(&n)
            .then(|| KeySpec::plain(KeyCode::F(n)));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::ch(c)),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
pub fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts; lookups
/// fall back to [`Context::Global`].
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings in registration order, for the help screen.
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn bind_all(&mut self, context: Context, pairs: &[(KeySpec, Action)]) {
        for &(key, action) in pairs {
            self.bind(context, key, action);
        }
    }

    fn register_defaults(&mut self) {
        use Action as A;

        self.bind_all(
            Context::Global,
            &[
                (KeySpec::ch('q'), A::Quit),
                (KeySpec::ch('j'), A::NavDown),
                (KeySpec::plain(KeyCode::Down), A::NavDown),
                (KeySpec::ch('k'), A::NavUp),
                (KeySpec::plain(KeyCode::Up), A::NavUp),
                (KeySpec::plain(KeyCode::Tab), A::NextSection),
                (KeySpec::plain(KeyCode::BackTab), A::PrevSection),
                (KeySpec::ch('1'), A::GoHousing),
                (KeySpec::ch('2'), A::GoNavigator),
                (KeySpec::ch('3'), A::GoShops),
                (KeySpec::ch('4'), A::GoSubscription),
                (KeySpec::ch('5'), A::GoCommunity),
                (KeySpec::plain(KeyCode::Enter), A::Select),
                (KeySpec::plain(KeyCode::Esc), A::Back),
                (KeySpec::ch(']'), A::NextCity),
                (KeySpec::ch('['), A::PrevCity),
                (KeySpec::ch('r'), A::Reload),
                (KeySpec::ch('x'), A::DismissToast),
                (KeySpec::ch('u'), A::ToggleUser),
                (KeySpec::ch('T'), A::CycleTheme),
                (KeySpec::ch('?'), A::ShowHelp),
            ],
        );

        self.bind_all(
            Context::Housing,
            &[
                (KeySpec::ch('/'), A::EnterSearch),
                (KeySpec::ch('f'), A::ToggleFavorite),
                (KeySpec::ch('n'), A::CycleRooms),
                (KeySpec::ch('h'), A::LowerMin),
                (KeySpec::ch('l'), A::RaiseMin),
                (KeySpec::ch('H'), A::LowerMax),
                (KeySpec::ch('L'), A::RaiseMax),
                (KeySpec::ch('c'), A::ResetFilters),
            ],
        );

        self.bind_all(
            Context::Shops,
            &[
                (KeySpec::ch('/'), A::EnterSearch),
                (KeySpec::ch('f'), A::ToggleFavorite),
                (KeySpec::ch('c'), A::CycleCategory),
                (KeySpec::ch('p'), A::CyclePrice),
                (KeySpec::ch('s'), A::CycleSort),
                (KeySpec::ch('o'), A::OpenWebsite),
            ],
        );

        self.bind_all(
            Context::Navigator,
            &[
                (KeySpec::ch('/'), A::EnterSearch),
                (KeySpec::ch('m'), A::CycleTransport),
                (KeySpec::ch('g'), A::SearchRoutes),
                (KeySpec::ch('n'), A::NextSuggestion),
                (KeySpec::ch('N'), A::PrevSuggestion),
                (KeySpec::ch('a'), A::UseSuggestion),
            ],
        );

        self.bind(Context::Subscription, KeySpec::ch('y'), A::TogglePeriod);

        self.bind_all(
            Context::Checkout,
            &[
                (KeySpec::ch('p'), A::TogglePaymentMethod),
                (KeySpec::plain(KeyCode::Tab), A::TogglePaymentMethod),
                (KeySpec::plain(KeyCode::Enter), A::ConfirmPayment),
                (KeySpec::plain(KeyCode::Esc), A::Back),
            ],
        );

        self.bind_all(
            Context::Community,
            &[
                (KeySpec::ch('l'), A::ReactLike),
                (KeySpec::ch('v'), A::ReactLove),
                (KeySpec::ch('s'), A::ReactSmile),
                (KeySpec::ch('L'), A::CommentLike),
                (KeySpec::ch('V'), A::CommentLove),
                (KeySpec::ch('S'), A::CommentSmile),
                (KeySpec::ch('n'), A::NextPage),
                (KeySpec::plain(KeyCode::Right), A::NextPage),
                (KeySpec::ch('p'), A::PrevPage),
                (KeySpec::plain(KeyCode::Left), A::PrevPage),
                (KeySpec::ctrl('d'), A::ScrollDown),
                (KeySpec::ch('J'), A::ScrollDown),
                (KeySpec::ctrl('u'), A::ScrollUp),
                (KeySpec::ch('K'), A::ScrollUp),
                (KeySpec::ch('a'), A::ShowAuthor),
            ],
        );

        self.bind_all(
            Context::Input,
            &[
                (KeySpec::plain(KeyCode::Esc), A::Back),
                (KeySpec::plain(KeyCode::Enter), A::Select),
                (KeySpec::plain(KeyCode::Tab), A::SwitchField),
            ],
        );
    }

    /// Apply user overrides from the keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "next_section").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            // Rebind in every context the action was bound in
            let mut contexts: Vec<Context> = Vec::new();
            for (ctx, _, a) in &self.bindings {
                if *a == action && !contexts.contains(ctx) {
                    contexts.push(*ctx);
                }
            }

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global. Text
    /// input never falls back, so typed characters stay characters.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, normalize_modifiers(code, modifiers));

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        match context {
            Context::Global | Context::Input => None,
            _ => self.lookup.get(&(Context::Global, key)).copied(),
        }
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminals report `Shift` alongside upper-case characters and `BackTab`;
/// the key code already carries it.
fn normalize_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
        _ => modifiers,
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    let action = match name.to_lowercase().replace('-', "_").as_str() {
        "quit" => Action::Quit,
        "nav_down" | "down" => Action::NavDown,
        "nav_up" | "up" => Action::NavUp,
        "next_section" => Action::NextSection,
        "prev_section" => Action::PrevSection,
        "go_housing" | "housing" => Action::GoHousing,
        "go_navigator" | "navigator" => Action::GoNavigator,
        "go_shops" | "shops" => Action::GoShops,
        "go_subscription" | "subscription" => Action::GoSubscription,
        "go_community" | "community" => Action::GoCommunity,
        "select" | "enter" => Action::Select,
        "back" => Action::Back,
        "next_city" => Action::NextCity,
        "prev_city" => Action::PrevCity,
        "reload" | "refresh" => Action::Reload,
        "dismiss_toast" | "dismiss" => Action::DismissToast,
        "toggle_user" | "login" => Action::ToggleUser,
        "cycle_theme" | "theme" => Action::CycleTheme,
        "show_help" | "help" => Action::ShowHelp,
        "enter_search" | "search" => Action::EnterSearch,
        "switch_field" => Action::SwitchField,
        "toggle_favorite" | "favorite" => Action::ToggleFavorite,
        "cycle_rooms" | "rooms" => Action::CycleRooms,
        "raise_min" => Action::RaiseMin,
        "lower_min" => Action::LowerMin,
        "raise_max" => Action::RaiseMax,
        "lower_max" => Action::LowerMax,
        "reset_filters" => Action::ResetFilters,
        "cycle_category" | "category" => Action::CycleCategory,
        "cycle_price" | "price" => Action::CyclePrice,
        "cycle_sort" | "sort" => Action::CycleSort,
        "open_website" | "open" => Action::OpenWebsite,
        "cycle_transport" | "transport" => Action::CycleTransport,
        "search_routes" | "find_routes" => Action::SearchRoutes,
        "next_suggestion" => Action::NextSuggestion,
        "prev_suggestion" => Action::PrevSuggestion,
        "use_suggestion" => Action::UseSuggestion,
        "toggle_period" | "period" => Action::TogglePeriod,
        "toggle_payment_method" | "payment_method" => Action::TogglePaymentMethod,
        "confirm_payment" | "pay" => Action::ConfirmPayment,
        "react_like" | "like" => Action::ReactLike,
        "react_love" | "love" => Action::ReactLove,
        "react_smile" | "smile" => Action::ReactSmile,
        "comment_like" => Action::CommentLike,
        "comment_love" => Action::CommentLove,
        "comment_smile" => Action::CommentSmile,
        "next_page" => Action::NextPage,
        "prev_page" => Action::PrevPage,
        "scroll_down" => Action::ScrollDown,
        "scroll_up" => Action::ScrollUp,
        "show_author" | "author" => Action::ShowAuthor,
        _ => return None,
    };
    Some(action)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_quit() {
        let reg = KeybindingRegistry::new();
        let action = reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_default_nav_keys() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('j'), KeyModifiers::NONE, Context::Global),
            Some(Action::NavDown)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Up, KeyModifiers::NONE, Context::Global),
            Some(Action::NavUp)
        );
    }

    #[test]
    fn test_section_context_falls_back_to_global() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Shops),
            Some(Action::Quit)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('3'), KeyModifiers::NONE, Context::Community),
            Some(Action::GoShops)
        );
    }

    #[test]
    fn test_same_key_differs_per_context() {
        let reg = KeybindingRegistry::new();
        let key = KeyCode::Char('c');
        assert_eq!(
            reg.action_for_key(key, KeyModifiers::NONE, Context::Housing),
            Some(Action::ResetFilters)
        );
        assert_eq!(
            reg.action_for_key(key, KeyModifiers::NONE, Context::Shops),
            Some(Action::CycleCategory)
        );
        assert_eq!(
            reg.action_for_key(key, KeyModifiers::NONE, Context::Subscription),
            None
        );
    }

    #[test]
    fn test_input_context_does_not_fall_back() {
        let reg = KeybindingRegistry::new();
        // 'q' must be typeable into a search box
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Input),
            None
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Input),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_checkout_overrides_global_enter_and_tab() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Enter, KeyModifiers::NONE, Context::Checkout),
            Some(Action::ConfirmPayment)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Tab, KeyModifiers::NONE, Context::Checkout),
            Some(Action::TogglePaymentMethod)
        );
    }

    #[test]
    fn test_ctrl_modifiers() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('d'), KeyModifiers::CONTROL, Context::Community),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('d'), KeyModifiers::NONE, Context::Community),
            None
        );
    }

    #[test]
    fn test_shift_is_ignored_for_characters() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('T'), KeyModifiers::SHIFT, Context::Global),
            Some(Action::CycleTheme)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::BackTab, KeyModifiers::SHIFT, Context::Housing),
            Some(Action::PrevSection)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::F(12), KeyModifiers::NONE, Context::Global),
            None
        );
    }

    #[test]
    fn test_apply_overrides_valid() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global),
            None
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::CONTROL, Context::Global),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_apply_overrides_unknown_action() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("nonexistent_action".to_string(), "q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Unknown action"));
    }

    #[test]
    fn test_apply_overrides_bad_key() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+Alt+Shift+Q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cannot parse key"));
    }

    #[test]
    fn test_override_preserves_contexts() {
        let mut reg = KeybindingRegistry::new();
        // EnterSearch lives in Housing, Shops and Navigator
        let mut overrides = HashMap::new();
        overrides.insert("search".to_string(), "F3".to_string());
        assert!(reg.apply_overrides(&overrides).is_empty());

        for ctx in [Context::Housing, Context::Shops, Context::Navigator] {
            assert_eq!(
                reg.action_for_key(KeyCode::F(3), KeyModifiers::NONE, ctx),
                Some(Action::EnterSearch)
            );
            assert_eq!(
                reg.action_for_key(KeyCode::Char('/'), KeyModifiers::NONE, ctx),
                None
            );
        }
    }

    #[test]
    fn test_parse_key_string_named_keys() {
        assert_eq!(
            parse_key_string("Enter"),
            Some(KeySpec::plain(KeyCode::Enter))
        );
        assert_eq!(parse_key_string("esc"), Some(KeySpec::plain(KeyCode::Esc)));
        assert_eq!(parse_key_string("space"), Some(KeySpec::ch(' ')));
        assert_eq!(
            parse_key_string("Shift+Tab"),
            Some(KeySpec::plain(KeyCode::BackTab))
        );
    }

    #[test]
    fn test_parse_key_string_function_keys() {
        assert_eq!(parse_key_string("F1"), Some(KeySpec::plain(KeyCode::F(1))));
        assert_eq!(
            parse_key_string("f12"),
            Some(KeySpec::plain(KeyCode::F(12)))
        );
        assert_eq!(parse_key_string("F0"), None);
        assert_eq!(parse_key_string("F13"), None);
    }

    #[test]
    fn test_parse_key_string_chars() {
        assert_eq!(parse_key_string("Ctrl+d"), Some(KeySpec::ctrl('d')));
        assert_eq!(parse_key_string("q"), Some(KeySpec::ch('q')));
        assert_eq!(parse_key_string("]"), Some(KeySpec::ch(']')));
        assert_eq!(parse_key_string("qq"), None);
    }

    #[test]
    fn test_parse_action_name_accepts_dashes() {
        assert_eq!(parse_action_name("next-city"), Some(Action::NextCity));
        assert_eq!(parse_action_name("Toggle_Favorite"), Some(Action::ToggleFavorite));
        assert_eq!(parse_action_name("warp"), None);
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key(&KeySpec::ch('q')), "q");
        assert_eq!(format_key(&KeySpec::ctrl('d')), "Ctrl+d");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Enter)), "Enter");
        assert_eq!(
            format_key(&KeySpec::plain(KeyCode::BackTab)),
            "Shift+Tab"
        );
    }

    #[test]
    fn test_every_action_is_bound_by_default() {
        let reg = KeybindingRegistry::new();
        let bound: std::collections::HashSet<Action> =
            reg.all_bindings().into_iter().map(|(_, _, a, _)| a).collect();
        assert!(bound.contains(&Action::ShowAuthor));
        assert!(bound.contains(&Action::ConfirmPayment));
        assert!(bound.len() >= 50);
    }
}
