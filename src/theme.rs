//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub header_title: Style,
    pub section_active: Style,
    pub section_inactive: Style,

    // -- Lists --
    pub list_title: Style,
    pub list_selected: Style,
    pub list_muted: Style,
    pub price: Style,
    pub rating: Style,
    pub favorite: Style,
    pub badge: Style,
    pub open_now: Style,
    pub closed: Style,

    // -- Detail panels --
    pub detail_heading: Style,
    pub detail_label: Style,
    pub detail_body: Style,

    // -- Community --
    pub reaction_active: Style,
    pub page_current: Style,

    // -- Feedback --
    pub error: Style,
    pub toast_info: Style,
    pub toast_success: Style,
    pub toast_error: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub input_active: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            section_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            section_inactive: Style::default().fg(Color::Gray),

            list_title: Style::default().add_modifier(Modifier::BOLD),
            list_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            list_muted: Style::default().fg(Color::DarkGray),
            price: Style::default().fg(Color::Green),
            rating: Style::default().fg(Color::Yellow),
            favorite: Style::default().fg(Color::Red),
            badge: Style::default().fg(Color::Magenta),
            open_now: Style::default().fg(Color::Green),
            closed: Style::default().fg(Color::Red),

            detail_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            detail_label: Style::default().fg(Color::DarkGray),
            detail_body: Style::default(),

            reaction_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            page_current: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            error: Style::default().fg(Color::Red),
            toast_info: Style::default().fg(Color::White).bg(Color::Blue),
            toast_success: Style::default().fg(Color::Black).bg(Color::Green),
            toast_error: Style::default().fg(Color::White).bg(Color::Red),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
            input_active: Style::default().fg(Color::Yellow),
        }
    }

    /// Light palette for light terminal backgrounds.
    fn light() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            section_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            section_inactive: Style::default().fg(Color::DarkGray),

            list_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            list_selected: Style::default().bg(Color::Blue).fg(Color::White),
            list_muted: Style::default().fg(Color::DarkGray),
            price: Style::default().fg(Color::Green),
            rating: Style::default().fg(Color::Magenta),
            favorite: Style::default().fg(Color::Red),
            badge: Style::default().fg(Color::Blue),
            open_now: Style::default().fg(Color::Green),
            closed: Style::default().fg(Color::Red),

            detail_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_label: Style::default().fg(Color::DarkGray),
            detail_body: Style::default().fg(Color::Black),

            reaction_active: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            page_current: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            error: Style::default().fg(Color::Red),
            toast_info: Style::default().fg(Color::White).bg(Color::Blue),
            toast_success: Style::default().fg(Color::White).bg(Color::Green),
            toast_error: Style::default().fg(Color::White).bg(Color::Red),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
            input_active: Style::default().fg(Color::Magenta),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup for config-driven overrides
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"detail_heading"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 25] = [
    "header_title",
    "section_active",
    "section_inactive",
    "list_title",
    "list_selected",
    "list_muted",
    "price",
    "rating",
    "favorite",
    "badge",
    "open_now",
    "closed",
    "detail_heading",
    "detail_label",
    "detail_body",
    "reaction_active",
    "page_current",
    "error",
    "toast_info",
    "toast_success",
    "toast_error",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "input_active",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 25] = [
            p.header_title,
            p.section_active,
            p.section_inactive,
            p.list_title,
            p.list_selected,
            p.list_muted,
            p.price,
            p.rating,
            p.favorite,
            p.badge,
            p.open_now,
            p.closed,
            p.detail_heading,
            p.detail_label,
            p.detail_body,
            p.reaction_active,
            p.page_current,
            p.error,
            p.toast_info,
            p.toast_success,
            p.toast_error,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.input_active,
        ];

        let map = ROLE_NAMES.iter().copied().zip(styles).collect();
        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
