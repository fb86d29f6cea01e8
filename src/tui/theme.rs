// src/tui/theme.rs — Color scheme and style definitions for the portfolio TUI.

use ratatui::style::{Color, Modifier, Style};

/// Slate and emerald palette of the web portfolio.
pub struct Theme;

impl Theme {
    // ── Brand colors ─────────────────────────────────────────────
    pub const SLATE_900: Color = Color::Rgb(15, 23, 42);
    pub const SLATE_700: Color = Color::Rgb(51, 65, 85);
    pub const SLATE_400: Color = Color::Rgb(148, 163, 184);
    pub const SLATE_200: Color = Color::Rgb(226, 232, 240);
    pub const EMERALD: Color = Color::Rgb(16, 185, 129);
    pub const EMERALD_LIGHT: Color = Color::Rgb(52, 211, 153);
    pub const BLUE: Color = Color::Rgb(37, 99, 235);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    // ── Semantic styles ──────────────────────────────────────────

    /// Active/selected tab header.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::EMERALD)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab header.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::SLATE_400)
    }

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Section subtitle, shown above the heading.
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Theme::EMERALD)
            .add_modifier(Modifier::ITALIC)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::SLATE_700)
    }

    /// Block border (focused chat panel).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::EMERALD)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::SLATE_200)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::SLATE_400)
    }

    /// Names, roles, project titles.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Theme::EMERALD_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Technology / tag chip.
    pub fn tag() -> Style {
        Style::default().fg(Theme::EMERALD_LIGHT).bg(Theme::SLATE_700)
    }

    /// Messages typed by the visitor.
    pub fn user_bubble() -> Style {
        Style::default().fg(Theme::WHITE).bg(Theme::BLUE)
    }

    /// Messages from the twin.
    pub fn model_bubble() -> Style {
        Style::default().fg(Theme::SLATE_200).bg(Theme::SLATE_700)
    }

    /// Pending-reply indicator.
    pub fn loading() -> Style {
        Style::default()
            .fg(Theme::SLATE_400)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::EMERALD)
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::SLATE_400)
    }

    /// Send affordance, dimmed while submitting is not possible.
    pub fn send_button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Theme::WHITE)
                .bg(Theme::EMERALD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::SLATE_400).bg(Theme::SLATE_700)
        }
    }
}
