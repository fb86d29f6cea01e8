// src/tui/widgets/about.rs — Bio and hobbies.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::section_block;
use crate::page::Section;
use crate::profile::Profile;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, profile: &Profile) {
    let outer = section_block(Section::About);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);

    let bio = Paragraph::new(Line::from(Span::styled(
        format!("\"{}\"", profile.about),
        Theme::text(),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(bio, chunks[0]);

    let hobbies: Vec<Line> = profile
        .hobbies
        .iter()
        .map(|h| {
            Line::from(vec![
                Span::styled("  \u{2022} ", Theme::key_hint()),
                Span::styled(h.as_str(), Theme::text()),
            ])
        })
        .collect();
    let block = Block::default()
        .title(Span::styled(" Hobbies ", Theme::highlight()))
        .borders(Borders::ALL)
        .border_style(Theme::border());
    f.render_widget(Paragraph::new(hobbies).block(block), chunks[1]);
}
