// src/tui/widgets/mod.rs — One panel per page section, plus the chat overlay.

pub mod about;
pub mod chat;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::page::Section;
use crate::tui::theme::Theme;

/// Bordered block titled with the section heading and subtitle.
pub fn section_block(section: Section) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    match section.heading() {
        Some((title, subtitle)) => block.title(Line::from(vec![
            Span::styled(format!(" {title} "), Theme::header()),
            Span::styled(format!("{subtitle} "), Theme::subtitle()),
        ])),
        None => block,
    }
}

/// Tags rendered as chips on one line.
pub fn tag_line(tags: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for tag in tags {
        spans.push(Span::styled(format!(" {tag} "), Theme::tag()));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
