// src/tui/widgets/hero.rs — Landing panel.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{section_block, tag_line};
use crate::page::Section;
use crate::profile::Profile;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, profile: &Profile) {
    let focus: Vec<String> = profile
        .skills
        .iter()
        .take(3)
        .map(|c| c.category.clone())
        .collect();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Hello, I am {}", profile.name),
            Theme::highlight(),
        )),
        Line::from(""),
        Line::from(Span::styled(profile.title.as_str(), Theme::header())),
        Line::from(""),
        Line::from(Span::styled(profile.tagline.as_str(), Theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{1f4cd} ", Theme::text_dim()),
            Span::styled(profile.location.as_str(), Theme::text_dim()),
        ]),
        Line::from(Span::styled(profile.avatar.as_str(), Theme::text_dim())),
        Line::from(""),
        tag_line(&focus),
    ];

    let p = Paragraph::new(lines)
        .block(section_block(Section::Hero))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}
