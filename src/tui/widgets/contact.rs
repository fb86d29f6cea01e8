// src/tui/widgets/contact.rs — Contact call to action.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::section_block;
use crate::page::{Section, CONTACT_BLURB, CONTACT_HEADLINE};
use crate::profile::Profile;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, profile: &Profile) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(CONTACT_HEADLINE, Theme::header())),
        Line::from(""),
        Line::from(Span::styled(CONTACT_BLURB, Theme::text_dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" \u{2709} Say Hello ", Theme::send_button(true)),
            Span::styled(format!("  {}", profile.email), Theme::text()),
        ]),
        Line::from(""),
    ];
    for social in &profile.socials {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", social.platform), Theme::highlight()),
            Span::styled(social.url.as_str(), Theme::text_dim()),
        ]));
    }

    let p = Paragraph::new(lines)
        .block(section_block(Section::Contact))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}
