// src/tui/widgets/skills.rs — Skills by category, with certifications.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{section_block, tag_line};
use crate::page::Section;
use crate::profile::Profile;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, profile: &Profile, scroll: u16) {
    let mut lines: Vec<Line> = Vec::new();
    for cat in &profile.skills {
        lines.push(Line::from(Span::styled(
            cat.category.as_str(),
            Theme::highlight(),
        )));
        lines.push(tag_line(&cat.skills));
        lines.push(Line::from(""));
    }

    let p = Paragraph::new(lines)
        .block(section_block(Section::Skills))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(p, area);
}

pub fn render_certifications(f: &mut Frame, area: Rect, profile: &Profile, scroll: u16) {
    let mut lines: Vec<Line> = Vec::new();
    for cert in &profile.certifications {
        lines.push(Line::from(Span::styled(cert.name.as_str(), Theme::highlight())));
        lines.push(Line::from(vec![
            Span::styled(cert.issuer.as_str(), Theme::text()),
            Span::styled(format!("  {}", cert.date), Theme::text_dim()),
        ]));
        if let Some(link) = &cert.link {
            lines.push(Line::from(Span::styled(link.as_str(), Theme::text_dim())));
        }
        lines.push(Line::from(""));
    }

    let p = Paragraph::new(lines)
        .block(section_block(Section::Certifications))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(p, area);
}
