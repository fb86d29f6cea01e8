// src/tui/widgets/projects.rs — Project gallery.

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

    for project in &profile.projects {
        lines.push(Line::from(Span::styled(
            project.title.as_str(),
            Theme::highlight(),
        )));
        lines.push(Line::from(Span::styled(
            project.description.as_str(),
            Theme::text(),
        )));
        lines.push(tag_line(&project.tags));
        let link = project.link.as_deref().unwrap_or(project.image.as_str());
        lines.push(Line::from(Span::styled(link, Theme::text_dim())));
        lines.push(Line::from(""));
    }

    let p = Paragraph::new(lines)
        .block(section_block(Section::Projects))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(p, area);
}
