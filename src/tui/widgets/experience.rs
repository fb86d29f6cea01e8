// src/tui/widgets/experience.rs — Experience timeline.

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

    for job in &profile.experience {
        lines.push(Line::from(vec![
            Span::styled("\u{25cf} ", Theme::key_hint()),
            Span::styled(job.role.as_str(), Theme::highlight()),
            Span::styled(format!(" @ {}", job.company), Theme::header()),
        ]));

        let mut meta = vec![Span::styled(format!("  {}", job.period), Theme::text_dim())];
        if let Some(loc) = &job.location {
            meta.push(Span::styled(format!(" \u{b7} {loc}"), Theme::text_dim()));
        }
        lines.push(Line::from(meta));
        lines.push(Line::from(Span::styled(
            format!("  {}", job.description),
            Theme::text(),
        )));
        lines.push(tag_line(&job.technologies));
        lines.push(Line::from(""));
    }

    let p = Paragraph::new(lines)
        .block(section_block(Section::Experience))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(p, area);
}
