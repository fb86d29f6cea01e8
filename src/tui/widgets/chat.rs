// src/tui/widgets/chat.rs — Floating chat panel and its toggle button.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::chat::{ChatRole, ChatWidget};
use crate::tui::theme::Theme;

const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 22;

/// Bottom-right rectangle the panel floats in.
pub fn panel_rect(area: Rect) -> Rect {
    let width = PANEL_WIDTH.min(area.width.saturating_sub(4));
    let height = PANEL_HEIGHT.min(area.height.saturating_sub(2));
    Rect {
        x: area.right().saturating_sub(width + 2),
        y: area.bottom().saturating_sub(height + 1),
        width,
        height,
    }
}

/// Toggle button label shown in the footer.
pub fn toggle_label(widget: &ChatWidget) -> &'static str {
    if widget.is_open() {
        " \u{2715} close chat "
    } else {
        " \u{1f4ac} chat "
    }
}

pub fn render(f: &mut Frame, area: Rect, widget: &ChatWidget, title: &str, subtitle: &str) {
    let rect = panel_rect(area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" \u{2728} ", Theme::key_hint()),
            Span::styled(format!("{title} "), Theme::header()),
        ]))
        .title_bottom(Line::from(Span::styled(format!(" {subtitle} "), Theme::subtitle())))
        .borders(Borders::ALL)
        .border_style(Theme::border_focus());
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    render_messages(f, chunks[0], widget);
    render_input(f, chunks[1], widget);
}

fn render_messages(f: &mut Frame, area: Rect, widget: &ChatWidget) {
    let bubble_width = (area.width as usize * 4 / 5).saturating_sub(2).max(8);
    let mut lines: Vec<Line> = Vec::new();

    for msg in widget.transcript() {
        let (style, alignment) = match msg.role() {
            ChatRole::User => (Theme::user_bubble(), Alignment::Right),
            ChatRole::Model => (Theme::model_bubble(), Alignment::Left),
        };
        lines.push(
            Line::from(Span::styled(
                format!("{} \u{b7} {}", msg.role().label(), msg.timestamp().format("%H:%M")),
                Theme::text_dim(),
            ))
            .alignment(alignment),
        );
        for row in wrap_text(msg.text(), bubble_width) {
            lines.push(Line::from(Span::styled(format!(" {row} "), style)).alignment(alignment));
        }
        lines.push(Line::from(""));
    }

    if widget.is_awaiting_reply() {
        lines.push(Line::from(Span::styled(" \u{2026} ", Theme::loading())));
    }

    let offset = scroll_offset(lines.len(), area.height, widget.scroll_back());
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

/// Top row to render so the newest line sits at the bottom, minus `back`
/// rows the user scrolled up.
fn scroll_offset(total_lines: usize, height: u16, back: u16) -> u16 {
    u16::try_from(total_lines)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
        .saturating_sub(back)
}

fn render_input(f: &mut Frame, area: Rect, widget: &ChatWidget) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(4), Constraint::Length(8)])
        .split(inner);

    let input = if widget.input().is_empty() {
        Span::styled("Ask about my experience...", Theme::text_dim())
    } else {
        Span::styled(widget.input(), Theme::text())
    };
    f.render_widget(Paragraph::new(Line::from(input)), cols[0]);
    f.render_widget(
        Paragraph::new(Span::styled(" Send ", Theme::send_button(widget.can_submit())))
            .alignment(Alignment::Right),
        cols[1],
    );

    let cursor_x = cols[0].x + (widget.input().chars().count() as u16).min(cols[0].width.saturating_sub(1));
    f.set_cursor_position((cursor_x, cols[0].y));
}

/// Word-wrap `text` to `width` columns, splitting words longer than a line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for para in text.split('\n') {
        let mut line = String::new();
        for word in para.split_whitespace() {
            let mut w = word;
            while w.chars().count() > width {
                if !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                }
                let split = w.char_indices().nth(width).map(|(i, _)| i).unwrap_or(w.len());
                out.push(w[..split].to_string());
                w = &w[split..];
            }
            if w.is_empty() {
                continue;
            }
            let line_len = line.chars().count();
            if line_len > 0 && line_len + 1 + w.chars().count() > width {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(w);
        }
        out.push(line);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_on_word_boundary() {
        assert_eq!(wrap_text("hello world foo", 11), vec!["hello world", "foo"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_multibyte() {
        assert_eq!(wrap_text("caf\u{e9} caf\u{e9}", 4), vec!["caf\u{e9}", "caf\u{e9}"]);
    }

    #[test]
    fn test_scroll_offset_follows_newest() {
        assert_eq!(scroll_offset(30, 10, 0), 20);
        assert_eq!(scroll_offset(30, 10, 5), 15);
        assert_eq!(scroll_offset(5, 10, 0), 0);
    }

    #[test]
    fn test_scroll_offset_saturates_on_huge_transcript() {
        assert_eq!(scroll_offset(70_000, 10, 0), u16::MAX - 10);
        assert_eq!(scroll_offset(usize::MAX, 10, 3), u16::MAX - 13);
    }

    #[test]
    fn test_panel_fits_small_terminal() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = panel_rect(area);
        assert!(rect.width <= 26);
        assert!(rect.height <= 8);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }

    #[test]
    fn test_panel_anchored_bottom_right() {
        let area = Rect::new(0, 0, 120, 40);
        let rect = panel_rect(area);
        assert_eq!(rect.width, PANEL_WIDTH);
        assert_eq!(rect.height, PANEL_HEIGHT);
        assert_eq!(rect.right(), 118);
        assert_eq!(rect.bottom(), 39);
    }
}
