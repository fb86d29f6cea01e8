// src/tui/app.rs — TUI application state, event loop, and rendering.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::chat::{ChatWidget, SessionManager, WidgetAction};
use crate::page::{self, Section};
use crate::profile::Profile;

use super::theme::Theme;
use super::widgets;

// ── App state ────────────────────────────────────────────────────

struct App {
    profile: Arc<Profile>,
    sections: Vec<Section>,
    active: usize,
    scroll: u16,

    chat: ChatWidget,
    chat_title: String,
    chat_subtitle: String,
    manager: Arc<SessionManager>,
    replies_tx: mpsc::UnboundedSender<String>,
    replies_rx: mpsc::UnboundedReceiver<String>,
}

impl App {
    fn new(profile: Arc<Profile>, manager: Arc<SessionManager>) -> Self {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        let model = manager
            .config()
            .model
            .replace("gemini", "Gemini")
            .replace('-', " ");
        Self {
            sections: Section::visible_for(&profile),
            active: 0,
            scroll: 0,
            chat: ChatWidget::new(profile.greeting()),
            chat_title: format!("{}'s Digital Twin", profile.first_name()),
            chat_subtitle: format!("Powered by {model}"),
            profile,
            manager,
            replies_tx,
            replies_rx,
        }
    }

    fn active_section(&self) -> Section {
        self.sections.get(self.active).copied().unwrap_or(Section::Hero)
    }

    fn select(&mut self, index: usize) {
        if index < self.sections.len() {
            self.active = index;
            self.scroll = 0;
        }
    }

    fn next_section(&mut self) {
        self.select((self.active + 1) % self.sections.len());
    }

    fn prev_section(&mut self) {
        let len = self.sections.len();
        self.select((self.active + len - 1) % len);
    }

    /// Run the send on the runtime; the reply comes back through `replies_rx`.
    fn dispatch(&self, text: String) {
        let manager = self.manager.clone();
        let tx = self.replies_tx.clone();
        tokio::spawn(async move {
            let reply = manager.send_message(&text).await;
            let _ = tx.send(reply);
        });
    }

    /// Move finished replies into the transcript.
    fn drain_replies(&mut self) {
        while let Ok(reply) = self.replies_rx.try_recv() {
            self.chat.receive_reply(reply);
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The open panel owns the keyboard.
        if self.chat.is_open() {
            if let WidgetAction::Send(text) = self.chat.handle_key(key) {
                self.dispatch(text);
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,

            // Section navigation
            KeyCode::Tab | KeyCode::Right => self.next_section(),
            KeyCode::BackTab | KeyCode::Left => self.prev_section(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(d) = c.to_digit(10) {
                    self.select(d as usize - 1);
                }
            }

            // Scrolling
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),

            KeyCode::Char('c') => self.chat.toggle(),

            _ => {}
        }
        false
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the portfolio TUI. Blocks until the user quits (q / Esc / Ctrl-C).
///
/// Must be called from inside a tokio runtime: chat sends are spawned on it.
pub fn run_portfolio(profile: Arc<Profile>, manager: Arc<SessionManager>) -> anyhow::Result<()> {
    let mut app = App::new(profile, manager);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        app.drain_replies();
        terminal.draw(|f| render(f, app))?;

        // Short poll so replies show up without a keypress.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + tabs
            Constraint::Min(6),    // Section content
            Constraint::Length(1), // Footer / key hints
        ])
        .split(size);

    render_header(f, chunks[0], app);
    render_section(f, chunks[1], app);
    render_footer(f, chunks[2], app);

    if app.chat.is_open() {
        widgets::chat::render(f, chunks[1], &app.chat, &app.chat_title, &app.chat_subtitle);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = app
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let label = format!(" {} {} ", i + 1, section.label());
            if i == app.active {
                Line::from(Span::styled(label, Theme::tab_active()))
            } else {
                Line::from(Span::styled(label, Theme::tab_inactive()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", app.profile.name), Theme::header()))
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
        .select(app.active)
        .highlight_style(Theme::tab_active())
        .divider(Span::styled(" | ", Theme::text_dim()));

    f.render_widget(tabs, area);
}

fn render_section(f: &mut Frame, area: Rect, app: &App) {
    let profile = app.profile.as_ref();
    match app.active_section() {
        Section::Hero => widgets::hero::render(f, area, profile),
        Section::About => widgets::about::render(f, area, profile),
        Section::Skills => widgets::skills::render(f, area, profile, app.scroll),
        Section::Certifications => {
            widgets::skills::render_certifications(f, area, profile, app.scroll)
        }
        Section::Experience => widgets::experience::render(f, area, profile, app.scroll),
        Section::Projects => widgets::projects::render(f, area, profile, app.scroll),
        Section::Contact => widgets::contact::render(f, area, profile),
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = if app.chat.is_open() {
        Line::from(vec![
            Span::styled(" Enter", Theme::key_hint()),
            Span::styled(" send  ", Theme::key_desc()),
            Span::styled("\u{2191}\u{2193}", Theme::key_hint()),
            Span::styled(" scroll  ", Theme::key_desc()),
            Span::styled("Esc", Theme::key_hint()),
            Span::styled(" close  ", Theme::key_desc()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" q", Theme::key_hint()),
            Span::styled(" quit  ", Theme::key_desc()),
            Span::styled("Tab/\u{2190}\u{2192}", Theme::key_hint()),
            Span::styled(" switch  ", Theme::key_desc()),
            Span::styled("j/k", Theme::key_hint()),
            Span::styled(" scroll  ", Theme::key_desc()),
            Span::styled("c", Theme::key_hint()),
            Span::styled(widgets::chat::toggle_label(&app.chat), Theme::send_button(true)),
        ])
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(48)])
        .split(area);

    f.render_widget(Paragraph::new(hints), cols[0]);
    f.render_widget(
        Paragraph::new(Span::styled(page::footer_line(&app.profile), Theme::text_dim()))
            .alignment(ratatui::layout::Alignment::Right),
        cols[1],
    );
}
