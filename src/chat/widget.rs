// src/chat/widget.rs — Chat widget state machine.
//
// Visibility (closed/open) and request state (idle/awaiting reply) are
// independent. Only one send can be outstanding: `submit` refuses while a
// reply is pending, and `receive_reply` is the single way back to idle.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::message::{ChatMessage, Transcript};
use super::session::SessionManager;

/// What the caller has to do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    None,
    /// Send this text to the session manager and feed the reply back through
    /// `receive_reply`.
    Send(String),
}

#[derive(Debug)]
pub struct ChatWidget {
    open: bool,
    awaiting_reply: bool,
    input: String,
    transcript: Transcript,
    /// Lines scrolled back from the newest entry; 0 follows the bottom.
    scroll_back: u16,
}

impl ChatWidget {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            open: false,
            awaiting_reply: false,
            input: String::new(),
            transcript: Transcript::seeded(greeting),
            scroll_back: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    /// Open or close the panel. Messages are untouched.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.scroll_to_newest();
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Mirrors the send button's enabled state.
    pub fn can_submit(&self) -> bool {
        !self.awaiting_reply && !self.input.trim().is_empty()
    }

    /// Append the user's message and hand back the text to send.
    ///
    /// Returns `None` without touching any state when the input is blank or a
    /// reply is still pending.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let text = self.input.trim().to_string();
        self.transcript.push(ChatMessage::user(text.clone()));
        self.input.clear();
        self.awaiting_reply = true;
        self.scroll_to_newest();
        Some(text)
    }

    /// Record the reply for the outstanding send. Ignored when nothing is pending.
    pub fn receive_reply(&mut self, text: impl Into<String>) {
        if !self.awaiting_reply {
            tracing::debug!("dropping reply with no pending send");
            return;
        }
        self.transcript.push(ChatMessage::model(text));
        self.awaiting_reply = false;
        self.scroll_to_newest();
    }

    /// Run a whole turn: submit, wait for the session manager, append the reply.
    /// Returns `false` when the submit was a no-op.
    pub async fn send(&mut self, manager: &SessionManager) -> bool {
        let Some(text) = self.submit() else {
            return false;
        };
        let reply = manager.send_message(&text).await;
        self.receive_reply(reply);
        true
    }

    pub fn scroll_up(&mut self) {
        self.scroll_back = self.scroll_back.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(1);
    }

    fn scroll_to_newest(&mut self) {
        self.scroll_back = 0;
    }

    /// Keyboard handling while the panel has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> WidgetAction {
        match key.code {
            // Shift+Enter is reserved for line breaks; there is no multi-line
            // input, so it does nothing.
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => WidgetAction::None,
            KeyCode::Enter => match self.submit() {
                Some(text) => WidgetAction::Send(text),
                None => WidgetAction::None,
            },
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(c);
                WidgetAction::None
            }
            KeyCode::Backspace => {
                self.backspace();
                WidgetAction::None
            }
            KeyCode::Up => {
                self.scroll_up();
                WidgetAction::None
            }
            KeyCode::Down => {
                self.scroll_down();
                WidgetAction::None
            }
            KeyCode::Esc => {
                if self.open {
                    self.toggle();
                }
                WidgetAction::None
            }
            _ => WidgetAction::None,
        }
    }
}
