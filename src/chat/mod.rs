// src/chat/mod.rs — The digital-twin chat: transcript, persona, session, widget.

pub mod message;
pub mod persona;
pub mod session;
pub mod widget;

pub use message::{ChatMessage, ChatRole, Transcript};
pub use session::{ChatSession, SessionManager};
pub use widget::{ChatWidget, WidgetAction};
