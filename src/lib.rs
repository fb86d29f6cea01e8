// src/lib.rs — Library root for folio

pub mod chat;
pub mod cli;
pub mod infra;
pub mod page;
pub mod profile;
pub mod provider;
pub mod tui;
pub mod util;
