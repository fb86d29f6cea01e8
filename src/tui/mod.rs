// src/tui/mod.rs — Terminal rendition of the portfolio page.
//
// One tab per page section, plus the floating chat panel.
// Launch via `folio` or `folio show`.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::run_portfolio;
