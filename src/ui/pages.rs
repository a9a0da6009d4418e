//! Static pages.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, TABLE_TEXT};

pub const HOME_TEXT: &str =
    "🏠 Welcome to the home page.  👉 Visit the 📊 Data tab (F2) for table interactivity.";

pub const ABOUT_TEXT: &str = "Dashboard App is a simple terminal app built using 🦀 Rust, \
     🛠️ ratatui and a reducer-driven store.";

/// Body text for a static route; `None` for the Data route.
pub fn static_text(route: Route) -> Option<&'static str> {
    match route {
        Route::Home => Some(HOME_TEXT),
        Route::AboutUs => Some(ABOUT_TEXT),
        Route::Data => None,
    }
}

pub fn static_page(route: Route, text: &'static str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(text, Style::default().fg(TABLE_TEXT))),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", route.title()),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
