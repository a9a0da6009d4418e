use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::route::Route;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const COPYRIGHT: &str = "© 2025 Dashboard App.";

/// Navigation list with the active route highlighted.
pub struct Sidebar {
    active: Route,
}

impl Sidebar {
    pub fn new(active: Route) -> Self {
        Self { active }
    }

    pub fn nav_lines(&self) -> Vec<Line<'static>> {
        Route::ALL
            .iter()
            .map(|&route| {
                let label = format!(" F{}  {:<14}", route.hotkey(), route.title());
                if route == self.active {
                    Line::from(Span::styled(
                        label,
                        Style::default()
                            .fg(HEADER_TEXT)
                            .bg(ACTIVE_HIGHLIGHT)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(label, Style::default().fg(MUTED_TEXT)))
                }
            })
            .collect()
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title, nav, _, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(Route::ALL.len() as u16),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled(
            " Dashboard",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .render(title, buf);
        Paragraph::new(self.nav_lines()).render(nav, buf);
        Paragraph::new(Span::styled(
            format!(" {COPYRIGHT}"),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ))
        .render(footer, buf);
    }
}
