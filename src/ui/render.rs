use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, PopupKind};
use crate::ui::data_page::DataPage;
use crate::ui::footer::Footer;
use crate::ui::header::{FetchIndicator, Header};
use crate::ui::layout::{centered_rect_by_size, layout_regions, split_sidebar};
use crate::ui::pages::{static_page, static_text};
use crate::ui::route::Route;
use crate::ui::sidebar::Sidebar;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

const POPUP_WIDTH: u16 = 36;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let indicator = if app.route() == Route::Data {
        FetchIndicator::from_state(app.store().state())
    } else {
        FetchIndicator::Idle
    };
    let header_widget = Header::new(app.route(), indicator, app.ticks());
    frame.render_widget(header_widget.widget(), header);

    let (sidebar, content) = split_sidebar(body);
    frame.render_widget(Sidebar::new(app.route()), sidebar);
    match static_text(app.route()) {
        Some(text) => frame.render_widget(static_page(app.route(), text), content),
        None => frame.render_widget(DataPage::new(app), content),
    }

    let footer_widget = Footer::new(app.route());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(kind) = app.popup_kind() {
        match kind {
            PopupKind::CategoryFilter => draw_category_popup(frame, app, content),
        }
    }
}

fn draw_category_popup(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selected = app.filter_selection();
    let choices: Vec<&str> = app.filter_choices().collect();

    let popup_height = (choices.len() as u16 + 2).min(area.height);
    let popup = centered_rect_by_size(area, POPUP_WIDTH, popup_height);
    let visible = popup_height.saturating_sub(2) as usize;
    // Keep the selection in view when the list is taller than the popup
    let offset = (selected + 1).saturating_sub(visible);

    let lines: Vec<Line> = choices
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, &choice)| {
            let label = if choice.is_empty() { "All" } else { choice };
            if idx == selected {
                Line::from(Span::styled(
                    format!("▶ {label}"),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {label}"),
                    Style::default().fg(HEADER_TEXT),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .title(" Filter by category ")
        .title_bottom(Line::from(Span::styled(
            " ↑/↓ Enter Esc ",
            Style::default().fg(MUTED_TEXT),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
