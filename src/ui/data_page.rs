//! The Data route: wires the table to the fetch slice.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::api::ProductQuery;
use crate::ui::app::App;
use crate::ui::table::{Column, FilterOptions, TableEvent, TableWidget};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

/// Record field the search box matches against.
pub const SEARCHABLE_KEY: &str = "title";

/// Record field the category filter applies to.
pub const FILTER_KEY: &str = "category";

pub const SUPPORT_CONTACT: &str = "support@dashboard.app";

/// Columns shown for products.
pub fn product_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width(6),
        Column::new("title", "Title"),
        Column::new("category", "Category").width(20),
        Column::new("price", "Price").width(12),
        Column::new("brand", "Brand").width(18),
        Column::new("rating", "Rating").width(8),
    ]
}

pub fn filter_options(categories: &[String]) -> FilterOptions {
    FilterOptions {
        key: FILTER_KEY.to_string(),
        values: categories.to_vec(),
    }
}

/// Translate a table event into the next fetch.
pub fn query_for(event: TableEvent) -> ProductQuery {
    match event {
        TableEvent::Search(text) => ProductQuery::search(text),
        TableEvent::Filter(category) => ProductQuery::category(category),
        TableEvent::PageChange {
            skip,
            search,
            category,
        } => ProductQuery {
            skip,
            search,
            category,
        },
    }
}

/// Lines shown in place of the table while the slice holds an error.
pub fn error_banner(message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Something went wrong while loading products.",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("If this keeps happening, contact us at {SUPPORT_CONTACT}."),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            "Press Enter to reload.",
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

pub struct DataPage<'a> {
    app: &'a App,
}

impl<'a> DataPage<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for DataPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                " Data ",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(error) = &self.app.store().state().error {
            let [banner] = Layout::vertical([Constraint::Length(6)])
                .margin(1)
                .areas(inner);
            Paragraph::new(error_banner(error))
                .wrap(Wrap { trim: true })
                .render(banner, buf);
            return;
        }

        TableWidget::new(self.app.table_view(), self.app.table()).render(inner, buf);
    }
}
