use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget};

use crate::api::Record;
use crate::ui::theme::{
    ACCENT, BUTTON_DISABLED, BUTTON_ENABLED, GLOBAL_BORDER, HEADER_BACKGROUND, MUTED_TEXT,
    TABLE_TEXT,
};

use super::cells::CellRenderers;
use super::model::TableModel;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No data found.";

/// One configured column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Record field shown in this column.
    pub key: String,
    pub label: String,
    /// Fixed width in cells; `None` shares the remaining space.
    pub width: Option<u16>,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    fn constraint(&self) -> Constraint {
        match self.width {
            Some(width) => Constraint::Length(width),
            None => Constraint::Fill(1),
        }
    }
}

/// Values offered by the filter selector for field `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub key: String,
    pub values: Vec<String>,
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Single full-width loading indicator; no header.
    Loading,
    /// Single full-width "No data found." row.
    Empty,
    /// One row per record, one cell per column.
    Rows(Vec<Vec<String>>),
}

/// Table props.
pub struct TableView<'a> {
    pub records: &'a [Record],
    pub columns: &'a [Column],
    pub searchable_key: Option<&'a str>,
    pub filter_options: Option<&'a FilterOptions>,
    pub loading: bool,
    pub renderers: &'a CellRenderers,
}

impl TableView<'_> {
    /// Column labels, or `None` while loading.
    pub fn header(&self) -> Option<Vec<&str>> {
        if self.loading {
            return None;
        }
        Some(self.columns.iter().map(|c| c.label.as_str()).collect())
    }

    pub fn body(&self) -> TableBody {
        if self.loading {
            return TableBody::Loading;
        }
        if self.records.is_empty() {
            return TableBody::Empty;
        }
        TableBody::Rows(
            self.records
                .iter()
                .map(|record| {
                    self.columns
                        .iter()
                        .map(|col| self.renderers.render(&col.key, record.get(&col.key)))
                        .collect()
                })
                .collect(),
        )
    }
}

/// Search box, filter line, rows and pagination controls.
pub struct TableWidget<'a> {
    view: TableView<'a>,
    model: &'a TableModel,
}

impl<'a> TableWidget<'a> {
    pub fn new(view: TableView<'a>, model: &'a TableModel) -> Self {
        Self { view, model }
    }

    fn controls(&self) -> Vec<Line<'static>> {
        let state = self.model.state();
        let mut lines = Vec::new();

        if let Some(key) = self.view.searchable_key {
            let search = if state.search.is_empty() {
                Span::styled(
                    format!("Search by {key}... (type and press Enter)"),
                    Style::default().fg(MUTED_TEXT),
                )
            } else {
                Span::styled(format!("{}▏", state.search), Style::default().fg(TABLE_TEXT))
            };
            lines.push(Line::from(vec![
                Span::styled(" 🔍 ", Style::default().fg(ACCENT)),
                search,
            ]));
        }

        if self.view.filter_options.is_some() {
            let current = if state.filter.is_empty() {
                "All"
            } else {
                state.filter.as_str()
            };
            lines.push(Line::from(vec![
                Span::styled(" Filter by category: ", Style::default().fg(MUTED_TEXT)),
                Span::styled(current.to_string(), Style::default().fg(TABLE_TEXT)),
                Span::styled("  (Ctrl+F)", Style::default().fg(MUTED_TEXT)),
            ]));
        }

        lines
    }

    fn pagination_line(&self) -> Line<'static> {
        let pagination = self.model.pagination();
        let page = self.model.state().page;
        let button = |label: &'static str, enabled: bool| {
            let style = if enabled {
                Style::default().fg(BUTTON_ENABLED).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BUTTON_DISABLED).add_modifier(Modifier::DIM)
            };
            Span::styled(label, style)
        };

        Line::from(vec![
            Span::styled(format!(" {}", pagination.label(page)), Style::default().fg(MUTED_TEXT)),
            Span::raw("   "),
            button("[◀ Prev]", pagination.can_prev(page)),
            Span::raw(" "),
            button("[Next ▶]", pagination.can_next(page)),
        ])
    }

    fn table(&self, rows: Vec<Vec<String>>) -> Table<'static> {
        let header = self
            .view
            .header()
            .unwrap_or_default()
            .into_iter()
            .map(|label| Cell::from(label.to_string()))
            .collect::<Vec<_>>();
        let widths = self.view.columns.iter().map(Column::constraint);

        Table::new(rows.into_iter().map(Row::new), widths)
            .header(
                Row::new(header).style(
                    Style::default()
                        .bg(HEADER_BACKGROUND)
                        .add_modifier(Modifier::BOLD),
                ),
            )
            .style(Style::default().fg(TABLE_TEXT))
            .column_spacing(1)
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let controls = self.controls();
        let [controls_area, table_area, pagination_area] = Layout::vertical([
            Constraint::Length(controls.len() as u16),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(controls).render(controls_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        match self.view.body() {
            TableBody::Loading => {
                centered_message(LOADING_MESSAGE, block, table_area, buf);
            }
            TableBody::Empty => {
                // Header stays; the message fills the first row across all columns
                let inner = block.inner(table_area);
                self.table(Vec::new()).block(block).render(table_area, buf);
                let [_, row_area, _] = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .areas(inner);
                Paragraph::new(EMPTY_MESSAGE)
                    .style(Style::default().fg(MUTED_TEXT))
                    .alignment(Alignment::Center)
                    .render(row_area, buf);
            }
            TableBody::Rows(rows) => {
                self.table(rows).block(block).render(table_area, buf);
            }
        }

        Paragraph::new(self.pagination_line()).render(pagination_area, buf);
    }
}

fn centered_message(message: &'static str, block: Block<'_>, area: Rect, buf: &mut Buffer) {
    let inner = block.inner(area);
    block.render(area, buf);
    let [_, line_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);
    Paragraph::new(message)
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center)
        .render(line_area, buf);
}
