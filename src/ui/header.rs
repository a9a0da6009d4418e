use crate::ui::data::DataState;
use crate::ui::route::Route;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Fetch status shown on the right of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchIndicator {
    Idle,
    Loading,
    Ready,
    Failed,
}

pub struct Header {
    route: Route,
    indicator: FetchIndicator,
    ticks: u64,
}

impl Header {
    pub fn new(route: Route, indicator: FetchIndicator, ticks: u64) -> Self {
        Self {
            route,
            indicator,
            ticks,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Dashboard",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
        ];

        let status = match self.indicator {
            FetchIndicator::Idle => None,
            FetchIndicator::Loading => {
                let frame = SPINNER[(self.ticks % SPINNER.len() as u64) as usize];
                Some(Span::styled(format!("{frame} loading"), text_style))
            }
            FetchIndicator::Ready => {
                Some(Span::styled("● ready", Style::default().fg(STATUS_OK)))
            }
            FetchIndicator::Failed => {
                Some(Span::styled("● error", Style::default().fg(STATUS_ERROR)))
            }
        };
        if let Some(status) = status {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(status);
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl FetchIndicator {
    pub fn from_state(state: &DataState) -> Self {
        if state.loading {
            FetchIndicator::Loading
        } else if state.error.is_some() {
            FetchIndicator::Failed
        } else if state.is_idle() {
            FetchIndicator::Idle
        } else {
            FetchIndicator::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::data::RequestId;

    #[test]
    fn indicator_follows_slice() {
        let mut state = DataState::default();
        assert_eq!(FetchIndicator::from_state(&state), FetchIndicator::Idle);

        state.loading = true;
        state.latest_request = RequestId(1);
        assert_eq!(FetchIndicator::from_state(&state), FetchIndicator::Loading);

        state.loading = false;
        assert_eq!(FetchIndicator::from_state(&state), FetchIndicator::Ready);

        state.error = Some("Network Error".into());
        assert_eq!(FetchIndicator::from_state(&state), FetchIndicator::Failed);
    }
}
