use tokio::sync::mpsc;

use crate::api::{FetchError, PageResult, ProductQuery};
use crate::config::Config;
use crate::ui::data::{DataStore, RequestId};
use crate::ui::data_page::{filter_options, product_columns, query_for, SEARCHABLE_KEY};
use crate::ui::route::Route;
use crate::ui::table::{CellRenderers, Column, FilterOptions, TableEvent, TableModel, TableView};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    CategoryFilter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    Popup(PopupKind),
}

/// Work the UI hands to the async side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Fetch {
        request: RequestId,
        query: ProductQuery,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    route: Route,
    start_route: Route,
    focus: Focus,
    ticks: u64,
    /// Fetch slice; survives route changes.
    store: DataStore,
    /// Table state; reset every time the Data page mounts.
    table: TableModel,
    columns: Vec<Column>,
    filter_options: FilterOptions,
    renderers: CellRenderers,
    /// Index into `filter_choices()` while the category popup is open.
    filter_selection: usize,
    command_tx: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let page_size = config.api.page_size;
        Self {
            should_quit: false,
            route: Route::Home,
            start_route: Route::from(config.ui.start_route),
            focus: Focus::Page,
            ticks: 0,
            store: DataStore::new(u64::from(page_size)),
            table: TableModel::new(page_size),
            columns: product_columns(),
            filter_options: filter_options(&config.catalog.categories),
            renderers: CellRenderers::default(),
            filter_selection: 0,
            command_tx: None,
        }
    }

    /// Connect the channel fetches are sent on.
    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_tx = Some(sender);
    }

    /// Show the configured start route, mounting it if needed.
    pub fn start(&mut self) {
        self.route = self.start_route;
        if self.route == Route::Data {
            self.mount_data_page();
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn table(&self) -> &TableModel {
        &self.table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            Focus::Page => None,
        }
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    pub fn close_popup(&mut self) {
        self.focus = Focus::Page;
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Switch routes. Re-selecting the current route does nothing.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = self.route.title(), to = route.title(), "Navigate");
        self.close_popup();
        self.route = route;
        if route == Route::Data {
            self.mount_data_page();
        }
    }

    /// Fresh table state and a fetch of the first page.
    pub fn mount_data_page(&mut self) {
        self.table.reset();
        self.dispatch_fetch(ProductQuery::first_page());
    }

    /// Whether the Data page is showing the error banner.
    pub fn has_error(&self) -> bool {
        self.store.state().error.is_some()
    }

    // -- Table input --------------------------------------------------------

    pub fn on_search_char(&mut self, ch: char) {
        let mut text = self.table.state().search.clone();
        text.push(ch);
        self.edit_search(text);
    }

    pub fn on_search_backspace(&mut self) {
        let mut text = self.table.state().search.clone();
        if text.pop().is_some() {
            self.edit_search(text);
        }
    }

    pub fn on_search_clear(&mut self) {
        self.edit_search(String::new());
    }

    pub fn on_search_commit(&mut self) {
        let text = self.table.state().search.clone();
        let event = self.table.commit_search(text);
        self.handle_table_event(event);
    }

    pub fn on_prev_page(&mut self) {
        if let Some(event) = self.table.prev_page() {
            self.handle_table_event(event);
        }
    }

    pub fn on_next_page(&mut self) {
        if let Some(event) = self.table.next_page() {
            self.handle_table_event(event);
        }
    }

    fn edit_search(&mut self, text: String) {
        if let Some(event) = self.table.edit_search(text) {
            self.handle_table_event(event);
        }
    }

    // -- Category popup -----------------------------------------------------

    /// Popup entries: "All" (empty value) followed by the configured values.
    pub fn filter_choices(&self) -> impl Iterator<Item = &str> {
        std::iter::once("").chain(self.filter_options.values.iter().map(String::as_str))
    }

    pub fn filter_selection(&self) -> usize {
        self.filter_selection
    }

    pub fn open_filter_popup(&mut self) {
        let current = self.table.state().filter.as_str();
        let selection = self
            .filter_choices()
            .position(|choice| choice == current)
            .unwrap_or(0);
        self.filter_selection = selection;
        self.focus = Focus::Popup(PopupKind::CategoryFilter);
    }

    pub fn move_filter_selection(&mut self, delta: isize) {
        let len = self.filter_options.values.len() + 1;
        let current = self.filter_selection as isize;
        self.filter_selection = (current + delta).rem_euclid(len as isize) as usize;
    }

    /// Apply the highlighted popup entry as the filter.
    pub fn confirm_filter_selection(&mut self) {
        let value = self
            .filter_choices()
            .nth(self.filter_selection)
            .unwrap_or_default()
            .to_string();
        self.close_popup();
        let event = self.table.change_filter(value);
        self.handle_table_event(event);
    }

    // -- Fetch lifecycle ----------------------------------------------------

    fn handle_table_event(&mut self, event: TableEvent) {
        self.dispatch_fetch(query_for(event));
    }

    /// Tag a fetch, mark the slice loading and hand the query to the worker.
    pub fn dispatch_fetch(&mut self, query: ProductQuery) {
        let request = self.store.begin_fetch();
        tracing::debug!(request = request.0, ?query, "Dispatch fetch");

        let Some(sender) = &self.command_tx else {
            self.on_fetch_completed(
                request,
                Err(FetchError::network("Fetch worker is not running")),
            );
            return;
        };

        let queued = sender.try_send(UiCommand::Fetch { request, query });
        if let Err(err) = queued {
            self.on_fetch_completed(
                request,
                Err(FetchError::network(format!("Failed to queue fetch: {err}"))),
            );
        }
    }

    pub fn on_fetch_completed(
        &mut self,
        request: RequestId,
        outcome: Result<PageResult, FetchError>,
    ) {
        if self.store.complete(request, outcome) {
            self.table.set_total(self.store.state().data.total);
        }
    }

    pub fn table_view(&self) -> TableView<'_> {
        let state = self.store.state();
        TableView {
            records: &state.data.items,
            columns: &self.columns,
            searchable_key: Some(SEARCHABLE_KEY),
            filter_options: Some(&self.filter_options),
            loading: state.loading,
            renderers: &self.renderers,
        }
    }
}
