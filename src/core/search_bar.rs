//! Header search bar view-model: airport autocomplete, service filter,
//! outside-click dismissal and search navigation behind one event API.
//!
//! Input events (`type_*`, `focus_*`, `select_*`, `submit`) are synchronous.
//! Debounced values, fetch completions and pointer events are applied by
//! [`SearchBar::process_next`] or [`SearchBar::settle`].

use crate::core::airport_resolver::{AirportDropdown, AirportResolver, QueryTicket, MIN_QUERY_LEN};
use crate::core::debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};
use crate::core::dismissal::{Document, OutsideClickDismissal};
use crate::core::navigation::{resolve_search, PageQuery};
use crate::core::service_filter::{ServiceDropdown, ServiceFilter};
use crate::domain::model::{Airport, ServiceType};
use crate::domain::ports::{AirportSearch, DirectoryConfig};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const SEARCH_CONTAINER_ID: &str = "search-container";

type FetchOutcome = (QueryTicket, Result<Vec<Airport>>);

#[derive(Debug, Clone)]
pub struct SearchBarOptions {
    pub debounce_delay: Duration,
    pub min_query_len: usize,
    pub container_id: String,
}

impl Default for SearchBarOptions {
    fn default() -> Self {
        Self {
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            min_query_len: MIN_QUERY_LEN,
            container_id: SEARCH_CONTAINER_ID.to_string(),
        }
    }
}

impl SearchBarOptions {
    pub fn from_config<C: DirectoryConfig + ?Sized>(config: &C) -> Self {
        Self {
            debounce_delay: config.debounce_delay(),
            min_query_len: config.min_query_len(),
            ..Self::default()
        }
    }
}

/// Aborts the wrapped fetch when replaced or dropped.
#[derive(Debug)]
struct InFlight(JoinHandle<()>);

impl InFlight {
    fn is_running(&self) -> bool {
        !self.0.is_finished()
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub struct SearchBar<A> {
    api: Arc<A>,
    airports: AirportResolver,
    services: ServiceFilter,
    page: PageQuery,
    debouncer: Debouncer<String>,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    in_flight: Option<InFlight>,
    dismissal: OutsideClickDismissal,
    warning: Option<String>,
}

impl<A: AirportSearch + 'static> SearchBar<A> {
    /// Mounts the search bar on a page. Registers the pointer listener and
    /// pre-fills the service input from the page's `service` parameter.
    pub fn mount(
        api: Arc<A>,
        services: Arc<[ServiceType]>,
        page: PageQuery,
        document: &Document,
        options: SearchBarOptions,
    ) -> Self {
        let debouncer = Debouncer::new(options.debounce_delay);
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        let mut services = ServiceFilter::new(services);
        if let Some(service) = &page.service {
            services.prefill(service.clone());
        }

        Self {
            api,
            airports: AirportResolver::new(options.min_query_len),
            services,
            page,
            debouncer,
            fetch_tx,
            fetch_rx,
            in_flight: None,
            dismissal: OutsideClickDismissal::mount(document, options.container_id),
            warning: None,
        }
    }

    pub fn type_airport(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.airports.edit(text.clone());
        self.debouncer.push(text);
    }

    pub fn focus_airport(&mut self) {
        self.airports.focus();
        self.services.close_dropdown();
    }

    pub fn select_airport(&mut self, index: usize) -> Option<Airport> {
        let airport = self.airports.select_index(index)?;
        self.in_flight = None;
        self.debouncer.push(self.airports.query().to_string());
        tracing::debug!("Selected airport {}", airport.canonical_label());
        Some(airport)
    }

    pub fn type_service(&mut self, text: impl Into<String>) {
        self.services.set_query(text);
    }

    pub fn focus_service(&mut self) {
        self.services.focus();
        self.airports.close_dropdown();
    }

    pub fn select_service(&mut self, index: usize) -> Option<ServiceType> {
        self.services.select_index(index)
    }

    /// Replaces the service list once it has loaded.
    pub fn set_service_types(&mut self, services: Arc<[ServiceType]>) {
        self.services.set_services(services);
    }

    /// Resolves the navigation target. On a missing airport or service the
    /// inline warning is set and navigation is refused.
    pub fn submit(&mut self) -> Result<String> {
        match resolve_search(self.airports.selected(), &self.page, self.services.query()) {
            Ok(target) => {
                self.warning = None;
                tracing::info!("Navigating to {}", target);
                Ok(target)
            }
            Err(e) => {
                tracing::debug!("Search blocked: {}", e);
                self.warning = Some(e.user_friendly_message());
                Err(e)
            }
        }
    }

    /// Waits for the next debounced value, fetch completion or outside click and applies it.
    /// Returns `false` when no further event can arrive.
    pub async fn process_next(&mut self) -> bool {
        tokio::select! {
            Some(value) = self.debouncer.recv() => {
                self.apply_debounced(&value);
                true
            }
            Some((ticket, outcome)) = self.fetch_rx.recv() => {
                if self.airports.complete(&ticket, outcome) {
                    self.in_flight = None;
                }
                true
            }
            Some(_) = self.dismissal.next_outside() => {
                self.dismiss_dropdowns();
                true
            }
            else => false,
        }
    }

    /// Processes events until no debounce timer or fetch is outstanding, then
    /// applies any queued pointer events.
    pub async fn settle(&mut self) {
        while self.is_busy() {
            if !self.process_next().await {
                break;
            }
        }
        self.drain_pointer_events();
    }

    pub fn drain_pointer_events(&mut self) {
        if self.dismissal.poll_outside() {
            self.dismiss_dropdowns();
        }
    }

    fn is_busy(&self) -> bool {
        self.debouncer.has_pending()
            || self.in_flight.as_ref().is_some_and(InFlight::is_running)
            || !self.fetch_rx.is_empty()
    }

    fn apply_debounced(&mut self, value: &str) {
        // 使用者已經繼續輸入，等下一個去抖動的值
        if value != self.airports.query() {
            tracing::debug!("Skipping superseded airport query '{}'", value);
            return;
        }
        match self.airports.on_debounced(value) {
            Some(ticket) => self.spawn_fetch(ticket),
            None => self.in_flight = None,
        }
    }

    fn spawn_fetch(&mut self, ticket: QueryTicket) {
        tracing::debug!("Searching airports for '{}'", ticket.query());
        let api = Arc::clone(&self.api);
        let tx = self.fetch_tx.clone();
        // 新請求取代舊請求，舊的在這裡被中止
        self.in_flight = Some(InFlight(tokio::spawn(async move {
            let outcome = api.search_airports(ticket.query()).await;
            let _ = tx.send((ticket, outcome));
        })));
    }

    fn dismiss_dropdowns(&mut self) {
        self.airports.close_dropdown();
        self.services.close_dropdown();
    }
}

impl<A> SearchBar<A> {
    pub fn airport_query(&self) -> &str {
        self.airports.query()
    }

    pub fn selected_airport(&self) -> Option<&Airport> {
        self.airports.selected()
    }

    pub fn airport_results(&self) -> &[Airport] {
        self.airports.results()
    }

    pub fn is_airport_loading(&self) -> bool {
        self.airports.is_loading()
    }

    pub fn airport_dropdown(&self) -> AirportDropdown<'_> {
        self.airports.dropdown()
    }

    pub fn service_query(&self) -> &str {
        self.services.query()
    }

    pub fn filtered_services(&self) -> &[ServiceType] {
        self.services.filtered()
    }

    pub fn service_dropdown(&self) -> ServiceDropdown<'_> {
        self.services.dropdown()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn page(&self) -> &PageQuery {
        &self.page
    }
}
