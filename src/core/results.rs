use crate::core::navigation::PageQuery;
use crate::domain::model::{Business, Provider, ServiceType};
use crate::domain::ports::{BusinessDirectory, ServiceCatalog};
use crate::utils::error::Result;
use std::sync::Arc;

pub const PROVIDER_LOADING_MESSAGE: &str = "Loading provider details...";
pub const PROVIDER_UNAVAILABLE_MESSAGE: &str = "Provider details could not be loaded.";

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    /// No `airport` parameter; nothing is fetched.
    NoAirport,
    Loading,
    Failed(String),
    Ready(Vec<Business>),
}

impl ResultsState {
    pub fn businesses(&self) -> &[Business] {
        match self {
            ResultsState::Ready(businesses) => businesses,
            _ => &[],
        }
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, ResultsState::Ready(businesses) if businesses.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderState {
    NotLinked,
    Loading,
    Loaded(Provider),
    Unavailable,
}

impl ProviderState {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ProviderState::Loading => Some(PROVIDER_LOADING_MESSAGE),
            ProviderState::Unavailable => Some(PROVIDER_UNAVAILABLE_MESSAGE),
            ProviderState::NotLinked | ProviderState::Loaded(_) => None,
        }
    }
}

/// What the detail modal shows. Discarded when the modal closes.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub business: Business,
    pub provider: ProviderState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTicket {
    seq: u64,
    provider_id: String,
}

impl ProviderTicket {
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }
}

pub struct ResultsPage<D> {
    api: Arc<D>,
    query: PageQuery,
    service_types: Arc<[ServiceType]>,
    results: ResultsState,
    selected: Option<SelectedItem>,
    selection_seq: u64,
}

impl<D> ResultsPage<D> {
    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    pub fn state(&self) -> &ResultsState {
        &self.results
    }

    pub fn service_types(&self) -> Arc<[ServiceType]> {
        Arc::clone(&self.service_types)
    }

    pub fn selected(&self) -> Option<&SelectedItem> {
        self.selected.as_ref()
    }

    pub fn heading(&self) -> String {
        let airport = self.query.airport.as_deref().unwrap_or("Airport");
        match self.query.service.as_deref() {
            Some(service) => format!("Showing \"{}\" in {}", service, airport),
            None => format!("All Services in {}", airport),
        }
    }

    /// Opens the detail modal with the business data right away. Returns a
    /// ticket when the provider still has to be fetched.
    pub fn select(&mut self, business: Business) -> Option<ProviderTicket> {
        self.selection_seq += 1;
        let provider_id = business
            .provider_id
            .clone()
            .filter(|id| !id.trim().is_empty());

        let provider = if provider_id.is_some() {
            ProviderState::Loading
        } else {
            ProviderState::NotLinked
        };
        self.selected = Some(SelectedItem { business, provider });

        provider_id.map(|provider_id| ProviderTicket {
            seq: self.selection_seq,
            provider_id,
        })
    }

    /// Applies a provider lookup. Ignored when the modal was closed or another
    /// business was selected meanwhile.
    pub fn apply_provider(&mut self, ticket: &ProviderTicket, outcome: Result<Provider>) -> bool {
        if ticket.seq != self.selection_seq {
            tracing::debug!("Discarding provider {} for a closed selection", ticket.provider_id);
            return false;
        }
        let Some(selected) = self.selected.as_mut() else {
            return false;
        };

        selected.provider = match outcome {
            Ok(provider) => ProviderState::Loaded(provider),
            Err(e) => {
                tracing::warn!("Failed to fetch provider {}: {}", ticket.provider_id, e);
                ProviderState::Unavailable
            }
        };
        true
    }

    pub fn close_details(&mut self) {
        self.selection_seq += 1;
        self.selected = None;
    }
}

impl<D: BusinessDirectory + ServiceCatalog> ResultsPage<D> {
    pub fn new(api: Arc<D>, query: PageQuery) -> Self {
        let results = if query.airport.is_some() {
            ResultsState::Loading
        } else {
            ResultsState::NoAirport
        };
        Self {
            api,
            query,
            service_types: Arc::from(Vec::new()),
            results,
            selected: None,
            selection_seq: 0,
        }
    }

    /// Loads the service list for the header. Failures leave an empty list.
    pub async fn load_service_types(&mut self) -> Arc<[ServiceType]> {
        match self.api.service_types().await {
            Ok(types) => {
                tracing::debug!("Loaded {} service types", types.len());
                self.service_types = Arc::from(types);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch service types: {}", e);
                self.service_types = Arc::from(Vec::new());
            }
        }
        Arc::clone(&self.service_types)
    }

    pub async fn load_results(&mut self) -> &ResultsState {
        let Some(airport) = self.query.airport.clone() else {
            self.results = ResultsState::NoAirport;
            return &self.results;
        };

        self.results = ResultsState::Loading;
        let service = self.query.service.clone();
        self.results = match self
            .api
            .search_businesses(&airport, service.as_deref())
            .await
        {
            Ok(businesses) => {
                tracing::info!("{} businesses found at {}", businesses.len(), airport);
                ResultsState::Ready(businesses)
            }
            Err(e) => {
                tracing::error!("Business search failed for {}: {}", airport, e);
                ResultsState::Failed(format!("An error occurred: {}", e.user_friendly_message()))
            }
        };
        &self.results
    }

    /// Selects a business and resolves its provider before returning.
    pub async fn open_details(&mut self, business: Business) {
        if let Some(ticket) = self.select(business) {
            let outcome = self.api.provider(ticket.provider_id()).await;
            self.apply_provider(&ticket, outcome);
        }
    }
}
