use crate::domain::model::Airport;
use crate::utils::error::Result;

pub const MIN_QUERY_LEN: usize = 3;

/// Issued for every fetch the resolver decides to make. Only the ticket with the
/// latest sequence number may apply its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    seq: u64,
    query: String,
}

impl QueryTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverPhase {
    Idle,
    Querying,
    DropdownVisible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AirportDropdown<'a> {
    Hidden,
    Loading,
    NoResults,
    Items(&'a [Airport]),
}

#[derive(Debug, Clone)]
pub struct AirportResolver {
    min_query_len: usize,
    query: String,
    selected: Option<Airport>,
    results: Vec<Airport>,
    loading: bool,
    dropdown_open: bool,
    latest_seq: u64,
}

impl Default for AirportResolver {
    fn default() -> Self {
        Self::new(MIN_QUERY_LEN)
    }
}

impl AirportResolver {
    pub fn new(min_query_len: usize) -> Self {
        Self {
            min_query_len,
            query: String::new(),
            selected: None,
            results: Vec::new(),
            loading: false,
            dropdown_open: false,
            latest_seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<&Airport> {
        self.selected.as_ref()
    }

    pub fn results(&self) -> &[Airport] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn phase(&self) -> ResolverPhase {
        if self.loading {
            ResolverPhase::Querying
        } else if self.dropdown_open {
            ResolverPhase::DropdownVisible
        } else {
            ResolverPhase::Idle
        }
    }

    pub fn dropdown(&self) -> AirportDropdown<'_> {
        if !self.dropdown_open {
            AirportDropdown::Hidden
        } else if self.loading {
            AirportDropdown::Loading
        } else if self.results.is_empty() {
            AirportDropdown::NoResults
        } else {
            AirportDropdown::Items(&self.results)
        }
    }

    /// User edit of the input text. Any earlier selection is forgotten so its
    /// code can no longer leak into navigation.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.selected = None;
    }

    /// True when the input still shows exactly the label written by the last selection.
    pub fn is_selection_echo(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|airport| airport.canonical_label() == self.query)
    }

    /// Runs the fetch guard for a debounced value. Returns a ticket when a fetch
    /// should be issued; every call supersedes all earlier tickets.
    pub fn on_debounced(&mut self, debounced: &str) -> Option<QueryTicket> {
        self.latest_seq += 1;

        let echo = self.is_selection_echo();
        if echo || debounced.chars().count() < self.min_query_len {
            tracing::debug!(
                "Skipping airport fetch for '{}' (selection echo: {})",
                debounced,
                echo
            );
            self.results.clear();
            self.loading = false;
            if echo {
                self.dropdown_open = false;
            }
            return None;
        }

        self.loading = true;
        Some(QueryTicket {
            seq: self.latest_seq,
            query: debounced.to_string(),
        })
    }

    /// Applies a fetch outcome. Stale tickets are ignored and `false` is returned.
    pub fn complete(&mut self, ticket: &QueryTicket, outcome: Result<Vec<Airport>>) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                "Discarding stale airport results for '{}' (seq {} < {})",
                ticket.query,
                ticket.seq,
                self.latest_seq
            );
            return false;
        }

        match outcome {
            Ok(airports) => {
                tracing::debug!("{} airports matched '{}'", airports.len(), ticket.query);
                self.results = airports;
                self.dropdown_open = true;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch airports for '{}': {}", ticket.query, e);
                self.results.clear();
                self.dropdown_open = false;
            }
        }
        self.loading = false;
        true
    }

    pub fn select(&mut self, airport: Airport) {
        // 選取後舊的請求一律作廢
        self.latest_seq += 1;
        self.loading = false;
        self.query = airport.canonical_label();
        self.selected = Some(airport);
        self.dropdown_open = false;
    }

    pub fn select_index(&mut self, index: usize) -> Option<Airport> {
        let airport = self.results.get(index)?.clone();
        self.select(airport.clone());
        Some(airport)
    }

    pub fn focus(&mut self) {
        if self.query.chars().count() >= self.min_query_len {
            self.dropdown_open = true;
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }
}
