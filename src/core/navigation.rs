use crate::domain::model::Airport;
use crate::utils::error::{DirectoryError, Result};
use url::{form_urlencoded, Url};

pub const SEARCH_PATH: &str = "/search";
pub const MISSING_SELECTION_WARNING: &str = "Please select an airport and specify a service.";

/// The `airport` and `service` parameters of the page currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub airport: Option<String>,
    pub service: Option<String>,
}

impl PageQuery {
    /// Accepts an absolute URL or a path such as `/search?airport=DEL`.
    pub fn parse(location: &str) -> Result<Self> {
        let base = Url::parse("http://directory.invalid/")?;
        let url = base.join(location)?;
        Ok(Self::from_pairs(url.query_pairs()))
    }

    pub fn from_query_string(query: &str) -> Self {
        Self::from_pairs(form_urlencoded::parse(query.trim_start_matches('?').as_bytes()))
    }

    fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    {
        let mut page = PageQuery::default();
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "airport" if page.airport.is_none() => page.airport = Some(value.into_owned()),
                "service" if page.service.is_none() => page.service = Some(value.into_owned()),
                _ => {}
            }
        }
        page
    }
}

/// Selected airport first, then the page's `airport` parameter.
pub fn effective_airport_code(selected: Option<&Airport>, page: &PageQuery) -> Option<String> {
    selected
        .map(|airport| airport.iata_code.as_str())
        .filter(|code| !code.is_empty())
        .or_else(|| page.airport.as_deref().filter(|code| !code.is_empty()))
        .map(str::to_string)
}

pub fn search_target(airport_code: &str, service: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("airport", airport_code)
        .append_pair("service", service)
        .finish();
    format!("{}?{}", SEARCH_PATH, query)
}

pub fn service_link(service_name: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("service", service_name)
        .finish();
    format!("{}?{}", SEARCH_PATH, query)
}

/// Blocks navigation when the airport code or the service text is missing.
pub fn resolve_search(
    selected: Option<&Airport>,
    page: &PageQuery,
    service_text: &str,
) -> Result<String> {
    let airport_code = effective_airport_code(selected, page);
    match airport_code {
        Some(code) if !service_text.trim().is_empty() => Ok(search_target(&code, service_text)),
        _ => Err(DirectoryError::MissingSelection {
            message: MISSING_SELECTION_WARNING.to_string(),
        }),
    }
}
