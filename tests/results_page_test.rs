use std::sync::{Arc, Mutex};

use airport_directory::core::navigation::PageQuery;
use airport_directory::core::results::{ProviderState, ResultsState, PROVIDER_UNAVAILABLE_MESSAGE};
use airport_directory::core::{Business, BusinessDirectory, Provider, ServiceCatalog, ServiceType};
use airport_directory::domain::model::{Address, ContactInfo};
use airport_directory::utils::error::DirectoryError;
use airport_directory::{ResultsPage, Result};
use async_trait::async_trait;

fn business(id: &str, provider_id: Option<&str>) -> Business {
    Business {
        id: id.to_string(),
        business_name: format!("Business {}", id),
        open_till: "21:00".to_string(),
        airport: "BOM".to_string(),
        ratings: 3.6,
        images: vec![],
        contact_number: "+91-3333333333".to_string(),
        address: Address {
            address_line: "Terminal 2".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            country: "India".to_string(),
        },
        provider_id: provider_id.map(str::to_string),
    }
}

#[derive(Default)]
struct MockDirectory {
    businesses: Option<Vec<Business>>,
    provider: Option<Provider>,
    services: Option<Vec<ServiceType>>,
    searches: Mutex<Vec<(String, Option<String>)>>,
}

fn unavailable(endpoint: &str) -> DirectoryError {
    DirectoryError::UpstreamStatusError {
        endpoint: endpoint.to_string(),
        status: 500,
    }
}

#[async_trait]
impl BusinessDirectory for MockDirectory {
    async fn search_businesses(&self, airport: &str, service: Option<&str>) -> Result<Vec<Business>> {
        self.searches
            .lock()
            .unwrap()
            .push((airport.to_string(), service.map(str::to_string)));
        self.businesses.clone().ok_or_else(|| unavailable("business_search"))
    }

    async fn provider(&self, _provider_id: &str) -> Result<Provider> {
        self.provider.clone().ok_or_else(|| unavailable("provider"))
    }
}

#[async_trait]
impl ServiceCatalog for MockDirectory {
    async fn service_types(&self) -> Result<Vec<ServiceType>> {
        self.services.clone().ok_or_else(|| unavailable("service_types"))
    }
}

#[tokio::test]
async fn test_results_are_loaded_for_page_parameters() {
    let api = Arc::new(MockDirectory {
        businesses: Some(vec![business("b1", None), business("b2", Some("p2"))]),
        ..MockDirectory::default()
    });
    let query = PageQuery::parse("/search?airport=BOM&service=Spa+%26+Massage").unwrap();
    let mut page = ResultsPage::new(Arc::clone(&api), query);

    assert_eq!(page.state(), &ResultsState::Loading);
    let state = page.load_results().await;
    assert_eq!(state.businesses().len(), 2);
    assert_eq!(
        api.searches.lock().unwrap().clone(),
        vec![("BOM".to_string(), Some("Spa & Massage".to_string()))]
    );
    assert_eq!(page.heading(), "Showing \"Spa & Massage\" in BOM");
}

#[tokio::test]
async fn test_missing_airport_skips_search() {
    let api = Arc::new(MockDirectory::default());
    let mut page = ResultsPage::new(Arc::clone(&api), PageQuery::parse("/search?service=Cafe").unwrap());

    assert_eq!(page.load_results().await, &ResultsState::NoAirport);
    assert!(api.searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_search_shows_inline_error() {
    let api = Arc::new(MockDirectory::default());
    let mut page = ResultsPage::new(api, PageQuery::parse("/search?airport=DEL").unwrap());

    match page.load_results().await {
        ResultsState::Failed(message) => assert!(message.starts_with("An error occurred: ")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_result_is_distinguished() {
    let api = Arc::new(MockDirectory {
        businesses: Some(vec![]),
        ..MockDirectory::default()
    });
    let mut page = ResultsPage::new(api, PageQuery::parse("/search?airport=GOI").unwrap());
    assert!(page.load_results().await.is_empty_result());
}

#[tokio::test]
async fn test_details_with_provider() {
    let provider = Provider {
        provider_name: "Acme Hospitality".to_string(),
        about: "Lounges across India".to_string(),
        website: Some("https://acme.test".to_string()),
        contact_info: ContactInfo {
            email: "hello@acme.test".to_string(),
            phone: "+91-2222222222".to_string(),
        },
    };
    let api = Arc::new(MockDirectory {
        provider: Some(provider.clone()),
        ..MockDirectory::default()
    });
    let mut page = ResultsPage::new(api, PageQuery::default());

    page.open_details(business("b1", Some("p1"))).await;
    let selected = page.selected().unwrap();
    assert_eq!(selected.provider, ProviderState::Loaded(provider));

    page.close_details();
    assert!(page.selected().is_none());
}

#[tokio::test]
async fn test_provider_failure_keeps_business_details() {
    let api = Arc::new(MockDirectory::default());
    let mut page = ResultsPage::new(api, PageQuery::default());

    page.open_details(business("b1", Some("p1"))).await;

    let selected = page.selected().unwrap();
    assert_eq!(selected.business.business_name, "Business b1");
    assert_eq!(selected.business.full_address(), "Terminal 2, Mumbai, Maharashtra");
    assert_eq!(selected.provider.message(), Some(PROVIDER_UNAVAILABLE_MESSAGE));
}

#[tokio::test]
async fn test_service_types_failure_yields_empty_list() {
    let api = Arc::new(MockDirectory::default());
    let mut page = ResultsPage::new(api, PageQuery::default());
    assert!(page.load_service_types().await.is_empty());

    let api = Arc::new(MockDirectory {
        services: Some(vec![ServiceType {
            id: "s1".to_string(),
            name: "Lounge".to_string(),
            image: String::new(),
        }]),
        ..MockDirectory::default()
    });
    let mut page = ResultsPage::new(api, PageQuery::default());
    assert_eq!(page.load_service_types().await.len(), 1);
    assert_eq!(page.service_types().len(), 1);
}
