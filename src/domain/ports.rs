use crate::domain::model::{Airport, Business, Provider, ServiceType, VendorAck, VendorRegistration};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait DirectoryConfig: Send + Sync {
    fn airport_search_endpoint(&self) -> &str;
    fn service_types_endpoint(&self) -> &str;
    fn business_endpoint(&self) -> &str;
    fn vendor_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn debounce_delay(&self) -> Duration;
    fn min_query_len(&self) -> usize;
    fn bind_address(&self) -> String;
}

#[async_trait]
pub trait AirportSearch: Send + Sync {
    async fn search_airports(&self, query: &str) -> Result<Vec<Airport>>;
}

#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn service_types(&self) -> Result<Vec<ServiceType>>;
}

#[async_trait]
pub trait BusinessDirectory: Send + Sync {
    async fn search_businesses(&self, airport: &str, service: Option<&str>) -> Result<Vec<Business>>;
    async fn provider(&self, provider_id: &str) -> Result<Provider>;
}

#[async_trait]
pub trait VendorRegistry: Send + Sync {
    async fn register_vendor(&self, registration: &VendorRegistration) -> Result<VendorAck>;
}
