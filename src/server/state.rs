use std::sync::Arc;

use reqwest::Client;
use url::Url;

use crate::domain::ports::DirectoryConfig;
use crate::utils::error::Result;

/// Shared by every handler behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Client,
    pub airport_search_url: Url,
    pub vendor_url: Url,
}

impl AppState {
    pub fn new(client: Client, airport_search_url: Url, vendor_url: Url) -> Arc<Self> {
        Arc::new(Self {
            client,
            airport_search_url,
            vendor_url,
        })
    }

    pub fn from_config<C: DirectoryConfig + ?Sized>(config: &C) -> Result<Arc<Self>> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self::new(
            client,
            Url::parse(config.airport_search_endpoint())?,
            Url::parse(config.vendor_endpoint())?,
        ))
    }
}
