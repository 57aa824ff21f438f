use crate::domain::model::{Airport, Business, Provider, ServiceType, VendorAck, VendorRegistration};
use crate::domain::ports::{
    AirportSearch, BusinessDirectory, DirectoryConfig, ServiceCatalog, VendorRegistry,
};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub airport_search: Url,
    pub service_types: Url,
    pub business: Url,
    pub vendor: Url,
}

impl Endpoints {
    pub fn from_config<C: DirectoryConfig + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self {
            airport_search: Url::parse(config.airport_search_endpoint())?,
            service_types: Url::parse(config.service_types_endpoint())?,
            business: Url::parse(config.business_endpoint())?,
            vendor: Url::parse(config.vendor_endpoint())?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamMessage {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// reqwest client for every directory API.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    endpoints: Endpoints,
}

impl HttpDirectory {
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn from_config<C: DirectoryConfig + ?Sized>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::new(client, Endpoints::from_config(config)?))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, name: &str, url: Url) -> Result<T> {
        tracing::debug!("Making {} request to: {}", name, url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("{} response status: {}", name, status);

        if !status.is_success() {
            return Err(DirectoryError::UpstreamStatusError {
                endpoint: name.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    fn provider_url(&self, provider_id: &str) -> Result<Url> {
        let mut url = self.endpoints.business.clone();
        url.path_segments_mut()
            .map_err(|_| DirectoryError::ConfigError {
                message: format!("business endpoint {} cannot be a base URL", self.endpoints.business),
            })?
            .pop_if_empty()
            .push("providers")
            .push(provider_id);
        Ok(url)
    }
}

#[async_trait]
impl AirportSearch for HttpDirectory {
    async fn search_airports(&self, query: &str) -> Result<Vec<Airport>> {
        if query.trim().is_empty() {
            return Err(DirectoryError::validation("Query parameter is required"));
        }
        let mut url = self.endpoints.airport_search.clone();
        url.query_pairs_mut().append_pair("query", query);
        self.get_json("airport_search", url).await
    }
}

#[async_trait]
impl ServiceCatalog for HttpDirectory {
    async fn service_types(&self) -> Result<Vec<ServiceType>> {
        self.get_json("service_types", self.endpoints.service_types.clone())
            .await
    }
}

#[async_trait]
impl BusinessDirectory for HttpDirectory {
    async fn search_businesses(&self, airport: &str, service: Option<&str>) -> Result<Vec<Business>> {
        let mut url = self.endpoints.business.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("airport", airport);
            if let Some(service) = service {
                pairs.append_pair("service", service);
            }
        }
        self.get_json("business_search", url).await
    }

    async fn provider(&self, provider_id: &str) -> Result<Provider> {
        let url = self.provider_url(provider_id)?;
        self.get_json("provider", url).await
    }
}

#[async_trait]
impl VendorRegistry for HttpDirectory {
    async fn register_vendor(&self, registration: &VendorRegistration) -> Result<VendorAck> {
        tracing::debug!("Submitting vendor registration to: {}", self.endpoints.vendor);
        let response = self
            .client
            .post(self.endpoints.vendor.clone())
            .json(registration)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Vendor response status: {}", status);

        let upstream_message = serde_json::from_str::<UpstreamMessage>(&body)
            .ok()
            .and_then(|parsed| parsed.message.or(parsed.error));

        let message = match (status.is_success(), upstream_message) {
            (_, Some(message)) => message,
            (true, None) => "Registration submitted successfully.".to_string(),
            (false, None) => format!("Registration failed with status {}", status.as_u16()),
        };

        Ok(VendorAck {
            success: status.is_success(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(business: &str) -> HttpDirectory {
        HttpDirectory::new(
            Client::new(),
            Endpoints {
                airport_search: Url::parse("https://api.test/basesearch").unwrap(),
                service_types: Url::parse("https://api.test/air/service-types").unwrap(),
                business: Url::parse(business).unwrap(),
                vendor: Url::parse("https://api.test/air/service-vendor").unwrap(),
            },
        )
    }

    #[test]
    fn test_provider_url_appends_segments() {
        let url = directory("https://api.test/aviation").provider_url("p 1").unwrap();
        assert_eq!(url.as_str(), "https://api.test/aviation/providers/p%201");

        let url = directory("https://api.test/aviation/").provider_url("p1").unwrap();
        assert_eq!(url.as_str(), "https://api.test/aviation/providers/p1");
    }

    #[tokio::test]
    async fn test_empty_airport_query_is_never_sent() {
        let err = directory("https://api.test/aviation")
            .search_airports("  ")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::ValidationError { .. }));
    }
}
