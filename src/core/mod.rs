pub mod airport_resolver;
pub mod catalog;
pub mod debounce;
pub mod dismissal;
pub mod navigation;
pub mod results;
pub mod search_bar;
pub mod service_filter;
pub mod vendor;

pub use crate::domain::model::{Airport, Business, Provider, ServiceType};
pub use crate::domain::ports::{AirportSearch, BusinessDirectory, ServiceCatalog, VendorRegistry};
pub use crate::utils::error::Result;
