pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::adapters::HttpDirectory;
pub use crate::core::{results::ResultsPage, search_bar::SearchBar};
pub use domain::ports::DirectoryConfig;
pub use utils::error::{DirectoryError, Result};
