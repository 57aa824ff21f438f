use std::sync::Arc;

use airport_directory::core::dismissal::Document;
use airport_directory::core::navigation::PageQuery;
use airport_directory::core::results::{ProviderState, ResultsState};
use airport_directory::core::search_bar::SearchBarOptions;
use airport_directory::core::ServiceCatalog;
use airport_directory::utils::{logger, validation::Validate};
use airport_directory::{CliConfig, HttpDirectory, ResultsPage, SearchBar};
use anyhow::{bail, Context, Result};
use clap::Parser;

/// Drives the header search bar headlessly against the live directory APIs.
#[derive(Debug, Parser)]
#[command(name = "directory-search")]
#[command(about = "Search airport services from the terminal")]
struct Args {
    /// Text typed into the airport input
    #[arg(long)]
    airport: String,

    /// Which airport candidate to pick
    #[arg(long, default_value = "0")]
    pick: usize,

    /// Text typed into the service input
    #[arg(long)]
    service: String,

    /// Open the detail view of the first result
    #[arg(long)]
    details: bool,

    #[command(flatten)]
    config: CliConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.config.verbose);

    args.config
        .validate()
        .context("invalid directory configuration")?;

    let directory = Arc::new(HttpDirectory::from_config(&args.config)?);

    let services = match directory.service_types().await {
        Ok(services) => services,
        Err(e) => {
            tracing::warn!("⚠️ Service types unavailable: {}", e);
            Vec::new()
        }
    };

    let document = Document::new();
    let mut bar = SearchBar::mount(
        Arc::clone(&directory),
        Arc::from(services),
        PageQuery::default(),
        &document,
        SearchBarOptions::from_config(&args.config),
    );

    bar.type_airport(args.airport.as_str());
    bar.settle().await;

    if bar.airport_results().is_empty() {
        bail!("No airports found for '{}'", args.airport);
    }
    for (i, airport) in bar.airport_results().iter().enumerate() {
        println!("{:>3}  {}  {}", i, airport.canonical_label(), airport.location());
    }

    let airport = bar
        .select_airport(args.pick)
        .with_context(|| format!("no airport candidate at index {}", args.pick))?;
    bar.settle().await;
    println!("✈️  {}", airport.canonical_label());

    bar.type_service(args.service.as_str());
    let target = bar.submit()?;
    println!("🔎 {}", target);

    let mut page = ResultsPage::new(directory, PageQuery::parse(&target)?);
    println!("{}", page.heading());

    let first = match page.load_results().await {
        ResultsState::Failed(message) => bail!("{}", message),
        state if state.is_empty_result() => {
            println!("No results found.");
            return Ok(());
        }
        state => {
            for business in state.businesses() {
                println!(
                    "- {} [{}] {} | open till {}",
                    business.business_name,
                    business.rating_text(),
                    business.short_address(),
                    business.open_till
                );
            }
            state.businesses().first().cloned()
        }
    };

    if let (true, Some(business)) = (args.details, first) {
        page.open_details(business).await;
        if let Some(item) = page.selected() {
            println!("\n{}", item.business.business_name);
            println!("{}", item.business.full_address());
            match &item.provider {
                ProviderState::Loaded(provider) => {
                    println!("Provided by {}", provider.provider_name);
                    if let Some(mailto) = provider.mailto() {
                        println!("{}", mailto);
                    }
                }
                other => {
                    if let Some(message) = other.message() {
                        println!("{}", message);
                    }
                }
            }
        }
    }

    Ok(())
}
