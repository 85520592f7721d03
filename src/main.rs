use crate::config::Config;
use crate::listings::ListingStore;
use crate::pakwheels::PakWheelsScraper;
use crate::render::{page_ready, HttpFetcher, ListingRenderer};
use crate::router::{handle, AppState};
use astra::Server;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod errors;
mod listings;
mod pakwheels;
mod render;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "listing_cards", about = "Vehicle listing cards, served and rendered")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the listings page and its JSON endpoints
    Serve {
        #[arg(long)]
        addr: Option<SocketAddr>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Fetch the three endpoints of a running site and write the page as static HTML
    Render {
        #[arg(long)]
        base_url: String,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Refresh the data directory from PakWheels
    Scrape {
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve {
        addr: None,
        data_dir: None,
    });

    let result = match command {
        Command::Serve { addr, data_dir } => {
            config.addr = addr.unwrap_or(config.addr);
            config.data_dir = data_dir.unwrap_or(config.data_dir);
            serve(&config)
        }
        Command::Render { base_url, out } => render_static(&config, &base_url, out),
        Command::Scrape { data_dir } => {
            config.data_dir = data_dir.unwrap_or(config.data_dir);
            scrape(&config)
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        std::process::exit(1);
    }
}

fn serve(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(ListingStore::new(&config.data_dir));

    tracing::info!(
        addr = %config.addr,
        data_dir = %config.data_dir.display(),
        "Starting server at http://{}",
        config.addr
    );

    let server = Server::bind(&config.addr).max_workers(config.workers);

    server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    })?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

fn render_static(
    config: &Config,
    base_url: &str,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = ListingRenderer::new(HttpFetcher::new(base_url, config.fetch_timeout)?);
    let containers = page_ready(&renderer);
    let page = templates::pages::listings_page(&containers).into_string();

    match out {
        Some(path) => {
            std::fs::write(&path, page)?;
            tracing::info!(path = %path.display(), "wrote listings page");
        }
        None => println!("{page}"),
    }
    Ok(())
}

fn scrape(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = ListingStore::new(&config.data_dir);
    let scraper = PakWheelsScraper::new(config.fetch_timeout)?;

    let results = scraper.scrape_all(&store);
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();

    if failed == results.len() {
        return Err("every category failed to scrape".into());
    }
    Ok(())
}
