mod commands;

use clap::{Parser, Subcommand};
use roost_listings::ListingsClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "roost-cli")]
#[command(about = "Query property listings from the command line")]
struct Cli {
    /// Answer every read from the built-in mock catalog
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search listings with raw query filters, e.g. `type=commercial price_max=60000`
    Search {
        #[arg(value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Show one listing by id
    Property { id: String },
    /// List cities with listings
    Cities,
    /// List neighborhoods within a city
    Neighborhoods { city: String },
    /// Rank neighborhoods by listing count
    TopNeighborhoods {
        /// Maximum rows to return
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// City to rank (defaults to the upstream's choice)
        #[arg(long)]
        city: Option<String>,
    },
    /// List documents an applicant supplies for an asset type
    Documents {
        #[arg(default_value = "default")]
        asset_type: String,
    },
    /// Read or change a user's shortlist
    Shortlist {
        /// The user's bearer token
        #[arg(long, env = "ROOST_USER_TOKEN", hide_env_values = true, default_value = "")]
        token: String,

        #[command(subcommand)]
        action: ShortlistAction,
    },
}

#[derive(Debug, Subcommand)]
enum ShortlistAction {
    /// Show one page of the shortlist
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = roost_core::DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Report whether a listing is shortlisted
    Check { asset_id: String },
    /// Shortlist a listing
    Add { asset_id: String },
    /// Remove a listing from the shortlist
    Remove { asset_id: String },
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = roost_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut client = ListingsClient::from_config(&config)?;
    if cli.mock {
        client = client.with_mock(true);
    }

    match cli.command {
        Commands::Search { filters } => commands::run_search(&client, filters).await,
        Commands::Property { id } => commands::run_property(&client, &id).await,
        Commands::Cities => commands::run_cities(&client).await,
        Commands::Neighborhoods { city } => commands::run_neighborhoods(&client, &city).await,
        Commands::TopNeighborhoods { limit, city } => {
            commands::run_top_neighborhoods(&client, limit, city.as_deref()).await
        }
        Commands::Documents { asset_type } => commands::run_documents(&client, &asset_type).await,
        Commands::Shortlist { token, action } => {
            commands::run_shortlist(&client, &token, action).await
        }
    }
}

#[cfg(test)]
mod tests;
