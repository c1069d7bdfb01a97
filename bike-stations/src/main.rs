use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bike_stations::directory::{JsonFileStore, StoreConfig};
use bike_stations::domain::StationId;
use bike_stations::geocoding::{GeocodingConfig, GoogleGeocoder};
use bike_stations::jcdecaux::{JcDecauxClient, JcDecauxConfig};
use bike_stations::pipeline::{Command, Reply, Resolver, ResolverConfig};
use bike_stations::web::{AppState, HttpResolver, create_router};

/// Spoken status of the bike-sharing stations nearest to an address.
#[derive(Debug, Parser)]
#[command(name = "bike-stations", version)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Args)]
struct Settings {
    /// Operator contract (city), e.g. Lyon
    #[arg(long, env = "BIKE_CONTRACT", global = true)]
    contract: Option<String>,

    /// JCDecaux API key
    #[arg(long, env = "JCDECAUX_API_KEY", hide_env_values = true, global = true)]
    status_api_key: Option<String>,

    /// Google Geocoding API key
    #[arg(long, env = "GEOCODING_API_KEY", hide_env_values = true, global = true)]
    geocoding_api_key: Option<String>,

    /// Address used by the `default` command
    #[arg(long, env = "BIKE_DEFAULT_ADDRESS", global = true)]
    default_address: Option<String>,

    /// Station number used by the `default` command
    #[arg(long, env = "BIKE_DEFAULT_STATION", global = true)]
    default_station: Option<u32>,

    /// Country qualifier for geocoding
    #[arg(long, env = "BIKE_COUNTRY", global = true)]
    country: Option<String>,

    /// Station list snapshot
    #[arg(
        long,
        env = "BIKE_STATIONS_FILE",
        default_value = "stations-list.json",
        global = true
    )]
    stations_file: PathBuf,

    /// HTTP timeout for provider calls, in seconds
    #[arg(long, default_value_t = 10, global = true)]
    timeout_secs: u64,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Answer a dictated request, e.g. "give me the nearest station to place Bellecour"
    Ask { dictation: String },
    /// Download the station list and replace the snapshot
    Refresh,
    /// Report the configured default station or address
    Default,
    /// Serve the resolver over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Settings {
    fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            contract: self.contract.clone(),
            status_api_key: self.status_api_key.clone(),
            geocoding_api_key: self.geocoding_api_key.clone(),
            default_address: self.default_address.clone(),
            default_station: self.default_station.map(StationId::new),
            country: self.country.clone(),
        }
    }

    fn resolver(&self) -> Result<HttpResolver, Box<dyn std::error::Error>> {
        let geocoder =
            GoogleGeocoder::new(GeocodingConfig::new().with_timeout(self.timeout_secs))?;
        let provider = JcDecauxClient::new(JcDecauxConfig::new().with_timeout(self.timeout_secs))?;
        let store = JsonFileStore::new(StoreConfig::new(&self.stations_file));

        Ok(Resolver::new(geocoder, provider, store))
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout only carries the reply
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let resolver = cli.settings.resolver()?;
    let config = cli.settings.resolver_config();

    let command = match cli.command {
        CliCommand::Ask { dictation } => Command::address_query(dictation),
        CliCommand::Refresh => Command::refresh_directory(),
        CliCommand::Default => Command::default_from_config(),
        CliCommand::Serve { addr } => {
            let app = create_router(AppState::new(resolver, config));
            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(%addr, "Bike station resolver listening");
            axum::serve(listener, app).await?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let reply = resolver.resolve(&command, &config).await;
    println!("{}", serde_json::to_string(&reply)?);

    Ok(match reply {
        Reply::Speech(_) => ExitCode::SUCCESS,
        Reply::Error(_) => ExitCode::FAILURE,
    })
}
