//! Nearest-station resolution pipeline.
//!
//! One invocation runs, strictly in sequence:
//!
//! 1. validate the configuration,
//! 2. parse the command,
//! 3. geocode the address,
//! 4. load the station directory,
//! 5. select the nearest stations,
//! 6. fetch their live status one by one,
//! 7. render the spoken answer.
//!
//! Each external call is awaited before the next is issued. Any failure
//! ends the invocation and is turned into a fixed sentence for the user.

mod command;
mod config;
mod error;

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aggregate::{StatusProvider, aggregate};
use crate::directory::{DirectoryStore, StationDirectory, StationSource, refresh};
use crate::domain::StationId;
use crate::geocoding::Geocoder;
use crate::nearest::select_nearest;
use crate::speech::render;

pub use command::{
    Command, Intent, Mode, ResolutionRequest, normalize_address, parse_command, parse_dictation,
};
pub use config::{DEFAULT_COUNTRY, ResolverConfig, ValidConfig};
pub use error::ResolveError;

/// Sentence spoken after a successful directory refresh.
pub const REFRESHED_MESSAGE: &str = "The station list has been updated.";

/// Answer returned to the host.
///
/// Serializes as `{"speech": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Speech(String),
    Error(String),
}

impl Reply {
    /// The text to speak, whichever the outcome.
    pub fn text(&self) -> &str {
        match self {
            Reply::Speech(text) | Reply::Error(text) => text,
        }
    }
}

/// Pipeline stages, used to label log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ValidatingConfig,
    ParsingCommand,
    Geocoding,
    LoadingDirectory,
    SelectingCandidates,
    AggregatingStatus,
    Rendering,
    Refreshing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ValidatingConfig => "validating_config",
            Stage::ParsingCommand => "parsing_command",
            Stage::Geocoding => "geocoding",
            Stage::LoadingDirectory => "loading_directory",
            Stage::SelectingCandidates => "selecting_candidates",
            Stage::AggregatingStatus => "aggregating_status",
            Stage::Rendering => "rendering",
            Stage::Refreshing => "refreshing",
        };
        f.write_str(name)
    }
}

/// Resolves commands against a geocoder, a station provider and a
/// directory store.
///
/// The resolver holds no per-request state: configuration is passed to
/// every call, so concurrent invocations do not interfere.
#[derive(Debug, Clone)]
pub struct Resolver<G, P, S> {
    geocoder: G,
    provider: P,
    store: S,
}

impl<G, P, S> Resolver<G, P, S>
where
    G: Geocoder,
    P: StatusProvider + StationSource,
    S: DirectoryStore,
{
    pub fn new(geocoder: G, provider: P, store: S) -> Self {
        Self {
            geocoder,
            provider,
            store,
        }
    }

    /// Run one invocation and produce the host-facing reply.
    pub async fn resolve(&self, command: &Command, config: &ResolverConfig) -> Reply {
        match self.run(command, config).await {
            Ok(speech) => Reply::Speech(speech),
            Err(err) => {
                warn!(mode = ?command.mode, error = %err, "Resolution failed");
                Reply::Error(err.user_message().to_string())
            }
        }
    }

    /// Run one invocation, keeping the failure cause.
    pub async fn run(
        &self,
        command: &Command,
        config: &ResolverConfig,
    ) -> Result<String, ResolveError> {
        debug!(stage = %Stage::ValidatingConfig, "Entering stage");
        let config = config.validate()?;

        debug!(stage = %Stage::ParsingCommand, mode = ?command.mode, "Entering stage");
        match parse_command(command, &config)? {
            Intent::Nearest(request) => self.nearest(&request, &config).await,
            Intent::Station(station) => self.station(station, &config).await,
            Intent::Refresh => self.refresh_directory(&config).await,
        }
    }

    /// Geocode, rank and report the stations closest to an address.
    async fn nearest(
        &self,
        request: &ResolutionRequest,
        config: &ValidConfig,
    ) -> Result<String, ResolveError> {
        debug!(stage = %Stage::Geocoding, address = %request.address, "Entering stage");
        let candidates = self
            .geocoder
            .geocode(&config.geocode_query(&request.address))
            .await?;
        let location = candidates
            .first()
            .ok_or_else(|| ResolveError::AddressNotFound(request.address.clone()))?;
        let target = location.position;
        debug!(
            candidates = candidates.len(),
            matched = location.formatted_address.as_deref().unwrap_or(&request.address),
            "Geocoded address"
        );

        debug!(stage = %Stage::LoadingDirectory, target = %target, "Entering stage");
        let directory = StationDirectory::load(&self.store)?;

        debug!(
            stage = %Stage::SelectingCandidates,
            stations = directory.len(),
            k = request.station_count,
            "Entering stage"
        );
        let ranked = select_nearest(directory.records(), &target, request.station_count);
        if ranked.is_empty() {
            return Err(ResolveError::NoCandidates);
        }

        let stations: Vec<StationId> = ranked.iter().map(|c| c.station).collect();
        for candidate in &ranked {
            debug!(
                station = %candidate.station,
                distance_km = candidate.distance_km,
                "Selected candidate"
            );
        }

        self.report(&stations, config).await
    }

    /// Report a single station without geocoding or ranking.
    async fn station(
        &self,
        station: StationId,
        config: &ValidConfig,
    ) -> Result<String, ResolveError> {
        self.report(&[station], config).await
    }

    async fn report(
        &self,
        stations: &[StationId],
        config: &ValidConfig,
    ) -> Result<String, ResolveError> {
        debug!(stage = %Stage::AggregatingStatus, stations = stations.len(), "Entering stage");
        let statuses = aggregate(&self.provider, stations, &config.provider_scope()).await?;

        debug!(stage = %Stage::Rendering, "Entering stage");
        let speech = render(&statuses);
        info!(stations = statuses.len(), "Resolved station status");
        Ok(speech)
    }

    async fn refresh_directory(&self, config: &ValidConfig) -> Result<String, ResolveError> {
        debug!(stage = %Stage::Refreshing, contract = %config.contract, "Entering stage");
        refresh(&self.provider, &self.store, &config.provider_scope()).await?;
        Ok(REFRESHED_MESSAGE.to_string())
    }
}
