//! Command parsing.
//!
//! Turns the host's command (a mode tag plus, for address queries, the raw
//! dictation) into what the resolver should do.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::StationId;
use crate::nearest::{SHORTLIST, SINGLE};

use super::config::ValidConfig;
use super::error::ResolveError;

/// Phrase carrying an address, e.g. "give me the nearest stations to the
/// address 145 avenue Lacassagne Lyon". Group 1 is `station` or `stations`,
/// group 2 the address. Anything before "give" (a wake word) is ignored.
static DICTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:give|tell|show)\s+me\s+the\s+(?:nearest|closest)\s+(?:\S+\s+)?(stations?)\s+(?:to|near|from)\s+(?:the\s+address\s+)?(.+)",
    )
    .expect("dictation pattern is valid")
});

/// What the host asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Nearest station(s) to an address spoken by the user.
    AddressQuery,
    /// Re-download the station list.
    RefreshDirectory,
    /// Use the address or station from the configuration.
    #[default]
    DefaultFromConfig,
}

/// A command from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub mode: Mode,
    /// Raw dictation; only read in [`Mode::AddressQuery`].
    #[serde(default)]
    pub dictation: Option<String>,
}

impl Command {
    pub fn address_query(dictation: impl Into<String>) -> Self {
        Self {
            mode: Mode::AddressQuery,
            dictation: Some(dictation.into()),
        }
    }

    pub fn refresh_directory() -> Self {
        Self {
            mode: Mode::RefreshDirectory,
            dictation: None,
        }
    }

    pub fn default_from_config() -> Self {
        Self::default()
    }
}

/// Nearest-station lookup for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub address: String,
    /// How many stations to report, at least 1.
    pub station_count: usize,
}

/// What a command resolves to once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Rank stations around an address.
    Nearest(ResolutionRequest),
    /// Report a known station directly, skipping geocoding and ranking.
    Station(StationId),
    /// Refresh the cached directory.
    Refresh,
}

/// Parse `command` against the validated configuration.
pub fn parse_command(command: &Command, config: &ValidConfig) -> Result<Intent, ResolveError> {
    match command.mode {
        Mode::AddressQuery => {
            let dictation = command.dictation.as_deref().unwrap_or_default();
            parse_dictation(dictation)
                .map(Intent::Nearest)
                .ok_or_else(|| ResolveError::UnrecognizedInput(dictation.to_string()))
        }
        Mode::RefreshDirectory => Ok(Intent::Refresh),
        Mode::DefaultFromConfig => {
            if let Some(station) = config.default_station {
                return Ok(Intent::Station(station));
            }
            config
                .default_address
                .as_deref()
                .and_then(normalize_address)
                .map(|address| {
                    Intent::Nearest(ResolutionRequest {
                        address,
                        station_count: SINGLE,
                    })
                })
                .ok_or(ResolveError::NoDefaultConfigured)
        }
    }
}

/// Match a dictation against the address phrase.
///
/// "station" asks for the closest station only, "stations" for a shortlist.
pub fn parse_dictation(dictation: &str) -> Option<ResolutionRequest> {
    let captures = DICTATION.captures(dictation)?;
    let address = normalize_address(captures.get(2)?.as_str())?;
    let plural = captures.get(1)?.as_str().to_lowercase().ends_with('s');

    Some(ResolutionRequest {
        address,
        station_count: if plural { SHORTLIST } else { SINGLE },
    })
}

/// Collapse whitespace and drop trailing sentence punctuation.
///
/// Returns `None` when nothing is left.
pub fn normalize_address(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed
        .trim_end_matches(['.', '?', '!', ',', ';'])
        .trim_end();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
