//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::JsonFileStore;
use crate::geocoding::GoogleGeocoder;
use crate::jcdecaux::JcDecauxClient;
use crate::pipeline::{Resolver, ResolverConfig};

/// Resolver wired to the real HTTP providers and the snapshot file.
pub type HttpResolver = Resolver<GoogleGeocoder, JcDecauxClient, JsonFileStore>;

/// Shared application state.
///
/// The configuration is handed to the resolver on every request, exactly
/// as a host would pass it per command.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<HttpResolver>,
    pub config: Arc<ResolverConfig>,
}

impl AppState {
    pub fn new(resolver: HttpResolver, config: ResolverConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        }
    }
}
