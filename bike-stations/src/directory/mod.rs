//! Cached station directory.
//!
//! The directory is a full snapshot of the operator's stations (number,
//! name, address, position). It is read fresh from its store at the start
//! of each resolution and only rewritten by an explicit refresh.

mod error;
mod store;

use std::future::Future;

use tracing::info;

use crate::aggregate::ProviderScope;
use crate::domain::StationRecord;
use crate::jcdecaux::ProviderError;

pub use error::DirectoryError;
pub use store::{JsonFileStore, StoreConfig};

/// Whole-document storage for the station list.
pub trait DirectoryStore {
    /// Read the full station list.
    fn load(&self) -> Result<Vec<StationRecord>, DirectoryError>;

    /// Replace the stored station list.
    fn save(&self, stations: &[StationRecord]) -> Result<(), DirectoryError>;
}

/// Provider of the full station listing, used to refresh the store.
pub trait StationSource {
    fn fetch_all(
        &self,
        scope: &ProviderScope<'_>,
    ) -> impl Future<Output = Result<Vec<StationRecord>, ProviderError>> + Send;
}

/// In-memory view of the stations for one request.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: Vec<StationRecord>,
}

impl StationDirectory {
    pub fn new(stations: Vec<StationRecord>) -> Self {
        Self { stations }
    }

    /// Read the directory from `store`.
    pub fn load<S: DirectoryStore>(store: &S) -> Result<Self, DirectoryError> {
        store.load().map(Self::new)
    }

    /// Stations in stored order.
    pub fn records(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Error from a directory refresh.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    /// The listing could not be fetched; the store is untouched
    #[error("failed to fetch station listing: {0}")]
    Provider(#[from] ProviderError),

    /// The listing was fetched but could not be stored
    #[error(transparent)]
    Store(#[from] DirectoryError),
}

/// Fetch the full listing from `source` and overwrite `store` with it.
///
/// Returns the number of stations written.
pub async fn refresh<P: StationSource, S: DirectoryStore>(
    source: &P,
    store: &S,
    scope: &ProviderScope<'_>,
) -> Result<usize, RefreshError> {
    let stations = source.fetch_all(scope).await?;
    store.save(&stations)?;

    info!(contract = scope.contract, stations = stations.len(), "Station directory refreshed");
    Ok(stations.len())
}
