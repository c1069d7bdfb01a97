//! Live status aggregation.
//!
//! Fetches the live status of an ordered list of stations, one request at
//! a time. The Nth request is only issued once the (N-1)th has completed,
//! so the output order is the input order without any correlation step.

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::{StationId, StationStatus};
use crate::jcdecaux::ProviderError;

/// Contract and credentials for one resolution, passed to every provider
/// call instead of being held by the client.
#[derive(Debug, Clone, Copy)]
pub struct ProviderScope<'a> {
    /// Operator locality identifier, e.g. `Lyon`.
    pub contract: &'a str,
    pub api_key: &'a str,
}

/// Source of live station status.
///
/// This abstraction allows the aggregator to be tested with mock data.
pub trait StatusProvider {
    /// Fetch the current status of a single station.
    fn fetch_status(
        &self,
        station: StationId,
        scope: &ProviderScope<'_>,
    ) -> impl Future<Output = Result<StationStatus, ProviderError>> + Send;
}

/// A status fetch failed; the whole aggregation is abandoned.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch status of station {station}: {source}")]
pub struct AggregateError {
    pub station: StationId,
    #[source]
    pub source: ProviderError,
}

/// Fetch the status of every station in `stations`, in order.
///
/// Returns one status per input identifier, in input order. The first
/// failure aborts the loop: no further request is issued and the statuses
/// gathered so far are dropped.
pub async fn aggregate<P: StatusProvider>(
    provider: &P,
    stations: &[StationId],
    scope: &ProviderScope<'_>,
) -> Result<Vec<StationStatus>, AggregateError> {
    let mut statuses = Vec::with_capacity(stations.len());

    for &station in stations {
        match provider.fetch_status(station, scope).await {
            Ok(status) => {
                debug!(station = %station, open = status.is_open, "Fetched station status");
                statuses.push(status);
            }
            Err(source) => {
                warn!(
                    station = %station,
                    fetched = statuses.len(),
                    error = %source,
                    "Status fetch failed, aborting aggregation"
                );
                return Err(AggregateError { station, source });
            }
        }
    }

    Ok(statuses)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    struct EchoProvider;

    impl StatusProvider for EchoProvider {
        async fn fetch_status(
            &self,
            station: StationId,
            _scope: &ProviderScope<'_>,
        ) -> Result<StationStatus, ProviderError> {
            Ok(StationStatus {
                id: station,
                name: String::new(),
                address: String::new(),
                is_open: false,
                available_bikes: 0,
                available_stands: 0,
            })
        }
    }

    proptest! {
        /// Output order equals input order for any permutation
        #[test]
        fn order_preserved(numbers in Just((0u32..12).collect::<Vec<_>>()).prop_shuffle()) {
            let input: Vec<StationId> = numbers.into_iter().map(StationId::new).collect();
            let scope = ProviderScope { contract: "Lyon", api_key: "k" };

            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let statuses = runtime.block_on(aggregate(&EchoProvider, &input, &scope)).unwrap();

            let output: Vec<StationId> = statuses.iter().map(|s| s.id).collect();
            prop_assert_eq!(output, input);
        }
    }
}
