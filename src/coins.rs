//! Coin catalog and per-coin snapshots.

use serde_json::Value;

use crate::core::{CcClient, CcError, Params, endpoint};

impl CcClient {
    /// Gets general info for every coin the service lists.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn coin_list(&self) -> Result<Value, CcError> {
        self.call(&endpoint::COIN_LIST, &[], &Params::new()).await
    }

    /// Gets aggregated and per-exchange data for a pair, plus block-explorer
    /// style information about the coin. Served from the legacy site root.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn coin_snapshot(&self, fsym: &str, tsym: &str) -> Result<Value, CcError> {
        self.call(&endpoint::COIN_SNAPSHOT, &[fsym, tsym], &Params::new())
            .await
    }

    /// Gets the general data, streamer subscription channels and aggregated
    /// prices for all pairs of a coin, addressed by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn coin_snapshot_full_by_id(&self, id: i64) -> Result<Value, CcError> {
        self.call(
            &endpoint::COIN_SNAPSHOT_FULL_BY_ID,
            &[&id.to_string()],
            &Params::new(),
        )
        .await
    }
}
