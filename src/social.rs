//! Social statistics for coins and cryptopians.

use serde_json::Value;

use crate::core::{CcClient, CcError, Params, endpoint};

impl CcClient {
    /// Gets website, Twitter, Reddit, Facebook and code-repository stats for
    /// the coin (or cryptopian) with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn social_stats(&self, id: i64) -> Result<Value, CcError> {
        self.call(&endpoint::SOCIAL_STATS, &[&id.to_string()], &Params::new())
            .await
    }
}
