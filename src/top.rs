//! Volume-ranked top lists.

use serde_json::Value;

use crate::core::{CcClient, CcError, Params, endpoint};

impl CcClient {
    /// Gets the top trading pairs for a currency by aggregated volume. The
    /// service returns at most [`Params::limit`] pairs (default 5).
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn top_pairs(&self, fsym: &str, params: &Params) -> Result<Value, CcError> {
        self.call(&endpoint::TOP_PAIRS, &[fsym], params).await
    }
}
