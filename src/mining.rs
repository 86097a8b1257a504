//! Mining hardware catalog.

use serde_json::Value;

use crate::core::{CcClient, CcError, Params, endpoint};

impl CcClient {
    /// Gets every piece of mining equipment the service lists, as an array
    /// of equipment objects. Served from the legacy site root.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn mining_equipment(&self) -> Result<Value, CcError> {
        self.call(&endpoint::MINING_EQUIPMENT, &[], &Params::new())
            .await
    }
}
