//! OHLCV historical data at minute, hour and day resolution.
//!
//! Each operation returns open/high/low/close plus volume-from/volume-to per
//! interval. `limit`, `aggregate`, `to_ts` and `exchange` are the usual knobs.

use serde_json::Value;

use crate::core::{CcClient, CcError, Params, endpoint};

impl CcClient {
    /// Minute-resolution history. The service only keeps about seven days of
    /// minute data; use the hourly or daily path for anything older.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn histo_minute(
        &self,
        fsym: &str,
        tsym: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::HISTO_MINUTE, &[fsym, tsym], params)
            .await
    }

    /// Hour-resolution history.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn histo_hour(
        &self,
        fsym: &str,
        tsym: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::HISTO_HOUR, &[fsym, tsym], params)
            .await
    }

    /// Day-resolution history, bucketed at 00:00 GMT.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn histo_day(
        &self,
        fsym: &str,
        tsym: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::HISTO_DAY, &[fsym, tsym], params).await
    }
}
