//! Spot-price and averaging operations.

use serde_json::Value;

use crate::core::{CcClient, CcError, Params, endpoint};

impl CcClient {
    /// Gets the price of a currency against one or more other currencies.
    ///
    /// `tsyms` is a comma-separated list of target symbols. Recognized
    /// options include `exchange`, `extra_params`, `sign` and
    /// `try_conversion`.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] if the request could not be sent or the body was
    /// not valid JSON. An unknown symbol is *not* an error here; the service
    /// reports it inside the document.
    pub async fn price(
        &self,
        fsym: &str,
        tsyms: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::PRICE, &[fsym, tsyms], params).await
    }

    /// Gets a matrix of prices: each `fsyms` entry against each `tsyms`
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn price_multi(
        &self,
        fsyms: &str,
        tsyms: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::PRICE_MULTI, &[fsyms, tsyms], params)
            .await
    }

    /// Gets the full current trading info (price, volume, open, high, low)
    /// for each pair, including `RAW` and `DISPLAY` representations. Pairs
    /// that do not trade directly are converted through BTC; inverted pairs
    /// are used when only the opposite direction trades.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn price_multi_full(
        &self,
        fsyms: &str,
        tsyms: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::PRICE_MULTI_FULL, &[fsyms, tsyms], params)
            .await
    }

    /// Computes the volume-weighted average trading info for a pair across
    /// the given exchanges (`e` is a comma-separated exchange list).
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn generate_avg(
        &self,
        fsym: &str,
        tsym: &str,
        e: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::GENERATE_AVG, &[fsym, tsym, e], params)
            .await
    }

    /// Gets the day-average price for a pair, based on hourly VWAP data.
    ///
    /// Defaults to the current day; use [`Params::to_ts`] for another day,
    /// [`Params::avg_type`] to pick the calculation, and
    /// [`Params::utc_hour_diff`] for non-UTC day boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn day_avg(
        &self,
        fsym: &str,
        tsym: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::DAY_AVG, &[fsym, tsym], params).await
    }

    /// Gets the price of a currency at a given timestamp (set via
    /// [`Params::ts`]), taken from end-of-day data. Falls back to BTC
    /// conversion when the pair has no direct trades near the timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CcError`] on transport or parse failure.
    pub async fn price_historical(
        &self,
        fsym: &str,
        tsyms: &str,
        params: &Params,
    ) -> Result<Value, CcError> {
        self.call(&endpoint::PRICE_HISTORICAL, &[fsym, tsyms], params)
            .await
    }
}
