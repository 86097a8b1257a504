//! Query-string construction.
//!
//! The service expects plain `key=value` pairs and documents some defaults as
//! sensitive to required-parameter order, so URLs are assembled by string
//! concatenation rather than through `Url::query_pairs_mut` (which would
//! percent-encode values the service expects verbatim). The only encoding
//! performed anywhere is `%20` for spaces in `extraParams`.

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

/// A value for an optional query parameter.
///
/// Serialized in its canonical textual form: strings verbatim, integers in
/// base 10, booleans as `true`/`false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A string value, emitted verbatim.
    Str(String),
    /// An integer value, emitted in base 10.
    Int(i64),
    /// A boolean value, emitted as `true` or `false`.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// The optional-parameter bag passed to every operation.
///
/// Typed setters cover the parameters the service documents; [`Params::custom`]
/// passes through anything undocumented. Keys are unique (a second set wins)
/// and are emitted in key order, so the same bag always builds the same URL.
///
/// The bag is never validated against an operation's allowed set — the remote
/// service alone decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `e`: the exchange to source data from (default: aggregated `CCCAGG`).
    #[must_use]
    pub fn exchange(self, name: impl Into<String>) -> Self {
        self.custom("e", ParamValue::Str(name.into()))
    }

    /// `extraParams`: the name of the calling application. Spaces are encoded
    /// as `%20` when the URL is built.
    #[must_use]
    pub fn extra_params(self, app: impl Into<String>) -> Self {
        self.custom("extraParams", ParamValue::Str(app.into()))
    }

    /// `sign`: ask the server to sign the response.
    #[must_use]
    pub fn sign(self, sign: bool) -> Self {
        self.custom("sign", ParamValue::Bool(sign))
    }

    /// `tryConversion`: allow BTC-mediated conversion when the pair does not
    /// trade directly.
    #[must_use]
    pub fn try_conversion(self, try_conversion: bool) -> Self {
        self.custom("tryConversion", ParamValue::Bool(try_conversion))
    }

    /// `limit`: maximum number of data points to return.
    #[must_use]
    pub fn limit(self, limit: i64) -> Self {
        self.custom("limit", ParamValue::Int(limit))
    }

    /// `aggregate`: bucket size, in intervals, for historical data.
    #[must_use]
    pub fn aggregate(self, aggregate: i64) -> Self {
        self.custom("aggregate", ParamValue::Int(aggregate))
    }

    /// `toTs`: last unix timestamp to return data for.
    #[must_use]
    pub fn to_ts(self, ts: i64) -> Self {
        self.custom("toTs", ParamValue::Int(ts))
    }

    /// `ts`: the unix timestamp of interest for historical price lookups.
    #[must_use]
    pub fn ts(self, ts: i64) -> Self {
        self.custom("ts", ParamValue::Int(ts))
    }

    /// `avgType`: day-average calculation type (`HourVWAP`, `MidHighLow`,
    /// `VolFVolT`).
    #[must_use]
    pub fn avg_type(self, avg_type: impl Into<String>) -> Self {
        self.custom("avgType", ParamValue::Str(avg_type.into()))
    }

    /// `UTCHourDiff`: timezone offset, in hours, for day boundaries.
    #[must_use]
    pub fn utc_hour_diff(self, hours: i64) -> Self {
        self.custom("UTCHourDiff", ParamValue::Int(hours))
    }

    /// Sets an arbitrary parameter, for options the service accepts but this
    /// crate does not enumerate.
    #[must_use]
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the bag holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Replicates the service's documented identification encoding: spaces in
/// `extraParams` become `%20`, everything else is left alone.
fn encode_value(key: &str, value: &ParamValue) -> String {
    let rendered = value.to_string();
    if key == "extraParams" {
        rendered.replace(' ', "%20")
    } else {
        rendered
    }
}

/// Builds the full request URL for one operation.
///
/// Required pairs come first, in exactly the order supplied; optional pairs
/// follow in key order. Total: no input can make this fail.
pub(crate) fn build_url(
    base: &Url,
    path: &str,
    required: &[(&str, &str)],
    params: &Params,
) -> String {
    let mut url = format!("{base}{path}");
    let mut sep = '?';

    for (name, value) in required {
        url.push(sep);
        url.push_str(name);
        url.push('=');
        url.push_str(value);
        sep = '&';
    }

    for (name, value) in params.iter() {
        url.push(sep);
        url.push_str(name);
        url.push('=');
        url.push_str(&encode_value(name, value));
        sep = '&';
    }

    url
}
