//! Static descriptors for every remote operation.
//!
//! One descriptor per operation, declared once; the per-operation methods on
//! `CcClient` only supply required values and a `Params` bag.

/// Which service root an operation lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiHost {
    /// The current min-api root.
    Min,
    /// The legacy site root, still used by a handful of operations.
    Site,
}

/// An immutable description of one remote operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint {
    /// Operation name, used for instrumentation.
    pub name: &'static str,
    pub host: ApiHost,
    /// Path segment appended to the host's base URL.
    pub path: &'static str,
    /// Required parameter names, in the order the service documents them.
    pub required: &'static [&'static str],
}

const fn ep(
    name: &'static str,
    host: ApiHost,
    path: &'static str,
    required: &'static [&'static str],
) -> Endpoint {
    Endpoint {
        name,
        host,
        path,
        required,
    }
}

pub(crate) const COIN_LIST: Endpoint = ep("coin_list", ApiHost::Min, "all/coinlist", &[]);
pub(crate) const PRICE: Endpoint = ep("price", ApiHost::Min, "price", &["fsym", "tsyms"]);
pub(crate) const PRICE_MULTI: Endpoint =
    ep("price_multi", ApiHost::Min, "pricemulti", &["fsyms", "tsyms"]);
pub(crate) const PRICE_MULTI_FULL: Endpoint = ep(
    "price_multi_full",
    ApiHost::Min,
    "pricemultifull",
    &["fsyms", "tsyms"],
);
pub(crate) const GENERATE_AVG: Endpoint = ep(
    "generate_avg",
    ApiHost::Min,
    "generateAvg",
    &["fsym", "tsym", "e"],
);
pub(crate) const DAY_AVG: Endpoint = ep("day_avg", ApiHost::Min, "dayAvg", &["fsym", "tsym"]);
pub(crate) const PRICE_HISTORICAL: Endpoint = ep(
    "price_historical",
    ApiHost::Min,
    "pricehistorical",
    &["fsym", "tsyms"],
);
pub(crate) const HISTO_MINUTE: Endpoint =
    ep("histo_minute", ApiHost::Min, "histominute", &["fsym", "tsym"]);
pub(crate) const HISTO_HOUR: Endpoint =
    ep("histo_hour", ApiHost::Min, "histohour", &["fsym", "tsym"]);
pub(crate) const HISTO_DAY: Endpoint = ep("histo_day", ApiHost::Min, "histoday", &["fsym", "tsym"]);
pub(crate) const TOP_PAIRS: Endpoint = ep("top_pairs", ApiHost::Min, "top/pairs", &["fsym"]);

pub(crate) const COIN_SNAPSHOT: Endpoint = ep(
    "coin_snapshot",
    ApiHost::Site,
    "coinsnapshot",
    &["fsym", "tsym"],
);
pub(crate) const COIN_SNAPSHOT_FULL_BY_ID: Endpoint = ep(
    "coin_snapshot_full_by_id",
    ApiHost::Site,
    "coinsnapshotfullbyid",
    &["id"],
);
pub(crate) const SOCIAL_STATS: Endpoint =
    ep("social_stats", ApiHost::Site, "socialstats", &["id"]);
pub(crate) const MINING_EQUIPMENT: Endpoint =
    ep("mining_equipment", ApiHost::Site, "miningequipment", &[]);
