//! cryptocompare-rs: ergonomic CryptoCompare market-data client.
//!
//! Every operation is an async method on [`CcClient`] that returns the raw
//! JSON document from the service as a [`serde_json::Value`]. The service
//! reports its own failures inside the body (`"Response": "Error"`), so a
//! successful fetch is not necessarily a successful operation; use
//! [`ServiceStatus`] to classify a resolved document.
//!
//! ```no_run
//! use cryptocompare_rs::{CcClient, Params};
//!
//! # async fn run() -> Result<(), cryptocompare_rs::CcError> {
//! let client = CcClient::builder().build()?;
//! let doc = client.price("ETH", "BTC,USD", &Params::new()).await?;
//! println!("{doc}");
//! # Ok(())
//! # }
//! ```

pub mod core;

mod coins;
mod history;
mod mining;
mod price;
mod social;
mod top;

pub use crate::core::{CcClient, CcClientBuilder, CcError, ParamValue, Params, ServiceStatus};
