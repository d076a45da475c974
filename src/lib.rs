//! `shapeshift-io-rs`
//!
//! Client for the ShapeShift exchange-rate API: rates, deposit limits, market
//! info, supported coins and address validation.
//!
//! The service answers application errors with HTTP 200 and an `error` field in
//! the body. Every call returns either a typed value or exactly one
//! [`ShapeShiftError`]: `Transport` for network and non-2xx failures, `Api` for
//! an embedded error (see [`ShapeShiftError::is_unknown_pair`]), and
//! `NotSupported` for documented remote operations this client does not cover.
//!
//! ## Quickstart
//!
//! ```no_run
//! use shapeshift_io_rs::ShapeShift;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), shapeshift_io_rs::ShapeShiftError> {
//! let client = ShapeShift::new()?;
//! let rate = client.get_rate("btc", "ltc").await?;
//! println!("btc_ltc rate={}", rate);
//!
//! let check = client.validate_address("1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "btc").await?;
//! println!("valid={} error={:?}", check.is_valid, check.error);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod shapeshift;

pub use common::{
    ApiErrorKind, ClientConfig, CoinPair, RestTrait, ShapeShiftError, build_pair_identifier,
};
pub use shapeshift::{
    ENDPOINTS, EndpointDescriptor, MarketInfo, Normalization, Operation, ShapeShift,
    SupportedCoinsList, Transaction, TransactionStatus, ValidateAddressResult, classify,
};
