pub mod client;
pub mod config;
pub mod errors;
pub mod rest;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use errors::{ApiErrorKind, Result, ShapeShiftError};
pub use rest::RestTrait;
pub use utils::{
    CoinPair, build_pair_identifier, field_f64, field_i64, parse_f64, validate_segment,
};
