//! Static table of the service's resources.
//!
//! Per-endpoint policy (error tolerance, response normalization) lives here as
//! data so call sites never branch on it themselves.

use std::fmt;

use crate::common::ShapeShiftError;

/// Logical operations of the remote API, implemented or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Rate,
    Limit,
    MarketInfo,
    RecentTransactionList,
    StatusOfDepositToAddress,
    TimeRemaining,
    SupportedCoins,
    TransactionsByApiKey,
    TransactionsByOutputAddress,
    ValidateAddress,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Rate,
        Operation::Limit,
        Operation::MarketInfo,
        Operation::RecentTransactionList,
        Operation::StatusOfDepositToAddress,
        Operation::TimeRemaining,
        Operation::SupportedCoins,
        Operation::TransactionsByApiKey,
        Operation::TransactionsByOutputAddress,
        Operation::ValidateAddress,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Rate => "getRate",
            Operation::Limit => "getLimit",
            Operation::MarketInfo => "getMarketInfo",
            Operation::RecentTransactionList => "getRecentTransactionList",
            Operation::StatusOfDepositToAddress => "getStatusOfDepositToAddress",
            Operation::TimeRemaining => "getTimeRemaining",
            Operation::SupportedCoins => "getSupportedCoins",
            Operation::TransactionsByApiKey => "getListOfTransactionsByApiKey",
            Operation::TransactionsByOutputAddress => "getTransactionsByOutputAddress",
            Operation::ValidateAddress => "validateAddress",
        }
    }

    /// Catalog entry, or `None` for operations this client does not implement.
    pub fn descriptor(&self) -> Option<&'static EndpointDescriptor> {
        ENDPOINTS.iter().find(|endpoint| endpoint.operation == *self)
    }

    pub fn is_supported(&self) -> bool {
        self.descriptor().is_some()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rewrite applied to a decoded body before it reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// The service answers `validateAddress` with either `isValid` or `isvalid`;
    /// callers always get `isValid`.
    IsValidCasing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub operation: Operation,
    /// Resource path relative to the base origin, with `{name}` placeholders.
    pub path_template: &'static str,
    /// An `error` field in the body is returned as data instead of failing the call.
    pub error_tolerant: bool,
    pub normalization: Option<Normalization>,
}

impl EndpointDescriptor {
    /// Substitutes every `{name}` placeholder with its percent-encoded value.
    /// All placeholders must be bound.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, ShapeShiftError> {
        let mut path = String::with_capacity(self.path_template.len());
        let mut rest = self.path_template;

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let end = rest[start..].find('}').map(|i| start + i).ok_or_else(|| {
                ShapeShiftError::InvalidArgument(format!(
                    "malformed {} path template: {}",
                    self.operation, self.path_template
                ))
            })?;
            let name = &rest[start + 1..end];
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    ShapeShiftError::InvalidArgument(format!(
                        "unbound parameter {{{}}} in {} path",
                        name, self.operation
                    ))
                })?;
            path.push_str(&urlencoding::encode(value));
            rest = &rest[end + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }
}

pub static ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        operation: Operation::Rate,
        path_template: "rate/{pair}",
        error_tolerant: false,
        normalization: None,
    },
    EndpointDescriptor {
        operation: Operation::Limit,
        path_template: "limit/{pair}",
        error_tolerant: false,
        normalization: None,
    },
    EndpointDescriptor {
        operation: Operation::MarketInfo,
        path_template: "marketinfo/{pair}",
        error_tolerant: false,
        normalization: None,
    },
    EndpointDescriptor {
        operation: Operation::TimeRemaining,
        path_template: "timeremaining/{address}",
        error_tolerant: false,
        normalization: None,
    },
    EndpointDescriptor {
        operation: Operation::SupportedCoins,
        path_template: "getcoins",
        error_tolerant: false,
        normalization: None,
    },
    EndpointDescriptor {
        operation: Operation::ValidateAddress,
        path_template: "validateAddress/{address}/{coin}",
        error_tolerant: true,
        normalization: Some(Normalization::IsValidCasing),
    },
];
