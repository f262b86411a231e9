//! Common error types used across the workspace.
//!
//! Each failure family has its own typed enum; [`TellhubError`] gathers them
//! through `#[from]` conversions so services can use `?` freely.

use crate::result_code::ResultCode;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum TellhubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("catalog definition error")]
    Catalog(#[from] CatalogError),

    #[error("gateway error")]
    Gateway(#[from] GatewayError),
}

/// A device descriptor or registration that the catalog rejects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("protocol is missing")]
    MissingProtocol,

    #[error("model is missing")]
    MissingModel,

    #[error("unknown protocol {0:?}")]
    UnknownProtocol(String),

    #[error("unknown model {model:?} for protocol {protocol:?}")]
    UnknownModel { protocol: String, model: String },

    #[error("unknown parameter {parameter:?} for {protocol}/{model}")]
    UnknownParameter {
        protocol: String,
        model: String,
        parameter: String,
    },

    #[error("value {value:?} of parameter {parameter:?} does not match {pattern:?}")]
    InvalidValue {
        parameter: String,
        value: String,
        pattern: String,
    },
}

/// Lookup of a gateway-side record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A defect in the catalog definition itself, detected while building it.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains an empty name")]
    EmptyName,

    #[error("protocol {0:?} is registered twice")]
    DuplicateProtocol(String),

    #[error("model {model:?} is registered twice under {protocol:?}")]
    DuplicateModel { protocol: String, model: String },

    #[error("parameter {parameter:?} is registered twice under {protocol}/{model}")]
    DuplicateParameter {
        protocol: String,
        model: String,
        parameter: String,
    },

    #[error("invalid pattern for {protocol}/{model}/{parameter}")]
    InvalidPattern {
        protocol: String,
        model: String,
        parameter: String,
        #[source]
        source: regex::Error,
    },
}

/// The gateway answered a call with a non-success result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("gateway rejected the request: {code}")]
pub struct GatewayError {
    pub code: ResultCode,
}

impl From<ResultCode> for GatewayError {
    fn from(code: ResultCode) -> Self {
        Self { code }
    }
}
