//! Encoding-layer errors.
//!
//! These are raised before any storage is touched, so a failing decode never
//! leaves a partial write behind.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed address: {reason}")]
    MalformedAddress { reason: String },

    #[error("Unrecognized event shape: {reason}")]
    UnrecognizedEventShape { reason: String },

    #[error("Value out of range: {value} does not fit in 64 bits")]
    ValueOutOfRange { value: String },

    #[error("Invalid request payload: {reason}")]
    InvalidRequest { reason: String },

    #[error("Unknown operation selector: {selector}")]
    UnknownSelector { selector: u8 },

    #[error("Malformed asset type: {reason}")]
    MalformedAssetType { reason: String },
}

impl CodecError {
    pub(crate) fn malformed_address(reason: impl Into<String>) -> Self {
        CodecError::MalformedAddress {
            reason: reason.into(),
        }
    }

    pub(crate) fn event_shape(reason: impl Into<String>) -> Self {
        CodecError::UnrecognizedEventShape {
            reason: reason.into(),
        }
    }
}
