//! Cross-chain operation requests.
//!
//! The argument blob handed to a remote-triggered entry point:
//!
//! ```text
//! | selector (1 byte) | operand id (8 bytes, big-endian) |
//! ```
//!
//! Only `0x00` (withdraw) is defined. New operations get new selectors and
//! must never reuse `0x00`.

use cosmwasm_std::Uint128;

use crate::error::CodecError;

/// Selector for a stream withdrawal
pub const SELECTOR_WITHDRAW: u8 = 0;

/// Total size of an encoded request
pub const REQUEST_LEN: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossChainRequest {
    Withdraw { stream_id: u64 },
}

impl CrossChainRequest {
    pub fn selector(&self) -> u8 {
        match self {
            CrossChainRequest::Withdraw { .. } => SELECTOR_WITHDRAW,
        }
    }

    pub fn operand(&self) -> u64 {
        match self {
            CrossChainRequest::Withdraw { stream_id } => *stream_id,
        }
    }

    pub fn encode(&self) -> [u8; REQUEST_LEN] {
        build_payload(self.selector(), self.operand())
    }

    /// Parse a request received from a remote chain.
    pub fn parse(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() != REQUEST_LEN {
            return Err(CodecError::InvalidRequest {
                reason: format!("expected {} bytes, got {}", REQUEST_LEN, data.len()),
            });
        }

        let mut operand = [0u8; 8];
        operand.copy_from_slice(&data[1..]);
        let operand = u64::from_be_bytes(operand);

        match data[0] {
            SELECTOR_WITHDRAW => Ok(CrossChainRequest::Withdraw { stream_id: operand }),
            selector => Err(CodecError::UnknownSelector { selector }),
        }
    }
}

/// `[0x00] || be64(operand_id)`
pub fn build_withdraw_payload(operand_id: u64) -> [u8; REQUEST_LEN] {
    build_payload(SELECTOR_WITHDRAW, operand_id)
}

fn build_payload(selector: u8, operand: u64) -> [u8; REQUEST_LEN] {
    let mut out = [0u8; REQUEST_LEN];
    out[0] = selector;
    out[1..].copy_from_slice(&operand.to_be_bytes());
    out
}

/// Narrow a message-level operand (decimal string of any width) to 64 bits.
pub fn checked_operand(value: Uint128) -> Result<u64, CodecError> {
    u64::try_from(value.u128()).map_err(|_| CodecError::ValueOutOfRange {
        value: value.to_string(),
    })
}
