//! Canonical cross-chain address form.
//!
//! Every address that crosses the wire is carried as exactly 32 bytes,
//! big-endian, left zero-padded:
//!
//! ```text
//! | zero padding (32 - n bytes) | raw address (n bytes) |
//! ```
//!
//! A 20-byte EVM address, a short Move-style `0x1`, and a full 32-byte
//! account all map onto the same layout, so the short and long spellings of
//! one account compare equal.

use std::fmt;

use cosmwasm_std::{Addr, Api, StdResult};

use crate::error::CodecError;
use crate::hash::keccak256;

/// Width of the canonical wire form
pub const WIRE_ADDRESS_LEN: usize = 32;

/// Length of an EVM address inside the wire form
const EVM_ADDRESS_LEN: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WireAddress([u8; WIRE_ADDRESS_LEN]);

impl WireAddress {
    /// Normalise raw address bytes (1..=32 bytes) into the wire form.
    pub fn from_slice(raw: &[u8]) -> Result<Self, CodecError> {
        if raw.is_empty() {
            return Err(CodecError::malformed_address("empty address"));
        }
        if raw.len() > WIRE_ADDRESS_LEN {
            return Err(CodecError::malformed_address(format!(
                "expected at most {} bytes, got {}",
                WIRE_ADDRESS_LEN,
                raw.len()
            )));
        }

        let mut out = [0u8; WIRE_ADDRESS_LEN];
        out[WIRE_ADDRESS_LEN - raw.len()..].copy_from_slice(raw);
        Ok(Self(out))
    }

    /// Parse a hex address, with or without `0x`, of any digit count up to 64.
    ///
    /// Odd digit counts are accepted so that Move short forms (`0x1`) parse.
    pub fn from_hex(text: &str) -> Result<Self, CodecError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(CodecError::malformed_address("empty address"));
        }
        if digits.len() > WIRE_ADDRESS_LEN * 2 {
            return Err(CodecError::malformed_address(format!(
                "expected at most {} hex chars, got {}",
                WIRE_ADDRESS_LEN * 2,
                digits.len()
            )));
        }

        let padded = if digits.len() % 2 == 1 {
            format!("0{}", digits)
        } else {
            digits.to_string()
        };
        let bytes = hex::decode(&padded)
            .map_err(|e| CodecError::malformed_address(format!("invalid hex: {}", e)))?;

        Self::from_slice(&bytes)
    }

    pub const fn from_bytes32(bytes: [u8; WIRE_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Wire address of an account on this chain.
    ///
    /// The chain's canonical address bytes are left-padded; chains whose
    /// canonical form is wider than 32 bytes use its keccak256 instead.
    pub fn for_local_account(api: &dyn Api, addr: &Addr) -> StdResult<Self> {
        let canonical = api.addr_canonicalize(addr.as_str())?;
        let bytes = canonical.as_slice();

        if bytes.len() <= WIRE_ADDRESS_LEN && !bytes.is_empty() {
            let mut out = [0u8; WIRE_ADDRESS_LEN];
            out[WIRE_ADDRESS_LEN - bytes.len()..].copy_from_slice(bytes);
            Ok(Self(out))
        } else {
            Ok(Self(keccak256(bytes)))
        }
    }

    pub fn to_bytes32(&self) -> [u8; WIRE_ADDRESS_LEN] {
        self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Full-width lowercase hex with `0x` prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// The EVM spelling (`0x` + 40 hex chars), if the upper 12 bytes are zero.
    pub fn to_evm_string(&self) -> Option<String> {
        let (padding, raw) = self.0.split_at(WIRE_ADDRESS_LEN - EVM_ADDRESS_LEN);
        if padding.iter().all(|b| *b == 0) {
            Some(format!("0x{}", hex::encode(raw)))
        } else {
            None
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; WIRE_ADDRESS_LEN]
    }
}

impl fmt::Display for WireAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; WIRE_ADDRESS_LEN]> for WireAddress {
    fn from(bytes: [u8; WIRE_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}
