//! Reference interchain messaging endpoint.
//!
//! Registers UAs, assigns outbound nonces, and delivers inbound packets to
//! UAs in strict nonce order. Transport security is out of scope: a single
//! relayer account is trusted to report remote packets.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
