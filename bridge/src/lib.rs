//! Stream Bridge - Cross-Chain User Application for Token Streams
//!
//! This contract is a user application (UA) of an interchain messaging
//! endpoint. It keeps the per-chain trust anchors and the coin type mapping
//! table, and lets a trusted remote UA trigger withdrawals from local token
//! streams.
//!
//! # Lifecycle
//! 1. Deploy (`instantiate`) records the deployer as owner
//! 2. Owner calls `Initialize` to record admin and authority; the UA
//!    registers itself with the endpoint and becomes active on success
//! 3. Authority configures trusted remotes, coin mappings and assets
//!
//! # Inbound Flow
//! 1. Endpoint delivers a packet through `LzReceive`
//! 2. Packet is rebuilt from the delivery event and checked against the
//!    trusted remote for its source chain
//! 3. The request payload is parsed and the stream withdrawal applied
//!
//! # Outbound Flow
//! 1. Anyone calls `RequestRemoteWithdraw`
//! 2. The trusted remote for the destination chain is resolved
//! 3. A 9-byte request payload is handed to the endpoint's `Send`

pub mod assets;
pub mod auth;
pub mod coin_map;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod remote;
pub mod state;

pub use crate::auth::AuthorityProof;
pub use crate::error::ContractError;
