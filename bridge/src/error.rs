//! Error types for the Stream Bridge contract

use common::CodecError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller does not hold the required role")]
    Unauthorized,

    #[error("Unauthorized: only the messaging endpoint can deliver packets")]
    UnauthorizedEndpoint,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("UA not initialized")]
    NotInitialized,

    #[error("UA already initialized")]
    AlreadyInitialized,

    #[error("UA not active: endpoint registration has not completed")]
    NotActive,

    #[error("Bridge is paused")]
    Paused,

    #[error("Unexpected reply id: {id}")]
    UnexpectedReply { id: u64 },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u16 },

    #[error("Invalid remote address: {reason}")]
    InvalidRemoteAddress { reason: String },

    #[error("Trusted remote not configured for chain {chain_id}")]
    NotConfigured { chain_id: u16 },

    #[error("No coin mapping for {key}")]
    NoMapping { key: String },

    #[error("Asset type not registered: {asset_type}")]
    AssetNotRegistered { asset_type: String },

    #[error("Invalid asset: {reason}")]
    InvalidAsset { reason: String },

    #[error("Asset mismatch: expected {expected}, got {got}")]
    AssetMismatch { expected: String, got: String },

    // ========================================================================
    // Inbound Packet Errors
    // ========================================================================

    #[error("Untrusted sender {sender} on chain {chain_id}")]
    UntrustedSender { chain_id: u16, sender: String },

    #[error("Packet not addressed to this UA: {reason}")]
    WrongDestination { reason: String },

    #[error("Packet already processed: {hash}")]
    PacketAlreadyProcessed { hash: String },

    // ========================================================================
    // Stream Errors
    // ========================================================================

    #[error("Stream not found: {stream_id}")]
    StreamNotFound { stream_id: u64 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid schedule: {reason}")]
    InvalidSchedule { reason: String },

    #[error("Nothing to withdraw from stream {stream_id}")]
    NothingToWithdraw { stream_id: u64 },
}
