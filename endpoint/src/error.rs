use common::CodecError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("Unauthorized: only the relayer can deliver packets")]
    Unauthorized,

    #[error("UA already registered: {ua}")]
    UaAlreadyRegistered { ua: String },

    #[error("UA not registered: {ua}")]
    UaNotRegistered { ua: String },

    #[error("Packet for chain {got} delivered to chain {expected}")]
    WrongChain { expected: u16, got: u16 },

    #[error("Invalid nonce: expected {expected}, got {got}")]
    InvalidNonce { expected: u64, got: u64 },
}
