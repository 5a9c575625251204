//! Common - Shared Types and Utilities for the Stream Bridge Contracts
//!
//! Everything that must be byte-identical on both ends of a channel lives
//! here: the canonical address form, the packet codec, the request payload
//! builder and the type descriptor key, plus the endpoint message interface.

pub mod address;
pub mod asset;
pub mod endpoint;
pub mod error;
pub mod hash;
pub mod packet;
pub mod request;
pub mod type_descriptor;

pub use address::WireAddress;
pub use asset::AssetInfo;
pub use error::CodecError;
pub use packet::{DeliveryEvent, Packet};
pub use request::{build_withdraw_payload, CrossChainRequest};
pub use type_descriptor::TypeDescriptor;
