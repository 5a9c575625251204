use common::TypeDescriptor;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:mock-endpoint";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub local_chain_id: u16,
    /// Only account allowed to deliver inbound packets
    pub relayer: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// ua => registered type info
pub const UA_TYPES: Map<&Addr, TypeDescriptor> = Map::new("ua_types");

/// (dst_chain_id, ua, dst_address) => last outbound nonce
pub const OUTBOUND_NONCE: Map<(u16, &Addr, &[u8]), u64> = Map::new("outbound_nonce");

/// (src_chain_id, src_address, ua) => last delivered nonce
pub const INBOUND_NONCE: Map<(u16, &[u8], &Addr), u64> = Map::new("inbound_nonce");
