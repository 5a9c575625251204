//! State definitions for the Stream Bridge contract
//!
//! Every table here is scoped to one UA: the contract instance owns its
//! storage, so trust anchors and coin mappings of different UAs never mix.

use common::{AssetInfo, TypeDescriptor};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub enum Lifecycle {
    /// Deployed, no admin or authority recorded yet
    Uninitialized,
    /// Admin and authority recorded, endpoint registration in flight
    Initialized,
    /// Registered with the endpoint; can send and receive
    Active,
}

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Deployer; the only account allowed to initialize
    pub owner: Addr,
    /// Interchain messaging endpoint contract
    pub endpoint: Addr,
    /// Endpoint chain id of this chain
    pub local_chain_id: u16,
    /// Admin (pause control), set by `Initialize`
    pub admin: Option<Addr>,
    /// Authority (trusted remotes, coin map, assets), set by `Initialize`
    pub authority: Option<Addr>,
    pub lifecycle: Lifecycle,
    pub paused: bool,
}

/// Linear token stream
#[cw_serde]
pub struct Stream {
    pub id: u64,
    pub sender: Addr,
    pub recipient: Addr,
    pub asset_type: TypeDescriptor,
    /// Holding the deposit was made in
    pub asset: AssetInfo,
    pub deposit: Uint128,
    pub withdrawn: Uint128,
    pub start_time: u64,
    pub stop_time: u64,
    pub created_at: u64,
}

impl Stream {
    /// Amount released by the schedule at `now` (seconds).
    pub fn vested(&self, now: u64) -> Uint128 {
        if now <= self.start_time {
            return Uint128::zero();
        }
        if now >= self.stop_time {
            return self.deposit;
        }
        let elapsed = now - self.start_time;
        let duration = self.stop_time - self.start_time;
        self.deposit.multiply_ratio(elapsed, duration)
    }

    pub fn withdrawable(&self, now: u64) -> Uint128 {
        self.vested(now).saturating_sub(self.withdrawn)
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:stream-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Module and struct name this UA registers with the endpoint
pub const UA_MODULE_NAME: &str = "stream";
pub const UA_STRUCT_NAME: &str = "StreamBridge";

/// Reply id for the endpoint registration sub-message
pub const REGISTER_UA_REPLY_ID: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Trusted remote UA per remote chain
/// Key: remote chain id, Value: 32-byte wire address
pub const TRUSTED_REMOTES: Map<u16, [u8; 32]> = Map::new("trusted_remotes");

/// Forward coin lookup
/// Key: (remote chain id, local asset type bytes), Value: 32-byte remote asset address
pub const REMOTE_COIN_LOOKUP: Map<(u16, &[u8]), [u8; 32]> = Map::new("remote_coin_lookup");

/// Reverse coin lookup
/// Key: local asset type bytes, Value: type descriptor
pub const LOCAL_COIN_LOOKUP: Map<&[u8], TypeDescriptor> = Map::new("local_coin_lookup");

/// Holdings bound to asset types
/// Key: local asset type bytes, Value: concrete asset
pub const REGISTERED_ASSETS: Map<&[u8], AssetInfo> = Map::new("registered_assets");

pub const NEXT_STREAM_ID: Item<u64> = Item::new("next_stream_id");

pub const STREAMS: Map<u64, Stream> = Map::new("streams");

/// Replay guard for inbound packets
/// Key: 32-byte packet hash, Value: packet nonce
pub const PROCESSED_PACKETS: Map<&[u8], u64> = Map::new("processed_packets");
