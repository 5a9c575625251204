//! Message types for the Stream Bridge contract
//!
//! Addresses of remote contracts and assets travel as hex text and are
//! normalised to the 32-byte wire form on entry. Asset types travel in their
//! textual `account::Module::Struct` form.

use common::{AssetInfo, DeliveryEvent, TypeDescriptor};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::Lifecycle;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Interchain messaging endpoint contract
    pub endpoint: String,
    /// Endpoint chain id of this chain
    pub local_chain_id: u16,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Lifecycle
    // ========================================================================
    /// Record admin and authority and register with the endpoint.
    ///
    /// Authorization: Owner, once
    Initialize { admin: String, authority: String },

    /// Authorization: Admin
    Pause {},

    /// Authorization: Admin
    Unpause {},

    // ========================================================================
    // Registries
    // ========================================================================
    /// Trust `address` (hex) as the UA on `chain_id`, replacing any previous entry.
    ///
    /// Authorization: Authority
    SetTrustedRemote { chain_id: u16, address: String },

    /// Map a local asset type to its asset address (hex) on `chain_id`.
    ///
    /// Authorization: Authority
    SetCoinMap {
        chain_id: u16,
        remote_asset: String,
        asset_type: String,
    },

    /// Bind a local asset type to the holding that backs it.
    ///
    /// Authorization: Authority
    RegisterAsset { asset_type: String, asset: AssetInfo },

    // ========================================================================
    // Streams
    // ========================================================================
    /// Open a stream funded with exactly one native coin.
    CreateStream {
        recipient: String,
        asset_type: String,
        start_time: u64,
        stop_time: u64,
    },

    /// CW20 receive hook, see [`ReceiveMsg`]
    Receive(cw20::Cw20ReceiveMsg),

    /// Pay out the withdrawable amount of a stream.
    ///
    /// Authorization: Stream recipient
    Withdraw { stream_id: u64 },

    // ========================================================================
    // Cross-chain
    // ========================================================================
    /// Inbound delivery.
    ///
    /// Authorization: Endpoint
    LzReceive { event: DeliveryEvent },

    /// Ask the trusted remote on `dst_chain_id` to withdraw from its stream
    /// `stream_id`. Attached funds pay the messaging fee.
    RequestRemoteWithdraw {
        dst_chain_id: u16,
        stream_id: Uint128,
    },
}

/// Messages embedded in a CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    CreateStream {
        recipient: String,
        asset_type: String,
        start_time: u64,
        stop_time: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Registration as recorded by the endpoint
    #[returns(common::endpoint::UaTypeInfoResponse)]
    UaTypeInfo {},

    #[returns(Option<TrustedRemoteResponse>)]
    TrustedRemote { chain_id: u16 },

    #[returns(TrustedRemotesResponse)]
    TrustedRemotes {
        start_after: Option<u16>,
        limit: Option<u32>,
    },

    /// Forward coin lookup
    #[returns(Option<RemoteCoinResponse>)]
    RemoteCoin { chain_id: u16, asset_type: String },

    /// Reverse coin lookup by canonical type bytes
    #[returns(Option<TypeDescriptor>)]
    LocalCoin { asset_type_bytes: Binary },

    #[returns(CoinMappingsResponse)]
    CoinMappings {
        start_after: Option<(u16, Binary)>,
        limit: Option<u32>,
    },

    #[returns(Option<AssetInfo>)]
    RegisteredAsset { asset_type: String },

    #[returns(Option<StreamResponse>)]
    Stream { stream_id: u64 },

    /// Request payload `RequestRemoteWithdraw` would send for `stream_id`
    #[returns(Binary)]
    WithdrawPayload { stream_id: Uint128 },

    /// Packet a delivery event describes, with its hash
    #[returns(PacketHashResponse)]
    PacketHash { event: DeliveryEvent },

    #[returns(bool)]
    PacketProcessed { hash: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub endpoint: Addr,
    pub local_chain_id: u16,
    pub admin: Option<Addr>,
    pub authority: Option<Addr>,
    pub lifecycle: Lifecycle,
    pub paused: bool,
    /// 32-byte address remote UAs must target
    pub wire_address: Binary,
}

#[cw_serde]
pub struct TrustedRemoteResponse {
    pub chain_id: u16,
    /// 32-byte wire address
    pub address: Binary,
    /// 0x-prefixed hex of `address`
    pub address_hex: String,
}

#[cw_serde]
pub struct TrustedRemotesResponse {
    pub remotes: Vec<TrustedRemoteResponse>,
}

#[cw_serde]
pub struct RemoteCoinResponse {
    pub chain_id: u16,
    /// Normalised type name
    pub asset_type: String,
    /// Key for `LocalCoin`
    pub asset_type_bytes: Binary,
    pub remote_asset: Binary,
    /// EVM-style rendering when the address fits in 20 bytes
    pub remote_asset_evm: Option<String>,
}

#[cw_serde]
pub struct CoinMappingEntry {
    pub chain_id: u16,
    pub asset_type_bytes: Binary,
    pub remote_asset: Binary,
}

#[cw_serde]
pub struct CoinMappingsResponse {
    pub mappings: Vec<CoinMappingEntry>,
}

#[cw_serde]
pub struct StreamResponse {
    pub id: u64,
    pub sender: Addr,
    pub recipient: Addr,
    pub asset_type: String,
    pub asset: AssetInfo,
    pub deposit: Uint128,
    pub withdrawn: Uint128,
    pub withdrawable: Uint128,
    pub start_time: u64,
    pub stop_time: u64,
    pub created_at: u64,
}

#[cw_serde]
pub struct PacketHashResponse {
    /// Canonical encoding
    pub packet: Binary,
    pub hash: Binary,
}
