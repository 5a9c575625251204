//! Query handlers for the Stream Bridge contract.

use common::endpoint::{EndpointQueryMsg, UaTypeInfoResponse};
use common::packet::rebuild;
use common::request::checked_operand;
use common::{
    build_withdraw_payload, AssetInfo, CodecError, DeliveryEvent, TypeDescriptor, WireAddress,
};
use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult, Uint128};

use crate::assets::may_load_asset;
use crate::coin_map::{list_mappings, may_resolve_remote_address};
use crate::msg::{
    CoinMappingEntry, CoinMappingsResponse, ConfigResponse, PacketHashResponse,
    RemoteCoinResponse, StreamResponse, TrustedRemoteResponse, TrustedRemotesResponse,
};
use crate::remote::{list_remotes, may_get_remote};
use crate::state::{CONFIG, LOCAL_COIN_LOOKUP, PROCESSED_PACKETS, STREAMS};

fn codec_err(err: CodecError) -> StdError {
    StdError::generic_err(err.to_string())
}

fn parse_asset_type(asset_type: &str) -> StdResult<TypeDescriptor> {
    TypeDescriptor::parse(asset_type).map_err(codec_err)
}

fn remote_response(chain_id: u16, address: WireAddress) -> TrustedRemoteResponse {
    TrustedRemoteResponse {
        chain_id,
        address: Binary::from(address.as_slice()),
        address_hex: address.to_hex(),
    }
}

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps, env: Env) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let wire_address = WireAddress::for_local_account(deps.api, &env.contract.address)?;
    Ok(ConfigResponse {
        owner: config.owner,
        endpoint: config.endpoint,
        local_chain_id: config.local_chain_id,
        admin: config.admin,
        authority: config.authority,
        lifecycle: config.lifecycle,
        paused: config.paused,
        wire_address: Binary::from(wire_address.as_slice()),
    })
}

/// Registration as the endpoint recorded it.
pub fn query_ua_type_info(deps: Deps, env: Env) -> StdResult<UaTypeInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    deps.querier.query_wasm_smart(
        config.endpoint,
        &EndpointQueryMsg::UaTypeInfo {
            ua: env.contract.address.into_string(),
        },
    )
}

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_trusted_remote(deps: Deps, chain_id: u16) -> StdResult<Option<TrustedRemoteResponse>> {
    Ok(may_get_remote(deps.storage, chain_id)?.map(|address| remote_response(chain_id, address)))
}

pub fn query_trusted_remotes(
    deps: Deps,
    start_after: Option<u16>,
    limit: Option<u32>,
) -> StdResult<TrustedRemotesResponse> {
    let remotes = list_remotes(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(chain_id, address)| remote_response(chain_id, address))
        .collect();
    Ok(TrustedRemotesResponse { remotes })
}

pub fn query_remote_coin(
    deps: Deps,
    chain_id: u16,
    asset_type: String,
) -> StdResult<Option<RemoteCoinResponse>> {
    let descriptor = parse_asset_type(&asset_type)?;
    Ok(
        may_resolve_remote_address(deps.storage, chain_id, &descriptor)?.map(|remote| {
            RemoteCoinResponse {
                chain_id,
                asset_type: descriptor.type_name(),
                asset_type_bytes: Binary::from(descriptor.canonical_bytes()),
                remote_asset: Binary::from(remote.as_slice()),
                remote_asset_evm: remote.to_evm_string(),
            }
        }),
    )
}

pub fn query_local_coin(deps: Deps, asset_type_bytes: Binary) -> StdResult<Option<TypeDescriptor>> {
    LOCAL_COIN_LOOKUP.may_load(deps.storage, asset_type_bytes.as_slice())
}

pub fn query_coin_mappings(
    deps: Deps,
    start_after: Option<(u16, Binary)>,
    limit: Option<u32>,
) -> StdResult<CoinMappingsResponse> {
    let start_after = start_after.map(|(chain_id, key)| (chain_id, key.to_vec()));
    let mappings = list_mappings(deps.storage, start_after, limit)?
        .into_iter()
        .map(|mapping| CoinMappingEntry {
            chain_id: mapping.chain_id,
            asset_type_bytes: Binary::from(mapping.asset_type),
            remote_asset: Binary::from(mapping.remote_asset.as_slice()),
        })
        .collect();
    Ok(CoinMappingsResponse { mappings })
}

pub fn query_registered_asset(deps: Deps, asset_type: String) -> StdResult<Option<AssetInfo>> {
    let descriptor = parse_asset_type(&asset_type)?;
    may_load_asset(deps.storage, &descriptor)
}

// ============================================================================
// Stream Queries
// ============================================================================

pub fn query_stream(deps: Deps, env: Env, stream_id: u64) -> StdResult<Option<StreamResponse>> {
    let now = env.block.time.seconds();
    Ok(STREAMS
        .may_load(deps.storage, stream_id)?
        .map(|stream| StreamResponse {
            id: stream.id,
            withdrawable: stream.withdrawable(now),
            sender: stream.sender,
            recipient: stream.recipient,
            asset_type: stream.asset_type.type_name(),
            asset: stream.asset,
            deposit: stream.deposit,
            withdrawn: stream.withdrawn,
            start_time: stream.start_time,
            stop_time: stream.stop_time,
            created_at: stream.created_at,
        }))
}

// ============================================================================
// Packet Queries
// ============================================================================

pub fn query_withdraw_payload(stream_id: Uint128) -> StdResult<Binary> {
    let stream_id = checked_operand(stream_id).map_err(codec_err)?;
    Ok(Binary::from(build_withdraw_payload(stream_id).as_slice()))
}

pub fn query_packet_hash(event: DeliveryEvent) -> StdResult<PacketHashResponse> {
    let packet = rebuild(&event).map_err(codec_err)?;
    Ok(PacketHashResponse {
        packet: Binary::from(packet.encode()),
        hash: Binary::from(packet.hash().as_slice()),
    })
}

pub fn query_packet_processed(deps: Deps, hash: Binary) -> StdResult<bool> {
    Ok(PROCESSED_PACKETS.has(deps.storage, hash.as_slice()))
}
