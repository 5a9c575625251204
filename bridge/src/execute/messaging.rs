//! Cross-chain messaging handlers.
//!
//! Inbound: the endpoint calls `LzReceive` with a delivery event. The packet
//! is rebuilt, addressed to this UA, checked against the trusted remote of
//! its source chain and against the replay guard before the request in its
//! payload is applied. Any failure reverts the whole delivery.
//!
//! Outbound: `RequestRemoteWithdraw` builds a withdraw request and hands it
//! to the endpoint, addressed to the trusted remote of the destination chain.

use common::endpoint::EndpointExecuteMsg;
use common::hash::bytes32_to_hex;
use common::packet::rebuild;
use common::request::checked_operand;
use common::{build_withdraw_payload, CrossChainRequest, DeliveryEvent, Packet, WireAddress};
use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Storage, Uint128};

use super::stream::{load_stream, release};
use crate::assets::load_asset;
use crate::coin_map::{resolve_local_type, resolve_remote_address};
use crate::error::ContractError;
use crate::remote::{get_remote, verify_sender};
use crate::state::{Config, Lifecycle, CONFIG, PROCESSED_PACKETS, STREAMS};

fn ensure_active(config: &Config) -> Result<(), ContractError> {
    if config.lifecycle != Lifecycle::Active {
        return Err(ContractError::NotActive);
    }
    if config.paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

// ============================================================================
// Inbound
// ============================================================================

/// Apply a packet delivered by the endpoint.
pub fn execute_lz_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    event: DeliveryEvent,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.endpoint {
        return Err(ContractError::UnauthorizedEndpoint);
    }
    ensure_active(&config)?;

    let packet = rebuild(&event)?;

    if packet.dst_chain_id != config.local_chain_id {
        return Err(ContractError::WrongDestination {
            reason: format!(
                "packet targets chain {}, this is chain {}",
                packet.dst_chain_id, config.local_chain_id
            ),
        });
    }
    let local = WireAddress::for_local_account(deps.api, &env.contract.address)?;
    if packet.dst_address != local {
        return Err(ContractError::WrongDestination {
            reason: format!("packet targets {}", packet.dst_address),
        });
    }

    verify_sender(deps.storage, &packet)?;

    let hash = packet.hash();
    if PROCESSED_PACKETS.has(deps.storage, &hash) {
        return Err(ContractError::PacketAlreadyProcessed {
            hash: bytes32_to_hex(&hash),
        });
    }

    let request = CrossChainRequest::parse(&packet.payload)?;
    let response = match request {
        CrossChainRequest::Withdraw { stream_id } => {
            apply_remote_withdraw(deps.storage, &env, &packet, stream_id)?
        }
    };

    PROCESSED_PACKETS.save(deps.storage, &hash, &packet.nonce)?;

    Ok(response
        .add_attribute("src_chain_id", packet.src_chain_id.to_string())
        .add_attribute("src_address", packet.src_address.to_hex())
        .add_attribute("nonce", packet.nonce.to_string())
        .add_attribute("packet_hash", bytes32_to_hex(&hash)))
}

/// Release a stream on behalf of the remote UA that sent `packet`.
///
/// The stream's asset type must be mapped to the packet's source chain and
/// resolvable back from its canonical bytes.
fn apply_remote_withdraw(
    storage: &mut dyn Storage,
    env: &Env,
    packet: &Packet,
    stream_id: u64,
) -> Result<Response, ContractError> {
    let mut stream = load_stream(storage, stream_id)?;

    let remote_asset = resolve_remote_address(storage, packet.src_chain_id, &stream.asset_type)?;
    let asset_type = resolve_local_type(storage, &stream.asset_type.canonical_bytes())?;
    let asset = load_asset(storage, &asset_type)?;
    if asset != stream.asset {
        return Err(ContractError::AssetMismatch {
            expected: stream.asset.to_string(),
            got: asset.to_string(),
        });
    }

    let (amount, payout) = release(&mut stream, env.block.time.seconds())?;
    STREAMS.save(storage, stream_id, &stream)?;

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "lz_receive")
        .add_attribute("request", "withdraw")
        .add_attribute("stream_id", stream_id.to_string())
        .add_attribute("asset_type", asset_type.type_name())
        .add_attribute("remote_asset", remote_asset.to_hex())
        .add_attribute("recipient", stream.recipient)
        .add_attribute("amount", amount))
}

// ============================================================================
// Outbound
// ============================================================================

/// Ask the trusted remote on `dst_chain_id` to withdraw from its stream.
pub fn execute_request_remote_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    dst_chain_id: u16,
    stream_id: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_active(&config)?;

    let stream_id = checked_operand(stream_id)?;
    let remote = get_remote(deps.storage, dst_chain_id)?;
    let payload = build_withdraw_payload(stream_id);

    let send = EndpointExecuteMsg::Send {
        dst_chain_id,
        dst_address: Binary::from(remote.as_slice()),
        payload: Binary::from(payload.as_slice()),
    }
    .into_cosmos_msg(config.endpoint.as_str(), info.funds)?;

    Ok(Response::new()
        .add_message(send)
        .add_attribute("action", "request_remote_withdraw")
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("dst_address", remote.to_hex())
        .add_attribute("stream_id", stream_id.to_string())
        .add_attribute("payload", hex::encode(payload)))
}
