use common::endpoint::{ReceiverExecuteMsg, UaTypeInfoResponse};
use common::hash::bytes32_to_hex;
use common::packet::rebuild;
use common::{DeliveryEvent, Packet, TypeDescriptor, WireAddress};
use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Storage,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INBOUND_NONCE, OUTBOUND_NONCE, UA_TYPES,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let relayer = deps.api.addr_validate(&msg.relayer)?;
    CONFIG.save(
        deps.storage,
        &Config {
            local_chain_id: msg.local_chain_id,
            relayer: relayer.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("relayer", relayer)
        .add_attribute("local_chain_id", msg.local_chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterUa { type_info } => execute_register_ua(deps, info, type_info),
        ExecuteMsg::Send {
            dst_chain_id,
            dst_address,
            payload,
        } => execute_send(deps, info, dst_chain_id, dst_address, payload),
        ExecuteMsg::Deliver { ua, event } => execute_deliver(deps, info, ua, event),
    }
}

fn execute_register_ua(
    deps: DepsMut,
    info: MessageInfo,
    type_info: TypeDescriptor,
) -> Result<Response, ContractError> {
    if UA_TYPES.has(deps.storage, &info.sender) {
        return Err(ContractError::UaAlreadyRegistered {
            ua: info.sender.into_string(),
        });
    }

    UA_TYPES.save(deps.storage, &info.sender, &type_info)?;

    Ok(Response::new()
        .add_attribute("action", "register_ua")
        .add_attribute("ua", info.sender)
        .add_attribute("type_info", type_info.type_name()))
}

fn ensure_registered(storage: &dyn Storage, ua: &Addr) -> Result<(), ContractError> {
    if !UA_TYPES.has(storage, ua) {
        return Err(ContractError::UaNotRegistered { ua: ua.to_string() });
    }
    Ok(())
}

/// Assign the next nonce on the path and emit the packet. The emitted
/// `packet` and `packet_hash` attributes are the delivery receipt a relayer
/// picks up.
fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    dst_chain_id: u16,
    dst_address: Binary,
    payload: Binary,
) -> Result<Response, ContractError> {
    ensure_registered(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    let dst = WireAddress::from_slice(dst_address.as_slice())?;
    let key = (dst_chain_id, &info.sender, dst.as_slice());
    let nonce = OUTBOUND_NONCE.may_load(deps.storage, key)?.unwrap_or(0) + 1;
    OUTBOUND_NONCE.save(deps.storage, key, &nonce)?;

    let src = WireAddress::for_local_account(deps.api, &info.sender)?;
    let packet = Packet {
        src_chain_id: config.local_chain_id,
        src_address: src,
        dst_chain_id,
        dst_address: dst,
        nonce,
        payload: payload.to_vec(),
    };

    Ok(Response::new()
        .add_attribute("action", "send")
        .add_attribute("ua", info.sender)
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("dst_address", dst.to_hex())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("packet", hex::encode(packet.encode()))
        .add_attribute("packet_hash", bytes32_to_hex(&packet.hash())))
}

/// Forward a remote packet to `ua` once its nonce is the next on its path.
fn execute_deliver(
    deps: DepsMut,
    info: MessageInfo,
    ua: String,
    event: DeliveryEvent,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.relayer {
        return Err(ContractError::Unauthorized);
    }

    let ua = deps.api.addr_validate(&ua)?;
    ensure_registered(deps.storage, &ua)?;

    let packet = rebuild(&event)?;
    if packet.dst_chain_id != config.local_chain_id {
        return Err(ContractError::WrongChain {
            expected: config.local_chain_id,
            got: packet.dst_chain_id,
        });
    }

    let key = (packet.src_chain_id, packet.src_address.as_slice(), &ua);
    let expected = INBOUND_NONCE.may_load(deps.storage, key)?.unwrap_or(0) + 1;
    if packet.nonce != expected {
        return Err(ContractError::InvalidNonce {
            expected,
            got: packet.nonce,
        });
    }
    INBOUND_NONCE.save(deps.storage, key, &packet.nonce)?;

    let deliver = ReceiverExecuteMsg::LzReceive { event }.into_cosmos_msg(ua.as_str())?;

    Ok(Response::new()
        .add_message(deliver)
        .add_attribute("action", "deliver")
        .add_attribute("ua", ua)
        .add_attribute("src_chain_id", packet.src_chain_id.to_string())
        .add_attribute("nonce", packet.nonce.to_string())
        .add_attribute("packet_hash", bytes32_to_hex(&packet.hash())))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::UaTypeInfo { ua } => to_json_binary(&query_ua_type_info(deps, ua)?),
        QueryMsg::OutboundNonce {
            dst_chain_id,
            ua,
            dst_address,
        } => to_json_binary(&query_outbound_nonce(deps, dst_chain_id, ua, dst_address)?),
        QueryMsg::InboundNonce {
            src_chain_id,
            src_address,
            ua,
        } => to_json_binary(&query_inbound_nonce(deps, src_chain_id, src_address, ua)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        local_chain_id: config.local_chain_id,
        relayer: config.relayer,
    })
}

fn query_ua_type_info(deps: Deps, ua: String) -> StdResult<UaTypeInfoResponse> {
    let ua = deps.api.addr_validate(&ua)?;
    let type_info = UA_TYPES
        .may_load(deps.storage, &ua)?
        .ok_or_else(|| StdError::not_found(format!("UA {}", ua)))?;
    Ok(UaTypeInfoResponse {
        ua: ua.into_string(),
        type_info,
    })
}

fn wire(address: &Binary) -> StdResult<WireAddress> {
    WireAddress::from_slice(address.as_slice()).map_err(|e| StdError::generic_err(e.to_string()))
}

fn query_outbound_nonce(
    deps: Deps,
    dst_chain_id: u16,
    ua: String,
    dst_address: Binary,
) -> StdResult<u64> {
    let ua = deps.api.addr_validate(&ua)?;
    let dst = wire(&dst_address)?;
    Ok(OUTBOUND_NONCE
        .may_load(deps.storage, (dst_chain_id, &ua, dst.as_slice()))?
        .unwrap_or(0))
}

fn query_inbound_nonce(
    deps: Deps,
    src_chain_id: u16,
    src_address: Binary,
    ua: String,
) -> StdResult<u64> {
    let ua = deps.api.addr_validate(&ua)?;
    let src = wire(&src_address)?;
    Ok(INBOUND_NONCE
        .may_load(deps.storage, (src_chain_id, src.as_slice(), &ua))?
        .unwrap_or(0))
}
