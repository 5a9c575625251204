//! Stream Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `remote`, `coin_map`, `assets` - Per-UA registries

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_create_stream, execute_initialize, execute_lz_receive, execute_pause,
    execute_receive, execute_register_asset, execute_request_remote_withdraw,
    execute_set_coin_map, execute_set_trusted_remote, execute_unpause, execute_withdraw,
    handle_register_reply,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_coin_mappings, query_config, query_local_coin, query_packet_hash,
    query_packet_processed, query_registered_asset, query_remote_coin, query_stream,
    query_trusted_remote, query_trusted_remotes, query_ua_type_info, query_withdraw_payload,
};
use crate::state::{
    Config, Lifecycle, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NEXT_STREAM_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let endpoint = deps.api.addr_validate(&msg.endpoint)?;
    if msg.local_chain_id == 0 {
        return Err(ContractError::InvalidChainId {
            chain_id: msg.local_chain_id,
        });
    }

    let config = Config {
        owner: info.sender.clone(),
        endpoint: endpoint.clone(),
        local_chain_id: msg.local_chain_id,
        admin: None,
        authority: None,
        lifecycle: Lifecycle::Uninitialized,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_STREAM_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("endpoint", endpoint)
        .add_attribute("local_chain_id", msg.local_chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Lifecycle
        ExecuteMsg::Initialize { admin, authority } => {
            execute_initialize(deps, env, info, admin, authority)
        }
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),

        // Registries
        ExecuteMsg::SetTrustedRemote { chain_id, address } => {
            execute_set_trusted_remote(deps, info, chain_id, address)
        }
        ExecuteMsg::SetCoinMap {
            chain_id,
            remote_asset,
            asset_type,
        } => execute_set_coin_map(deps, info, chain_id, remote_asset, asset_type),
        ExecuteMsg::RegisterAsset { asset_type, asset } => {
            execute_register_asset(deps, info, asset_type, asset)
        }

        // Streams
        ExecuteMsg::CreateStream {
            recipient,
            asset_type,
            start_time,
            stop_time,
        } => execute_create_stream(
            deps, env, info, recipient, asset_type, start_time, stop_time,
        ),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::Withdraw { stream_id } => execute_withdraw(deps, env, info, stream_id),

        // Cross-chain
        ExecuteMsg::LzReceive { event } => execute_lz_receive(deps, env, info, event),
        ExecuteMsg::RequestRemoteWithdraw {
            dst_chain_id,
            stream_id,
        } => execute_request_remote_withdraw(deps, info, dst_chain_id, stream_id),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_register_reply(deps, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::UaTypeInfo {} => to_json_binary(&query_ua_type_info(deps, env)?),

        // Registry queries
        QueryMsg::TrustedRemote { chain_id } => {
            to_json_binary(&query_trusted_remote(deps, chain_id)?)
        }
        QueryMsg::TrustedRemotes { start_after, limit } => {
            to_json_binary(&query_trusted_remotes(deps, start_after, limit)?)
        }
        QueryMsg::RemoteCoin {
            chain_id,
            asset_type,
        } => to_json_binary(&query_remote_coin(deps, chain_id, asset_type)?),
        QueryMsg::LocalCoin { asset_type_bytes } => {
            to_json_binary(&query_local_coin(deps, asset_type_bytes)?)
        }
        QueryMsg::CoinMappings { start_after, limit } => {
            to_json_binary(&query_coin_mappings(deps, start_after, limit)?)
        }
        QueryMsg::RegisteredAsset { asset_type } => {
            to_json_binary(&query_registered_asset(deps, asset_type)?)
        }

        // Streams
        QueryMsg::Stream { stream_id } => to_json_binary(&query_stream(deps, env, stream_id)?),

        // Packets
        QueryMsg::WithdrawPayload { stream_id } => {
            to_json_binary(&query_withdraw_payload(stream_id)?)
        }
        QueryMsg::PacketHash { event } => to_json_binary(&query_packet_hash(event)?),
        QueryMsg::PacketProcessed { hash } => {
            to_json_binary(&query_packet_processed(deps, hash)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
