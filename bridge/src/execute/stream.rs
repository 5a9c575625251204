//! Stream handlers.
//!
//! Streams vest linearly between `start_time` and `stop_time`. The funds are
//! held by this contract in the holding registered for the stream's asset
//! type and are released either by the recipient or by a withdraw request
//! arriving from a trusted remote.

use common::{AssetInfo, TypeDescriptor};
use cosmwasm_std::{
    from_json, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdError, Storage, Uint128,
};
use cw20::Cw20ReceiveMsg;

use crate::assets::load_asset;
use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{Stream, CONFIG, NEXT_STREAM_ID, STREAMS};

struct StreamRequest {
    sender: Addr,
    recipient: Addr,
    asset_type: TypeDescriptor,
    start_time: u64,
    stop_time: u64,
}

// ============================================================================
// Create
// ============================================================================

/// Open a stream funded with the single native coin attached.
pub fn execute_create_stream(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    asset_type: String,
    start_time: u64,
    stop_time: u64,
) -> Result<Response, ContractError> {
    let request = StreamRequest {
        sender: info.sender.clone(),
        recipient: deps.api.addr_validate(&recipient)?,
        asset_type: TypeDescriptor::parse(&asset_type)?,
        start_time,
        stop_time,
    };

    let asset = load_asset(deps.storage, &request.asset_type)?;
    let denom = match &asset {
        AssetInfo::Native { denom } => denom,
        AssetInfo::Cw20 { .. } => {
            return Err(ContractError::AssetMismatch {
                expected: asset.to_string(),
                got: "native funds".to_string(),
            })
        }
    };

    if info.funds.len() != 1 {
        return Err(ContractError::InvalidAmount {
            reason: format!("expected exactly one coin, got {}", info.funds.len()),
        });
    }
    let coin = &info.funds[0];
    if &coin.denom != denom {
        return Err(ContractError::AssetMismatch {
            expected: asset.to_string(),
            got: format!("native:{}", coin.denom),
        });
    }

    create_stream(deps.storage, &env, request, asset, coin.amount)
}

/// CW20 receive hook. `info.sender` is the token contract.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::CreateStream {
            recipient,
            asset_type,
            start_time,
            stop_time,
        } => {
            let request = StreamRequest {
                sender,
                recipient: deps.api.addr_validate(&recipient)?,
                asset_type: TypeDescriptor::parse(&asset_type)?,
                start_time,
                stop_time,
            };

            let asset = load_asset(deps.storage, &request.asset_type)?;
            let token_matches = matches!(
                &asset,
                AssetInfo::Cw20 { contract_addr } if *contract_addr == info.sender.as_str()
            );
            if !token_matches {
                return Err(ContractError::AssetMismatch {
                    expected: asset.to_string(),
                    got: format!("cw20:{}", info.sender),
                });
            }

            create_stream(deps.storage, &env, request, asset, cw20_msg.amount)
        }
    }
}

fn create_stream(
    storage: &mut dyn Storage,
    env: &Env,
    request: StreamRequest,
    asset: AssetInfo,
    deposit: Uint128,
) -> Result<Response, ContractError> {
    let now = env.block.time.seconds();

    if deposit.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit must be greater than zero".to_string(),
        });
    }
    if request.stop_time <= request.start_time {
        return Err(ContractError::InvalidSchedule {
            reason: "stop_time must be after start_time".to_string(),
        });
    }
    if request.stop_time <= now {
        return Err(ContractError::InvalidSchedule {
            reason: "stream would already be finished".to_string(),
        });
    }

    let id = NEXT_STREAM_ID.may_load(storage)?.unwrap_or_default();
    let stream = Stream {
        id,
        sender: request.sender,
        recipient: request.recipient,
        asset_type: request.asset_type,
        asset,
        deposit,
        withdrawn: Uint128::zero(),
        start_time: request.start_time,
        stop_time: request.stop_time,
        created_at: now,
    };
    STREAMS.save(storage, id, &stream)?;
    NEXT_STREAM_ID.save(storage, &(id + 1))?;

    Ok(Response::new()
        .add_attribute("action", "create_stream")
        .add_attribute("stream_id", id.to_string())
        .add_attribute("sender", stream.sender)
        .add_attribute("recipient", stream.recipient)
        .add_attribute("asset_type", stream.asset_type.type_name())
        .add_attribute("deposit", deposit))
}

// ============================================================================
// Withdraw
// ============================================================================

/// Recipient withdraws everything vested so far.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    stream_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }

    let mut stream = load_stream(deps.storage, stream_id)?;
    if info.sender != stream.recipient {
        return Err(ContractError::Unauthorized);
    }

    let (amount, payout) = release(&mut stream, env.block.time.seconds())?;
    STREAMS.save(deps.storage, stream_id, &stream)?;

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "withdraw")
        .add_attribute("stream_id", stream_id.to_string())
        .add_attribute("recipient", stream.recipient)
        .add_attribute("amount", amount))
}

pub(crate) fn load_stream(storage: &dyn Storage, stream_id: u64) -> Result<Stream, ContractError> {
    STREAMS
        .may_load(storage, stream_id)?
        .ok_or(ContractError::StreamNotFound { stream_id })
}

/// Mark the withdrawable amount as withdrawn and build the payout. The caller
/// persists `stream`.
pub(crate) fn release(
    stream: &mut Stream,
    now: u64,
) -> Result<(Uint128, CosmosMsg), ContractError> {
    let amount = stream.withdrawable(now);
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw {
            stream_id: stream.id,
        });
    }

    stream.withdrawn = stream
        .withdrawn
        .checked_add(amount)
        .map_err(StdError::from)?;
    let payout = stream.asset.transfer_msg(stream.recipient.as_str(), amount)?;
    Ok((amount, payout))
}
