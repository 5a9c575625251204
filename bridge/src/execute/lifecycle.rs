//! Lifecycle handlers.
//!
//! `Uninitialized -> Initialized` on `Initialize`, `Initialized -> Active`
//! once the endpoint accepts the registration sub-message.

use common::endpoint::EndpointExecuteMsg;
use common::TypeDescriptor;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Reply, Response, SubMsg};

use crate::error::ContractError;
use crate::state::{
    Lifecycle, CONFIG, REGISTER_UA_REPLY_ID, UA_MODULE_NAME, UA_STRUCT_NAME,
};

// ============================================================================
// Initialize
// ============================================================================

/// Record admin and authority, then register this UA with the endpoint.
pub fn execute_initialize(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    admin: String,
    authority: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    if config.lifecycle != Lifecycle::Uninitialized {
        return Err(ContractError::AlreadyInitialized);
    }

    let admin = deps.api.addr_validate(&admin)?;
    let authority = deps.api.addr_validate(&authority)?;

    let type_info = TypeDescriptor::new(
        env.contract.address.as_str(),
        UA_MODULE_NAME,
        UA_STRUCT_NAME,
    )?;

    config.admin = Some(admin.clone());
    config.authority = Some(authority.clone());
    config.lifecycle = Lifecycle::Initialized;
    CONFIG.save(deps.storage, &config)?;

    let register = EndpointExecuteMsg::RegisterUa {
        type_info: type_info.clone(),
    }
    .into_cosmos_msg(config.endpoint.as_str(), vec![])?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(register, REGISTER_UA_REPLY_ID))
        .add_attribute("action", "initialize")
        .add_attribute("admin", admin)
        .add_attribute("authority", authority)
        .add_attribute("type_info", type_info.type_name()))
}

/// Endpoint accepted the registration.
pub fn handle_register_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != REGISTER_UA_REPLY_ID {
        return Err(ContractError::UnexpectedReply { id: msg.id });
    }

    let mut config = CONFIG.load(deps.storage)?;
    if config.lifecycle != Lifecycle::Initialized {
        return Err(ContractError::NotInitialized);
    }
    config.lifecycle = Lifecycle::Active;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "register_ua")
        .add_attribute("endpoint", config.endpoint))
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Stop messaging and stream withdrawals.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.admin.as_ref() != Some(&info.sender) {
        return Err(ContractError::Unauthorized);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.admin.as_ref() != Some(&info.sender) {
        return Err(ContractError::Unauthorized);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}
