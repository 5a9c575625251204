//! Registry handlers.
//!
//! Each handler verifies the authority first, then normalises its inputs,
//! and only then writes.

use common::{AssetInfo, TypeDescriptor, WireAddress};
use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::assets::register_asset;
use crate::auth::AuthorityProof;
use crate::coin_map::set_coin_map;
use crate::error::ContractError;
use crate::remote::set_remote;

/// Trust `address` as the UA on `chain_id`.
pub fn execute_set_trusted_remote(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    address: String,
) -> Result<Response, ContractError> {
    let proof = AuthorityProof::verify(deps.storage, &info.sender)?;
    let address = WireAddress::from_hex(&address)?;

    set_remote(deps.storage, &proof, chain_id, &address)?;

    Ok(Response::new()
        .add_attribute("action", "set_trusted_remote")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("address", address.to_hex()))
}

pub fn execute_set_coin_map(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    remote_asset: String,
    asset_type: String,
) -> Result<Response, ContractError> {
    let proof = AuthorityProof::verify(deps.storage, &info.sender)?;
    let remote_asset = WireAddress::from_hex(&remote_asset)?;
    let asset_type = TypeDescriptor::parse(&asset_type)?;

    set_coin_map(deps.storage, &proof, chain_id, &remote_asset, &asset_type)?;

    Ok(Response::new()
        .add_attribute("action", "set_coin_map")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("remote_asset", remote_asset.to_hex())
        .add_attribute("asset_type", asset_type.type_name()))
}

pub fn execute_register_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset_type: String,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let proof = AuthorityProof::verify(deps.storage, &info.sender)?;
    let asset_type = TypeDescriptor::parse(&asset_type)?;

    let asset = register_asset(deps.storage, deps.api, &proof, &asset_type, asset)?;

    Ok(Response::new()
        .add_attribute("action", "register_asset")
        .add_attribute("asset_type", asset_type.type_name())
        .add_attribute("asset", asset.to_string()))
}
