//! Asset registry: which concrete holding backs an asset type.
//!
//! Independent of the coin map. A stream can only be funded in, and paid out
//! of, the holding registered for its asset type.

use common::{AssetInfo, TypeDescriptor};
use cosmwasm_std::{Api, StdResult, Storage};

use crate::auth::AuthorityProof;
use crate::error::ContractError;
use crate::state::REGISTERED_ASSETS;

/// Bind `asset_type` to `asset`. Returns the validated asset.
pub fn register_asset(
    storage: &mut dyn Storage,
    api: &dyn Api,
    _proof: &AuthorityProof,
    asset_type: &TypeDescriptor,
    asset: AssetInfo,
) -> Result<AssetInfo, ContractError> {
    let asset = match asset {
        AssetInfo::Native { denom } => {
            let denom = denom.trim().to_string();
            if denom.is_empty() {
                return Err(ContractError::InvalidAsset {
                    reason: "native denom cannot be empty".to_string(),
                });
            }
            AssetInfo::Native { denom }
        }
        AssetInfo::Cw20 { contract_addr } => AssetInfo::Cw20 {
            contract_addr: api.addr_validate(&contract_addr)?.into_string(),
        },
    };

    REGISTERED_ASSETS.save(storage, &asset_type.canonical_bytes(), &asset)?;
    Ok(asset)
}

pub fn may_load_asset(
    storage: &dyn Storage,
    asset_type: &TypeDescriptor,
) -> StdResult<Option<AssetInfo>> {
    REGISTERED_ASSETS.may_load(storage, &asset_type.canonical_bytes())
}

pub fn load_asset(
    storage: &dyn Storage,
    asset_type: &TypeDescriptor,
) -> Result<AssetInfo, ContractError> {
    may_load_asset(storage, asset_type)?.ok_or_else(|| ContractError::AssetNotRegistered {
        asset_type: asset_type.type_name(),
    })
}
