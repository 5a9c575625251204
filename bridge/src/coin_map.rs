//! Coin type cross-chain mapping table.
//!
//! Forward: `(remote chain id, local type bytes) -> remote asset address`.
//! Reverse: `local type bytes -> TypeDescriptor`. Keys are the descriptor's
//! canonical bytes, so the tables can be read back from a packet without any
//! in-process type handle.

use common::{TypeDescriptor, WireAddress};
use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::auth::AuthorityProof;
use crate::error::ContractError;
use crate::state::{LOCAL_COIN_LOOKUP, REMOTE_COIN_LOOKUP};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

/// One forward entry as returned by [`list_mappings`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinMapping {
    pub chain_id: u16,
    pub asset_type: Vec<u8>,
    pub remote_asset: WireAddress,
}

/// Map `asset_type` to `remote_asset` on `remote_chain_id`.
///
/// The reverse entry is written before the forward entry.
pub fn set_coin_map(
    storage: &mut dyn Storage,
    _proof: &AuthorityProof,
    remote_chain_id: u16,
    remote_asset: &WireAddress,
    asset_type: &TypeDescriptor,
) -> Result<(), ContractError> {
    if remote_chain_id == 0 {
        return Err(ContractError::InvalidChainId {
            chain_id: remote_chain_id,
        });
    }

    let key = asset_type.canonical_bytes();
    LOCAL_COIN_LOOKUP.save(storage, &key, asset_type)?;
    REMOTE_COIN_LOOKUP.save(
        storage,
        (remote_chain_id, key.as_slice()),
        &remote_asset.to_bytes32(),
    )?;
    Ok(())
}

pub fn may_resolve_remote_address(
    storage: &dyn Storage,
    remote_chain_id: u16,
    asset_type: &TypeDescriptor,
) -> StdResult<Option<WireAddress>> {
    let key = asset_type.canonical_bytes();
    Ok(REMOTE_COIN_LOOKUP
        .may_load(storage, (remote_chain_id, key.as_slice()))?
        .map(WireAddress::from_bytes32))
}

pub fn resolve_remote_address(
    storage: &dyn Storage,
    remote_chain_id: u16,
    asset_type: &TypeDescriptor,
) -> Result<WireAddress, ContractError> {
    may_resolve_remote_address(storage, remote_chain_id, asset_type)?.ok_or_else(|| {
        ContractError::NoMapping {
            key: format!("{}@{}", asset_type, remote_chain_id),
        }
    })
}

pub fn resolve_local_type(
    storage: &dyn Storage,
    asset_type_bytes: &[u8],
) -> Result<TypeDescriptor, ContractError> {
    LOCAL_COIN_LOOKUP
        .may_load(storage, asset_type_bytes)?
        .ok_or_else(|| ContractError::NoMapping {
            key: String::from_utf8_lossy(asset_type_bytes).into_owned(),
        })
}

/// Forward entries ordered by `(chain id, type bytes)`.
pub fn list_mappings(
    storage: &dyn Storage,
    start_after: Option<(u16, Vec<u8>)>,
    limit: Option<u32>,
) -> StdResult<Vec<CoinMapping>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .as_ref()
        .map(|(chain_id, key)| Bound::exclusive((*chain_id, key.as_slice())));

    REMOTE_COIN_LOOKUP
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            item.map(|((chain_id, asset_type), bytes)| CoinMapping {
                chain_id,
                asset_type,
                remote_asset: WireAddress::from_bytes32(bytes),
            })
        })
        .collect()
}
