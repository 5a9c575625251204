//! Trusted remote registry.
//!
//! One trusted UA address per remote chain. A set overwrites, nothing is
//! ever removed. Inbound packets are accepted only when their source address
//! equals the entry for their source chain.

use common::{Packet, WireAddress};
use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::auth::AuthorityProof;
use crate::error::ContractError;
use crate::state::TRUSTED_REMOTES;

/// Default pagination limit
const DEFAULT_LIMIT: u32 = 30;
/// Maximum pagination limit
const MAX_LIMIT: u32 = 100;

/// Record `address` as the trusted UA on `remote_chain_id`.
pub fn set_remote(
    storage: &mut dyn Storage,
    _proof: &AuthorityProof,
    remote_chain_id: u16,
    address: &WireAddress,
) -> Result<(), ContractError> {
    if remote_chain_id == 0 {
        return Err(ContractError::InvalidChainId {
            chain_id: remote_chain_id,
        });
    }
    if address.is_zero() {
        return Err(ContractError::InvalidRemoteAddress {
            reason: "zero address".to_string(),
        });
    }

    TRUSTED_REMOTES.save(storage, remote_chain_id, &address.to_bytes32())?;
    Ok(())
}

pub fn may_get_remote(
    storage: &dyn Storage,
    remote_chain_id: u16,
) -> StdResult<Option<WireAddress>> {
    Ok(TRUSTED_REMOTES
        .may_load(storage, remote_chain_id)?
        .map(WireAddress::from_bytes32))
}

pub fn get_remote(
    storage: &dyn Storage,
    remote_chain_id: u16,
) -> Result<WireAddress, ContractError> {
    may_get_remote(storage, remote_chain_id)?.ok_or(ContractError::NotConfigured {
        chain_id: remote_chain_id,
    })
}

pub fn is_trusted(
    storage: &dyn Storage,
    remote_chain_id: u16,
    address: &WireAddress,
) -> StdResult<bool> {
    Ok(may_get_remote(storage, remote_chain_id)?.as_ref() == Some(address))
}

/// Reject packets whose source is not the trusted remote of their chain.
pub fn verify_sender(storage: &dyn Storage, packet: &Packet) -> Result<(), ContractError> {
    if !is_trusted(storage, packet.src_chain_id, &packet.src_address)? {
        return Err(ContractError::UntrustedSender {
            chain_id: packet.src_chain_id,
            sender: packet.src_address.to_hex(),
        });
    }
    Ok(())
}

/// Trusted remotes in chain id order.
pub fn list_remotes(
    storage: &dyn Storage,
    start_after: Option<u16>,
    limit: Option<u32>,
) -> StdResult<Vec<(u16, WireAddress)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    TRUSTED_REMOTES
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(chain_id, bytes)| (chain_id, WireAddress::from_bytes32(bytes))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    const BSC: u16 = 10102;

    fn remote() -> WireAddress {
        WireAddress::from_hex("0x7F384B4a58df3e38CDF74727Cfbf9D22a65aCE1f").unwrap()
    }

    #[test]
    fn test_set_and_get_remote() {
        let mut storage = MockStorage::new();
        let proof = AuthorityProof::for_tests("authority");

        set_remote(&mut storage, &proof, BSC, &remote()).unwrap();

        assert_eq!(get_remote(&storage, BSC).unwrap(), remote());
        assert!(is_trusted(&storage, BSC, &remote()).unwrap());
    }

    #[test]
    fn test_set_overwrites() {
        let mut storage = MockStorage::new();
        let proof = AuthorityProof::for_tests("authority");
        let other = WireAddress::from_hex("0x01").unwrap();

        set_remote(&mut storage, &proof, BSC, &remote()).unwrap();
        set_remote(&mut storage, &proof, BSC, &other).unwrap();

        assert_eq!(get_remote(&storage, BSC).unwrap(), other);
        assert!(!is_trusted(&storage, BSC, &remote()).unwrap());
        assert_eq!(list_remotes(&storage, None, None).unwrap().len(), 1);
    }

    #[test]
    fn test_get_unconfigured() {
        let storage = MockStorage::new();
        let err = get_remote(&storage, 7).unwrap_err();
        assert_eq!(err, ContractError::NotConfigured { chain_id: 7 });
        assert!(may_get_remote(&storage, 7).unwrap().is_none());
    }

    #[test]
    fn test_rejects_zero_chain_and_address() {
        let mut storage = MockStorage::new();
        let proof = AuthorityProof::for_tests("authority");

        let err = set_remote(&mut storage, &proof, 0, &remote()).unwrap_err();
        assert_eq!(err, ContractError::InvalidChainId { chain_id: 0 });

        let zero = WireAddress::from_bytes32([0u8; 32]);
        let err = set_remote(&mut storage, &proof, BSC, &zero).unwrap_err();
        assert!(matches!(err, ContractError::InvalidRemoteAddress { .. }));
    }

    #[test]
    fn test_verify_sender() {
        let mut storage = MockStorage::new();
        let proof = AuthorityProof::for_tests("authority");
        set_remote(&mut storage, &proof, BSC, &remote()).unwrap();

        let local = [0x11u8; 32];
        let trusted = Packet::new(BSC, remote().as_slice(), 108, &local, 1, vec![0u8; 9]).unwrap();
        verify_sender(&storage, &trusted).unwrap();

        let spoofed = Packet::new(BSC, &[0x22u8; 20], 108, &local, 1, vec![0u8; 9]).unwrap();
        let err = verify_sender(&storage, &spoofed).unwrap_err();
        assert!(matches!(err, ContractError::UntrustedSender { chain_id: BSC, .. }));

        // Right address, wrong chain
        let other_chain =
            Packet::new(97, remote().as_slice(), 108, &local, 1, vec![0u8; 9]).unwrap();
        let err = verify_sender(&storage, &other_chain).unwrap_err();
        assert!(matches!(err, ContractError::UntrustedSender { chain_id: 97, .. }));
    }

    #[test]
    fn test_list_remotes_paginates() {
        let mut storage = MockStorage::new();
        let proof = AuthorityProof::for_tests("authority");
        for chain_id in [3u16, 1, 2] {
            set_remote(&mut storage, &proof, chain_id, &remote()).unwrap();
        }

        let all = list_remotes(&storage, None, None).unwrap();
        let ids: Vec<u16> = all.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let page = list_remotes(&storage, Some(1), Some(1)).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].0, 2);
    }
}
