//! Authority capability for registry writes.
//!
//! [`AuthorityProof`] can only be obtained by checking a sender against the
//! authority recorded at initialisation. Every write to the trusted remote
//! registry, the coin map and the asset registry takes one by reference.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::CONFIG;

#[derive(Debug)]
pub struct AuthorityProof {
    authority: Addr,
}

impl AuthorityProof {
    /// Verify `sender` is the recorded authority of this UA.
    pub fn verify(storage: &dyn Storage, sender: &Addr) -> Result<Self, ContractError> {
        let config = CONFIG.load(storage)?;
        let authority = config.authority.ok_or(ContractError::NotInitialized)?;
        if *sender != authority {
            return Err(ContractError::Unauthorized);
        }
        Ok(Self { authority })
    }

    pub fn authority(&self) -> &Addr {
        &self.authority
    }

    #[cfg(test)]
    pub(crate) fn for_tests(authority: &str) -> Self {
        Self {
            authority: Addr::unchecked(authority),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Config, Lifecycle};
    use cosmwasm_std::testing::MockStorage;

    fn save_config(storage: &mut dyn Storage, authority: Option<&str>) {
        let config = Config {
            owner: Addr::unchecked("owner"),
            endpoint: Addr::unchecked("endpoint"),
            local_chain_id: 108,
            admin: authority.map(|_| Addr::unchecked("admin")),
            authority: authority.map(Addr::unchecked),
            lifecycle: if authority.is_some() {
                Lifecycle::Active
            } else {
                Lifecycle::Uninitialized
            },
            paused: false,
        };
        CONFIG.save(storage, &config).unwrap();
    }

    #[test]
    fn test_verify_authority() {
        let mut storage = MockStorage::new();
        save_config(&mut storage, Some("authority"));

        let proof = AuthorityProof::verify(&storage, &Addr::unchecked("authority")).unwrap();
        assert_eq!(proof.authority(), &Addr::unchecked("authority"));

        let err = AuthorityProof::verify(&storage, &Addr::unchecked("admin")).unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_verify_before_initialize() {
        let mut storage = MockStorage::new();
        save_config(&mut storage, None);

        let err = AuthorityProof::verify(&storage, &Addr::unchecked("authority")).unwrap_err();
        assert_eq!(err, ContractError::NotInitialized);
    }
}
