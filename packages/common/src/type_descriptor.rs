//! Type descriptors and their canonical byte key.
//!
//! A descriptor names a type as `account::Module::Struct`. Tables that must be
//! readable from other chains are keyed by the descriptor's canonical bytes
//! rather than by any in-process handle: the UTF-8 of the normalised textual
//! form. Hex accounts are widened to 64 lowercase digits so that `0x1` and
//! its zero-padded spelling yield the same key.

use std::fmt;

use cosmwasm_schema::cw_serde;

use crate::address::WireAddress;
use crate::error::CodecError;

const SEPARATOR: &str = "::";

#[cw_serde]
pub struct TypeDescriptor {
    pub account_address: String,
    pub module_name: String,
    pub struct_name: String,
}

impl TypeDescriptor {
    pub fn new(
        account_address: impl Into<String>,
        module_name: impl Into<String>,
        struct_name: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let account_address = normalize_account(&account_address.into())?;
        let module_name = module_name.into();
        let struct_name = struct_name.into();

        validate_identifier("module", &module_name)?;
        validate_identifier("struct", &struct_name)?;

        Ok(Self {
            account_address,
            module_name,
            struct_name,
        })
    }

    /// Parse `account::Module::Struct`.
    pub fn parse(type_name: &str) -> Result<Self, CodecError> {
        let parts: Vec<&str> = type_name.trim().split(SEPARATOR).collect();
        match parts.as_slice() {
            [account, module, name] => Self::new(*account, *module, *name),
            _ => Err(CodecError::MalformedAssetType {
                reason: format!(
                    "expected account::Module::Struct, got '{}'",
                    type_name
                ),
            }),
        }
    }

    /// Normalised textual form
    pub fn type_name(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.account_address, SEPARATOR, self.module_name, SEPARATOR, self.struct_name
        )
    }

    /// Stable content-derived key used by the coin type tables.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.type_name().into_bytes()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

fn normalize_account(account: &str) -> Result<String, CodecError> {
    let account = account.trim();
    if account.is_empty() {
        return Err(CodecError::MalformedAssetType {
            reason: "empty account address".to_string(),
        });
    }
    if account.contains(':') || account.chars().any(char::is_whitespace) {
        return Err(CodecError::MalformedAssetType {
            reason: format!("invalid account address '{}'", account),
        });
    }

    if account.starts_with("0x") || account.starts_with("0X") {
        let wire = WireAddress::from_hex(account).map_err(|e| CodecError::MalformedAssetType {
            reason: e.to_string(),
        })?;
        return Ok(wire.to_hex());
    }

    Ok(account.to_string())
}

fn validate_identifier(kind: &str, ident: &str) -> Result<(), CodecError> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if !valid {
        return Err(CodecError::MalformedAssetType {
            reason: format!("invalid {} name '{}'", kind, ident),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MFL_OWNER: &str = "0x9ae8412de465c9fbf398ea46dfd23196cf216918321688b213e5da904d281886";

    #[test]
    fn test_parse_full_type() {
        let descriptor = TypeDescriptor::parse(&format!("{}::Coins::MFL", MFL_OWNER)).unwrap();
        assert_eq!(descriptor.account_address, MFL_OWNER);
        assert_eq!(descriptor.module_name, "Coins");
        assert_eq!(descriptor.struct_name, "MFL");
        assert_eq!(
            descriptor.canonical_bytes(),
            format!("{}::Coins::MFL", MFL_OWNER).into_bytes()
        );
    }

    #[test]
    fn test_short_hex_account_matches_long_form() {
        let short = TypeDescriptor::parse("0x1::aptos_coin::AptosCoin").unwrap();
        let long = TypeDescriptor::parse(&format!(
            "0x{}1::aptos_coin::AptosCoin",
            "0".repeat(63)
        ))
        .unwrap();

        assert_eq!(short, long);
        assert_eq!(short.canonical_bytes(), long.canonical_bytes());
    }

    #[test]
    fn test_bech32_account_kept_verbatim() {
        let descriptor = TypeDescriptor::parse("terra1owner::Coins::MFL").unwrap();
        assert_eq!(descriptor.account_address, "terra1owner");
        assert_eq!(descriptor.to_string(), "terra1owner::Coins::MFL");
    }

    #[test]
    fn test_bytes_independent_of_construction_path() {
        let parsed = TypeDescriptor::parse("owner::Coins::MFL").unwrap();
        let built = TypeDescriptor::new("owner", "Coins", "MFL").unwrap();
        assert_eq!(parsed.canonical_bytes(), built.canonical_bytes());
    }

    #[test]
    fn test_rejects_malformed_types() {
        for bad in [
            "",
            "owner::Coins",
            "owner::Coins::MFL::Extra",
            "::Coins::MFL",
            "owner::1Coins::MFL",
            "owner::Coins::M-FL",
            "own er::Coins::MFL",
            "0xzz::Coins::MFL",
        ] {
            let err = TypeDescriptor::parse(bad).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedAssetType { .. }),
                "expected MalformedAssetType for '{}'",
                bad
            );
        }
    }
}
