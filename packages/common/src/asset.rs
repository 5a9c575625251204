//! Concrete holdings a type descriptor can be bound to.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

#[cw_serde]
pub enum AssetInfo {
    /// Bank module denom
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Message paying `amount` of this asset from the calling contract.
    pub fn transfer_msg(&self, recipient: &str, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }),
        };
        Ok(msg)
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "native:{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "cw20:{}", contract_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_transfer_msg() {
        let asset = AssetInfo::Native {
            denom: "uluna".to_string(),
        };
        let msg = asset.transfer_msg("recipient", Uint128::new(50)).unwrap();
        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "recipient".to_string(),
                amount: vec![Coin::new(50, "uluna")],
            })
        );
    }

    #[test]
    fn test_cw20_transfer_msg() {
        let asset = AssetInfo::Cw20 {
            contract_addr: "token".to_string(),
        };
        let msg = asset.transfer_msg("recipient", Uint128::new(7)).unwrap();
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                funds,
                ..
            }) => {
                assert_eq!(contract_addr, "token");
                assert!(funds.is_empty());
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(asset.to_string(), "cw20:token");
        assert!(!asset.is_native());
    }
}
