//! Interface of the interchain messaging endpoint, as seen by a UA.
//!
//! The endpoint is an external contract. A UA only needs to register itself,
//! look up its registration, hand packets over for sending, and accept
//! deliveries through [`ReceiverExecuteMsg::LzReceive`].

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Binary, Coin, CosmosMsg, StdResult, WasmMsg};

use crate::packet::DeliveryEvent;
use crate::type_descriptor::TypeDescriptor;

/// Execute messages a UA sends to the endpoint
#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Register the calling contract as a user application
    RegisterUa { type_info: TypeDescriptor },
    /// Send a payload to the remote UA at `dst_address` on `dst_chain_id`
    Send {
        dst_chain_id: u16,
        dst_address: Binary,
        payload: Binary,
    },
}

impl EndpointExecuteMsg {
    pub fn into_cosmos_msg(self, endpoint: &str, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: endpoint.to_string(),
            msg: to_json_binary(&self)?,
            funds,
        }))
    }
}

/// Queries a UA issues against the endpoint
#[cw_serde]
#[derive(QueryResponses)]
pub enum EndpointQueryMsg {
    #[returns(UaTypeInfoResponse)]
    UaTypeInfo { ua: String },
}

#[cw_serde]
pub struct UaTypeInfoResponse {
    pub ua: String,
    pub type_info: TypeDescriptor,
}

/// Message the endpoint executes on a UA to deliver an inbound packet
#[cw_serde]
pub enum ReceiverExecuteMsg {
    LzReceive { event: DeliveryEvent },
}

impl ReceiverExecuteMsg {
    pub fn into_cosmos_msg(self, ua: &str) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: ua.to_string(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }))
    }
}
