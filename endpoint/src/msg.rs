use common::{DeliveryEvent, TypeDescriptor};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

#[cw_serde]
pub struct InstantiateMsg {
    /// Chain id packets are addressed to when they arrive here
    pub local_chain_id: u16,
    /// Account trusted to deliver remote packets
    pub relayer: String,
}

/// `RegisterUa` and `Send` match `common::endpoint::EndpointExecuteMsg`
#[cw_serde]
pub enum ExecuteMsg {
    /// Register the calling contract as a UA
    RegisterUa { type_info: TypeDescriptor },
    /// UA: send `payload` to `dst_address` on `dst_chain_id`
    Send {
        dst_chain_id: u16,
        dst_address: Binary,
        payload: Binary,
    },
    /// Relayer: deliver a remote packet to `ua`
    Deliver { ua: String, event: DeliveryEvent },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(common::endpoint::UaTypeInfoResponse)]
    UaTypeInfo { ua: String },
    /// Last nonce assigned on the path, 0 if none
    #[returns(u64)]
    OutboundNonce {
        dst_chain_id: u16,
        ua: String,
        dst_address: Binary,
    },
    /// Last nonce delivered on the path, 0 if none
    #[returns(u64)]
    InboundNonce {
        src_chain_id: u16,
        src_address: Binary,
        ua: String,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub local_chain_id: u16,
    pub relayer: Addr,
}
