//! Shared multi-test harness: a reference endpoint (`contract0`) and one
//! Stream Bridge UA (`contract1`) on chain 108, with a trusted BSC remote
//! available on chain 10102.

#![allow(dead_code)]

use common::{AssetInfo, DeliveryEvent, WireAddress};
use cosmwasm_std::{coins, Addr, Binary, Empty};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use stream_bridge::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

pub const LOCAL_CHAIN: u16 = 108;
pub const REMOTE_CHAIN: u16 = 10102;
/// UA deployed on the remote chain
pub const REMOTE_UA: &str = "0x7F384B4a58df3e38CDF74727Cfbf9D22a65aCE1f";
/// MFL token on the remote chain
pub const REMOTE_MFL: &str = "0xDE3a190D9D26A8271Ae9C27573c03094A8A2c449";
pub const MFL_TYPE: &str =
    "0x9ae8412de465c9fbf398ea46dfd23196cf216918321688b213e5da904d281886::Coins::MFL";
pub const MFL_DENOM: &str = "umfl";

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        stream_bridge::contract::execute,
        stream_bridge::contract::instantiate,
        stream_bridge::contract::query,
    )
    .with_reply(stream_bridge::contract::reply);
    Box::new(contract)
}

pub fn contract_endpoint() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_endpoint::contract::execute,
        mock_endpoint::contract::instantiate,
        mock_endpoint::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub endpoint: Addr,
    pub bridge: Addr,
    pub owner: Addr,
    pub admin: Addr,
    pub authority: Addr,
    pub relayer: Addr,
    pub sender: Addr,
    pub recipient: Addr,
}

/// Endpoint and bridge deployed, bridge not yet initialized.
pub fn setup() -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let sender = Addr::unchecked("terra1sender");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &sender, coins(1_000_000, MFL_DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &owner, coins(1_000_000, "uluna"))
            .unwrap();
    });

    let endpoint_code = app.store_code(contract_endpoint());
    let endpoint = app
        .instantiate_contract(
            endpoint_code,
            owner.clone(),
            &mock_endpoint::msg::InstantiateMsg {
                local_chain_id: LOCAL_CHAIN,
                relayer: "terra1relayer".to_string(),
            },
            &[],
            "endpoint",
            None,
        )
        .unwrap();

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &InstantiateMsg {
                endpoint: endpoint.to_string(),
                local_chain_id: LOCAL_CHAIN,
            },
            &[],
            "stream-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite {
        app,
        endpoint,
        bridge,
        owner,
        admin: Addr::unchecked("terra1admin"),
        authority: Addr::unchecked("terra1authority"),
        relayer: Addr::unchecked("terra1relayer"),
        sender,
        recipient: Addr::unchecked("terra1recipient"),
    }
}

/// Bridge initialized and registered with the endpoint.
pub fn setup_active() -> Suite {
    let mut suite = setup();
    suite.initialize().unwrap();
    suite
}

/// Active bridge trusting `REMOTE_UA` on `REMOTE_CHAIN`, with MFL mapped to
/// `REMOTE_MFL` there and registered as the native `umfl` holding.
pub fn setup_configured() -> Suite {
    let mut suite = setup_active();
    suite.set_trusted_remote(REMOTE_CHAIN, REMOTE_UA).unwrap();
    suite.set_coin_map(REMOTE_CHAIN, REMOTE_MFL, MFL_TYPE).unwrap();
    suite
        .register_asset(
            MFL_TYPE,
            AssetInfo::Native {
                denom: MFL_DENOM.to_string(),
            },
        )
        .unwrap();
    suite
}

impl Suite {
    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, &[])
    }

    pub fn initialize(&mut self) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::Initialize {
            admin: self.admin.to_string(),
            authority: self.authority.to_string(),
        };
        let owner = self.owner.clone();
        self.execute(&owner, &msg)
    }

    pub fn set_trusted_remote(
        &mut self,
        chain_id: u16,
        address: &str,
    ) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::SetTrustedRemote {
            chain_id,
            address: address.to_string(),
        };
        let authority = self.authority.clone();
        self.execute(&authority, &msg)
    }

    pub fn set_coin_map(
        &mut self,
        chain_id: u16,
        remote_asset: &str,
        asset_type: &str,
    ) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::SetCoinMap {
            chain_id,
            remote_asset: remote_asset.to_string(),
            asset_type: asset_type.to_string(),
        };
        let authority = self.authority.clone();
        self.execute(&authority, &msg)
    }

    pub fn register_asset(
        &mut self,
        asset_type: &str,
        asset: AssetInfo,
    ) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::RegisterAsset {
            asset_type: asset_type.to_string(),
            asset,
        };
        let authority = self.authority.clone();
        self.execute(&authority, &msg)
    }

    /// Native MFL stream from `sender` to `recipient` over `duration` seconds
    /// starting now. Returns the stream id.
    pub fn create_native_stream(&mut self, deposit: u128, duration: u64) -> u64 {
        let now = self.now();
        let res = self
            .app
            .execute_contract(
                self.sender.clone(),
                self.bridge.clone(),
                &ExecuteMsg::CreateStream {
                    recipient: self.recipient.to_string(),
                    asset_type: MFL_TYPE.to_string(),
                    start_time: now,
                    stop_time: now + duration,
                },
                &coins(deposit, MFL_DENOM),
            )
            .unwrap();
        attr(&res, "stream_id").unwrap().parse().unwrap()
    }

    pub fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn advance(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        });
    }

    pub fn config(&self) -> ConfigResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::Config {})
            .unwrap()
    }

    /// Address remote packets must target to reach this bridge
    pub fn wire_address(&self) -> WireAddress {
        WireAddress::from_slice(self.config().wire_address.as_slice()).unwrap()
    }

    pub fn balance(&self, addr: &Addr, denom: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, denom)
            .unwrap()
            .amount
            .u128()
    }

    /// Inbound packet from the trusted remote addressed to this bridge.
    pub fn inbound_event(&self, nonce: u64, payload: &[u8]) -> DeliveryEvent {
        DeliveryEvent::Raw {
            src_chain_id: REMOTE_CHAIN,
            src_address_raw: REMOTE_UA.to_string(),
            dst_chain_id: LOCAL_CHAIN,
            dst_address_raw: self.wire_address().to_hex(),
            nonce,
            payload: Binary::from(payload),
        }
    }

    /// Relay `event` through the endpoint.
    pub fn deliver(&mut self, event: DeliveryEvent) -> anyhow::Result<AppResponse> {
        let msg = mock_endpoint::msg::ExecuteMsg::Deliver {
            ua: self.bridge.to_string(),
            event,
        };
        self.app
            .execute_contract(self.relayer.clone(), self.endpoint.clone(), &msg, &[])
    }

    /// Call `LzReceive` as the endpoint, skipping its nonce bookkeeping.
    pub fn lz_receive_from_endpoint(
        &mut self,
        event: DeliveryEvent,
    ) -> anyhow::Result<AppResponse> {
        let endpoint = self.endpoint.clone();
        self.execute(&endpoint, &ExecuteMsg::LzReceive { event })
    }
}

// ============================================================================
// Response helpers
// ============================================================================

pub fn attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn root_cause(err: anyhow::Error) -> String {
    err.root_cause().to_string()
}
