use alloy::primitives::{address, Address};
use std::collections::HashMap;

/// Contract deployments on Berachain bArtio shared by the whole tool
/// collection. Checked at compile time by the `address!` macro.
pub mod contracts {
    use super::*;

    pub const OB_ROUTER: Address = address!("F6eDCa3C79b4A3DFA82418e278a81604083b999D");
    pub const KODIAK_SWAP_ROUTER_02: Address = address!("496e305c03909ae382974caca4c580e1bf32afbe");
    pub const KODIAK_UNISWAP_V2_ROUTER_02: Address =
        address!("406846114B2A9b65a8A2Ab702C2C57d27784dBA2");
    pub const BERA_CROC_MULTI_SWAP: Address = address!("21e2C0AFd058A89FCf7caf3aEA3cB84Ae977B73D");
    pub const INFRARED: Address = address!("e41779952f5485db5440452DFa43350556AA4673");
    pub const INFRARED_BRIBE_COLLECTOR: Address =
        address!("eD8DAB845Ff8FFf76d59AD1eEaBE1cad6CC4F10f");
    pub const INFRARED_BRIBES: Address = address!("d9D4EfC1c67CF118D76FbB32b31C695A1D5e427e");
    pub const INFRARED_IBGT_VAULT: Address = address!("31E6458C83C4184A23c761fDAffb61941665E012");
    pub const BEND: Address = address!("30A3039675E5b5cbEA49d9a5eacbc11f9199B86D");
    pub const POT2PUMP_FACTORY: Address = address!("30DbCcdFE17571c2Cec5caB61736a5AF194b1593");
    pub const POT2PUMP_FACADE: Address = address!("29F4D4511dA9771F0529872923fb48F4ACfEDcc2");
    pub const HONEYPOT_NONFUNGIBLE_POSITION_MANAGER: Address =
        address!("29a738deAFdd2c6806e2f66891D812A311799828");
}

pub mod tokens {
    use super::*;

    pub const WBERA: Address = address!("6969696969696969696969696969696969696969");
    pub const IBGT: Address = address!("46eFC86F0D7455F135CC9df501673739d513E982");
    pub const HONEY: Address = address!("FCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce");
    pub const BGT: Address = address!("656b95E550C07a9ffe548bd4085c72418Ceb1dba");
}

pub mod urls {
    pub const BEX_ROUTE_URL: &str = "https://bartio-bex-router.berachain.com/dex/route";
    pub const OOGA_BOOGA_URL: &str = "https://bartio.api.oogabooga.io";
    pub const BGT_VAULT_URL: &str =
        "https://bartio-pol-indexer.berachain.com/berachain/v1alpha1/beacon/vaults?pageSize=9999";
}

/// Address/URL lookup for one network, built once at startup and handed to the
/// tools that need it. Immutable after construction; a missing key is a caller
/// error and surfaces as `None`.
#[derive(Clone)]
pub struct ChainConfig {
    contracts: HashMap<&'static str, Address>,
    tokens: HashMap<&'static str, Address>,
    urls: HashMap<&'static str, &'static str>,
}

impl ChainConfig {
    pub fn berachain() -> Self {
        let contracts = HashMap::from([
            ("OBRouter", contracts::OB_ROUTER),
            ("KodiakSwapRouter02", contracts::KODIAK_SWAP_ROUTER_02),
            (
                "KodiakUniswapV2Router02",
                contracts::KODIAK_UNISWAP_V2_ROUTER_02,
            ),
            ("BeraCrocMultiSwap", contracts::BERA_CROC_MULTI_SWAP),
            ("Infrared", contracts::INFRARED),
            (
                "InfraredBribeCollector",
                contracts::INFRARED_BRIBE_COLLECTOR,
            ),
            ("InfraredBribes", contracts::INFRARED_BRIBES),
            ("InfraredIBGTVault", contracts::INFRARED_IBGT_VAULT),
            ("Bend", contracts::BEND),
            ("Pot2PumpFactory", contracts::POT2PUMP_FACTORY),
            ("Pot2PumpFacade", contracts::POT2PUMP_FACADE),
            (
                "HoneypotNonfungiblePositionManager",
                contracts::HONEYPOT_NONFUNGIBLE_POSITION_MANAGER,
            ),
        ]);

        let tokens = HashMap::from([
            ("WBERA", tokens::WBERA),
            ("IBGT", tokens::IBGT),
            ("HONEY", tokens::HONEY),
            ("BGT", tokens::BGT),
        ]);

        let urls = HashMap::from([
            ("BEXRouteURL", urls::BEX_ROUTE_URL),
            ("OogaBoogaURL", urls::OOGA_BOOGA_URL),
            ("BGTVaultURL", urls::BGT_VAULT_URL),
        ]);

        Self {
            contracts,
            tokens,
            urls,
        }
    }

    pub fn contract(&self, role: &str) -> Option<Address> {
        self.contracts.get(role).copied()
    }

    pub fn token(&self, symbol: &str) -> Option<Address> {
        self.tokens.get(symbol).copied()
    }

    pub fn url(&self, name: &str) -> Option<&'static str> {
        self.urls.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bend_contract_is_registered() {
        let config = ChainConfig::berachain();
        assert_eq!(config.contract("Bend"), Some(contracts::BEND));
    }

    #[test]
    fn honey_token_is_registered() {
        let config = ChainConfig::berachain();
        assert_eq!(config.token("HONEY"), Some(tokens::HONEY));
    }

    #[test]
    fn missing_key_returns_none() {
        let config = ChainConfig::berachain();
        assert_eq!(config.contract("NotARole"), None);
        assert_eq!(config.token("NOTATOKEN"), None);
        assert_eq!(config.url("NotAUrl"), None);
    }

    #[test]
    fn urls_are_well_formed() {
        let config = ChainConfig::berachain();
        for name in ["BEXRouteURL", "OogaBoogaURL", "BGTVaultURL"] {
            let raw = config.url(name).unwrap();
            url::Url::parse(raw).unwrap();
        }
    }
}
