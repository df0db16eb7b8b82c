use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Networks with a token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Homestead,
    Goerli,
    Polygon,
    Arbitrum,
    Optimism,
    Bsc,
    #[serde(rename = "bsctestnet")]
    BscTestnet,
}

impl Network {
    /// Every supported network.
    pub const ALL: [Network; 7] = [
        Network::Homestead,
        Network::Goerli,
        Network::Polygon,
        Network::Arbitrum,
        Network::Optimism,
        Network::Bsc,
        Network::BscTestnet,
    ];

    /// Trust Wallet `blockchains/` directory holding this network's token list.
    ///
    /// Goerli and the Ethereum L2s reuse the Ethereum mainnet list.
    pub fn registry_namespace(self) -> &'static str {
        match self {
            Network::Homestead | Network::Goerli | Network::Arbitrum | Network::Optimism => {
                "ethereum"
            }
            Network::Polygon => "polygon",
            Network::Bsc | Network::BscTestnet => "smartchain",
        }
    }

    /// EIP-155 chain id.
    pub fn chain_id(self) -> u64 {
        match self {
            Network::Homestead => 1,
            Network::Goerli => 5,
            Network::Polygon => 137,
            Network::Arbitrum => 42161,
            Network::Optimism => 10,
            Network::Bsc => 56,
            Network::BscTestnet => 97,
        }
    }

    /// Whether this is a test network.
    pub fn is_testnet(self) -> bool {
        matches!(self, Network::Goerli | Network::BscTestnet)
    }

    /// Lower-case identifier used in configuration and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Homestead => "homestead",
            Network::Goerli => "goerli",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
            Network::Optimism => "optimism",
            Network::Bsc => "bsc",
            Network::BscTestnet => "bsctestnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| UnknownNetwork(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_namespace_is_total() {
        for network in Network::ALL {
            assert!(!network.registry_namespace().is_empty(), "{network}");
        }
    }

    #[test]
    fn test_registry_namespace_mapping() {
        assert_eq!(Network::Homestead.registry_namespace(), "ethereum");
        assert_eq!(Network::Goerli.registry_namespace(), "ethereum");
        assert_eq!(Network::Arbitrum.registry_namespace(), "ethereum");
        assert_eq!(Network::Optimism.registry_namespace(), "ethereum");
        assert_eq!(Network::Polygon.registry_namespace(), "polygon");
        assert_eq!(Network::Bsc.registry_namespace(), "smartchain");
        assert_eq!(Network::BscTestnet.registry_namespace(), "smartchain");
    }

    #[test]
    fn test_parse_and_display() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
        assert_eq!("bsctestnet".parse::<Network>().unwrap(), Network::BscTestnet);
        assert!("mainnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for network in Network::ALL {
            let json = serde_json::to_string(&network).unwrap();
            assert_eq!(json, format!("\"{network}\""));
        }
    }

    #[test]
    fn test_testnets() {
        let testnets: Vec<_> = Network::ALL.into_iter().filter(|n| n.is_testnet()).collect();
        assert_eq!(testnets, vec![Network::Goerli, Network::BscTestnet]);
        assert_eq!(Network::BscTestnet.chain_id(), 97);
    }
}
