//! Token list metadata aggregation.
//!
//! Merges a Trust Wallet registry token list, a directory of local logo
//! images and caller overrides into one map keyed by checksummed address,
//! and maps testnet token addresses to their mainnet counterparts.

pub mod address;
pub mod aliases;
pub mod assets;
pub mod error;
pub mod fetcher;
pub mod merge;
#[cfg(feature = "github-registry")]
pub mod registry;
pub mod source;
pub mod types;

pub use address::to_checksum_address;
pub use aliases::get_mainnet_address;
pub use error::Error;
pub use fetcher::{FetcherConfig, MetadataFetcher};
pub use merge::{merge_token_records, MergedMetadataMap};
pub use source::{StaticTokenListSource, TokenListSource};
pub use types::network::Network;
pub use types::token::{ListKind, MetadataOverride, MinimalTokenInfo, TokenList, TokenRecord};

/// Merge the Trust Wallet list for `network`, the logos in `./assets` and
/// `known_records`, using the default [`FetcherConfig`].
#[cfg(feature = "github-registry")]
pub async fn get_existing_metadata(
    network: Network,
    known_records: Option<&[TokenRecord]>,
) -> Result<MergedMetadataMap, Error> {
    MetadataFetcher::new(FetcherConfig::default())
        .get_existing_metadata(network, known_records)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_then_checksum() {
        // Canonical values in the alias table are not all checksummed.
        let mainnet = get_mainnet_address("0x89534a24450081Aa267c79B07411e9617D984052");
        assert_eq!(mainnet, "0x02d60b84491589974263d922d9cc7a3152618ef6");
        assert_eq!(
            to_checksum_address(mainnet).unwrap(),
            to_checksum_address(&mainnet.to_uppercase().replacen("0X", "0x", 1)).unwrap()
        );
    }

    #[test]
    fn test_alias_table_addresses_are_valid() {
        for (alias, mainnet) in aliases::aliases() {
            to_checksum_address(alias).unwrap();
            to_checksum_address(mainnet).unwrap();
        }
    }

    #[tokio::test]
    async fn test_overrides_merge_under_mainnet_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = StaticTokenListSource::new();
        source.insert("ethereum", Vec::new());
        let fetcher = MetadataFetcher::with_source(
            FetcherConfig::default().with_assets_dir(dir.path()),
            source,
        );

        let goerli_bal = "0xfA8449189744799aD2AcE7e0EBAC8BB7575eff47";
        let known = vec![TokenRecord::new(get_mainnet_address(goerli_bal)).with_symbol("BAL")];
        let merged = fetcher
            .get_existing_metadata(Network::Goerli, Some(&known))
            .await
            .unwrap();

        assert_eq!(
            merged["0xba100000625a3754423978a60c9317c58a424e3D"].symbol.as_deref(),
            Some("BAL")
        );
    }
}
