use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::assets::local_asset_records;
use crate::error::Error;
use crate::merge::{merge_token_records, MergedMetadataMap};
use crate::source::TokenListSource;
use crate::types::network::Network;
use crate::types::token::TokenRecord;

/// Trust Wallet assets repository, served raw from GitHub.
pub const TRUSTWALLET_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master";

/// Where local logos are published once merged into the assets repository.
pub const LOCAL_LOGO_BASE_URL: &str =
    "https://raw.githubusercontent.com/Iguana-DEX/assets/main/assets";

/// Locations the fetcher reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Root of the remote registry; lists live under `blockchains/{namespace}/tokenlist.json`.
    #[serde(rename = "registryBaseUrl")]
    pub registry_base_url: String,

    /// Directory of `{address}.png` logos.
    #[serde(rename = "assetsDir")]
    pub assets_dir: PathBuf,

    /// Base URL used to build `logoURI` for local logos.
    #[serde(rename = "logoBaseUrl")]
    pub logo_base_url: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            registry_base_url: TRUSTWALLET_REGISTRY_URL.to_string(),
            assets_dir: PathBuf::from("assets"),
            logo_base_url: LOCAL_LOGO_BASE_URL.to_string(),
        }
    }
}

impl FetcherConfig {
    /// Set the registry root URL.
    pub fn with_registry_base_url(mut self, url: impl Into<String>) -> Self {
        self.registry_base_url = url.into();
        self
    }

    /// Set the local logo directory.
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the base URL for local logo `logoURI`s.
    pub fn with_logo_base_url(mut self, url: impl Into<String>) -> Self {
        self.logo_base_url = url.into();
        self
    }
}

/// Collects token metadata from the registry, local logos and caller overrides.
#[derive(Debug, Clone)]
pub struct MetadataFetcher<S> {
    config: FetcherConfig,
    source: S,
}

#[cfg(feature = "github-registry")]
impl MetadataFetcher<crate::registry::GithubTokenListSource> {
    /// Fetcher backed by the registry at `config.registry_base_url`.
    pub fn new(config: FetcherConfig) -> Self {
        let source = crate::registry::GithubTokenListSource::new(&config.registry_base_url);
        Self { config, source }
    }
}

impl<S: TokenListSource> MetadataFetcher<S> {
    /// Fetcher reading remote lists from `source`.
    pub fn with_source(config: FetcherConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Configuration this fetcher was built with.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Merge the network's registry list, local logos and `known_records`.
    ///
    /// Sources are applied in that order; for any address the last record
    /// seen wins as a whole. Nothing is cached between calls.
    pub async fn get_existing_metadata(
        &self,
        network: Network,
        known_records: Option<&[TokenRecord]>,
    ) -> Result<MergedMetadataMap, Error> {
        let remote = self.source.fetch(network.registry_namespace()).await?;
        let local = local_asset_records(&self.config.assets_dir, &self.config.logo_base_url)?;
        let known = known_records.unwrap_or_default().iter().cloned();

        merge_token_records(remote.into_iter().chain(local).chain(known))
    }
}
