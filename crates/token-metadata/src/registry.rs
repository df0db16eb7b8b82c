use crate::error::Error;
use crate::fetcher::TRUSTWALLET_REGISTRY_URL;
use crate::source::TokenListSource;
use crate::types::token::{TokenList, TokenRecord};

/// Token lists fetched over HTTP from a `blockchains/{namespace}/tokenlist.json` layout.
#[derive(Debug, Clone)]
pub struct GithubTokenListSource {
    client: reqwest::Client,
    base_url: String,
}

impl GithubTokenListSource {
    /// Source rooted at `base_url` with a default client.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Source rooted at `base_url` using a preconfigured client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the token list for `namespace`.
    pub fn list_url(&self, namespace: &str) -> String {
        format!("{}/blockchains/{namespace}/tokenlist.json", self.base_url)
    }
}

impl Default for GithubTokenListSource {
    fn default() -> Self {
        Self::new(TRUSTWALLET_REGISTRY_URL)
    }
}

impl TokenListSource for GithubTokenListSource {
    async fn fetch(&self, namespace: &str) -> Result<Vec<TokenRecord>, Error> {
        let url = self.list_url(namespace);
        let unavailable = |e: reqwest::Error| Error::NetworkUnavailable {
            url: url.clone(),
            reason: e.to_string(),
        };

        tracing::debug!(%url, "fetching token list");
        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(unavailable)?
            .bytes()
            .await
            .map_err(unavailable)?;

        let list: TokenList =
            serde_json::from_slice(&body).map_err(|e| Error::InvalidTokenList(e.to_string()))?;
        tracing::debug!(%url, tokens = list.tokens.len(), "fetched token list");
        Ok(list.tokens)
    }
}
