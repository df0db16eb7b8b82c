use std::collections::HashMap;
use std::future::Future;

use crate::error::Error;
use crate::types::token::TokenRecord;

/// Trait for remote token list providers (GitHub registry, fixtures, etc.).
pub trait TokenListSource {
    /// Fetch the `tokens` of the list published under a registry namespace.
    fn fetch(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<TokenRecord>, Error>> + Send;
}

/// In-memory token lists keyed by namespace, for testing and offline use.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenListSource {
    lists: HashMap<String, Vec<TokenRecord>>,
}

impl StaticTokenListSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: &str, tokens: Vec<TokenRecord>) {
        self.lists.insert(namespace.to_string(), tokens);
    }

    /// Add a list from a `tokenlist.json` body.
    pub fn insert_json(&mut self, namespace: &str, json: &str) -> Result<(), Error> {
        let list: crate::types::token::TokenList =
            serde_json::from_str(json).map_err(|e| Error::InvalidTokenList(e.to_string()))?;
        self.insert(namespace, list.tokens);
        Ok(())
    }
}

impl TokenListSource for StaticTokenListSource {
    async fn fetch(&self, namespace: &str) -> Result<Vec<TokenRecord>, Error> {
        self.lists
            .get(namespace)
            .cloned()
            .ok_or_else(|| Error::NetworkUnavailable {
                url: namespace.to_string(),
                reason: "no token list for namespace".to_string(),
            })
    }
}
