use serde::{Deserialize, Deserializer, Serialize};

/// A token entry in the Uniswap token-list shape.
///
/// Every field is optional when parsing; a missing `address` is left empty
/// and rejected later by the checksum step. Fields this crate does not model are kept in
/// `extra` so registry-specific data survives a merge untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(default)]
    pub address: String,

    #[serde(rename = "chainId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,

    #[serde(rename = "logoURI")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Caller-supplied partial token info used to override merged entries.
pub type MetadataOverride = TokenRecord;

impl TokenRecord {
    /// Record carrying only an address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Set `logoURI`.
    pub fn with_logo_uri(mut self, logo_uri: impl Into<String>) -> Self {
        self.logo_uri = Some(logo_uri.into());
        self
    }

    /// Set the token symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the token name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the token decimals.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Name, symbol and decimals of this record.
    pub fn minimal(&self) -> MinimalTokenInfo {
        MinimalTokenInfo {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
        }
    }
}

/// Name, symbol and decimals of a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalTokenInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// Response body of a registry `tokenlist.json`. Only `tokens` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenList {
    pub tokens: Vec<TokenRecord>,
}

/// Curated list a token is published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Listed,
    Untrusted,
    Vetted,
}

impl ListKind {
    /// Serialized identifier of the list.
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Listed => "listed",
            ListKind::Untrusted => "untrusted",
            ListKind::Vetted => "vetted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trustwallet_entry_keeps_unknown_fields() {
        let json = r#"{
            "asset": "c60_t0x6B175474E89094C44Da98b954EedeAC495271d0F",
            "type": "ERC20",
            "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F",
            "name": "Dai Stablecoin",
            "symbol": "DAI",
            "decimals": 18,
            "logoURI": "https://assets-cdn.trustwallet.com/blockchains/ethereum/assets/0x6B175474E89094C44Da98b954EedeAC495271d0F/logo.png",
            "pairs": []
        }"#;

        let record: TokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.symbol.as_deref(), Some("DAI"));
        assert_eq!(record.decimals, Some(18));
        assert!(record.logo_uri.as_deref().unwrap().ends_with("logo.png"));
        assert_eq!(record.extra["type"], "ERC20");
        assert!(record.extra.contains_key("pairs"));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["asset"], "c60_t0x6B175474E89094C44Da98b954EedeAC495271d0F");
        assert_eq!(back["logoURI"], record.logo_uri.clone().unwrap());
    }

    #[test]
    fn test_address_only_record() {
        let record: TokenRecord = serde_json::from_str(r#"{ "address": "0xabc" }"#).unwrap();
        assert_eq!(record, TokenRecord::new("0xabc"));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"address":"0xabc"}"#
        );
    }

    #[test]
    fn test_token_list_ignores_header_fields() {
        let json = r#"{
            "name": "Trust Wallet: Ethereum List",
            "timestamp": "2023-01-01T00:00:00.000000",
            "version": { "major": 1, "minor": 0, "patch": 0 },
            "tokens": [{ "address": "0xabc", "symbol": "ABC" }]
        }"#;
        let list: TokenList = serde_json::from_str(json).unwrap();
        assert_eq!(list.tokens.len(), 1);
        assert_eq!(list.tokens[0].symbol.as_deref(), Some("ABC"));
    }

    #[test]
    fn test_minimal_projection() {
        let record = TokenRecord::new("0xabc")
            .with_name("Balancer")
            .with_symbol("BAL")
            .with_decimals(18)
            .with_logo_uri("https://example.com/bal.png");
        assert_eq!(
            record.minimal(),
            MinimalTokenInfo {
                name: Some("Balancer".to_string()),
                symbol: Some("BAL".to_string()),
                decimals: Some(18),
            }
        );
    }

    #[test]
    fn test_null_tags_are_empty() {
        let json = r#"{
            "tokens": [
                { "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F", "tags": null },
                { "address": "0xdAC17F958D2ee523a2206206994597C13D831ec7", "tags": ["stablecoin"] }
            ]
        }"#;
        let list: TokenList = serde_json::from_str(json).unwrap();
        assert!(list.tokens[0].tags.is_empty());
        assert_eq!(list.tokens[1].tags, vec!["stablecoin".to_string()]);
    }

    #[test]
    fn test_missing_address_parses_empty() {
        let list: TokenList = serde_json::from_str(r#"{ "tokens": [{ "symbol": "X" }] }"#).unwrap();
        assert_eq!(list.tokens[0].address, "");
        assert_eq!(list.tokens[0].symbol.as_deref(), Some("X"));
    }

    #[test]
    fn test_list_kind_serde() {
        assert_eq!(serde_json::to_string(&ListKind::Vetted).unwrap(), "\"vetted\"");
        let kind: ListKind = serde_json::from_str("\"untrusted\"").unwrap();
        assert_eq!(kind, ListKind::Untrusted);
        assert_eq!(ListKind::Listed.as_str(), "listed");
    }
}
