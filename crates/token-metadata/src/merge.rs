use indexmap::IndexMap;

use crate::address::to_checksum_address;
use crate::error::Error;
use crate::types::token::TokenRecord;

/// Token records keyed by checksummed address.
pub type MergedMetadataMap = IndexMap<String, TokenRecord>;

/// Fold records into a map keyed by checksummed address.
///
/// Later records replace earlier ones with the same key wholesale; fields
/// are not merged. Any malformed address aborts the whole fold.
pub fn merge_token_records<I>(records: I) -> Result<MergedMetadataMap, Error>
where
    I: IntoIterator<Item = TokenRecord>,
{
    let mut merged = MergedMetadataMap::new();
    let mut seen = 0usize;
    for record in records {
        let key = to_checksum_address(&record.address)?;
        merged.insert(key, record);
        seen += 1;
    }

    tracing::debug!(records = seen, entries = merged.len(), "merged token metadata");
    Ok(merged)
}
