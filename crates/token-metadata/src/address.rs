use tiny_keccak::{Hasher, Keccak};

use crate::error::Error;

/// Derive the EIP-55 checksummed form of a hex address.
///
/// Accepts 40 hex digits with an optional `0x` prefix. All-lowercase and
/// all-uppercase input is checksummed; mixed-case input must already carry
/// a valid checksum.
pub fn to_checksum_address(address: &str) -> Result<String, Error> {
    let digits = address.strip_prefix("0x").unwrap_or(address);

    if digits.len() != 40 {
        return Err(Error::invalid_address(
            address,
            format!("expected 40 hex digits, got {}", digits.len()),
        ));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| Error::invalid_address(address, e.to_string()))?;

    let checksummed = eip55_checksum(&bytes);

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && checksummed[2..] != *digits {
        return Err(Error::invalid_address(address, "bad address checksum"));
    }

    Ok(checksummed)
}

/// Whether `address` is already in EIP-55 checksummed form.
pub fn is_checksum_address(address: &str) -> bool {
    matches!(to_checksum_address(address), Ok(ref c) if c == address)
}

/// EIP-55 mixed-case checksum encoding.
fn eip55_checksum(addr: &[u8; 20]) -> String {
    let hex_addr = hex::encode(addr);
    let mut hasher = Keccak::v256();
    hasher.update(hex_addr.as_bytes());
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);

    let mut result = String::with_capacity(42);
    result.push_str("0x");
    for (i, c) in hex_addr.chars().enumerate() {
        let hash_nibble = if i % 2 == 0 {
            (hash[i / 2] >> 4) & 0x0f
        } else {
            hash[i / 2] & 0x0f
        };
        if hash_nibble >= 8 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}
