//! Wallet address validation.

use crate::error::{RelayError, RelayResult};

/// Validate the syntactic form of a wallet address.
///
/// An address is valid iff it is `0x` followed by exactly 40 hexadecimal
/// characters, case-insensitive. No checksum verification and no case
/// canonicalization happen here; the downstream service receives the address
/// exactly as submitted.
pub fn validate_wallet_address(address: &str) -> RelayResult<()> {
    let hex = address
        .strip_prefix("0x")
        .ok_or_else(|| RelayError::InvalidAddress(address.to_string()))?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RelayError::InvalidAddress(address.to_string()));
    }

    Ok(())
}
