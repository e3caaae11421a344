use crate::{
    consts::{MultisigId, SignerAddress},
    errors::{ProposalError, Result},
};

/// Decodes a hex string (with or without `0x`) into exactly `N` bytes.
pub fn parse_hex<const N: usize>(value: &str) -> Result<[u8; N]> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let bytes = hex::decode(digits).map_err(|e| ProposalError::InvalidHex {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ProposalError::InvalidHex {
            value: value.to_string(),
            reason: format!("expected {N} bytes, got {}", bytes.len()),
        })
}

pub fn parse_hex20(value: &str) -> Result<SignerAddress> {
    parse_hex::<20>(value)
}

pub fn parse_hex32(value: &str) -> Result<MultisigId> {
    parse_hex::<32>(value)
}
