//! Fixed-offset decoding of upgradeable-loader account records.
//!
//! Each record shape is a table of typed fields at fixed byte offsets. One
//! routine, [`AccountLayout::decode`], walks the table so that the offsets
//! live in a single place.

use solana_sdk::pubkey::Pubkey;

use crate::errors::{ProposalError, Result};

pub const FIELD_DISCRIMINATOR: &str = "discriminator";
pub const FIELD_SLOT: &str = "slot";
pub const FIELD_UPGRADE_AUTHORITY: &str = "upgrade authority";
pub const FIELD_AUTHORITY: &str = "authority";

/// Loader state tags, as serialized in the first four bytes.
pub const BUFFER_DISCRIMINATOR: u32 = 1;
pub const PROGRAM_DATA_DISCRIMINATOR: u32 = 3;

/// Presence flag value marking a populated optional field.
const OPTION_SOME: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U32,
    U64,
    /// One presence byte followed by a 32-byte address.
    OptionPubkey,
}

impl FieldKind {
    pub const fn size(self) -> usize {
        match self {
            FieldKind::U32 => 4,
            FieldKind::U64 => 8,
            FieldKind::OptionPubkey => 1 + 32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLayout {
    pub account: &'static str,
    pub discriminator: u32,
    pub fields: &'static [FieldSpec],
}

/// `[discriminator(4), slot(8), option(1), upgrade_authority(32), ...]`
pub const PROGRAM_DATA_LAYOUT: AccountLayout = AccountLayout {
    account: "program data",
    discriminator: PROGRAM_DATA_DISCRIMINATOR,
    fields: &[
        FieldSpec {
            name: FIELD_DISCRIMINATOR,
            offset: 0,
            kind: FieldKind::U32,
        },
        FieldSpec {
            name: FIELD_SLOT,
            offset: 4,
            kind: FieldKind::U64,
        },
        FieldSpec {
            name: FIELD_UPGRADE_AUTHORITY,
            offset: 12,
            kind: FieldKind::OptionPubkey,
        },
    ],
};

/// `[discriminator(4), option(1), authority(32), ...]`
pub const BUFFER_LAYOUT: AccountLayout = AccountLayout {
    account: "buffer",
    discriminator: BUFFER_DISCRIMINATOR,
    fields: &[
        FieldSpec {
            name: FIELD_DISCRIMINATOR,
            offset: 0,
            kind: FieldKind::U32,
        },
        FieldSpec {
            name: FIELD_AUTHORITY,
            offset: 4,
            kind: FieldKind::OptionPubkey,
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    U32(u32),
    U64(u64),
    OptionPubkey(Option<Pubkey>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAccount {
    pub account: &'static str,
    values: Vec<(&'static str, FieldValue)>,
}

impl DecodedAccount {
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    pub fn discriminator(&self) -> Option<u32> {
        match self.get(FIELD_DISCRIMINATOR) {
            Some(FieldValue::U32(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the address behind an optional field, failing when the
    /// presence flag is unset.
    pub fn required_pubkey(&self, name: &'static str) -> Result<Pubkey> {
        match self.get(name) {
            Some(FieldValue::OptionPubkey(Some(pubkey))) => Ok(pubkey),
            _ => Err(ProposalError::MissingAuthority {
                account: self.account,
                field: name,
            }),
        }
    }
}

impl AccountLayout {
    /// Smallest blob that holds every field of the layout.
    pub const fn min_len(&self) -> usize {
        let mut min_len = 0;
        let mut i = 0;
        while i < self.fields.len() {
            let end = self.fields[i].offset + self.fields[i].kind.size();
            if end > min_len {
                min_len = end;
            }
            i += 1;
        }
        min_len
    }

    pub fn decode(&self, data: &[u8]) -> Result<DecodedAccount> {
        let expected = self.min_len();
        if data.len() < expected {
            return Err(ProposalError::MalformedAccountData {
                account: self.account,
                expected,
                actual: data.len(),
            });
        }

        let values = self
            .fields
            .iter()
            .map(|field| (field.name, read_field(data, field)))
            .collect();

        let decoded = DecodedAccount {
            account: self.account,
            values,
        };

        if let Some(discriminator) = decoded.discriminator() {
            if discriminator != self.discriminator {
                log::warn!(
                    "{} account has discriminator {discriminator}, expected {}",
                    self.account,
                    self.discriminator
                );
            }
        }

        Ok(decoded)
    }
}

// Callers guarantee `data` spans `field`.
fn read_field(data: &[u8], field: &FieldSpec) -> FieldValue {
    let bytes = &data[field.offset..field.offset + field.kind.size()];
    match field.kind {
        FieldKind::U32 => {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(bytes);
            FieldValue::U32(u32::from_le_bytes(buf))
        }
        FieldKind::U64 => {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bytes);
            FieldValue::U64(u64::from_le_bytes(buf))
        }
        FieldKind::OptionPubkey => {
            if bytes[0] != OPTION_SOME {
                return FieldValue::OptionPubkey(None);
            }
            let mut buf = [0u8; 32];
            buf.copy_from_slice(&bytes[1..]);
            FieldValue::OptionPubkey(Some(Pubkey::new_from_array(buf)))
        }
    }
}

pub fn read_upgrade_authority(data: &[u8]) -> Result<Pubkey> {
    PROGRAM_DATA_LAYOUT
        .decode(data)?
        .required_pubkey(FIELD_UPGRADE_AUTHORITY)
}

pub fn read_buffer_authority(data: &[u8]) -> Result<Pubkey> {
    BUFFER_LAYOUT.decode(data)?.required_pubkey(FIELD_AUTHORITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_data_blob(flag: u8, authority: &Pubkey, trailing: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&PROGRAM_DATA_DISCRIMINATOR.to_le_bytes());
        data.extend_from_slice(&42u64.to_le_bytes());
        data.push(flag);
        data.extend_from_slice(authority.as_ref());
        data.resize(data.len() + trailing, 0xee);
        data
    }

    #[test]
    fn test_layout_min_len() {
        assert_eq!(PROGRAM_DATA_LAYOUT.min_len(), 45);
        assert_eq!(BUFFER_LAYOUT.min_len(), 37);
    }

    #[test]
    fn test_program_data_too_short() {
        let data = vec![0u8; 44];
        let err = read_upgrade_authority(&data).unwrap_err();
        assert!(matches!(
            err,
            ProposalError::MalformedAccountData {
                expected: 45,
                actual: 44,
                ..
            }
        ));
    }

    #[test]
    fn test_program_data_without_authority() {
        let data = vec![0u8; 45];
        let err = read_upgrade_authority(&data).unwrap_err();
        assert!(matches!(
            err,
            ProposalError::MissingAuthority {
                account: "program data",
                field: FIELD_UPGRADE_AUTHORITY,
            }
        ));
    }

    #[test]
    fn test_program_data_presence_flag_other_than_one() {
        let authority = Pubkey::new_unique();
        let data = program_data_blob(2, &authority, 0);
        assert!(matches!(
            read_upgrade_authority(&data),
            Err(ProposalError::MissingAuthority { .. })
        ));
    }

    #[test]
    fn test_program_data_authority_at_offset_13() {
        let pattern: [u8; 32] = core::array::from_fn(|i| i as u8 + 1);
        let mut data = vec![0u8; 45];
        data[12] = 1;
        data[13..45].copy_from_slice(&pattern);
        assert_eq!(
            read_upgrade_authority(&data).unwrap(),
            Pubkey::new_from_array(pattern)
        );
    }

    #[test]
    fn test_program_data_decodes_every_field() {
        let authority = Pubkey::new_unique();
        let decoded = PROGRAM_DATA_LAYOUT
            .decode(&program_data_blob(1, &authority, 128))
            .unwrap();
        assert_eq!(decoded.discriminator(), Some(PROGRAM_DATA_DISCRIMINATOR));
        assert_eq!(decoded.get(FIELD_SLOT), Some(FieldValue::U64(42)));
        assert_eq!(
            decoded.get(FIELD_UPGRADE_AUTHORITY),
            Some(FieldValue::OptionPubkey(Some(authority)))
        );
    }

    #[test]
    fn test_buffer_authority() {
        let authority = Pubkey::new_unique();
        let mut data = vec![0u8; 37];
        data[..4].copy_from_slice(&BUFFER_DISCRIMINATOR.to_le_bytes());
        data[4] = 1;
        data[5..37].copy_from_slice(authority.as_ref());
        assert_eq!(read_buffer_authority(&data).unwrap(), authority);
    }

    #[test]
    fn test_buffer_too_short_and_missing_authority() {
        assert!(matches!(
            read_buffer_authority(&[0u8; 36]),
            Err(ProposalError::MalformedAccountData {
                account: "buffer",
                expected: 37,
                actual: 36,
            })
        ));
        assert!(matches!(
            read_buffer_authority(&[0u8; 37]),
            Err(ProposalError::MissingAuthority {
                account: "buffer",
                ..
            })
        ));
    }
}
