use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;
use std::{fmt, io};
use thiserror::Error as ThisError;

/// The constraint a sequence length broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    MatchLengthOf { field: &'static str, len: usize },
    AtMost(usize),
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthBound::MatchLengthOf { field, len } => {
                write!(f, "must match {field} length ({len})")
            }
            LengthBound::AtMost(max) => write!(f, "must be {max} or less"),
        }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(ThisError, Debug)]
pub enum ProposalError {
    #[error("{field} length ({len}) {bound}")]
    ShapeMismatch {
        field: &'static str,
        len: usize,
        bound: LengthBound,
    },
    #[error("{field}[{index}] references group {group}, but only {group_count} groups are configured")]
    UnknownGroup {
        field: &'static str,
        index: usize,
        group: u8,
        group_count: usize,
    },
    #[error("invalid {account} account size: expected at least {expected} bytes, got {actual}")]
    MalformedAccountData {
        account: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{account} account has no {field}")]
    MissingAuthority {
        account: &'static str,
        field: &'static str,
    },
    #[error("{account} account {pubkey} not found")]
    AccountNotFound {
        account: &'static str,
        pubkey: Pubkey,
    },
    #[error("program authority ({program_authority}) does not match buffer authority ({buffer_authority})")]
    AuthorityMismatch {
        program_authority: Pubkey,
        buffer_authority: Pubkey,
    },
    #[error("failed to build {instruction} instruction: {source}")]
    InstructionBuild {
        instruction: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("invalid hex value {value}: {reason}")]
    InvalidHex { value: String, reason: String },
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProposalError>;
