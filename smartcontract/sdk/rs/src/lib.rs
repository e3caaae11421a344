pub mod client;
pub mod config;
pub mod consts;
pub mod errors;
pub mod hexutil;
pub mod instruction;
pub mod layout;
pub mod mcm;
pub mod pda;
pub mod preflight;
pub mod proposal;
mod seeds;

pub use crate::client::{LedgerClient, MockLedgerClient, RpcLedgerClient};
pub use crate::config::{read_proposals_config, write_proposals_config, ProposalsConfig};
pub use crate::consts::{MultisigId, SignerAddress};
pub use crate::errors::*;
pub use crate::hexutil::{parse_hex20, parse_hex32};
pub use crate::preflight::{validate_upgrade_authority, ValidatedAuthority};
pub use crate::proposal::{
    accept_ownership::build_accept_ownership_instructions,
    io::{load_instructions, save_instructions},
    program_upgrade::{build_upgrade_instructions, ProgramUpgrade},
    signers_update::{SignersUpdate, SignersUpdateInstructions},
};
