use clap::Args;
use mcm_sdk::{build_accept_ownership_instructions, save_instructions, ProposalsConfig};
use std::{io::Write, path::PathBuf};

use crate::{
    helpers::{resolve_multisig_id, resolve_program_id},
    validators::{validate_hex32, validate_pubkey},
};

#[derive(Args, Debug)]
pub struct AcceptOwnershipCliCommand {
    /// MCM program ID (base58 encoded)
    #[arg(long, value_parser = validate_pubkey)]
    pub mcm_program_id: Option<String>,
    /// Multisig ID (32-byte hex string, with 0x prefix)
    #[arg(long, value_parser = validate_hex32)]
    pub multisig_id: Option<String>,
    /// Instructions output JSON file path
    #[arg(long, default_value = "ixs.json")]
    pub ixs_output: PathBuf,
}

impl AcceptOwnershipCliCommand {
    pub fn execute<W: Write>(self, config: &ProposalsConfig, out: &mut W) -> eyre::Result<()> {
        let program_id = resolve_program_id(self.mcm_program_id.as_deref(), config)?;
        let multisig_id = resolve_multisig_id(self.multisig_id.as_deref(), config)?;

        let instructions = build_accept_ownership_instructions(&program_id, &multisig_id)?;
        save_instructions(&instructions, &self.ixs_output)?;
        writeln!(
            out,
            "Accept ownership instructions written to {}",
            self.ixs_output.display()
        )?;

        Ok(())
    }
}
