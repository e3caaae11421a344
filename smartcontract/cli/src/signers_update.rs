use clap::Args;
use mcm_sdk::{
    consts::MAX_SIGNERS_PER_APPEND, proposal::signers_update::signer_chunks, save_instructions,
    ProposalsConfig, SignersUpdate,
};
use std::{io::Write, path::PathBuf};

use crate::{
    helpers::{parse_signers, parse_u8_list, resolve_multisig_id, resolve_program_id},
    validators::{validate_hex20_list, validate_hex32, validate_pubkey, validate_u8_list},
};

#[derive(Args, Debug)]
pub struct SignersUpdateCliCommand {
    /// MCM program ID (base58 encoded)
    #[arg(long, short = 'p', value_parser = validate_pubkey)]
    pub mcm_program_id: Option<String>,
    /// Multisig ID (32-byte hex string, with 0x prefix)
    #[arg(long, short = 'm', value_parser = validate_hex32)]
    pub multisig_id: Option<String>,
    /// Comma-separated list of new signer addresses (20-byte hex strings, with 0x prefix)
    #[arg(long, short = 's', value_parser = validate_hex20_list)]
    pub new_signers: String,
    /// Comma-separated list of group indices for each signer (e.g. '0,0,1,1')
    #[arg(long, value_parser = validate_u8_list)]
    pub signer_groups: String,
    /// Comma-separated list of quorum thresholds for each group (e.g. '2,3')
    #[arg(long, value_parser = validate_u8_list)]
    pub group_quorums: String,
    /// Comma-separated list of parent group indices (e.g. '0,0')
    #[arg(long, value_parser = validate_u8_list)]
    pub group_parents: String,
    /// Clear the existing root when setting the config
    #[arg(long, short = 'c', default_value_t = false)]
    pub clear_root: bool,
    /// Output JSON file path
    #[arg(long, short = 'o', default_value = "signers_update_instructions.json")]
    pub output: PathBuf,
}

impl SignersUpdateCliCommand {
    pub fn execute<W: Write>(self, config: &ProposalsConfig, out: &mut W) -> eyre::Result<()> {
        let update = SignersUpdate {
            program_id: resolve_program_id(self.mcm_program_id.as_deref(), config)?,
            multisig_id: resolve_multisig_id(self.multisig_id.as_deref(), config)?,
            new_signers: parse_signers(&self.new_signers)?,
            signer_groups: parse_u8_list(&self.signer_groups)?,
            group_quorums: parse_u8_list(&self.group_quorums)?,
            group_parents: parse_u8_list(&self.group_parents)?,
            clear_root: self.clear_root,
        };

        writeln!(out, "mcm-program-id: {}", update.program_id)?;
        writeln!(out, "multisig-id: 0x{}", hex::encode(update.multisig_id))?;
        writeln!(out, "new-signers: {} signers", update.new_signers.len())?;
        for (i, signer) in update.new_signers.iter().enumerate() {
            writeln!(out, "  [{i}] 0x{}", hex::encode(signer))?;
        }

        let instructions = update.build_instructions()?;
        writeln!(out, "mcm authority: {}", instructions.authority)?;
        writeln!(out, "1. InitSigners: {} total signers", update.new_signers.len())?;
        writeln!(out, "2. AppendSigners: {} chunk(s)", instructions.append.len())?;
        for (i, chunk) in signer_chunks(&update.new_signers).enumerate() {
            let start = i * MAX_SIGNERS_PER_APPEND;
            writeln!(
                out,
                "   chunk {}: {} signers [{}:{}]",
                i + 1,
                chunk.len(),
                start,
                start + chunk.len()
            )?;
        }
        writeln!(out, "3. FinalizeSigners")?;
        writeln!(
            out,
            "4. SetConfig: groups {}, quorums {:?}, parents {:?}, clear root {}",
            update.group_quorums.len(),
            update.group_quorums,
            update.group_parents,
            update.clear_root
        )?;

        let instructions = instructions.into_vec();
        save_instructions(&instructions, &self.output)?;
        writeln!(
            out,
            "Signers update instructions written to {}",
            self.output.display()
        )?;

        Ok(())
    }
}
