use clap::{ArgGroup, Args};
use mcm_proposals_config::Environment;
use mcm_sdk::{read_proposals_config, write_proposals_config};
use std::io::Write;

use crate::validators::{validate_hex32, validate_pubkey};

#[derive(Args, Debug)]
#[clap(group(
    ArgGroup::new("mandatory")
        .args(&["url", "mcm_program_id", "multisig_id"])
        .required(true)
        .multiple(true)
))]
pub struct SetConfigCliCommand {
    /// URL of the JSON RPC endpoint (mainnet-beta, testnet, devnet, localhost)
    #[arg(long)]
    pub url: Option<String>,
    /// Default MCM program ID
    #[arg(long, value_parser = validate_pubkey)]
    pub mcm_program_id: Option<String>,
    /// Default multisig ID (32-byte hex string, with 0x prefix)
    #[arg(long, value_parser = validate_hex32)]
    pub multisig_id: Option<String>,
}

impl SetConfigCliCommand {
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        if self.url.is_none() && self.mcm_program_id.is_none() && self.multisig_id.is_none() {
            writeln!(out, "No arguments provided")?;
            return Ok(());
        }

        let (filename, mut config) = read_proposals_config()?;
        if let Some(url) = self.url {
            config.json_rpc_url = Environment::resolve_url_moniker(&url);
        }
        if let Some(program_id) = self.mcm_program_id {
            config.mcm_program_id = Some(program_id);
        }
        if let Some(multisig_id) = self.multisig_id {
            config.multisig_id = Some(multisig_id);
        }

        write_proposals_config(&config)?;
        log::debug!("updated {}", filename.display());

        writeln!(
            out,
            "Config File: {}\nRPC URL: {}\nMCM Program ID: {}\nMultisig ID: {}",
            filename.display(),
            config.json_rpc_url,
            config.mcm_program_id.as_deref().unwrap_or("(not set)"),
            config.multisig_id.as_deref().unwrap_or("(not set)"),
        )?;

        Ok(())
    }
}
