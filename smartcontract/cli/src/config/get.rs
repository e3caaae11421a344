use clap::Args;
use mcm_sdk::read_proposals_config;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GetConfigCliCommand {}

impl GetConfigCliCommand {
    pub fn execute<W: Write>(self, out: &mut W) -> eyre::Result<()> {
        let (filename, config) = read_proposals_config()?;

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
