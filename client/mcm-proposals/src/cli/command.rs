use crate::cli::config::ConfigCliCommand;
use clap::Subcommand;
use mcm_cli::{
    accept_ownership::AcceptOwnershipCliCommand, program_upgrade::ProgramUpgradeCliCommand,
    signers_update::SignersUpdateCliCommand,
};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prepare the instructions replacing the signer set of a multisig
    #[command()]
    SignersUpdate(SignersUpdateCliCommand),
    /// Prepare a BPF upgradeable loader upgrade instruction
    #[command()]
    ProgramUpgrade(ProgramUpgradeCliCommand),
    /// Prepare the instruction accepting ownership of a multisig
    #[command()]
    AcceptOwnership(AcceptOwnershipCliCommand),
    /// Local configuration
    #[command()]
    Config(ConfigCliCommand),
}
