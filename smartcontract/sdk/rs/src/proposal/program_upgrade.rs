use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::{
    client::LedgerClient,
    errors::Result,
    instruction::{build_upgrade_instruction, UpgradeAccounts},
    preflight::{validate_upgrade_authority, ValidatedAuthority},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramUpgrade {
    pub program: Pubkey,
    pub buffer: Pubkey,
    /// Receives the lamports of the buffer once it is consumed.
    pub spill: Pubkey,
}

impl ProgramUpgrade {
    /// Checks the on-chain authorities and builds the upgrade instruction
    /// signed by the shared authority.
    pub fn build_instructions(&self, client: &dyn LedgerClient) -> Result<Vec<Instruction>> {
        let validated = validate_upgrade_authority(client, &self.program, &self.buffer)?;
        Ok(self.instructions_for(&validated))
    }

    pub fn instructions_for(&self, validated: &ValidatedAuthority) -> Vec<Instruction> {
        vec![build_upgrade_instruction(&UpgradeAccounts {
            program_data: validated.program_data,
            program: self.program,
            buffer: self.buffer,
            spill: self.spill,
            authority: validated.authority,
        })]
    }
}

pub fn build_upgrade_instructions(
    client: &dyn LedgerClient,
    program: Pubkey,
    buffer: Pubkey,
    spill: Pubkey,
) -> Result<Vec<Instruction>> {
    ProgramUpgrade {
        program,
        buffer,
        spill,
    }
    .build_instructions(client)
}
