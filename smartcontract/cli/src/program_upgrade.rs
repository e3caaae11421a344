use clap::Args;
use mcm_sdk::{save_instructions, validate_upgrade_authority, LedgerClient, ProgramUpgrade};
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, path::PathBuf, str::FromStr};

use crate::validators::validate_pubkey;

#[derive(Args, Debug)]
pub struct ProgramUpgradeCliCommand {
    /// Program account address
    #[arg(long, short = 'p', value_parser = validate_pubkey)]
    pub program: String,
    /// Buffer account address with the new program data
    #[arg(long, short = 'b', value_parser = validate_pubkey)]
    pub buffer: String,
    /// Spill account address to receive the refunded lamports
    #[arg(long, short = 's', value_parser = validate_pubkey)]
    pub spill: String,
    /// Output JSON file path
    #[arg(long, short = 'o', default_value = "upgrade_instruction.json")]
    pub output: PathBuf,
}

impl ProgramUpgradeCliCommand {
    pub fn execute<W: Write>(self, client: &dyn LedgerClient, out: &mut W) -> eyre::Result<()> {
        let upgrade = ProgramUpgrade {
            program: Pubkey::from_str(&self.program)?,
            buffer: Pubkey::from_str(&self.buffer)?,
            spill: Pubkey::from_str(&self.spill)?,
        };

        let validated = validate_upgrade_authority(client, &upgrade.program, &upgrade.buffer)?;
        writeln!(out, "Program: {}", upgrade.program)?;
        writeln!(out, "ProgramData (derived): {}", validated.program_data)?;
        writeln!(out, "Buffer: {}", upgrade.buffer)?;
        writeln!(out, "Spill: {}", upgrade.spill)?;
        writeln!(out, "Authority: {}", validated.authority)?;

        let instructions = upgrade.instructions_for(&validated);
        save_instructions(&instructions, &self.output)?;
        writeln!(out, "Upgrade instruction written to {}", self.output.display())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::create_test_ledger;
    use mcm_sdk::{instruction::UPGRADE_OPCODE, load_instructions, pda::get_program_data_pda};
    use tempfile::TempDir;

    #[test]
    fn test_cli_program_upgrade() {
        let tmpdir = TempDir::with_prefix("mcm-proposals-tests-").unwrap();
        let output = tmpdir.path().join("upgrade.json");
        let program = Pubkey::new_unique();
        let buffer = Pubkey::new_unique();
        let spill = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let client = create_test_ledger(program, buffer, Some(authority), Some(authority));

        let mut out = Vec::new();
        let res = ProgramUpgradeCliCommand {
            program: program.to_string(),
            buffer: buffer.to_string(),
            spill: spill.to_string(),
            output: output.clone(),
        }
        .execute(&client, &mut out);
        assert!(res.is_ok(), "{res:?}");

        let instructions = load_instructions(&output).unwrap();
        assert_eq!(instructions.len(), 1);
        assert_eq!(instructions[0].data, UPGRADE_OPCODE.to_vec());
        assert_eq!(instructions[0].accounts[3].pubkey, spill);
        assert_eq!(instructions[0].accounts[6].pubkey, authority);

        let output_str = String::from_utf8(out).unwrap();
        assert!(output_str.contains(&format!(
            "ProgramData (derived): {}\n",
            get_program_data_pda(&program).0
        )));
        assert!(output_str.contains(&format!("Authority: {authority}\n")));
    }

    #[test]
    fn test_cli_program_upgrade_authority_mismatch() {
        let tmpdir = TempDir::with_prefix("mcm-proposals-tests-").unwrap();
        let output = tmpdir.path().join("upgrade.json");
        let program = Pubkey::new_unique();
        let buffer = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let client = create_test_ledger(program, buffer, Some(a), Some(b));

        let mut out = Vec::new();
        let err = ProgramUpgradeCliCommand {
            program: program.to_string(),
            buffer: buffer.to_string(),
            spill: Pubkey::new_unique().to_string(),
            output: output.clone(),
        }
        .execute(&client, &mut out)
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("program authority ({a}) does not match buffer authority ({b})")
        );
        assert!(!output.exists());
    }
}
