use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use std::{fs, path::Path, str::FromStr};

use crate::errors::{ProposalError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetaRecord {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// JSON form of an instruction: base58 addresses, base64 data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionRecord {
    pub program_id: String,
    pub accounts: Vec<AccountMetaRecord>,
    pub data: String,
}

impl From<&Instruction> for InstructionRecord {
    fn from(ix: &Instruction) -> Self {
        InstructionRecord {
            program_id: ix.program_id.to_string(),
            accounts: ix
                .accounts
                .iter()
                .map(|meta| AccountMetaRecord {
                    pubkey: meta.pubkey.to_string(),
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            data: BASE64.encode(&ix.data),
        }
    }
}

fn parse_pubkey(value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|e| {
        ProposalError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid pubkey {value}: {e}"),
        ))
    })
}

impl InstructionRecord {
    pub fn to_instruction(&self) -> Result<Instruction> {
        let accounts = self
            .accounts
            .iter()
            .map(|meta| {
                Ok(AccountMeta {
                    pubkey: parse_pubkey(&meta.pubkey)?,
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let data = BASE64.decode(&self.data).map_err(|e| {
            ProposalError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(Instruction {
            program_id: parse_pubkey(&self.program_id)?,
            accounts,
            data,
        })
    }
}

pub fn save_instructions<P: AsRef<Path>>(instructions: &[Instruction], path: P) -> Result<()> {
    let records: Vec<InstructionRecord> = instructions.iter().map(Into::into).collect();
    let json = serde_json::to_string_pretty(&records)?;

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path.as_ref(), json)?;

    log::info!(
        "wrote {} instructions to {}",
        instructions.len(),
        path.as_ref().display()
    );
    Ok(())
}

pub fn load_instructions<P: AsRef<Path>>(path: P) -> Result<Vec<Instruction>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<InstructionRecord> = serde_json::from_str(&content)?;
    records.iter().map(InstructionRecord::to_instruction).collect()
}
