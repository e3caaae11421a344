//! Builders for the MCM program's signer and ownership instructions.
//!
//! Instruction data is an 8-byte discriminator, `sha256("global:<name>")[..8]`,
//! followed by the Borsh encoded arguments.

use borsh::BorshSerialize;
use solana_sdk::{
    hash::hashv,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::{
    consts::{MultisigId, SignerAddress, MAX_GROUPS},
    errors::{ProposalError, Result},
    instruction::assemble,
    pda::{
        get_config_signers_pda, get_expiring_root_and_op_count_pda, get_multisig_config_pda,
        get_root_metadata_pda,
    },
};

pub const IX_INIT_SIGNERS: &str = "init_signers";
pub const IX_APPEND_SIGNERS: &str = "append_signers";
pub const IX_FINALIZE_SIGNERS: &str = "finalize_signers";
pub const IX_SET_CONFIG: &str = "set_config";
pub const IX_ACCEPT_OWNERSHIP: &str = "accept_ownership";

pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    let hash = hashv(&[b"global:", name.as_bytes()]);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

fn encode<T: BorshSerialize>(name: &'static str, args: &T) -> Result<Vec<u8>> {
    let mut data = instruction_discriminator(name).to_vec();
    args.serialize(&mut data)
        .map_err(|source| ProposalError::InstructionBuild {
            instruction: name,
            source,
        })?;
    Ok(data)
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct InitSignersArgs {
    pub multisig_id: MultisigId,
    pub total_signers: u8,
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct AppendSignersArgs {
    pub multisig_id: MultisigId,
    pub signers_batch: Vec<SignerAddress>,
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct FinalizeSignersArgs {
    pub multisig_id: MultisigId,
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct SetConfigArgs {
    pub multisig_id: MultisigId,
    pub signer_groups: Vec<u8>,
    pub group_quorums: [u8; MAX_GROUPS],
    pub group_parents: [u8; MAX_GROUPS],
    pub clear_root: bool,
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct AcceptOwnershipArgs {
    pub multisig_id: MultisigId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitSignersParams {
    pub program_id: Pubkey,
    pub multisig_id: MultisigId,
    pub total_signers: u8,
    pub authority: Pubkey,
}

pub fn init_signers(params: &InitSignersParams) -> Result<Instruction> {
    let (config, _) = get_multisig_config_pda(&params.program_id, &params.multisig_id);
    let (config_signers, _) = get_config_signers_pda(&params.program_id, &params.multisig_id);

    let data = encode(
        IX_INIT_SIGNERS,
        &InitSignersArgs {
            multisig_id: params.multisig_id,
            total_signers: params.total_signers,
        },
    )?;

    Ok(assemble(
        params.program_id,
        vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(config_signers, false),
            AccountMeta::new(params.authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendSignersParams<'a> {
    pub program_id: Pubkey,
    pub multisig_id: MultisigId,
    pub signers_batch: &'a [SignerAddress],
    pub authority: Pubkey,
}

pub fn append_signers(params: &AppendSignersParams) -> Result<Instruction> {
    let (config, _) = get_multisig_config_pda(&params.program_id, &params.multisig_id);
    let (config_signers, _) = get_config_signers_pda(&params.program_id, &params.multisig_id);

    let data = encode(
        IX_APPEND_SIGNERS,
        &AppendSignersArgs {
            multisig_id: params.multisig_id,
            signers_batch: params.signers_batch.to_vec(),
        },
    )?;

    Ok(assemble(
        params.program_id,
        vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(config_signers, false),
            AccountMeta::new(params.authority, true),
        ],
        data,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeSignersParams {
    pub program_id: Pubkey,
    pub multisig_id: MultisigId,
    pub authority: Pubkey,
}

pub fn finalize_signers(params: &FinalizeSignersParams) -> Result<Instruction> {
    let (config, _) = get_multisig_config_pda(&params.program_id, &params.multisig_id);
    let (config_signers, _) = get_config_signers_pda(&params.program_id, &params.multisig_id);

    let data = encode(
        IX_FINALIZE_SIGNERS,
        &FinalizeSignersArgs {
            multisig_id: params.multisig_id,
        },
    )?;

    Ok(assemble(
        params.program_id,
        vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(config_signers, false),
            AccountMeta::new(params.authority, true),
        ],
        data,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetConfigParams {
    pub program_id: Pubkey,
    pub multisig_id: MultisigId,
    pub signer_groups: Vec<u8>,
    pub group_quorums: [u8; MAX_GROUPS],
    pub group_parents: [u8; MAX_GROUPS],
    pub clear_root: bool,
    pub authority: Pubkey,
}

pub fn set_config(params: &SetConfigParams) -> Result<Instruction> {
    let program_id = &params.program_id;
    let multisig_id = &params.multisig_id;
    let (config, _) = get_multisig_config_pda(program_id, multisig_id);
    let (config_signers, _) = get_config_signers_pda(program_id, multisig_id);
    let (root_metadata, _) = get_root_metadata_pda(program_id, multisig_id);
    let (expiring_root_and_op_count, _) =
        get_expiring_root_and_op_count_pda(program_id, multisig_id);

    let data = encode(
        IX_SET_CONFIG,
        &SetConfigArgs {
            multisig_id: params.multisig_id,
            signer_groups: params.signer_groups.clone(),
            group_quorums: params.group_quorums,
            group_parents: params.group_parents,
            clear_root: params.clear_root,
        },
    )?;

    Ok(assemble(
        params.program_id,
        vec![
            AccountMeta::new(config, false),
            AccountMeta::new(config_signers, false),
            AccountMeta::new(root_metadata, false),
            AccountMeta::new(expiring_root_and_op_count, false),
            AccountMeta::new(params.authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptOwnershipParams {
    pub program_id: Pubkey,
    pub multisig_id: MultisigId,
    pub authority: Pubkey,
}

pub fn accept_ownership(params: &AcceptOwnershipParams) -> Result<Instruction> {
    let (config, _) = get_multisig_config_pda(&params.program_id, &params.multisig_id);

    let data = encode(
        IX_ACCEPT_OWNERSHIP,
        &AcceptOwnershipArgs {
            multisig_id: params.multisig_id,
        },
    )?;

    Ok(assemble(
        params.program_id,
        vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(params.authority, true),
        ],
        data,
    ))
}
