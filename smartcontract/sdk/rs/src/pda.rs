use solana_program::bpf_loader_upgradeable;
use solana_sdk::pubkey::Pubkey;

use crate::{
    consts::MultisigId,
    seeds::{
        SEED_CONFIG, SEED_CONFIG_SIGNERS, SEED_EXPIRING_ROOT_AND_OP_COUNT, SEED_MULTISIG_SIGNER,
        SEED_ROOT_METADATA,
    },
};

/// The program-data account that holds the upgrade authority of an
/// upgradeable program.
pub fn get_program_data_pda(program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[program.as_ref()], &bpf_loader_upgradeable::id())
}

/// The configuration authority: it signs every configuration-changing
/// instruction executed by the multisig.
pub fn get_multisig_signer_pda(program_id: &Pubkey, multisig_id: &MultisigId) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_MULTISIG_SIGNER, multisig_id.as_ref()], program_id)
}

pub fn get_multisig_config_pda(program_id: &Pubkey, multisig_id: &MultisigId) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_CONFIG, multisig_id.as_ref()], program_id)
}

pub fn get_config_signers_pda(program_id: &Pubkey, multisig_id: &MultisigId) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_CONFIG_SIGNERS, multisig_id.as_ref()], program_id)
}

pub fn get_root_metadata_pda(program_id: &Pubkey, multisig_id: &MultisigId) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_ROOT_METADATA, multisig_id.as_ref()], program_id)
}

pub fn get_expiring_root_and_op_count_pda(
    program_id: &Pubkey,
    multisig_id: &MultisigId,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_EXPIRING_ROOT_AND_OP_COUNT, multisig_id.as_ref()], program_id)
}
