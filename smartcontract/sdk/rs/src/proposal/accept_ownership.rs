use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::{
    consts::MultisigId,
    errors::Result,
    mcm::{accept_ownership, AcceptOwnershipParams},
    pda::get_multisig_signer_pda,
};

/// Has the multisig's own signer accept a pending ownership transfer of its
/// configuration.
pub fn build_accept_ownership_instructions(
    program_id: &Pubkey,
    multisig_id: &MultisigId,
) -> Result<Vec<Instruction>> {
    let (authority, _) = get_multisig_signer_pda(program_id, multisig_id);
    log::info!("mcm authority: {authority}");

    let ix = accept_ownership(&AcceptOwnershipParams {
        program_id: *program_id,
        multisig_id: *multisig_id,
        authority,
    })?;
    Ok(vec![ix])
}
