use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use std::slice::Chunks;

use crate::{
    consts::{MultisigId, SignerAddress, MAX_GROUPS, MAX_SIGNERS, MAX_SIGNERS_PER_APPEND},
    errors::{LengthBound, ProposalError, Result},
    mcm::{
        append_signers, finalize_signers, init_signers, set_config, AppendSignersParams,
        FinalizeSignersParams, InitSignersParams, SetConfigParams,
    },
    pda::get_multisig_signer_pda,
};

/// Desired end state of a multisig's membership and group topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignersUpdate {
    pub program_id: Pubkey,
    pub multisig_id: MultisigId,
    pub new_signers: Vec<SignerAddress>,
    pub signer_groups: Vec<u8>,
    pub group_quorums: Vec<u8>,
    pub group_parents: Vec<u8>,
    pub clear_root: bool,
}

/// The instructions of a signers update, in the order the MCM program
/// accepts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignersUpdateInstructions {
    pub authority: Pubkey,
    pub init: Instruction,
    pub append: Vec<Instruction>,
    pub finalize: Instruction,
    pub set_config: Instruction,
}

impl SignersUpdateInstructions {
    pub fn into_vec(self) -> Vec<Instruction> {
        let mut instructions = Vec::with_capacity(self.append.len() + 3);
        instructions.push(self.init);
        instructions.extend(self.append);
        instructions.push(self.finalize);
        instructions.push(self.set_config);
        instructions
    }
}

/// Contiguous windows of at most [`MAX_SIGNERS_PER_APPEND`] signers, in
/// their original order.
pub fn signer_chunks(signers: &[SignerAddress]) -> Chunks<'_, SignerAddress> {
    signers.chunks(MAX_SIGNERS_PER_APPEND)
}

fn pad_groups(values: &[u8]) -> [u8; MAX_GROUPS] {
    let mut padded = [0u8; MAX_GROUPS];
    padded[..values.len()].copy_from_slice(values);
    padded
}

fn check_groups(field: &'static str, groups: &[u8], group_count: usize) -> Result<()> {
    match groups
        .iter()
        .enumerate()
        .find(|(_, group)| usize::from(**group) >= group_count)
    {
        Some((index, group)) => Err(ProposalError::UnknownGroup {
            field,
            index,
            group: *group,
            group_count,
        }),
        None => Ok(()),
    }
}

impl SignersUpdate {
    /// Checks the length relations between the input sequences and that
    /// every group reference exists.
    pub fn validate(&self) -> Result<()> {
        if self.signer_groups.len() != self.new_signers.len() {
            return Err(ProposalError::ShapeMismatch {
                field: "signer_groups",
                len: self.signer_groups.len(),
                bound: LengthBound::MatchLengthOf {
                    field: "new_signers",
                    len: self.new_signers.len(),
                },
            });
        }
        if self.group_quorums.len() > MAX_GROUPS {
            return Err(ProposalError::ShapeMismatch {
                field: "group_quorums",
                len: self.group_quorums.len(),
                bound: LengthBound::AtMost(MAX_GROUPS),
            });
        }
        if self.group_parents.len() != self.group_quorums.len() {
            return Err(ProposalError::ShapeMismatch {
                field: "group_parents",
                len: self.group_parents.len(),
                bound: LengthBound::MatchLengthOf {
                    field: "group_quorums",
                    len: self.group_quorums.len(),
                },
            });
        }
        if self.new_signers.len() > MAX_SIGNERS {
            return Err(ProposalError::ShapeMismatch {
                field: "new_signers",
                len: self.new_signers.len(),
                bound: LengthBound::AtMost(MAX_SIGNERS),
            });
        }

        let group_count = self.group_quorums.len();
        check_groups("signer_groups", &self.signer_groups, group_count)?;
        check_groups("group_parents", &self.group_parents, group_count)
    }

    /// Expands the update into init, chunked append, finalize and
    /// set-config instructions. Nothing is returned unless every
    /// instruction builds.
    pub fn build_instructions(&self) -> Result<SignersUpdateInstructions> {
        self.validate()?;

        let (authority, _) = get_multisig_signer_pda(&self.program_id, &self.multisig_id);
        log::info!("mcm authority: {authority}");

        let init = init_signers(&InitSignersParams {
            program_id: self.program_id,
            multisig_id: self.multisig_id,
            // Bounded by MAX_SIGNERS in validate.
            total_signers: self.new_signers.len() as u8,
            authority,
        })?;
        log::info!("init signers: {} total", self.new_signers.len());

        let append = signer_chunks(&self.new_signers)
            .enumerate()
            .map(|(i, chunk)| {
                let start = i * MAX_SIGNERS_PER_APPEND;
                log::info!(
                    "append signers chunk {}: {} signers [{}:{}]",
                    i + 1,
                    chunk.len(),
                    start,
                    start + chunk.len()
                );
                append_signers(&AppendSignersParams {
                    program_id: self.program_id,
                    multisig_id: self.multisig_id,
                    signers_batch: chunk,
                    authority,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let finalize = finalize_signers(&FinalizeSignersParams {
            program_id: self.program_id,
            multisig_id: self.multisig_id,
            authority,
        })?;

        let set_config = set_config(&SetConfigParams {
            program_id: self.program_id,
            multisig_id: self.multisig_id,
            signer_groups: self.signer_groups.clone(),
            group_quorums: pad_groups(&self.group_quorums),
            group_parents: pad_groups(&self.group_parents),
            clear_root: self.clear_root,
            authority,
        })?;
        log::info!(
            "set config: {} groups, quorums {:?}, parents {:?}, clear root {}",
            self.group_quorums.len(),
            self.group_quorums,
            self.group_parents,
            self.clear_root
        );

        Ok(SignersUpdateInstructions {
            authority,
            init,
            append,
            finalize,
            set_config,
        })
    }
}
