use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::{
    client::LedgerClient,
    errors::{ProposalError, Result},
    layout::{read_buffer_authority, read_upgrade_authority},
    pda::get_program_data_pda,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAuthority {
    pub program_data: Pubkey,
    pub authority: Pubkey,
}

/// Confirms that the upgrade authority of `program` and the authority of
/// `buffer` are the same address before an upgrade is proposed.
///
/// Existence checks run before decoding, and an early failure stops the
/// remaining fetches. Account state is read at call time, so it may change
/// between the individual fetches.
pub fn validate_upgrade_authority(
    client: &dyn LedgerClient,
    program: &Pubkey,
    buffer: &Pubkey,
) -> Result<ValidatedAuthority> {
    let (program_data, _) = get_program_data_pda(program);
    log::info!("program data: {program_data}");

    fetch_account(client, "program", *program)?;
    let program_data_account = fetch_account(client, "program data", program_data)?;

    let upgrade_authority = read_upgrade_authority(&program_data_account.data)?;
    log::info!("upgrade authority: {upgrade_authority}");

    let buffer_account = fetch_account(client, "buffer", *buffer)?;
    let buffer_authority = read_buffer_authority(&buffer_account.data)?;
    log::info!("buffer authority: {buffer_authority}");

    if upgrade_authority != buffer_authority {
        return Err(ProposalError::AuthorityMismatch {
            program_authority: upgrade_authority,
            buffer_authority,
        });
    }

    Ok(ValidatedAuthority {
        program_data,
        authority: upgrade_authority,
    })
}

fn fetch_account(
    client: &dyn LedgerClient,
    account: &'static str,
    pubkey: Pubkey,
) -> Result<Account> {
    client
        .get_account(pubkey)?
        .ok_or(ProposalError::AccountNotFound { account, pubkey })
}
