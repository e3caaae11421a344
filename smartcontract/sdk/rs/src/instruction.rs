use solana_program::{
    bpf_loader_upgradeable,
    sysvar::{clock, rent},
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

/// One position in a fixed account list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSlot<R> {
    pub role: R,
    pub is_writable: bool,
    pub is_signer: bool,
}

/// An instruction whose account order, flags and payload are fixed by the
/// target program. Only the addresses behind each role vary per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionTemplate<R: 'static> {
    pub name: &'static str,
    pub program_id: Pubkey,
    pub accounts: &'static [AccountSlot<R>],
    pub data: &'static [u8],
}

impl<R: Copy> InstructionTemplate<R> {
    pub fn build(&self, resolve: impl Fn(R) -> Pubkey) -> Instruction {
        log::debug!("building {} instruction for {}", self.name, self.program_id);
        let accounts = self
            .accounts
            .iter()
            .map(|slot| AccountMeta {
                pubkey: resolve(slot.role),
                is_signer: slot.is_signer,
                is_writable: slot.is_writable,
            })
            .collect();

        assemble(self.program_id, accounts, self.data.to_vec())
    }
}

pub fn assemble(program_id: Pubkey, accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id,
        accounts,
        data,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeRole {
    ProgramData,
    Program,
    Buffer,
    Spill,
    Rent,
    Clock,
    Authority,
}

const fn slot(role: UpgradeRole, is_writable: bool, is_signer: bool) -> AccountSlot<UpgradeRole> {
    AccountSlot {
        role,
        is_writable,
        is_signer,
    }
}

/// `UpgradeableLoaderInstruction::Upgrade`, bincode encoded.
pub const UPGRADE_OPCODE: [u8; 4] = [3, 0, 0, 0];

pub const UPGRADE_TEMPLATE: InstructionTemplate<UpgradeRole> = InstructionTemplate {
    name: "upgrade",
    program_id: bpf_loader_upgradeable::ID,
    accounts: &[
        slot(UpgradeRole::ProgramData, true, false),
        slot(UpgradeRole::Program, true, false),
        slot(UpgradeRole::Buffer, true, false),
        slot(UpgradeRole::Spill, true, false),
        slot(UpgradeRole::Rent, false, false),
        slot(UpgradeRole::Clock, false, false),
        slot(UpgradeRole::Authority, false, true),
    ],
    data: &UPGRADE_OPCODE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeAccounts {
    pub program_data: Pubkey,
    pub program: Pubkey,
    pub buffer: Pubkey,
    pub spill: Pubkey,
    pub authority: Pubkey,
}

impl UpgradeAccounts {
    fn resolve(&self, role: UpgradeRole) -> Pubkey {
        match role {
            UpgradeRole::ProgramData => self.program_data,
            UpgradeRole::Program => self.program,
            UpgradeRole::Buffer => self.buffer,
            UpgradeRole::Spill => self.spill,
            UpgradeRole::Rent => rent::id(),
            UpgradeRole::Clock => clock::id(),
            UpgradeRole::Authority => self.authority,
        }
    }
}

pub fn build_upgrade_instruction(accounts: &UpgradeAccounts) -> Instruction {
    UPGRADE_TEMPLATE.build(|role| accounts.resolve(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::get_program_data_pda;

    fn upgrade_accounts() -> UpgradeAccounts {
        let program = Pubkey::new_unique();
        UpgradeAccounts {
            program_data: get_program_data_pda(&program).0,
            program,
            buffer: Pubkey::new_unique(),
            spill: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_upgrade_template_shape() {
        let flags: Vec<(bool, bool)> = UPGRADE_TEMPLATE
            .accounts
            .iter()
            .map(|slot| (slot.is_writable, slot.is_signer))
            .collect();
        assert_eq!(
            flags,
            vec![
                (true, false),
                (true, false),
                (true, false),
                (true, false),
                (false, false),
                (false, false),
                (false, true),
            ]
        );
        assert_eq!(UPGRADE_TEMPLATE.data, &[3, 0, 0, 0]);
        assert_eq!(UPGRADE_TEMPLATE.program_id, bpf_loader_upgradeable::id());
    }

    #[test]
    fn test_upgrade_instruction_accounts() {
        let accounts = upgrade_accounts();
        let ix = build_upgrade_instruction(&accounts);

        assert_eq!(ix.program_id, bpf_loader_upgradeable::id());
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(accounts.program_data, false),
                AccountMeta::new(accounts.program, false),
                AccountMeta::new(accounts.buffer, false),
                AccountMeta::new(accounts.spill, false),
                AccountMeta::new_readonly(rent::id(), false),
                AccountMeta::new_readonly(clock::id(), false),
                AccountMeta::new_readonly(accounts.authority, true),
            ]
        );
        assert_eq!(ix.data, UPGRADE_OPCODE.to_vec());
    }

    #[test]
    fn test_upgrade_instruction_matches_loader_interface() {
        let accounts = upgrade_accounts();
        let expected = solana_loader_v3_interface::instruction::upgrade(
            &accounts.program,
            &accounts.buffer,
            &accounts.authority,
            &accounts.spill,
        );
        assert_eq!(build_upgrade_instruction(&accounts), expected);
    }

    #[test]
    fn test_assemble_keeps_account_order() {
        let program_id = Pubkey::new_unique();
        let metas = vec![
            AccountMeta::new_readonly(Pubkey::new_unique(), true),
            AccountMeta::new(Pubkey::new_unique(), false),
        ];
        let ix = assemble(program_id, metas.clone(), vec![9, 9]);
        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.accounts, metas);
        assert_eq!(ix.data, vec![9, 9]);
    }
}
