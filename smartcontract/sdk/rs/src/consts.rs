/// The receiving program caps how many signers one append instruction may
/// carry so that the instruction stays under the transaction size limit.
pub const MAX_SIGNERS_PER_APPEND: usize = 10;

/// Group topology is stored in fixed 32-entry arrays on chain.
pub const MAX_GROUPS: usize = 32;

/// The signer count is declared as a single byte at initialization.
pub const MAX_SIGNERS: usize = u8::MAX as usize;

pub const SIGNER_ADDRESS_LEN: usize = 20;
pub const MULTISIG_ID_LEN: usize = 32;

pub type SignerAddress = [u8; SIGNER_ADDRESS_LEN];
pub type MultisigId = [u8; MULTISIG_ID_LEN];
