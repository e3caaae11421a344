pub const SEED_CONFIG: &[u8] = b"multisig_config";
pub const SEED_CONFIG_SIGNERS: &[u8] = b"multisig_config_signers";
pub const SEED_ROOT_METADATA: &[u8] = b"root_metadata";
pub const SEED_EXPIRING_ROOT_AND_OP_COUNT: &[u8] = b"expiring_root_and_op_count";
pub const SEED_MULTISIG_SIGNER: &[u8] = b"multisig_signer";
