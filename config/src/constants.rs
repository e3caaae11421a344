pub const ENV_MAINNET_BETA_NAME: &str = "mainnet-beta";
pub const ENV_MAINNET_BETA_SHORT_NAME: &str = "m";
pub const ENV_TESTNET_NAME: &str = "testnet";
pub const ENV_TESTNET_SHORT_NAME: &str = "t";
pub const ENV_DEVNET_NAME: &str = "devnet";
pub const ENV_DEVNET_SHORT_NAME: &str = "d";
pub const ENV_LOCALNET_NAME: &str = "localhost";
pub const ENV_LOCALNET_SHORT_NAME: &str = "l";

pub const ENV_MAINNET_BETA_LEDGER_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const ENV_TESTNET_LEDGER_RPC_URL: &str = "https://api.testnet.solana.com";
pub const ENV_DEVNET_LEDGER_RPC_URL: &str = "https://api.devnet.solana.com";
pub const ENV_LOCAL_LEDGER_RPC_URL: &str = "http://localhost:8899";

/// Overrides the RPC URL of whichever environment is selected.
pub const ENV_LEDGER_RPC_URL_OVERRIDE: &str = "MCM_LEDGER_RPC_URL";
