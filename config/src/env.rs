use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    MainnetBeta,
    Testnet,
    Devnet,
    Local,
}

impl std::str::FromStr for Environment {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ENV_MAINNET_BETA_SHORT_NAME | ENV_MAINNET_BETA_NAME => Ok(Environment::MainnetBeta),
            ENV_TESTNET_SHORT_NAME | ENV_TESTNET_NAME => Ok(Environment::Testnet),
            ENV_DEVNET_SHORT_NAME | ENV_DEVNET_NAME => Ok(Environment::Devnet),
            ENV_LOCALNET_SHORT_NAME | ENV_LOCALNET_NAME | "local" => Ok(Environment::Local),
            _ => Err(eyre::eyre!(
                "Invalid environment {s}, must be one of: {ENV_MAINNET_BETA_NAME}, {ENV_TESTNET_NAME}, {ENV_DEVNET_NAME}, {ENV_LOCALNET_NAME}",
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::MainnetBeta => write!(f, "mainnet-beta"),
            Environment::Testnet => write!(f, "testnet"),
            Environment::Devnet => write!(f, "devnet"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl Environment {
    pub fn config(&self) -> NetworkConfig {
        let ledger_rpc_url = match self {
            Environment::MainnetBeta => ENV_MAINNET_BETA_LEDGER_RPC_URL,
            Environment::Testnet => ENV_TESTNET_LEDGER_RPC_URL,
            Environment::Devnet => ENV_DEVNET_LEDGER_RPC_URL,
            Environment::Local => ENV_LOCAL_LEDGER_RPC_URL,
        };

        NetworkConfig {
            ledger_rpc_url: std::env::var(ENV_LEDGER_RPC_URL_OVERRIDE)
                .unwrap_or_else(|_| ledger_rpc_url.to_string()),
        }
    }

    /// Resolves `url` to an RPC endpoint. Environment monikers map to their
    /// public endpoint, anything else is returned untouched.
    pub fn resolve_url_moniker(url: &str) -> String {
        match url.parse::<Environment>() {
            Ok(env) => env.config().ledger_rpc_url,
            Err(_) => url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub ledger_rpc_url: String,
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_environment_from_str_valid() {
        assert_eq!(
            "mainnet-beta".parse::<Environment>().unwrap(),
            Environment::MainnetBeta
        );
        assert_eq!("t".parse::<Environment>().unwrap(), Environment::Testnet);
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    }

    #[test]
    #[serial]
    fn test_environment_from_str_invalid() {
        assert!("invalid".parse::<Environment>().is_err());
    }

    #[test]
    #[serial]
    fn test_network_config_devnet() {
        std::env::remove_var(ENV_LEDGER_RPC_URL_OVERRIDE);
        assert_eq!(
            Environment::Devnet.config().ledger_rpc_url,
            "https://api.devnet.solana.com"
        );
    }

    #[test]
    #[serial]
    fn test_network_config_override() {
        std::env::set_var(ENV_LEDGER_RPC_URL_OVERRIDE, "http://10.0.0.1:8899");
        assert_eq!(
            Environment::MainnetBeta.config().ledger_rpc_url,
            "http://10.0.0.1:8899"
        );
        std::env::remove_var(ENV_LEDGER_RPC_URL_OVERRIDE);
    }

    #[test]
    #[serial]
    fn test_resolve_url_moniker() {
        std::env::remove_var(ENV_LEDGER_RPC_URL_OVERRIDE);
        assert_eq!(
            Environment::resolve_url_moniker("localhost"),
            "http://localhost:8899"
        );
        assert_eq!(
            Environment::resolve_url_moniker("https://rpc.example.com"),
            "https://rpc.example.com"
        );
    }
}
