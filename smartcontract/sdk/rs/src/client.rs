use mockall::automock;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{account::Account, commitment_config::CommitmentConfig, pubkey::Pubkey};

use crate::errors::Result;

/// Read-only view of the ledger used by the preflight checks.
#[automock]
pub trait LedgerClient {
    /// Returns `None` when no account exists at `pubkey`.
    fn get_account(&self, pubkey: Pubkey) -> Result<Option<Account>>;
}

pub struct RpcLedgerClient {
    rpc_url: String,
    client: RpcClient,
}

impl RpcLedgerClient {
    pub fn new(rpc_url: String) -> Self {
        let client = RpcClient::new_with_commitment(rpc_url.clone(), CommitmentConfig::confirmed());
        Self { rpc_url, client }
    }

    pub fn get_rpc(&self) -> &String {
        &self.rpc_url
    }
}

impl LedgerClient for RpcLedgerClient {
    fn get_account(&self, pubkey: Pubkey) -> Result<Option<Account>> {
        log::debug!("fetching account {pubkey} from {}", self.rpc_url);
        let response = self
            .client
            .get_account_with_commitment(&pubkey, self.client.commitment())?;
        Ok(response.value)
    }
}
