use mcm_sdk::{parse_hex20, parse_hex32, MultisigId, ProposalsConfig, SignerAddress};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Parses a comma-separated list of group indices or thresholds.
pub fn parse_u8_list(val: &str) -> eyre::Result<Vec<u8>> {
    if val.trim().is_empty() {
        return Ok(Vec::new());
    }
    val.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<u8>()
                .map_err(|e| eyre::eyre!("failed to parse {item:?} as u8: {e}"))
        })
        .collect()
}

pub fn parse_signers(val: &str) -> eyre::Result<Vec<SignerAddress>> {
    if val.trim().is_empty() {
        return Ok(Vec::new());
    }
    val.split(',')
        .map(|signer| parse_hex20(signer).map_err(|e| eyre::eyre!("failed to parse signer: {e}")))
        .collect()
}

pub fn resolve_program_id(flag: Option<&str>, config: &ProposalsConfig) -> eyre::Result<Pubkey> {
    let value = flag
        .or(config.mcm_program_id.as_deref())
        .ok_or_else(|| eyre::eyre!("MCM program ID required (--mcm-program-id or config)"))?;
    Ok(Pubkey::from_str(value)?)
}

pub fn resolve_multisig_id(flag: Option<&str>, config: &ProposalsConfig) -> eyre::Result<MultisigId> {
    let value = flag
        .or(config.multisig_id.as_deref())
        .ok_or_else(|| eyre::eyre!("Multisig ID required (--multisig-id or config)"))?;
    parse_hex32(value).map_err(|e| eyre::eyre!("failed to decode multisig ID: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u8_list() {
        assert_eq!(parse_u8_list("0, 0,1").unwrap(), vec![0, 0, 1]);
        assert_eq!(parse_u8_list("").unwrap(), Vec::<u8>::new());
        assert!(parse_u8_list("0,").is_err());
        assert!(parse_u8_list("300").is_err());
    }

    #[test]
    fn test_parse_signers_empty_list() {
        assert!(parse_signers("").unwrap().is_empty());
        assert!(parse_signers(",").is_err());
    }

    #[test]
    fn test_parse_signers_keeps_order() {
        let a = format!("0x{}", "01".repeat(20));
        let b = format!("0x{}", "02".repeat(20));
        let signers = parse_signers(&format!("{b},{a}")).unwrap();
        assert_eq!(signers, vec![[2u8; 20], [1u8; 20]]);
    }

    #[test]
    fn test_resolve_program_id_prefers_flag() {
        let configured = Pubkey::new_unique();
        let flag = Pubkey::new_unique();
        let config = ProposalsConfig {
            mcm_program_id: Some(configured.to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_program_id(Some(&flag.to_string()), &config).unwrap(),
            flag
        );
        assert_eq!(resolve_program_id(None, &config).unwrap(), configured);
        assert!(resolve_program_id(None, &ProposalsConfig::default()).is_err());
    }

    #[test]
    fn test_resolve_multisig_id() {
        let config = ProposalsConfig {
            multisig_id: Some(format!("0x{}", "cd".repeat(32))),
            ..Default::default()
        };
        assert_eq!(resolve_multisig_id(None, &config).unwrap(), [0xcd; 32]);
        assert!(resolve_multisig_id(Some("0x1234"), &config).is_err());
    }
}
