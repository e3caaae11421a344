use solana_sdk::pubkey::Pubkey;

pub fn validate_pubkey(val: &str) -> Result<String, String> {
    match val.parse::<Pubkey>() {
        Ok(_) => Ok(val.to_string()),
        Err(_) => Err(String::from("invalid pubkey format")),
    }
}

pub fn validate_hex32(val: &str) -> Result<String, String> {
    mcm_sdk::parse_hex32(val)
        .map(|_| val.to_string())
        .map_err(|e| e.to_string())
}

pub fn validate_hex20_list(val: &str) -> Result<String, String> {
    crate::helpers::parse_signers(val)
        .map(|_| val.to_string())
        .map_err(|e| e.to_string())
}

pub fn validate_u8_list(val: &str) -> Result<String, String> {
    crate::helpers::parse_u8_list(val)
        .map(|_| val.to_string())
        .map_err(|e| e.to_string())
}
