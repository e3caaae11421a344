use mcm_proposals_config::Environment;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

pub const CONFIG_FILE_ENV: &str = "MCM_PROPOSALS_CONFIG_FILE";

const DEFAULT_ENVIRONMENT: Environment = Environment::MainnetBeta;

/// The default path to the configuration file.
///
/// > `~/.config/mcm-proposals/config.yml`
///
/// It will only be `None` if it is unable to identify the user's home
/// directory.
fn get_cfg_filename() -> Option<PathBuf> {
    match env::var_os(CONFIG_FILE_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => directories_next::UserDirs::new().map(|dirs| {
            let mut buf = dirs.home_dir().to_path_buf();
            buf.extend([".config", "mcm-proposals", "config.yml"]);
            buf
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalsConfig {
    pub json_rpc_url: String,
    #[serde(default)]
    pub mcm_program_id: Option<String>,
    #[serde(default)]
    pub multisig_id: Option<String>,
}

impl Default for ProposalsConfig {
    fn default() -> Self {
        ProposalsConfig {
            json_rpc_url: DEFAULT_ENVIRONMENT.config().ledger_rpc_url,
            mcm_program_id: None,
            multisig_id: None,
        }
    }
}

impl ProposalsConfig {
    /// Picks the explicit value when present, the configured one otherwise.
    pub fn rpc_url(&self, cli_value: Option<&str>) -> String {
        let url = cli_value.unwrap_or(&self.json_rpc_url);
        Environment::resolve_url_moniker(url)
    }
}

/// Reads the configuration file. A missing file yields the defaults.
pub fn read_proposals_config() -> eyre::Result<(PathBuf, ProposalsConfig)> {
    match get_cfg_filename() {
        None => eyre::bail!("Unable to get_cfg_filename"),
        Some(filename) => match fs::read_to_string(&filename) {
            Err(_) => Ok((filename, ProposalsConfig::default())),
            Ok(config_content) => {
                let config: ProposalsConfig = serde_yaml::from_str(&config_content)?;
                Ok((filename, config))
            }
        },
    }
}

pub fn write_proposals_config(config: &ProposalsConfig) -> eyre::Result<()> {
    match get_cfg_filename() {
        None => eyre::bail!("Unable to get_cfg_filename"),
        Some(filename) => {
            if let Some(parent) = filename.parent() {
                fs::create_dir_all(parent)?
            }

            let yaml_content = serde_yaml::to_string(config)?;
            fs::write(&filename, yaml_content)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_missing_config_file_yields_default() {
        let tmpdir = TempDir::with_prefix("mcm-proposals-tests-").unwrap();
        env::set_var(CONFIG_FILE_ENV, tmpdir.path().join("absent.yml"));

        let (_, config) = read_proposals_config().unwrap();
        assert_eq!(config, ProposalsConfig::default());
        env::remove_var(CONFIG_FILE_ENV);
    }

    #[test]
    #[serial]
    fn test_write_then_read_config() {
        let tmpdir = TempDir::with_prefix("mcm-proposals-tests-").unwrap();
        let path = tmpdir.path().join("cfg").join("config.yml");
        env::set_var(CONFIG_FILE_ENV, &path);

        let config = ProposalsConfig {
            json_rpc_url: "devnet".to_string(),
            mcm_program_id: Some("6UmMZr5MEqiKWD5jqTJd1WCR5kT8oZuFYBLJFi1o6GQX".to_string()),
            multisig_id: None,
        };
        write_proposals_config(&config).unwrap();

        let (filename, read) = read_proposals_config().unwrap();
        assert_eq!(filename, path);
        assert_eq!(read, config);
        env::remove_var(CONFIG_FILE_ENV);
    }

    #[test]
    #[serial]
    fn test_rpc_url_prefers_cli_value() {
        let config = ProposalsConfig {
            json_rpc_url: "http://configured:8899".to_string(),
            ..Default::default()
        };
        assert_eq!(config.rpc_url(None), "http://configured:8899");
        assert_eq!(config.rpc_url(Some("http://flag:8899")), "http://flag:8899");
        assert_eq!(config.rpc_url(Some("localhost")), "http://localhost:8899");
    }
}
