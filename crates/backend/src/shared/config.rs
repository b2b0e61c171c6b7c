use once_cell::sync::OnceCell;
use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub odoo: OdooConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OdooConfig {
    /// Base URL of the Odoo instance; the JSON-RPC endpoint lives at
    /// `{url}/jsonrpc`
    pub url: String,
    /// Uid the API keys were issued for
    pub uid: i64,
    pub timeout_secs: u64,
    pub trial: OdooTarget,
    pub production: OdooTarget,
}

/// One upstream database plus the name of the environment variable
/// holding its API key. The key itself is read at request time, never
/// stored in the config.
#[derive(Debug, Deserialize, Clone)]
pub struct OdooTarget {
    pub database: String,
    pub api_key_env: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[odoo]
url = "https://erbe-trial5.odoo.com"
uid = 2
timeout_secs = 30

[odoo.trial]
database = "erbe-trial5"
api_key_env = "ODOO_API_KEY"

[odoo.production]
database = "erbe"
api_key_env = "ODOO_API_KEY_PROD"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. The working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    let cwd_path = std::path::Path::new("config.toml");
    if cwd_path.exists() {
        tracing::info!("Loading config from: {}", cwd_path.display());
        let contents = std::fs::read_to_string(cwd_path)?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Load the config once at startup and keep it for the process lifetime
pub fn initialize() -> anyhow::Result<()> {
    let config = load_config()?;
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("config already initialized"))?;
    Ok(())
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("config not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.odoo.uid, 2);
        assert_eq!(config.odoo.trial.database, "erbe-trial5");
        assert_eq!(config.odoo.production.api_key_env, "ODOO_API_KEY_PROD");
    }
}
