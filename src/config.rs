//! Runtime configuration read from the environment (and `.env`).

use std::error::Error;

/// Default cap on blocks produced by a fixed-prefix partition.
pub const DEFAULT_MAX_BLOCKS: usize = 1024;
/// Default cap on host addresses listed for one subnet.
pub const DEFAULT_MAX_HOSTS: usize = 4096;
/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

const ENV_MAX_BLOCKS: &str = "SUBNET_CALC_MAX_BLOCKS";
const ENV_MAX_HOSTS: &str = "SUBNET_CALC_MAX_HOSTS";
const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

/// Limits and paths handed to every calculation explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Most blocks a fixed-prefix partition materialises.
    pub max_blocks: usize,
    /// Most host addresses a host enumeration materialises.
    pub max_hosts: usize,
    /// Path of the log4rs YAML file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_blocks: DEFAULT_MAX_BLOCKS,
            max_hosts: DEFAULT_MAX_HOSTS,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read overrides from the environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_MAX_BLOCKS) {
            config.max_blocks = parse_limit(ENV_MAX_BLOCKS, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_HOSTS) {
            config.max_hosts = parse_limit(ENV_MAX_HOSTS, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            config.log_config = value;
        }

        Ok(config)
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize, Box<dyn Error>> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid {key}='{value}': {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_blocks, 1024);
        assert_eq!(config.max_hosts, 4096);
        assert_eq!(config.log_config, "log4rs.yml");
    }

    #[test]
    fn test_config_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SUBNET_CALC_MAX_BLOCKS", " 64 "),
            ("SUBNET_CALC_MAX_HOSTS", "10"),
            ("SUBNET_CALC_LOG_CONFIG", "/etc/subnet-calc/log4rs.yml"),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.max_blocks, 64);
        assert_eq!(config.max_hosts, 10);
        assert_eq!(config.log_config, "/etc/subnet-calc/log4rs.yml");
    }

    #[test]
    fn test_config_rejects_bad_limit() {
        let err = Config::from_lookup(|key| {
            (key == "SUBNET_CALC_MAX_HOSTS").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid SUBNET_CALC_MAX_HOSTS='lots'"));
    }
}
