use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding items.csv, users.csv and interactions.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Recommendation count when the request does not pass `limit`
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Number of interactions returned by the history endpoint
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Number of genres in a profile summary
    #[serde(default = "default_top_genres")]
    pub top_genres: usize,

    /// Seed for reproducible sampling; unset means OS entropy per request
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_limit() -> usize {
    5
}

fn default_history_limit() -> usize {
    10
}

fn default_top_genres() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            host: default_host(),
            port: default_port(),
            default_limit: default_limit(),
            history_limit: default_history_limit(),
            top_genres: default_top_genres(),
            rng_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.top_genres, 5);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("DATA_DIR", "/srv/recsys"),
            ("PORT", "9100"),
            ("DEFAULT_LIMIT", "8"),
            ("RNG_SEED", "1234"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/recsys"));
        assert_eq!(config.port, 9100);
        assert_eq!(config.default_limit, 8);
        assert_eq!(config.rng_seed, Some(1234));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
