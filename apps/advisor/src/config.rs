use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::chat::conversation::DEFAULT_MAX_CONVERSATIONS;

const DEFAULT_RECOMMENDER_URL: &str = "http://127.0.0.1:8000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external recommendation service.
    pub recommender_url: String,
    pub recommender_timeout_secs: u64,
    /// JSON rule file replacing the built-in chat catalog.
    pub chat_rules_path: Option<PathBuf>,
    /// Seed for reproducible fallback picks.
    pub chat_fallback_seed: Option<u64>,
    /// Live conversations kept in memory; the oldest is evicted past this.
    pub max_conversations: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            recommender_url: lookup("RECOMMENDER_URL")
                .unwrap_or_else(|| DEFAULT_RECOMMENDER_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            recommender_timeout_secs: lookup("RECOMMENDER_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("RECOMMENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            chat_rules_path: lookup("CHAT_RULES_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            chat_fallback_seed: lookup("CHAT_FALLBACK_SEED")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("CHAT_FALLBACK_SEED must be an unsigned integer")?,
            max_conversations: match lookup("MAX_CONVERSATIONS") {
                Some(raw) => raw
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .context("MAX_CONVERSATIONS must be a positive integer")?,
                None => DEFAULT_MAX_CONVERSATIONS,
            },
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.recommender_url, "http://127.0.0.1:8000");
        assert_eq!(config.recommender_timeout_secs, 30);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.chat_rules_path.is_none());
        assert!(config.chat_fallback_seed.is_none());
        assert_eq!(config.max_conversations, DEFAULT_MAX_CONVERSATIONS);
    }

    #[test]
    fn test_max_conversations() {
        let config = config_from(&[("MAX_CONVERSATIONS", "250")]).unwrap();
        assert_eq!(config.max_conversations, 250);
        assert!(config_from(&[("MAX_CONVERSATIONS", "0")]).is_err());
        assert!(config_from(&[("MAX_CONVERSATIONS", "many")]).is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = config_from(&[("RECOMMENDER_URL", "http://recommender:8000/")]).unwrap();
        assert_eq!(config.recommender_url, "http://recommender:8000");
    }

    #[test]
    fn test_seed_and_rules_path() {
        let config = config_from(&[
            ("CHAT_FALLBACK_SEED", "42"),
            ("CHAT_RULES_PATH", "/etc/advisor/rules.json"),
        ])
        .unwrap();
        assert_eq!(config.chat_fallback_seed, Some(42));
        assert_eq!(
            config.chat_rules_path,
            Some(PathBuf::from("/etc/advisor/rules.json"))
        );
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_seed_is_an_error() {
        assert!(config_from(&[("CHAT_FALLBACK_SEED", "-1")]).is_err());
    }

    #[test]
    fn test_blank_rules_path_is_ignored() {
        let config = config_from(&[("CHAT_RULES_PATH", "  ")]).unwrap();
        assert!(config.chat_rules_path.is_none());
    }
}
