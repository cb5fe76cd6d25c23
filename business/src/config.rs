use std::any::Any;
use std::env::vars;

use roster_states::{SnapshotClone, State, state_assign_impl};
use serde::Deserialize;
use ustr::Ustr;

const PRODUCTION_BASE_URL: &str = "https://roster.lqxclqxc.com";
const TEST_BASE_URL: &str = "https://roster-test.lqxclqxc.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration from the environment: {0}")]
    Env(#[from] serde_env::Error),

    #[error("ROSTER_API_BASE_URL must start with http:// or https://, got `{0}`")]
    InvalidBaseUrl(String),
}

/// Environment overrides, all optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Build-time default, overridden by `ROSTER_API_BASE_URL` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let Some(base_url) = raw.roster_api_base_url else {
            return Ok(Self::default());
        };

        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self::new(base_url))
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        let base_url = if cfg!(feature = "env_test") {
            TEST_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };
        Self::new(base_url)
    }
}

impl SnapshotClone for BusinessConfig {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn default_url_follows_build_features() {
        let config = BusinessConfig::default();

        if cfg!(feature = "env_test") {
            assert_eq!(config.api_base_url, TEST_BASE_URL);
            assert_eq!(
                config.api_url(),
                Ustr::from("https://roster-test.lqxclqxc.com/api")
            );
        } else {
            assert_eq!(config.api_base_url, PRODUCTION_BASE_URL);
            assert_eq!(
                config.api_url(),
                Ustr::from("https://roster.lqxclqxc.com/api")
            );
        }
    }

    #[test]
    fn empty_base_url_uses_relative_api() {
        assert_eq!(BusinessConfig::new("").api_url(), Ustr::from("/api"));
    }

    #[test]
    fn env_override_replaces_default() {
        let raw: RawConfig = from_iter(vec![("ROSTER_API_BASE_URL", "http://localhost:5000/")])
            .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("override should be accepted");
        assert_eq!(config.api_url(), Ustr::from("http://localhost:5000/api"));
    }

    #[test]
    fn missing_override_keeps_default() {
        let raw: RawConfig =
            from_iter(vec![("UNRELATED", "1")]).expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("default config should build");
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn override_without_scheme_is_rejected() {
        let raw: RawConfig = from_iter(vec![("ROSTER_API_BASE_URL", "localhost:5000")])
            .expect("RawConfig should deserialize");

        let err = BusinessConfig::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("localhost:5000"));
    }
}
