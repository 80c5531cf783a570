//! Configuration type definitions.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration loaded from the JSON config file.
///
/// Unknown fields are ignored on load and dropped on save; the file is
/// owned by this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResumeConfig {
    /// Remote host in `user@hostname` form. Required by every remote
    /// operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_host: Option<String>,

    /// Forward the local SSH agent (`ssh -A`) into attach connections and
    /// route the socket through a shared symlink inside the session.
    #[serde(default)]
    pub ssh_agent_forwarding: bool,
}

impl ResumeConfig {
    /// The configured host, or `HostNotConfigured` if setup has not run.
    pub fn require_host(&self) -> Result<&str, ConfigError> {
        self.ssh_host
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .ok_or(ConfigError::HostNotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_host() {
        let config = ResumeConfig::default();
        assert!(config.ssh_host.is_none());
        assert!(!config.ssh_agent_forwarding);
        assert!(matches!(
            config.require_host(),
            Err(ConfigError::HostNotConfigured)
        ));
    }

    #[test]
    fn test_require_host_returns_configured_host() {
        let config = ResumeConfig {
            ssh_host: Some("dev@vm.example.com".to_string()),
            ssh_agent_forwarding: false,
        };
        assert_eq!(config.require_host().unwrap(), "dev@vm.example.com");
    }

    #[test]
    fn test_require_host_rejects_blank_host() {
        let config = ResumeConfig {
            ssh_host: Some("   ".to_string()),
            ssh_agent_forwarding: false,
        };
        assert!(matches!(
            config.require_host(),
            Err(ConfigError::HostNotConfigured)
        ));
    }

    #[test]
    fn test_deserialize_minimal_config() {
        let config: ResumeConfig = serde_json::from_str(r#"{"ssh_host": "me@box"}"#).unwrap();
        assert_eq!(config.ssh_host.as_deref(), Some("me@box"));
        assert!(!config.ssh_agent_forwarding);
    }
}
