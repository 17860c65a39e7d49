use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional TOML configuration for the preview tooling. Every section and
/// field is optional; unset values fall back to CLI flags and defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewFileConfig {
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl PreviewFileConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_parses() {
        let config: PreviewFileConfig = toml::from_str("").unwrap();
        assert!(config.server.is_none());
    }

    #[test]
    fn test_partial_server_section_parses() {
        let config: PreviewFileConfig = toml::from_str("[server]\nport = 9000\n").unwrap();
        let server = config.server.unwrap();
        assert_eq!(server.port, Some(9000));
        assert!(server.host.is_none());
    }
}
