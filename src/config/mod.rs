#[cfg(feature = "cli")]
pub mod file;
#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub const DEFAULT_HOST: &str = "127.0.0.1";
#[cfg(feature = "cli")]
pub const DEFAULT_PORT: u16 = 8787;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "winepref-page")]
#[command(about = "Deployment notice page for the Wine Preference App")]
pub struct PreviewConfig {
    /// Host to bind the preview server on
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the preview server on
    #[arg(long)]
    pub port: Option<u16>,

    /// TOML configuration file with a [server] section
    #[arg(long)]
    pub config: Option<String>,

    /// Print the rendered HTML document to stdout and exit
    #[arg(long)]
    pub render: bool,

    /// With --render, print the full response envelope as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the rendered HTML document to this path and exit
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Preview settings after merging flags, file values, and defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPreview {
    pub host: String,
    pub port: u16,
}

#[cfg(feature = "cli")]
impl PreviewConfig {
    /// Merge CLI flags with the optional config file. Flags win over file
    /// values, file values win over defaults.
    pub fn resolve(&self) -> Result<ResolvedPreview> {
        let file = match &self.config {
            Some(path) => Some(file::PreviewFileConfig::from_file(path)?),
            None => None,
        };
        let server = file.as_ref().and_then(|f| f.server.as_ref());

        let resolved = ResolvedPreview {
            host: self
                .host
                .clone()
                .or_else(|| server.and_then(|s| s.host.clone()))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self
                .port
                .or_else(|| server.and_then(|s| s.port))
                .unwrap_or(DEFAULT_PORT),
        };

        resolved.validate()?;
        Ok(resolved)
    }
}

#[cfg(feature = "cli")]
impl Validate for PreviewConfig {
    fn validate(&self) -> Result<()> {
        if let Some(host) = &self.host {
            validate_non_empty_string("host", host)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl Validate for ResolvedPreview {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)
    }
}
