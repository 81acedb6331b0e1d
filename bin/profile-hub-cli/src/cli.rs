//! Command-line arguments

use anyhow::anyhow;
use clap::Parser;
use profile_hub_client::{config::ConfigFile, Config};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Cli {
    /// Location of client config file.
    /// If this arg is not provided, the `uri` and `api-key` args must be
    /// provided.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Platform project URI.
    #[clap(long = "uri", conflicts_with = "config", requires = "api-key")]
    pub platform_uri: Option<String>,
    /// Public API key for the platform project.
    #[clap(long, conflicts_with = "config", requires = "platform-uri")]
    pub api_key: Option<String>,

    /// Directory where the session file will be saved.
    #[clap(long, default_value = "dev/profile_cli_data")]
    pub storage_path: PathBuf,
}

impl Cli {
    pub fn client_config(&self) -> anyhow::Result<Config> {
        if let Some(config) = &self.config {
            return Ok(Config::from_file(config)?);
        }

        let platform_uri = self.platform_uri.as_ref().ok_or(anyhow!(
            "If `config` argument is not provided, `uri` must be provided"
        ))?;
        let api_key = self.api_key.as_ref().ok_or(anyhow!(
            "If `config` argument is not provided, `api-key` must be provided"
        ))?;

        let config_file = ConfigFile {
            platform_uri: platform_uri.clone(),
            api_key: api_key.clone(),
            auth_uri: None,
            rest_uri: None,
            storage_uri: None,
        };
        Ok(Config::from_config_file(config_file)?)
    }
}
