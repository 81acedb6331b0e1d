use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};

use crate::ProfileHubClientError;

/// Client configuration with all fields ready to use.
///
/// The hosted platform mounts its services under one project URI; each
/// resolved URL below ends in a trailing slash so endpoint paths can be
/// joined onto it directly.
#[derive(Clone)]
pub struct Config {
    pub auth_url: Url,
    pub rest_url: Url,
    pub storage_url: Url,
    pub api_key: String,
}

impl Config {
    pub fn from_file(config_path: impl AsRef<Path>) -> Result<Self, ProfileHubClientError> {
        let config_string = std::fs::read_to_string(&config_path)?;
        let config_file = ConfigFile::from_str(&config_string)?;
        Self::from_config_file(config_file)
    }

    pub fn from_config_file(config: ConfigFile) -> Result<Self, ProfileHubClientError> {
        let base = config.platform_uri.trim_end_matches('/');
        Ok(Self {
            auth_url: service_url(config.auth_uri.as_deref(), base, "auth/v1")?,
            rest_url: service_url(config.rest_uri.as_deref(), base, "rest/v1")?,
            storage_url: service_url(config.storage_uri.as_deref(), base, "storage/v1")?,
            api_key: config.api_key,
        })
    }
}

fn service_url(
    override_uri: Option<&str>,
    base: &str,
    mount: &str,
) -> Result<Url, ProfileHubClientError> {
    let uri = match override_uri {
        Some(uri) => format!("{}/", uri.trim_end_matches('/')),
        None => format!("{base}/{mount}/"),
    };
    Url::parse(&uri).map_err(|e| ProfileHubClientError::InvalidUri(e.to_string()))
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth_url", &self.auth_url.as_str())
            .field("rest_url", &self.rest_url.as_str())
            .field("storage_url", &self.storage_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Client configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ConfigFile {
    /// Project base URI; the auth, rest, and storage services are mounted
    /// under it.
    pub platform_uri: String,
    /// Public API key sent with every request.
    pub api_key: String,
    /// Per-service overrides for self-hosted layouts.
    pub auth_uri: Option<String>,
    pub rest_uri: Option<String>,
    pub storage_uri: Option<String>,
}

impl FromStr for ConfigFile {
    type Err = ProfileHubClientError;

    fn from_str(config_string: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(config_string)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_str() {
        let config_str = r#"
        platform_uri = "https://project.example.co"
        api_key = "public-anon-key"
        "#;

        // Destructure so the test breaks when fields are added
        let ConfigFile {
            platform_uri,
            api_key,
            auth_uri,
            rest_uri,
            storage_uri,
        } = ConfigFile::from_str(config_str).unwrap();

        assert_eq!(platform_uri, "https://project.example.co");
        assert_eq!(api_key, "public-anon-key");
        assert!(auth_uri.is_none());
        assert!(rest_uri.is_none());
        assert!(storage_uri.is_none());
    }

    #[test]
    fn services_mount_under_the_platform_uri() {
        let config_file = ConfigFile::from_str(
            r#"
            platform_uri = "https://project.example.co/"
            api_key = "key"
            storage_uri = "https://blobs.example.co/storage/v1"
            "#,
        )
        .unwrap();

        let config = Config::from_config_file(config_file).unwrap();
        assert_eq!(
            config.auth_url.as_str(),
            "https://project.example.co/auth/v1/"
        );
        assert_eq!(
            config.rest_url.join("profiles").unwrap().as_str(),
            "https://project.example.co/rest/v1/profiles"
        );
        assert_eq!(
            config.storage_url.as_str(),
            "https://blobs.example.co/storage/v1/"
        );
    }
}
