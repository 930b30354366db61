use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::link::SocialLinkSpec;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("failed to serialize links: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Links file: the social links to render and an optional shared class
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LinksConfig {
    /// Class applied to every link instead of the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(default)]
    pub links: Vec<SocialLinkSpec>,
}

impl LinksConfig {
    /// Default links file location
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("social-icons");

        Ok(config_dir.join("links.toml"))
    }

    /// Load an explicit path, or the default location.
    ///
    /// A missing default file is not an error and yields no links. A missing
    /// explicit file is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            tracing::warn!(path = %path.display(), "No links file, nothing to render");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), links = config.links.len(), "Loaded links file");
        Ok(config)
    }

    /// Save to file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Could not create config directory: {}", e);
            }
        }

        // Blank sites are dropped to None so the file stays readable
        let mut clean = self.clone();
        for link in &mut clean.links {
            if link.site.as_ref().map(|s| s.is_empty()).unwrap_or(false) {
                link.site = None;
            }
        }

        let content = toml::to_string_pretty(&clean)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the sample links file. An existing file is only replaced when
    /// `force` is set.
    pub fn init(path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }

        Self::sample().save(path)?;
        tracing::info!(path = %path.display(), "Wrote sample links file");
        Ok(())
    }

    /// Starter file written by `social-icons init`
    pub fn sample() -> Self {
        Self {
            class: None,
            links: vec![
                SocialLinkSpec::new("github", "https://github.com/your-name"),
                SocialLinkSpec::new("linkedin", "https://www.linkedin.com/in/your-name"),
                SocialLinkSpec::new("twitter", "https://twitter.com/your-name"),
            ],
        }
    }
}
