//! TOML description of a simulation domain and its named sub-regions.
//!
//! A config file names one outer domain plus any number of labelled regions
//! (inlets, sensors, obstacles, ...) positioned in the same world space:
//!
//! ```toml
//! [domain]
//! min_corner = [0.0, 0.0]
//! size = [5.0, 5.0]
//!
//! [[regions]]
//! name = "inlet"
//! min_corner = [-1.0, 1.0]
//! size = [2.0, 2.0]
//! ```
//!
//! Vectors are written as two-element arrays, `[x, y]`.
//!
//! # Defaults
//!
//! Both sections are optional.  A missing `[domain]` table gives the unit
//! square at the origin, and missing `[[regions]]` entries give an empty list.
//! [`load_config`] also returns the default config when the file does not
//! exist yet.
//!
//! Deserialising does not validate geometry.  [`DomainConfig::domain`] and
//! [`DomainConfig::clipped_regions`] do, because that is the point where a
//! negative size would start producing meaningless answers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::rect::{DomainError, RectDomain};
use crate::domain::vector::Vector2;

/// Error type for loading, saving and validating domain configs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The outer `[domain]` table describes an invalid rectangle.
    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] DomainError),

    /// A `[[regions]]` entry describes an invalid rectangle.
    #[error("invalid region {name:?}: {source}")]
    InvalidRegion {
        name: String,
        #[source]
        source: DomainError,
    },
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level config: the outer domain plus labelled regions inside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainConfig {
    #[serde(default = "default_domain")]
    pub domain: RectDomain,
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
}

/// A labelled rectangle in the same world space as the outer domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionEntry {
    pub name: String,
    pub min_corner: Vector2,
    pub size: Vector2,
}

fn default_domain() -> RectDomain {
    RectDomain::new(Vector2::ZERO, Vector2::new(1.0, 1.0))
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            regions: Vec::new(),
        }
    }
}

impl DomainConfig {
    /// Returns the outer domain after checking it is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDomain`] if the size is negative or any
    /// component is not finite.
    pub fn domain(&self) -> Result<RectDomain, ConfigError> {
        RectDomain::try_new(self.domain.min_corner(), self.domain.size()).map_err(|e| {
            warn!(domain = %self.domain, error = %e, "rejecting configured domain");
            ConfigError::InvalidDomain(e)
        })
    }

    /// Returns every region clipped to the outer domain.
    ///
    /// Regions that lie entirely outside the domain are dropped.  Regions that
    /// only touch the domain boundary are kept as zero-width or zero-height
    /// rectangles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDomain`] if the outer domain is invalid,
    /// or [`ConfigError::InvalidRegion`] for the first invalid region.
    pub fn clipped_regions(&self) -> Result<Vec<(String, RectDomain)>, ConfigError> {
        let domain = self.domain()?;
        let mut clipped = Vec::with_capacity(self.regions.len());

        for entry in &self.regions {
            let region = RectDomain::try_new(entry.min_corner, entry.size).map_err(|source| {
                ConfigError::InvalidRegion {
                    name: entry.name.clone(),
                    source,
                }
            })?;
            match domain.intersection(&region) {
                Some(inside) => clipped.push((entry.name.clone(), inside)),
                None => debug!(name = %entry.name, %region, "region lies outside the domain"),
            }
        }

        Ok(clipped)
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Parses a config from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or does not match
/// the schema.
pub fn parse_config(content: &str) -> Result<DomainConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads a config from `path`, returning [`DomainConfig::default`] if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<DomainConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg = parse_config(&content)?;
            debug!(path = %path.display(), regions = cfg.regions.len(), "loaded domain config");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no domain config found, using defaults");
            Ok(DomainConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &DomainConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved domain config");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
