// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog configuration, read from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

const fn default_utm_zone() -> u8 {
    23
}

/// Where a [`Catalog`](crate::Catalog) loads its data from.
///
/// ```toml
/// establishments = "data/establishments.csv"
/// details = "data/details.csv"   # optional
/// utm_zone = 23                  # optional, southern hemisphere
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Semicolon-separated establishment export.
    pub establishments: PathBuf,
    /// Optional comma-separated detail table keyed by `ID`.
    #[serde(default)]
    pub details: Option<PathBuf>,
    /// Southern UTM zone of the export's coordinates.
    #[serde(default = "default_utm_zone")]
    pub utm_zone: u8,
}

impl CatalogConfig {
    /// Configuration for `establishments` with no detail table, in the default zone.
    pub fn new(establishments: impl Into<PathBuf>) -> Self {
        Self {
            establishments: establishments.into(),
            details: None,
            utm_zone: default_utm_zone(),
        }
    }

    /// Parse a TOML document. Relative paths are kept as written.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML file. Relative paths are resolved against the file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            config.establishments = base.join(&config.establishments);
            config.details = config.details.map(|d| base.join(d));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let c = CatalogConfig::from_toml_str(r#"establishments = "a.csv""#).unwrap();
        assert_eq!(c, CatalogConfig::new("a.csv"));
        assert_eq!(c.utm_zone, 23);
    }

    #[test]
    fn all_fields() {
        let c = CatalogConfig::from_toml_str(
            r#"
            establishments = "a.csv"
            details = "b.csv"
            utm_zone = 22
            "#,
        )
        .unwrap();
        assert_eq!(c.details.as_deref(), Some(Path::new("b.csv")));
        assert_eq!(c.utm_zone, 22);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CatalogConfig::from_toml_str("establishments = \"a.csv\"\nzone = 3").unwrap_err();
        assert!(matches!(err, IngestError::Config(_)), "{err}");
    }

    #[test]
    fn file_paths_resolve_against_config_dir() {
        let dir = std::env::temp_dir().join(format!("geopick-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.toml");
        fs::write(&path, "establishments = \"e.csv\"\ndetails = \"d.csv\"\n").unwrap();
        let c = CatalogConfig::from_path(&path).unwrap();
        assert_eq!(c.establishments, dir.join("e.csv"));
        assert_eq!(c.details, Some(dir.join("d.csv")));
        fs::remove_dir_all(&dir).unwrap();
    }
}
