// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for ingestion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Anything that can go wrong while loading source data or configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// A source or configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The CSV reader failed (I/O, UTF-8, or framing).
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A required header is absent.
    #[error("missing required column `{0}`")]
    MissingColumn(String),

    /// The geometry column held text that is not two numbers.
    #[error("line {line}: cannot read coordinates from `{text}`")]
    Coordinate {
        /// 1-based line in the source file.
        line: u64,
        /// Text found between the parentheses.
        text: String,
    },

    /// UTM zones are numbered 1 through 60.
    #[error("UTM zone {0} is outside 1..=60")]
    Zone(u8),

    /// The catalog configuration is not valid TOML for [`CatalogConfig`](crate::CatalogConfig).
    #[error("invalid catalog configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias for ingestion.
pub type Result<T, E = IngestError> = core::result::Result<T, E>;
