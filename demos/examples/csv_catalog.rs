// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV catalog.
//!
//! Load the sample registry export named by `data/catalog.toml`, select a region, and
//! join each hit with its activity details.
//!
//! Run:
//! - `cargo run -p geopick_demos --example csv_catalog`
//! - `RUST_LOG=debug cargo run -p geopick_demos --example csv_catalog` to see skipped rows

use std::path::Path;

use geopick_index::Rectangle;
use geopick_ingest::{Catalog, CatalogConfig, IngestError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), IngestError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog.toml");
    let catalog = Catalog::load(CatalogConfig::from_path(&config_path)?)?;
    tracing::info!(establishments = catalog.len(), "catalog ready");

    // South-east Brazil, longitude first.
    let southeast = Rectangle::from_corners((-47.0, -24.0), (-43.0, -19.0));
    for p in catalog.select(&southeast) {
        let (lon, lat, shop) = p.into_parts();
        let activity = shop
            .activity_id
            .as_deref()
            .and_then(|id| catalog.details_for(id))
            .and_then(|row| row.get("DESCRICAO").cloned())
            .unwrap_or_default();
        let licence = match shop.licensed {
            Some(true) => "licensed",
            Some(false) => "unlicensed",
            None => "unknown",
        };
        println!(
            "{:<16} {:<10} ({lon:.4}, {lat:.4}) {} | {} | since {}",
            shop.display_name(),
            licence,
            shop.address,
            activity,
            shop.date
        );
    }

    let refreshed = catalog.refresh()?;
    tracing::info!(refreshed, "re-read sources");
    Ok(())
}
