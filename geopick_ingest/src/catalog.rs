// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A live, refreshable index of establishments.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use geopick_index::{KdTree, Point, Rectangle};
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::details::{DetailTable, read_details_path};
use crate::error::Result;
use crate::establishments::read_establishments_path;
use crate::project::UtmSouth;
use crate::record::Establishment;

/// One published version of the catalog: a tree and the detail table read with it.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    generation: u64,
    tree: KdTree<Establishment>,
    details: DetailTable,
}

impl CatalogSnapshot {
    /// The establishment index.
    pub fn tree(&self) -> &KdTree<Establishment> {
        &self.tree
    }

    /// The detail table loaded alongside [`tree`](Self::tree).
    pub fn details(&self) -> &DetailTable {
        &self.details
    }

    /// Establishments inside `area`, with their coordinates, in search order.
    pub fn select(&self, area: &Rectangle) -> Vec<Point<Establishment>> {
        self.tree.search(area).cloned().collect()
    }

    /// Detail row for an activity id, if the detail table has one.
    pub fn details_for(&self, activity_id: &str) -> Option<&BTreeMap<String, String>> {
        self.details.get(activity_id)
    }

    /// Number of indexed establishments.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

/// Establishments loaded from disk, indexed for rectangle selection.
///
/// [`refresh`](Self::refresh) re-reads the sources and swaps in a new
/// [`CatalogSnapshot`]; selections running at the same time keep using the snapshot they
/// started with. The tree and detail table are always published together.
///
/// Every refresh draws a generation number before reading. A refresh that finishes after
/// a later-started one has already published is discarded, so overlapping refreshes
/// never roll the catalog back to older data.
#[derive(Debug)]
pub struct Catalog {
    config: CatalogConfig,
    projection: UtmSouth,
    generations: AtomicU64,
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl Catalog {
    /// Load every source named in `config` and publish the first snapshot.
    pub fn load(config: CatalogConfig) -> Result<Self> {
        let projection = UtmSouth::new(config.utm_zone)?;
        let catalog = Self {
            config,
            projection,
            generations: AtomicU64::new(0),
            current: RwLock::new(Arc::default()),
        };
        let _ = catalog.refresh()?;
        Ok(catalog)
    }

    /// Re-read the sources, build a new tree off to the side, and publish it.
    ///
    /// Returns the number of establishments published afterwards. On error the
    /// previously published data stays in place.
    pub fn refresh(&self) -> Result<usize> {
        let started = Instant::now();
        let generation = self.next_generation();
        let (points, details) = self.read_sources()?;
        let snapshot = self.install(generation, points, details);
        info!(
            points = snapshot.len(),
            height = snapshot.tree.height(),
            generation = snapshot.generation,
            elapsed = ?started.elapsed(),
            source = %self.config.establishments.display(),
            "published establishment index"
        );
        Ok(snapshot.len())
    }

    fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn read_sources(&self) -> Result<(Vec<Point<Establishment>>, DetailTable)> {
        let points = read_establishments_path(&self.config.establishments, &self.projection)?;
        let details = match &self.config.details {
            Some(path) => read_details_path(path)?,
            None => DetailTable::new(),
        };
        Ok((points, details))
    }

    /// Build and publish a snapshot unless a newer generation is already published.
    ///
    /// Returns whichever snapshot is current afterwards.
    fn install(
        &self,
        generation: u64,
        points: Vec<Point<Establishment>>,
        details: DetailTable,
    ) -> Arc<CatalogSnapshot> {
        let next = Arc::new(CatalogSnapshot {
            generation,
            tree: KdTree::build(points),
            details,
        });
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if guard.generation > generation {
            debug!(
                generation,
                published = guard.generation,
                "newer data already published, discarding"
            );
            return Arc::clone(&guard);
        }
        *guard = Arc::clone(&next);
        next
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Establishments inside `area`, with their coordinates, in search order.
    pub fn select(&self, area: &Rectangle) -> Vec<Point<Establishment>> {
        self.snapshot().select(area)
    }

    /// Detail row for an activity id, if the detail table has one.
    pub fn details_for(&self, activity_id: &str) -> Option<BTreeMap<String, String>> {
        self.snapshot().details_for(activity_id).cloned()
    }

    /// Number of published establishments.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether nothing is published.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configuration this catalog was loaded from.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}
