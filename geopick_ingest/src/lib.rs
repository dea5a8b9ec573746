// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geopick Ingest: turns registry exports into a queryable [`geopick_index`] tree.
//!
//! - [`read_establishments`] parses the semicolon-separated establishment export and
//!   reprojects each `POINT (easting northing)` geometry with a [`Reproject`]
//!   implementation such as [`UtmSouth`].
//! - [`read_details`] loads a comma-separated side table keyed by `ID`.
//! - [`Catalog`] publishes both as one [`CatalogSnapshot`], and [`Catalog::refresh`]
//!   rebuilds and republishes the index without disturbing readers.
//!
//! Coordinates are handed to the index as `(longitude, latitude)`.
//!
//! # Example
//!
//! ```rust
//! use geopick_index::{KdTree, Rectangle};
//! use geopick_ingest::{UtmSouth, read_establishments};
//!
//! let export = "NOME;NOME_FANTASIA;IND_POSSUI_ALVARA;DATA_INICIO_ATIVIDADE;DESC_LOGRADOURO;\
//!     NOME_LOGRADOURO;NUMERO_IMOVEL;COMPLEMENTO;NOME_BAIRRO;ID_ATIV_ECON_ESTABELECIMENTO;GEOM\n\
//!     BAR;Bar;SIM;2001-03-15;RUA;DOS ANDRADAS;120;;CENTRO;1001;\
//!     POINT (611520.352114458 7797383.360641202)";
//!
//! let utm = UtmSouth::new(23)?;
//! let tree = KdTree::build(read_establishments(export.as_bytes(), &utm)?);
//!
//! let belo_horizonte = Rectangle::from_corners((-44.1, -20.1), (-43.8, -19.7));
//! let hits: Vec<_> = tree.search(&belo_horizonte).collect();
//! assert_eq!(hits[0].payload().address, "RUA DOS ANDRADAS, 120, CENTRO");
//! # Ok::<(), geopick_ingest::IngestError>(())
//! ```

mod catalog;
mod config;
mod details;
mod error;
mod establishments;
mod project;
mod record;

pub use catalog::{Catalog, CatalogSnapshot};
pub use config::CatalogConfig;
pub use details::{DetailTable, ID_COLUMN, read_details, read_details_path};
pub use error::{IngestError, Result};
pub use establishments::{read_establishments, read_establishments_path};
pub use project::{Identity, Reproject, UtmSouth};
pub use record::Establishment;
