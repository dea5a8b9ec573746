// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reader for the semicolon-separated establishment export.
//!
//! The export has a header row naming its columns. The geometry sits in the last
//! column as `POINT (easting northing)`; rows without a parenthesised geometry are
//! skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use csv::StringRecord;
use geopick_index::Point;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::project::Reproject;
use crate::record::Establishment;

static GEOMETRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("geometry pattern is valid"));

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Columns {
    name: usize,
    trade_name: usize,
    licence: usize,
    date: usize,
    street_kind: usize,
    street: usize,
    number: usize,
    complement: usize,
    district: usize,
    activity: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| IngestError::MissingColumn(name.to_owned()))
        };
        Ok(Self {
            name: find("NOME")?,
            trade_name: find("NOME_FANTASIA")?,
            licence: find("IND_POSSUI_ALVARA")?,
            date: find("DATA_INICIO_ATIVIDADE")?,
            street_kind: find("DESC_LOGRADOURO")?,
            street: find("NOME_LOGRADOURO")?,
            number: find("NUMERO_IMOVEL")?,
            complement: find("COMPLEMENTO")?,
            district: find("NOME_BAIRRO")?,
            activity: find("ID_ATIV_ECON_ESTABELECIMENTO")?,
        })
    }

    fn establishment(&self, row: &StringRecord) -> Establishment {
        let field = |i: usize| row.get(i).unwrap_or("");
        let non_empty = |i: usize| Some(field(i)).filter(|s| !s.is_empty()).map(str::to_owned);

        let complement = match field(self.complement) {
            "" => String::new(),
            c => format!(" {c},"),
        };
        let address = format!(
            "{} {}, {},{complement} {}",
            field(self.street_kind),
            field(self.street),
            field(self.number),
            field(self.district),
        );
        let licensed = match field(self.licence) {
            "SIM" => Some(true),
            "NÃO" => Some(false),
            _ => None,
        };

        Establishment {
            date: field(self.date).to_owned(),
            address,
            name: field(self.name).to_owned(),
            trade_name: non_empty(self.trade_name),
            licensed,
            activity_id: non_empty(self.activity),
        }
    }
}

/// Text between the first pair of parentheses, if any.
fn geometry_text(field: &str) -> Option<&str> {
    GEOMETRY
        .captures(field)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn parse_pair(text: &str) -> Option<(f64, f64)> {
    let mut parts = text.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    Some((x, y))
}

/// Read establishments from a semicolon-separated export, reprojecting each geometry.
///
/// Rows with no parenthesised geometry, or whose projected coordinates are not finite,
/// are skipped and logged. Malformed numbers inside the parentheses are an error.
pub fn read_establishments<R: Read>(
    source: R,
    projection: &impl Reproject,
) -> Result<Vec<Point<Establishment>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(source);
    let columns = Columns::locate(reader.headers()?)?;

    let mut points = Vec::new();
    let mut skipped = 0_usize;
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let Some(text) = record.iter().next_back().and_then(geometry_text) else {
            debug!(line, "row has no geometry, skipping");
            skipped += 1;
            continue;
        };
        let (x, y) = parse_pair(text).ok_or_else(|| IngestError::Coordinate {
            line,
            text: text.to_owned(),
        })?;
        let (lon, lat) = projection.to_geographic(x, y);
        if !(lon.is_finite() && lat.is_finite()) {
            warn!(line, x, y, "projected coordinates are not finite, skipping");
            skipped += 1;
            continue;
        }
        points.push(Point::new(lon, lat, columns.establishment(&record)));
    }
    info!(points = points.len(), skipped, "read establishments");
    Ok(points)
}

/// [`read_establishments`] from a file on disk.
pub fn read_establishments_path(
    path: &Path,
    projection: &impl Reproject,
) -> Result<Vec<Point<Establishment>>> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), "opening establishment export");
    read_establishments(file, projection)
}
