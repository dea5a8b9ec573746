// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side table of extra attributes keyed by id.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Column holding each row's key.
pub const ID_COLUMN: &str = "ID";

/// Rows keyed by their `ID` column; each row maps header names to values.
pub type DetailTable = HashMap<String, BTreeMap<String, String>>;

/// Read a comma-separated table with a header row, keyed by its `ID` column.
///
/// When an id repeats, the later row wins.
pub fn read_details<R: Read>(source: R) -> Result<DetailTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
    let headers = reader.headers()?.clone();
    let id = headers
        .iter()
        .position(|h| h == ID_COLUMN)
        .ok_or_else(|| IngestError::MissingColumn(ID_COLUMN.to_owned()))?;

    let mut table = DetailTable::new();
    for record in reader.records() {
        let record = record?;
        let Some(key) = record.get(id) else {
            debug!(line = record.position().map_or(0, csv::Position::line), "row has no id, skipping");
            continue;
        };
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_owned(), v.to_owned()))
            .collect();
        let _ = table.insert(key.to_owned(), row);
    }
    info!(rows = table.len(), "read detail table");
    Ok(table)
}

/// [`read_details`] from a file on disk.
pub fn read_details_path(path: &Path) -> Result<DetailTable> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_owned(),
        source,
    })?;
    read_details(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_keyed_by_id() {
        let csv = "ID,NOME,MUSICA\n1001,Bar do Zé,samba\n1002,Boteco,\n1001,Bar do Zé,choro\n";
        let table = read_details(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let ze = &table["1001"];
        assert_eq!(ze["NOME"], "Bar do Zé");
        assert_eq!(ze["MUSICA"], "choro", "later rows replace earlier ones");
        assert_eq!(ze["ID"], "1001");
        assert_eq!(table["1002"]["MUSICA"], "");
    }

    #[test]
    fn id_column_is_required() {
        let err = read_details("NOME\nx\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(ref c) if c == ID_COLUMN), "{err}");
    }

    #[test]
    fn short_rows_without_id_are_skipped() {
        let csv = "NOME,ID\nsolo\nBoteco,7\n";
        let table = read_details(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["7"]["NOME"], "Boteco");
    }
}
