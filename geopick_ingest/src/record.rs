// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload carried by each indexed point.

use serde::{Deserialize, Serialize};

/// One establishment row from the municipal business registry export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Establishment {
    /// Date the activity started, as written in the source.
    pub date: String,
    /// Street address assembled from the street, number, complement and district columns.
    pub address: String,
    /// Registered (legal) name.
    pub name: String,
    /// Trade name, when the source has one.
    pub trade_name: Option<String>,
    /// Whether the establishment holds an operating licence; `None` when unknown.
    pub licensed: Option<bool>,
    /// Economic activity id, the key into the detail table.
    pub activity_id: Option<String>,
}

impl Establishment {
    /// Trade name if present, otherwise the registered name.
    pub fn display_name(&self) -> &str {
        self.trade_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_trade_name() {
        let mut e = Establishment {
            date: "2001-03-15".into(),
            address: "RUA X, 1, CENTRO".into(),
            name: "ACME LTDA".into(),
            trade_name: Some("Acme".into()),
            licensed: None,
            activity_id: None,
        };
        assert_eq!(e.display_name(), "Acme");
        e.trade_name = None;
        assert_eq!(e.display_name(), "ACME LTDA");
    }
}
