// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reprojection from source coordinates to geographic longitude/latitude.
//!
//! The index expects every point in one 2D coordinate system. Source exports carry
//! projected UTM coordinates, so they are converted here, before points are built.

use crate::error::{IngestError, Result};

/// Converts source coordinates to `(longitude, latitude)` in degrees.
pub trait Reproject {
    /// Map `(x, y)` in the source system to `(longitude, latitude)`.
    fn to_geographic(&self, x: f64, y: f64) -> (f64, f64);
}

/// Passes coordinates through unchanged, for sources already in longitude/latitude.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Reproject for Identity {
    fn to_geographic(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }
}

// WGS84 ellipsoid and UTM constants.
const A: f64 = 6_378_137.0;
const F: f64 = 1.0 / 298.257_223_563;
const K0: f64 = 0.9996;
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Inverse transverse Mercator for a southern-hemisphere UTM zone on WGS84.
///
/// `UtmSouth::new(23)` maps EPSG:32723 eastings/northings to EPSG:4326 longitude and
/// latitude (longitude first). Accuracy is well under a metre inside the zone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UtmSouth {
    zone: u8,
    central_meridian: f64,
}

impl UtmSouth {
    /// Projection for `zone` (1 through 60).
    pub fn new(zone: u8) -> Result<Self> {
        if !(1..=60).contains(&zone) {
            return Err(IngestError::Zone(zone));
        }
        Ok(Self {
            zone,
            central_meridian: f64::from(zone) * 6.0 - 183.0,
        })
    }

    /// The zone number.
    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// Longitude of the zone's central meridian, in degrees.
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }
}

impl Reproject for UtmSouth {
    fn to_geographic(&self, easting: f64, northing: f64) -> (f64, f64) {
        let e2 = F * (2.0 - F);
        let ep2 = e2 / (1.0 - e2);
        let x = easting - FALSE_EASTING;
        let y = northing - FALSE_NORTHING_SOUTH;

        // Footpoint latitude from the meridional arc.
        let m = y / K0;
        let mu = m / (A * (1.0 - e2 / 4.0 - 3.0 * e2.powi(2) / 64.0 - 5.0 * e2.powi(3) / 256.0));
        let r = (1.0 - e2).sqrt();
        let e1 = (1.0 - r) / (1.0 + r);
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let (sin1, cos1) = phi1.sin_cos();
        let tan1 = phi1.tan();
        let n1 = A / (1.0 - e2 * sin1 * sin1).sqrt();
        let t1 = tan1 * tan1;
        let c1 = ep2 * cos1 * cos1;
        let r1 = A * (1.0 - e2) / (1.0 - e2 * sin1 * sin1).powf(1.5);
        let d = x / (n1 * K0);

        let lat = phi1
            - (n1 * tan1 / r1)
                * (d.powi(2) / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2 - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);
        let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1) * d.powi(5)
                / 120.0)
            / cos1;

        (self.central_meridian + lon.to_degrees(), lat.to_degrees())
    }
}
