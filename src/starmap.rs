//! Loader for the HabHYG star catalog: CSV rows filtered to habitable-flagged
//! stars, parsed into position/magnitude records usable with the generic
//! distance utilities.

use crate::position::Positioned;
use crate::vector::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

// HabHYG column layout.
const COL_ID: usize = 0;
const COL_HABITABLE: usize = 2;
const COL_NAME: usize = 3;
const COL_CLASS: usize = 11;
const COL_X: usize = 13;
const COL_Y: usize = 14;
const COL_Z: usize = 15;
const COL_MAGNITUDE: usize = 16;

/// Rows are kept only when the habitability flag column holds this value.
const HABITABLE_FLAG: &str = "1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub magnitude: f64,
}

impl Positioned for Star {
    fn position(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A malformed value in one record, labeled with the offending field.
    Field {
        line: u64,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "catalog io error: {err}"),
            CatalogError::Csv(err) => write!(f, "catalog csv error: {err}"),
            CatalogError::Field { line, field, value } => {
                write!(f, "line {line}: invalid {field} field {value:?}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> CatalogError {
        CatalogError::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> CatalogError {
        CatalogError::Csv(err)
    }
}

fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    index: usize,
    field: &'static str,
) -> Result<T, CatalogError> {
    let raw = record.get(index).unwrap_or("");
    raw.trim().parse().map_err(|_| CatalogError::Field {
        line: record.position().map(|p| p.line()).unwrap_or(0),
        field,
        value: raw.to_string(),
    })
}

/// Parse one catalog record. The caller has already applied the
/// habitability filter.
pub fn parse_star(record: &csv::StringRecord) -> Result<Star, CatalogError> {
    Ok(Star {
        id: parse_field(record, COL_ID, "id")?,
        name: record.get(COL_NAME).unwrap_or("").to_string(),
        class: record.get(COL_CLASS).unwrap_or("").to_string(),
        x: parse_field(record, COL_X, "x")?,
        y: parse_field(record, COL_Y, "y")?,
        z: parse_field(record, COL_Z, "z")?,
        magnitude: parse_field(record, COL_MAGNITUDE, "magnitude")?,
    })
}

/// Read all habitable-flagged stars from CSV. A record with a malformed
/// field is logged and skipped without aborting the load; reader-level CSV
/// failures abort.
pub fn read_stars<R: Read>(reader: R) -> Result<Vec<Star>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut stars = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.get(COL_HABITABLE) != Some(HABITABLE_FLAG) {
            continue;
        }
        match parse_star(&record) {
            Ok(star) => stars.push(star),
            Err(err) => log::warn!("skipping catalog record: {err}"),
        }
    }
    Ok(stars)
}

pub fn read_stars_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Star>, CatalogError> {
    let file = File::open(path)?;
    read_stars(file)
}
