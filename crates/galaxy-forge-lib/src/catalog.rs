//! Star catalog loading from CSV files.
//!
//! Each row describes one star:
//!
//! ```text
//! Designation,Name,StarType,TemperatureSequence,LuminosityClass,absoluteMagnitude,distance,longitude,latitude
//! ```
//!
//! Headers are matched case-insensitively and a few common synonyms are
//! accepted. Unknown columns (for instance precomputed goldilocks bounds) are
//! ignored. Numeric fields are validated while reading; star type and
//! luminosity codes are only resolved by [`StarRecord::into_star`].

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::debug;

use crate::body::Star;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

/// One parsed catalog row, with type codes still in textual form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarRecord {
    pub designation: String,
    pub name: String,
    pub star_type: String,
    pub temperature_sequence: i32,
    pub luminosity: String,
    pub absolute_magnitude: f32,
    pub radial_distance: f32,
    pub longitude: f32,
    pub latitude: f32,
}

impl StarRecord {
    /// Resolve type codes and build the star.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStarType`] or [`Error::UnknownLuminosityClass`]
    /// when a code is not part of the corresponding table.
    pub fn into_star(self) -> Result<Star> {
        let star_type = self.star_type.parse()?;
        let luminosity = self.luminosity.parse()?;
        Ok(Star::new(
            self.designation,
            self.name,
            star_type,
            self.temperature_sequence,
            luminosity,
            self.absolute_magnitude,
            Coordinate::new(
                f64::from(self.radial_distance),
                f64::from(self.longitude),
                f64::from(self.latitude),
            ),
        ))
    }
}

/// Ordered list of star records loaded from a CSV source.
#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    records: Vec<StarRecord>,
    source: Option<PathBuf>,
}

/// Canonical field name -> accepted (normalized) header spellings.
const HEADER_SYNONYMS: &[(&str, &[&str])] = &[
    ("designation", &["designation", "id"]),
    ("name", &["name", "propername"]),
    ("star_type", &["startype", "type", "spectraltype"]),
    (
        "temperature_sequence",
        &["temperaturesequence", "sequence", "subclass"],
    ),
    ("luminosity", &["luminosityclass", "luminosity"]),
    (
        "absolute_magnitude",
        &["absolutemagnitude", "absmag", "magnitude"],
    ),
    ("radial_distance", &["distance", "radialdistance"]),
    ("longitude", &["longitude", "lon"]),
    ("latitude", &["latitude", "lat"]),
];

const REQUIRED_FIELDS: &[&str] = &[
    "designation",
    "star_type",
    "temperature_sequence",
    "luminosity",
    "absolute_magnitude",
    "radial_distance",
    "longitude",
    "latitude",
];

impl StarCatalog {
    /// Load a star catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DataFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            records = catalog.records.len(),
            "loaded star catalog"
        );
        Ok(catalog)
    }

    /// Load a star catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::StarDataValidation {
                message: format!("failed to read star catalog headers: {err}"),
            })?
            .clone();
        let columns = resolve_columns(&headers)?;

        let mut records = Vec::new();
        // header is line 1
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let raw = result?;
            records.push(parse_record(&raw, &columns, row)?);
        }

        Ok(Self {
            records,
            source: None,
        })
    }

    pub fn records(&self) -> &[StarRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StarRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize a header for robust matching.
fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn resolve_columns(headers: &StringRecord) -> Result<BTreeMap<&'static str, usize>> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

    let mut columns = BTreeMap::new();
    for (canonical, spellings) in HEADER_SYNONYMS {
        let position = spellings
            .iter()
            .find_map(|spelling| normalized.iter().position(|h| h.as_str() == *spelling));
        if let Some(index) = position {
            columns.insert(*canonical, index);
        }
    }

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !columns.contains_key(field))
        .collect();

    if !missing.is_empty() {
        return Err(Error::StarDataValidation {
            message: format!(
                "star catalog missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }

    Ok(columns)
}

fn parse_record(
    raw: &StringRecord,
    columns: &BTreeMap<&'static str, usize>,
    row: usize,
) -> Result<StarRecord> {
    let text = |field: &str| -> String {
        columns
            .get(field)
            .and_then(|&i| raw.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };
    let number = |field: &str| -> Result<f32> { parse_finite(&text(field), field, row) };

    let designation = text("designation");
    if designation.is_empty() {
        return Err(Error::InvalidRecord {
            row,
            message: "designation must not be empty".to_string(),
        });
    }

    Ok(StarRecord {
        name: text("name"),
        star_type: text("star_type"),
        temperature_sequence: parse_number(
            &text("temperature_sequence"),
            "temperature_sequence",
            row,
        )?,
        luminosity: text("luminosity"),
        absolute_magnitude: number("absolute_magnitude")?,
        radial_distance: number("radial_distance")?,
        longitude: number("longitude")?,
        latitude: number("latitude")?,
        designation,
    })
}

fn parse_number<T>(value: &str, field: &str, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|err| Error::InvalidRecord {
        row,
        message: format!("invalid {field} '{value}': {err}"),
    })
}

/// Parse a float, rejecting `NaN` and infinities.
fn parse_finite(value: &str, field: &str, row: usize) -> Result<f32> {
    let number: f32 = parse_number(value, field, row)?;
    if !number.is_finite() {
        return Err(Error::InvalidRecord {
            row,
            message: format!("invalid {field} '{value}': value must be finite"),
        });
    }
    Ok(number)
}
