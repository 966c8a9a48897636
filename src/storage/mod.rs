//! Aggregate snapshot persistence.
//!
//! The competition aggregate — teams plus the full match history — is one
//! consistency unit: read it whole, run the engine, write it whole back.
//! Writes route through a deep null-strip because the backing document store
//! rejects explicit nulls on optional fields (absence of a key is fine).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{Match, Team};

/// Errors that can occur during snapshot operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// The competition aggregate.
///
/// `fixtures` holds undecided/future matches and `results` decided ones, but
/// the split is advisory — a match may sit in the wrong array while its
/// status transitions, which is why the engine unions the two.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregate {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Match>,
    pub results: Vec<Match>,
}

/// Read an aggregate snapshot from a JSON file.
pub fn read_aggregate(path: &Path) -> Result<Aggregate, StorageError> {
    if !path.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write an aggregate snapshot, stripping null fields first.
///
/// This is a whole-file rewrite; concurrent writers must serialize their
/// read-compute-write cycles outside this function.
pub fn write_aggregate(path: &Path, aggregate: &Aggregate) -> Result<(), StorageError> {
    let value = strip_nulls(serde_json::to_value(aggregate)?);
    fs::write(path, serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

/// Deep-remove null object fields at any depth.
///
/// Array elements are recursed into but never removed, and empty arrays and
/// objects are kept as-is.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}
