// File: crates/wxline-core/src/dataset.rs
// Summary: Typed weather dataset (location + observations) with JSON and CSV loaders.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::DatasetError;
use crate::field::FieldSelector;

/// One timestamped set of readings. Any reading may be absent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Observation {
    pub time: DateTime<Utc>,
    #[serde(default, deserialize_with = "finite_reading")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "finite_reading")]
    pub dewpoint: Option<f64>,
    #[serde(default, deserialize_with = "finite_reading")]
    pub visibility: Option<f64>,
}

/// Optional reading that must be a finite number when present.
fn finite_reading<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<f64>::deserialize(deserializer)? {
        Some(v) if !v.is_finite() => {
            Err(serde::de::Error::custom(format!("non-finite reading {v}")))
        }
        other => Ok(other),
    }
}

impl Observation {
    pub fn new(
        time: DateTime<Utc>,
        temperature: Option<f64>,
        dewpoint: Option<f64>,
        visibility: Option<f64>,
    ) -> Self {
        Self { time, temperature, dewpoint, visibility }
    }

    /// Reading selected by `field`, if present.
    #[inline]
    pub fn value(&self, field: FieldSelector) -> Option<f64> {
        match field {
            FieldSelector::Temperature => self.temperature,
            FieldSelector::Dewpoint => self.dewpoint,
            FieldSelector::Visibility => self.visibility,
        }
    }
}

/// Location label plus its ordered observations. Read-only once loaded.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub location_name: String,
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(location_name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self { location_name: location_name.into(), observations }
    }

    pub fn len(&self) -> usize { self.observations.len() }

    pub fn is_empty(&self) -> bool { self.observations.is_empty() }

    /// Parse the `{ locationName, observations: [...] }` document.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })?;
        let dataset = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), observations = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Read `time,temperature,dewpoint,visibility` rows; empty cells load as absent readings.
    pub fn from_csv_reader<R: Read>(
        location_name: impl Into<String>,
        reader: R,
    ) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let observations = rdr
            .deserialize::<Observation>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(location_name, observations))
    }

    pub fn from_csv_path(
        location_name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })?;
        Self::from_csv_reader(location_name, file)
    }
}
