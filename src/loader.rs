//! Loader composition: turn an externally loaded record into a store.
//!
//! Record loading — resolving locations, media types, file formats — is a
//! collaborator concern behind the [`RecordLoader`] trait. This module
//! owns only the boundary: call the loader, wrap its failures into
//! [`ConfigError::Runtime`], and seed a [`MapStore`] from the record.
//! [`JsonFileLoader`] is the built-in collaborator for the common case of
//! a JSON file on disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::map::MapStore;

/// A service that loads a flat record of options from a location.
///
/// `type_hint` is an optional media type for loaders that dispatch on it;
/// a loader that only speaks one format should reject hints it does not
/// recognize rather than guess.
pub trait RecordLoader {
    fn load_record(
        &self,
        location: &str,
        type_hint: Option<&str>,
    ) -> anyhow::Result<Map<String, Value>>;
}

/// Builds [`MapStore`]s by delegating record retrieval to a [`RecordLoader`].
pub struct ConfigLoader<L: RecordLoader> {
    loader: L,
}

impl ConfigLoader<JsonFileLoader> {
    /// A loader over JSON files on disk, the built-in collaborator.
    pub fn json_files() -> Self {
        ConfigLoader::new(JsonFileLoader)
    }
}

impl<L: RecordLoader> ConfigLoader<L> {
    pub fn new(loader: L) -> Self {
        ConfigLoader { loader }
    }

    /// Load the record at `location` and seed a store from it.
    ///
    /// Any loader failure surfaces as [`ConfigError::Runtime`] naming the
    /// location, with the loader's error as the source.
    pub fn load(&self, location: &str, type_hint: Option<&str>) -> Result<MapStore, ConfigError> {
        let record = self
            .loader
            .load_record(location, type_hint)
            .map_err(|err| {
                ConfigError::runtime(format!("could not load config from '{location}'"), err)
            })?;
        Ok(MapStore::from_map(record))
    }
}

/// Media type accepted by [`JsonFileLoader`] (besides no hint at all).
pub const MEDIA_TYPE_JSON: &str = "application/json";

/// A [`RecordLoader`] that reads a JSON object from a file path.
pub struct JsonFileLoader;

impl RecordLoader for JsonFileLoader {
    fn load_record(
        &self,
        location: &str,
        type_hint: Option<&str>,
    ) -> anyhow::Result<Map<String, Value>> {
        if let Some(hint) = type_hint {
            anyhow::ensure!(hint == MEDIA_TYPE_JSON, "unsupported media type '{hint}'");
        }

        let text = fs::read_to_string(Path::new(location))
            .with_context(|| format!("could not read '{location}'"))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("could not parse '{location}' as JSON"))?;

        match value {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!("expected a JSON object at '{location}', got {other}"),
        }
    }
}
