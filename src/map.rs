//! The static map backend: an owned option set, optionally mutable.

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::store::OptionStore;

/// Value normalization hook applied by [`MapStore::set`]. Receives the
/// option name and the proposed value; returns the (possibly rewritten)
/// value to store, or a rejection reason.
pub type Normalizer = dyn Fn(&str, Value) -> Result<Value, String> + Send + Sync;

/// An [`OptionStore`] backed by an owned `serde_json::Map`.
///
/// Presence is decided by the map alone: a key mapped to `Value::Null` is
/// set, and `get` returns `Null` for it rather than failing. Stores are
/// usually seeded once, via [`from_map`](MapStore::from_map),
/// `FromIterator`, or [`from_serialize`](MapStore::from_serialize), and
/// read for the rest of their life; [`set`](MapStore::set) is there for
/// the mutable cases.
#[derive(Default)]
pub struct MapStore {
    options: Map<String, Value>,
    normalizer: Option<Box<Normalizer>>,
}

impl std::fmt::Debug for MapStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapStore")
            .field("options", &self.options)
            .field("normalizer", &self.normalizer.as_ref().map(|_| "..."))
            .finish()
    }
}

impl MapStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded from an existing option mapping.
    pub fn from_map(options: Map<String, Value>) -> Self {
        MapStore {
            options,
            normalizer: None,
        }
    }

    /// A store seeded from any `Serialize` type that serializes to a JSON
    /// object (a plain settings struct, a `HashMap`, ...).
    pub fn from_serialize<T: serde::Serialize>(options: &T) -> Result<Self, ConfigError> {
        let value = serde_json::to_value(options)
            .map_err(|e| ConfigError::runtime("could not serialize options", e.into()))?;
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ConfigError::InvalidOption {
                key: "<root>".into(),
                reason: format!("options must serialize to an object, got {other}"),
            }),
        }
    }

    /// Install a normalization hook for subsequent [`set`](MapStore::set)
    /// calls. Normalization is a capability of this backend, not part of
    /// the [`OptionStore`] contract.
    pub fn with_normalizer(
        mut self,
        normalizer: impl Fn(&str, Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        self.normalizer = Some(Box::new(normalizer));
        self
    }

    /// Insert or overwrite an option.
    ///
    /// If a normalizer is installed the value passes through it first; a
    /// rejection fails with [`ConfigError::InvalidOption`] and leaves the
    /// store untouched.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), ConfigError> {
        let value = match &self.normalizer {
            Some(normalize) => {
                normalize(name, value).map_err(|reason| ConfigError::InvalidOption {
                    key: name.into(),
                    reason,
                })?
            }
            None => value,
        };
        self.options.insert(name.to_string(), value);
        Ok(())
    }

    /// Number of options in the store.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the store holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<(String, Value)> for MapStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl OptionStore for MapStore {
    fn lookup(&self, name: &str, fallback: Option<&Value>) -> Result<Value, ConfigError> {
        match self.options.get(name) {
            Some(value) => Ok(value.clone()),
            None => match fallback {
                Some(value) => Ok(value.clone()),
                None => Err(ConfigError::MissingOption(name.to_string())),
            },
        }
    }

    // Same existence test as lookup, without cloning the value.
    fn has(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }
}
