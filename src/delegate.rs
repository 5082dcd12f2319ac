//! The delegating backend: forwards lookups to a caller-supplied closure
//! and normalizes whatever errors come back.

use serde_json::Value;

use crate::error::ConfigError;
use crate::store::OptionStore;

/// The closure type a [`DelegateStore`] wraps. It receives the option name
/// and the fallback exactly as given to [`OptionStore::lookup`] — `None`
/// still means "no fallback given" — and may fail with any error.
pub type Delegate = dyn Fn(&str, Option<&Value>) -> anyhow::Result<Value> + Send + Sync;

/// An [`OptionStore`] that delegates every lookup to an external getter.
///
/// The store itself adds nothing to the lookup semantics; its job is the
/// error contract. A delegate failure that is already a [`ConfigError`]
/// passes through unchanged (a delegate is allowed to speak our taxonomy,
/// e.g. to report a missing option). Anything else is wrapped into
/// [`ConfigError::Runtime`] so callers never observe a foreign error type.
pub struct DelegateStore {
    getter: Box<Delegate>,
}

impl DelegateStore {
    pub fn new(
        getter: impl Fn(&str, Option<&Value>) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) -> Self {
        DelegateStore {
            getter: Box::new(getter),
        }
    }
}

impl OptionStore for DelegateStore {
    fn lookup(&self, name: &str, fallback: Option<&Value>) -> Result<Value, ConfigError> {
        (self.getter)(name, fallback).map_err(|err| match err.downcast::<ConfigError>() {
            Ok(ours) => ours,
            Err(foreign) => {
                ConfigError::runtime(format!("could not fetch option '{name}'"), foreign)
            }
        })
    }
}
