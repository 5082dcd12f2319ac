//! The retrieval contract shared by every backend.
//!
//! The whole crate revolves around one distinction: a lookup *without* a
//! fallback fails loudly for absent options, a lookup *with* a fallback
//! (even a `Null` one) never does. [`OptionStore::lookup`] encodes that
//! distinction in its `Option<&Value>` parameter; `get` and `get_or` are
//! the two call shapes most code wants.

use serde_json::Value;

use crate::error::ConfigError;

/// Read access to a flat set of named options.
///
/// Implementors provide [`lookup`](OptionStore::lookup); everything else
/// has a provided implementation in terms of it. A backend may override
/// [`has`](OptionStore::has) with a cheaper presence check, but the result
/// must agree with what `get` would do — same existence test, never a
/// truthiness test.
pub trait OptionStore {
    /// Look up `name`, applying `fallback` only when the option is absent.
    ///
    /// `fallback: None` means *no fallback was given*: an absent `name`
    /// fails with [`ConfigError::MissingOption`]. `Some(v)` means a
    /// fallback was given, and `v` is returned for absent names even when
    /// `v` is `Value::Null`. A present option always wins over the
    /// fallback, including when its stored value is `Value::Null`.
    fn lookup(&self, name: &str, fallback: Option<&Value>) -> Result<Value, ConfigError>;

    /// Get the value of `name`, failing with
    /// [`ConfigError::MissingOption`] if it is not set.
    fn get(&self, name: &str) -> Result<Value, ConfigError> {
        self.lookup(name, None)
    }

    /// Get the value of `name`, returning `fallback` if it is not set.
    ///
    /// Only absence triggers the fallback; invalid stored values or
    /// backend failures still surface as errors.
    fn get_or(&self, name: &str, fallback: &Value) -> Result<Value, ConfigError> {
        self.lookup(name, Some(fallback))
    }

    /// Whether a subsequent `get(name)` would succeed.
    ///
    /// The provided implementation probes via `get` and inspects the error
    /// kind: `MissingOption` is the expected outcome for absent names and
    /// becomes `false`. Any other kind signals a backend problem, not
    /// absence; it is logged at warn level before the method settles on
    /// `false`, so backend bugs are never masked silently.
    fn has(&self, name: &str) -> bool {
        match self.get(name) {
            Ok(_) => true,
            Err(err) if err.is_missing() => false,
            Err(err) => {
                log::warn!("unexpected error while probing option {name:?}: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A minimal backend exercising the provided trait methods: knows a
    /// single option and fails with a non-missing kind for one poison key.
    struct OneOption;

    impl OptionStore for OneOption {
        fn lookup(&self, name: &str, fallback: Option<&Value>) -> Result<Value, ConfigError> {
            match name {
                "answer" => Ok(json!(42)),
                "broken" => Err(ConfigError::InvalidOption {
                    key: name.into(),
                    reason: "stored data is malformed".into(),
                }),
                _ => match fallback {
                    Some(value) => Ok(value.clone()),
                    None => Err(ConfigError::MissingOption(name.into())),
                },
            }
        }
    }

    #[test]
    fn get_returns_stored_value() {
        assert_eq!(OneOption.get("answer").unwrap(), json!(42));
    }

    #[test]
    fn get_missing_fails() {
        let err = OneOption.get("nope").unwrap_err();
        assert!(matches!(err, ConfigError::MissingOption(name) if name == "nope"));
    }

    #[test]
    fn get_or_prefers_stored_value() {
        let value = OneOption.get_or("answer", &json!("fallback")).unwrap();
        assert_eq!(value, json!(42));
    }

    #[test]
    fn get_or_returns_fallback_for_missing() {
        let value = OneOption.get_or("nope", &json!("fallback")).unwrap();
        assert_eq!(value, json!("fallback"));
    }

    #[test]
    fn get_or_null_fallback_is_a_real_fallback() {
        let value = OneOption.get_or("nope", &Value::Null).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn has_true_for_present() {
        assert!(OneOption.has("answer"));
    }

    #[test]
    fn has_false_for_missing() {
        assert!(!OneOption.has("nope"));
    }

    #[test]
    fn has_false_for_non_missing_errors() {
        // The invalid kind is absorbed by policy (after logging), but
        // get() must still surface it precisely.
        assert!(!OneOption.has("broken"));
        let err = OneOption.get("broken").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
    }
}
