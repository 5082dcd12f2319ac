//! Flat key/value option stores with explicit fallback semantics.
//!
//! Optmap is a small configuration-access layer: one retrieval contract,
//! [`OptionStore`], and a handful of interchangeable backends. It does not
//! parse files, walk directory trees, or merge layers — it answers exactly
//! one question well: *what is the value of this option, and what should
//! happen when it isn't set?*
//!
//! ```
//! use optmap::{MapStore, OptionStore};
//! use serde_json::json;
//!
//! let store: MapStore = [
//!     ("host".to_string(), json!("localhost")),
//!     ("greeting".to_string(), json!(null)),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(store.get("host").unwrap(), json!("localhost"));
//! assert_eq!(store.get_or("port", &json!(8080)).unwrap(), json!(8080));
//! assert!(store.get("port").is_err());
//! assert!(store.has("greeting")); // set to null is still set
//! ```
//!
//! # The fallback contract
//!
//! The one genuinely subtle part of option retrieval is the difference
//! between "this option is unset, give me my default" and "this option is
//! unset, that's a bug". A `get(name, default)` signature where the
//! default may itself be null collapses the two and silently hides lookup
//! failures. Optmap keeps them apart at the type level:
//!
//! - [`get`](OptionStore::get) — no fallback exists. An absent name fails
//!   with [`ConfigError::MissingOption`].
//! - [`get_or`](OptionStore::get_or) — a fallback was given, and it is
//!   returned for absent names *whatever it is*, `Null` included.
//! - [`lookup`](OptionStore::lookup) — the primitive both desugar to,
//!   with the fallback as an explicit `Option<&Value>`. Backends implement
//!   only this.
//!
//! Presence is decided by the store, never by truthiness: an option set to
//! `Value::Null` is present, `get` returns `Null` for it, and
//! [`has`](OptionStore::has) says `true`.
//!
//! # Backends
//!
//! - [`MapStore`] — an owned map, seeded at construction and optionally
//!   mutated through [`set`](MapStore::set) (with an optional
//!   normalization hook that can reject values).
//! - [`DelegateStore`] — forwards lookups to a caller-supplied closure.
//!   Useful for bridging to an existing settings service or for test
//!   doubles. Its real job is error normalization: whatever the closure
//!   fails with, callers observe a [`ConfigError`].
//! - [`ConfigLoader`] — composes a [`RecordLoader`] (a collaborator that
//!   fetches a flat record from a location) into a ready `MapStore`.
//!   [`JsonFileLoader`] is the built-in collaborator for JSON files.
//!
//! # Errors
//!
//! All failures are [`ConfigError`]: `MissingOption` for absent names,
//! `InvalidOption` for values a backend's normalization rejects, and
//! `Runtime` wrapping anything unexpected from a delegate or loader.
//! `has` never errors; it logs unexpected kinds (via the `log` facade)
//! before reporting `false`, so a broken backend is visible in the logs
//! rather than masked as "not configured".
//!
//! Values are `serde_json::Value`, so anything `Serialize` can seed a
//! store via [`MapStore::from_serialize`]. Keys are plain case-sensitive
//! strings; dots and slashes in a name are just characters, not paths.

pub mod error;

mod delegate;
mod loader;
mod map;
mod store;

#[cfg(test)]
mod fixtures;

pub use delegate::{Delegate, DelegateStore};
pub use error::ConfigError;
pub use loader::{ConfigLoader, JsonFileLoader, RecordLoader, MEDIA_TYPE_JSON};
pub use map::{MapStore, Normalizer};
pub use store::OptionStore;
