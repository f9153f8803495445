//! Key/value lookup seams for environment variables and build properties.
//!
//! Content generation and tool resolution read from a [`Lookup`] rather than
//! from the process environment directly, so tests can pass plain maps.

use std::collections::{BTreeMap, HashMap};

/// Read-only string lookup by key.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl Lookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// The environment of the current process.
///
/// Variables whose value is not valid Unicode are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Lookup for ProcessEnvironment {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
