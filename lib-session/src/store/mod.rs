#[cfg(not(target_family = "wasm"))]
mod file;
#[cfg(target_family = "wasm")]
mod web;

#[cfg(not(target_family = "wasm"))]
pub use file::*;
#[cfg(target_family = "wasm")]
pub use web::*;

use hashbrown::HashMap;
use log::warn;

/// The store the session should use on the current platform.
#[cfg(not(target_family = "wasm"))]
pub type PlatformStore = FileStore;
#[cfg(target_family = "wasm")]
pub type PlatformStore = LocalStorage;

/// A synchronous string key-value store that outlives the session.
pub trait KvStore {
    /// Returns [Option::None] if there is nothing under `key`.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value)
    }
}

/// A store that forgets everything once dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Turn a stored high score back into a number. Anything that is
/// not a non-negative decimal integer counts as no high score at all.
pub fn parse_high_score(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };

    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => value,
        Ok(value) => {
            warn!("Stored high score is negative ({value}), ignoring it");
            0
        }
        Err(e) => {
            warn!("Stored high score {raw:?} is not a number ({e}), ignoring it");
            0
        }
    }
}
