#![allow(dead_code)]

use lib_session::{KvStore, MemoryStore};

/// Surface `log` output of the library in the test report.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An in-memory store that remembers every write it received.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inner: MemoryStore,
    pub writes: Vec<(String, String)>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            inner: [(key, value)].into_iter().collect(),
            writes: Vec::new(),
        }
    }

    pub fn written_values(&self) -> Vec<&str> {
        self.writes.iter().map(|(_, v)| v.as_str()).collect()
    }
}

impl KvStore for RecordingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.writes.push((key.to_owned(), value.to_owned()));
        self.inner.set(key, value)
    }
}

/// A store whose writes always fail, like a browser over its quota.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub attempts: usize,
}

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> anyhow::Result<()> {
        self.attempts += 1;
        anyhow::bail!("quota exceeded while writing {key:?}")
    }
}
