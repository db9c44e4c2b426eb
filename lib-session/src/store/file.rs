use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};

use super::KvStore;

/// A store kept in a RON file. The whole map is rewritten
/// on every [KvStore::set] into a sibling temporary file which
/// then replaces the old one.
///
/// The file looks like this:
/// ```text
/// {
///     "highScore": "60",
/// }
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or broken file gives an
    /// empty store, so this never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Starting with an empty store: {e:#}");
                BTreeMap::new()
            }
        };
        info!("Opened store {path:?} ({} entries)", entries.len());

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> anyhow::Result<BTreeMap<String, String>> {
        let src = match std::fs::read_to_string(path) {
            Ok(src) => src,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e).with_context(|| format!("reading store {path:?}")),
        };
        let entries = ron::from_str(&src).with_context(|| format!("parsing store {path:?}"))?;

        Ok(entries)
    }

    fn flush(&self) -> anyhow::Result<()> {
        let src = ron::ser::to_string_pretty(&self.entries, ron::ser::PrettyConfig::default())?;
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating store directory {dir:?}"))?;

        // The old file stays intact until the new one is complete
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("creating a temporary file in {dir:?}"))?;
        tmp.write_all(src.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .with_context(|| format!("writing store {:?}", tmp.path()))?;
        tmp.persist(&self.path)
            .with_context(|| format!("replacing store {:?}", self.path))?;

        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }
}
