use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::Mutex};

use crate::errors::AppResult;

/// A collection persisted as one top-level JSON array.
///
/// Every write rewrites the whole file. Read-modify-write cycles made through
/// [`JsonStore::update`] are serialized by a per-collection mutex, and the new
/// contents land in a temporary sibling that is renamed over the target, so a
/// reader only ever sees a complete array. Nothing coordinates separate
/// processes sharing the same file.
pub struct JsonStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file has never been written.
    pub async fn load(&self) -> AppResult<Option<Vec<T>>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                log::error!("read {:?}: {}", self.path, e);
                return Err(e.into());
            }
        };

        let records = serde_json::from_str(&contents).map_err(|e| {
            log::error!("couldn't parse {:?}: {}", self.path, e);
            e
        })?;

        Ok(Some(records))
    }

    /// Loads the collection (empty if absent), applies `mutate` and writes the
    /// result back. Nothing is written if `mutate` fails.
    pub async fn update<F, R>(&self, mutate: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> AppResult<R> + Send,
        R: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?.unwrap_or_default();
        let outcome = mutate(&mut records)?;
        self.save(&records).await?;

        Ok(outcome)
    }

    async fn save(&self, records: &[T]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let staging = self.staging_path();

        fs::write(&staging, json).await.map_err(|e| {
            log::error!("write {:?}: {}", staging, e);
            e
        })?;
        fs::rename(&staging, &self.path).await?;

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
