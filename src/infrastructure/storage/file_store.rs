//! JSON-file token store, the on-disk counterpart of browser local storage.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::ports::TokenStore;
use crate::error::StoreResult;

/// Default location of the token file, relative to the working directory.
pub const DEFAULT_TOKEN_FILE: &str = ".dashboard-login/tokens.json";

/// Stores tokens as a flat JSON object in a single file.
///
/// Every `set` rewrites the whole file through a per-process sibling temp file
/// followed by a rename, so readers never observe a half-written document. Keys written by
/// other tools are preserved. A missing file reads as an empty store.
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_vec_pretty(entries)?;
        let tmp = self.tmp_path();

        let written = match tokio::fs::write(&tmp, contents).await {
            Ok(()) => tokio::fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await
                && cleanup.kind() != ErrorKind::NotFound
            {
                debug!(path = %tmp.display(), error = %cleanup, "Failed to remove temp token file");
            }
            return Err(e.into());
        }

        Ok(())
    }

    /// Sibling temp file, unique per process.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(format!(".{}.tmp", std::process::id()));
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await?;

        debug!(key, path = %self.path.display(), "Token file updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("dashboard-login-{}-{n}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let store = FileTokenStore::new(scratch_path("tokens.json"));

        assert_eq!(store.get("access_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_parent_and_persists() {
        let path = scratch_path("nested/tokens.json");
        let store = FileTokenStore::new(&path);

        store.set("access_token", "A").await.unwrap();
        store.set("refresh_token", "R").await.unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(
            reopened.get("access_token").await.unwrap().as_deref(),
            Some("A")
        );
        assert_eq!(
            reopened.get("refresh_token").await.unwrap().as_deref(),
            Some("R")
        );
    }

    #[tokio::test]
    async fn test_set_overwrites_and_keeps_other_keys() {
        let path = scratch_path("tokens.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"theme":"dark","access_token":"old"}"#).unwrap();

        let store = FileTokenStore::new(&path);
        store.set("access_token", "new").await.unwrap();

        assert_eq!(store.get("access_token").await.unwrap().as_deref(), Some("new"));
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let path = scratch_path("tokens.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);

        assert!(matches!(
            store.get("access_token").await,
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_tmp_path_is_per_process_sibling() {
        let path = scratch_path("tokens.json");
        let store = FileTokenStore::new(&path);

        let tmp = store.tmp_path();

        assert_eq!(tmp.parent(), path.parent());
        assert_ne!(tmp, path);
        assert!(
            tmp.to_string_lossy()
                .ends_with(&format!(".{}.tmp", std::process::id()))
        );
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        // A directory in place of the token file makes the rename fail.
        let path = scratch_path("tokens.json");
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        let store = FileTokenStore::new(&path);
        let mut entries = BTreeMap::new();
        entries.insert("access_token".to_string(), "A".to_string());

        assert!(matches!(store.save(&entries).await, Err(StoreError::Io(_))));
        assert!(!store.tmp_path().exists());
    }
}
