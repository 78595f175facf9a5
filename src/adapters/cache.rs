use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::utils::error::HoroscopeError;

/// 快取項目，寫入磁碟時即為一個 JSON 檔
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedResponse {
    key: String,
    stored_at: DateTime<Utc>,
    value: serde_json::Value,
}

/// 時鐘倒退導致的未來時間戳也視為過期
fn is_fresh(entry: &CachedResponse, ttl: Duration) -> bool {
    (Utc::now() - entry.stored_at)
        .to_std()
        .is_ok_and(|age| age < ttl)
}

fn entry_path(dir: &Path, key: &str) -> PathBuf {
    let digest = Sha256::digest(key.as_bytes());
    dir.join(format!("{}.json", hex::encode(digest)))
}

/// Response cache keyed by request identity.
///
/// Entries live in memory and, when a directory is configured, are also
/// written there as JSON files so that later processes can reuse them.
/// Anything older than the TTL is treated as missing. Disk failures are
/// logged and otherwise ignored; they never fail a request.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    dir: Option<PathBuf>,
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    /// 僅存在記憶體中的快取
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            dir: None,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// 同時寫入 `dir` 的快取，目錄在第一次寫入時建立
    pub fn with_dir(ttl: Duration, dir: PathBuf) -> Self {
        Self {
            dir: Some(dir),
            ..Self::new(ttl)
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                if is_fresh(entry, self.ttl) {
                    return Some(entry.value.clone());
                }
            }
        }

        // 過期項目在查詢時移除
        {
            let mut entries = self.entries.write().await;
            if entries
                .get(key)
                .is_some_and(|entry| !is_fresh(entry, self.ttl))
            {
                entries.remove(key);
            }
        }

        let dir = self.dir.as_deref()?;
        let entry = self.load(dir, key).await?;
        tracing::debug!("📂 Loaded cache entry from {}", dir.display());
        let value = entry.value.clone();
        self.entries.write().await.insert(key.to_string(), entry);
        Some(value)
    }

    pub async fn insert(&self, key: String, value: serde_json::Value) {
        let entry = CachedResponse {
            key: key.clone(),
            stored_at: Utc::now(),
            value,
        };

        if let Some(dir) = &self.dir {
            if let Err(e) = Self::store(dir, &entry).await {
                tracing::warn!("⚠️ Failed to write cache entry to {}: {}", dir.display(), e);
            }
        }

        let ttl = self.ttl;
        let mut entries = self.entries.write().await;
        entries.retain(|_, cached| is_fresh(cached, ttl));
        entries.insert(key, entry);
    }

    /// 記憶體中的項目數，不含僅存在磁碟上的項目
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();

        if let Some(dir) = &self.dir {
            if let Err(e) = Self::remove_entry_files(dir).await {
                tracing::warn!("⚠️ Failed to clear cache directory {}: {}", dir.display(), e);
            }
        }
    }

    async fn load(&self, dir: &Path, key: &str) -> Option<CachedResponse> {
        let path = entry_path(dir, key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("⚠️ Failed to read cache entry {}: {}", path.display(), e);
                return None;
            }
        };

        let entry = match serde_json::from_slice::<CachedResponse>(&bytes) {
            Ok(entry) if entry.key == key && is_fresh(&entry, self.ttl) => entry,
            Ok(entry) if entry.key != key => return None,
            Ok(_) => {
                Self::remove_file(&path).await;
                return None;
            }
            Err(e) => {
                tracing::warn!("⚠️ Discarding unreadable cache entry {}: {}", path.display(), e);
                Self::remove_file(&path).await;
                return None;
            }
        };
        Some(entry)
    }

    async fn store(dir: &Path, entry: &CachedResponse) -> Result<(), HoroscopeError> {
        tokio::fs::create_dir_all(dir).await?;
        let bytes = serde_json::to_vec(entry)?;
        tokio::fs::write(entry_path(dir, &entry.key), bytes).await?;
        Ok(())
    }

    async fn remove_file(path: &Path) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::debug!("Could not remove cache entry {}: {}", path.display(), e);
        }
    }

    async fn remove_entry_files(dir: &Path) -> std::io::Result<()> {
        let mut read_dir = match tokio::fs::read_dir(dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        while let Some(item) = read_dir.next_entry().await? {
            let path = item.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                tokio::fs::remove_file(&path).await?;
            }
        }
        Ok(())
    }
}
