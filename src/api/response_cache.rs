use crate::api::endpoint::Endpoint;
use crate::api::error::ApiError;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CacheEntry {
    url: String,
    body: String,
}

/// On-disk store of raw response bodies, one file per request.
///
/// Bodies are stored before JSON repair and parsing, so a cached response goes
/// through exactly the same decoding as a fresh one.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    cache_dir: PathBuf,
}

impl ResponseCache {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn path_for(&self, endpoint: Endpoint, key: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}{}.bin", endpoint.cache_file_prefix(), key))
    }

    /// Returns the cached body for this request, or `None` on a cache miss.
    pub async fn read(&self, endpoint: Endpoint, key: &str) -> Result<Option<String>, ApiError> {
        let path = self.path_for(endpoint, key);
        if tokio::fs::metadata(&path).await.is_err() {
            return Ok(None);
        }
        debug!("Cache hit for {} at {:?}", endpoint, path);
        let entry = task::spawn_blocking(move || {
            let bytes =
                std::fs::read(&path).map_err(|e| ApiError::CacheRead(path.clone(), e))?;
            let (entry, _) =
                bincode::serde::decode_from_slice::<CacheEntry, _>(&bytes, BINCODE_CONFIG)
                    .map_err(|e| ApiError::CacheDecode(path, Box::new(e)))?;
            Ok::<CacheEntry, ApiError>(entry)
        })
        .await??;
        Ok(Some(entry.body))
    }

    /// Stores a response body. The file is written to a temporary name and renamed into
    /// place, so concurrent readers never see a partial entry.
    pub async fn write(
        &self,
        endpoint: Endpoint,
        key: &str,
        url: &str,
        body: &str,
    ) -> Result<(), ApiError> {
        let path = self.path_for(endpoint, key);
        let cache_dir = self.cache_dir.clone();
        let entry = CacheEntry {
            url: url.to_string(),
            body: body.to_string(),
        };
        let written_path = path.clone();
        task::spawn_blocking(move || {
            std::fs::create_dir_all(&cache_dir)
                .map_err(|e| ApiError::CacheDirCreation(cache_dir.clone(), e))?;
            let bytes = bincode::serde::encode_to_vec(&entry, BINCODE_CONFIG)
                .map_err(|e| ApiError::CacheEncode(Box::new(e)))?;
            let mut temp_file = NamedTempFile::new_in(&cache_dir)
                .map_err(|e| ApiError::CacheWrite(path.clone(), e))?;
            temp_file
                .write_all(&bytes)
                .map_err(|e| ApiError::CacheWrite(path.clone(), e))?;
            temp_file
                .persist(&path)
                .map_err(|e| ApiError::CacheWrite(path.clone(), e.error))?;
            Ok::<(), ApiError>(())
        })
        .await??;
        info!("Cached {} response to {:?}", endpoint, written_path);
        Ok(())
    }
}
