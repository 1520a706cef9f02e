//! Persistent vector store backed by a data directory.
//!
//! [`PersistentVectorStore`] keeps the whole index in memory (same layout
//! as [`InMemoryVectorStore`](crate::InMemoryVectorStore)) and snapshots
//! each collection to `<data_dir>/<collection>.json` after every mutation.
//! All collection files found in the directory are loaded on
//! [`open`](PersistentVectorStore::open), so the index survives restarts.
//!
//! The store is a process-wide shared resource. Concurrent access from
//! multiple processes over the same directory is not coordinated; the
//! outcome of, say, deleting a collection while another process ingests
//! into it is unspecified.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::document::{Chunk, SearchResult};
use crate::error::{RagError, Result};
use crate::vectorstore::{VectorStore, rank_chunks};

/// A vector store persisted as one JSON snapshot file per collection.
pub struct PersistentVectorStore {
    data_dir: PathBuf,
    collections: RwLock<HashMap<String, HashMap<String, Chunk>>>,
}

impl PersistentVectorStore {
    /// Open a store over the given data directory, creating the directory
    /// if needed and loading every existing collection snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::VectorStoreError`] if the directory cannot be
    /// created or an existing snapshot cannot be read or parsed.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| Self::store_err(format!(
            "failed to create data directory '{}': {e}",
            data_dir.display()
        )))?;

        let mut collections = HashMap::new();
        let mut entries = tokio::fs::read_dir(&data_dir)
            .await
            .map_err(|e| Self::store_err(format!("failed to read data directory: {e}")))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Self::store_err(format!("failed to read data directory: {e}")))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            let chunks = Self::load_snapshot(&path).await?;
            info!(collection = %name, chunk_count = chunks.len(), "loaded collection snapshot");
            collections.insert(name, chunks);
        }

        Ok(Self { data_dir, collections: RwLock::new(collections) })
    }

    /// Return the data directory this store persists into.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn store_err(message: String) -> RagError {
        RagError::VectorStoreError { backend: "Persistent".to_string(), message }
    }

    fn snapshot_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    async fn load_snapshot(path: &Path) -> Result<HashMap<String, Chunk>> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            Self::store_err(format!("failed to read snapshot '{}': {e}", path.display()))
        })?;
        let chunks: Vec<Chunk> = serde_json::from_slice(&bytes).map_err(|e| {
            Self::store_err(format!("failed to parse snapshot '{}': {e}", path.display()))
        })?;
        Ok(chunks.into_iter().map(|c| (c.id.clone(), c)).collect())
    }

    /// Write a collection's current contents to its snapshot file.
    async fn write_snapshot(&self, collection: &str, chunks: &HashMap<String, Chunk>) -> Result<()> {
        let chunks: Vec<&Chunk> = chunks.values().collect();
        let bytes = serde_json::to_vec(&chunks)
            .map_err(|e| Self::store_err(format!("failed to serialize snapshot: {e}")))?;
        let path = self.snapshot_path(collection);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            Self::store_err(format!("failed to write snapshot '{}': {e}", path.display()))
        })?;
        debug!(collection, chunk_count = chunks.len(), "wrote collection snapshot");
        Ok(())
    }
}

#[async_trait]
impl VectorStore for PersistentVectorStore {
    async fn create_collection(&self, name: &str, _dimensions: usize) -> Result<()> {
        let mut collections = self.collections.write().await;
        if collections.contains_key(name) {
            return Ok(());
        }
        collections.insert(name.to_string(), HashMap::new());
        self.write_snapshot(name, &collections[name]).await
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections.remove(name);
        let path = self.snapshot_path(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Self::store_err(format!(
                    "failed to remove snapshot '{}': {e}",
                    path.display()
                )));
            }
        }
        info!(collection = name, "deleted collection");
        Ok(())
    }

    async fn upsert(&self, collection: &str, chunks: &[Chunk]) -> Result<()> {
        let mut collections = self.collections.write().await;
        let store = collections.get_mut(collection).ok_or_else(|| {
            Self::store_err(format!("collection '{collection}' does not exist"))
        })?;
        for chunk in chunks {
            store.insert(chunk.id.clone(), chunk.clone());
        }
        self.write_snapshot(collection, &collections[collection]).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<Chunk>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map(|c| c.values().cloned().collect()).unwrap_or_default())
    }

    async fn search(
        &self,
        collection: &str,
        embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<SearchResult>> {
        let collections = self.collections.read().await;
        let Some(store) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(rank_chunks(store.values(), embedding, top_k))
    }
}
