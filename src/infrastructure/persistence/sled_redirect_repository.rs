//! sled implementation of the redirect repository.

use async_trait::async_trait;
use sled::{Batch, Db, IVec, Tree};
use std::path::Path;
use tracing::{debug, info};

use crate::domain::repositories::RedirectRepository;
use crate::error::StoreError;

/// Handle to the on-disk redirect store.
///
/// Opened once at startup by process-level setup and passed explicitly to
/// whatever needs a bucket. Buckets map to sled trees.
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Opens (or creates) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the files cannot be opened or are
    /// locked by another process.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let db = sled::open(path)?;
        info!("Opened redirect store at {}", path.display());
        Ok(Self { db })
    }

    /// Opens a store that lives only as long as this handle.
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Opens the named bucket, creating it if needed.
    pub fn bucket(&self, name: &str) -> Result<SledRedirectRepository, StoreError> {
        let tree = self.db.open_tree(name)?;
        debug!("Opened bucket {}", name);
        Ok(SledRedirectRepository::new(tree))
    }

    /// Removes the named bucket and everything in it.
    ///
    /// Returns `Ok(false)` if the bucket did not exist.
    pub fn drop_bucket(&self, name: &str) -> Result<bool, StoreError> {
        let dropped = self.db.drop_tree(name)?;
        if dropped {
            info!("Dropped bucket {}", name);
        }
        Ok(dropped)
    }

    /// Flushes pending writes and releases the handle.
    pub fn close(self) -> Result<(), StoreError> {
        let bytes = self.db.flush()?;
        debug!("Flushed {} bytes to redirect store", bytes);
        Ok(())
    }
}

/// Repository over one sled tree.
///
/// Cloning is cheap and clones share the same tree. sled reads are atomic per
/// key, so concurrent lookups never observe a partially written URL.
#[derive(Clone)]
pub struct SledRedirectRepository {
    tree: Tree,
}

impl SledRedirectRepository {
    pub fn new(tree: Tree) -> Self {
        Self { tree }
    }

    /// Writes every pair in one atomic batch.
    pub fn seed<'a, I>(&self, entries: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut batch = Batch::default();
        let mut count = 0;
        for (path, url) in entries {
            batch.insert(path.as_bytes(), url.as_bytes());
            count += 1;
        }
        self.tree.apply_batch(batch)?;
        info!("Seeded {} redirects", count);
        Ok(count)
    }

    fn decode(path: &str, value: IVec) -> Result<String, StoreError> {
        String::from_utf8(value.to_vec()).map_err(|_| StoreError::InvalidValue {
            path: path.to_string(),
        })
    }
}

#[async_trait]
impl RedirectRepository for SledRedirectRepository {
    async fn find(&self, path: &str) -> Result<Option<String>, StoreError> {
        self.tree
            .get(path.as_bytes())?
            .map(|value| Self::decode(path, value))
            .transpose()
    }

    async fn save(&self, path: &str, url: &str) -> Result<Option<String>, StoreError> {
        self.tree
            .insert(path.as_bytes(), url.as_bytes())?
            .map(|old| Self::decode(path, old))
            .transpose()
    }

    async fn remove(&self, path: &str) -> Result<bool, StoreError> {
        Ok(self.tree.remove(path.as_bytes())?.is_some())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.tree.len())
    }
}
