use crate::traits::ArtworkSource;
use crate::types::{ObjectId, Result, ViewerError};
use std::ops::Range;
use std::sync::Arc;
use tracing::{error, info};

/// Identifiers eligible for random selection. Never changes after loading.
#[derive(Debug, Clone)]
pub struct IdentifierPool {
    ids: Arc<[ObjectId]>,
}

impl IdentifierPool {
    pub fn new(ids: Vec<ObjectId>) -> Self {
        Self { ids: ids.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Keep the entries at positions `range` of `catalog`, in catalog order.
    pub fn from_catalog(catalog: &[ObjectId], range: Range<usize>) -> Self {
        let start = range.start.min(catalog.len());
        let end = range.end.clamp(start, catalog.len());
        Self {
            ids: catalog[start..end].into(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ObjectId> {
        self.ids.get(index).copied()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    pub fn as_slice(&self) -> &[ObjectId] {
        &self.ids
    }
}

impl Default for IdentifierPool {
    fn default() -> Self {
        Self::empty()
    }
}

/// Fetch the catalog once and narrow it to the pool range.
///
/// A missing `objectIDs` field or any transport/parse problem comes back as
/// [`ViewerError::PoolLoadFailure`]; callers fall back to an empty pool.
pub async fn load_pool(source: &dyn ArtworkSource, range: Range<usize>) -> Result<IdentifierPool> {
    info!("Loading object IDs from {}", source.source_name());

    let catalog = source.object_ids().await.map_err(|e| {
        error!("Failed to load object IDs: {}", e);
        ViewerError::PoolLoadFailure(e.to_string())
    })?;

    let pool = IdentifierPool::from_catalog(&catalog, range.clone());
    info!(
        "Pool holds {} of {} catalog entries (positions {}..{})",
        pool.len(),
        catalog.len(),
        range.start,
        range.end
    );

    Ok(pool)
}
