use crate::types::{FetchedRecord, ObjectId, Result};
use async_trait::async_trait;

/// Trait for anything that can serve the museum catalog (the live API, fixtures, etc.)
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Human-readable name for this source
    fn source_name(&self) -> String;

    /// The full identifier collection, in catalog order
    async fn object_ids(&self) -> Result<Vec<ObjectId>>;

    /// Fetch the metadata record for a single object
    async fn object(&self, id: ObjectId) -> Result<FetchedRecord>;
}
