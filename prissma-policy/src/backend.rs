//! Persistence boundary
//!
//! The core performs no transport itself - no retries, batching, or
//! backpressure. A collaborator implements this trait over whatever store
//! holds the policy documents; the core hands it exactly the Turtle text the
//! indexed graph yields and parses back exactly what it returns.

use crate::Result;
use async_trait::async_trait;

/// Backing store for serialized policy documents
#[async_trait]
pub trait PolicyBackend: Send + Sync {
    /// Persist a serialized policy document
    async fn save(&self, document: &str) -> Result<()>;

    /// Fetch a policy document by its URI
    async fn load(&self, uri: &str) -> Result<String>;
}
