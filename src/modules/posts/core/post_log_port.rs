use crate::modules::posts::core::post::Post;
use async_trait::async_trait;

#[async_trait]
pub trait PostLog: Send + Sync {
    /// Appends `Post { id, timestamp: now }`. The caller reads the clock.
    async fn append(&self, id: i64, now: i64) -> Post;

    async fn entries(&self) -> Vec<Post>;
}
