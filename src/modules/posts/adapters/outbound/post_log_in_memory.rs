// In memory implementation of the PostLog port.
//
// Append only: entries are never updated or removed.

use crate::modules::posts::core::post::{Post, seed_posts};
use crate::modules::posts::core::post_log_port::PostLog;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPostLog {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            posts: RwLock::new(seed_posts()),
        }
    }
}

#[async_trait::async_trait]
impl PostLog for InMemoryPostLog {
    async fn append(&self, id: i64, now: i64) -> Post {
        let post = Post { id, timestamp: now };
        let mut guard = self.posts.write().await;
        guard.push(post);
        tracing::info!(id, timestamp = now, len = guard.len(), "post appended");
        post
    }

    async fn entries(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }
}

#[cfg(test)]
mod post_in_memory_log_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_start_with_the_seeded_posts() {
        let log = InMemoryPostLog::seeded();
        assert_eq!(log.entries().await, seed_posts());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_at_the_end_and_keep_prior_entries() {
        let log = InMemoryPostLog::seeded();
        let before = log.entries().await;

        let post = log.append(5, 1_700_000_000).await;
        assert_eq!(
            post,
            Post {
                id: 5,
                timestamp: 1_700_000_000
            }
        );

        let after = log.entries().await;
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], before.as_slice());
        assert_eq!(after.last(), Some(&post));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_ids_that_repeat_or_match_no_dog() {
        let log = InMemoryPostLog::new();
        log.append(-3, 1).await;
        log.append(-3, 2).await;
        assert_eq!(
            log.entries().await,
            vec![
                Post { id: -3, timestamp: 1 },
                Post { id: -3, timestamp: 2 }
            ]
        );
    }
}
