use serde::{Deserialize, Serialize};

/// One entry of the post log: the dog id a caller posted about and when, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub timestamp: i64,
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 0,
            timestamp: 12,
        },
        Post {
            id: 1,
            timestamp: 10,
        },
    ]
}
