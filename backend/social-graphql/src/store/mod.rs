//! In-memory social graph store
//!
//! Holds users, posts and comments behind one async `RwLock`. The store is
//! injected into the GraphQL schema as context data, so every test can build
//! its own isolated instance.
//!
//! Lookups are linear scans over insertion-ordered vectors. New posts and
//! comments get the collection length as their id; nothing is ever removed,
//! so ids stay unique. Assignment and append happen under the same write
//! guard.

pub mod models;
pub mod seed;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

pub use models::{
    CommentRecord, Dataset, NewComment, NewPost, PostRecord, StoreStats, UserRecord,
};

#[derive(Clone, Debug)]
pub struct SocialStore {
    data: Arc<RwLock<Dataset>>,
}

impl Default for SocialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialStore {
    /// Store seeded with the mock dataset
    pub fn new() -> Self {
        Self::from_dataset(seed::dataset())
    }

    /// Store with no records
    pub fn empty() -> Self {
        Self::from_dataset(Dataset::default())
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            data: Arc::new(RwLock::new(dataset)),
        }
    }

    pub async fn stats(&self) -> StoreStats {
        let data = self.data.read().await;
        StoreStats {
            users: data.users.len(),
            posts: data.posts.len(),
            comments: data.comments.len(),
        }
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub async fn user(&self, id: &str) -> Option<UserRecord> {
        let data = self.data.read().await;
        data.users.iter().find(|user| user.id == id).cloned()
    }

    /// Batch lookup; ids without a record are absent from the map
    pub async fn users_by_ids(&self, ids: &[String]) -> HashMap<String, UserRecord> {
        let data = self.data.read().await;
        data.users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .map(|user| (user.id.clone(), user.clone()))
            .collect()
    }

    /// Case-insensitive substring match on the user name
    pub async fn users_by_name(&self, name: &str) -> Vec<UserRecord> {
        let needle = name.to_lowercase();
        let data = self.data.read().await;
        data.users
            .iter()
            .filter(|user| user.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    pub async fn post(&self, id: &str) -> Option<PostRecord> {
        let data = self.data.read().await;
        data.posts.iter().find(|post| post.id == id).cloned()
    }

    /// Batch lookup; ids without a record are absent from the map
    pub async fn posts_by_ids(&self, ids: &[String]) -> HashMap<String, PostRecord> {
        let data = self.data.read().await;
        data.posts
            .iter()
            .filter(|post| ids.contains(&post.id))
            .map(|post| (post.id.clone(), post.clone()))
            .collect()
    }

    pub async fn posts(&self) -> Vec<PostRecord> {
        self.data.read().await.posts.clone()
    }

    pub async fn posts_by_author(&self, author_id: &str) -> Vec<PostRecord> {
        let data = self.data.read().await;
        data.posts
            .iter()
            .filter(|post| post.author_id == author_id)
            .cloned()
            .collect()
    }

    pub async fn add_post(&self, new_post: NewPost) -> PostRecord {
        let mut data = self.data.write().await;
        let post = PostRecord {
            id: data.posts.len().to_string(),
            title: new_post.title,
            content: new_post.content,
            author_id: new_post.author_id,
            likes: Vec::new(),
        };
        data.posts.push(post.clone());

        info!(post_id = %post.id, author_id = %post.author_id, "Post created");
        post
    }

    /// Adds `user_id` to the post's likes unless it is already there.
    /// Returns `None` (and changes nothing) when the post does not exist.
    pub async fn like_post(&self, post_id: &str, user_id: &str) -> Option<PostRecord> {
        let mut data = self.data.write().await;
        let post = data.posts.iter_mut().find(|post| post.id == post_id)?;

        if post.likes.iter().any(|id| id == user_id) {
            debug!(post_id, user_id, "Post already liked by user");
        } else {
            post.likes.push(user_id.to_string());
            info!(post_id, user_id, like_count = post.likes.len(), "Post liked");
        }

        Some(post.clone())
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    pub async fn comments_for_post(&self, post_id: &str) -> Vec<CommentRecord> {
        let data = self.data.read().await;
        data.comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect()
    }

    pub async fn add_comment(&self, new_comment: NewComment) -> CommentRecord {
        let mut data = self.data.write().await;
        let comment = CommentRecord {
            id: data.comments.len().to_string(),
            content: new_comment.content,
            author_id: new_comment.author_id,
            post_id: new_comment.post_id,
        };
        data.comments.push(comment.clone());

        info!(
            comment_id = %comment.id,
            post_id = %comment.post_id,
            author_id = %comment.author_id,
            "Comment created"
        );
        comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str, author_id: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: format!("{} content", title),
            author_id: author_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_store_stats() {
        let store = SocialStore::new();
        let stats = store.stats().await;

        assert_eq!(
            stats,
            StoreStats {
                users: 4,
                posts: 3,
                comments: 3
            }
        );
        assert_eq!(SocialStore::empty().stats().await.users, 0);
    }

    #[tokio::test]
    async fn test_user_lookup() {
        let store = SocialStore::new();

        let bob = store.user("1").await.expect("Bob should exist");
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.following, vec!["3", "2"]);

        assert!(store.user("42").await.is_none());
    }

    #[tokio::test]
    async fn test_users_by_name_is_case_insensitive_substring() {
        let store = SocialStore::new();

        let names: Vec<String> = store
            .users_by_name("A")
            .await
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Sam"]);

        let names: Vec<String> = store
            .users_by_name("oE")
            .await
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Zoe"]);

        assert_eq!(store.users_by_name("").await.len(), 4);
        assert!(store.users_by_name("mallory").await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_lookups_skip_unknown_ids() {
        let store = SocialStore::new();
        let keys = vec!["0".to_string(), "3".to_string(), "99".to_string()];

        let users = store.users_by_ids(&keys).await;
        assert_eq!(users.len(), 2);
        assert_eq!(users["3"].name, "Zoe");

        let posts = store.posts_by_ids(&keys).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts["0"].title, "AliceLife");
    }

    #[tokio::test]
    async fn test_add_post_assigns_sequential_ids() {
        let store = SocialStore::new();

        let first = store.add_post(new_post("Hello", "3")).await;
        let second = store.add_post(new_post("Again", "3")).await;

        assert_eq!(first.id, "3");
        assert_eq!(second.id, "4");
        assert!(first.likes.is_empty());
        assert_eq!(store.posts().await.len(), 5);
        assert_eq!(store.posts_by_author("3").await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_add_post_on_empty_store_starts_at_zero() {
        let store = SocialStore::empty();
        let post = store.add_post(new_post("First", "0")).await;
        assert_eq!(post.id, "0");
    }

    #[tokio::test]
    async fn test_like_post_is_idempotent() {
        let store = SocialStore::new();

        let once = store.like_post("1", "2").await.expect("post exists");
        let twice = store.like_post("1", "2").await.expect("post exists");

        assert_eq!(once.likes, vec!["3", "0", "2"]);
        assert_eq!(twice.likes, once.likes);
        assert_eq!(store.post("1").await.unwrap().likes, once.likes);
    }

    #[tokio::test]
    async fn test_like_missing_post_changes_nothing() {
        let store = SocialStore::new();
        let before = store.posts().await;

        assert!(store.like_post("nonexistent", "0").await.is_none());
        assert_eq!(store.posts().await, before);
    }

    #[tokio::test]
    async fn test_add_comment_is_listed_on_post() {
        let store = SocialStore::new();

        let comment = store
            .add_comment(NewComment {
                post_id: "2".to_string(),
                author_id: "1".to_string(),
                content: "Nice family".to_string(),
            })
            .await;

        assert_eq!(comment.id, "3");
        let on_post: Vec<String> = store
            .comments_for_post("2")
            .await
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(on_post, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn test_store_from_json_dataset() {
        let dataset: Dataset = serde_json::from_value(serde_json::json!({
            "users": [
                { "id": "0", "name": "Ada", "email": "ada@example.com", "followers": [], "following": ["1"] },
                { "id": "1", "name": "Linus", "email": "linus@example.com", "followers": ["0"], "following": [] }
            ],
            "posts": [
                { "id": "0", "title": "Engines", "content": "Notes", "author_id": "0", "likes": ["1"] }
            ],
            "comments": []
        }))
        .unwrap();
        let store = SocialStore::from_dataset(dataset);

        assert_eq!(
            store.stats().await,
            StoreStats {
                users: 2,
                posts: 1,
                comments: 0
            }
        );
        assert_eq!(store.users_by_name("LIN").await[0].id, "1");

        let comment = store
            .add_comment(NewComment {
                post_id: "0".to_string(),
                author_id: "1".to_string(),
                content: "Great".to_string(),
            })
            .await;
        assert_eq!(comment.id, "0");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = SocialStore::new();
        let handle = store.clone();

        store.add_post(new_post("Shared", "0")).await;
        assert_eq!(handle.stats().await.posts, 4);
    }

    #[tokio::test]
    async fn test_concurrent_creations_get_distinct_ids() {
        let store = SocialStore::empty();

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add_post(new_post(&format!("p{}", i), "0")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().id);
        }
        ids.sort_by_key(|id| id.parse::<usize>().unwrap());
        let expected: Vec<String> = (0..16).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }
}
