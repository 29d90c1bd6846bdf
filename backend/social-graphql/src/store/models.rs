use serde::{Deserialize, Serialize};

/// User entity - follow edges are stored as raw user ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub followers: Vec<String>,
    pub following: Vec<String>,
}

/// Post entity - `likes` holds user ids, each at most once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub likes: Vec<String>,
}

/// Comment entity - represents a user commenting on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub post_id: String,
}

/// Input for `SocialStore::add_post`
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

/// Input for `SocialStore::add_comment`
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: String,
    pub author_id: String,
    pub content: String,
}

/// All records held by the store, in insertion order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub posts: Vec<PostRecord>,
    pub comments: Vec<CommentRecord>,
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
}
