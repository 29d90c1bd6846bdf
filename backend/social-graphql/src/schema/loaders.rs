//! DataLoader implementations for N+1 query prevention
//!
//! Relation fields (`Post.author`, `Post.likes`, `User.followers`,
//! `Comment.post`, ...) resolve ids one at a time. The loaders collect the
//! ids requested while a response is being built and read them from the
//! store in one batch.

use async_graphql::dataloader::Loader;
use std::collections::HashMap;

use crate::error::ServiceError;
use crate::store::{PostRecord, SocialStore, UserRecord};

/// User ID loader - batches user lookups
#[derive(Clone)]
pub struct UserLoader {
    store: SocialStore,
}

impl UserLoader {
    pub fn new(store: SocialStore) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Loader<String> for UserLoader {
    type Value = UserRecord;
    type Error = ServiceError;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        Ok(self.store.users_by_ids(keys).await)
    }
}

/// Post ID loader - batches post lookups
#[derive(Clone)]
pub struct PostLoader {
    store: SocialStore,
}

impl PostLoader {
    pub fn new(store: SocialStore) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Loader<String> for PostLoader {
    type Value = PostRecord;
    type Error = ServiceError;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        Ok(self.store.posts_by_ids(keys).await)
    }
}
