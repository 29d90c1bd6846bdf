//! User schema and resolvers

use async_graphql::{ComplexObject, Context, Object, Result as GraphQLResult, SimpleObject, ID};

use super::content::Post;
use super::{load_users, store};
use crate::store::UserRecord;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    #[graphql(skip)]
    pub follower_ids: Vec<String>,
    #[graphql(skip)]
    pub following_ids: Vec<String>,
}

impl From<UserRecord> for User {
    fn from(user: UserRecord) -> Self {
        User {
            id: ID(user.id),
            name: user.name,
            email: user.email,
            follower_ids: user.followers,
            following_ids: user.following,
        }
    }
}

#[ComplexObject]
impl User {
    /// Posts written by this user
    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Post>> {
        let posts = store(ctx)?.posts_by_author(&self.id).await;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    async fn followers(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Option<User>>> {
        load_users(ctx, &self.follower_ids).await
    }

    async fn following(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Option<User>>> {
        load_users(ctx, &self.following_ids).await
    }
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn user(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Option<User>> {
        Ok(store(ctx)?.user(&id).await.map(User::from))
    }

    /// Users whose name contains `name`, ignoring case
    async fn users_by_name(&self, ctx: &Context<'_>, name: String) -> GraphQLResult<Vec<User>> {
        let users = store(ctx)?.users_by_name(&name).await;
        Ok(users.into_iter().map(User::from).collect())
    }
}
