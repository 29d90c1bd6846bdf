//! GraphQL schema over the in-memory social store
//!
//! Relation fields resolve lazily on read, on every path that returns an
//! object (queries and mutations alike), through the loaders in `loaders`.

pub mod content;
pub mod loaders;
pub mod user;

use async_graphql::{
    dataloader::DataLoader, extensions::Tracing, Context, EmptySubscription, ErrorExtensions,
    MergedObject, Result as GraphQLResult, Schema,
};

use crate::config::GraphQLConfig;
use crate::error::ServiceError;
use crate::store::SocialStore;

use content::Post;
use loaders::{PostLoader, UserLoader};
use user::User;

/// Root query object
#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(user::UserQuery, content::ContentQuery);

/// Root mutation object
#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(content::ContentMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around `store`, applying the depth/complexity limits
/// and introspection switch from `config`
pub fn build_schema(store: SocialStore, config: &GraphQLConfig) -> AppSchema {
    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(DataLoader::new(UserLoader::new(store.clone()), tokio::task::spawn))
    .data(DataLoader::new(PostLoader::new(store.clone()), tokio::task::spawn))
    .data(store)
    .limit_depth(config.max_depth)
    .limit_complexity(config.max_complexity)
    .extension(Tracing);

    if !config.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a SocialStore> {
    ctx.data::<SocialStore>()
        .map_err(|_| ServiceError::MissingContext("SocialStore").extend())
}

fn user_loader<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a DataLoader<UserLoader>> {
    ctx.data::<DataLoader<UserLoader>>()
        .map_err(|_| ServiceError::MissingContext("UserLoader").extend())
}

fn post_loader<'a>(ctx: &Context<'a>) -> GraphQLResult<&'a DataLoader<PostLoader>> {
    ctx.data::<DataLoader<PostLoader>>()
        .map_err(|_| ServiceError::MissingContext("PostLoader").extend())
}

pub(crate) async fn load_user(ctx: &Context<'_>, id: &str) -> GraphQLResult<Option<User>> {
    let user = user_loader(ctx)?
        .load_one(id.to_string())
        .await
        .map_err(|e| e.extend())?;
    Ok(user.map(User::from))
}

/// Resolves `ids` in order; duplicates are kept and unknown ids become `None`
pub(crate) async fn load_users(
    ctx: &Context<'_>,
    ids: &[String],
) -> GraphQLResult<Vec<Option<User>>> {
    let found = user_loader(ctx)?
        .load_many(ids.iter().cloned())
        .await
        .map_err(|e| e.extend())?;

    Ok(ids
        .iter()
        .map(|id| found.get(id).cloned().map(User::from))
        .collect())
}

pub(crate) async fn load_post(ctx: &Context<'_>, id: &str) -> GraphQLResult<Option<Post>> {
    let post = post_loader(ctx)?
        .load_one(id.to_string())
        .await
        .map_err(|e| e.extend())?;
    Ok(post.map(Post::from))
}
