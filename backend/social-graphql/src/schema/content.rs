//! Post and comment schema

use async_graphql::{ComplexObject, Context, Object, Result as GraphQLResult, SimpleObject, ID};

use super::user::User;
use super::{load_post, load_user, load_users, store};
use crate::store::{CommentRecord, NewComment, NewPost, PostRecord};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub content: String,
    #[graphql(skip)]
    pub author_id: String,
    #[graphql(skip)]
    pub like_ids: Vec<String>,
}

impl From<PostRecord> for Post {
    fn from(post: PostRecord) -> Self {
        Post {
            id: ID(post.id),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            like_ids: post.likes,
        }
    }
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> GraphQLResult<Option<User>> {
        load_user(ctx, &self.author_id).await
    }

    /// Users who liked the post, in like order
    async fn likes(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Option<User>>> {
        load_users(ctx, &self.like_ids).await
    }

    async fn comments(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Comment>> {
        let comments = store(ctx)?.comments_for_post(&self.id).await;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Comment {
    pub id: ID,
    pub content: String,
    #[graphql(skip)]
    pub author_id: String,
    #[graphql(skip)]
    pub post_id: String,
}

impl From<CommentRecord> for Comment {
    fn from(comment: CommentRecord) -> Self {
        Comment {
            id: ID(comment.id),
            content: comment.content,
            author_id: comment.author_id,
            post_id: comment.post_id,
        }
    }
}

#[ComplexObject]
impl Comment {
    async fn author(&self, ctx: &Context<'_>) -> GraphQLResult<Option<User>> {
        load_user(ctx, &self.author_id).await
    }

    async fn post(&self, ctx: &Context<'_>) -> GraphQLResult<Option<Post>> {
        load_post(ctx, &self.post_id).await
    }
}

#[derive(Default)]
pub struct ContentQuery;

#[Object]
impl ContentQuery {
    async fn post(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Option<Post>> {
        Ok(store(ctx)?.post(&id).await.map(Post::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Post>> {
        let posts = store(ctx)?.posts().await;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

#[derive(Default)]
pub struct ContentMutation;

#[Object]
impl ContentMutation {
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author_id: ID,
    ) -> GraphQLResult<Post> {
        let post = store(ctx)?
            .add_post(NewPost {
                title,
                content,
                author_id: author_id.0,
            })
            .await;

        Ok(post.into())
    }

    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        user_id: ID,
        content: String,
    ) -> GraphQLResult<Comment> {
        let comment = store(ctx)?
            .add_comment(NewComment {
                post_id: post_id.0,
                author_id: user_id.0,
                content,
            })
            .await;

        Ok(comment.into())
    }

    /// Records a like; liking twice keeps a single entry.
    /// Returns null when the post does not exist.
    async fn like_post(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        user_id: ID,
    ) -> GraphQLResult<Option<Post>> {
        let post = store(ctx)?.like_post(&post_id, &user_id).await;
        Ok(post.map(Post::from))
    }
}
