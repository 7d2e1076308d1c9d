//! Blog extension on top of the base CRUD schema: per-author statistics,
//! a recent-posts window and the publish transition.

use async_graphql::{Context, ID, Object, ResultExt};
use chrono::Utc;

use super::schema::post_repo;
use super::types::Post;
use crate::model::PostStatus;
use crate::storage::recent_cutoff;

/// Window used by `recentPosts` when `seconds` is omitted.
pub const DEFAULT_RECENT_SECONDS: i32 = 600;

/// Per-author counters, resolved lazily field by field.
pub struct Statistics {
    author_id: String,
}

impl Statistics {
    pub fn new(author_id: String) -> Self {
        Self { author_id }
    }
}

#[Object]
impl Statistics {
    /// Number of draft posts by the author
    async fn draft(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<usize>> {
        let repo = post_repo(ctx)?;
        Ok(Some(
            repo.count_by_status(&self.author_id, PostStatus::Draft)
                .extend()?,
        ))
    }

    /// Number of published posts by the author
    async fn published(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<usize>> {
        let repo = post_repo(ctx)?;
        Ok(Some(
            repo.count_by_status(&self.author_id, PostStatus::Published)
                .extend()?,
        ))
    }

    /// The author's most recently published post
    async fn latest(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Post>> {
        let repo = post_repo(ctx)?;
        Ok(repo.latest_by(&self.author_id).extend()?.map(Into::into))
    }
}

#[derive(Default)]
pub struct ExtensionQuery;

#[Object]
impl ExtensionQuery {
    /// Posts by an author published within the last `seconds`, newest first
    async fn recent_posts(
        &self,
        ctx: &Context<'_>,
        id: ID,
        #[graphql(default_with = "Some(DEFAULT_RECENT_SECONDS)")] seconds: Option<i32>,
    ) -> async_graphql::Result<Option<Vec<Post>>> {
        let repo = post_repo(ctx)?;
        let seconds = seconds.unwrap_or(DEFAULT_RECENT_SECONDS);
        let cutoff = recent_cutoff(Utc::now(), i64::from(seconds));

        let posts = repo.recent_by(&id, cutoff).extend()?;
        Ok(Some(posts.into_iter().map(Into::into).collect()))
    }

    /// Post statistics for an author
    async fn stats(&self, id: ID) -> Option<Statistics> {
        Some(Statistics::new(id.0))
    }
}

#[derive(Default)]
pub struct ExtensionMutation;

#[Object]
impl ExtensionMutation {
    /// Mark a post published and stamp the current time as its publish date
    async fn publish_post(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Post>> {
        let repo = post_repo(ctx)?;
        Ok(Some(repo.publish(&id, Utc::now()).extend()?.into()))
    }
}
