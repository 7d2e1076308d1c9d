use super::schema::{author_repo, post_repo};
use crate::error::QuillError;
use crate::model::{self, Author as ModelAuthor, Post as ModelPost};
use crate::storage::{self, AuthorUpdate, PostUpdate, PostWhere};
use async_graphql::{
    ComplexObject, Context, Enum, ID, InputObject, ResultExt, SimpleObject,
};
use chrono::{DateTime, Utc};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(rename_items = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl From<model::PostStatus> for PostStatus {
    fn from(s: model::PostStatus) -> Self {
        match s {
            model::PostStatus::Draft => PostStatus::Draft,
            model::PostStatus::Published => PostStatus::Published,
        }
    }
}

impl From<PostStatus> for model::PostStatus {
    fn from(s: PostStatus) -> Self {
        match s {
            PostStatus::Draft => model::PostStatus::Draft,
            PostStatus::Published => model::PostStatus::Published,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Default)]
#[graphql(rename_items = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum PostOrderField {
    Title,
    PublishDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(InputObject)]
pub struct PostOrderBy {
    pub field: PostOrderField,
    #[graphql(default)]
    pub direction: OrderDirection,
}

impl From<PostOrderBy> for storage::PostOrderBy {
    fn from(o: PostOrderBy) -> Self {
        let field = match o.field {
            PostOrderField::Title => storage::PostField::Title,
            PostOrderField::PublishDate => storage::PostField::PublishDate,
            PostOrderField::CreatedAt => storage::PostField::Created,
            PostOrderField::UpdatedAt => storage::PostField::Updated,
        };
        match o.direction {
            OrderDirection::Asc => storage::PostOrderBy::asc(field),
            OrderDirection::Desc => storage::PostOrderBy::desc(field),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub status: PostStatus,
    pub publish_date: Option<String>,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    #[graphql(skip)]
    pub author_id: Option<String>,
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: ID(p.id),
            title: p.title,
            status: p.status.into(),
            publish_date: p.publish_date.map(|d| d.to_rfc3339()),
            content: p.content,
            created_at: p.created.to_rfc3339(),
            updated_at: p.updated.to_rfc3339(),
            author_id: p.author,
        }
    }
}

#[ComplexObject]
impl Post {
    /// The post's author, if one is set
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let Some(ref author_id) = self.author_id else {
            return Ok(None);
        };
        let repo = author_repo(ctx)?;
        Ok(repo.find_optional(author_id).extend()?.map(Into::into))
    }
}

#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub email: Option<String>,
    pub bio: String,
    pub created_at: String,
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
            email: a.email,
            bio: a.bio,
            created_at: a.created.to_rfc3339(),
        }
    }
}

#[ComplexObject]
impl Author {
    /// Posts written by this author, optionally narrowed to one status
    async fn posts(
        &self,
        ctx: &Context<'_>,
        status: Option<PostStatus>,
    ) -> async_graphql::Result<Vec<Post>> {
        let repo = post_repo(ctx)?;
        let mut filter = PostWhere::by_author(self.id.as_str());
        if let Some(s) = status {
            filter = filter.with_status(s.into());
        }
        let posts = repo
            .find_many(&storage::FindMany::new(filter))
            .extend()?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn posts_count(&self, ctx: &Context<'_>) -> async_graphql::Result<usize> {
        let repo = post_repo(ctx)?;
        repo.count(&PostWhere::by_author(self.id.as_str())).extend()
    }
}

/// Parse an RFC 3339 / ISO-8601 timestamp argument.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, QuillError> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| QuillError::Validation(format!("Invalid timestamp '{}': {}", value, e)))
}

#[derive(InputObject, Default)]
pub struct PostWhereInput {
    pub id: Option<ID>,
    pub author: Option<ID>,
    pub status: Option<PostStatus>,
    pub publish_date_gt: Option<String>,
    pub publish_date_lt: Option<String>,
    pub search: Option<String>,
}

impl TryFrom<PostWhereInput> for PostWhere {
    type Error = QuillError;

    fn try_from(w: PostWhereInput) -> Result<Self, Self::Error> {
        Ok(PostWhere {
            id: w.id.map(|id| id.0),
            author: w.author.map(|id| id.0),
            status: w.status.map(Into::into),
            publish_date_gt: w.publish_date_gt.as_deref().map(parse_timestamp).transpose()?,
            publish_date_lt: w.publish_date_lt.as_deref().map(parse_timestamp).transpose()?,
            search: w.search,
        })
    }
}

#[derive(InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub status: Option<PostStatus>,
    pub author: Option<ID>,
    pub publish_date: Option<String>,
    pub content: Option<String>,
}

#[derive(InputObject)]
pub struct UpdatePostInput {
    pub id: ID,
    pub title: Option<String>,
    pub status: Option<PostStatus>,
    /// Author ID; an empty string clears the author
    pub author: Option<String>,
    /// RFC 3339 timestamp; an empty string clears the publish date
    pub publish_date: Option<String>,
    pub content: Option<String>,
}

impl TryFrom<UpdatePostInput> for PostUpdate {
    type Error = QuillError;

    fn try_from(input: UpdatePostInput) -> Result<Self, Self::Error> {
        let publish_date = match input.publish_date {
            Some(d) if d.is_empty() => Some(None),
            Some(d) => Some(Some(parse_timestamp(&d)?)),
            None => None,
        };
        Ok(PostUpdate {
            title: input.title,
            status: input.status.map(Into::into),
            author: input.author.map(|a| (!a.is_empty()).then_some(a)),
            publish_date,
            content: input.content,
        })
    }
}

#[derive(InputObject)]
pub struct CreateAuthorInput {
    pub name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateAuthorInput {
    pub id: ID,
    pub name: Option<String>,
    /// An empty string clears the email
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl From<UpdateAuthorInput> for AuthorUpdate {
    fn from(input: UpdateAuthorInput) -> Self {
        AuthorUpdate {
            name: input.name,
            email: input.email.map(|e| (!e.is_empty()).then_some(e)),
            bio: input.bio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_normalizes_offset() {
        let parsed = parse_timestamp("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-05-01T10:00:00+00:00");
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_update_input_empty_strings_clear() {
        let update = PostUpdate::try_from(UpdatePostInput {
            id: ID("post-1".to_string()),
            title: None,
            status: None,
            author: Some(String::new()),
            publish_date: Some(String::new()),
            content: None,
        })
        .unwrap();
        assert_eq!(update.author, Some(None));
        assert_eq!(update.publish_date, Some(None));
    }
}
