//! Generic CRUD queries and mutations for the post and author lists.

use async_graphql::{Context, ID, Object, ResultExt};

use super::schema::{author_repo, post_repo};
use super::types::*;
use crate::model::{Author as ModelAuthor, Post as ModelPost};
use crate::storage::{FindMany, PostUpdate, PostWhere};

const DEFAULT_TAKE: usize = 100;

#[derive(Default)]
pub struct BaseQuery;

#[Object]
impl BaseQuery {
    /// Get a single post by ID
    async fn post(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Post>> {
        let repo = post_repo(ctx)?;
        Ok(repo.find_optional(&id).extend()?.map(Into::into))
    }

    /// List posts with optional filtering, ordering and pagination
    async fn posts(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<PostWhereInput>,
        order_by: Option<PostOrderBy>,
        take: Option<usize>,
        skip: Option<usize>,
    ) -> async_graphql::Result<Vec<Post>> {
        let repo = post_repo(ctx)?;
        let filter = PostWhere::try_from(filter.unwrap_or_default()).extend()?;

        let mut args = FindMany::new(filter)
            .take(take.unwrap_or(DEFAULT_TAKE))
            .skip(skip.unwrap_or(0));
        if let Some(o) = order_by {
            args = args.order_by(o.into());
        }

        let posts = repo.find_many(&args).extend()?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Count posts matching a filter
    async fn posts_count(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<PostWhereInput>,
    ) -> async_graphql::Result<usize> {
        let repo = post_repo(ctx)?;
        let filter = PostWhere::try_from(filter.unwrap_or_default()).extend()?;
        repo.count(&filter).extend()
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let repo = author_repo(ctx)?;
        Ok(repo.find_optional(&id).extend()?.map(Into::into))
    }

    /// List all authors, ordered by name
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let repo = author_repo(ctx)?;
        let authors = repo.find_many().extend()?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct BaseMutation;

#[Object]
impl BaseMutation {
    /// Create a new post
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        input: CreatePostInput,
    ) -> async_graphql::Result<Post> {
        let repo = post_repo(ctx)?;
        let publish_date = input
            .publish_date
            .as_deref()
            .map(parse_timestamp)
            .transpose()
            .extend()?;

        let mut post = ModelPost::new(repo.generate_id(), input.title)
            .with_author(input.author.map(|a| a.0))
            .with_publish_date(publish_date);
        if let Some(s) = input.status {
            post = post.with_status(s.into());
        }
        if let Some(c) = input.content {
            post = post.with_content(c);
        }

        repo.create_one(&post).extend()?;
        Ok(post.into())
    }

    /// Update an existing post
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        input: UpdatePostInput,
    ) -> async_graphql::Result<Post> {
        let repo = post_repo(ctx)?;
        let id = input.id.to_string();
        let update = PostUpdate::try_from(input).extend()?;
        Ok(repo.update_one(&id, update).extend()?.into())
    }

    /// Delete a post permanently, returning it
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Post> {
        let repo = post_repo(ctx)?;
        Ok(repo.delete_one(&id).extend()?.into())
    }

    /// Create a new author
    async fn create_author(
        &self,
        ctx: &Context<'_>,
        input: CreateAuthorInput,
    ) -> async_graphql::Result<Author> {
        let repo = author_repo(ctx)?;
        let mut author =
            ModelAuthor::new(repo.generate_id(), input.name).with_email(input.email);
        if let Some(b) = input.bio {
            author = author.with_bio(b);
        }

        repo.create_one(&author).extend()?;
        Ok(author.into())
    }

    /// Update an existing author
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        input: UpdateAuthorInput,
    ) -> async_graphql::Result<Author> {
        let repo = author_repo(ctx)?;
        let id = input.id.to_string();
        Ok(repo.update_one(&id, input.into()).extend()?.into())
    }

    /// Delete an author with no remaining posts
    async fn delete_author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Author> {
        let repo = author_repo(ctx)?;
        Ok(repo.delete_one(&id).extend()?.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::QuillConfig;
    use crate::graphql::build_schema;
    use serde_json::json;
    use tempfile::TempDir;

    async fn execute(
        schema: &crate::graphql::QuillSchema,
        query: &str,
    ) -> serde_json::Value {
        let response = schema.execute(query).await;
        serde_json::to_value(&response).unwrap()
    }

    #[tokio::test]
    async fn test_create_author_and_post_then_resolve_relation() {
        let temp_dir = TempDir::new().unwrap();
        let schema = build_schema(QuillConfig::default(), temp_dir.path().to_path_buf());

        let created = execute(&schema, r#"mutation { createAuthor(input: { name: "Ada" }) { id } }"#).await;
        let author_id = created["data"]["createAuthor"]["id"].as_str().unwrap().to_string();

        let query = format!(
            r#"mutation {{ createPost(input: {{ title: "Engines", author: "{}" }}) {{ id status author {{ name }} }} }}"#,
            author_id
        );
        let post = execute(&schema, &query).await;
        assert_eq!(post["data"]["createPost"]["status"], json!("draft"));
        assert_eq!(post["data"]["createPost"]["author"]["name"], json!("Ada"));

        let query = format!(r#"{{ author(id: "{}") {{ postsCount posts {{ title }} }} }}"#, author_id);
        let author = execute(&schema, &query).await;
        assert_eq!(author["data"]["author"]["postsCount"], json!(1));
        assert_eq!(author["data"]["author"]["posts"][0]["title"], json!("Engines"));
    }

    #[tokio::test]
    async fn test_posts_filter_order_and_count() {
        let temp_dir = TempDir::new().unwrap();
        let schema = build_schema(QuillConfig::default(), temp_dir.path().to_path_buf());

        for (title, date) in [
            ("Older", "2024-01-01T00:00:00Z"),
            ("Newer", "2024-02-01T00:00:00Z"),
        ] {
            let query = format!(
                r#"mutation {{ createPost(input: {{ title: "{}", status: published, publishDate: "{}" }}) {{ id }} }}"#,
                title, date
            );
            execute(&schema, &query).await;
        }
        execute(&schema, r#"mutation { createPost(input: { title: "Draft" }) { id } }"#).await;

        let result = execute(
            &schema,
            r#"{
                posts(where: { status: published }, orderBy: { field: PUBLISH_DATE, direction: desc }) { title }
                postsCount(where: { publishDateGt: "2024-01-15T00:00:00Z" })
            }"#,
        )
        .await;
        assert_eq!(
            result["data"]["posts"],
            json!([{ "title": "Newer" }, { "title": "Older" }])
        );
        assert_eq!(result["data"]["postsCount"], json!(1));
    }

    #[tokio::test]
    async fn test_invalid_timestamp_is_bad_user_input() {
        let temp_dir = TempDir::new().unwrap();
        let schema = build_schema(QuillConfig::default(), temp_dir.path().to_path_buf());

        let result = execute(&schema, r#"{ postsCount(where: { publishDateGt: "soon" }) }"#).await;
        assert_eq!(result["errors"][0]["extensions"]["code"], json!("BAD_USER_INPUT"));
    }

    #[tokio::test]
    async fn test_missing_post_is_null() {
        let temp_dir = TempDir::new().unwrap();
        let schema = build_schema(QuillConfig::default(), temp_dir.path().to_path_buf());

        let result = execute(&schema, r#"{ post(id: "post-nope") { id } }"#).await;
        assert_eq!(result["data"]["post"], json!(null));
        assert!(result.get("errors").is_none());
    }
}
