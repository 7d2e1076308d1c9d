use std::path::PathBuf;
use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, MergedObject, Schema};

use super::base::{BaseMutation, BaseQuery};
use super::extension::{ExtensionMutation, ExtensionQuery};
use crate::config::QuillConfig;
use crate::storage::{AuthorRepository, PostRepository};

/// Base CRUD queries merged with the blog extension queries.
#[derive(MergedObject, Default)]
pub struct QueryRoot(BaseQuery, ExtensionQuery);

/// Base CRUD mutations merged with the blog extension mutations.
#[derive(MergedObject, Default)]
pub struct MutationRoot(BaseMutation, ExtensionMutation);

pub type QuillSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub config: QuillConfig,
    pub project_root: PathBuf,
}

pub fn build_schema(config: QuillConfig, project_root: PathBuf) -> QuillSchema {
    let state = Arc::new(AppState {
        config,
        project_root,
    });

    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// SDL of the full schema, base and extension together.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .finish()
        .sdl()
}

fn state<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

pub(crate) fn post_repo(ctx: &Context<'_>) -> async_graphql::Result<PostRepository> {
    let state = state(ctx)?;
    Ok(PostRepository::new(&state.config, &state.project_root))
}

pub(crate) fn author_repo(ctx: &Context<'_>) -> async_graphql::Result<AuthorRepository> {
    let state = state(ctx)?;
    Ok(AuthorRepository::new(&state.config, &state.project_root))
}
