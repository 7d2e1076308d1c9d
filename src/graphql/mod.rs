//! GraphQL schema and resolvers for quill.
//!
//! The schema is the generic CRUD API over the `Post` and `Author` lists,
//! merged with the blog extension that adds author statistics, a recent
//! posts window and the publish transition.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on GET /graphql)
//! quill serve --port 4000
//!
//! # Execute a query from CLI
//! quill query '{ stats(id: "author-7qp2d") { draft published latest { title } } }'
//!
//! # Execute a mutation from CLI
//! quill mutate 'publishPost(id: "post-k3x9a") { status publishDate }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `post`, `posts`, `postsCount`, `author`, `authors`,
//!   `recentPosts`, `stats`
//! - **Mutations**: `createPost`, `updatePost`, `deletePost`, `createAuthor`,
//!   `updateAuthor`, `deleteAuthor`, `publishPost`

mod base;
mod extension;
mod schema;
mod server;
mod types;

pub use extension::{DEFAULT_RECENT_SECONDS, Statistics};
pub use schema::{AppState, MutationRoot, QueryRoot, QuillSchema, build_schema, schema_sdl};
pub use server::{router, run_server};
pub use types::*;
