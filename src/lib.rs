//! # Quill - a flat-file blog content store
//!
//! Quill keeps authors and posts as markdown files with TOML frontmatter and
//! serves them through a GraphQL API. On top of the generic CRUD schema it
//! adds per-author statistics, a recent-posts window and a publish mutation.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new quill project
//! quill init
//!
//! # Add an author and a draft post
//! quill author add "Ada Lovelace"
//! quill post create "Notes on the engine" --author <author-id>
//!
//! # Publish it and look at the author's numbers
//! quill publish <post-id>
//! quill stats <author-id>
//!
//! # Serve the GraphQL API
//! quill serve
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Post, Author, PostStatus)
//! - [`storage`]: File-based storage and query API
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.quill.toml` / `.quill.yml` files and project discovery.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Base CRUD roots merged with the blog extension via async-graphql.
pub mod graphql;

pub mod logging;

/// Data models for posts and authors.
pub mod model;

/// File-based storage layer.
///
/// Reads and writes records as markdown files with frontmatter and exposes
/// count / find / update operations over them.
pub mod storage;

/// Input validation utilities.
pub mod validation;
