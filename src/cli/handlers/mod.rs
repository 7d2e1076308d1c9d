mod author;
mod init;
mod mutate;
mod post;
mod publish;
mod query;
mod recent;
mod schema;
mod serve;
mod stats;
mod utils;

pub use author::handle_author;
pub use init::{InitOptions, handle_init};
pub use mutate::handle_mutate;
pub use post::handle_post;
pub use publish::handle_publish;
pub use query::handle_query;
pub use recent::handle_recent;
pub use schema::handle_schema;
pub use serve::handle_serve;
pub use stats::handle_stats;

use crate::config::QuillConfig;
use crate::storage::{AuthorRepository, PostRepository};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: QuillConfig,
    pub root: PathBuf,
    pub posts: PostRepository,
    pub authors: AuthorRepository,
}

impl CommandContext {
    pub fn new(config: QuillConfig, root: PathBuf) -> Self {
        let posts = PostRepository::new(&config, &root);
        let authors = AuthorRepository::new(&config, &root);
        Self {
            config,
            root,
            posts,
            authors,
        }
    }

    /// Load the project config from `config_path`, or search upward from the
    /// working directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => QuillConfig::load_file(path),
            None => QuillConfig::load(&std::env::current_dir()?),
        }
        .context("Failed to load quill configuration")?;
        Ok(Self::new(config, root))
    }
}
