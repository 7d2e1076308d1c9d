use crate::config::QuillSettings;
use crate::graphql::DEFAULT_RECENT_SECONDS;
use crate::model::PostStatus;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill")]
#[command(
    author,
    version,
    about = "A flat-file blog content store with a GraphQL API"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .quill.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new quill project
    Init {
        /// Prefix for post IDs
        #[arg(long, default_value_t = QuillSettings::default().post_prefix)]
        post_prefix: String,

        /// Prefix for author IDs
        #[arg(long, default_value_t = QuillSettings::default().author_prefix)]
        author_prefix: String,

        /// Length of random ID suffix
        #[arg(long, default_value_t = QuillSettings::default().id_length)]
        id_length: usize,

        /// Frontmatter format for new files
        #[arg(long, value_enum, default_value = "toml")]
        frontmatter: FrontmatterArg,

        /// Data directory, relative to the project root
        #[arg(long)]
        data_path: Option<String>,
    },

    /// Manage authors
    #[command(subcommand)]
    Author(AuthorCommand),

    /// Manage posts
    #[command(subcommand)]
    Post(PostCommand),

    /// Publish a post, stamping the current time as its publish date
    Publish {
        /// Post ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show post statistics for an author
    Stats {
        /// Author ID
        author: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List an author's recently published posts
    Recent {
        /// Author ID
        author: String,

        /// Look-back window in seconds
        #[arg(short, long, default_value_t = DEFAULT_RECENT_SECONDS)]
        seconds: i32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query document
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (fields are wrapped in `mutation { }`)
    Mutate {
        /// Mutation fields
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (defaults to the config value)
        #[arg(long, env = "QUILL_HOST")]
        host: Option<String>,

        /// Port to listen on (defaults to the config value)
        #[arg(short, long, env = "QUILL_PORT")]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
pub enum AuthorCommand {
    /// Add an author
    Add {
        /// Display name
        name: String,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Short biography (markdown)
        #[arg(long)]
        bio: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List authors
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an author
    Show {
        /// Author ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum PostCommand {
    /// Create a post
    #[command(visible_alias = "new")]
    Create {
        /// Post title
        title: String,

        /// Author ID
        #[arg(short, long)]
        author: Option<String>,

        /// Initial status
        #[arg(short, long, value_enum)]
        status: Option<PostStatusArg>,

        /// Content (use '-' to read from stdin)
        #[arg(short = 'd', long = "body")]
        body: Option<String>,

        /// Read content from file
        #[arg(long)]
        body_file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List posts
    #[command(visible_alias = "ls")]
    List {
        /// Filter by author ID
        #[arg(short, long)]
        author: Option<String>,

        /// Filter by status
        #[arg(short, long, value_enum)]
        status: Option<PostStatusArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post's contents
    Show {
        /// Post ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a post permanently
    Delete {
        /// Post ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PostStatusArg {
    Draft,
    Published,
}

impl From<PostStatusArg> for PostStatus {
    fn from(s: PostStatusArg) -> Self {
        match s {
            PostStatusArg::Draft => PostStatus::Draft,
            PostStatusArg::Published => PostStatus::Published,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FrontmatterArg {
    Toml,
    Yaml,
}

impl FrontmatterArg {
    pub fn as_str(self) -> &'static str {
        match self {
            FrontmatterArg::Toml => "toml",
            FrontmatterArg::Yaml => "yaml",
        }
    }
}
