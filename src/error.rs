use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{list} not found: {id}")]
    NotFound { list: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not initialized. Run 'quill init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl QuillError {
    pub fn not_found(list: &'static str, id: impl Into<String>) -> Self {
        QuillError::NotFound {
            list,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QuillError::NotFound { .. })
    }

    /// Error code reported in GraphQL `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            QuillError::NotFound { .. } => "NOT_FOUND",
            QuillError::Validation(_) => "BAD_USER_INPUT",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for QuillError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, QuillError>;
