use crate::error::{QuillError, Result};
use crate::storage::FrontmatterFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".quill.toml", ".quill.yml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub quill: QuillSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuillSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_post_prefix")]
    pub post_prefix: String,

    #[serde(default = "default_author_prefix")]
    pub author_prefix: String,

    #[serde(default = "default_id_length")]
    pub id_length: usize,

    #[serde(default = "default_frontmatter")]
    pub frontmatter: String,
}

fn default_path() -> String {
    ".quill".to_string()
}

fn default_post_prefix() -> String {
    "post-".to_string()
}

fn default_author_prefix() -> String {
    "author-".to_string()
}

fn default_id_length() -> usize {
    5
}

fn default_frontmatter() -> String {
    "toml".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for QuillSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            post_prefix: default_post_prefix(),
            author_prefix: default_author_prefix(),
            id_length: default_id_length(),
            frontmatter: default_frontmatter(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl QuillSettings {
    pub fn frontmatter_format(&self) -> FrontmatterFormat {
        match self.frontmatter.as_str() {
            "yaml" | "yml" => FrontmatterFormat::Yaml,
            _ => FrontmatterFormat::Toml,
        }
    }
}

impl QuillConfig {
    /// Load the config found at or above `start_path`, returning it with the
    /// project root (the directory holding the config file).
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_file(&config_path)
    }

    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config = Self::parse(config_path, &content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| QuillError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    fn parse(config_path: &Path, content: &str) -> Result<Self> {
        if is_yaml(config_path) {
            Ok(serde_yaml::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Ok(config_path);
                }
            }
            if !current.pop() {
                return Err(QuillError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.quill.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yml" || e == "yaml")
        .unwrap_or(false)
}
