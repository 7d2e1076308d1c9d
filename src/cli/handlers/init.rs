use crate::cli::commands::FrontmatterArg;
use crate::config::{QuillConfig, QuillSettings, ServerSettings};
use crate::model::{Author, Post, Record};
use anyhow::Result;
use colored::Colorize;

pub struct InitOptions {
    pub post_prefix: String,
    pub author_prefix: String,
    pub id_length: usize,
    pub frontmatter: FrontmatterArg,
    pub data_path: Option<String>,
}

pub fn handle_init(options: InitOptions) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(".quill.toml");

    if let Ok(existing) = QuillConfig::find_config_file(&cwd) {
        if existing.parent() == Some(cwd.as_path()) {
            anyhow::bail!("Project already initialized at {}", existing.display());
        }
    }

    let config = QuillConfig {
        quill: QuillSettings {
            path: options.data_path.unwrap_or_else(|| ".quill".to_string()),
            post_prefix: options.post_prefix,
            author_prefix: options.author_prefix,
            id_length: options.id_length,
            frontmatter: options.frontmatter.as_str().to_string(),
        },
        server: ServerSettings::default(),
    };

    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(data_path.join(Post::DIR))?;
    std::fs::create_dir_all(data_path.join(Author::DIR))?;

    config.save(&config_path)?;

    println!(
        "{} quill project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
