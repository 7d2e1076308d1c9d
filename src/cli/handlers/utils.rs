use crate::model::{Author, Post, PostStatus};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Read};
use std::path::{Component, Path};

/// Resolve body content from CLI arg, file, or stdin
pub fn resolve_body(body: Option<String>, body_file: Option<String>) -> Result<Option<String>> {
    if let Some(b) = body {
        if b == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return Ok(Some(content.trim().to_string()));
        }
        return Ok(Some(b));
    }
    if let Some(path_str) = body_file {
        validate_body_file_path(&path_str)?;
        let content = std::fs::read_to_string(&path_str)
            .with_context(|| format!("Failed to read body from {}", path_str))?;
        return Ok(Some(content.trim().to_string()));
    }
    Ok(None)
}

/// Only relative paths inside the working directory are accepted
fn validate_body_file_path(path_str: &str) -> Result<()> {
    let path = Path::new(path_str);

    if path.is_absolute() {
        anyhow::bail!(
            "Absolute paths are not allowed for --body-file. Use relative paths only.\n\
             Attempted path: {}",
            path_str
        );
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir))
    {
        anyhow::bail!(
            "Path traversal is not allowed in --body-file paths.\n\
             Attempted path: {}",
            path_str
        );
    }

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let full_path = current_dir.join(path);
    if !full_path.exists() {
        anyhow::bail!("Body file does not exist: {}", path_str);
    }

    // Catches symlinks pointing outside the tree
    let canonical_path = full_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path_str))?;
    let canonical_current = current_dir
        .canonicalize()
        .context("Failed to canonicalize current directory")?;
    if !canonical_path.starts_with(&canonical_current) {
        anyhow::bail!(
            "Body file must be within the current directory tree.\n\
             Attempted to access: {}",
            canonical_path.display()
        );
    }

    Ok(())
}

/// Format status with color coding
pub fn format_status(status: PostStatus) -> colored::ColoredString {
    match status {
        PostStatus::Draft => "draft".dimmed(),
        PostStatus::Published => "published".green(),
    }
}

/// Print a single post with details
pub fn print_post(post: &Post) {
    println!("{} {}", post.id.cyan().bold(), post.title.bold());
    println!("Status:    {}", format_status(post.status));
    if let Some(ref author) = post.author {
        println!("Author:    {}", author.cyan());
    }
    if let Some(date) = post.publish_date {
        println!("Published: {}", date.format("%Y-%m-%d %H:%M:%S"));
    }
    println!(
        "Created:   {}",
        post.created.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );
    println!(
        "Updated:   {}",
        post.updated.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );

    if !post.content.is_empty() {
        println!();
        println!("{}", post.content);
    }
}

/// Print a list of posts (compact format)
pub fn print_post_list(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for post in posts {
        let date = post
            .publish_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} {} {} {}",
            post.id.cyan(),
            format_status(post.status),
            date.dimmed(),
            post.title
        );
    }
}

pub fn print_author(author: &Author) {
    println!("{} {}", author.id.cyan().bold(), author.name.bold());
    if let Some(ref email) = author.email {
        println!("Email:   {}", email);
    }
    println!(
        "Created: {}",
        author.created.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );
    if !author.bio.is_empty() {
        println!();
        println!("{}", author.bio);
    }
}

pub fn print_author_list(authors: &[Author]) {
    if authors.is_empty() {
        println!("No authors found.");
        return;
    }

    for author in authors {
        match author.email {
            Some(ref email) => println!("{} {} <{}>", author.id.cyan(), author.name, email),
            None => println!("{} {}", author.id.cyan(), author.name),
        }
    }
}
