use crate::model::PostStatus;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_stats(ctx: CommandContext, author: String, json: bool) -> Result<()> {
    let draft = ctx.posts.count_by_status(&author, PostStatus::Draft)?;
    let published = ctx.posts.count_by_status(&author, PostStatus::Published)?;
    let latest = ctx.posts.latest_by(&author)?;

    if json {
        let stats = serde_json::json!({
            "authorId": author,
            "draft": draft,
            "published": published,
            "latest": latest,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{} {}", "Statistics for".bold(), author.cyan());
    println!("Draft:     {}", draft);
    println!("Published: {}", published);
    match latest {
        Some(post) => println!("Latest:    {} {}", post.id.cyan(), post.title),
        None => println!("Latest:    {}", "-".dimmed()),
    }
    Ok(())
}
