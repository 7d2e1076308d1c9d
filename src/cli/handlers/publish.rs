use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use super::CommandContext;

pub fn handle_publish(ctx: CommandContext, id: String, json: bool) -> Result<()> {
    let post = ctx.posts.publish(&id, Utc::now())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        let date = post
            .publish_date
            .map(|d| d.to_rfc3339())
            .unwrap_or_default();
        println!(
            "{} {} at {}",
            "Published".green(),
            post.id.cyan(),
            date.dimmed()
        );
    }
    Ok(())
}
