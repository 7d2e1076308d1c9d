use crate::storage::recent_cutoff;
use anyhow::Result;
use chrono::Utc;

use super::CommandContext;
use super::utils::print_post_list;

pub fn handle_recent(ctx: CommandContext, author: String, seconds: i32, json: bool) -> Result<()> {
    let cutoff = recent_cutoff(Utc::now(), i64::from(seconds));
    let posts = ctx.posts.recent_by(&author, cutoff)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        print_post_list(&posts);
    }
    Ok(())
}
