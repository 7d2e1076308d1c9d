use crate::cli::commands::PostCommand;
use crate::model::{Post, PostStatus};
use crate::storage::{FindMany, PostWhere};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::CommandContext;
use super::utils::{print_post, print_post_list, resolve_body};

pub fn handle_post(ctx: CommandContext, command: PostCommand) -> Result<()> {
    match command {
        PostCommand::Create {
            title,
            author,
            status,
            body,
            body_file,
            json,
        } => {
            let content = resolve_body(body, body_file)?;
            let mut post = Post::new(ctx.posts.generate_id(), title).with_author(author);
            if let Some(s) = status {
                let status: PostStatus = s.into();
                post = post.with_status(status);
            }
            if let Some(c) = content {
                post = post.with_content(c);
            }

            let path = ctx.posts.create_one(&post)?;
            let filename = path
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_default();

            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                println!("{} {} {}", "Created".green(), post.id.cyan(), filename);
            }
        }
        PostCommand::List {
            author,
            status,
            json,
        } => {
            let filter = PostWhere {
                author,
                status: status.map(Into::into),
                ..PostWhere::default()
            };
            let posts = ctx.posts.find_many(&FindMany::new(filter))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                print_post_list(&posts);
            }
        }
        PostCommand::Show { id, json } => {
            let post = ctx.posts.find_one(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                print_post(&post);
            }
        }
        PostCommand::Delete { id, force } => {
            if !force {
                print!("Delete {} permanently? [y/N] ", id.cyan());
                io::stdout().flush()?;
                let mut input = String::new();
                io::stdin().read_line(&mut input)?;
                if !input.trim().eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            ctx.posts.delete_one(&id)?;
            println!("{} {}", "Deleted".red(), id.cyan());
        }
    }
    Ok(())
}
