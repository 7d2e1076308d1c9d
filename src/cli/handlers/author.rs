use crate::cli::commands::AuthorCommand;
use crate::model::Author;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_author, print_author_list};

pub fn handle_author(ctx: CommandContext, command: AuthorCommand) -> Result<()> {
    match command {
        AuthorCommand::Add {
            name,
            email,
            bio,
            json,
        } => {
            let mut author = Author::new(ctx.authors.generate_id(), name).with_email(email);
            if let Some(b) = bio {
                author = author.with_bio(b);
            }
            ctx.authors.create_one(&author)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&author)?);
            } else {
                println!("{} {} {}", "Added".green(), author.id.cyan(), author.name);
            }
        }
        AuthorCommand::List { json } => {
            let authors = ctx.authors.find_many()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&authors)?);
            } else {
                print_author_list(&authors);
            }
        }
        AuthorCommand::Show { id, json } => {
            let author = ctx.authors.find_one(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&author)?);
            } else {
                print_author(&author);
            }
        }
    }
    Ok(())
}
