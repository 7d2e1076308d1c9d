use anyhow::Result;
use clap::Parser;

use quill::cli::handlers::{self, CommandContext, InitOptions};
use quill::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    quill::logging::init(cli.verbose, cli.log_file);

    let config_path = cli.config;
    let load = || CommandContext::load(config_path.as_deref());

    match cli.command {
        Commands::Init {
            post_prefix,
            author_prefix,
            id_length,
            frontmatter,
            data_path,
        } => handlers::handle_init(InitOptions {
            post_prefix,
            author_prefix,
            id_length,
            frontmatter,
            data_path,
        }),
        Commands::Schema => handlers::handle_schema(),
        Commands::Author(command) => handlers::handle_author(load()?, command),
        Commands::Post(command) => handlers::handle_post(load()?, command),
        Commands::Publish { id, json } => handlers::handle_publish(load()?, id, json),
        Commands::Stats { author, json } => handlers::handle_stats(load()?, author, json),
        Commands::Recent {
            author,
            seconds,
            json,
        } => handlers::handle_recent(load()?, author, seconds, json),
        Commands::Query { query, variables } => handlers::handle_query(load()?, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(load()?, mutation, variables),
        Commands::Serve { host, port } => handlers::handle_serve(load()?, host, port),
    }
}
