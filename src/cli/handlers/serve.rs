use crate::graphql::{build_schema, run_server};
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = build_schema(ctx.config, ctx.root);

    println!("Starting GraphQL server on http://{}:{}/graphql", host, port);
    println!("GraphiQL: http://{}:{}/graphql", host, port);

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &host, port))?;
    Ok(())
}
