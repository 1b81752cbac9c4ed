//! `jdbc-codec parse` command - Split a URL into its parts.

use jdbc_dialect::UrlCodec;

use crate::cli::ParseArgs;
use crate::config::Context;
use crate::error::CliResult;
use crate::output::{self, kv, kv_opt};

/// Run the parse command
pub async fn run(ctx: &Context, args: ParseArgs) -> CliResult<()> {
    let registry = ctx.registry()?;
    let parts = UrlCodec::new(&registry).parse(&args.dialect, &args.url)?;

    if args.json {
        output::plain(&serde_json::to_string_pretty(&parts)?);
        return Ok(());
    }

    output::header("Connection Parts");
    kv("Dialect", &args.dialect);
    kv_opt("Server address", parts.server_address.as_deref());
    kv_opt("Port", parts.port.map(|p| p.to_string()).as_deref());
    kv_opt("Database", parts.database_name());
    output::newline();

    Ok(())
}
