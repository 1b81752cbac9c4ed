//! `jdbc-codec build` command - Assemble a URL from parts.

use jdbc_dialect::ConnectionParts;
use tracing::debug;

use crate::cli::BuildArgs;
use crate::config::Context;
use crate::error::CliResult;
use crate::output;

/// Run the build command
///
/// Parts given on the command line win. Anything left out comes from the
/// `--from` URL, then from the config defaults and the dialect's port.
pub async fn run(ctx: &Context, args: BuildArgs) -> CliResult<()> {
    let registry = ctx.registry()?;
    let dialect = registry.lookup(&args.dialect)?;

    let mut defaults = ctx.config().build_defaults(dialect);
    if let Some(old) = args.from.as_deref() {
        defaults = defaults.with_parts(&dialect.parse_url(old));
    }

    let parts = ConnectionParts {
        server_address: args.host,
        port: args.port,
        database_name: args.database,
    };
    debug!(dialect = dialect.id(), ?parts, ?defaults, "Building URL");

    let url = dialect.build_url(args.from.as_deref(), &parts, &defaults);
    output::plain(&url);

    Ok(())
}
