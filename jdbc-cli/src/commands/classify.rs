//! `jdbc-codec classify` command - Name the dialect of a driver class.

use crate::cli::ClassifyArgs;
use crate::config::Context;
use crate::error::CliResult;
use crate::output;

/// Run the classify command
///
/// Prints the built-in dialect id, or `Custom` for any other driver.
pub async fn run(ctx: &Context, args: ClassifyArgs) -> CliResult<()> {
    let registry = ctx.registry()?;
    let classification = registry.classify(&args.driver_class);

    output::plain(classification.as_str());

    Ok(())
}
