//! `jdbc-codec dialect` command - Inspect and manage dialects.

use jdbc_dialect::{CustomDialect, DialectDescriptor};

use crate::cli::{
    DialectAddArgs, DialectArgs, DialectListArgs, DialectRemoveArgs, DialectShowArgs,
    DialectSubcommand,
};
use crate::config::Context;
use crate::error::CliResult;
use crate::output::{self, kv, success};

/// Run the dialect command
pub async fn run(ctx: &Context, args: DialectArgs) -> CliResult<()> {
    match args.command {
        DialectSubcommand::List(args) => run_list(ctx, args).await,
        DialectSubcommand::Show(args) => run_show(ctx, args).await,
        DialectSubcommand::Add(args) => run_add(ctx, args).await,
        DialectSubcommand::Remove(args) => run_remove(ctx, args).await,
    }
}

/// Run `dialect list`
async fn run_list(ctx: &Context, args: DialectListArgs) -> CliResult<()> {
    let registry = ctx.registry()?;

    if args.json {
        let dialects: Vec<_> = registry.all().collect();
        output::plain(&serde_json::to_string_pretty(&dialects)?);
        return Ok(());
    }

    output::header("Dialects");

    output::section("Built-in");
    for dialect in registry.builtins() {
        output::list_item(&summary(dialect));
    }

    let customs: Vec<_> = registry.customs().collect();
    output::newline();
    output::section("Custom");
    if customs.is_empty() {
        output::dim("  (none)");
    }
    for dialect in customs {
        output::list_item(&summary(dialect));
    }
    output::newline();

    Ok(())
}

/// Run `dialect show`
async fn run_show(ctx: &Context, args: DialectShowArgs) -> CliResult<()> {
    let registry = ctx.registry()?;
    let dialect = registry.lookup(&args.id)?;

    if args.json {
        output::plain(&serde_json::to_string_pretty(dialect)?);
        return Ok(());
    }

    output::header(dialect.id());
    kv("Origin", dialect.origin().as_str());
    kv("Driver class", dialect.driver_class());
    kv("JDBC prefix", dialect.jdbc_prefix());
    kv("Default port", &dialect.default_port().to_string());
    kv("Separator", &dialect.separator().to_string());
    kv("Strategy", dialect.strategy().as_str());
    if let Some(artifact) = dialect.driver_artifact() {
        kv("Driver artifact", artifact);
    }
    output::newline();

    Ok(())
}

/// Run `dialect add`
async fn run_add(ctx: &Context, args: DialectAddArgs) -> CliResult<()> {
    let store = ctx.require_store()?;
    let record = CustomDialect::new(
        args.name,
        args.driver_class,
        args.jdbc_prefix,
        args.port,
        args.separator,
    );

    let replaced = store.load(&record.name).is_ok();
    let path = store.save(&record)?;

    let verb = if replaced { "Updated" } else { "Added" };
    success(&format!(
        "{} dialect `{}` ({})",
        verb,
        record.name,
        path.display()
    ));

    Ok(())
}

/// Run `dialect remove`
async fn run_remove(ctx: &Context, args: DialectRemoveArgs) -> CliResult<()> {
    let store = ctx.require_store()?;
    let path = store.remove(&args.name)?;

    success(&format!(
        "Removed dialect `{}` ({})",
        args.name,
        path.display()
    ));

    Ok(())
}

fn summary(dialect: &DialectDescriptor) -> String {
    format!(
        "{} - {} (port {})",
        dialect.id(),
        dialect.driver_class(),
        dialect.default_port()
    )
}
