//! `jdbc-codec version` command - Display version information.

use jdbc_dialect::BUILTIN_DIALECTS;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::header("jdbc-codec");

    kv("Version", VERSION);
    kv("Package", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();
    output::section("Built-in dialects");
    for dialect in BUILTIN_DIALECTS.iter() {
        output::list_item(dialect.id());
    }
    output::newline();

    Ok(())
}
