//! Fuzz target for URL building.
//!
//! Builds URLs from structured input and checks that well-formed parts
//! survive a round trip and that positional query parameters are kept.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_build_url
//! ```

#![no_main]

use arbitrary::Arbitrary;
use jdbc_dialect::{BUILTIN_DIALECTS, BuildDefaults, ConnectionParts, Strategy};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct BuildInput {
    dialect: u8,
    old_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    database: Option<String>,
}

fuzz_target!(|input: BuildInput| {
    let dialect = &BUILTIN_DIALECTS[usize::from(input.dialect) % BUILTIN_DIALECTS.len()];
    let parts = ConnectionParts {
        server_address: input.host,
        port: input.port,
        database_name: input.database,
    };
    let defaults = BuildDefaults::for_dialect(dialect);

    let url = dialect.build_url(input.old_url.as_deref(), &parts, &defaults);
    assert!(url.starts_with(dialect.jdbc_prefix()));

    if dialect.strategy() == Strategy::SeparatorPositional {
        if let Some(old) = input.old_url.as_deref() {
            if let Some(start) = old.find('?') {
                assert!(url.ends_with(&old[start..]));
            }
        }
    }

    // Round trip only holds for parts free of delimiters
    let sep = dialect.separator();
    let clean = |s: &str| !s.is_empty() && !s.contains([':', '?', ';', '=', sep]);
    let well_formed = input.old_url.is_none()
        && parts.server_address.as_deref().is_some_and(clean)
        && parts.database_name.as_deref().is_some_and(clean)
        && parts.port.is_some();

    if well_formed {
        assert_eq!(dialect.parse_url(&url), parts);
    }
});
