//! Fuzz target for URL parsing.
//!
//! Feeds arbitrary strings to every built-in dialect. Parsing must never
//! panic, and whenever it reports no address it must report the default port.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parse_url
//! ```

#![no_main]

use jdbc_dialect::BUILTIN_DIALECTS;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(url) = std::str::from_utf8(data) else {
        return;
    };

    for dialect in BUILTIN_DIALECTS.iter() {
        let parts = dialect.parse_url(url);

        if !parts.has_server_address() {
            assert_eq!(parts.port, Some(dialect.default_port()));
            assert!(parts.database_name.is_none());
        }
    }
});
