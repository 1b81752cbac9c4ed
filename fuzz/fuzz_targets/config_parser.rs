//! Fuzz target for the config file and custom dialect record parsers.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use jdbc_dialect::{CodecConfig, CustomDialect};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parsers should never panic, only return errors
        let _ = CodecConfig::from_str(input);

        if let Ok(record) = CustomDialect::from_json(input) {
            if record.validate().is_ok() {
                let _ = record.to_descriptor().parse_url(input);
            }
        }
    }
});
