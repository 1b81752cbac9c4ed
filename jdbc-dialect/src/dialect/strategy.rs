//! Database name extraction and rebuild strategies.
//!
//! A dialect locates its database name in one of two ways:
//!
//! ```text
//! SeparatorPositional   jdbc:postgresql://host:5432/sales?ssl=true
//!                                              ^ last separator, name ends at `?`
//!
//! KeyValueEmbedded      jdbc:sqlserver://host:1443;databaseName=sales;encrypt=true
//!                                             ^ first `;`, name is a parameter value
//! ```

use serde::Serialize;
use tracing::trace;

use super::DialectDescriptor;

/// Name of the parameter carrying the database in the key/value shape.
pub const DATABASE_NAME_KEY: &str = "databaseName";

const PARAMETER_DELIMITER: char = ';';
const QUERY_DELIMITER: char = '?';

/// How a dialect embeds the database name in its connection URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// The database name is the segment after the last separator.
    #[default]
    SeparatorPositional,
    /// The database name is the `databaseName=` parameter (MS SQL).
    KeyValueEmbedded,
}

/// Where the database name sits inside a prefix-stripped URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseSegment<'a> {
    /// Byte index where the address part ends.
    pub boundary: usize,
    /// The database name, possibly empty.
    pub name: &'a str,
}

impl Strategy {
    /// Locate the database name in a prefix-stripped URL.
    ///
    /// Returns `None` when the URL has no boundary at all (no separator for the
    /// positional shape, no `;` for the key/value shape).
    pub fn extract<'u>(
        self,
        url: &'u str,
        dialect: &DialectDescriptor,
    ) -> Option<DatabaseSegment<'u>> {
        let segment = match self {
            Self::SeparatorPositional => extract_positional(url, dialect.separator()),
            Self::KeyValueEmbedded => extract_embedded(url),
        };
        trace!(strategy = %self, found = segment.is_some(), "Strategy::extract()");
        segment
    }

    /// Render the database segment that follows `host:port`.
    pub fn build(self, dialect: &DialectDescriptor, database_name: &str) -> String {
        match self {
            Self::SeparatorPositional => {
                let mut segment = String::with_capacity(database_name.len() + 1);
                segment.push(dialect.separator());
                segment.push_str(database_name);
                segment
            }
            Self::KeyValueEmbedded => format!(";{DATABASE_NAME_KEY}={database_name}"),
        }
    }

    /// Extract the trailing driver parameters the codec does not interpret.
    ///
    /// The result is appended verbatim after the database segment when a URL
    /// is rebuilt, so it carries its own leading delimiter.
    pub fn extract_parameters(self, url: &str) -> String {
        match self {
            Self::SeparatorPositional => url
                .find(QUERY_DELIMITER)
                .map(|start| url[start..].to_string())
                .unwrap_or_default(),
            Self::KeyValueEmbedded => extract_embedded_parameters(url),
        }
    }

    /// Get the strategy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SeparatorPositional => "separator-positional",
            Self::KeyValueEmbedded => "key-value-embedded",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn extract_positional(url: &str, separator: char) -> Option<DatabaseSegment<'_>> {
    let boundary = url.rfind(separator)?;
    let candidate = &url[boundary + separator.len_utf8()..];
    let name = candidate
        .split_once(QUERY_DELIMITER)
        .map_or(candidate, |(name, _)| name);

    Some(DatabaseSegment { boundary, name })
}

fn extract_embedded(url: &str) -> Option<DatabaseSegment<'_>> {
    let boundary = url.find(PARAMETER_DELIMITER)?;
    let name = url[boundary + 1..]
        .split(PARAMETER_DELIMITER)
        .find_map(|parameter| {
            let (key, value) = split_parameter(parameter);
            (key == DATABASE_NAME_KEY).then_some(value)
        })
        .unwrap_or("");

    Some(DatabaseSegment { boundary, name })
}

fn extract_embedded_parameters(url: &str) -> String {
    let Some((_, parameters)) = url.split_once(PARAMETER_DELIMITER) else {
        return String::new();
    };

    let kept: Vec<&str> = parameters
        .split(PARAMETER_DELIMITER)
        .filter(|parameter| !parameter.is_empty())
        .filter(|parameter| split_parameter(parameter).0 != DATABASE_NAME_KEY)
        .collect();

    if kept.is_empty() {
        String::new()
    } else {
        format!(";{}", kept.join(";"))
    }
}

/// Split `key=value`; a parameter without `=` has an empty value.
fn split_parameter(parameter: &str) -> (&str, &str) {
    parameter.split_once('=').unwrap_or((parameter, ""))
}
