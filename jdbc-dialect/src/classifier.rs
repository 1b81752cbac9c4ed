//! Reverse lookup from a saved driver class name to its dialect.

use smol_str::SmolStr;

use crate::dialect::{BUILTIN_DIALECTS, DialectDescriptor};

/// Name reported for driver classes outside the built-in dialects.
pub const CUSTOM_SENTINEL: &str = "Custom";

/// Which dialect produced a saved connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// One of the built-in dialects, by id.
    BuiltIn(SmolStr),
    /// A dialect outside the built-in set; the driver class itself remains
    /// the source of truth.
    Custom,
}

impl Classification {
    /// The dialect id, or [`CUSTOM_SENTINEL`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::BuiltIn(id) => id,
            Self::Custom => CUSTOM_SENTINEL,
        }
    }

    /// The built-in dialect id, if any.
    pub fn dialect_id(&self) -> Option<&str> {
        match self {
            Self::BuiltIn(id) => Some(id),
            Self::Custom => None,
        }
    }

    /// Check if a built-in dialect matched.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::BuiltIn(_))
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identify the built-in dialect whose driver class is `driver_class`.
///
/// ```rust
/// use jdbc_dialect::classifier::{Classification, classify};
///
/// assert_eq!(classify("oracle.jdbc.driver.OracleDriver").as_str(), "Oracle");
/// assert_eq!(classify("org.unknown.Driver"), Classification::Custom);
/// ```
pub fn classify(driver_class: &str) -> Classification {
    classify_among(BUILTIN_DIALECTS.iter(), driver_class)
}

pub(crate) fn classify_among<'a>(
    dialects: impl IntoIterator<Item = &'a DialectDescriptor>,
    driver_class: &str,
) -> Classification {
    dialects
        .into_iter()
        .find(|dialect| dialect.driver_class() == driver_class)
        .map_or(Classification::Custom, |dialect| {
            Classification::BuiltIn(SmolStr::from(dialect.id()))
        })
}
