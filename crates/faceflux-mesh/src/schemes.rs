//! Per-field interpolation scheme selection.

use faceflux_core::SchemeError;
use indexmap::IndexMap;
use std::str::FromStr;

/// Key under which [`SchemeTable::parse`] stores the fallback entry.
pub const DEFAULT_KEY: &str = "default";

/// Maps field names to scheme specification text.
///
/// Lookups fall back to the default entry when a field has no entry of its
/// own. The text is resolved into a scheme instance by a scheme registry.
///
/// # Text format
///
/// One entry per line, `<field> <scheme> [params...]`. A `#` starts a
/// comment, blank lines are ignored, and a trailing `;` is stripped. The
/// field name `default` sets the fallback.
///
/// ```
/// use faceflux_mesh::SchemeTable;
///
/// let table: SchemeTable = "
///     default  linear
///     T        vanLeer          # temperature
///     U        limitedLinear 0.5;
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(table.get("T"), Some("vanLeer"));
/// assert_eq!(table.get("U"), Some("limitedLinear 0.5"));
/// assert_eq!(table.get("k"), Some("linear"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemeTable {
    entries: IndexMap<String, String>,
    default: Option<String>,
}

impl SchemeTable {
    /// Create an empty table with no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, field: impl Into<String>, spec: impl Into<String>) -> Self {
        self.insert(field, spec);
        self
    }

    /// Builder-style [`set_default`](Self::set_default).
    pub fn with_default(mut self, spec: impl Into<String>) -> Self {
        self.set_default(spec);
        self
    }

    /// Set the scheme for `field`, returning the previous specification.
    pub fn insert(&mut self, field: impl Into<String>, spec: impl Into<String>) -> Option<String> {
        self.entries.insert(field.into(), spec.into())
    }

    /// Set the fallback scheme, returning the previous one.
    pub fn set_default(&mut self, spec: impl Into<String>) -> Option<String> {
        self.default.replace(spec.into())
    }

    /// The fallback specification, if any.
    pub fn default_spec(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Specification for `field`, falling back to the default.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .get(field)
            .map(String::as_str)
            .or(self.default.as_deref())
    }

    /// Like [`get`](Self::get), but a missing entry is an error.
    pub fn lookup(&self, field: &str) -> Result<&str, SchemeError> {
        self.get(field)
            .ok_or_else(|| SchemeError::NoSchemeConfigured {
                field: field.to_string(),
            })
    }

    /// Explicit entries, in insertion order (the default is not included).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has neither entries nor a default.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.default.is_none()
    }

    /// Parse a table from text. See the type-level docs for the format.
    ///
    /// # Errors
    ///
    /// [`SchemeError::InvalidConfig`] for a line with a field name but no
    /// scheme.
    pub fn parse(text: &str) -> Result<Self, SchemeError> {
        let mut table = Self::new();
        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            let line = line.strip_suffix(';').unwrap_or(line).trim_end();
            let mut words = line.split_whitespace();
            let Some(key) = words.next() else {
                continue;
            };
            let spec = words.collect::<Vec<_>>().join(" ");
            if spec.is_empty() {
                return Err(SchemeError::InvalidConfig {
                    scheme: key.to_string(),
                    reason: format!("line {}: missing scheme specification", lineno + 1),
                });
            }
            if key == DEFAULT_KEY {
                table.set_default(spec);
            } else {
                table.insert(key, spec);
            }
        }
        Ok(table)
    }
}

impl FromStr for SchemeTable {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
