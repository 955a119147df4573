//! Error types for scheme construction and evaluation.
//!
//! Every error here is a setup-time failure: unknown scheme names, missing
//! bound fields, malformed configuration. Numerical degeneracies (zero
//! gradients, zero flux) are handled in the arithmetic and never surface as
//! errors.

use crate::value::ValueKind;
use std::error::Error;
use std::fmt;

/// Errors from reading a scheme configuration token stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamError {
    /// The stream ran out of tokens.
    UnexpectedEnd {
        /// What the reader was looking for.
        expected: &'static str,
    },
    /// A token could not be parsed as a finite number.
    InvalidNumber {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of scheme stream, expected {expected}")
            }
            Self::InvalidNumber { token } => write!(f, "'{token}' is not a finite number"),
        }
    }
}

impl Error for StreamError {}

/// Errors from scheme registration, resolution, construction, and use.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemeError {
    /// No constructor is registered under this name.
    UnknownScheme {
        /// The requested name.
        name: String,
        /// Registered names, in registration order.
        known: Vec<String>,
    },
    /// A constructor is already registered under this name.
    DuplicateScheme {
        /// The contested name.
        name: String,
    },
    /// A named field is not present in the field store.
    MissingField {
        /// The requested field name.
        name: String,
    },
    /// A named field exists but stores a different type.
    FieldTypeMismatch {
        /// The requested field name.
        name: String,
        /// Type the caller asked for.
        expected: String,
        /// Type actually stored.
        found: String,
    },
    /// A flux-dependent scheme was built without a flux field.
    MissingFlux {
        /// The scheme that needs a flux.
        scheme: String,
    },
    /// Scheme parameters are malformed or out of range.
    InvalidConfig {
        /// The scheme being configured.
        scheme: String,
        /// What went wrong.
        reason: String,
    },
    /// A field's length does not match the mesh the scheme is bound to.
    SizeMismatch {
        /// Which quantity was mis-sized.
        what: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        found: usize,
    },
    /// The scheme table has no entry for this field and no default.
    NoSchemeConfigured {
        /// Name of the field being interpolated.
        field: String,
    },
    /// The scheme does not support this value kind.
    UnsupportedValueKind {
        /// The scheme name.
        scheme: String,
        /// The value kind requested.
        kind: ValueKind,
    },
    /// The configuration token stream was malformed.
    Stream(StreamError),
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownScheme { name, known } => {
                write!(
                    f,
                    "unknown interpolation scheme '{name}', valid schemes are: [{}]",
                    known.join(", ")
                )
            }
            Self::DuplicateScheme { name } => {
                write!(f, "interpolation scheme '{name}' is already registered")
            }
            Self::MissingField { name } => write!(f, "field '{name}' not found in field store"),
            Self::FieldTypeMismatch {
                name,
                expected,
                found,
            } => write!(f, "field '{name}' is a {found}, expected a {expected}"),
            Self::MissingFlux { scheme } => {
                write!(f, "scheme '{scheme}' requires a face flux field")
            }
            Self::InvalidConfig { scheme, reason } => {
                write!(f, "invalid configuration for scheme '{scheme}': {reason}")
            }
            Self::SizeMismatch {
                what,
                expected,
                found,
            } => write!(f, "{what} has {found} elements, expected {expected}"),
            Self::NoSchemeConfigured { field } => {
                write!(f, "no interpolation scheme configured for field '{field}'")
            }
            Self::UnsupportedValueKind { scheme, kind } => {
                write!(f, "scheme '{scheme}' does not support {kind} fields")
            }
            Self::Stream(e) => write!(f, "scheme stream: {e}"),
        }
    }
}

impl Error for SchemeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Stream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StreamError> for SchemeError {
    fn from(e: StreamError) -> Self {
        Self::Stream(e)
    }
}
