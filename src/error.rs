use std::fmt;

/// Error kind, usable for programmatic matching without string inspection.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Malformed caller input (bad request shape, missing order id, ...).
    Validation,
    /// Symbol absent from the supplied asset metadata.
    UnknownSymbol,
    /// A value that cannot be represented within the allowed decimal budget.
    Numeric,
}

/// Crate-wide error type.
///
/// All failures here are local, deterministic and non-transient: re-invoking
/// with the same input yields the same error. Retry policy belongs to the
/// transport layer.
#[derive(Clone, Debug)]
pub struct Error {
    kind: Kind,
    message: String,
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Validation,
            message: message.into(),
        }
    }

    pub fn unknown_symbol(symbol: &str) -> Self {
        Self {
            kind: Kind::UnknownSymbol,
            message: format!("symbol not found in asset metadata: `{symbol}`"),
        }
    }

    pub fn numeric(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Numeric,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
