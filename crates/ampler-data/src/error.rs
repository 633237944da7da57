//! Marshalling and store errors.

/// Dense/sparse conversion failures. One failing symbol never corrupts
/// symbols already marshalled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// Dense data whose shape disagrees with the index-set cardinalities.
    ShapeMismatch {
        symbol: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    /// Key component absent from its target set's member sequence.
    UnknownMember { set: String, member: String },
    /// Dense marshalling beyond two index dimensions.
    UnsupportedDimension { symbol: String, dims: usize },
    /// Index set referenced for its members before any were loaded.
    MembersNotLoaded { set: String },
}

impl MarshalError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            MarshalError::ShapeMismatch { .. } => "DATA_SHAPE_MISMATCH",
            MarshalError::UnknownMember { .. } => "DATA_UNKNOWN_MEMBER",
            MarshalError::UnsupportedDimension { .. } => "DATA_UNSUPPORTED_DIMENSION",
            MarshalError::MembersNotLoaded { .. } => "DATA_MEMBERS_NOT_LOADED",
        }
    }
}

impl std::fmt::Display for MarshalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarshalError::ShapeMismatch {
                symbol,
                expected,
                actual,
            } => write!(
                f,
                "[{}] Symbol '{}' has data shape {:?}, expected {:?}",
                self.code(),
                symbol,
                actual,
                expected
            ),
            MarshalError::UnknownMember { set, member } => write!(
                f,
                "[{}] Member '{}' is not in set '{}'",
                self.code(),
                member,
                set
            ),
            MarshalError::UnsupportedDimension { symbol, dims } => write!(
                f,
                "[{}] Symbol '{}' has {} index dimensions; dense marshalling stops at 2",
                self.code(),
                symbol,
                dims
            ),
            MarshalError::MembersNotLoaded { set } => write!(
                f,
                "[{}] Set '{}' has no members loaded",
                self.code(),
                set
            ),
        }
    }
}

impl std::error::Error for MarshalError {}

/// Symbol store failures.
#[derive(Debug)]
pub enum StoreError {
    /// Queried symbol does not exist in the store.
    SymbolNotFound { symbol: String },
    /// Symbol exists but holds no records.
    SymbolEmpty { symbol: String },
    /// Snapshot that does not parse as a store.
    Malformed { detail: String },
    Io(std::io::Error),
}

impl StoreError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::SymbolNotFound { .. } => "STORE_SYMBOL_NOT_FOUND",
            StoreError::SymbolEmpty { .. } => "STORE_SYMBOL_EMPTY",
            StoreError::Malformed { .. } => "STORE_MALFORMED",
            StoreError::Io(_) => "STORE_IO",
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::SymbolNotFound { symbol } => {
                write!(f, "[{}] Symbol '{}' not found", self.code(), symbol)
            }
            StoreError::SymbolEmpty { symbol } => {
                write!(f, "[{}] Symbol '{}' holds no records", self.code(), symbol)
            }
            StoreError::Malformed { detail } => {
                write!(f, "[{}] Malformed store snapshot: {}", self.code(), detail)
            }
            StoreError::Io(err) => write!(f, "[{}] {}", self.code(), err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{MarshalError, StoreError};

    #[test]
    fn error_codes_are_stable() {
        let err = MarshalError::UnsupportedDimension {
            symbol: "c".to_string(),
            dims: 3,
        };
        assert_eq!(err.code(), "DATA_UNSUPPORTED_DIMENSION");

        let err = StoreError::SymbolNotFound {
            symbol: "x".to_string(),
        };
        assert_eq!(err.code(), "STORE_SYMBOL_NOT_FOUND");
    }

    #[test]
    fn display_names_expected_and_actual_shape() {
        let err = MarshalError::ShapeMismatch {
            symbol: "d".to_string(),
            expected: vec![2, 3],
            actual: vec![2, 2],
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("[DATA_SHAPE_MISMATCH]"));
        assert!(rendered.contains("[2, 3]"));
        assert!(rendered.contains("[2, 2]"));
    }
}
