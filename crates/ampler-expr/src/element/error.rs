//! Element construction errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// Variable kind outside {positive, binary, free}.
    InvalidKind { kind: String },
    /// Suffix token outside {l, m, lo, up, fx}.
    InvalidSuffix { suffix: String },
    /// Composite set declared over zero index sets.
    EmptyIndexList { set: String },
    /// Matrix row with a length different from the first row.
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Member tuple whose arity disagrees with the set's dimensionality.
    TupleArity {
        set: String,
        expected: usize,
        actual: usize,
    },
}

impl ElementError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ElementError::InvalidKind { .. } => "ELEMENT_INVALID_KIND",
            ElementError::InvalidSuffix { .. } => "ELEMENT_INVALID_SUFFIX",
            ElementError::EmptyIndexList { .. } => "SET_EMPTY_INDEX_LIST",
            ElementError::RaggedMatrix { .. } => "ELEMENT_RAGGED_MATRIX",
            ElementError::TupleArity { .. } => "SET_TUPLE_ARITY",
        }
    }
}

impl std::fmt::Display for ElementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementError::InvalidKind { kind } => {
                write!(f, "[{}] Variable kind '{}' is unknown", self.code(), kind)
            }
            ElementError::InvalidSuffix { suffix } => {
                write!(f, "[{}] Suffix '{}' is not valid", self.code(), suffix)
            }
            ElementError::EmptyIndexList { set } => write!(
                f,
                "[{}] Composite set '{}' requires at least one index set",
                self.code(),
                set
            ),
            ElementError::RaggedMatrix {
                row,
                expected,
                actual,
            } => write!(
                f,
                "[{}] Matrix row {} has {} entries, expected {}",
                self.code(),
                row,
                actual,
                expected
            ),
            ElementError::TupleArity {
                set,
                expected,
                actual,
            } => write!(
                f,
                "[{}] Member tuple for set '{}' has arity {}, expected {}",
                self.code(),
                set,
                actual,
                expected
            ),
        }
    }
}

impl std::error::Error for ElementError {}

#[cfg(test)]
mod tests {
    use super::ElementError;

    #[test]
    fn error_code_is_stable() {
        let err = ElementError::InvalidKind {
            kind: "integer".to_string(),
        };
        assert_eq!(err.code(), "ELEMENT_INVALID_KIND");
    }

    #[test]
    fn display_prefixes_error_code() {
        let err = ElementError::EmptyIndexList {
            set: "tt".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("[SET_EMPTY_INDEX_LIST]"));
        assert!(rendered.contains("tt"));
    }
}
