//! Model error types.

use ampler_data::MarshalError;

/// Errors raised while assembling or exporting a model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Mutation attempted after data export began.
    Frozen { operation: &'static str },
    /// Data export invoked a second time.
    AlreadyExported,
    /// Render or solve attempted before data export.
    DataNotExported,
    /// Model used again after a cancelled or failed solve.
    Invalidated,
    /// Symbol name already declared in this model.
    DuplicateSymbol { name: String },
    /// Symbol referenced that this model never declared.
    UnknownSymbol { name: String },
    /// No objective variable designated.
    NoObjective,
    /// Objective variable designated twice.
    ObjectiveAlreadySet,
    /// Equation declared but never given a defining relation.
    UndefinedEquation { name: String },
    /// Marshalling failure for one symbol's data.
    Marshal(MarshalError),
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::Frozen { .. } => "MODEL_FROZEN",
            ModelError::AlreadyExported => "MODEL_ALREADY_EXPORTED",
            ModelError::DataNotExported => "MODEL_DATA_NOT_EXPORTED",
            ModelError::Invalidated => "MODEL_INVALIDATED",
            ModelError::DuplicateSymbol { .. } => "MODEL_DUPLICATE_SYMBOL",
            ModelError::UnknownSymbol { .. } => "MODEL_UNKNOWN_SYMBOL",
            ModelError::NoObjective => "OBJECTIVE_MISSING",
            ModelError::ObjectiveAlreadySet => "OBJECTIVE_ALREADY_SET",
            ModelError::UndefinedEquation { .. } => "EQUATION_UNDEFINED",
            ModelError::Marshal(inner) => inner.code(),
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Frozen { operation } => write!(
                f,
                "[{}] '{}' is not allowed after data export",
                self.code(),
                operation
            ),
            ModelError::AlreadyExported => {
                write!(f, "[{}] Model data was already exported", self.code())
            }
            ModelError::DataNotExported => write!(
                f,
                "[{}] Export data before rendering or solving",
                self.code()
            ),
            ModelError::Invalidated => write!(
                f,
                "[{}] Model was invalidated by a cancelled solve",
                self.code()
            ),
            ModelError::DuplicateSymbol { name } => {
                write!(f, "[{}] Symbol '{}' is already declared", self.code(), name)
            }
            ModelError::UnknownSymbol { name } => {
                write!(f, "[{}] Symbol '{}' is not declared", self.code(), name)
            }
            ModelError::NoObjective => {
                write!(f, "[{}] Model has no objective variable", self.code())
            }
            ModelError::ObjectiveAlreadySet => {
                write!(f, "[{}] Model already has an objective variable", self.code())
            }
            ModelError::UndefinedEquation { name } => {
                write!(f, "[{}] Equation '{}' has no definition", self.code(), name)
            }
            ModelError::Marshal(inner) => inner.fmt(f),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Marshal(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<MarshalError> for ModelError {
    fn from(err: MarshalError) -> Self {
        ModelError::Marshal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::ModelError;
    use ampler_data::MarshalError;

    #[test]
    fn error_code_is_stable() {
        assert_eq!(ModelError::AlreadyExported.code(), "MODEL_ALREADY_EXPORTED");
        assert_eq!(
            ModelError::Frozen { operation: "add_set" }.code(),
            "MODEL_FROZEN"
        );
    }

    #[test]
    fn marshal_errors_keep_their_code() {
        let err = ModelError::from(MarshalError::UnknownMember {
            set: "i".to_string(),
            member: "z".to_string(),
        });
        assert_eq!(err.code(), "DATA_UNKNOWN_MEMBER");
    }
}
