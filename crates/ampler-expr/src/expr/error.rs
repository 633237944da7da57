//! Expression construction errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Relational token outside {=e=, =l=, =g=}.
    InvalidOperator { token: String },
    /// Aggregation declared over zero index sets.
    EmptyDomain { func: &'static str },
    /// Equation used as an operand without a suffix view.
    BareEquation { name: String },
    /// Operand category that cannot appear in arithmetic.
    UnsupportedOperand { category: &'static str },
}

impl ExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExprError::InvalidOperator { .. } => "EXPR_INVALID_OPERATOR",
            ExprError::EmptyDomain { .. } => "EXPR_EMPTY_DOMAIN",
            ExprError::BareEquation { .. } => "EXPR_BARE_EQUATION",
            ExprError::UnsupportedOperand { .. } => "EXPR_UNSUPPORTED_OPERAND",
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprError::InvalidOperator { token } => {
                write!(f, "[{}] Relational token '{}' is unknown", self.code(), token)
            }
            ExprError::EmptyDomain { func } => write!(
                f,
                "[{}] Aggregation '{}' requires at least one index set",
                self.code(),
                func
            ),
            ExprError::BareEquation { name } => write!(
                f,
                "[{}] Equation '{}' needs a suffix view (l, m, lo, up) to appear in an expression",
                self.code(),
                name
            ),
            ExprError::UnsupportedOperand { category } => write!(
                f,
                "[{}] A {} cannot appear as an arithmetic operand",
                self.code(),
                category
            ),
        }
    }
}

impl std::error::Error for ExprError {}
