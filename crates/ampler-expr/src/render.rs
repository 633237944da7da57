//! Canonical textual serialization of expressions and relations.
//!
//! Rendering is deterministic: the same tree always produces the same
//! text, and parenthesization comes from the flags recorded at build
//! time rather than from operator precedence re-derivation.

use crate::element::IndexSet;
use crate::expr::{AggCall, Condition, Expr, Relation, SymbolRef};

/// Rendering configuration. All symbol lookups go through this object;
/// there is no process-global render state.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    show_indices: bool,
}

impl RenderOptions {
    pub fn new() -> RenderOptions {
        RenderOptions { show_indices: true }
    }

    /// Whether symbol occurrences render their index lists. Declaration
    /// contexts switch this off to emit bare names.
    pub fn with_show_indices(mut self, show_indices: bool) -> RenderOptions {
        self.show_indices = show_indices;
        self
    }

    pub fn show_indices(&self) -> bool {
        self.show_indices
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::new()
    }
}

/// Serializes expression trees to canonical text.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Renderer {
        Renderer { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Symbol(symbol) => self.render_symbol(symbol),
            Expr::Literal(value) => value.to_string(),
            Expr::Binary {
                op,
                lhs,
                rhs,
                parenthesized,
            } => {
                let body = format!(
                    "{} {} {}",
                    self.render_expr(lhs),
                    op.token(),
                    self.render_expr(rhs)
                );
                if *parenthesized {
                    format!("({body})")
                } else {
                    body
                }
            }
            Expr::Call(call) => self.render_call(call),
        }
    }

    pub fn render_relation(&self, relation: &Relation) -> String {
        format!(
            "{} {} {}",
            self.render_expr(relation.lhs()),
            relation.op().token(),
            self.render_expr(relation.rhs())
        )
    }

    pub fn render_symbol(&self, symbol: &SymbolRef) -> String {
        let mut out = symbol.name().to_string();
        if let Some(suffix) = symbol.suffix() {
            out.push('.');
            out.push_str(suffix.as_str());
        }
        if self.options.show_indices && !symbol.indices().is_empty() {
            out.push('(');
            out.push_str(&self.index_list(symbol.indices()));
            out.push(')');
        }
        if let Some(condition) = symbol.condition() {
            out.push_str(&self.render_condition(condition));
        }
        out
    }

    fn render_call(&self, call: &AggCall) -> String {
        // The domain is always a parenthesized tuple, even for one index.
        let mut domain = format!("({})", self.index_list(call.indices()));
        if let Some(condition) = call.condition() {
            domain.push_str(&self.render_condition(condition));
        }
        format!(
            "{}({},{})",
            call.func().as_str(),
            domain,
            self.render_expr(call.body())
        )
    }

    /// Trailing `$(...)` filter.
    pub fn render_condition(&self, condition: &Condition) -> String {
        let inner = match condition {
            Condition::Expr(expr) => self.render_expr(expr),
            Condition::Relation(relation) => self.render_relation(relation),
        };
        format!("$({inner})")
    }

    fn index_list(&self, indices: &[IndexSet]) -> String {
        indices
            .iter()
            .map(IndexSet::name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

// `Display` delegates to the default renderer so elements and trees drop
// into format strings.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Renderer::default().render_expr(self))
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Renderer::default().render_relation(self))
    }
}

impl std::fmt::Display for crate::element::Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::expr::Arithmetic;
        f.write_str(&Renderer::default().render_expr(&self.as_expr()))
    }
}

impl std::fmt::Display for crate::element::Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::expr::Arithmetic;
        f.write_str(&Renderer::default().render_expr(&self.as_expr()))
    }
}

impl std::fmt::Display for crate::element::Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
