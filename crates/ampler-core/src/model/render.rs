//! Phase two of export: the canonical textual model form.

use std::fmt::Write as _;
use std::path::Path;

use ampler_expr::{IndexSet, Renderer, VarKind};
use tracing::debug;

use crate::model::{Model, ModelError, Phase};

fn declaration(name: &str, indices: &[IndexSet]) -> String {
    if indices.is_empty() {
        name.to_string()
    } else {
        let list: Vec<&str> = indices.iter().map(IndexSet::name).collect();
        format!("{}({})", name, list.join(","))
    }
}

impl Model {
    /// Render the model text, referencing the exported data store by
    /// path. Requires [`Model::export_data`] to have completed; the walk
    /// is deterministic and leaves the model untouched.
    pub fn render_model(&self, data_path: &Path) -> Result<String, ModelError> {
        match self.phase {
            Phase::DataExported => {}
            Phase::Building => return Err(ModelError::DataNotExported),
            Phase::Invalid => return Err(ModelError::Invalidated),
        }
        let (objective, sense) = self.objective().ok_or(ModelError::NoObjective)?;
        let renderer = Renderer::default();
        let mut out = String::new();
        let _ = writeln!(out, "$title {}", self.name());

        if !self.sets.is_empty() {
            out.push_str("Sets\n");
            for set in self.ordered_sets() {
                let _ = writeln!(out, "    {}", declaration(set.name(), set.index_sets()));
            }
            out.push_str(";\n");
        }
        for alias in self.aliases.values() {
            let _ = writeln!(out, "Alias ({}, {});", alias.aliased().name(), alias.name());
        }

        if !self.parameters.is_empty() {
            out.push_str("Parameters\n");
            for parameter in self.parameters.values() {
                let _ = writeln!(
                    out,
                    "    {}",
                    declaration(parameter.name(), parameter.indices())
                );
            }
            out.push_str(";\n");
        }

        let mut loaded: Vec<&str> = Vec::new();
        for set in self.ordered_sets() {
            if set.members().is_some() {
                loaded.push(set.name());
            }
        }
        for parameter in self.parameters.values() {
            if parameter.is_loaded() {
                loaded.push(parameter.name());
            }
        }
        if !loaded.is_empty() {
            let _ = writeln!(out, "$gdxin {}", data_path.display());
            let _ = writeln!(out, "$load {}", loaded.join(" "));
            out.push_str("$gdxin\n");
        }

        for (kind, heading) in [
            (VarKind::Positive, "Positive Variables"),
            (VarKind::Binary, "Binary Variables"),
            (VarKind::Free, "Free Variables"),
        ] {
            let group: Vec<_> = self
                .variables
                .values()
                .filter(|v| v.kind() == kind)
                .collect();
            if group.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{heading}");
            for variable in group {
                let _ = writeln!(
                    out,
                    "    {}",
                    declaration(variable.name(), variable.indices())
                );
            }
            out.push_str(";\n");
        }

        if !self.equations.is_empty() {
            out.push_str("Equations\n");
            for equation in self.equations.values() {
                let _ = writeln!(
                    out,
                    "    {}",
                    declaration(equation.name(), equation.indices())
                );
            }
            out.push_str(";\n");
            for equation in self.equations.values() {
                let relation =
                    equation
                        .definition()
                        .ok_or_else(|| ModelError::UndefinedEquation {
                            name: equation.name().to_string(),
                        })?;
                let mut head = declaration(equation.name(), equation.indices());
                if let Some(condition) = equation.condition() {
                    head.push_str(&renderer.render_condition(condition));
                }
                let _ = writeln!(out, "{}.. {};", head, renderer.render_relation(relation));
            }
        }

        let problem = if self
            .variables
            .values()
            .any(|v| v.kind() == VarKind::Binary)
        {
            "mip"
        } else {
            "lp"
        };
        let _ = writeln!(out, "\nModel {} /all/;", self.name());
        let _ = writeln!(
            out,
            "Solve {} using {} {} {};",
            self.name(),
            problem,
            sense.as_str(),
            objective
        );

        debug!(
            component = "model",
            operation = "render_model",
            model = self.name(),
            equations = self.equations.len(),
            bytes = out.len(),
            "model text rendered"
        );
        Ok(out)
    }
}
