//! Model assembly and lifecycle.
//!
//! # Module Organization
//!
//! - [`error`]: model error types
//! - [`builder`]: methods for declaring symbols and the objective
//! - [`export`]: data export into a symbol store
//! - [`metadata`]: per-symbol metadata annotations
//! - [`render`]: canonical textual model rendering
//!
//! A model moves through a strict two-phase lifecycle: symbols may only
//! be declared while [`Phase::Building`]; [`Model::export_data`] moves it
//! to [`Phase::DataExported`], after which the text form can be rendered
//! and a solve launched. A cancelled or failed solve marks the model
//! [`Phase::Invalid`], and it cannot be reused.

mod builder;
mod error;
mod export;
mod metadata;
mod render;

use std::collections::BTreeMap;

use ampler_expr::{Alias, Equation, Parameter, Set, Variable};
use indexmap::IndexMap;

pub use error::ModelError;

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimizing",
            Sense::Maximize => "maximizing",
        }
    }
}

/// Lifecycle phase of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Building,
    DataExported,
    Invalid,
}

/// A declarative algebraic model: named symbol collections, one
/// designated objective variable, and a lifecycle phase.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    pub(crate) sets: IndexMap<String, Set>,
    pub(crate) aliases: IndexMap<String, Alias>,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) variables: IndexMap<String, Variable>,
    pub(crate) equations: IndexMap<String, Equation>,
    pub(crate) objective: Option<(String, Sense)>,
    pub(crate) metadata: Option<BTreeMap<String, serde_json::Value>>,
    pub(crate) phase: Phase,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Model {
        Model {
            name: name.into(),
            sets: IndexMap::new(),
            aliases: IndexMap::new(),
            parameters: IndexMap::new(),
            variables: IndexMap::new(),
            equations: IndexMap::new(),
            objective: None,
            metadata: None,
            phase: Phase::Building,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn objective(&self) -> Option<(&str, Sense)> {
        self.objective
            .as_ref()
            .map(|(name, sense)| (name.as_str(), *sense))
    }

    pub fn set(&self, name: &str) -> Option<&Set> {
        self.sets.get(name)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn equation(&self, name: &str) -> Option<&Equation> {
        self.equations.get(name)
    }

    /// Sets in export order: ascending level, stable among equal levels,
    /// so every set is declared after the sets it indexes over.
    pub fn ordered_sets(&self) -> Vec<&Set> {
        let mut sets: Vec<&Set> = self.sets.values().collect();
        sets.sort_by_key(|set| set.level());
        sets
    }

    /// Mark the model unusable. Called after a cancelled or failed solve.
    pub fn invalidate(&mut self) {
        self.phase = Phase::Invalid;
    }

    pub(crate) fn ensure_building(&self, operation: &'static str) -> Result<(), ModelError> {
        match self.phase {
            Phase::Building => Ok(()),
            Phase::DataExported => Err(ModelError::Frozen { operation }),
            Phase::Invalid => Err(ModelError::Invalidated),
        }
    }
}
