//! Phase one of export: symbol data into the store.

use std::time::Instant;

use ampler_data::{to_records, SymbolStore};
use ampler_expr::SetMembers;
use tracing::debug;

use crate::model::{Model, ModelError, Phase};

impl Model {
    /// Export sets and parameter data into the store and freeze the
    /// model. Must complete before [`Model::render_model`]; a second call
    /// is an error.
    pub fn export_data(&mut self, store: &mut impl SymbolStore) -> Result<(), ModelError> {
        match self.phase {
            Phase::Building => {}
            Phase::DataExported => return Err(ModelError::AlreadyExported),
            Phase::Invalid => return Err(ModelError::Invalidated),
        }
        let started = Instant::now();

        let mut exported_sets = 0usize;
        for set in self.ordered_sets() {
            let Some(members) = set.members() else {
                continue;
            };
            let rows = match members {
                SetMembers::Labels(labels) => {
                    labels.iter().map(|label| vec![label.clone()]).collect()
                }
                SetMembers::Tuples(rows) => rows.clone(),
            };
            store.write_set(set.name(), rows);
            exported_sets += 1;
        }

        let mut exported_parameters = 0usize;
        for parameter in self.parameters.values() {
            if !parameter.is_loaded() {
                continue;
            }
            store.write_parameter(parameter.name(), to_records(parameter)?);
            exported_parameters += 1;
        }

        self.phase = Phase::DataExported;
        debug!(
            component = "model",
            operation = "export_data",
            model = self.name(),
            sets = exported_sets,
            parameters = exported_parameters,
            duration_ms = started.elapsed().as_millis() as u64,
            status = "ok",
            "model data exported"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Model, ModelError, Phase, Sense};
    use ampler_data::{Field, MemoryStore, SymbolStore};
    use ampler_expr::{Parameter, Set, VarKind, Variable};

    fn key(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn export_writes_sets_and_parameters() {
        let mut model = Model::new("m");
        let i = Set::new("i", ["seattle", "san-diego"]);
        let a = Parameter::over("a", [&i]).with_values(vec![350.0, 600.0]);
        model.add_set(&i).expect("add");
        model.add_parameter(&a).expect("add");

        let mut store = MemoryStore::new();
        model.export_data(&mut store).expect("export");
        assert_eq!(model.phase(), Phase::DataExported);

        assert_eq!(
            store.set_members("i"),
            Some(&[key(&["seattle"]), key(&["san-diego"])][..])
        );
        let levels = store.get_field("a", Field::Level).expect("levels");
        assert_eq!(levels[&key(&["san-diego"])], 600.0);
    }

    #[test]
    fn structural_symbols_are_skipped() {
        let mut model = Model::new("m");
        let t = Set::declared("t");
        let p = Parameter::over("p", [&t]);
        model.add_set(&t).expect("add");
        model.add_parameter(&p).expect("add");

        let mut store = MemoryStore::new();
        model.export_data(&mut store).expect("export");
        assert!(store.set_members("t").is_none());
        assert!(store.symbol_names().next().is_none());
    }

    #[test]
    fn second_export_is_rejected() {
        let mut model = Model::new("m");
        let mut store = MemoryStore::new();
        model.export_data(&mut store).expect("first export");
        let err = model.export_data(&mut store).unwrap_err();
        assert_eq!(err, ModelError::AlreadyExported);
    }

    #[test]
    fn frozen_model_rejects_mutation() {
        let mut model = Model::new("m");
        let mut store = MemoryStore::new();
        model.export_data(&mut store).expect("export");

        let err = model.add_set(&Set::new("i", ["a"])).unwrap_err();
        assert_eq!(err, ModelError::Frozen { operation: "add_set" });

        let z = Variable::new("z", VarKind::Free);
        let err = model.set_objective(&z, Sense::Minimize).unwrap_err();
        assert_eq!(
            err,
            ModelError::Frozen {
                operation: "set_objective"
            }
        );
    }

    #[test]
    fn invalidated_model_is_not_reusable() {
        let mut model = Model::new("m");
        model.invalidate();
        let mut store = MemoryStore::new();
        let err = model.export_data(&mut store).unwrap_err();
        assert_eq!(err, ModelError::Invalidated);
    }
}
