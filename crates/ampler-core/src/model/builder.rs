//! Symbol declaration and objective designation.

use ampler_expr::{Alias, Equation, Parameter, Set, Variable};
use tracing::debug;

use crate::model::{Model, ModelError, Sense};

impl Model {
    fn check_declare(&self, operation: &'static str, name: &str) -> Result<(), ModelError> {
        self.ensure_building(operation)?;
        let taken = self.sets.contains_key(name)
            || self.aliases.contains_key(name)
            || self.parameters.contains_key(name)
            || self.variables.contains_key(name)
            || self.equations.contains_key(name);
        if taken {
            return Err(ModelError::DuplicateSymbol {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn add_set(&mut self, set: &Set) -> Result<(), ModelError> {
        self.check_declare("add_set", set.name())?;
        self.sets.insert(set.name().to_string(), set.clone());
        Ok(())
    }

    pub fn add_alias(&mut self, alias: &Alias) -> Result<(), ModelError> {
        self.check_declare("add_alias", alias.name())?;
        // The aliased set must be declared so the alias can render after it.
        if !self.sets.contains_key(alias.aliased().name()) {
            return Err(ModelError::UnknownSymbol {
                name: alias.aliased().name().to_string(),
            });
        }
        self.aliases.insert(alias.name().to_string(), alias.clone());
        Ok(())
    }

    pub fn add_parameter(&mut self, parameter: &Parameter) -> Result<(), ModelError> {
        self.check_declare("add_parameter", parameter.name())?;
        self.parameters
            .insert(parameter.name().to_string(), parameter.clone());
        Ok(())
    }

    pub fn add_variable(&mut self, variable: &Variable) -> Result<(), ModelError> {
        self.check_declare("add_variable", variable.name())?;
        self.variables
            .insert(variable.name().to_string(), variable.clone());
        Ok(())
    }

    pub fn add_equation(&mut self, equation: &Equation) -> Result<(), ModelError> {
        self.check_declare("add_equation", equation.name())?;
        self.equations
            .insert(equation.name().to_string(), equation.clone());
        Ok(())
    }

    /// Designate the objective variable and optimization direction. The
    /// variable must already be declared; exactly one objective is allowed.
    pub fn set_objective(&mut self, variable: &Variable, sense: Sense) -> Result<(), ModelError> {
        self.ensure_building("set_objective")?;
        if self.objective.is_some() {
            return Err(ModelError::ObjectiveAlreadySet);
        }
        if !self.variables.contains_key(variable.name()) {
            return Err(ModelError::UnknownSymbol {
                name: variable.name().to_string(),
            });
        }
        self.objective = Some((variable.name().to_string(), sense));
        debug!(
            component = "model",
            model = self.name(),
            objective = variable.name(),
            sense = sense.as_str(),
            "objective designated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Model, ModelError, Sense};
    use ampler_expr::{Alias, Set, VarKind, Variable};

    #[test]
    fn duplicate_names_are_rejected_across_collections() {
        let mut model = Model::new("m");
        let i = Set::new("i", ["a"]);
        model.add_set(&i).expect("add");

        let shadow = Variable::new("i", VarKind::Free);
        let err = model.add_variable(&shadow).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateSymbol {
                name: "i".to_string()
            }
        );
    }

    #[test]
    fn alias_requires_its_target() {
        let mut model = Model::new("m");
        let i = Set::new("i", ["a"]);
        let ip = Alias::new("ip", &i);
        let err = model.add_alias(&ip).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownSymbol {
                name: "i".to_string()
            }
        );

        model.add_set(&i).expect("add");
        model.add_alias(&ip).expect("alias after target");
    }

    #[test]
    fn objective_is_designated_once() {
        let mut model = Model::new("m");
        let z = Variable::new("z", VarKind::Free);
        model.add_variable(&z).expect("add");
        model.set_objective(&z, Sense::Minimize).expect("objective");

        let err = model.set_objective(&z, Sense::Minimize).unwrap_err();
        assert_eq!(err, ModelError::ObjectiveAlreadySet);
    }

    #[test]
    fn undeclared_objective_is_rejected() {
        let mut model = Model::new("m");
        let z = Variable::new("z", VarKind::Free);
        let err = model.set_objective(&z, Sense::Maximize).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownSymbol {
                name: "z".to_string()
            }
        );
    }
}
