//! Per-symbol metadata annotations.

use std::collections::BTreeMap;

use crate::model::{Model, ModelError};

impl Model {
    /// Attach metadata to a declared symbol. The map is allocated lazily
    /// on first use; a later call for the same symbol replaces the value.
    pub fn set_metadata(
        &mut self,
        symbol: &str,
        metadata: serde_json::Value,
    ) -> Result<(), ModelError> {
        self.ensure_symbol_exists(symbol)?;
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(symbol.to_string(), metadata);
        Ok(())
    }

    /// Metadata attached to a symbol, if any.
    pub fn metadata(&self, symbol: &str) -> Option<&serde_json::Value> {
        self.metadata.as_ref().and_then(|meta| meta.get(symbol))
    }

    fn ensure_symbol_exists(&self, name: &str) -> Result<(), ModelError> {
        let declared = self.sets.contains_key(name)
            || self.aliases.contains_key(name)
            || self.parameters.contains_key(name)
            || self.variables.contains_key(name)
            || self.equations.contains_key(name);
        if declared {
            Ok(())
        } else {
            Err(ModelError::UnknownSymbol {
                name: name.to_string(),
            })
        }
    }
}
