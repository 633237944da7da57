//! Symbol store boundary: the key-value table exchanged with the solver.
//!
//! The store keeps ordered sets as label-tuple lists and numeric symbols
//! as sparse records carrying the four result fields. [`MemoryStore`] is
//! the in-process implementation; its JSON snapshot is the wire form
//! written before a solve and read back afterwards.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::StoreError;
use crate::marshal::Record;

/// Result field of a stored symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Level,
    Marginal,
    Lower,
    Upper,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Level => "l",
            Field::Marginal => "m",
            Field::Lower => "lo",
            Field::Upper => "up",
        }
    }
}

/// The four per-record result fields. Input parameters populate only the
/// level; solver output fills all four.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldValues {
    pub level: f64,
    pub marginal: f64,
    pub lower: f64,
    pub upper: f64,
}

impl FieldValues {
    pub fn level(value: f64) -> FieldValues {
        FieldValues {
            level: value,
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Level => self.level,
            Field::Marginal => self.marginal,
            Field::Lower => self.lower,
            Field::Upper => self.upper,
        }
    }
}

/// Symbol store boundary. Model export writes through this trait; result
/// extraction reads back through it.
pub trait SymbolStore {
    /// Store an ordered set as its member tuples.
    fn write_set(&mut self, name: &str, members: Vec<Vec<String>>);

    /// Store a numeric symbol's records into the level field.
    fn write_parameter(&mut self, name: &str, records: Vec<Record>);

    /// Level records of a symbol. A missing symbol and an existing but
    /// empty symbol are distinct failures.
    fn read_parameter(&self, symbol: &str) -> Result<Vec<Record>, StoreError>;

    /// Tuple-keyed mapping of one field of a symbol, same failure
    /// distinction as [`SymbolStore::read_parameter`].
    fn get_field(
        &self,
        symbol: &str,
        field: Field,
    ) -> Result<IndexMap<Vec<String>, f64>, StoreError>;
}

/// In-memory symbol table with a JSON snapshot format.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sets: IndexMap<String, Vec<Vec<String>>>,
    symbols: IndexMap<String, IndexMap<Vec<String>, FieldValues>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Store one record with all four fields, as solver output does.
    pub fn write_fields(&mut self, name: &str, key: Vec<String>, fields: FieldValues) {
        self.symbols
            .entry(name.to_string())
            .or_default()
            .insert(key, fields);
    }

    /// Declare a symbol with no records. Queries against it report
    /// emptiness rather than absence.
    pub fn declare_symbol(&mut self, name: &str) {
        self.symbols.entry(name.to_string()).or_default();
    }

    pub fn set_members(&self, name: &str) -> Option<&[Vec<String>]> {
        self.sets.get(name).map(Vec::as_slice)
    }

    pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    /// Snapshot the whole store as JSON.
    pub fn to_json(&self) -> Value {
        let sets: Value = self
            .sets
            .iter()
            .map(|(name, members)| (name.clone(), json!(members)))
            .collect::<serde_json::Map<String, Value>>()
            .into();
        let symbols: Value = self
            .symbols
            .iter()
            .map(|(name, records)| {
                let rows: Vec<Value> = records
                    .iter()
                    .map(|(key, fields)| {
                        json!({
                            "key": key,
                            "l": fields.level,
                            "m": fields.marginal,
                            "lo": fields.lower,
                            "up": fields.upper,
                        })
                    })
                    .collect();
                (name.clone(), Value::Array(rows))
            })
            .collect::<serde_json::Map<String, Value>>()
            .into();
        json!({ "sets": sets, "symbols": symbols })
    }

    /// Rebuild a store from its JSON snapshot.
    pub fn from_json(value: &Value) -> Result<MemoryStore, StoreError> {
        let mut store = MemoryStore::new();
        let sets = require_object(value, "sets")?;
        for (name, members) in sets {
            let members = members
                .as_array()
                .ok_or_else(|| malformed(name, "set members must be an array"))?
                .iter()
                .map(|row| parse_key(name, row))
                .collect::<Result<Vec<_>, _>>()?;
            store.write_set(name, members);
        }
        let symbols = require_object(value, "symbols")?;
        for (name, rows) in symbols {
            store.declare_symbol(name);
            let rows = rows
                .as_array()
                .ok_or_else(|| malformed(name, "symbol records must be an array"))?;
            for row in rows {
                let key = parse_key(
                    name,
                    row.get("key")
                        .ok_or_else(|| malformed(name, "record without key"))?,
                )?;
                store.write_fields(
                    name,
                    key,
                    FieldValues {
                        level: parse_field(name, row, "l")?,
                        marginal: parse_field(name, row, "m")?,
                        lower: parse_field(name, row, "lo")?,
                        upper: parse_field(name, row, "up")?,
                    },
                );
            }
        }
        Ok(store)
    }

    /// Write the JSON snapshot to disk.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(&self.to_json())
            .map_err(|err| malformed("store", &err.to_string()))?;
        std::fs::write(path, body)?;
        debug!(
            component = "store",
            operation = "save",
            path = %path.display(),
            sets = self.sets.len(),
            symbols = self.symbols.len(),
            "store snapshot written"
        );
        Ok(())
    }

    /// Read a JSON snapshot from disk.
    pub fn load(path: &Path) -> Result<MemoryStore, StoreError> {
        let body = std::fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&body).map_err(|err| malformed("store", &err.to_string()))?;
        let store = MemoryStore::from_json(&value)?;
        debug!(
            component = "store",
            operation = "load",
            path = %path.display(),
            symbols = store.symbols.len(),
            "store snapshot read"
        );
        Ok(store)
    }
}

impl MemoryStore {
    fn records(&self, symbol: &str) -> Result<&IndexMap<Vec<String>, FieldValues>, StoreError> {
        let records = self
            .symbols
            .get(symbol)
            .ok_or_else(|| StoreError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;
        if records.is_empty() {
            return Err(StoreError::SymbolEmpty {
                symbol: symbol.to_string(),
            });
        }
        Ok(records)
    }
}

impl SymbolStore for MemoryStore {
    fn write_set(&mut self, name: &str, members: Vec<Vec<String>>) {
        self.sets.insert(name.to_string(), members);
    }

    fn write_parameter(&mut self, name: &str, records: Vec<Record>) {
        let entry = self.symbols.entry(name.to_string()).or_default();
        for (key, value) in records {
            entry.insert(key, FieldValues::level(value));
        }
    }

    fn read_parameter(&self, symbol: &str) -> Result<Vec<Record>, StoreError> {
        Ok(self
            .records(symbol)?
            .iter()
            .map(|(key, fields)| (key.clone(), fields.level))
            .collect())
    }

    fn get_field(
        &self,
        symbol: &str,
        field: Field,
    ) -> Result<IndexMap<Vec<String>, f64>, StoreError> {
        Ok(self
            .records(symbol)?
            .iter()
            .map(|(key, fields)| (key.clone(), fields.get(field)))
            .collect())
    }
}

fn malformed(symbol: &str, detail: &str) -> StoreError {
    StoreError::Malformed {
        detail: format!("{symbol}: {detail}"),
    }
}

fn require_object<'a>(
    value: &'a Value,
    key: &str,
) -> Result<&'a serde_json::Map<String, Value>, StoreError> {
    value
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| malformed(key, "missing or not an object"))
}

fn parse_key(symbol: &str, value: &Value) -> Result<Vec<String>, StoreError> {
    value
        .as_array()
        .ok_or_else(|| malformed(symbol, "key must be an array"))?
        .iter()
        .map(|part| {
            part.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(symbol, "key part must be a string"))
        })
        .collect()
}

fn parse_field(symbol: &str, row: &Value, field: &str) -> Result<f64, StoreError> {
    row.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed(symbol, "record field must be a number"))
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldValues, MemoryStore, SymbolStore};
    use crate::error::StoreError;

    fn key(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn get_field_distinguishes_missing_from_empty() {
        let mut store = MemoryStore::new();
        store.declare_symbol("x");

        let err = store.get_field("y", Field::Level).unwrap_err();
        assert!(matches!(err, StoreError::SymbolNotFound { symbol } if symbol == "y"));

        let err = store.get_field("x", Field::Level).unwrap_err();
        assert!(matches!(err, StoreError::SymbolEmpty { symbol } if symbol == "x"));
    }

    #[test]
    fn get_field_selects_one_field() {
        let mut store = MemoryStore::new();
        store.write_fields(
            "x",
            key(&["s", "n"]),
            FieldValues {
                level: 50.0,
                marginal: 0.0,
                lower: 0.0,
                upper: f64::INFINITY,
            },
        );

        let levels = store.get_field("x", Field::Level).expect("levels");
        assert_eq!(levels[&key(&["s", "n"])], 50.0);
        let uppers = store.get_field("x", Field::Upper).expect("uppers");
        assert!(uppers[&key(&["s", "n"])].is_infinite());
    }

    #[test]
    fn read_parameter_returns_level_records_in_order() {
        let mut store = MemoryStore::new();
        store.write_parameter(
            "a",
            vec![(key(&["seattle"]), 350.0), (key(&["san-diego"]), 600.0)],
        );

        let records = store.read_parameter("a").expect("records");
        assert_eq!(
            records,
            vec![(key(&["seattle"]), 350.0), (key(&["san-diego"]), 600.0)]
        );
    }

    #[test]
    fn snapshot_round_trips_through_disk() {
        let mut store = MemoryStore::new();
        store.write_set("i", vec![key(&["seattle"]), key(&["san-diego"])]);
        store.write_parameter("a", vec![(key(&["seattle"]), 350.0)]);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        store.save(&path).expect("save");

        let loaded = MemoryStore::load(&path).expect("load");
        assert_eq!(
            loaded.set_members("i"),
            Some(&[key(&["seattle"]), key(&["san-diego"])][..])
        );
        let levels = loaded.get_field("a", Field::Level).expect("levels");
        assert_eq!(levels[&key(&["seattle"])], 350.0);
    }

    #[test]
    fn malformed_snapshot_is_rejected() {
        let value = serde_json::json!({ "sets": {} });
        let err = MemoryStore::from_json(&value).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }
}
