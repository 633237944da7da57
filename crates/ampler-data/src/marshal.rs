//! Stateless dense/sparse marshalling.
//!
//! Every function here is a pure call over its inputs; nothing is cached
//! between invocations, so independent calls never interfere.

use ampler_expr::{DenseValues, IndexSet, Parameter};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::MarshalError;

/// A sparse record: member labels keying a numeric value.
pub type Record = (Vec<String>, f64);

fn axis_labels<'a>(index: &'a IndexSet) -> Result<&'a [String], MarshalError> {
    index.labels().ok_or_else(|| MarshalError::MembersNotLoaded {
        set: index.name().to_string(),
    })
}

fn member_position(index: &IndexSet, member: &str) -> Result<usize, MarshalError> {
    axis_labels(index)?
        .iter()
        .position(|label| label == member)
        .ok_or_else(|| MarshalError::UnknownMember {
            set: index.name().to_string(),
            member: member.to_string(),
        })
}

/// Export a parameter's dense block as sparse records, keyed by member
/// labels in the index sets' declared order. A parameter without data is
/// structural only and yields no records.
pub fn to_records(parameter: &Parameter) -> Result<Vec<Record>, MarshalError> {
    let Some(values) = parameter.values() else {
        return Ok(Vec::new());
    };
    if parameter.dim() > 2 {
        return Err(MarshalError::UnsupportedDimension {
            symbol: parameter.name().to_string(),
            dims: parameter.dim(),
        });
    }

    let mut expected = Vec::with_capacity(parameter.dim());
    for index in parameter.indices() {
        expected.push(axis_labels(index)?.len());
    }
    if values.shape() != expected {
        return Err(MarshalError::ShapeMismatch {
            symbol: parameter.name().to_string(),
            expected,
            actual: values.shape(),
        });
    }

    let mut records = Vec::new();
    for (positions, value) in values.entries() {
        let mut key = Vec::with_capacity(positions.len());
        for (axis, position) in positions.iter().enumerate() {
            key.push(axis_labels(&parameter.indices()[axis])?[*position].clone());
        }
        records.push((key, value));
    }
    debug!(
        component = "marshal",
        symbol = parameter.name(),
        records = records.len(),
        "dense block exported as sparse records"
    );
    Ok(records)
}

/// Import sparse records as a tuple-keyed mapping, preserving arrival
/// order. Duplicate keys overwrite the value and keep the first arrival's
/// position.
pub fn records_to_map(records: impl IntoIterator<Item = Record>) -> IndexMap<Vec<String>, f64> {
    let mut map = IndexMap::new();
    for (key, value) in records {
        map.insert(key, value);
    }
    map
}

/// Import sparse records as a dense block shaped by the target sets.
/// Positions absent from the records read as zero.
pub fn records_to_dense(
    symbol: &str,
    records: &[Record],
    targets: &[IndexSet],
) -> Result<DenseValues, MarshalError> {
    for (key, _) in records {
        if key.len() != targets.len() {
            return Err(MarshalError::ShapeMismatch {
                symbol: symbol.to_string(),
                expected: vec![targets.len()],
                actual: vec![key.len()],
            });
        }
    }
    match targets {
        [] => {
            let mut value = 0.0;
            for (_, v) in records {
                value = *v;
            }
            Ok(DenseValues::Scalar(value))
        }
        [index] => {
            let mut dense = vec![0.0; axis_labels(index)?.len()];
            for (key, value) in records {
                dense[member_position(index, &key[0])?] = *value;
            }
            Ok(DenseValues::Vector(dense))
        }
        [rows, cols] => {
            let row_count = axis_labels(rows)?.len();
            let col_count = axis_labels(cols)?.len();
            let mut dense = vec![vec![0.0; col_count]; row_count];
            for (key, value) in records {
                let r = member_position(rows, &key[0])?;
                let c = member_position(cols, &key[1])?;
                dense[r][c] = *value;
            }
            Ok(DenseValues::Matrix {
                rows: dense,
                cols: col_count,
            })
        }
        more => Err(MarshalError::UnsupportedDimension {
            symbol: symbol.to_string(),
            dims: more.len(),
        }),
    }
}

/// The first record's value, for scalar symbols.
pub fn first_value(records: &[Record]) -> Option<f64> {
    records.first().map(|(_, value)| *value)
}
