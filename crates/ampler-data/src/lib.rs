//! Data boundary for algebraic models.
//!
//! - `marshal` — stateless dense/sparse conversions
//! - `store`   — symbol store trait and in-memory implementation
//! - `error`   — marshalling and store errors

pub mod error;
pub mod marshal;
pub mod store;

pub use error::{MarshalError, StoreError};
pub use marshal::{first_value, records_to_dense, records_to_map, to_records, Record};
pub use store::{Field, FieldValues, MemoryStore, SymbolStore};
