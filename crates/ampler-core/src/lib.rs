//! Model assembly: named symbol collections, level-ordered declaration,
//! and the strict two-phase export protocol.

pub mod model;

pub use model::{Model, ModelError, Phase, Sense};
