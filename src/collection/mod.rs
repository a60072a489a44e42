//! # Collections
//!
//! Indexed collections over the data models: the field metadata catalog,
//! matrix/grid column collections, and the entry collection that one
//! hydration run operates on.

pub mod cols;
pub mod entries;
pub mod fields;

pub use cols::ColCollection;
pub use entries::EntryCollection;
pub use fields::FieldCollection;
