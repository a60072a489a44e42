//! # Data Models
//!
//! In-memory representations of the legacy CMS schema: channels, field and
//! column definitions, content entries, repeatable matrix/grid rows, and the
//! tagged union of decoded field values.

pub mod channel;
pub mod col;
pub mod entry;
pub mod field;
pub mod row;
pub mod value;

pub use channel::Channel;
pub use col::Col;
pub use entry::Entry;
pub use field::Field;
pub use row::Row;
pub use value::FieldValue;
