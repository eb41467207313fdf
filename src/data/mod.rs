//! Test data resolution
//!
//! A test asks for its dataset by test id; the resolver consults the
//! static test mapping table, loads the named data file through the
//! session's [`DataCache`], and hands back a flat [`DataRecord`].

mod record;
mod resolver;

pub use record::{DataRecord, FieldValue};
pub use resolver::{DataCache, TestDataResolver, TestMappingEntry};
