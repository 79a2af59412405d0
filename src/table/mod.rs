//! Reference table module
//!
//! Loading and lookup for the calorie reference table.

pub mod loader;
pub mod reference;

pub use loader::{
    load_from_reader, load_table, load_table_or_empty, LoadReport, LoadedTable, TableError,
    TableResult,
};
pub use reference::{CalorieLookup, ReferenceTable};
