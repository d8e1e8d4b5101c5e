//! Data table adapters.
//!
//! The script assembler only sees the statement a [`DataSource`] returns for a
//! given variable name; how the table is described stays with the adapter.

mod json_table;
mod table;

pub use json_table::JsonDataTable;
pub use table::{Cell, Column, ColumnRole, ColumnType, DataTable};

use std::fmt::Debug;

/// Source of the statement that builds and names a runtime data table.
pub trait DataSource: Debug + Send + Sync {
    /// Statement declaring `data_name` as the constructed table.
    fn draw(&self, data_name: &str) -> String;
}
