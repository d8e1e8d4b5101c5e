//! gchart-rs: Google Charts script generation.
//!
//! Charts are described with typed option trees, data tables and event
//! listeners; the assembler turns one or many of them into the loader, draw
//! callback and draw calls the Google Charts runtime expects.

pub mod api;
pub mod catalog;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    Batch, Chart, ChartOutput, EventType, Events, JavascriptChartOutput, OutputConfig,
};
pub use catalog::{ChartLibrary, ChartType};
pub use core::{OptionObject, OptionValue};
pub use data::{Cell, Column, ColumnType, DataSource, DataTable, JsonDataTable};
pub use error::{ChartError, ChartResult};
pub use render::{JavascriptOptionOutput, OptionOutput};
