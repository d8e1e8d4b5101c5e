//! Chart descriptors, batches and the script assembler.

mod batch;
mod chart;
mod chart_output;
mod events;
mod json_contract;
mod output_config;
mod validation;

pub use batch::Batch;
pub use chart::{Chart, ChartClass, DataBinding};
pub use chart_output::{ChartOutput, JavascriptChartOutput, callback_name};
pub use events::{EventListener, EventType, Events};
pub use json_contract::{
    CHART_BATCH_JSON_SCHEMA_V1, ChartBatchJsonContractV1, ChartJsonSpec, DataJsonSpec,
    DiffJsonSpec,
};
pub use output_config::OutputConfig;
pub use validation::{check_charts_types, check_elements_id};
