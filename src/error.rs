use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("chart type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("element id count mismatch: {charts} chart(s) but {element_ids} element id(s)")]
    CardinalityMismatch { charts: usize, element_ids: usize },

    #[error("option `{field}` expects {expected}, found {found}")]
    ShapeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    #[error("unknown option `{field}` for {schema}")]
    UnknownOption { schema: &'static str, field: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
