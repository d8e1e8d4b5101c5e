use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::literal::{
    bool_literal, date_literal, datetime_literal, string_literal, time_of_day_literal,
};

use super::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Boolean,
    Date,
    Datetime,
    Timeofday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnRole {
    Annotation,
    AnnotationText,
    Certainty,
    Domain,
    Emphasis,
    Interval,
    Scope,
    Style,
    Tooltip,
}

/// Header cell of a data table.
///
/// A column with only a label renders as a plain string; typed columns and
/// role columns render as descriptor objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ColumnType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ColumnRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Column {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: None,
            role: None,
            id: None,
        }
    }

    #[must_use]
    pub fn typed(label: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(label)
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: ColumnRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn literal(&self) -> String {
        if self.kind.is_none() && self.role.is_none() && self.id.is_none() {
            return string_literal(&self.label);
        }
        serde_json::to_string(self)
            .map(|json| json.replace("</", "<\\/"))
            .unwrap_or_else(|_| string_literal(&self.label))
    }
}

/// One data cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    TimeOfDay(NaiveTime),
    /// Value paired with its display text, rendered as `{v: ..., f: "..."}`.
    Formatted { value: Box<Cell>, formatted: String },
    /// Verbatim code fragment.
    Raw(String),
}

impl Cell {
    #[must_use]
    pub fn formatted(value: impl Into<Cell>, formatted: impl Into<String>) -> Self {
        Self::Formatted {
            value: Box::new(value.into()),
            formatted: formatted.into(),
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Number(value) => value.is_finite(),
            Self::Formatted { value, .. } => value.is_finite(),
            _ => true,
        }
    }

    fn literal(&self) -> String {
        match self {
            Self::Null => "null".to_owned(),
            Self::Bool(value) => bool_literal(*value).to_owned(),
            Self::Number(value) => value.to_string(),
            Self::String(value) => string_literal(value),
            Self::Date(value) => date_literal(*value),
            Self::DateTime(value) => datetime_literal(*value),
            Self::TimeOfDay(value) => time_of_day_literal(*value),
            Self::Formatted { value, formatted } => {
                format!("{{v:{},f:{}}}", value.literal(), string_literal(formatted))
            }
            Self::Raw(code) => code.clone(),
        }
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveTime> for Cell {
    fn from(value: NaiveTime) -> Self {
        Self::TimeOfDay(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Rectangular table rendered through `arrayToDataTable`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    /// Table with a header row; every row must match the column count.
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Cell>>) -> ChartResult<Self> {
        if columns.is_empty() {
            return Err(ChartError::InvalidData(
                "data table needs at least one column".to_owned(),
            ));
        }
        validate_rows(columns.len(), &rows)?;
        Ok(Self { columns, rows })
    }

    /// Builds a table from columns of equal length.
    pub fn from_columns(columns: Vec<(Column, Vec<Cell>)>) -> ChartResult<Self> {
        let height = columns.first().map_or(0, |(_, cells)| cells.len());
        if let Some((column, cells)) = columns.iter().find(|(_, cells)| cells.len() != height) {
            return Err(ChartError::InvalidData(format!(
                "column `{}` has {} cells, expected {height}",
                column.label,
                cells.len()
            )));
        }

        let mut header = Vec::with_capacity(columns.len());
        let mut rows: Vec<Vec<Cell>> = (0..height)
            .map(|_| Vec::with_capacity(columns.len()))
            .collect();
        for (column, cells) in columns {
            header.push(column);
            for (row, cell) in rows.iter_mut().zip(cells) {
                row.push(cell);
            }
        }
        Self::new(header, rows)
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    fn array_literal(&self) -> String {
        let header = self
            .columns
            .iter()
            .map(Column::literal)
            .collect::<Vec<_>>()
            .join(",");
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format!("[{header}]"));
        for row in &self.rows {
            let cells = row.iter().map(Cell::literal).collect::<Vec<_>>().join(",");
            lines.push(format!("[{cells}]"));
        }
        format!("[{}]", lines.join(","))
    }
}

impl DataSource for DataTable {
    fn draw(&self, data_name: &str) -> String {
        format!(
            "var {data_name} = new google.visualization.arrayToDataTable({}, false);",
            self.array_literal()
        )
    }
}

fn validate_rows(width: usize, rows: &[Vec<Cell>]) -> ChartResult<()> {
    for (index, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ChartError::InvalidData(format!(
                "row {index} has {} cells, expected {width}",
                row.len()
            )));
        }
        if !row.iter().all(Cell::is_finite) {
            return Err(ChartError::InvalidData(format!(
                "row {index} contains a non-finite number"
            )));
        }
    }
    Ok(())
}
