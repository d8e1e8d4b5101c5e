use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::ChartType;
use crate::core::{OptionObject, RAW_JSON_MARKER};
use crate::data::{Cell, Column, ColumnType, DataTable, JsonDataTable};
use crate::error::{ChartError, ChartResult};

use super::{
    Batch, Chart, ChartOutput, EventListener, Events, JavascriptChartOutput, OutputConfig,
};

pub const CHART_BATCH_JSON_SCHEMA_V1: u32 = 1;

/// Serializable description of a whole chart batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBatchJsonContractV1 {
    pub schema_version: u32,
    #[serde(default)]
    pub config: OutputConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_ids: Option<Vec<String>>,
    pub charts: Vec<ChartJsonSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartJsonSpec {
    pub name: String,
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DataJsonSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<DiffJsonSpec>,
    #[serde(default)]
    pub options: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventListener>,
}

/// Table of a chart, either as header plus rows or as DataTable JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataJsonSpec {
    Array {
        columns: Vec<Column>,
        #[serde(default)]
        rows: Vec<Vec<Value>>,
    },
    Table {
        table: Value,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffJsonSpec {
    pub old: DataJsonSpec,
    pub new: DataJsonSpec,
}

impl ChartBatchJsonContractV1 {
    #[must_use]
    pub fn new(charts: Vec<ChartJsonSpec>) -> Self {
        Self {
            schema_version: CHART_BATCH_JSON_SCHEMA_V1,
            config: OutputConfig::default(),
            element_ids: None,
            charts,
        }
    }

    /// Parses either a versioned contract or a bare array of charts.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(charts) = serde_json::from_str::<Vec<ChartJsonSpec>>(input) {
            return Ok(Self::new(charts));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart batch json payload: {e}"))
        })?;
        if payload.schema_version != CHART_BATCH_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart batch schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart batch contract v1: {e}"))
        })
    }

    pub fn to_charts(&self) -> ChartResult<Vec<Chart>> {
        self.charts.iter().map(ChartJsonSpec::to_chart).collect()
    }

    /// Full load/draw script of the described batch.
    pub fn render_full(&self) -> ChartResult<String> {
        let output = JavascriptChartOutput::new(self.config.clone())?;
        let charts = self.to_charts()?;
        let mut batch = Batch::new(&charts);
        if let Some(element_ids) = &self.element_ids {
            batch = batch.with_element_ids(element_ids.iter().cloned());
        }
        output.full_charts(&batch)
    }
}

impl ChartJsonSpec {
    pub fn to_chart(&self) -> ChartResult<Chart> {
        let mut chart = match (&self.data, &self.diff) {
            (Some(data), None) => build_chart(&self.name, self.chart_type, data)?,
            (None, Some(diff)) => Chart::diff(
                self.name.clone(),
                build_chart(&format!("{}Old", self.name), self.chart_type, &diff.old)?,
                build_chart(&format!("{}New", self.name), self.chart_type, &diff.new)?,
            )?,
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "chart `{}` needs exactly one of `data` or `diff`",
                    self.name
                )));
            }
        };

        if !self.options.is_null() {
            let options = OptionObject::from_json(chart.options().schema(), &self.options)?;
            chart = chart.with_options(options)?;
        }
        let mut events = Events::new();
        for listener in &self.events {
            events.push(listener.clone());
        }
        chart = chart.with_events(events);
        if let Some(element_id) = &self.element_id {
            chart.set_element_id(element_id.clone());
        }
        Ok(chart)
    }
}

fn build_chart(name: &str, chart_type: ChartType, data: &DataJsonSpec) -> ChartResult<Chart> {
    match data {
        DataJsonSpec::Array { columns, rows } => {
            let kinds = columns.iter().map(|column| column.kind).collect::<Vec<_>>();
            let rows = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .map(|(index, value)| {
                            json_to_cell(value, kinds.get(index).copied().flatten())
                        })
                        .collect::<ChartResult<Vec<_>>>()
                })
                .collect::<ChartResult<Vec<_>>>()?;
            Chart::new(name, chart_type, DataTable::new(columns.clone(), rows)?)
        }
        DataJsonSpec::Table { table } => {
            Chart::new(name, chart_type, JsonDataTable::new(table.clone())?)
        }
    }
}

fn json_to_cell(value: &Value, kind: Option<ColumnType>) -> ChartResult<Cell> {
    match value {
        Value::Null => Ok(Cell::Null),
        Value::Bool(flag) => Ok(Cell::Bool(*flag)),
        Value::Number(number) => number
            .as_f64()
            .map(Cell::Number)
            .ok_or_else(|| ChartError::InvalidData(format!("unsupported number {number}"))),
        Value::String(text) => {
            Ok(temporal_cell(text, kind).unwrap_or_else(|| Cell::String(text.clone())))
        }
        Value::Object(entries) => {
            if let Some(code) = entries.get(RAW_JSON_MARKER).and_then(Value::as_str) {
                return Ok(Cell::Raw(code.to_owned()));
            }
            match (entries.get("v"), entries.get("f").and_then(Value::as_str)) {
                (Some(inner), Some(formatted)) => {
                    Ok(Cell::formatted(json_to_cell(inner, kind)?, formatted))
                }
                (Some(inner), None) => json_to_cell(inner, kind),
                _ => Err(ChartError::InvalidData(
                    "object cells need a `v` value or a `$raw` code".to_owned(),
                )),
            }
        }
        Value::Array(_) => Err(ChartError::InvalidData(
            "array cells are not supported".to_owned(),
        )),
    }
}

fn temporal_cell(text: &str, kind: Option<ColumnType>) -> Option<Cell> {
    match kind? {
        ColumnType::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(Cell::Date),
        ColumnType::Datetime => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(Cell::DateTime),
        ColumnType::Timeofday => NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
            .ok()
            .map(Cell::TimeOfDay),
        ColumnType::String | ColumnType::Number | ColumnType::Boolean => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_chart_arrays_are_accepted() {
        let contract = ChartBatchJsonContractV1::from_json_compat_str(
            r#"[{"name": "chart1", "chart_type": "PieChart", "element_id": "pie",
                 "data": {"kind": "array", "columns": [{"label": "Task"}, {"label": "Hours"}],
                          "rows": [["Work", 11]]}}]"#,
        )
        .expect("contract");
        assert_eq!(contract.schema_version, CHART_BATCH_JSON_SCHEMA_V1);
        assert_eq!(contract.charts.len(), 1);
    }

    #[test]
    fn rejects_unknown_versions_and_ambiguous_data() {
        let err = ChartBatchJsonContractV1::from_json_compat_str(
            r#"{"schema_version": 9, "charts": []}"#,
        )
        .expect_err("version");
        assert!(matches!(err, ChartError::InvalidData(_)));

        let spec = ChartJsonSpec {
            name: "chart1".to_owned(),
            chart_type: ChartType::LineChart,
            element_id: None,
            data: None,
            diff: None,
            options: Value::Null,
            events: Vec::new(),
        };
        assert!(matches!(spec.to_chart(), Err(ChartError::InvalidData(_))));
    }

    #[test]
    fn typed_columns_parse_temporal_cells() {
        assert_eq!(
            json_to_cell(&Value::from("2024-03-01"), Some(ColumnType::Date)).expect("cell"),
            Cell::Date(NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"))
        );
        assert_eq!(
            json_to_cell(&Value::from("2024-03-01"), None).expect("cell"),
            Cell::from("2024-03-01")
        );
        assert!(json_to_cell(&serde_json::json!([1]), None).is_err());
    }
}
