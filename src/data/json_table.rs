use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::DataSource;

/// Table given in the runtime's DataTable JSON form (`{"cols": [...], "rows": [...]}`).
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDataTable {
    table: Value,
}

impl JsonDataTable {
    pub fn new(table: Value) -> ChartResult<Self> {
        match table.get("cols") {
            Some(Value::Array(_)) => Ok(Self { table }),
            _ => Err(ChartError::InvalidData(
                "DataTable JSON must be an object with a `cols` array".to_owned(),
            )),
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let table: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse DataTable json: {e}")))?;
        Self::new(table)
    }
}

impl DataSource for JsonDataTable {
    fn draw(&self, data_name: &str) -> String {
        let literal = self.table.to_string().replace("</", "<\\/");
        format!("var {data_name} = new google.visualization.DataTable({literal});")
    }
}
