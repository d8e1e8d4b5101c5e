use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{ChartError, ChartResult};

/// Double-quoted string literal safe to embed in a `<script>` element.
#[must_use]
pub fn string_literal(value: &str) -> String {
    // Serializing a `&str` cannot fail.
    let quoted = serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""));
    quoted.replace("</", "<\\/")
}

/// Bare number literal; non-finite values have no literal form.
pub fn number_literal(field: &str, value: f64) -> ChartResult<String> {
    if value.is_finite() {
        Ok(value.to_string())
    } else {
        Err(ChartError::ShapeMismatch {
            field: field.to_owned(),
            expected: "a finite number".to_owned(),
            found: value.to_string(),
        })
    }
}

#[must_use]
pub fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// `new Date(...)` with a zero-based month, as the runtime expects.
#[must_use]
pub fn date_literal(value: NaiveDate) -> String {
    format!(
        "new Date({}, {}, {})",
        value.year(),
        value.month0(),
        value.day()
    )
}

#[must_use]
pub fn datetime_literal(value: NaiveDateTime) -> String {
    let millis = value.nanosecond() / 1_000_000;
    let mut literal = format!(
        "new Date({}, {}, {}, {}, {}, {}",
        value.year(),
        value.month0(),
        value.day(),
        value.hour(),
        value.minute(),
        value.second()
    );
    if millis > 0 {
        literal.push_str(&format!(", {millis}"));
    }
    literal.push(')');
    literal
}

/// `[h, m, s]` triple used by `timeofday` columns.
#[must_use]
pub fn time_of_day_literal(value: NaiveTime) -> String {
    format!("[{}, {}, {}]", value.hour(), value.minute(), value.second())
}
