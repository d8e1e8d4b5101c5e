use crate::error::{ChartError, ChartResult};

use super::Chart;

/// Fails unless every chart shares the first chart's concrete class.
pub fn check_charts_types(charts: &[&Chart]) -> ChartResult<()> {
    let Some(first) = charts.first() else {
        return Ok(());
    };
    let expected = first.class();
    match charts.iter().map(|chart| chart.class()).find(|class| *class != expected) {
        Some(found) => Err(ChartError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }),
        None => Ok(()),
    }
}

/// Fails unless there is exactly one element id per chart.
pub fn check_elements_id(charts: &[&Chart], element_ids: &[String]) -> ChartResult<()> {
    if charts.len() != element_ids.len() {
        return Err(ChartError::CardinalityMismatch {
            charts: charts.len(),
            element_ids: element_ids.len(),
        });
    }
    Ok(())
}

pub(super) fn validate_non_empty(charts: &[&Chart]) -> ChartResult<()> {
    if charts.is_empty() {
        return Err(ChartError::Configuration(
            "a chart batch needs at least one chart".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_element_id<'a>(
    chart: &Chart,
    element_id: Option<&'a str>,
) -> ChartResult<&'a str> {
    match element_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ChartError::Configuration(format!(
            "chart `{}` has no container element id",
            chart.name()
        ))),
    }
}
