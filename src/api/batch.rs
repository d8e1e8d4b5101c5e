use crate::error::ChartResult;

use super::Chart;
use super::validation::{
    check_charts_types, check_elements_id, validate_element_id, validate_non_empty,
};

/// Ordered charts drawn from one load callback.
///
/// Element ids given here take precedence over the ids carried by the charts;
/// the charts themselves are never modified.
#[derive(Debug, Clone)]
pub struct Batch<'a> {
    charts: Vec<&'a Chart>,
    element_ids: Option<Vec<String>>,
}

impl<'a> Batch<'a> {
    #[must_use]
    pub fn single(chart: &'a Chart) -> Self {
        Self::from_refs(vec![chart])
    }

    #[must_use]
    pub fn new(charts: &'a [Chart]) -> Self {
        Self::from_refs(charts.iter().collect())
    }

    #[must_use]
    pub fn from_refs(charts: Vec<&'a Chart>) -> Self {
        Self {
            charts,
            element_ids: None,
        }
    }

    #[must_use]
    pub fn with_element_ids<I, S>(mut self, element_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.element_ids = Some(element_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Shorthand for a one-chart batch bound to `element_id`.
    #[must_use]
    pub fn with_element_id(self, element_id: impl Into<String>) -> Self {
        self.with_element_ids([element_id.into()])
    }

    #[must_use]
    pub fn charts(&self) -> &[&'a Chart] {
        &self.charts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Checks non-emptiness, class homogeneity and id cardinality.
    pub fn validate(&self) -> ChartResult<()> {
        validate_non_empty(&self.charts)?;
        check_charts_types(&self.charts)?;
        if let Some(element_ids) = &self.element_ids {
            check_elements_id(&self.charts, element_ids)?;
        }
        Ok(())
    }

    /// Element id of every chart, in batch order.
    pub fn element_ids(&self) -> ChartResult<Vec<&str>> {
        match &self.element_ids {
            Some(element_ids) => {
                check_elements_id(&self.charts, element_ids)?;
                self.charts
                    .iter()
                    .zip(element_ids)
                    .map(|(chart, id)| validate_element_id(chart, Some(id.as_str())))
                    .collect()
            }
            None => self
                .charts
                .iter()
                .map(|chart| validate_element_id(chart, chart.element_id()))
                .collect(),
        }
    }
}
