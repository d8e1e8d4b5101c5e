use indexmap::IndexSet;
use tracing::{debug, trace};

#[cfg(feature = "parallel-render")]
use rayon::prelude::*;

use crate::catalog::ChartLibrary;
use crate::core::upper_first;
use crate::data::DataSource;
use crate::error::{ChartError, ChartResult};
use crate::render::{JavascriptOptionOutput, OptionOutput};

use super::validation::{check_charts_types, validate_element_id, validate_non_empty};
use super::{Batch, Chart, DataBinding, OutputConfig};

/// Contract implemented by chart script assemblers.
///
/// Every operation returns the complete fragment or an error; nothing is
/// emitted for a batch that fails validation.
pub trait ChartOutput: Send + Sync {
    /// Construction, data binding and options statements of one chart.
    fn start_chart(&self, chart: &Chart, element_id: &str) -> ChartResult<String>;

    /// Event bindings and draw call of one chart.
    fn end_chart(&self, chart: &Chart) -> ChartResult<String>;

    /// Library load, callback open and every chart's start fragment.
    fn start_charts(&self, batch: &Batch<'_>) -> ChartResult<String>;

    /// Every chart's end fragment followed by the callback close.
    fn end_charts(&self, batch: &Batch<'_>) -> ChartResult<String>;

    fn full_charts(&self, batch: &Batch<'_>) -> ChartResult<String> {
        let mut script = self.start_charts(batch)?;
        script.push_str(&self.end_charts(batch)?);
        Ok(script)
    }

    fn load_libraries(&self, packages: &[&str]) -> String;

    fn start_callback(&self, name: &str) -> String;

    fn end_callback(&self) -> String;
}

/// Assembles Google Charts loader scripts.
#[derive(Debug, Clone, Default)]
pub struct JavascriptChartOutput<O: OptionOutput = JavascriptOptionOutput> {
    config: OutputConfig,
    option_output: O,
}

impl JavascriptChartOutput {
    pub fn new(config: OutputConfig) -> ChartResult<Self> {
        Self::with_option_output(config, JavascriptOptionOutput::new())
    }
}

impl<O: OptionOutput> JavascriptChartOutput<O> {
    pub fn with_option_output(config: OutputConfig, option_output: O) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            option_output,
        })
    }

    #[must_use]
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Full script of a single chart bound to its own element id.
    pub fn full_chart(&self, chart: &Chart) -> ChartResult<String> {
        self.full_charts(&Batch::single(chart))
    }

    fn data_fragment(&self, chart: &Chart) -> ChartResult<String> {
        let data_name = chart.data_name();
        match chart.data() {
            DataBinding::Table(source) => Ok(source.draw(&data_name)),
            DataBinding::Diff { old, new } => {
                let old_name = format!("old_{data_name}");
                let new_name = format!("new_{data_name}");
                let mut js = table_source(old)?.draw(&old_name);
                js.push_str(&table_source(new)?.draw(&new_name));
                js.push_str(&format!(
                    "var {data_name} = {}.computeDiff({old_name}, {new_name});",
                    chart.name()
                ));
                Ok(js)
            }
        }
    }

    #[cfg(feature = "parallel-render")]
    fn start_fragments(
        &self,
        charts: &[&Chart],
        element_ids: &[&str],
    ) -> ChartResult<Vec<String>> {
        charts
            .par_iter()
            .zip(element_ids.par_iter())
            .map(|(chart, element_id)| self.start_chart(chart, element_id))
            .collect()
    }

    #[cfg(not(feature = "parallel-render"))]
    fn start_fragments(
        &self,
        charts: &[&Chart],
        element_ids: &[&str],
    ) -> ChartResult<Vec<String>> {
        charts
            .iter()
            .zip(element_ids)
            .map(|(chart, element_id)| self.start_chart(chart, element_id))
            .collect()
    }

    #[cfg(feature = "parallel-render")]
    fn end_fragments(&self, charts: &[&Chart]) -> ChartResult<Vec<String>> {
        charts.par_iter().map(|chart| self.end_chart(chart)).collect()
    }

    #[cfg(not(feature = "parallel-render"))]
    fn end_fragments(&self, charts: &[&Chart]) -> ChartResult<Vec<String>> {
        charts.iter().map(|chart| self.end_chart(chart)).collect()
    }
}

impl<O: OptionOutput> ChartOutput for JavascriptChartOutput<O> {
    fn start_chart(&self, chart: &Chart, element_id: &str) -> ChartResult<String> {
        let element_id = validate_element_id(chart, Some(element_id))?;
        let mut js = format!(
            "var {} = new {}(document.getElementById(\"{element_id}\"));",
            chart.name(),
            chart.chart_type()
        );
        js.push_str(&self.data_fragment(chart)?);
        js.push_str(
            &self
                .option_output
                .draw(&chart.options_name(), chart.options())?,
        );
        trace!(chart = chart.name(), len = js.len(), "start chart");
        Ok(js)
    }

    fn end_chart(&self, chart: &Chart) -> ChartResult<String> {
        let options = match chart.library() {
            ChartLibrary::Visualization => chart.options_name(),
            ChartLibrary::Charts => format!(
                "{}.convertOptions({})",
                chart.chart_type(),
                chart.options_name()
            ),
        };
        let mut js = chart.events().draw(chart.name());
        js.push_str(&format!(
            "{}.draw({}, {options});",
            chart.name(),
            chart.data_name()
        ));
        trace!(chart = chart.name(), "end chart");
        Ok(js)
    }

    fn start_charts(&self, batch: &Batch<'_>) -> ChartResult<String> {
        batch.validate()?;
        let element_ids = batch.element_ids()?;

        let packages = batch
            .charts()
            .iter()
            .map(|chart| chart.package())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        let callback = callback_name(&element_ids);

        let fragments = self.start_fragments(batch.charts(), &element_ids)?;

        let mut js = self.load_libraries(&packages);
        js.push_str(&self.start_callback(&callback));
        for fragment in fragments {
            js.push_str(&fragment);
        }
        debug!(
            charts = batch.len(),
            packages = ?packages,
            callback = %callback,
            "start chart batch"
        );
        Ok(js)
    }

    fn end_charts(&self, batch: &Batch<'_>) -> ChartResult<String> {
        validate_non_empty(batch.charts())?;
        check_charts_types(batch.charts())?;

        let mut js = self.end_fragments(batch.charts())?.concat();
        js.push_str(&self.end_callback());
        debug!(charts = batch.len(), "end chart batch");
        Ok(js)
    }

    fn load_libraries(&self, packages: &[&str]) -> String {
        let packages = packages
            .iter()
            .map(|package| format!("'{package}'"))
            .collect::<Vec<_>>()
            .join(",");
        let language = self
            .config
            .language
            .as_deref()
            .map(|language| format!(", language: '{language}'"))
            .unwrap_or_default();
        format!(
            "google.charts.load('{}', {{packages:[{packages}]{language}}});",
            self.config.version
        )
    }

    fn start_callback(&self, name: &str) -> String {
        format!("google.charts.setOnLoadCallback({name}); function {name}() {{")
    }

    fn end_callback(&self) -> String {
        "}".to_owned()
    }
}

/// Load callback name derived from the concatenated element ids.
///
/// Identical containers give identical names, so repeated batches produce
/// byte-identical scripts.
#[must_use]
pub fn callback_name(element_ids: &[&str]) -> String {
    let digest = md5::compute(element_ids.concat());
    format!("drawChart{}", upper_first(&format!("{digest:x}")))
}

fn table_source(chart: &Chart) -> ChartResult<&dyn DataSource> {
    match chart.data() {
        DataBinding::Table(source) => Ok(source.as_ref()),
        DataBinding::Diff { .. } => Err(ChartError::Configuration(format!(
            "chart `{}` cannot feed a diff chart because it is one",
            chart.name()
        ))),
    }
}
