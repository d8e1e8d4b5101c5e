use std::fmt;

use crate::catalog::{ChartLibrary, ChartType};
use crate::core::{OptionObject, upper_first, validate_identifier};
use crate::data::DataSource;
use crate::error::{ChartError, ChartResult};

use super::Events;

/// Concrete runtime class of a chart; batches must not mix classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartClass {
    pub chart_type: ChartType,
    pub diff: bool,
}

impl fmt::Display for ChartClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.diff {
            write!(f, "{} (diff)", self.chart_type)
        } else {
            self.chart_type.fmt(f)
        }
    }
}

/// Where a chart's data table comes from.
#[derive(Debug)]
pub enum DataBinding {
    Table(Box<dyn DataSource>),
    /// Old and new charts whose tables feed the runtime's `computeDiff`.
    Diff { old: Box<Chart>, new: Box<Chart> },
}

/// Identity and bindings of one chart instance.
#[derive(Debug)]
pub struct Chart {
    name: String,
    chart_type: ChartType,
    element_id: Option<String>,
    data: DataBinding,
    options: OptionObject,
    events: Events,
}

impl Chart {
    /// Creates a chart bound to a data table.
    ///
    /// `name` becomes the script variable holding the chart and must be a
    /// valid identifier.
    pub fn new(
        name: impl Into<String>,
        chart_type: ChartType,
        data: impl DataSource + 'static,
    ) -> ChartResult<Self> {
        let name = name.into();
        validate_identifier(&name)?;
        Ok(Self {
            name,
            chart_type,
            element_id: None,
            data: DataBinding::Table(Box::new(data)),
            options: OptionObject::new(chart_type.options_schema()),
            events: Events::new(),
        })
    }

    /// Creates a diff chart comparing the data of `old` and `new`.
    ///
    /// Both charts must share a chart type that has a diff variant. The diff
    /// chart starts with empty options of that variant's schema.
    pub fn diff(name: impl Into<String>, old: Chart, new: Chart) -> ChartResult<Self> {
        let name = name.into();
        validate_identifier(&name)?;

        if old.is_diff() || new.is_diff() {
            return Err(ChartError::Configuration(
                "diff charts cannot compare other diff charts".to_owned(),
            ));
        }
        if old.chart_type != new.chart_type {
            return Err(ChartError::TypeMismatch {
                expected: old.chart_type.to_string(),
                found: new.chart_type.to_string(),
            });
        }
        let chart_type = old.chart_type;
        let schema = chart_type.diff_options_schema().ok_or_else(|| {
            ChartError::Configuration(format!("{chart_type} has no diff variant"))
        })?;

        Ok(Self {
            name,
            chart_type,
            element_id: None,
            data: DataBinding::Diff {
                old: Box::new(old),
                new: Box::new(new),
            },
            options: OptionObject::new(schema),
            events: Events::new(),
        })
    }

    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn set_element_id(&mut self, element_id: impl Into<String>) {
        self.element_id = Some(element_id.into());
    }

    /// Replaces the options tree; it must be rooted at this chart's schema.
    pub fn with_options(mut self, options: OptionObject) -> ChartResult<Self> {
        if !options.schema().is_a(self.options.schema()) {
            return Err(ChartError::ShapeMismatch {
                field: format!("{}.options", self.name),
                expected: format!("a `{}` object", self.options.schema().name),
                found: format!("a `{}` object", options.schema().name),
            });
        }
        self.options = options;
        Ok(self)
    }

    #[must_use]
    pub fn with_events(mut self, events: Events) -> Self {
        self.events = events;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable holding the chart's data table.
    #[must_use]
    pub fn data_name(&self) -> String {
        format!("data{}", upper_first(&self.name))
    }

    /// Variable holding the chart's options literal.
    #[must_use]
    pub fn options_name(&self) -> String {
        format!("options{}", upper_first(&self.name))
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn library(&self) -> ChartLibrary {
        self.chart_type.library()
    }

    #[must_use]
    pub fn package(&self) -> &'static str {
        self.chart_type.package()
    }

    #[must_use]
    pub fn class(&self) -> ChartClass {
        ChartClass {
            chart_type: self.chart_type,
            diff: self.is_diff(),
        }
    }

    #[must_use]
    pub fn is_diff(&self) -> bool {
        matches!(self.data, DataBinding::Diff { .. })
    }

    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    #[must_use]
    pub fn data(&self) -> &DataBinding {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &OptionObject {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionObject {
        &mut self.options
    }

    #[must_use]
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut Events {
        &mut self.events
    }
}
