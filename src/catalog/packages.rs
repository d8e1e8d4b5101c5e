//! Option schemas for charts shipped in their own runtime packages.

use crate::core::{FieldKind, FieldSpec, ScalarKind, Schema};

use super::common::{ANIMATION, STROKE, TEXT_STYLE, TOOLTIP, size};

pub static COLOR_AXIS: Schema = Schema {
    name: "ColorAxis",
    extends: None,
    fields: &[
        FieldSpec::list("colors", ScalarKind::String),
        FieldSpec::number("maxValue"),
        FieldSpec::number("minValue"),
        FieldSpec::list("values", ScalarKind::Number),
    ],
};

pub static SIZE_AXIS: Schema = Schema {
    name: "SizeAxis",
    extends: None,
    fields: &[
        FieldSpec::number("maxSize"),
        FieldSpec::number("maxValue"),
        FieldSpec::number("minSize"),
        FieldSpec::number("minValue"),
    ],
};

pub static MAGNIFYING_GLASS: Schema = Schema {
    name: "MagnifyingGlass",
    extends: None,
    fields: &[FieldSpec::boolean("enable"), FieldSpec::number("zoomFactor")],
};

pub static GEO_LEGEND: Schema = Schema {
    name: "GeoLegend",
    extends: None,
    fields: &[
        FieldSpec::string("numberFormat"),
        FieldSpec::object("textStyle", &TEXT_STYLE),
    ],
};

pub static GEO_CHART: Schema = Schema {
    name: "GeoChartOptions",
    extends: None,
    fields: &[
        FieldSpec::new(
            "backgroundColor",
            FieldKind::ScalarOrObject(ScalarKind::String, &STROKE),
        ),
        FieldSpec::object("colorAxis", &COLOR_AXIS),
        FieldSpec::string("datalessRegionColor"),
        FieldSpec::string("defaultColor"),
        FieldSpec::one_of("displayMode", &["auto", "regions", "markers", "text"]),
        FieldSpec::string("domain"),
        FieldSpec::boolean("enableRegionInteractivity"),
        size("height"),
        FieldSpec::boolean("keepAspectRatio"),
        FieldSpec::new(
            "legend",
            FieldKind::ScalarOrObject(ScalarKind::Enum(&["none"]), &GEO_LEGEND),
        ),
        FieldSpec::object("magnifyingGlass", &MAGNIFYING_GLASS),
        FieldSpec::number("markerOpacity"),
        FieldSpec::string("region"),
        FieldSpec::one_of("resolution", &["countries", "provinces", "metros"]),
        FieldSpec::object("sizeAxis", &SIZE_AXIS),
        FieldSpec::object("tooltip", &TOOLTIP),
        size("width"),
    ],
};

pub static GAUGE: Schema = Schema {
    name: "GaugeOptions",
    extends: None,
    fields: &[
        FieldSpec::object("animation", &ANIMATION),
        FieldSpec::boolean("forceIFrame"),
        FieldSpec::string("greenColor"),
        FieldSpec::number("greenFrom"),
        FieldSpec::number("greenTo"),
        size("height"),
        FieldSpec::list("majorTicks", ScalarKind::String),
        FieldSpec::number("max"),
        FieldSpec::number("min"),
        FieldSpec::number("minorTicks"),
        FieldSpec::string("redColor"),
        FieldSpec::number("redFrom"),
        FieldSpec::number("redTo"),
        size("width"),
        FieldSpec::string("yellowColor"),
        FieldSpec::number("yellowFrom"),
        FieldSpec::number("yellowTo"),
    ],
};

pub static CSS_CLASS_NAMES: Schema = Schema {
    name: "CssClassNames",
    extends: None,
    fields: &[
        FieldSpec::string("headerRow"),
        FieldSpec::string("tableRow"),
        FieldSpec::string("oddTableRow"),
        FieldSpec::string("selectedTableRow"),
        FieldSpec::string("hoverTableRow"),
        FieldSpec::string("headerCell"),
        FieldSpec::string("tableCell"),
        FieldSpec::string("rowNumberCell"),
    ],
};

const PAGING_MODES: &[&str] = &["enable", "event", "disable"];

pub static TABLE: Schema = Schema {
    name: "TableOptions",
    extends: None,
    fields: &[
        FieldSpec::boolean("allowHtml"),
        FieldSpec::boolean("alternatingRowStyle"),
        FieldSpec::object("cssClassNames", &CSS_CLASS_NAMES),
        FieldSpec::number("firstRowNumber"),
        FieldSpec::number("frozenColumns"),
        size("height"),
        FieldSpec::one_of("page", PAGING_MODES),
        FieldSpec::number("pageSize"),
        FieldSpec::new(
            "pagingButtons",
            FieldKind::Scalar(ScalarKind::NumberOrString),
        ),
        FieldSpec::boolean("rtlTable"),
        FieldSpec::number("scrollLeftStartPosition"),
        FieldSpec::boolean("showRowNumber"),
        FieldSpec::one_of("sort", PAGING_MODES),
        FieldSpec::boolean("sortAscending"),
        FieldSpec::number("sortColumn"),
        FieldSpec::number("startPage"),
        size("width"),
    ],
};

pub static TIMELINE_BARS: Schema = Schema {
    name: "TimelineBars",
    extends: None,
    fields: &[
        FieldSpec::object("barLabelStyle", &TEXT_STYLE),
        FieldSpec::boolean("colorByRowLabel"),
        FieldSpec::boolean("groupByRowLabel"),
        FieldSpec::object("rowLabelStyle", &TEXT_STYLE),
        FieldSpec::boolean("showBarLabels"),
        FieldSpec::boolean("showRowLabels"),
        FieldSpec::string("singleColor"),
    ],
};

pub static TIMELINE: Schema = Schema {
    name: "TimelineOptions",
    extends: None,
    fields: &[
        FieldSpec::boolean("avoidOverlappingGridLines"),
        FieldSpec::string("backgroundColor"),
        FieldSpec::list("colors", ScalarKind::String),
        FieldSpec::boolean("enableInteractivity"),
        FieldSpec::string("fontName"),
        FieldSpec::number("fontSize"),
        FieldSpec::boolean("forceIFrame"),
        size("height"),
        FieldSpec::object("timeline", &TIMELINE_BARS),
        FieldSpec::object("tooltip", &TOOLTIP),
        size("width"),
    ],
};
