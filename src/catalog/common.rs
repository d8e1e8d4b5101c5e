//! Option schemas shared by several chart variants.

use crate::core::{FieldKind, FieldSpec, ScalarKind, Schema};

pub(crate) const POINT_SHAPES: &[&str] = &[
    "circle", "triangle", "square", "diamond", "star", "polygon",
];
pub(crate) const STACKING_MODES: &[&str] = &["percent", "relative", "absolute"];
pub(crate) const CURVE_TYPES: &[&str] = &["none", "function"];
pub(crate) const ORIENTATIONS: &[&str] = &["horizontal", "vertical"];

pub(crate) const fn size(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Scalar(ScalarKind::NumberOrString))
}

pub(crate) const fn bound(name: &'static str) -> FieldSpec {
    FieldSpec::new(name, FieldKind::Scalar(ScalarKind::NumberOrDate))
}

pub static TEXT_STYLE: Schema = Schema {
    name: "TextStyle",
    extends: None,
    fields: &[
        FieldSpec::string("color"),
        FieldSpec::string("fontName"),
        FieldSpec::number("fontSize"),
        FieldSpec::boolean("bold"),
        FieldSpec::boolean("italic"),
        FieldSpec::string("auraColor"),
        FieldSpec::number("opacity"),
    ],
};

pub static STROKE: Schema = Schema {
    name: "Stroke",
    extends: None,
    fields: &[
        FieldSpec::string("stroke"),
        FieldSpec::number("strokeWidth"),
        FieldSpec::string("fill"),
    ],
};

pub static CHART_AREA: Schema = Schema {
    name: "ChartArea",
    extends: None,
    fields: &[
        FieldSpec::new(
            "backgroundColor",
            FieldKind::ScalarOrObject(ScalarKind::String, &STROKE),
        ),
        size("left"),
        size("top"),
        size("width"),
        size("height"),
    ],
};

pub static LEGEND: Schema = Schema {
    name: "Legend",
    extends: None,
    fields: &[
        FieldSpec::one_of("alignment", &["start", "center", "end"]),
        FieldSpec::one_of(
            "position",
            &["bottom", "left", "in", "none", "right", "top", "labeled"],
        ),
        FieldSpec::object("textStyle", &TEXT_STYLE),
    ],
};

pub static ADVANCED_LEGEND: Schema = Schema {
    name: "AdvancedLegend",
    extends: Some(&LEGEND),
    fields: &[FieldSpec::number("maxLines"), FieldSpec::number("pageIndex")],
};

pub static TOOLTIP: Schema = Schema {
    name: "Tooltip",
    extends: None,
    fields: &[
        FieldSpec::boolean("isHtml"),
        FieldSpec::boolean("showColorCode"),
        FieldSpec::object("textStyle", &TEXT_STYLE),
        FieldSpec::one_of("trigger", &["focus", "none", "selection"]),
    ],
};

pub static ADVANCED_TOOLTIP: Schema = Schema {
    name: "AdvancedTooltip",
    extends: Some(&TOOLTIP),
    fields: &[FieldSpec::boolean("ignoreBounds")],
};

pub static ANIMATION: Schema = Schema {
    name: "Animation",
    extends: None,
    fields: &[
        FieldSpec::number("duration"),
        FieldSpec::one_of("easing", &["linear", "in", "out", "inAndOut"]),
    ],
};

pub static ADVANCED_ANIMATION: Schema = Schema {
    name: "AdvancedAnimation",
    extends: Some(&ANIMATION),
    fields: &[FieldSpec::boolean("startup")],
};

pub static ANNOTATION_STEM: Schema = Schema {
    name: "Stem",
    extends: None,
    fields: &[FieldSpec::string("color"), FieldSpec::number("length")],
};

pub static ANNOTATIONS: Schema = Schema {
    name: "Annotations",
    extends: None,
    fields: &[
        FieldSpec::boolean("alwaysOutside"),
        FieldSpec::object("boxStyle", &STROKE),
        FieldSpec::boolean("highContrast"),
        FieldSpec::object("stem", &ANNOTATION_STEM),
        FieldSpec::one_of("style", &["point", "line"]),
        FieldSpec::object("textStyle", &TEXT_STYLE),
    ],
};

pub static GRIDLINES: Schema = Schema {
    name: "Gridlines",
    extends: None,
    fields: &[
        FieldSpec::string("color"),
        FieldSpec::number("count"),
        FieldSpec::number("minSpacing"),
        FieldSpec::number("multiple"),
    ],
};

pub static VIEW_WINDOW: Schema = Schema {
    name: "ViewWindow",
    extends: None,
    fields: &[bound("max"), bound("min")],
};

pub static AXIS: Schema = Schema {
    name: "Axis",
    extends: None,
    fields: &[
        FieldSpec::string("baselineColor"),
        FieldSpec::number("direction"),
        FieldSpec::string("format"),
        FieldSpec::object("gridlines", &GRIDLINES),
        FieldSpec::boolean("logScale"),
        bound("maxValue"),
        FieldSpec::object("minorGridlines", &GRIDLINES),
        bound("minValue"),
        FieldSpec::one_of("scaleType", &["log", "mirrorLog"]),
        FieldSpec::one_of("textPosition", &["out", "in", "none"]),
        FieldSpec::object("textStyle", &TEXT_STYLE),
        FieldSpec::list("ticks", ScalarKind::NumberOrDate),
        FieldSpec::string("title"),
        FieldSpec::object("titleTextStyle", &TEXT_STYLE),
        FieldSpec::object("viewWindow", &VIEW_WINDOW),
        FieldSpec::one_of("viewWindowMode", &["pretty", "maximized", "explicit"]),
    ],
};

pub static H_AXIS: Schema = Schema {
    name: "HAxis",
    extends: Some(&AXIS),
    fields: &[
        FieldSpec::boolean("allowContainerBoundaryTextCutoff"),
        FieldSpec::number("maxAlternation"),
        FieldSpec::number("maxTextLines"),
        FieldSpec::number("minTextSpacing"),
        FieldSpec::number("showTextEvery"),
        FieldSpec::boolean("slantedText"),
        FieldSpec::number("slantedTextAngle"),
    ],
};

pub static V_AXIS: Schema = Schema {
    name: "VAxis",
    extends: Some(&AXIS),
    fields: &[],
};

pub static SERIES: Schema = Schema {
    name: "Series",
    extends: None,
    fields: &[
        FieldSpec::object("annotations", &ANNOTATIONS),
        FieldSpec::number("areaOpacity"),
        FieldSpec::string("color"),
        FieldSpec::one_of("curveType", CURVE_TYPES),
        FieldSpec::string("labelInLegend"),
        FieldSpec::list("lineDashStyle", ScalarKind::Number),
        FieldSpec::number("lineWidth"),
        FieldSpec::one_of("pointShape", POINT_SHAPES),
        FieldSpec::number("pointSize"),
        FieldSpec::boolean("pointsVisible"),
        FieldSpec::number("targetAxisIndex"),
        FieldSpec::one_of(
            "type",
            &["line", "area", "bars", "candlesticks", "steppedArea"],
        ),
        FieldSpec::boolean("visibleInLegend"),
    ],
};

pub static TRENDLINE: Schema = Schema {
    name: "Trendline",
    extends: None,
    fields: &[
        FieldSpec::string("color"),
        FieldSpec::number("degree"),
        FieldSpec::string("labelInLegend"),
        FieldSpec::number("lineWidth"),
        FieldSpec::number("opacity"),
        FieldSpec::number("pointSize"),
        FieldSpec::boolean("pointsVisible"),
        FieldSpec::boolean("showR2"),
        FieldSpec::one_of("type", &["linear", "exponential", "polynomial"]),
        FieldSpec::boolean("visibleInLegend"),
    ],
};

pub static EXPLORER: Schema = Schema {
    name: "Explorer",
    extends: None,
    fields: &[
        FieldSpec::list(
            "actions",
            ScalarKind::Enum(&["dragToPan", "dragToZoom", "rightClickToReset"]),
        ),
        FieldSpec::one_of("axis", ORIENTATIONS),
        FieldSpec::boolean("keepInBounds"),
        FieldSpec::number("maxZoomIn"),
        FieldSpec::number("maxZoomOut"),
        FieldSpec::number("zoomDelta"),
    ],
};

pub static CROSSHAIR_STATE: Schema = Schema {
    name: "CrosshairState",
    extends: None,
    fields: &[FieldSpec::string("color"), FieldSpec::number("opacity")],
};

pub static CROSSHAIR: Schema = Schema {
    name: "Crosshair",
    extends: Some(&CROSSHAIR_STATE),
    fields: &[
        FieldSpec::object("focused", &CROSSHAIR_STATE),
        FieldSpec::one_of("orientation", &["vertical", "horizontal", "both"]),
        FieldSpec::object("selected", &CROSSHAIR_STATE),
        FieldSpec::one_of("trigger", &["focus", "selection", "both"]),
    ],
};

pub static BAR: Schema = Schema {
    name: "Bar",
    extends: None,
    fields: &[size("groupWidth")],
};

/// Fields every chart variant accepts.
pub static CHART_OPTIONS: Schema = Schema {
    name: "ChartOptions",
    extends: None,
    fields: &[
        FieldSpec::new(
            "backgroundColor",
            FieldKind::ScalarOrObject(ScalarKind::String, &STROKE),
        ),
        FieldSpec::object("chartArea", &CHART_AREA),
        FieldSpec::list("colors", ScalarKind::String),
        FieldSpec::boolean("enableInteractivity"),
        FieldSpec::string("fontName"),
        FieldSpec::number("fontSize"),
        FieldSpec::boolean("forceIFrame"),
        size("height"),
        FieldSpec::new(
            "legend",
            FieldKind::ScalarOrObject(ScalarKind::Enum(&["none"]), &LEGEND),
        ),
        FieldSpec::string("title"),
        FieldSpec::one_of("titlePosition", &["in", "out", "none"]),
        FieldSpec::object("titleTextStyle", &TEXT_STYLE),
        FieldSpec::object("tooltip", &TOOLTIP),
        size("width"),
    ],
};

/// Fields shared by the axis-based core charts.
pub static ADVANCED_CHART_OPTIONS: Schema = Schema {
    name: "AdvancedChartOptions",
    extends: Some(&CHART_OPTIONS),
    fields: &[
        FieldSpec::new(
            "legend",
            FieldKind::ScalarOrObject(ScalarKind::Enum(&["none"]), &ADVANCED_LEGEND),
        ),
        FieldSpec::object("tooltip", &ADVANCED_TOOLTIP),
        FieldSpec::one_of(
            "aggregationTarget",
            &["category", "series", "auto", "none"],
        ),
        FieldSpec::object("animation", &ADVANCED_ANIMATION),
        FieldSpec::object("annotations", &ANNOTATIONS),
        FieldSpec::one_of("axisTitlesPosition", &["in", "out", "none"]),
        FieldSpec::number("dataOpacity"),
        FieldSpec::object("explorer", &EXPLORER),
        FieldSpec::one_of("focusTarget", &["datum", "category"]),
        FieldSpec::object("hAxis", &H_AXIS),
        FieldSpec::one_of("orientation", ORIENTATIONS),
        FieldSpec::boolean("reverseCategories"),
        FieldSpec::one_of("selectionMode", &["single", "multiple"]),
        FieldSpec::indexed("series", &SERIES),
        FieldSpec::one_of("theme", &["maximized"]),
        FieldSpec::indexed("trendlines", &TRENDLINE),
        FieldSpec::indexed("vAxes", &V_AXIS),
        FieldSpec::object("vAxis", &V_AXIS),
    ],
};
