//! Option schemas for charts loaded from the `corechart` package.

use crate::core::{FieldKind, FieldSpec, ScalarKind, Schema};

use super::common::{
    ADVANCED_CHART_OPTIONS, BAR, CHART_OPTIONS, CROSSHAIR, CURVE_TYPES, H_AXIS, POINT_SHAPES,
    STACKING_MODES, TEXT_STYLE, TOOLTIP,
};

const fn is_stacked() -> FieldSpec {
    FieldSpec::new(
        "isStacked",
        FieldKind::Scalar(ScalarKind::BooleanOrEnum(STACKING_MODES)),
    )
}

pub static LINE_CHART: Schema = Schema {
    name: "LineChartOptions",
    extends: Some(&ADVANCED_CHART_OPTIONS),
    fields: &[
        FieldSpec::object("crosshair", &CROSSHAIR),
        FieldSpec::one_of("curveType", CURVE_TYPES),
        FieldSpec::boolean("interpolateNulls"),
        FieldSpec::list("lineDashStyle", ScalarKind::Number),
        FieldSpec::number("lineWidth"),
        FieldSpec::one_of("pointShape", POINT_SHAPES),
        FieldSpec::number("pointSize"),
        FieldSpec::boolean("pointsVisible"),
    ],
};

pub static AREA_CHART: Schema = Schema {
    name: "AreaChartOptions",
    extends: Some(&ADVANCED_CHART_OPTIONS),
    fields: &[
        FieldSpec::number("areaOpacity"),
        FieldSpec::object("crosshair", &CROSSHAIR),
        FieldSpec::boolean("interpolateNulls"),
        is_stacked(),
        FieldSpec::list("lineDashStyle", ScalarKind::Number),
        FieldSpec::number("lineWidth"),
        FieldSpec::one_of("pointShape", POINT_SHAPES),
        FieldSpec::number("pointSize"),
        FieldSpec::boolean("pointsVisible"),
    ],
};

pub static BAR_CHART: Schema = Schema {
    name: "BarChartOptions",
    extends: Some(&ADVANCED_CHART_OPTIONS),
    fields: &[
        FieldSpec::object("bar", &BAR),
        FieldSpec::one_of("bars", &["horizontal", "vertical"]),
        FieldSpec::indexed("hAxes", &H_AXIS),
        is_stacked(),
    ],
};

pub static COLUMN_CHART: Schema = Schema {
    name: "ColumnChartOptions",
    extends: Some(&BAR_CHART),
    fields: &[],
};

pub static COMBO_CHART: Schema = Schema {
    name: "ComboChartOptions",
    extends: Some(&ADVANCED_CHART_OPTIONS),
    fields: &[
        FieldSpec::number("areaOpacity"),
        FieldSpec::object("bar", &BAR),
        FieldSpec::object("crosshair", &CROSSHAIR),
        FieldSpec::one_of("curveType", CURVE_TYPES),
        FieldSpec::boolean("interpolateNulls"),
        is_stacked(),
        FieldSpec::list("lineDashStyle", ScalarKind::Number),
        FieldSpec::number("lineWidth"),
        FieldSpec::one_of("pointShape", POINT_SHAPES),
        FieldSpec::number("pointSize"),
        FieldSpec::boolean("pointsVisible"),
        FieldSpec::one_of(
            "seriesType",
            &["line", "area", "bars", "candlesticks", "steppedArea"],
        ),
    ],
};

pub static SCATTER_CHART: Schema = Schema {
    name: "ScatterChartOptions",
    extends: Some(&ADVANCED_CHART_OPTIONS),
    fields: &[
        FieldSpec::object("crosshair", &CROSSHAIR),
        FieldSpec::one_of("curveType", CURVE_TYPES),
        FieldSpec::number("lineWidth"),
        FieldSpec::one_of("pointShape", POINT_SHAPES),
        FieldSpec::number("pointSize"),
        FieldSpec::boolean("pointsVisible"),
    ],
};

pub static HISTOGRAM_BUCKETS: Schema = Schema {
    name: "HistogramBuckets",
    extends: None,
    fields: &[
        FieldSpec::number("bucketSize"),
        FieldSpec::boolean("hideBucketItems"),
        FieldSpec::number("lastBucketPercentile"),
        FieldSpec::number("maxValue"),
        FieldSpec::number("minValue"),
        FieldSpec::one_of("numBucketsRule", &["sqrt", "sturges", "rice"]),
    ],
};

pub static HISTOGRAM: Schema = Schema {
    name: "HistogramOptions",
    extends: Some(&ADVANCED_CHART_OPTIONS),
    fields: &[
        FieldSpec::object("bar", &BAR),
        FieldSpec::object("histogram", &HISTOGRAM_BUCKETS),
        FieldSpec::boolean("interpolateNulls"),
        is_stacked(),
    ],
};

pub static SLICE: Schema = Schema {
    name: "Slice",
    extends: None,
    fields: &[
        FieldSpec::string("color"),
        FieldSpec::number("offset"),
        FieldSpec::object("textStyle", &TEXT_STYLE),
    ],
};

pub static PIE_TOOLTIP: Schema = Schema {
    name: "PieTooltip",
    extends: Some(&TOOLTIP),
    fields: &[FieldSpec::one_of("text", &["both", "value", "percentage"])],
};

pub static PIE_CHART: Schema = Schema {
    name: "PieChartOptions",
    extends: Some(&CHART_OPTIONS),
    fields: &[
        FieldSpec::object("tooltip", &PIE_TOOLTIP),
        FieldSpec::boolean("is3D"),
        FieldSpec::number("pieHole"),
        FieldSpec::string("pieResidueSliceColor"),
        FieldSpec::string("pieResidueSliceLabel"),
        FieldSpec::string("pieSliceBorderColor"),
        FieldSpec::one_of("pieSliceText", &["percentage", "value", "label", "none"]),
        FieldSpec::object("pieSliceTextStyle", &TEXT_STYLE),
        FieldSpec::number("pieStartAngle"),
        FieldSpec::boolean("reverseCategories"),
        FieldSpec::indexed("slices", &SLICE),
        FieldSpec::number("sliceVisibilityThreshold"),
    ],
};
