//! Option schemas for diff charts: the base chart's options plus `diff`.

use crate::core::{FieldSpec, Schema};

use super::corechart::{BAR_CHART, COLUMN_CHART, PIE_CHART, SCATTER_CHART};

pub static BAR_DIFF_DATA: Schema = Schema {
    name: "BarDiffData",
    extends: None,
    fields: &[FieldSpec::number("widthFactor")],
};

pub static BAR_DIFF: Schema = Schema {
    name: "BarDiff",
    extends: None,
    fields: &[
        FieldSpec::object("newData", &BAR_DIFF_DATA),
        FieldSpec::object("oldData", &BAR_DIFF_DATA),
    ],
};

pub static PIE_DIFF_INNER_CIRCLE: Schema = Schema {
    name: "PieDiffInnerCircle",
    extends: None,
    fields: &[
        FieldSpec::number("borderFactor"),
        FieldSpec::number("radiusFactor"),
    ],
};

pub static PIE_DIFF_OLD_DATA: Schema = Schema {
    name: "PieDiffOldData",
    extends: None,
    fields: &[FieldSpec::boolean("inCenter"), FieldSpec::number("opacity")],
};

pub static PIE_DIFF: Schema = Schema {
    name: "PieDiff",
    extends: None,
    fields: &[
        FieldSpec::object("innerCircle", &PIE_DIFF_INNER_CIRCLE),
        FieldSpec::object("oldData", &PIE_DIFF_OLD_DATA),
    ],
};

pub static SCATTER_DIFF_DATA: Schema = Schema {
    name: "ScatterDiffData",
    extends: None,
    fields: &[FieldSpec::number("opacity")],
};

pub static SCATTER_DIFF: Schema = Schema {
    name: "ScatterDiff",
    extends: None,
    fields: &[
        FieldSpec::object("newData", &SCATTER_DIFF_DATA),
        FieldSpec::object("oldData", &SCATTER_DIFF_DATA),
    ],
};

pub static BAR_DIFF_CHART: Schema = Schema {
    name: "BarDiffChartOptions",
    extends: Some(&BAR_CHART),
    fields: &[FieldSpec::object("diff", &BAR_DIFF)],
};

pub static COLUMN_DIFF_CHART: Schema = Schema {
    name: "ColumnDiffChartOptions",
    extends: Some(&COLUMN_CHART),
    fields: &[FieldSpec::object("diff", &BAR_DIFF)],
};

pub static PIE_DIFF_CHART: Schema = Schema {
    name: "PieDiffChartOptions",
    extends: Some(&PIE_CHART),
    fields: &[FieldSpec::object("diff", &PIE_DIFF)],
};

pub static SCATTER_DIFF_CHART: Schema = Schema {
    name: "ScatterDiffChartOptions",
    extends: Some(&SCATTER_CHART),
    fields: &[FieldSpec::object("diff", &SCATTER_DIFF)],
};
