//! Option schemas for Material charts (`google.charts` namespace).
//!
//! Material charts take a reduced option set; the runtime converts it with
//! `convertOptions` before drawing.

use crate::core::{FieldKind, FieldSpec, ScalarKind, Schema};

use super::common::{BAR, H_AXIS, LEGEND, ORIENTATIONS, SERIES, STACKING_MODES, V_AXIS, size};

pub static MATERIAL_TITLE: Schema = Schema {
    name: "MaterialTitle",
    extends: None,
    fields: &[FieldSpec::string("title"), FieldSpec::string("subtitle")],
};

pub static MATERIAL_AXIS: Schema = Schema {
    name: "MaterialAxis",
    extends: None,
    fields: &[
        FieldSpec::string("label"),
        FieldSpec::one_of("side", &["top", "bottom", "left", "right"]),
    ],
};

pub static MATERIAL_AXES: Schema = Schema {
    name: "MaterialAxes",
    extends: None,
    fields: &[
        FieldSpec::indexed("x", &MATERIAL_AXIS),
        FieldSpec::indexed("y", &MATERIAL_AXIS),
    ],
};

pub static MATERIAL_CHART: Schema = Schema {
    name: "MaterialChartOptions",
    extends: None,
    fields: &[
        FieldSpec::object("axes", &MATERIAL_AXES),
        FieldSpec::string("backgroundColor"),
        FieldSpec::object("chart", &MATERIAL_TITLE),
        FieldSpec::list("colors", ScalarKind::String),
        FieldSpec::boolean("enableInteractivity"),
        FieldSpec::string("fontName"),
        FieldSpec::number("fontSize"),
        FieldSpec::object("hAxis", &H_AXIS),
        size("height"),
        FieldSpec::new(
            "legend",
            FieldKind::ScalarOrObject(ScalarKind::Enum(&["none"]), &LEGEND),
        ),
        FieldSpec::indexed("series", &SERIES),
        FieldSpec::string("title"),
        FieldSpec::object("vAxis", &V_AXIS),
        size("width"),
    ],
};

pub static MATERIAL_LINE: Schema = Schema {
    name: "MaterialLineOptions",
    extends: Some(&MATERIAL_CHART),
    fields: &[FieldSpec::number("lineWidth")],
};

pub static MATERIAL_BAR: Schema = Schema {
    name: "MaterialBarOptions",
    extends: Some(&MATERIAL_CHART),
    fields: &[
        FieldSpec::object("bar", &BAR),
        FieldSpec::one_of("bars", ORIENTATIONS),
        FieldSpec::new(
            "isStacked",
            FieldKind::Scalar(ScalarKind::BooleanOrEnum(STACKING_MODES)),
        ),
    ],
};

pub static MATERIAL_SCATTER: Schema = Schema {
    name: "MaterialScatterOptions",
    extends: Some(&MATERIAL_CHART),
    fields: &[FieldSpec::number("pointSize")],
};
