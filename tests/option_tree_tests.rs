use chrono::NaiveDate;
use gchart_rs::catalog::ChartType;
use gchart_rs::catalog::corechart::{BAR_CHART, LINE_CHART, PIE_CHART};
use gchart_rs::core::{FieldDefault, FieldSpec, OptionObject, OptionValue, Schema};
use gchart_rs::error::ChartError;
use gchart_rs::render::{JavascriptOptionOutput, OptionOutput};
use serde_json::json;

static GRID_STYLE: Schema = Schema {
    name: "GridStyle",
    extends: None,
    fields: &[
        FieldSpec::string("color"),
        FieldSpec::number("count").with_default(FieldDefault::Number(5.0)),
    ],
};

static SLICE_STYLE: Schema = Schema {
    name: "SliceStyle",
    extends: None,
    fields: &[FieldSpec::string("color"), FieldSpec::number("offset")],
};

static SLICED_PIE: Schema = Schema {
    name: "SlicedPieOptions",
    extends: None,
    fields: &[FieldSpec::object_list("slices", &SLICE_STYLE)],
};

static DASHBOARD: Schema = Schema {
    name: "DashboardOptions",
    extends: None,
    fields: &[
        FieldSpec::boolean("animated").with_default(FieldDefault::Bool(true)),
        FieldSpec::object("grid", &GRID_STYLE),
        FieldSpec::string("theme").with_default(FieldDefault::Str("maximized")),
    ],
};

fn render(options: &OptionObject) -> String {
    JavascriptOptionOutput::new()
        .render(options)
        .expect("render options")
}

#[test]
fn unknown_options_are_rejected() {
    let mut options = OptionObject::new(&LINE_CHART);
    let err = options.set("lineColour", "red").expect_err("unknown option");
    assert_eq!(
        err,
        ChartError::UnknownOption {
            schema: "LineChartOptions",
            field: "lineColour".to_owned(),
        }
    );
    assert!(matches!(
        options.set_path("hAxis.colour", "red"),
        Err(ChartError::UnknownOption { .. })
    ));
}

#[test]
fn mismatched_values_are_rejected_when_set() {
    let mut options = OptionObject::new(&LINE_CHART);

    assert!(matches!(
        options.set("curveType", "spline"),
        Err(ChartError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        options.set("lineWidth", "thick"),
        Err(ChartError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        options.set("lineWidth", f64::NAN),
        Err(ChartError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        options.set_path("title.text", "Sales"),
        Err(ChartError::Configuration(_))
    ));
    assert!(options.is_empty());

    options.set("curveType", "function").expect("allowed value");
    assert_eq!(render(&options), r#"{curveType:"function"}"#);
}

#[test]
fn closed_sum_fields_accept_each_of_their_forms() {
    let mut bar = OptionObject::new(&BAR_CHART);
    bar.set("isStacked", true).expect("boolean form");
    assert_eq!(render(&bar), "{isStacked:true}");
    bar.set("isStacked", "percent").expect("enum form");
    assert_eq!(render(&bar), r#"{isStacked:"percent"}"#);
    assert!(bar.set("isStacked", "sideways").is_err());

    let mut line = OptionObject::new(&LINE_CHART);
    line.set("legend", "none").expect("scalar legend");
    assert_eq!(render(&line), r#"{legend:"none"}"#);
    line.set_path("legend.position", "bottom")
        .expect("object legend");
    assert_eq!(render(&line), r#"{legend:{position:"bottom"}}"#);
}

#[test]
fn defaults_render_only_for_rendered_objects() {
    let mut options = OptionObject::new(&DASHBOARD);
    assert_eq!(render(&options), r#"{animated:true,theme:"maximized"}"#);

    options
        .set("animated", false)
        .and_then(|options| options.set_path("grid.color", "#ccc"))
        .expect("options");
    assert_eq!(
        render(&options),
        r##"{animated:false,grid:{color:"#ccc",count:5},theme:"maximized"}"##
    );
}

#[test]
fn draw_binds_the_literal_to_a_variable() {
    let output = JavascriptOptionOutput::new();
    let empty = OptionObject::new(&PIE_CHART);
    assert_eq!(
        output.draw("optionsChart1", &empty).expect("draw"),
        "var optionsChart1 = {};"
    );

    let mut options = OptionObject::new(&PIE_CHART);
    options
        .set("pieHole", 0.4)
        .and_then(|options| options.set("title", "My </script> day"))
        .expect("options");
    assert_eq!(
        output.draw("optionsChart1", &options).expect("draw"),
        r#"var optionsChart1 = {title:"My <\/script> day",pieHole:0.4};"#
    );
}

#[test]
fn dates_render_as_date_constructors() {
    let mut options = OptionObject::new(&LINE_CHART);
    let start = NaiveDate::from_ymd_opt(2024, 1, 15).expect("date");
    options
        .set_path("hAxis.viewWindow.min", start)
        .expect("date bound");
    assert_eq!(
        render(&options),
        "{hAxis:{viewWindow:{min:new Date(2024, 0, 15, 0, 0, 0)}}}"
    );
}

#[test]
fn from_json_builds_the_same_tree_as_setters() {
    let from_json = OptionObject::from_json(
        ChartType::LineChart.options_schema(),
        &json!({
            "title": "Sales",
            "curveType": "function",
            "hAxis": {"title": "Year", "textStyle": {"color": "#333"}},
            "series": {"1": {"lineWidth": 4}},
            "colors": ["red", "blue"],
            "pointSize": null,
            "vAxis": {"format": {"$raw": "formatter.pattern"}}
        }),
    )
    .expect("json options");

    let mut built = OptionObject::new(&LINE_CHART);
    built
        .set("title", "Sales")
        .and_then(|options| options.set("curveType", "function"))
        .and_then(|options| options.set_path("hAxis.title", "Year"))
        .and_then(|options| options.set_path("hAxis.textStyle.color", "#333"))
        .and_then(|options| options.set_path("series.1.lineWidth", 4))
        .and_then(|options| options.set("colors", vec!["red", "blue"]))
        .and_then(|options| {
            options.set_path("vAxis.format", OptionValue::raw("formatter.pattern"))
        })
        .expect("built options");

    assert_eq!(render(&from_json), render(&built));
    assert!(
        OptionObject::from_json(&LINE_CHART, &json!({"curveType": "spline"})).is_err()
    );
    assert!(OptionObject::from_json(&LINE_CHART, &json!(["title"])).is_err());
}

#[test]
fn unset_removes_a_value() {
    let mut options = OptionObject::new(&LINE_CHART);
    options.set("lineWidth", 2).expect("lineWidth");
    assert_eq!(options.unset("lineWidth"), Some(OptionValue::Number(2.0)));
    assert_eq!(render(&options), "{}");
}

#[test]
fn positional_lists_pad_missing_items() {
    let mut options = OptionObject::new(&SLICED_PIE);
    options
        .set_path("slices.2.color", "red")
        .expect("third slice");
    assert_eq!(render(&options), r#"{slices:[{},{},{color:"red"}]}"#);

    options.set_path("slices.0.offset", 0.2).expect("first slice");
    assert_eq!(
        render(&options),
        r#"{slices:[{offset:0.2},{},{color:"red"}]}"#
    );
}

#[test]
fn positional_lists_from_json_keep_raw_items() {
    let options = OptionObject::from_json(
        &SLICED_PIE,
        &json!({"slices": [{"offset": 1}, {"$raw": "highlightedSlice"}]}),
    )
    .expect("json slices");
    assert_eq!(render(&options), "{slices:[{offset:1},highlightedSlice]}");
    assert!(OptionObject::from_json(&SLICED_PIE, &json!({"slices": ["red"]})).is_err());
}

#[test]
fn positional_lists_reject_far_positions() {
    let mut options = OptionObject::new(&SLICED_PIE);
    let err = options
        .set_path("slices.5000.color", "red")
        .expect_err("position too far");
    assert_eq!(
        err,
        ChartError::Configuration("position 5000 of `slices` exceeds 1024".to_owned())
    );
    assert!(options.is_empty());
    assert!(options.set_path("slices.1023.color", "red").is_ok());
}
