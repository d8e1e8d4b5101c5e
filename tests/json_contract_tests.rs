use gchart_rs::api::{
    Batch, CHART_BATCH_JSON_SCHEMA_V1, Chart, ChartBatchJsonContractV1, ChartOutput, EventType,
    JavascriptChartOutput, OutputConfig,
};
use gchart_rs::catalog::ChartType;
use gchart_rs::data::{Cell, Column, ColumnType, DataTable};
use gchart_rs::error::ChartError;

const BATCH_JSON: &str = r#"{
    "schema_version": 1,
    "config": {"version": "51", "language": "de"},
    "charts": [
        {
            "name": "visits",
            "chart_type": "LineChart",
            "element_id": "visits_div",
            "data": {
                "kind": "array",
                "columns": [{"label": "Day", "type": "date"}, {"label": "Visits"}],
                "rows": [["2024-03-01", 120], ["2024-03-02", {"v": 95, "f": "95 visits"}]]
            },
            "options": {"title": "Visits", "hAxis": {"format": "d MMM"}, "series": {"0": {"color": "teal"}}},
            "events": [{"event": "select", "function": "onVisitSelect"}]
        }
    ]
}"#;

#[test]
fn contract_renders_like_the_typed_api() {
    let contract = ChartBatchJsonContractV1::from_json_compat_str(BATCH_JSON).expect("contract");
    assert_eq!(contract.schema_version, CHART_BATCH_JSON_SCHEMA_V1);
    let from_json = contract.render_full().expect("render contract");

    let table = DataTable::new(
        vec![Column::typed("Day", ColumnType::Date), Column::new("Visits")],
        vec![
            vec![
                Cell::from(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).expect("date")),
                Cell::from(120),
            ],
            vec![
                Cell::from(chrono::NaiveDate::from_ymd_opt(2024, 3, 2).expect("date")),
                Cell::formatted(95, "95 visits"),
            ],
        ],
    )
    .expect("table");
    let mut chart = Chart::new("visits", ChartType::LineChart, table)
        .expect("chart")
        .with_element_id("visits_div");
    chart
        .options_mut()
        .set("title", "Visits")
        .and_then(|options| options.set_path("hAxis.format", "d MMM"))
        .and_then(|options| options.set_path("series.0.color", "teal"))
        .expect("options");
    chart
        .events_mut()
        .add_listener(EventType::Select, "onVisitSelect");

    let config = OutputConfig::new().with_version("51").with_language("de");
    let output = JavascriptChartOutput::new(config).expect("output");
    let typed = output.full_charts(&Batch::single(&chart)).expect("typed script");

    assert_eq!(from_json, typed);
    assert!(typed.contains("[new Date(2024, 2, 1),120]"));
    assert!(typed.contains("{v:95,f:\"95 visits\"}"));
}

#[test]
fn contract_round_trips_through_serde() {
    let contract = ChartBatchJsonContractV1::from_json_compat_str(BATCH_JSON).expect("contract");
    let pretty = contract.to_json_pretty().expect("serialize");
    let reparsed = ChartBatchJsonContractV1::from_json_compat_str(&pretty).expect("reparse");
    assert_eq!(contract, reparsed);
}

#[test]
fn diff_and_datatable_json_are_supported() {
    let json = r#"{
        "schema_version": 1,
        "element_ids": ["diff_div"],
        "charts": [{
            "name": "columns",
            "chart_type": "ColumnChart",
            "diff": {
                "old": {"kind": "table", "table": {"cols": [{"label": "Name", "type": "string"}, {"label": "Score", "type": "number"}], "rows": [{"c": [{"v": "A"}, {"v": 1}]}]}},
                "new": {"kind": "table", "table": {"cols": [{"label": "Name", "type": "string"}, {"label": "Score", "type": "number"}], "rows": [{"c": [{"v": "A"}, {"v": 3}]}]}}
            },
            "options": {"diff": {"newData": {"widthFactor": 0.5}}}
        }]
    }"#;

    let script = ChartBatchJsonContractV1::from_json_compat_str(json)
        .and_then(|contract| contract.render_full())
        .expect("script");

    assert!(script.contains("var old_dataColumns = new google.visualization.DataTable("));
    assert!(script.contains("var new_dataColumns = new google.visualization.DataTable("));
    assert!(script.contains("var dataColumns = columns.computeDiff(old_dataColumns, new_dataColumns);"));
    assert!(script.contains("var optionsColumns = {diff:{newData:{widthFactor:0.5}}};"));
    assert!(script.ends_with("columns.draw(dataColumns, optionsColumns);}"));
}

#[test]
fn invalid_payloads_are_reported() {
    assert!(matches!(
        ChartBatchJsonContractV1::from_json_compat_str("{"),
        Err(ChartError::InvalidData(_))
    ));

    let unknown_option = r#"[{
        "name": "chart1", "chart_type": "PieChart", "element_id": "pie",
        "data": {"kind": "array", "columns": [{"label": "a"}], "rows": [[1]]},
        "options": {"curveType": "function"}
    }]"#;
    let err = ChartBatchJsonContractV1::from_json_compat_str(unknown_option)
        .and_then(|contract| contract.render_full())
        .expect_err("unknown option");
    assert!(matches!(err, ChartError::UnknownOption { .. }));

    let ragged = r#"[{
        "name": "chart1", "chart_type": "PieChart", "element_id": "pie",
        "data": {"kind": "array", "columns": [{"label": "a"}, {"label": "b"}], "rows": [[1]]}
    }]"#;
    assert!(matches!(
        ChartBatchJsonContractV1::from_json_compat_str(ragged)
            .and_then(|contract| contract.render_full()),
        Err(ChartError::InvalidData(_))
    ));
}
