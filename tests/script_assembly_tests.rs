use gchart_rs::api::{
    Batch, Chart, ChartOutput, EventType, JavascriptChartOutput, OutputConfig, callback_name,
};
use gchart_rs::catalog::ChartType;
use gchart_rs::catalog::common::TEXT_STYLE;
use gchart_rs::catalog::corechart::LINE_CHART;
use gchart_rs::core::{FieldSpec, OptionObject, Schema};
use gchart_rs::data::{Cell, Column, DataTable};

static CHART_TITLE: Schema = Schema {
    name: "ChartTitle",
    extends: None,
    fields: &[
        FieldSpec::string("text"),
        FieldSpec::object("textStyle", &TEXT_STYLE),
    ],
};

static TITLED_LINE_CHART: Schema = Schema {
    name: "TitledLineChartOptions",
    extends: Some(&LINE_CHART),
    fields: &[
        FieldSpec::boolean("legend"),
        FieldSpec::object("title", &CHART_TITLE),
    ],
};

fn sales_table() -> DataTable {
    DataTable::new(
        vec![Column::new("Year"), Column::new("Sales")],
        vec![
            vec![Cell::from("2004"), Cell::from(1000)],
            vec![Cell::from("2005"), Cell::from(1170)],
        ],
    )
    .expect("sales table")
}

fn output() -> JavascriptChartOutput {
    JavascriptChartOutput::new(OutputConfig::default()).expect("output")
}

#[test]
fn single_chart_round_trip() {
    let mut options = OptionObject::new(&TITLED_LINE_CHART);
    options
        .set_path("title.text", "Sales")
        .and_then(|options| options.set("legend", false))
        .expect("options");
    let chart = Chart::new("chart1", ChartType::LineChart, sales_table())
        .and_then(|chart| chart.with_options(options))
        .expect("chart");

    let batch = Batch::single(&chart).with_element_id("chart_div");
    let output = output();
    let start = output.start_charts(&batch).expect("start");
    let end = output.end_charts(&batch).expect("end");

    let callback = callback_name(&["chart_div"]);
    assert_eq!(
        start,
        format!(
            "google.charts.load('current', {{packages:['corechart']}});\
             google.charts.setOnLoadCallback({callback}); function {callback}() {{\
             var chart1 = new google.visualization.LineChart(document.getElementById(\"chart_div\"));\
             var dataChart1 = new google.visualization.arrayToDataTable(\
             [[\"Year\",\"Sales\"],[\"2004\",1000],[\"2005\",1170]], false);\
             var optionsChart1 = {{legend:false,title:{{text:\"Sales\"}}}};"
        )
    );
    assert_eq!(end, "chart1.draw(dataChart1, optionsChart1);}");
    assert_eq!(
        output.full_charts(&batch).expect("full"),
        format!("{start}{end}")
    );
}

#[test]
fn empty_options_render_an_empty_literal() {
    let chart = Chart::new("chart1", ChartType::PieChart, sales_table())
        .expect("chart")
        .with_element_id("pie_div");
    let script = output().full_chart(&chart).expect("script");

    assert!(script.contains("var optionsChart1 = {};"));
    assert!(script.contains("{packages:['corechart']}"));
    assert!(script.ends_with("chart1.draw(dataChart1, optionsChart1);}"));
}

#[test]
fn material_charts_convert_their_options() {
    let material = Chart::new("chart1", ChartType::MaterialBar, sales_table())
        .expect("chart")
        .with_element_id("bar_div");
    let script = output().full_chart(&material).expect("script");

    assert!(script.starts_with("google.charts.load('current', {packages:['bar']});"));
    assert!(script.contains("var chart1 = new google.charts.Bar(document.getElementById(\"bar_div\"));"));
    assert!(script.ends_with(
        "chart1.draw(dataChart1, google.charts.Bar.convertOptions(optionsChart1));}"
    ));

    let classic = Chart::new("chart1", ChartType::BarChart, sales_table())
        .expect("chart")
        .with_element_id("bar_div");
    let end = output().end_chart(&classic).expect("end chart");
    assert_eq!(end, "chart1.draw(dataChart1, optionsChart1);");
}

#[test]
fn batch_shares_one_load_statement_and_keeps_chart_order() {
    let charts = vec![
        Chart::new("first", ChartType::LineChart, sales_table()).expect("first"),
        Chart::new("second", ChartType::LineChart, sales_table()).expect("second"),
    ];
    let batch = Batch::new(&charts).with_element_ids(["div_1", "div_2"]);
    let script = output().full_charts(&batch).expect("script");

    assert_eq!(script.matches("google.charts.load(").count(), 1);
    assert!(script.contains("{packages:['corechart']}"));
    let callback = callback_name(&["div_1", "div_2"]);
    assert!(script.contains(&format!(
        "google.charts.setOnLoadCallback({callback}); function {callback}() {{"
    )));

    let first = script.find("var first = ").expect("first chart");
    let second = script.find("var second = ").expect("second chart");
    let first_draw = script.find("first.draw(").expect("first draw");
    let second_draw = script.find("second.draw(").expect("second draw");
    assert!(first < second && second < first_draw && first_draw < second_draw);
    assert!(script.ends_with("second.draw(dataSecond, optionsSecond);}"));
    assert_eq!(charts[0].element_id(), None);
}

#[test]
fn events_are_bound_before_the_draw_call() {
    let mut chart = Chart::new("chart1", ChartType::LineChart, sales_table())
        .expect("chart")
        .with_element_id("chart_div");
    chart
        .events_mut()
        .add_listener(EventType::Select, "selectHandler")
        .add_one_time_listener(EventType::Ready, "readyHandler");

    let end = output().end_chart(&chart).expect("end chart");
    assert_eq!(
        end,
        "google.visualization.events.addListener(chart1, 'select', selectHandler);\
         google.visualization.events.addOneTimeListener(chart1, 'ready', readyHandler);\
         chart1.draw(dataChart1, optionsChart1);"
    );
}

#[test]
fn language_is_forwarded_to_the_loader() {
    let output = JavascriptChartOutput::new(
        OutputConfig::new().with_version("51").with_language("ja"),
    )
    .expect("output");
    let chart = Chart::new("chart1", ChartType::GeoChart, sales_table())
        .expect("chart")
        .with_element_id("map");

    let script = output.full_chart(&chart).expect("script");
    assert!(script.starts_with("google.charts.load('51', {packages:['geochart'], language: 'ja'});"));
}

#[test]
fn callback_name_is_stable_and_tracks_element_ids() {
    let chart = Chart::new("chart1", ChartType::LineChart, sales_table()).expect("chart");
    let output = output();

    let first = output
        .start_charts(&Batch::single(&chart).with_element_id("chart_div"))
        .expect("first");
    let again = output
        .start_charts(&Batch::single(&chart).with_element_id("chart_div"))
        .expect("again");
    let other = output
        .start_charts(&Batch::single(&chart).with_element_id("other_div"))
        .expect("other");

    assert_eq!(first, again);
    assert_ne!(callback_name(&["chart_div"]), callback_name(&["other_div"]));
    assert!(other.contains(&callback_name(&["other_div"])));
    assert!(!other.contains(&callback_name(&["chart_div"])));
}
