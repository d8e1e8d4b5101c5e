use gchart_rs::api::{Batch, Chart, ChartOutput, JavascriptChartOutput};
use gchart_rs::catalog::ChartType;
use gchart_rs::catalog::corechart::LINE_CHART;
use gchart_rs::core::OptionObject;
use gchart_rs::data::{Cell, Column, DataTable};
use gchart_rs::render::{JavascriptOptionOutput, OptionOutput};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn line_options() -> OptionObject {
    let mut options = OptionObject::new(&LINE_CHART);
    options
        .set("title", "Company Performance")
        .and_then(|options| options.set("curveType", "function"))
        .and_then(|options| options.set_path("legend.position", "bottom"))
        .and_then(|options| options.set_path("hAxis.title", "Year"))
        .and_then(|options| options.set_path("vAxis.viewWindow.min", 0))
        .expect("valid options");
    for label in 0..8 {
        options
            .set_path(&format!("series.{label}.lineWidth"), label + 1)
            .expect("series entry");
    }
    options
}

fn line_table(rows: usize) -> DataTable {
    let rows = (0..rows)
        .map(|i| {
            let x = i as f64;
            vec![Cell::from(x), Cell::from(x.sin() * 100.0)]
        })
        .collect();
    DataTable::new(vec![Column::new("x"), Column::new("sin")], rows).expect("table")
}

fn bench_render_nested_options(c: &mut Criterion) {
    let options = line_options();
    let output = JavascriptOptionOutput::new();

    c.bench_function("render_nested_options", |b| {
        b.iter(|| {
            let _ = output
                .render(black_box(&options))
                .expect("render should succeed");
        })
    });
}

fn bench_full_batch_16_charts(c: &mut Criterion) {
    let charts: Vec<Chart> = (0..16)
        .map(|i| {
            Chart::new(format!("chart{i}"), ChartType::LineChart, line_table(500))
                .and_then(|chart| chart.with_options(line_options()))
                .expect("chart")
                .with_element_id(format!("chart_div_{i}"))
        })
        .collect();
    let output: JavascriptChartOutput = JavascriptChartOutput::default();

    c.bench_function("full_batch_16_charts", |b| {
        b.iter(|| {
            let _ = output
                .full_charts(black_box(&Batch::new(&charts)))
                .expect("batch should render");
        })
    });
}

criterion_group!(
    benches,
    bench_render_nested_options,
    bench_full_batch_16_charts
);
criterion_main!(benches);
