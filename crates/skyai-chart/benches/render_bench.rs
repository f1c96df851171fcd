// File: crates/skyai-chart/benches/render_bench.rs
// Summary: Criterion benches for view derivation and SVG output over growing histories.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skyai_chart::{environmental_history, metrics, svg, Chart, ChartProps, SeededRng, Theme};

fn build_chart(hours: usize) -> Chart {
    let end = NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(23, 0, 0))
        .expect("valid timestamp");
    let rows = environmental_history(&mut SeededRng::new(42), end, hours);
    let props = ChartProps::from_preset(metrics::find("temp").expect("temp preset"));
    let mut chart = Chart::new(props, rows).expect("history is plottable");
    chart.click(hours / 2).expect("index in range");
    chart.hover(hours / 3).expect("index in range");
    chart
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::dark();
    let mut group = c.benchmark_group("chart");
    for &n in &[24usize, 168, 2_000] {
        let chart = build_chart(n);
        group.bench_function(format!("view_{n}"), |b| {
            b.iter(|| black_box(chart.view()));
        });
        group.bench_function(format!("svg_{n}"), |b| {
            let view = chart.view();
            b.iter(|| black_box(svg::to_svg_string(&view, &theme)));
        });
        group.bench_function(format!("pointer_move_{n}"), |b| {
            let mut chart = chart.clone();
            b.iter(|| black_box(chart.pointer_move(black_box(150.0), black_box(90.0))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
