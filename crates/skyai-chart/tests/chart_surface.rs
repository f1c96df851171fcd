// File: crates/skyai-chart/tests/chart_surface.rs
// Purpose: Derived ChartView: readout, summary footer, marker emphasis, value label and tooltip.

use skyai_chart::chart::{ACTIVE_MARKER_RADIUS, MARKER_RADIUS};
use skyai_chart::metrics;
use skyai_chart::{
    environmental_snapshot, Chart, ChartError, ChartProps, Dimensions, Emphasis, Sample, Series, Summary,
};

fn chart_for(key: &str) -> Chart {
    let preset = metrics::find(key).unwrap();
    Chart::new(ChartProps::from_preset(preset), environmental_snapshot()).unwrap()
}

#[test]
fn idle_view_shows_latest_sample() {
    let view = chart_for("temp").view();
    assert_eq!(view.title, "Temperature Trend");
    assert_eq!(view.readout.text, "22°C");
    assert_eq!(view.readout.caption, "Current");
    assert_eq!(view.readout.active, None);
    assert!(view.value_label.is_none());
    assert!(view.tooltip.is_none());
    assert!(view.markers.iter().all(|m| m.radius == MARKER_RADIUS && !m.glow() && !m.ring()));
    assert!((0..5).all(|i| !view.label_highlighted(i)));
}

#[test]
fn summary_footer() {
    let chart = chart_for("temp");
    let s = chart.summary();
    assert_eq!((s.min, s.max), (20.1, 26.3));
    assert_eq!(s.mean_rounded(), 23.1);
    assert_eq!(s.footer("°C"), ["Min: 20.1°C", "Max: 26.3°C", "Avg: 23.1°C"]);

    let light = chart_for("light").summary();
    assert_eq!(light.footer(" lux"), ["Min: 0 lux", "Max: 850 lux", "Avg: 264.0 lux"]);
}

#[test]
fn footer_average_agrees_with_rounded_mean() {
    for (values, avg) in [(vec![1.0, 1.5], "Avg: 1.3"), (vec![0.25, 0.25], "Avg: 0.3")] {
        let data = values.iter().enumerate().map(|(i, v)| Sample::new(i.to_string()).with("ph", *v)).collect();
        let summary = Summary::of(&Series::new("ph", data).unwrap());
        assert_eq!(summary.footer("")[2], avg, "{values:?}");
        assert_eq!(summary.footer("")[2], format!("Avg: {:.1}", summary.mean_rounded()));
    }
}

#[test]
fn hovered_point_gets_label_and_tooltip() {
    let mut chart = chart_for("humidity");
    chart.hover(2).unwrap();
    let view = chart.view();
    let p = &view.geometry.points[2];

    assert_eq!(view.readout.text, "58%");
    assert_eq!(view.readout.caption, "at 12:00");

    let m = view.markers[2];
    assert_eq!(m.emphasis, Emphasis::Hovered);
    assert_eq!((m.radius, m.stroke_width), (ACTIVE_MARKER_RADIUS, 2.0));
    assert!(m.glow());
    assert!(!m.ring());
    assert!(view.label_highlighted(2));
    assert!(!view.label_highlighted(1));

    let label = view.value_label.as_ref().unwrap();
    assert_eq!((label.x, label.y, label.text.as_str()), (p.x, p.y - 10.0, "58%"));

    let tip = view.tooltip.as_ref().unwrap();
    assert_eq!((tip.x, tip.y), (p.x - 50.0, p.y + 60.0));
    assert_eq!(tip.value_text, "58%");
    assert_eq!(tip.label, "12:00");
}

#[test]
fn selected_point_has_ring_but_no_tooltip() {
    let mut chart = chart_for("co2");
    chart.click(1).unwrap();
    let view = chart.view();

    assert_eq!(view.readout.text, "380ppm");
    assert_eq!(view.readout.caption, "at 06:00");
    assert!(view.tooltip.is_none());
    assert!(view.value_label.is_some());

    let m = view.markers[1];
    assert_eq!(m.emphasis, Emphasis::Selected);
    assert_eq!(m.radius, ACTIVE_MARKER_RADIUS);
    assert!(m.ring());
}

#[test]
fn hovering_the_selected_point_hides_ring() {
    let mut chart = chart_for("temp");
    chart.click(3).unwrap();
    chart.hover(3).unwrap();
    let view = chart.view();
    let m = view.markers[3];
    assert_eq!(m.emphasis, Emphasis::HoveredAndSelected);
    assert!(m.glow());
    assert!(!m.ring());
    assert!(view.tooltip.is_some());
}

#[test]
fn hover_elsewhere_keeps_selection_emphasized() {
    let mut chart = chart_for("temp");
    chart.click(0).unwrap();
    chart.hover(4).unwrap();
    let view = chart.view();

    assert_eq!(view.readout.index, 4);
    assert_eq!(view.markers[0].emphasis, Emphasis::Selected);
    assert!(view.markers[0].ring());
    assert_eq!(view.markers[4].emphasis, Emphasis::Hovered);
    assert_eq!(view.tooltip.as_ref().unwrap().label, "24:00");
    assert_eq!(view.markers.iter().filter(|m| m.radius == MARKER_RADIUS).count(), 3);
}

#[test]
fn invalid_dimensions_are_rejected() {
    let props = ChartProps::from_preset(metrics::find("temp").unwrap())
        .with_dimensions(Dimensions::new(60.0, 180.0));
    assert!(matches!(
        Chart::new(props, environmental_snapshot()),
        Err(ChartError::InvalidDimensions { .. })
    ));

    let mut chart = chart_for("temp");
    assert!(chart.set_dimensions(Dimensions::new(300.0, 0.0)).is_err());
    assert_eq!(chart.props().dimensions, Dimensions::default());
    chart.set_dimensions(Dimensions::new(600.0, 240.0)).unwrap();
    assert_eq!(chart.view().geometry.labels[0].y, 230.0);
}

#[test]
fn unknown_metric_reports_missing_field() {
    let props = ChartProps::new("pH", "nitrogen", skyai_chart::Color::WHITE, "");
    assert_eq!(
        Chart::new(props, environmental_snapshot()).err(),
        Some(ChartError::MissingMetric { index: 0, metric: "nitrogen".into() })
    );
}
