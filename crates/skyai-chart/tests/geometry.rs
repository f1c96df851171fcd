// File: crates/skyai-chart/tests/geometry.rs
// Purpose: Area/line/grid/label primitives and hit-testing on the default 300x180 surface.

use skyai_chart::geometry::HIT_RADIUS;
use skyai_chart::{environmental_snapshot, Dimensions, Geometry, Sample, Scale, Series};

fn build(dims: Dimensions) -> Geometry {
    let series = Series::new("temp", environmental_snapshot()).unwrap();
    let scale = Scale::from_series(&series, &dims);
    Geometry::build(&series, &scale, &dims)
}

#[test]
fn points_are_evenly_spaced() {
    let geo = build(Dimensions::default());
    let xs: Vec<f64> = geo.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![40.0, 95.0, 150.0, 205.0, 260.0]);
    // 26.3 is the max (top edge), 20.1 the min (bottom edge)
    assert!((geo.points[2].y - 40.0).abs() < 1e-9);
    assert!((geo.points[1].y - 140.0).abs() < 1e-9);
    assert_eq!(geo.points[3].label, "18:00");
    assert_eq!(geo.points[3].value, 24.8);
}

#[test]
fn area_closes_along_baseline() {
    let geo = build(Dimensions::default());
    assert_eq!(geo.area.len(), geo.points.len() + 2);
    assert_eq!(geo.area.first(), Some(&(40.0, 140.0)));
    assert_eq!(geo.area.last(), Some(&(260.0, 140.0)));
    assert_eq!(&geo.area[1..geo.area.len() - 1], geo.line.as_slice());
}

#[test]
fn grid_lines() {
    let geo = build(Dimensions::default());
    let ys: Vec<f64> = geo.h_grid.iter().map(|s| s.y1).collect();
    assert_eq!(ys, vec![40.0, 65.0, 90.0, 115.0, 140.0]);
    for s in &geo.h_grid {
        assert_eq!((s.x1, s.x2), (40.0, 260.0));
        assert_eq!(s.y1, s.y2);
    }

    assert_eq!(geo.v_grid.len(), geo.points.len());
    for (s, p) in geo.v_grid.iter().zip(&geo.points) {
        assert_eq!((s.x1, s.x2), (p.x, p.x));
        assert_eq!((s.y1, s.y2), (40.0, 140.0));
    }
}

#[test]
fn axis_labels_sit_above_bottom_edge() {
    let geo = build(Dimensions::default());
    assert_eq!(geo.labels.len(), 5);
    assert!(geo.labels.iter().all(|l| l.y == 170.0));
    let texts: Vec<&str> = geo.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["00:00", "06:00", "12:00", "18:00", "24:00"]);

    let tall = build(Dimensions::new(300.0, 260.0));
    assert!(tall.labels.iter().all(|l| l.y == 250.0));
}

#[test]
fn hit_test_picks_point_within_radius() {
    let geo = build(Dimensions::default());
    let p = &geo.points[3];
    assert_eq!(geo.point_at(p.x, p.y, HIT_RADIUS), Some(3));
    assert_eq!(geo.point_at(p.x + 5.0, p.y - 5.0, HIT_RADIUS), Some(3));
    assert_eq!(geo.point_at(p.x + 8.0, p.y, HIT_RADIUS), Some(3));
    assert_eq!(geo.point_at(p.x + 9.0, p.y, HIT_RADIUS), None);
    assert_eq!(geo.point_at(0.0, 0.0, HIT_RADIUS), None);
}

#[test]
fn overlapping_targets_resolve_to_nearest() {
    // flat series on a 30px plot: points 7.5px apart, hit circles overlap
    let data = (0..5).map(|i| Sample::new(format!("{i}")).with("wind", 2.0)).collect();
    let series = Series::new("wind", data).unwrap();
    let dims = Dimensions::new(110.0, 180.0);
    let geo = Geometry::build(&series, &Scale::from_series(&series, &dims), &dims);
    let (a, b) = (&geo.points[0], &geo.points[1]);
    assert_eq!(b.x - a.x, 7.5);
    assert_eq!(geo.point_at(a.x + 6.0, a.y, HIT_RADIUS), Some(1));
    assert_eq!(geo.point_at(a.x + 1.0, a.y, HIT_RADIUS), Some(0));
}
