// File: crates/skyai-chart/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Renders deterministic charts (literal table, fixed interaction) to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::path::PathBuf;

use skyai_chart::{environmental_snapshot, metrics, svg, Chart, ChartProps, Theme};

fn update_snapshots() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn check(name: &str, got: &str) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if update_snapshots() {
        std::fs::create_dir_all(path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&path, got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), got.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(&path).expect("read snapshot");
        assert_eq!(got, want, "svg differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn chart(key: &str) -> Chart {
    Chart::new(ChartProps::from_preset(metrics::find(key).unwrap()), environmental_snapshot()).unwrap()
}

#[test]
fn golden_idle_light() {
    let view = chart("temp").view();
    let text = svg::to_svg_string(&view, &Theme::light());

    assert!(text.starts_with("<svg "));
    assert!(text.contains(r#"data-theme="light""#));
    assert!(text.contains(">Temperature Trend</text>"));
    assert!(text.contains(">22°C<tspan"));
    assert!(text.contains(">Current</tspan>"));
    assert!(text.contains(">Min: 20.1°C</text>"));
    assert!(text.contains(">Avg: 23.1°C</text>"));
    assert!(!text.contains(r#"class="tooltip""#));
    assert_eq!(text.matches(r#"class="hit""#).count(), 5);
    check("temp_idle_light.svg", &text);
}

#[test]
fn golden_hover_and_selection_dark() {
    let mut c = chart("humidity");
    c.click(1).unwrap();
    c.hover(3).unwrap();
    let view = c.view();
    let text = svg::to_svg_string(&view, &Theme::dark());

    assert!(text.contains(r#"data-theme="dark""#));
    assert!(text.contains(r#"class="tooltip""#));
    assert!(text.contains(">at 18:00</tspan>"));
    assert_eq!(text.matches(r#"filter="url(#glow)""#).count(), 2);
    // ring on the selected-but-not-hovered point only
    assert_eq!(text.matches(r##"fill="none" stroke="#3b82f6" stroke-width="1" opacity="0.5""##).count(), 1);
    check("humidity_active_dark.svg", &text);
}

#[test]
fn placeholder_card_for_missing_data() {
    let props = ChartProps::from_preset(metrics::find("co2").unwrap());
    let text = svg::placeholder(&props, &Theme::light(), "No data");
    assert!(text.contains(">CO₂ Level Trend</text>"));
    assert!(text.contains(r#"class="placeholder""#));
    assert!(text.contains(">No data</text>"));
    assert!(!text.contains("<polyline"));
    check("co2_placeholder.svg", &text);
}

#[test]
fn render_to_svg_writes_file() {
    let out = PathBuf::from("target/test_out/svg/wind.svg");
    svg::render_to_svg(&chart("wind").view(), &Theme::light(), &out).expect("render svg");
    let text = std::fs::read_to_string(&out).expect("read svg");
    assert!(text.trim_end().ends_with("</svg>"));
}
