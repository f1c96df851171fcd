// File: crates/skyai-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape and a few card pixels.

use skyai_chart::{environmental_snapshot, metrics, Chart, ChartProps, Theme};
use skyai_render_skia::{RenderOptions, SkiaRenderer};

fn rgba_at(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let chart =
        Chart::new(ChartProps::from_preset(metrics::find("humidity").unwrap()), environmental_snapshot()).unwrap();
    let renderer = SkiaRenderer::new(RenderOptions { draw_text: false, ..RenderOptions::default() });

    let (px, w, h, stride) = renderer.render_to_rgba8(&chart.view(), &Theme::dark()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // rounded card leaves the outer corner transparent
    assert_eq!(rgba_at(&px, stride, 0, 0)[3], 0);

    // card body is the dark card background
    assert_eq!(rgba_at(&px, stride, 8, 40), [0x2a, 0x2a, 0x2a, 255]);
}

#[test]
fn light_card_is_white() {
    let chart =
        Chart::new(ChartProps::from_preset(metrics::find("co2").unwrap()), environmental_snapshot()).unwrap();
    let renderer = SkiaRenderer::new(RenderOptions { draw_text: false, ..RenderOptions::default() });
    let (px, _, _, stride) = renderer.render_to_rgba8(&chart.view(), &Theme::light()).expect("rgba render");
    assert_eq!(rgba_at(&px, stride, 8, 40), [255, 255, 255, 255]);
}
