// File: crates/skyai-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: paints a ChartView card (same layout as the SVG output) to PNG or RGBA.

use std::path::Path;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use skyai_chart::chart::{Marker, RING_OPACITY, RING_RADIUS};
use skyai_chart::geometry::Segment;
use skyai_chart::svg::{
    card_size, CARD_PADDING, FOOTER_GAP, PLOT_TOP, READOUT_BASELINE, TITLE_BASELINE, TOOLTIP_SIZE,
};
use skyai_chart::{ChartView, Color, Theme};

pub mod text;

use text::{Anchor, TextRun, TextShaper};

/// Convert a backend-neutral color to Skia.
pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}

pub struct RenderOptions {
    /// Device pixel ratio; the card is laid out in CSS pixels and scaled.
    pub scale: f32,
    /// Text is platform-font dependent; disable for pixel-exact comparisons.
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_text: true }
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new() }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Device size in pixels of the card for `view`.
    pub fn surface_size(&self, view: &ChartView) -> (i32, i32) {
        let (w, h) = card_size(view.dimensions.width, view.dimensions.height);
        let s = self.opts.scale.max(0.1) as f64;
        ((w * s).ceil() as i32, (h * s).ceil() as i32)
    }

    fn paint_surface(&self, view: &ChartView, theme: &Theme) -> Result<skia::Surface> {
        let (w, h) = self.surface_size(view);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create raster surface {w}x{h}"))?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        canvas.save();
        canvas.scale((self.opts.scale.max(0.1), self.opts.scale.max(0.1)));
        self.draw_card(canvas, view, theme);
        canvas.restore();
        debug!(width = w, height = h, title = %view.title, "chart card rasterized");
        Ok(surface)
    }

    /// Render the card to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, view: &ChartView, theme: &Theme) -> Result<Vec<u8>> {
        let mut surface = self.paint_surface(view, theme)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the card to a PNG file, creating parent directories.
    pub fn render_to_png(&self, view: &ChartView, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(view, theme)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, view: &ChartView, theme: &Theme) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.paint_surface(view, theme)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("read_pixels failed"));
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn text(&self, canvas: &skia::Canvas, run: TextRun<'_>, x: f64, y: f64) -> f32 {
        if !self.opts.draw_text {
            return 0.0;
        }
        self.shaper.draw(canvas, &run, x as f32, y as f32)
    }

    fn draw_card(&self, canvas: &skia::Canvas, view: &ChartView, theme: &Theme) {
        let (w, h) = card_size(view.dimensions.width, view.dimensions.height);
        let card = skia::Rect::from_xywh(0.5, 0.5, (w - 1.0) as f32, (h - 1.0) as f32);
        canvas.draw_round_rect(card, 8.0, 8.0, &fill(theme.background_card));
        canvas.draw_round_rect(card, 8.0, 8.0, &stroke(theme.border, 1.0));

        self.text(canvas, TextRun::new(&view.title, 14.0, to_skia(theme.text_primary)).bold(), CARD_PADDING, TITLE_BASELINE);

        let readout = TextRun::new(&view.readout.text, 24.0, to_skia(theme.text_primary)).bold();
        let used = self.text(canvas, readout, CARD_PADDING, READOUT_BASELINE);
        self.text(
            canvas,
            TextRun::new(&view.readout.caption, 12.0, to_skia(view.color)),
            CARD_PADDING + used as f64 + 8.0,
            READOUT_BASELINE,
        );

        canvas.save();
        canvas.translate((CARD_PADDING as f32, PLOT_TOP as f32));
        self.draw_plot(canvas, view, theme);
        canvas.restore();

        let footer_y = PLOT_TOP + view.dimensions.height + FOOTER_GAP;
        let [min, max, avg] = view.summary.footer(&view.unit);
        let secondary = to_skia(theme.text_secondary);
        for (text, x, anchor) in [
            (min, CARD_PADDING, Anchor::Start),
            (max, w / 2.0, Anchor::Middle),
            (avg, w - CARD_PADDING, Anchor::End),
        ] {
            self.text(canvas, TextRun::new(&text, 10.0, secondary).anchor(anchor), x, footer_y);
        }
    }

    fn draw_plot(&self, canvas: &skia::Canvas, view: &ChartView, theme: &Theme) {
        let g = &view.geometry;
        draw_grid(canvas, &g.h_grid, theme.border.with_alpha(0.3), 1.0);
        draw_grid(canvas, &g.v_grid, theme.border.with_alpha(0.2), 0.5);

        if let Some(((x0, y0), rest)) = g.area.split_first() {
            let mut area = skia::Path::new();
            area.move_to((*x0 as f32, *y0 as f32));
            for (x, y) in rest {
                area.line_to((*x as f32, *y as f32));
            }
            area.close();
            canvas.draw_path(&area, &fill(view.color.with_alpha(0.1)));
        }

        if let Some(((x0, y0), rest)) = g.line.split_first() {
            let mut line = skia::Path::new();
            line.move_to((*x0 as f32, *y0 as f32));
            for (x, y) in rest {
                line.line_to((*x as f32, *y as f32));
            }
            let mut paint = stroke(view.color, 2.0);
            paint.set_stroke_cap(skia::paint::Cap::Round);
            paint.set_stroke_join(skia::paint::Join::Round);
            canvas.draw_path(&line, &paint);
        }

        for m in &view.markers {
            draw_marker(canvas, m, view.color, theme);
        }

        for l in &g.labels {
            let c = if view.label_highlighted(l.index) { theme.highlight } else { theme.axis_label };
            self.text(canvas, TextRun::new(&l.text, 10.0, to_skia(c)).anchor(Anchor::Middle), l.x, l.y);
        }

        if let Some(lbl) = &view.value_label {
            let run = TextRun::new(&lbl.text, 12.0, to_skia(view.color)).bold().anchor(Anchor::Middle);
            self.text(canvas, run, lbl.x, lbl.y);
        }

        if let Some(tip) = &view.tooltip {
            let (tw, th) = TOOLTIP_SIZE;
            let rect = skia::Rect::from_xywh(tip.x as f32, tip.y as f32, tw as f32, th as f32);
            canvas.draw_round_rect(rect, 4.0, 4.0, &fill(theme.background_nested));
            canvas.draw_round_rect(rect, 4.0, 4.0, &stroke(view.color, 1.0));
            self.text(canvas, TextRun::new(&tip.value_text, 12.0, to_skia(view.color)).bold(), tip.x + 8.0, tip.y + 16.0);
            self.text(canvas, TextRun::new(&tip.label, 12.0, to_skia(theme.text_secondary)), tip.x + 8.0, tip.y + 32.0);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(c));
    paint
}

fn stroke(c: Color, width: f32) -> skia::Paint {
    let mut paint = fill(c);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, lines: &[Segment], color: Color, width: f32) {
    let paint = stroke(color, width);
    for l in lines {
        canvas.draw_line((l.x1 as f32, l.y1 as f32), (l.x2 as f32, l.y2 as f32), &paint);
    }
}

fn draw_marker(canvas: &skia::Canvas, m: &Marker, series: Color, theme: &Theme) {
    let center = (m.x as f32, m.y as f32);
    if m.glow() {
        let mut glow = fill(theme.highlight.with_alpha(0.6));
        glow.set_mask_filter(skia::MaskFilter::blur(skia::BlurStyle::Normal, 2.0, None));
        canvas.draw_circle(center, m.radius as f32 + 2.0, &glow);
    }

    let body = if m.emphasis.is_emphasized() { theme.highlight } else { series };
    canvas.draw_circle(center, m.radius as f32, &fill(body));
    if m.stroke_width > 0.0 {
        canvas.draw_circle(center, m.radius as f32, &stroke(series, m.stroke_width as f32));
    }

    if m.ring() {
        canvas.draw_circle(center, RING_RADIUS as f32, &stroke(series.with_alpha(RING_OPACITY), 1.0));
    }
}
