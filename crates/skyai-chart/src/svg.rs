// File: crates/skyai-chart/src/svg.rs
// Summary: SVG output for a ChartView: title, readout, interactive plot, min/max/avg footer.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};

use crate::chart::{ChartProps, ChartView, Marker, RING_OPACITY, RING_RADIUS};
use crate::color::Color;
use crate::format::coord;
use crate::geometry::{Segment, HIT_RADIUS};
use crate::theme::Theme;

/// Inner margin of the card around every block.
pub const CARD_PADDING: f64 = 16.0;
pub const TITLE_BASELINE: f64 = 30.0;
pub const READOUT_BASELINE: f64 = 62.0;
/// Top of the plot surface inside the card.
pub const PLOT_TOP: f64 = 76.0;
/// Footer baseline sits this far below the plot surface.
pub const FOOTER_GAP: f64 = 18.0;
pub const CARD_BOTTOM: f64 = 30.0;
pub const TOOLTIP_SIZE: (f64, f64) = (100.0, 40.0);

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fill/stroke attribute pair; transparent alpha goes to `*-opacity`.
fn paint(attr: &str, c: Color) -> String {
    if (c.a - 1.0).abs() < 0.001 {
        format!("{attr}=\"{}\"", c.to_hex())
    } else {
        format!("{attr}=\"{}\" {attr}-opacity=\"{}\"", c.to_hex(), coord(c.a))
    }
}

/// Full card size for a plot of the given dimensions.
pub fn card_size(width: f64, height: f64) -> (f64, f64) {
    (width + CARD_PADDING * 2.0, PLOT_TOP + height + CARD_BOTTOM)
}

/// Renderable SVG document; use `to_string()` or [`render_to_svg`].
pub struct SvgDocument<'a> {
    pub view: &'a ChartView,
    pub theme: &'a Theme,
}

impl<'a> SvgDocument<'a> {
    pub fn new(view: &'a ChartView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>, lines: &[Segment], width: f64, opacity: f64) -> fmt::Result {
        for l in lines {
            writeln!(
                f,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}" opacity="{}"/>"#,
                coord(l.x1), coord(l.y1), coord(l.x2), coord(l.y2),
                paint("stroke", self.theme.border), coord(width), coord(opacity)
            )?;
        }
        Ok(())
    }

    fn write_marker(&self, f: &mut fmt::Formatter<'_>, m: &Marker) -> fmt::Result {
        let v = self.view;
        let (x, y) = (coord(m.x), coord(m.y));
        writeln!(f, r#"    <g class="point" data-index="{}">"#, m.index)?;
        writeln!(
            f,
            r#"      <circle class="hit" cx="{x}" cy="{y}" r="{}" fill="transparent"/>"#,
            coord(HIT_RADIUS)
        )?;
        let fill = if m.emphasis.is_emphasized() { self.theme.highlight } else { v.color };
        let glow = if m.glow() { r#" filter="url(#glow)""# } else { "" };
        writeln!(
            f,
            r#"      <circle cx="{x}" cy="{y}" r="{}" {} {} stroke-width="{}"{glow}/>"#,
            coord(m.radius), paint("fill", fill), paint("stroke", v.color), coord(m.stroke_width)
        )?;
        if m.ring() {
            writeln!(
                f,
                r#"      <circle cx="{x}" cy="{y}" r="{}" fill="none" {} stroke-width="1" opacity="{}"/>"#,
                coord(RING_RADIUS), paint("stroke", v.color), coord(RING_OPACITY)
            )?;
        }
        writeln!(f, "    </g>")
    }

    fn write_plot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.view;
        let g = &v.geometry;
        writeln!(
            f,
            r#"  <g class="plot" transform="translate({}, {})">"#,
            coord(CARD_PADDING), coord(PLOT_TOP)
        )?;

        self.write_grid(f, &g.h_grid, 1.0, 0.3)?;
        self.write_grid(f, &g.v_grid, 0.5, 0.2)?;

        let mut area = String::new();
        for (i, (x, y)) in g.area.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(area, "{cmd} {},{}", coord(*x), coord(*y));
        }
        writeln!(f, r#"    <path d="{area} Z" {} opacity="0.1"/>"#, paint("fill", v.color))?;

        let pts = g.line.iter().map(|(x, y)| format!("{},{}", coord(*x), coord(*y))).collect::<Vec<_>>().join(" ");
        writeln!(
            f,
            r#"    <polyline points="{pts}" fill="none" {} stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
            paint("stroke", v.color)
        )?;

        for m in &v.markers {
            self.write_marker(f, m)?;
        }

        for l in &g.labels {
            let c = if v.label_highlighted(l.index) { self.theme.highlight } else { self.theme.axis_label };
            writeln!(
                f,
                r#"    <text x="{}" y="{}" text-anchor="middle" {} font-size="10">{}</text>"#,
                coord(l.x), coord(l.y), paint("fill", c), escape(&l.text)
            )?;
        }

        if let Some(lbl) = &v.value_label {
            writeln!(
                f,
                r#"    <text class="value" x="{}" y="{}" text-anchor="middle" {} font-size="12" font-weight="bold">{}</text>"#,
                coord(lbl.x), coord(lbl.y), paint("fill", v.color), escape(&lbl.text)
            )?;
        }

        if let Some(tip) = &v.tooltip {
            let (w, h) = TOOLTIP_SIZE;
            writeln!(f, r#"    <g class="tooltip" pointer-events="none">"#)?;
            writeln!(
                f,
                r#"      <rect x="{}" y="{}" width="{}" height="{}" rx="4" {} {}/>"#,
                coord(tip.x), coord(tip.y), coord(w), coord(h),
                paint("fill", self.theme.background_nested), paint("stroke", v.color)
            )?;
            writeln!(
                f,
                r#"      <text x="{}" y="{}" {} font-size="12" font-weight="bold">{}</text>"#,
                coord(tip.x + 8.0), coord(tip.y + 16.0), paint("fill", v.color), escape(&tip.value_text)
            )?;
            writeln!(
                f,
                r#"      <text x="{}" y="{}" {} font-size="12">{}</text>"#,
                coord(tip.x + 8.0), coord(tip.y + 32.0), paint("fill", self.theme.text_secondary), escape(&tip.label)
            )?;
            writeln!(f, "    </g>")?;
        }

        writeln!(f, "  </g>")
    }
}

fn write_card_open(f: &mut fmt::Formatter<'_>, theme: &Theme, title: &str, w: f64, h: f64) -> fmt::Result {
    writeln!(
        f,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-theme="{}">"#,
        theme.name(),
        w = coord(w),
        h = coord(h)
    )?;
    writeln!(
        f,
        r#"  <rect x="0.5" y="0.5" width="{}" height="{}" rx="8" {} {}/>"#,
        coord(w - 1.0), coord(h - 1.0), paint("fill", theme.background_card), paint("stroke", theme.border)
    )?;
    writeln!(
        f,
        r#"  <text x="{}" y="{}" {} font-size="14" font-weight="600">{}</text>"#,
        coord(CARD_PADDING), coord(TITLE_BASELINE), paint("fill", theme.text_primary), escape(title)
    )
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.view;
        let t = self.theme;
        let (w, h) = card_size(v.dimensions.width, v.dimensions.height);

        write_card_open(f, t, &v.title, w, h)?;
        writeln!(f, "  <defs>")?;
        writeln!(f, r##"    <filter id="glow"><feDropShadow dx="0" dy="0" stdDeviation="2" flood-color="#ffffff" flood-opacity="0.6"/></filter>"##)?;
        writeln!(f, "  </defs>")?;

        writeln!(
            f,
            r#"  <text class="readout" x="{}" y="{}" {} font-size="24" font-weight="bold">{}<tspan dx="8" {} font-size="12" font-weight="normal">{}</tspan></text>"#,
            coord(CARD_PADDING), coord(READOUT_BASELINE), paint("fill", t.text_primary),
            escape(&v.readout.text), paint("fill", v.color), escape(&v.readout.caption)
        )?;

        self.write_plot(f)?;

        let footer_y = PLOT_TOP + v.dimensions.height + FOOTER_GAP;
        let [min, max, avg] = v.summary.footer(&v.unit);
        let right = w - CARD_PADDING;
        for (text, x, anchor) in [(min, CARD_PADDING, "start"), (max, w / 2.0, "middle"), (avg, right, "end")] {
            writeln!(
                f,
                r#"  <text class="footer" x="{}" y="{}" text-anchor="{anchor}" {} font-size="10">{}</text>"#,
                coord(x), coord(footer_y), paint("fill", t.text_secondary), escape(&text)
            )?;
        }
        writeln!(f, "</svg>")
    }
}

/// SVG text for a chart view.
pub fn to_svg_string(view: &ChartView, theme: &Theme) -> String {
    SvgDocument::new(view, theme).to_string()
}

/// Card shown in place of a chart whose data could not be plotted.
pub fn placeholder(props: &ChartProps, theme: &Theme, message: &str) -> String {
    struct Placeholder<'a> {
        props: &'a ChartProps,
        theme: &'a Theme,
        message: &'a str,
    }
    impl fmt::Display for Placeholder<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let d = self.props.dimensions;
            let (w, h) = card_size(d.width, d.height);
            write_card_open(f, self.theme, &self.props.title, w, h)?;
            writeln!(
                f,
                r#"  <text class="placeholder" x="{}" y="{}" text-anchor="middle" {} font-size="12">{}</text>"#,
                coord(w / 2.0), coord(PLOT_TOP + d.height / 2.0),
                paint("fill", self.theme.text_secondary), escape(self.message)
            )?;
            writeln!(f, "</svg>")
        }
    }
    Placeholder { props, theme, message }.to_string()
}

/// Write the SVG for `view` to `path`, creating parent directories.
pub fn render_to_svg(view: &ChartView, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg_string(view, theme))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
