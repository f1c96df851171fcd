// File: crates/skyai-render-skia/src/text.rs
// Summary: Card text shaping (titles, readouts, labels) on Skia textlayout with anchor support.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Horizontal anchor, same meaning as SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One run of text to draw at a baseline position.
#[derive(Clone, Copy, Debug)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub anchor: Anchor,
}

impl<'a> TextRun<'a> {
    pub fn new(text: &'a str, size: f32, color: skia::Color) -> Self {
        Self { text, size, color, bold: false, anchor: Anchor::Start }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(run: &TextRun<'_>) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(run.size.max(1.0));
        ts.set_color(run.color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if run.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    fn layout(&self, run: &TextRun<'_>) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(run));
        builder.add_text(run.text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `run` with its baseline at `y`; `x` is interpreted per the run's anchor.
    /// Returns the drawn width.
    pub fn draw(&self, canvas: &skia::Canvas, run: &TextRun<'_>, x: f32, y: f32) -> f32 {
        let p = self.layout(run);
        let width = p.longest_line();
        let left = match run.anchor {
            Anchor::Start => x,
            Anchor::Middle => x - width / 2.0,
            Anchor::End => x - width,
        };
        // paragraphs paint from their top-left corner
        let top = y - p.alphabetic_baseline();
        p.paint(canvas, (left, top));
        width
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
