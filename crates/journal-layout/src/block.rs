//! Page-local drawing primitives
//!
//! Emitters produce [`PageBlock`]s: plain geometry in millimeters with
//! the origin at the bottom-left of the text area. A separate
//! serializer turns blocks into markup, so layout math never touches
//! markup syntax and can be tested in isolation.

/// A point in page-local millimeter coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Named drawing colors; `Named` carries a serializer-defined color
/// (used by whimsy decorations)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    /// Darker border lines
    BorderGray,
    /// Writing guide lines
    GuideGray,
    /// Secondary text (dates, weekday labels)
    TextGray,
    /// Sunday highlight
    SundayRed,
    Named(&'static str),
}

impl Default for Color {
    fn default() -> Self {
        Color::Black
    }
}

/// Anchor point of a text label relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    NorthWest,
    North,
    NorthEast,
    West,
    #[default]
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
    /// Baseline-anchored at the east edge (continuation marks)
    BaseEast,
}

/// Horizontal alignment inside a fixed-width label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font size steps, smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Tiny,
    Script,
    Footnote,
    Small,
    #[default]
    Normal,
    Large,
    Huge,
}

/// Named glyphs whose rendering is a serializer concern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Small arrow prompting continuation onto the next line
    ContinuationArrow,
}

/// A styled fragment of label text
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    Styled {
        text: String,
        color: Color,
        icon: Option<&'static str>,
    },
    /// Cross-reference placeholder resolved by the external compiler
    PageRef(String),
    /// Table-of-contents row rendered only when its target resolves
    OptionalTocRow { title: String, target: String },
    Glyph(Glyph),
    Linebreak,
}

impl Span {
    pub fn text(s: impl Into<String>) -> Self {
        Span::Text(s.into())
    }
}

/// A positioned text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub pos: Point,
    pub anchor: Anchor,
    pub size: FontSize,
    pub bold: bool,
    pub italic: bool,
    pub mono: bool,
    pub color: Color,
    /// Fixed-width box; `halign` applies within it
    pub width_mm: Option<f32>,
    pub halign: HAlign,
    pub y_shift_mm: f32,
    pub spans: Vec<Span>,
}

impl Default for TextLabel {
    fn default() -> Self {
        Self {
            pos: Point::default(),
            anchor: Anchor::default(),
            size: FontSize::Normal,
            bold: false,
            italic: false,
            mono: false,
            color: Color::Black,
            width_mm: None,
            halign: HAlign::Left,
            y_shift_mm: 0.0,
            spans: Vec::new(),
        }
    }
}

impl TextLabel {
    /// Plain single-span label
    pub fn plain(pos: Point, anchor: Anchor, text: impl Into<String>) -> Self {
        Self {
            pos,
            anchor,
            spans: vec![Span::text(text)],
            ..Self::default()
        }
    }
}

/// A straight line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub dashed: bool,
}

/// An axis-aligned rectangle outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectOutline {
    pub origin: Point,
    pub width_mm: f32,
    pub height_mm: f32,
    pub color: Color,
}

/// A circle outline (writing-guide bullet marks)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius_mm: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(Line),
    Rect(RectOutline),
    Text(TextLabel),
    Circle(Circle),
}

/// Everything drawn on one page, in page-local coordinates.
///
/// Blocks are produced once, serialized once, and discarded; they have
/// no identity beyond their position in the output stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageBlock {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Cross-reference anchors defined on this page
    pub anchors: Vec<String>,
    pub primitives: Vec<Primitive>,
}

impl PageBlock {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
            anchors: Vec::new(),
            primitives: Vec::new(),
        }
    }

    pub fn anchor(&mut self, name: impl Into<String>) {
        self.anchors.push(name.into());
    }

    /// Solid line
    pub fn line(&mut self, from: Point, to: Point, color: Color) {
        self.primitives.push(Primitive::Line(Line {
            from,
            to,
            color,
            dashed: false,
        }));
    }

    /// Dashed writing-guide line
    pub fn guide(&mut self, from: Point, to: Point) {
        self.primitives.push(Primitive::Line(Line {
            from,
            to,
            color: Color::GuideGray,
            dashed: true,
        }));
    }

    pub fn rect(&mut self, origin: Point, width_mm: f32, height_mm: f32, color: Color) {
        self.primitives.push(Primitive::Rect(RectOutline {
            origin,
            width_mm,
            height_mm,
            color,
        }));
    }

    pub fn circle(&mut self, center: Point, radius_mm: f32, color: Color) {
        self.primitives.push(Primitive::Circle(Circle {
            center,
            radius_mm,
            color,
        }));
    }

    pub fn text(&mut self, label: TextLabel) {
        self.primitives.push(Primitive::Text(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_collects_primitives() {
        let mut block = PageBlock::new(100.0, 200.0);
        block.line(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Color::BorderGray);
        block.guide(Point::new(0.0, 10.0), Point::new(100.0, 10.0));
        block.circle(Point::new(5.0, 5.0), 1.5, Color::GuideGray);
        block.text(TextLabel::plain(
            Point::new(50.0, 190.0),
            Anchor::North,
            "hello",
        ));
        block.anchor("sec:test");

        assert_eq!(block.primitives.len(), 4);
        assert_eq!(block.anchors, vec!["sec:test".to_string()]);
        match &block.primitives[1] {
            Primitive::Line(line) => assert!(line.dashed),
            other => panic!("expected guide line, got {other:?}"),
        }
    }
}
