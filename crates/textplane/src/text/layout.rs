//! Word-wrapped layout and word bounding boxes
//!
//! The layout pixel space has its origin at the bottom-left of the plane
//! texture with y growing upward, matching the UV mapping applied to ray
//! hits: picking math and rendering math must agree on this space exactly.

/// Axis-aligned bounding box of one laid-out word, in plane pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordBox {
    /// Left edge in pixels
    pub x: f32,
    /// Bottom edge in pixels
    pub y: f32,
    /// Box width in pixels
    pub width: f32,
    /// Box height in pixels
    pub height: f32,
}

impl WordBox {
    /// Test whether a pixel-space point falls inside this box
    ///
    /// Containment is a closed interval on all four edges: a point exactly
    /// on `x + width` (or any other edge) counts as contained.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.x <= px && px <= self.x + self.width && self.y <= py && py <= self.y + self.height
    }
}

/// The laid-out words of one plane: ordered words, their boxes, and the
/// pixel dimensions of the texture they occupy
///
/// Immutable after construction. `boxes` and `words` are index-aligned.
#[derive(Debug, Clone)]
pub struct TextLayout {
    words: Vec<String>,
    boxes: Vec<WordBox>,
    width: u32,
    height: u32,
}

impl TextLayout {
    /// Build a layout from pre-measured words and boxes
    ///
    /// External measurement collaborators feed their results in through
    /// this constructor.
    ///
    /// # Panics
    /// Panics if `words` and `boxes` differ in length; the two sequences
    /// must stay index-aligned.
    pub fn new(words: Vec<String>, boxes: Vec<WordBox>, width: u32, height: u32) -> Self {
        assert_eq!(
            words.len(),
            boxes.len(),
            "every word needs exactly one bounding box"
        );
        Self {
            words,
            boxes,
            width,
            height,
        }
    }

    /// Ordered words of this layout
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word bounding boxes, index-aligned with [`TextLayout::words`]
    pub fn boxes(&self) -> &[WordBox] {
        &self.boxes
    }

    /// Texture width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of laid-out words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the layout holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find the word whose box contains the given pixel-space point
    ///
    /// Boxes are searched in word order; when boxes overlap, the first
    /// containing box wins.
    pub fn word_at(&self, px: f32, py: f32) -> Option<usize> {
        self.boxes.iter().position(|b| b.contains(px, py))
    }
}

/// Word layout engine
///
/// Given a maximum pixel width and text, produces the ordered word boxes
/// of the wrapped text. Implementations must be deterministic for a fixed
/// input: the same text and width always yield the same layout, or picking
/// and rendering drift apart.
pub trait LayoutEngine {
    /// Lay out `text` wrapped to `max_width` pixels
    fn layout(&self, text: &str, max_width: u32) -> TextLayout;
}

/// Fixed-metrics layout engine
///
/// Every glyph advances by the same number of pixels, so word widths are
/// pure character counts. This keeps the layout deterministic without any
/// font data; a font-backed collaborator can replace it through
/// [`LayoutEngine`] as long as it reports boxes in the same space.
#[derive(Debug, Clone)]
pub struct MonospaceLayout {
    /// Horizontal advance per glyph, in pixels
    pub glyph_advance: u32,
    /// Vertical extent of one text line, in pixels
    pub line_height: u32,
    /// Inner margin on all four sides, in pixels
    pub padding: u32,
}

impl Default for MonospaceLayout {
    fn default() -> Self {
        Self {
            glyph_advance: 8,
            line_height: 18,
            padding: 8,
        }
    }
}

impl LayoutEngine for MonospaceLayout {
    fn layout(&self, text: &str, max_width: u32) -> TextLayout {
        let advance = self.glyph_advance as f32;
        let line_height = self.line_height as f32;
        let padding = self.padding as f32;
        let usable_right = (max_width as f32 - padding).max(padding);

        let words: Vec<String> = text.split_whitespace().map(str::to_owned).collect();

        // First pass lays lines out top-down; y is flipped to the shared
        // bottom-origin space once the total height is known.
        let mut top_down: Vec<(f32, f32, f32)> = Vec::with_capacity(words.len());
        let mut cursor_x = padding;
        let mut line = 0u32;

        for word in &words {
            let width = word.chars().count() as f32 * advance;
            if cursor_x > padding && cursor_x + width > usable_right {
                line += 1;
                cursor_x = padding;
            }
            let top_y = padding + line as f32 * line_height;
            top_down.push((cursor_x, top_y, width));
            // One glyph advance of whitespace between words
            cursor_x += width + advance;
        }

        let line_count = if words.is_empty() { 0 } else { line + 1 };
        let height = 2 * self.padding + line_count * self.line_height;

        let boxes = top_down
            .into_iter()
            .map(|(x, top_y, width)| WordBox {
                x,
                y: height as f32 - top_y - line_height,
                width,
                height: line_height,
            })
            .collect();

        TextLayout::new(words, boxes, max_width, height)
    }
}
