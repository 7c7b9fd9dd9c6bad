use crate::error::{LayoutError, MeasureError};
use crate::measure::{FontId, TextMeasure};
use crate::units::Pt;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed TrueType / OpenType font, used for its horizontal metrics.
///
/// Where the font bytes come from (a file picker, an embedded asset, a
/// document container) is up to the caller.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The glyph used to draw `ch`: its own glyph, else U+FFFD, else '?'
    fn drawn_glyph(&self, ch: char) -> Option<u16> {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .or_else(|| self.glyph_id('?'))
    }

    /// Horizontal advance of a single character at the given size, using the same
    /// replacement glyph a renderer would fall back to. [None] if the font has
    /// neither the character nor a replacement
    pub fn advance(&self, ch: char, size: Pt) -> Option<Pt> {
        let face = self.face.as_face_ref();
        let scaling: Pt = size / face.units_per_em() as f32;
        let gid = self.drawn_glyph(ch)?;
        Some(scaling * face.glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32)
    }
}

/// The set of fonts available to a render, indexed by [FontId]. Measures text
/// with each font's real glyph advances.
#[derive(Default)]
pub struct FontBook {
    fonts: Vec<Font>,
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Add a font, returning the id to lay text out with
    pub fn add_font(&mut self, font: Font) -> FontId {
        self.fonts.push(font);
        FontId(self.fonts.len() - 1)
    }

    /// Parse and add a font from raw bytes
    pub fn add_font_bytes(&mut self, bytes: Vec<u8>) -> Result<FontId, LayoutError> {
        let font = Font::load(bytes)?;
        Ok(self.add_font(font))
    }

    pub fn get(&self, id: FontId) -> Option<&Font> {
        self.fonts.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl TextMeasure for FontBook {
    fn text_width(&self, text: &str, font: FontId, size: Pt) -> Result<Pt, MeasureError> {
        let face = self.get(font).ok_or(MeasureError::UnknownFont(font))?;
        text.chars()
            .map(|ch| {
                face.advance(ch, size)
                    .ok_or(MeasureError::MissingGlyph { font, ch })
            })
            .sum()
    }
}
