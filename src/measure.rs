use crate::error::MeasureError;
use crate::script::is_ideographic;
use crate::units::Pt;

/// Identifies a font known to a [TextMeasure] implementation. Ids are handed
/// out by whoever registers fonts (for example [FontBook](crate::FontBook));
/// the layout engine only passes them through to measurement and drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct FontId(pub usize);

/// The font and size a run of text is set in
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    pub size: Pt,
}

impl TextStyle {
    pub fn new(font: FontId, size: Pt) -> TextStyle {
        TextStyle { font, size }
    }
}

/// Measures the rendered width of text.
///
/// Implementations must be deterministic and agree with whatever later draws
/// the same font at the same size, or wrapped lines will visibly overflow.
/// Any fallback for characters the font cannot render belongs here, not in
/// the line wrapper.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: FontId, size: Pt) -> Result<Pt, MeasureError>;

    /// Convenience wrapper taking a [TextStyle]
    fn width_in(&self, text: &str, style: TextStyle) -> Result<Pt, MeasureError> {
        self.text_width(text, style.font, style.size)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, font: FontId, size: Pt) -> Result<Pt, MeasureError> {
        (**self).text_width(text, font, size)
    }
}

/// A fixed-advance substitute for real font metrics: ideographic characters
/// are one em wide and everything else half an em, like a typical CJK
/// monospace face. Accepts any [FontId].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMeasure {
    /// Advance of an ordinary character, in ems
    pub narrow: f32,
    /// Advance of an ideographic character, in ems
    pub wide: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        MonospaceMeasure {
            narrow: 0.5,
            wide: 1.0,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str, _font: FontId, size: Pt) -> Result<Pt, MeasureError> {
        Ok(text
            .chars()
            .map(|ch| {
                if is_ideographic(ch) {
                    size * self.wide
                } else {
                    size * self.narrow
                }
            })
            .sum())
    }
}
