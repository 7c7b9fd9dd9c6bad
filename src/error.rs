use crate::measure::FontId;
use crate::units::Pt;
use thiserror::Error;

/// Errors raised by a [`TextMeasure`](crate::TextMeasure) implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// The font id was never registered with the measurer
    #[error("unknown font {0:?}")]
    UnknownFont(FontId),

    /// The font has no glyph for the character, nor any replacement glyph
    #[error("font {font:?} has no glyph for {ch:?} and no replacement glyph")]
    MissingGlyph { font: FontId, ch: char },
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// The injected width measurement failed
    Measure(#[from] MeasureError),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the image
    Image(#[from] image::ImageError),

    /// Lines cannot be wrapped against a zero, negative or non-finite width
    #[error("cannot wrap text to a maximum width of {0}")]
    InvalidMaxWidth(Pt),

    /// The layout configuration is unusable; raised before any layout happens
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(&'static str),
}
