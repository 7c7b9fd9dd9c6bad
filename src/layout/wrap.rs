use super::tokenize::{tokenize, Token};
use crate::error::LayoutError;
use crate::measure::{TextMeasure, TextStyle};
use crate::units::Pt;

/// Wraps text into lines no wider than `max_width`, measured in `style`.
///
/// The text is split at its line breaks first and every sub-line is wrapped on
/// its own; a sub-line that is only whitespace becomes one empty line, so
/// blank lines survive. Within a sub-line, tokens are packed greedily:
///
/// - whitespace adds a single space to a non-empty line, but only if the
///   space still fits; whitespace never causes a break by itself. Every
///   whitespace character is drawn as one U+0020, so an ideographic space
///   (U+3000) or a tab between words becomes a narrow ASCII space
/// - a word or ideograph that fits is appended, otherwise the current line
///   is finished and the token starts the next one
/// - a token wider than a whole line is split between characters, so every
///   line fits except a line holding a single character that is itself too
///   wide. That character is still emitted on its own line.
///
/// Lines are returned with trailing whitespace trimmed. Empty text yields
/// one empty line.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: Pt,
    style: TextStyle,
    measure: &M,
) -> Result<Vec<String>, LayoutError> {
    if !max_width.is_positive() {
        return Err(LayoutError::InvalidMaxWidth(max_width));
    }

    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut wrapper = LineWrapper {
        measure,
        style,
        max_width,
        lines: Vec::new(),
    };
    for raw in text.lines() {
        wrapper.wrap_line(raw)?;
    }
    if wrapper.lines.is_empty() {
        wrapper.lines.push(String::new());
    }

    Ok(wrapper.lines)
}

struct LineWrapper<'m, M: ?Sized> {
    measure: &'m M,
    style: TextStyle,
    max_width: Pt,
    lines: Vec<String>,
}

impl<M: TextMeasure + ?Sized> LineWrapper<'_, M> {
    fn fits(&self, text: &str) -> Result<bool, LayoutError> {
        Ok(self.measure.width_in(text, self.style)? <= self.max_width)
    }

    fn finish_line(&mut self, current: &str) {
        self.lines.push(current.trim_end().to_string());
    }

    fn wrap_line(&mut self, raw: &str) -> Result<(), LayoutError> {
        if !raw.is_empty() && raw.trim().is_empty() {
            self.lines.push(String::new());
            return Ok(());
        }

        let mut current = String::new();
        for token in tokenize(raw) {
            match token {
                Token::Space(_) => {
                    if !current.is_empty() && !current.ends_with(' ') {
                        current.push(' ');
                        if !self.fits(&current)? {
                            current.pop();
                        }
                    }
                }
                Token::Word(piece) | Token::Ideograph(piece) => {
                    if !current.is_empty() {
                        let len = current.len();
                        current.push_str(piece);
                        if self.fits(&current)? {
                            continue;
                        }
                        current.truncate(len);
                        self.finish_line(&current);
                    }
                    current = self.start_line(piece)?;
                }
            }
        }
        self.finish_line(&current);

        Ok(())
    }

    /// Start a fresh line with `piece`. A piece too wide for any line is split
    /// character by character; the full lines are emitted and the remainder
    /// returned as the new current line
    fn start_line(&mut self, piece: &str) -> Result<String, LayoutError> {
        if self.fits(piece)? {
            return Ok(piece.to_string());
        }

        log::trace!("splitting over-wide token {piece:?}");
        let mut current = String::new();
        for ch in piece.chars() {
            current.push(ch);
            if !self.fits(&current)? {
                current.pop();
                if !current.is_empty() {
                    self.lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
        }

        Ok(current)
    }
}
