//! Script classification used to decide where lines may break.
//!
//! Ideographic scripts (Chinese, Japanese kana, fullwidth forms) do not
//! separate words with spaces, so every ideographic character is its own
//! break opportunity. Everything else is "ordinary" and only breaks at
//! whitespace.

/// The class of a single character, as seen by the tokenizer
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// A character from a script that may break before and after any character
    Ideographic,
    /// Any other visible character; runs of these form words
    Ordinary,
    /// A whitespace character; always a break opportunity
    Whitespace,
}

/// Whether a character belongs to one of the CJK blocks that break per
/// character. Whitespace is not considered here; see [classify].
pub fn is_ideographic(ch: char) -> bool {
    matches!(
        ch as u32,
        0x4E00..=0x9FFF     // CJK unified ideographs
        | 0x3400..=0x4DBF   // CJK unified ideographs extension A
        | 0x3040..=0x309F   // hiragana
        | 0x30A0..=0x30FF   // katakana
        | 0xFF00..=0xFFEF   // halfwidth and fullwidth forms
        | 0x3000..=0x303F   // CJK symbols and punctuation
    )
}

/// Classify a character. Whitespace wins over script, so U+3000 (ideographic
/// space) is [CharClass::Whitespace] even though it sits in a CJK block.
pub fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if is_ideographic(ch) {
        CharClass::Ideographic
    } else {
        CharClass::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_cjk_blocks() {
        for ch in ['日', '本', '語', '㐀', 'ひ', 'カ', 'Ａ', '。', '「'] {
            assert_eq!(classify(ch), CharClass::Ideographic, "{ch:?}");
        }
    }

    #[test]
    fn everything_else_is_ordinary() {
        for ch in ['a', 'Z', '9', '-', 'é', 'Ж', '한', '😀'] {
            assert_eq!(classify(ch), CharClass::Ordinary, "{ch:?}");
        }
    }

    #[test]
    fn whitespace_is_checked_first() {
        assert!(is_ideographic('\u{3000}'));
        assert_eq!(classify('\u{3000}'), CharClass::Whitespace);
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('\u{00A0}'), CharClass::Whitespace);
    }
}
