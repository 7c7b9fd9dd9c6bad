use crate::script::{classify, CharClass};
use std::fmt;

/// The atomic unit of line breaking
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A single whitespace character; a no-break space is normalized to U+0020
    Space(char),
    /// A maximal run of ordinary (non-ideographic, non-whitespace) characters
    Word(&'a str),
    /// Exactly one ideographic character
    Ideograph(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Space(ch) => write!(f, "{ch}"),
            Token::Word(s) | Token::Ideograph(s) => f.write_str(s),
        }
    }
}

/// Split a single line (no embedded line breaks) into tokens, in order.
///
/// Whitespace always ends the current run and becomes its own token. Each
/// ideographic character is a token of its own, so a line may break between
/// any two of them. Ordinary characters accumulate until the class changes.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    // start byte offset and class of the run being built
    let mut run: Option<(usize, CharClass)> = None;

    for (i, ch) in line.char_indices() {
        let class = classify(ch);
        match class {
            CharClass::Whitespace => {
                if let Some((start, class)) = run.take() {
                    tokens.push(run_token(&line[start..i], class));
                }
                let ch = if ch == '\u{00A0}' { ' ' } else { ch };
                tokens.push(Token::Space(ch));
            }
            CharClass::Ordinary => match run {
                Some((_, CharClass::Ordinary)) => {}
                Some((start, prev)) => {
                    tokens.push(run_token(&line[start..i], prev));
                    run = Some((i, class));
                }
                None => run = Some((i, class)),
            },
            CharClass::Ideographic => {
                if let Some((start, prev)) = run.take() {
                    tokens.push(run_token(&line[start..i], prev));
                }
                run = Some((i, class));
            }
        }
    }

    if let Some((start, class)) = run {
        tokens.push(run_token(&line[start..], class));
    }

    tokens
}

fn run_token(text: &str, class: CharClass) -> Token<'_> {
    match class {
        CharClass::Ideographic => Token::Ideograph(text),
        _ => Token::Word(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<String> {
        tokenize(line).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn splits_mixed_scripts() {
        assert_eq!(texts("ABC日本語DEF"), ["ABC", "日", "本", "語", "DEF"]);
        assert_eq!(
            tokenize("ABC日本語DEF"),
            [
                Token::Word("ABC"),
                Token::Ideograph("日"),
                Token::Ideograph("本"),
                Token::Ideograph("語"),
                Token::Word("DEF"),
            ]
        );
    }

    #[test]
    fn whitespace_is_always_its_own_token() {
        assert_eq!(texts("hello  world"), ["hello", " ", " ", "world"]);
        assert_eq!(texts(" 日 "), [" ", "日", " "]);
        assert_eq!(texts("a\tb"), ["a", "\t", "b"]);
    }

    #[test]
    fn no_break_space_is_normalized() {
        assert_eq!(tokenize("a\u{00A0}b"), [Token::Word("a"), Token::Space(' '), Token::Word("b")]);
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn concatenation_is_lossless() {
        let lines = [
            "The quick brown fox",
            "吾輩は猫である。名前はまだ無い。",
            "mixed 日本語text with\u{00A0}nbsp and\ttabs",
            "  leading and trailing  ",
            "カタカナとＡＢＣ全角",
        ];
        for line in lines {
            let joined: String = tokenize(line).iter().map(ToString::to_string).collect();
            assert_eq!(joined, line.replace('\u{00A0}', " "));
        }
    }

    #[test]
    fn ideographs_are_single_characters() {
        for token in tokenize("吾輩は猫であるabc。") {
            if let Token::Ideograph(s) = token {
                assert_eq!(s.chars().count(), 1);
            }
        }
    }
}
