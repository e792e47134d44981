//! LaTeX spelling of glyphs and bracket delimiters.
//!
//! A glyph token stores its LaTeX text (`\_`, `\%`), while consumers of the
//! tree want the glyph the user actually sees (`_`, `%`). These helpers convert
//! between the two.

use crate::{NodeOrToken, SyntaxElement, SyntaxKind};

/// Glyphs that must be escaped with a backslash in LaTeX.
const ESCAPED: &[char] = &['_', '%', '$', '&', '#', '{', '}'];

/// Returns the LaTeX text for a single glyph.
pub fn escape_glyph(glyph: &str) -> String {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if ESCAPED.contains(&c) => format!("\\{}", c),
        _ => glyph.to_string(),
    }
}

/// Returns the glyph rendered by a LaTeX token text.
///
/// ```
/// use mathfield_syntax::latex::unescape_glyph;
///
/// assert_eq!(unescape_glyph(r"\_"), "_");
/// assert_eq!(unescape_glyph("x"), "x");
/// assert_eq!(unescape_glyph(r"\frac"), r"\frac");
/// ```
pub fn unescape_glyph(text: &str) -> &str {
    if let Some(rest) = text.strip_prefix('\\') {
        let mut chars = rest.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if ESCAPED.contains(&c) {
                return rest;
            }
        }
    }
    text
}

/// Closing glyph matching a bracket's opening glyph.
pub fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '|' => Some('|'),
        _ => None,
    }
}

/// `\left` spelling of an opening delimiter, e.g. `{` -> `\left\{`.
pub fn left_delimiter(open: char) -> Option<String> {
    closing_for(open)?;
    Some(format!("\\left{}", escape_glyph(open.encode_utf8(&mut [0; 4]))))
}

/// `\right` spelling of a closing delimiter, e.g. `}` -> `\right\}`.
pub fn right_delimiter(close: char) -> Option<String> {
    match close {
        ')' | ']' | '}' | '|' => Some(format!(
            "\\right{}",
            escape_glyph(close.encode_utf8(&mut [0; 4]))
        )),
        _ => None,
    }
}

/// The glyph of a `\left` / `\right` delimiter token.
pub fn delimiter_glyph(text: &str) -> &str {
    let rest = text
        .strip_prefix("\\left")
        .or_else(|| text.strip_prefix("\\right"))
        .unwrap_or(text);
    unescape_glyph(rest)
}

/// The literal glyph an element renders.
///
/// Glyph tokens render their unescaped text. A bracket renders its opening
/// delimiter; other composites report their command name, blocks and the root
/// report nothing.
pub fn raw_glyph(element: &SyntaxElement) -> String {
    match element {
        NodeOrToken::Token(token) => unescape_glyph(token.text()).to_string(),
        NodeOrToken::Node(node) => node
            .children_with_tokens()
            .filter_map(|child| child.into_token())
            .find_map(|token| match token.kind() {
                SyntaxKind::LeftDelimiter => Some(delimiter_glyph(token.text()).to_string()),
                SyntaxKind::CommandName => Some(token.text().to_string()),
                _ => None,
            })
            .unwrap_or_default(),
    }
}
