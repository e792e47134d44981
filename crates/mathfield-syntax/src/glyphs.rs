use crate::SyntaxKind;

/// A scanner for typed glyphs.
///
/// ## Overview
///
/// `Glyphs` turns keyboard input into the leaf kinds a math field creates when
/// each character is typed, producing a stream of ([`SyntaxKind`], `&str`)
/// tuples with one character per item:
///
/// - **Letters**: any alphabetic character
/// - **Digits**: `0`-`9`
/// - **Digit grouping**: `.`
/// - **Non-Symbola symbols**: `$ % & # @`
/// - **Binary operators**: `+ - = < > * /` and their Unicode relatives
/// - **Brackets**: `( [ {` open ([`SyntaxKind::LeftDelimiter`]) and
///   `) ] }` close ([`SyntaxKind::RightDelimiter`])
/// - **Whitespace**: skipped
/// - **Everything else**: plain ([`SyntaxKind::VanillaSymbol`]) symbols,
///   including `_`, quotes and commas
///
/// The scanner does not build structure; [`TreeBuilder::typed`] pairs up the
/// bracket glyphs.
///
/// [`TreeBuilder::typed`]: crate::TreeBuilder::typed
///
/// ## Examples
///
/// ```
/// use mathfield_syntax::glyphs::Glyphs;
/// use mathfield_syntax::SyntaxKind;
///
/// let glyphs: Vec<_> = Glyphs::new("a.1 + _").collect();
///
/// assert_eq!(glyphs[0], (SyntaxKind::Letter, "a"));
/// assert_eq!(glyphs[1], (SyntaxKind::DigitGroupingChar, "."));
/// assert_eq!(glyphs[2], (SyntaxKind::Digit, "1"));
/// assert_eq!(glyphs[3], (SyntaxKind::BinaryOperator, "+"));
/// assert_eq!(glyphs[4], (SyntaxKind::VanillaSymbol, "_"));
/// ```
pub struct Glyphs<'a> {
    /// The typed text being scanned.
    input: &'a str,
    /// Current byte position in the input.
    position: usize,
}

impl<'a> Glyphs<'a> {
    /// Creates a new scanner over typed text.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next glyph, or `None` once the input is exhausted.
    pub fn next_glyph(&mut self) -> Option<(SyntaxKind, &'a str)> {
        loop {
            let c = self.input[self.position..].chars().next()?;
            let start = self.position;
            self.position += c.len_utf8();
            if c.is_whitespace() {
                continue;
            }
            return Some((classify(c), &self.input[start..self.position]));
        }
    }
}

impl<'a> Iterator for Glyphs<'a> {
    type Item = (SyntaxKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_glyph()
    }
}

/// The leaf kind created by typing `c`.
pub fn classify(c: char) -> SyntaxKind {
    match c {
        c if c.is_alphabetic() => SyntaxKind::Letter,
        c if c.is_ascii_digit() => SyntaxKind::Digit,
        '.' => SyntaxKind::DigitGroupingChar,
        '$' | '%' | '&' | '#' | '@' => SyntaxKind::NonSymbolaSymbol,
        '+' | '-' | '=' | '<' | '>' | '*' | '/' | '±' | '×' | '÷' | '·' | '≤' | '≥' | '≠' => {
            SyntaxKind::BinaryOperator
        }
        '(' | '[' | '{' => SyntaxKind::LeftDelimiter,
        ')' | ']' | '}' => SyntaxKind::RightDelimiter,
        _ => SyntaxKind::VanillaSymbol,
    }
}
