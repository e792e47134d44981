use crate::glyphs::Glyphs;
use crate::latex::{closing_for, escape_glyph, left_delimiter, right_delimiter};
use crate::{SyntaxKind, SyntaxNode};
use rowan::{GreenNode, GreenNodeBuilder};
use thiserror::Error;

/// Reasons a tree could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("empty glyph for {kind:?}")]
    EmptyGlyph { kind: SyntaxKind },
    #[error("'{glyph}' is not a valid {kind:?} glyph")]
    InvalidGlyph { kind: SyntaxKind, glyph: String },
    #[error("unsupported bracket delimiter '{0}'")]
    UnsupportedDelimiter(char),
    #[error("closing '{found}' does not match an open bracket")]
    UnbalancedBracket { found: char },
    #[error("bracket opened with '{open}' was never closed")]
    UnclosedBracket { open: char },
}

/// An immutable expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathTree {
    green: GreenNode,
}

impl MathTree {
    /// A tree holding only an empty root block.
    pub fn empty() -> Self {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::Root.into());
        builder.finish_node();
        Self {
            green: builder.finish(),
        }
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn green_node(&self) -> GreenNode {
        self.green.clone()
    }

    /// The LaTeX serialization of the expression.
    pub fn latex(&self) -> String {
        self.syntax().text().to_string()
    }
}

/// Builds expression trees the way a math field does while the user types.
///
/// Like a recovering parser, the builder never stops on bad input: invalid
/// glyphs are dropped, unclosed brackets are closed at the end of their
/// enclosing block, and every problem is recorded. [`TreeBuilder::finish`]
/// reports the first one.
///
/// ```
/// use mathfield_syntax::TreeBuilder;
///
/// let mut builder = TreeBuilder::new();
/// builder
///     .letter('x')
///     .operator("=")
///     .fraction(|num| { num.digit('1'); }, |den| { den.digit('2'); });
/// let tree = builder.finish().unwrap();
///
/// assert_eq!(tree.latex(), r"x=\frac{1}{2}");
/// ```
pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
    /// Opening glyphs of brackets opened by typed text, innermost last.
    brackets: Vec<char>,
    /// Brackets below this index belong to an enclosing block.
    floor: usize,
    errors: Vec<BuildError>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::Root.into());
        Self {
            builder,
            brackets: Vec::new(),
            floor: 0,
            errors: Vec::new(),
        }
    }

    pub fn letter(&mut self, letter: char) -> &mut Self {
        if letter.is_alphabetic() {
            self.push_glyph(SyntaxKind::Letter, letter.encode_utf8(&mut [0; 4]));
        } else {
            self.invalid(SyntaxKind::Letter, letter);
        }
        self
    }

    pub fn digit(&mut self, digit: char) -> &mut Self {
        if digit.is_ascii_digit() {
            self.push_glyph(SyntaxKind::Digit, digit.encode_utf8(&mut [0; 4]));
        } else {
            self.invalid(SyntaxKind::Digit, digit);
        }
        self
    }

    /// A digit grouping character, `.` or `_`.
    pub fn digit_grouping(&mut self, glyph: char) -> &mut Self {
        if matches!(glyph, '.' | '_') {
            self.push_glyph(SyntaxKind::DigitGroupingChar, glyph.encode_utf8(&mut [0; 4]));
        } else {
            self.invalid(SyntaxKind::DigitGroupingChar, glyph);
        }
        self
    }

    pub fn symbol(&mut self, glyph: &str) -> &mut Self {
        self.push_glyph(SyntaxKind::VanillaSymbol, glyph);
        self
    }

    pub fn non_symbola(&mut self, glyph: &str) -> &mut Self {
        self.push_glyph(SyntaxKind::NonSymbolaSymbol, glyph);
        self
    }

    pub fn operator(&mut self, glyph: &str) -> &mut Self {
        self.push_glyph(SyntaxKind::BinaryOperator, glyph);
        self
    }

    /// Types `text` one glyph at a time.
    ///
    /// Bracket glyphs open and close [`SyntaxKind::Bracket`] nodes; a closing
    /// glyph that does not match the innermost bracket opened in the current
    /// block is an error.
    pub fn typed(&mut self, text: &str) -> &mut Self {
        for (kind, glyph) in Glyphs::new(text) {
            let Some(c) = glyph.chars().next() else {
                continue;
            };
            match kind {
                SyntaxKind::LeftDelimiter => self.open_typed_bracket(c),
                SyntaxKind::RightDelimiter => self.close_typed_bracket(c),
                _ => self.push_glyph(kind, glyph),
            }
        }
        self
    }

    /// A `\left`/`\right` bracket around the block built by `body`.
    pub fn bracket(&mut self, open: char, close: char, body: impl FnOnce(&mut Self)) -> &mut Self {
        let Some(left) = left_delimiter(open) else {
            self.errors.push(BuildError::UnsupportedDelimiter(open));
            return self;
        };
        let Some(right) = right_delimiter(close) else {
            self.errors.push(BuildError::UnsupportedDelimiter(close));
            return self;
        };
        self.builder.start_node(SyntaxKind::Bracket.into());
        self.builder.token(SyntaxKind::LeftDelimiter.into(), &left);
        self.block(false, body);
        self.builder.token(SyntaxKind::RightDelimiter.into(), &right);
        self.builder.finish_node();
        self
    }

    pub fn fraction(
        &mut self,
        numerator: impl FnOnce(&mut Self),
        denominator: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.builder.start_node(SyntaxKind::Fraction.into());
        self.builder.token(SyntaxKind::CommandName.into(), "\\frac");
        self.block(true, numerator);
        self.block(true, denominator);
        self.builder.finish_node();
        self
    }

    pub fn sqrt(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.command(SyntaxKind::SquareRoot, "\\sqrt", body)
    }

    pub fn superscript(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.command(SyntaxKind::Superscript, "^", body)
    }

    pub fn subscript(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.command(SyntaxKind::Subscript, "_", body)
    }

    /// Closes the root block and returns the tree, or the first recorded error.
    pub fn finish(mut self) -> Result<MathTree, BuildError> {
        self.floor = 0;
        self.close_unclosed();
        self.builder.finish_node();
        let green = self.builder.finish();

        if let Some(error) = self.errors.first() {
            log::debug!("discarding tree with {} build error(s)", self.errors.len());
            return Err(error.clone());
        }
        Ok(MathTree { green })
    }

    fn command(&mut self, kind: SyntaxKind, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.builder.start_node(kind.into());
        self.builder.token(SyntaxKind::CommandName.into(), name);
        self.block(true, body);
        self.builder.finish_node();
        self
    }

    fn block(&mut self, braced: bool, body: impl FnOnce(&mut Self)) {
        self.builder.start_node(SyntaxKind::Block.into());
        if braced {
            self.builder.token(SyntaxKind::LBrace.into(), "{");
        }
        let floor = std::mem::replace(&mut self.floor, self.brackets.len());
        body(self);
        self.close_unclosed();
        self.floor = floor;
        if braced {
            self.builder.token(SyntaxKind::RBrace.into(), "}");
        }
        self.builder.finish_node();
    }

    fn push_glyph(&mut self, kind: SyntaxKind, glyph: &str) {
        if glyph.is_empty() {
            self.errors.push(BuildError::EmptyGlyph { kind });
            return;
        }
        self.builder.token(kind.into(), &escape_glyph(glyph));
    }

    fn invalid(&mut self, kind: SyntaxKind, glyph: char) {
        self.errors.push(BuildError::InvalidGlyph {
            kind,
            glyph: glyph.to_string(),
        });
    }

    fn open_typed_bracket(&mut self, open: char) {
        let Some(left) = left_delimiter(open) else {
            self.errors.push(BuildError::UnsupportedDelimiter(open));
            return;
        };
        self.builder.start_node(SyntaxKind::Bracket.into());
        self.builder.token(SyntaxKind::LeftDelimiter.into(), &left);
        self.builder.start_node(SyntaxKind::Block.into());
        self.brackets.push(open);
    }

    fn close_typed_bracket(&mut self, close: char) {
        let matches_innermost = self.brackets.len() > self.floor
            && self
                .brackets
                .last()
                .is_some_and(|&open| closing_for(open) == Some(close));
        if !matches_innermost {
            self.errors.push(BuildError::UnbalancedBracket { found: close });
            return;
        }
        self.brackets.pop();
        self.finish_typed_bracket(close);
    }

    /// Closes every typed bracket opened in the current block.
    fn close_unclosed(&mut self) {
        while self.brackets.len() > self.floor {
            let Some(open) = self.brackets.pop() else {
                break;
            };
            self.errors.push(BuildError::UnclosedBracket { open });
            match closing_for(open) {
                Some(close) => self.finish_typed_bracket(close),
                None => {
                    self.builder.finish_node();
                    self.builder.finish_node();
                }
            }
        }
    }

    fn finish_typed_bracket(&mut self, close: char) {
        self.builder.finish_node(); // Block
        if let Some(right) = right_delimiter(close) {
            self.builder.token(SyntaxKind::RightDelimiter.into(), &right);
        }
        self.builder.finish_node(); // Bracket
    }
}
