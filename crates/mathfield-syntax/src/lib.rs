//! # mathfield syntax
//!
//! The expression tree behind an editable math field.
//!
//! The tree is a [`rowan`] tree whose token text, concatenated in order, is the
//! LaTeX serialization of the expression. Glyph tokens (letters, digits,
//! symbols) are the leaves a user types; composite nodes (brackets, fractions,
//! roots, scripts) group them into blocks. Structural tokens (`\frac`, `{`,
//! `\left(` ...) only exist to keep the LaTeX text in sync and are skipped by
//! every traversal that works on "math nodes".
//!
//! Trees are constructed through [`TreeBuilder`]; LaTeX is only ever produced
//! here, never parsed.
//!
//! ```
//! use mathfield_syntax::{SyntaxKind, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! builder.typed("f(x)");
//! let tree = builder.finish().unwrap();
//!
//! assert_eq!(tree.latex(), r"f\left(x\right)");
//! assert_eq!(tree.syntax().kind(), SyntaxKind::Root);
//! ```

pub mod builder;
pub mod glyphs;
pub mod latex;

pub use builder::{BuildError, MathTree, TreeBuilder};
use rowan::Language;
pub use rowan::{NodeOrToken, TextRange, TextSize, WalkEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Glyph tokens
    Letter = 0,
    Digit,
    DigitGroupingChar, // '.' or '_' inside digit runs
    VanillaSymbol,     // plain symbols: , " ' _ ! ...
    NonSymbolaSymbol,  // \$ \% \& \# @
    BinaryOperator,    // + - = < > ...

    // Structural tokens
    CommandName,    // \frac, \sqrt, ^, _
    LBrace,         // {
    RBrace,         // }
    LeftDelimiter,  // \left(
    RightDelimiter, // \right)

    // Composite Nodes
    Root,
    Block,
    Bracket,
    Fraction,
    SquareRoot,
    Superscript,
    Subscript,
}

impl SyntaxKind {
    /// Tokens that only carry LaTeX text and are never visited as math nodes.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            SyntaxKind::CommandName
                | SyntaxKind::LBrace
                | SyntaxKind::RBrace
                | SyntaxKind::LeftDelimiter
                | SyntaxKind::RightDelimiter
        )
    }

    /// Leaf tokens produced by typing a single glyph.
    pub fn is_glyph(self) -> bool {
        matches!(
            self,
            SyntaxKind::Letter
                | SyntaxKind::Digit
                | SyntaxKind::DigitGroupingChar
                | SyntaxKind::VanillaSymbol
                | SyntaxKind::NonSymbolaSymbol
                | SyntaxKind::BinaryOperator
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MathLanguage {}

impl Language for MathLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::Subscript as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<MathLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MathLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<MathLanguage>;
