//! The tokenizer's view of a tree node and the predicates it classifies by.

use crate::token::TokenType;
use mathfield_syntax::SyntaxKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of node the tokenizer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Letter,
    Digit,
    DigitGroupingChar,
    VanillaSymbol,
    NonSymbolaSymbol,
    Bracket,
    /// Operators, blocks, fractions and anything else.
    Other,
}

impl From<SyntaxKind> for NodeKind {
    fn from(kind: SyntaxKind) -> Self {
        match kind {
            SyntaxKind::Letter => NodeKind::Letter,
            SyntaxKind::Digit => NodeKind::Digit,
            SyntaxKind::DigitGroupingChar => NodeKind::DigitGroupingChar,
            SyntaxKind::VanillaSymbol => NodeKind::VanillaSymbol,
            SyntaxKind::NonSymbolaSymbol => NodeKind::NonSymbolaSymbol,
            SyntaxKind::Bracket | SyntaxKind::LeftDelimiter => NodeKind::Bracket,
            SyntaxKind::BinaryOperator
            | SyntaxKind::CommandName
            | SyntaxKind::LBrace
            | SyntaxKind::RBrace
            | SyntaxKind::RightDelimiter
            | SyntaxKind::Root
            | SyntaxKind::Block
            | SyntaxKind::Fraction
            | SyntaxKind::SquareRoot
            | SyntaxKind::Superscript
            | SyntaxKind::Subscript => NodeKind::Other,
        }
    }
}

/// Identifies a node within one tree snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the classifier reads from a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// The literal glyph the node renders (`"_"`, `"."`, `"a"`); a bracket
    /// reports its opening delimiter.
    pub glyph: String,
}

impl GlyphNode {
    pub fn new(id: NodeId, kind: NodeKind, glyph: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            glyph: glyph.into(),
        }
    }

    pub fn is_quote(&self) -> bool {
        self.kind == NodeKind::VanillaSymbol && matches!(self.glyph.as_str(), "\"" | "'")
    }

    pub fn is_underscore(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::VanillaSymbol | NodeKind::DigitGroupingChar
        ) && self.glyph == "_"
    }

    pub fn is_period(&self) -> bool {
        self.kind == NodeKind::DigitGroupingChar && self.glyph == "."
    }

    pub fn is_comma(&self) -> bool {
        self.kind == NodeKind::VanillaSymbol && self.glyph == ","
    }

    pub fn is_identifier_start(&self) -> bool {
        self.kind == NodeKind::Letter || self.is_underscore()
    }

    pub fn can_continue_identifier(&self) -> bool {
        matches!(self.kind, NodeKind::Letter | NodeKind::Digit) || self.is_underscore()
    }

    /// Whether a node may directly precede a glyph that continues a run.
    pub fn is_valid_prior_token(&self) -> bool {
        matches!(self.kind, NodeKind::Letter | NodeKind::Digit)
            || self.is_underscore()
            || self.is_period()
            || self.is_quote()
    }

    pub fn token_type(&self) -> TokenType {
        match self.kind {
            NodeKind::Letter => TokenType::Letter,
            NodeKind::Digit => TokenType::Number,
            NodeKind::DigitGroupingChar => match self.glyph.as_str() {
                "." => TokenType::Period,
                "_" => TokenType::Underscore,
                _ => TokenType::Unknown,
            },
            NodeKind::VanillaSymbol => match self.glyph.as_str() {
                "_" => TokenType::Underscore,
                "\"" | "'" => TokenType::Quote,
                _ => TokenType::Unknown,
            },
            NodeKind::NonSymbolaSymbol | NodeKind::Bracket | NodeKind::Other => {
                TokenType::Unknown
            }
        }
    }

    /// The token text: the glyph itself, or `"unknown"` for unclassified nodes.
    pub fn token_text(&self) -> &str {
        match self.token_type() {
            TokenType::Unknown => "unknown",
            _ => &self.glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind, glyph: &str) -> GlyphNode {
        GlyphNode::new(NodeId(0), kind, glyph)
    }

    #[test]
    fn test_quotes() {
        assert!(node(NodeKind::VanillaSymbol, "\"").is_quote());
        assert!(node(NodeKind::VanillaSymbol, "'").is_quote());
        assert!(!node(NodeKind::NonSymbolaSymbol, "\"").is_quote());
        assert!(!node(NodeKind::VanillaSymbol, "`").is_quote());
    }

    #[test]
    fn test_underscore_from_either_kind() {
        assert!(node(NodeKind::VanillaSymbol, "_").is_underscore());
        assert!(node(NodeKind::DigitGroupingChar, "_").is_underscore());
        assert!(!node(NodeKind::NonSymbolaSymbol, "_").is_underscore());
        assert!(node(NodeKind::DigitGroupingChar, "_").is_identifier_start());
    }

    #[test]
    fn test_period_only_from_digit_grouping() {
        assert!(node(NodeKind::DigitGroupingChar, ".").is_period());
        assert!(!node(NodeKind::VanillaSymbol, ".").is_period());
    }

    #[test]
    fn test_identifier_predicates() {
        let letter = node(NodeKind::Letter, "a");
        let digit = node(NodeKind::Digit, "1");
        let period = node(NodeKind::DigitGroupingChar, ".");
        let quote = node(NodeKind::VanillaSymbol, "\"");
        let plus = node(NodeKind::Other, "+");

        assert!(letter.is_identifier_start());
        assert!(!digit.is_identifier_start());
        assert!(digit.can_continue_identifier());
        assert!(!period.can_continue_identifier());
        assert!(!quote.can_continue_identifier());

        for prior in [&letter, &digit, &period, &quote] {
            assert!(prior.is_valid_prior_token(), "{:?}", prior);
        }
        assert!(!plus.is_valid_prior_token());
        assert!(!node(NodeKind::Bracket, "(").is_valid_prior_token());
    }

    #[test]
    fn test_token_type_and_text() {
        assert_eq!(node(NodeKind::Letter, "x").token_type(), TokenType::Letter);
        assert_eq!(node(NodeKind::Digit, "7").token_text(), "7");
        assert_eq!(
            node(NodeKind::DigitGroupingChar, ".").token_type(),
            TokenType::Period
        );
        assert_eq!(
            node(NodeKind::VanillaSymbol, "'").token_type(),
            TokenType::Quote
        );
        assert_eq!(node(NodeKind::VanillaSymbol, "'").token_text(), "'");

        let percent = node(NodeKind::NonSymbolaSymbol, "%");
        assert_eq!(percent.token_type(), TokenType::Unknown);
        assert_eq!(percent.token_text(), "unknown");
        assert_eq!(node(NodeKind::VanillaSymbol, ",").token_text(), "unknown");
    }

    #[test]
    fn test_syntax_kind_mapping() {
        assert_eq!(NodeKind::from(SyntaxKind::Letter), NodeKind::Letter);
        assert_eq!(NodeKind::from(SyntaxKind::Bracket), NodeKind::Bracket);
        assert_eq!(NodeKind::from(SyntaxKind::BinaryOperator), NodeKind::Other);
        assert_eq!(NodeKind::from(SyntaxKind::Fraction), NodeKind::Other);
    }
}
