use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Letter,
    Number,
    Underscore,
    Period,
    Quote,
    Unknown,
}

impl TokenType {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Letter => "letter",
            TokenType::Number => "number",
            TokenType::Underscore => "underscore",
            TokenType::Period => "period",
            TokenType::Quote => "quote",
            TokenType::Unknown => "unknown",
        }
    }
}

/// The classification state a token was produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BelongsTo {
    Object,
    Property,
    Period,
    Literal,
    None,
}

impl BelongsTo {
    pub fn as_str(self) -> &'static str {
        match self {
            BelongsTo::Object => "object",
            BelongsTo::Property => "property",
            BelongsTo::Period => "period",
            BelongsTo::Literal => "literal",
            BelongsTo::None => "none",
        }
    }
}

/// One classified node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: NodeId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TokenType,
    pub belongs_to: BelongsTo,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}/{}",
            self.text,
            self.kind.as_str(),
            self.belongs_to.as_str()
        )
    }
}

/// A maximal classified run: an object name, a property chain or a string literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier {
    pub tokens: Vec<Token>,
}

impl Identifier {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The concatenated token text, e.g. `foo.bar`.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|token| token.text.as_str()).collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tokens.iter().map(|token| token.id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Every identifier found by one traversal, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenizerResult {
    pub identifiers: Vec<Identifier>,
}

impl TokenizerResult {
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.identifiers.iter()
    }
}

impl<'a> IntoIterator for &'a TokenizerResult {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}

/// One identifier per line.
impl fmt::Display for TokenizerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for identifier in &self.identifiers {
            writeln!(f, "{}", identifier)?;
        }
        Ok(())
    }
}
