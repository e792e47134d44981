//! # mathfield semantics
//!
//! A semantic tokenizer for editable math expressions.
//!
//! The tokenizer walks an expression tree in post-order and groups adjacent
//! glyphs into [`Identifier`]s: object names (`foo`), property chains
//! (`foo.bar`) and quoted string literals (`"bar"`). Every node it classifies
//! is tagged in a separate [`Annotations`] store, so a renderer can style the
//! expression without the tree itself being touched.
//!
//! ```
//! use mathfield_semantics::{parse_semantic_types, Annotations, TagSet};
//! use mathfield_syntax::TreeBuilder;
//!
//! let mut builder = TreeBuilder::new();
//! builder.typed("point.x+1");
//! let tree = builder.finish().unwrap();
//!
//! let mut annotations = Annotations::new();
//! let result = parse_semantic_types(&tree.syntax(), &mut annotations);
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.identifiers[0].text(), "point.x");
//! let x = result.identifiers[0].tokens[6].id;
//! assert!(annotations.has(x, TagSet::IDENTIFIER | TagSet::PROPERTY));
//! ```

pub mod annotations;
pub mod classifier;
pub mod node;
pub mod token;
pub mod tokenizer;
pub mod tree;

pub use annotations::{Annotations, TagSet};
pub use classifier::{Classification, Classifier, ClassifierState};
pub use node::{GlyphNode, NodeId, NodeKind};
pub use token::{BelongsTo, Identifier, Token, TokenType, TokenizerResult};
pub use tokenizer::{annotate_units, SemanticTokenizer, TokenizerOptions};
pub use tree::{ExpressionTree, GlyphSequence};

use mathfield_syntax::SyntaxNode;

/// Tokenizes a math field tree with the default options.
pub fn parse_semantic_types(root: &SyntaxNode, annotations: &mut Annotations) -> TokenizerResult {
    SemanticTokenizer::default().tokenize(root, annotations)
}
