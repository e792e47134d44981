//! Trees the tokenizer can walk.
//!
//! The tokenizer needs very little from a tree: a post-order walk, the left
//! sibling of a node, and a [`GlyphNode`] view of each node. [`ExpressionTree`]
//! captures exactly that, so the same classifier runs over real math field
//! trees and over the flat [`GlyphSequence`] used in tests and fuzzing.

use crate::node::{GlyphNode, NodeId, NodeKind};
use mathfield_syntax::glyphs::Glyphs;
use mathfield_syntax::latex::raw_glyph;
use mathfield_syntax::{NodeOrToken, SyntaxElement, SyntaxNode, WalkEvent};

pub trait ExpressionTree {
    type Node: Clone;

    /// Visits every node, children before parents, siblings left to right.
    fn post_order(&self, visit: &mut dyn FnMut(&Self::Node));

    /// Visits `node` and everything below it in post-order.
    fn post_order_within(&self, node: &Self::Node, visit: &mut dyn FnMut(&Self::Node));

    fn left_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    fn view(&self, node: &Self::Node) -> GlyphNode;
}

/// Walks a math field tree, skipping structural tokens.
///
/// Node ids combine the element's text offset with its kind; no two math
/// nodes of one tree share both.
impl ExpressionTree for SyntaxNode {
    type Node = SyntaxElement;

    fn post_order(&self, visit: &mut dyn FnMut(&SyntaxElement)) {
        walk(self, visit);
    }

    fn post_order_within(&self, node: &SyntaxElement, visit: &mut dyn FnMut(&SyntaxElement)) {
        match node {
            NodeOrToken::Node(node) => walk(node, visit),
            NodeOrToken::Token(token) => {
                if !token.kind().is_structural() {
                    visit(node);
                }
            }
        }
    }

    fn left_sibling(&self, node: &SyntaxElement) -> Option<SyntaxElement> {
        let mut sibling = node.prev_sibling_or_token();
        while let Some(element) = sibling {
            if !element.kind().is_structural() {
                return Some(element);
            }
            sibling = element.prev_sibling_or_token();
        }
        None
    }

    fn view(&self, node: &SyntaxElement) -> GlyphNode {
        GlyphNode::new(element_id(node), NodeKind::from(node.kind()), raw_glyph(node))
    }
}

fn walk(root: &SyntaxNode, visit: &mut dyn FnMut(&SyntaxElement)) {
    for event in root.preorder_with_tokens() {
        if let WalkEvent::Leave(element) = event {
            if !element.kind().is_structural() {
                visit(&element);
            }
        }
    }
}

/// The id of a tree element.
pub fn element_id(element: &SyntaxElement) -> NodeId {
    let start = u64::from(u32::from(element.text_range().start()));
    NodeId((start << 16) | u64::from(element.kind() as u16))
}

/// A flat run of glyphs with no structure.
///
/// Every node's left sibling is the previous glyph and there is no root, so a
/// run still open after the last glyph is never closed. Ids are positions.
///
/// ```
/// use mathfield_semantics::{Annotations, GlyphSequence, SemanticTokenizer};
///
/// let glyphs = GlyphSequence::typed("a.b+");
/// let result = SemanticTokenizer::default().tokenize(&glyphs, &mut Annotations::new());
///
/// assert_eq!(result.identifiers[0].text(), "a.b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSequence {
    nodes: Vec<GlyphNode>,
}

impl GlyphSequence {
    /// Builds a sequence from `(kind, glyph)` pairs.
    pub fn new<'a>(glyphs: impl IntoIterator<Item = (NodeKind, &'a str)>) -> Self {
        glyphs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, glyph))| GlyphNode::new(NodeId(i as u64), kind, glyph))
            .collect()
    }

    /// The sequence a math field would create if `text` were typed without
    /// any bracket structure.
    pub fn typed(text: &str) -> Self {
        Self::new(Glyphs::new(text).map(|(kind, glyph)| (NodeKind::from(kind), glyph)))
    }

    pub fn nodes(&self) -> &[GlyphNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<GlyphNode> for GlyphSequence {
    fn from_iter<I: IntoIterator<Item = GlyphNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl ExpressionTree for GlyphSequence {
    type Node = usize;

    fn post_order(&self, visit: &mut dyn FnMut(&usize)) {
        for i in 0..self.nodes.len() {
            visit(&i);
        }
    }

    fn post_order_within(&self, node: &usize, visit: &mut dyn FnMut(&usize)) {
        if *node < self.nodes.len() {
            visit(node);
        }
    }

    fn left_sibling(&self, node: &usize) -> Option<usize> {
        node.checked_sub(1)
    }

    fn view(&self, node: &usize) -> GlyphNode {
        self.nodes
            .get(*node)
            .cloned()
            .unwrap_or_else(|| GlyphNode::new(NodeId(*node as u64), NodeKind::Other, ""))
    }
}
