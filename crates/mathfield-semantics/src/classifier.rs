//! The classification state machine.
//!
//! [`Classifier`] consumes nodes one at a time in post-order, together with
//! each node's left sibling, and groups them into [`Identifier`]s. It knows
//! nothing about trees, which keeps it testable with synthetic node
//! sequences.

use crate::annotations::{Annotations, TagSet};
use crate::node::{GlyphNode, NodeKind};
use crate::token::{BelongsTo, Identifier, Token, TokenizerResult};
use crate::tokenizer::TokenizerOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierState {
    None,
    Object,
    Property,
    Period,
    Literal,
}

impl ClassifierState {
    pub fn is_active(self) -> bool {
        self != ClassifierState::None
    }

    fn belongs_to(self) -> BelongsTo {
        match self {
            ClassifierState::None => BelongsTo::None,
            ClassifierState::Object => BelongsTo::Object,
            ClassifierState::Property => BelongsTo::Property,
            ClassifierState::Period => BelongsTo::Period,
            ClassifierState::Literal => BelongsTo::Literal,
        }
    }

    fn tags(self) -> TagSet {
        match self {
            ClassifierState::None => TagSet::empty(),
            ClassifierState::Object => TagSet::IDENTIFIER | TagSet::OBJECT,
            ClassifierState::Property => TagSet::IDENTIFIER | TagSet::PROPERTY,
            ClassifierState::Period => TagSet::IDENTIFIER | TagSet::PERIOD,
            ClassifierState::Literal => TagSet::LITERAL,
        }
    }
}

/// Output of one classification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<N> {
    pub result: TokenizerResult,
    /// Unit-brace brackets seen during the pass, in traversal order.
    pub bracket_groups: Vec<N>,
}

/// Classifies a post-order stream of nodes.
///
/// `N` is whatever handle the caller uses for tree nodes; the classifier only
/// stores the handles of unit-brace brackets so the caller can revisit them.
pub struct Classifier<'o, N> {
    options: &'o TokenizerOptions,
    state: ClassifierState,
    buffer: Vec<Token>,
    identifiers: Vec<Identifier>,
    bracket_groups: Vec<N>,
}

impl<'o, N> Classifier<'o, N> {
    pub fn new(options: &'o TokenizerOptions) -> Self {
        Self {
            options,
            state: ClassifierState::None,
            buffer: Vec::new(),
            identifiers: Vec::new(),
            bracket_groups: Vec::new(),
        }
    }

    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Feeds the next node in post-order.
    ///
    /// `left` is the node's left sibling, if it has one. Tags for the node are
    /// written to `annotations`.
    pub fn step(
        &mut self,
        handle: N,
        node: &GlyphNode,
        left: Option<&GlyphNode>,
        annotations: &mut Annotations,
    ) {
        let starts_identifier = node.is_identifier_start();
        let mut closes_literal = false;

        if starts_identifier && self.state == ClassifierState::None {
            self.open(ClassifierState::Object, node);
        } else if starts_identifier && self.state == ClassifierState::Period {
            self.transition(ClassifierState::Property, node);
        } else if node.is_period()
            && matches!(
                self.state,
                ClassifierState::Object | ClassifierState::Property
            )
        {
            self.transition(ClassifierState::Period, node);
        } else if node.is_quote() && self.state != ClassifierState::Literal {
            // An opening quote ends whatever identifier precedes it.
            self.close();
            self.open(ClassifierState::Literal, node);
        } else if node.is_quote() {
            closes_literal = true;
        } else if self.state == ClassifierState::Literal && !node.can_continue_identifier() {
            self.close();
        } else if self.state.is_active()
            && (!left.is_some_and(GlyphNode::is_valid_prior_token)
                || !node.can_continue_identifier())
        {
            self.close();
        }

        // A glyph that ended the previous run may start the next one.
        if starts_identifier && self.state == ClassifierState::None {
            self.open(ClassifierState::Object, node);
        }

        if self.state.is_active() {
            self.buffer.push(Token {
                id: node.id,
                text: node.token_text().to_string(),
                kind: node.token_type(),
                belongs_to: self.state.belongs_to(),
            });
            annotations.tag(node.id, self.state.tags());
        }

        if closes_literal {
            self.close();
        }

        if node.kind == NodeKind::Bracket && node.glyph == self.options.unit_delimiter {
            self.bracket_groups.push(handle);
        }

        if self.options.annotate_commas && node.is_comma() {
            annotations.tag(node.id, TagSet::COMMA);
        }
    }

    /// Ends the pass.
    ///
    /// A run still open at this point has not been closed by any node and is
    /// dropped, not flushed into the result.
    pub fn finish(self) -> Classification<N> {
        if !self.buffer.is_empty() {
            log::debug!(
                "dropping unterminated {:?} run of {} token(s)",
                self.state,
                self.buffer.len()
            );
        }
        Classification {
            result: TokenizerResult {
                identifiers: self.identifiers,
            },
            bracket_groups: self.bracket_groups,
        }
    }

    fn open(&mut self, state: ClassifierState, node: &GlyphNode) {
        self.buffer.clear();
        self.transition(state, node);
    }

    fn transition(&mut self, state: ClassifierState, node: &GlyphNode) {
        log::trace!("{:?} -> {:?} at {}", self.state, state, node.id);
        self.state = state;
    }

    fn close(&mut self) {
        let tokens = std::mem::take(&mut self.buffer);
        if !tokens.is_empty() {
            self.identifiers.push(Identifier { tokens });
        }
        self.state = ClassifierState::None;
    }
}
