use crate::annotations::{Annotations, TagSet};
use crate::classifier::Classifier;
use crate::node::NodeKind;
use crate::token::TokenizerResult;
use crate::tree::ExpressionTree;
use serde::{Deserialize, Serialize};

/// Knobs for a [`SemanticTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Opening glyph of the brackets whose contents are units, as in `5{cm}`.
    pub unit_delimiter: String,
    pub annotate_units: bool,
    pub annotate_commas: bool,
    /// Prefix of the style class names a renderer derives from tags.
    pub class_prefix: String,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            unit_delimiter: "{".to_string(),
            annotate_units: true,
            annotate_commas: true,
            class_prefix: "mq-".to_string(),
        }
    }
}

/// Finds identifiers, property chains and string literals in an expression
/// tree and tags the nodes they span.
#[derive(Debug, Clone, Default)]
pub struct SemanticTokenizer {
    options: TokenizerOptions,
}

impl SemanticTokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Classifies every node of `tree` in post-order.
    ///
    /// Node ids are only meaningful within one tree snapshot, so
    /// `annotations` is cleared first and afterwards holds the tags of `tree`
    /// alone. Reusing one store across edits is safe.
    pub fn tokenize<T>(&self, tree: &T, annotations: &mut Annotations) -> TokenizerResult
    where
        T: ExpressionTree + ?Sized,
    {
        annotations.clear();
        let mut classifier = Classifier::new(&self.options);
        tree.post_order(&mut |node| {
            let view = tree.view(node);
            let left = tree.left_sibling(node).map(|left| tree.view(&left));
            classifier.step(node.clone(), &view, left.as_ref(), annotations);
        });
        let classification = classifier.finish();

        if self.options.annotate_units {
            for group in &classification.bracket_groups {
                annotate_units(tree, group, annotations);
            }
        }

        log::debug!(
            "found {} identifier(s), {} unit group(s)",
            classification.result.len(),
            classification.bracket_groups.len()
        );
        classification.result
    }
}

/// Tags the contents of a unit bracket.
///
/// Letters and digits that are part of an identifier become units, as does
/// every plain symbol (`%`, `°`).
pub fn annotate_units<T>(tree: &T, bracket: &T::Node, annotations: &mut Annotations)
where
    T: ExpressionTree + ?Sized,
{
    tree.post_order_within(bracket, &mut |node| {
        let view = tree.view(node);
        let is_unit = match view.kind {
            NodeKind::Letter | NodeKind::Digit => annotations.has(view.id, TagSet::IDENTIFIER),
            NodeKind::VanillaSymbol | NodeKind::NonSymbolaSymbol => true,
            NodeKind::DigitGroupingChar | NodeKind::Bracket | NodeKind::Other => false,
        };
        if is_unit {
            annotations.tag(view.id, TagSet::UNIT);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use crate::tree::GlyphSequence;

    #[test]
    fn test_default_options() {
        let options = TokenizerOptions::default();
        assert_eq!(options.unit_delimiter, "{");
        assert!(options.annotate_units);
        assert!(options.annotate_commas);
        assert_eq!(options.class_prefix, "mq-");
    }

    #[test]
    fn test_options_fill_missing_fields() {
        let options: TokenizerOptions =
            serde_json::from_str(r#"{"annotate_commas": false}"#).unwrap();
        assert!(!options.annotate_commas);
        assert_eq!(options.unit_delimiter, "{");
    }

    #[test]
    fn test_tokenize_flat_sequence() {
        let glyphs = GlyphSequence::typed("ab+c,");
        let mut annotations = Annotations::new();
        let result = SemanticTokenizer::default().tokenize(&glyphs, &mut annotations);

        let texts: Vec<_> = result.iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["ab", "c"]);
        assert_eq!(annotations.tags(NodeId(4)), TagSet::COMMA);
    }

    #[test]
    fn test_unit_pass_on_sequence() {
        let glyphs = GlyphSequence::new([(NodeKind::Bracket, "{"), (NodeKind::Letter, "m")]);
        let mut annotations = Annotations::new();
        SemanticTokenizer::default().tokenize(&glyphs, &mut annotations);
        // A flat bracket holds nothing but itself.
        assert!(!annotations.has(NodeId(1), TagSet::UNIT));
        assert!(!annotations.has(NodeId(0), TagSet::UNIT));
    }

    #[test]
    fn test_previous_tags_are_cleared() {
        let tokenizer = SemanticTokenizer::default();
        let mut annotations = Annotations::new();
        tokenizer.tokenize(&GlyphSequence::typed("ab+"), &mut annotations);
        assert!(annotations.has(NodeId(0), TagSet::IDENTIFIER));

        tokenizer.tokenize(&GlyphSequence::typed("1+,"), &mut annotations);
        assert_eq!(annotations.sorted(), vec![(NodeId(2), TagSet::COMMA)]);
    }
}
