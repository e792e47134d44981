#![no_main]
use libfuzzer_sys::fuzz_target;
use mathfield_semantics::{Annotations, GlyphSequence, SemanticTokenizer};
use mathfield_syntax::TreeBuilder;

fuzz_target!(|data: &[u8]| {
    // Typed text is whatever the keyboard sends, so take bytes lossily.
    let text = String::from_utf8_lossy(data);
    let tokenizer = SemanticTokenizer::default();

    let mut builder = TreeBuilder::new();
    builder.typed(&text);
    if let Ok(tree) = builder.finish() {
        let mut annotations = Annotations::new();
        let result = tokenizer.tokenize(&tree.syntax(), &mut annotations);
        assert!(result.iter().all(|identifier| !identifier.is_empty()));
    }

    let _ = tokenizer.tokenize(&GlyphSequence::typed(&text), &mut Annotations::new());
});
