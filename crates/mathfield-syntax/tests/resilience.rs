use mathfield_syntax::{BuildError, SyntaxKind, TreeBuilder};

#[test]
fn test_unclosed_bracket_still_reports_first_error() {
    let mut builder = TreeBuilder::new();
    builder.typed("f(x");
    builder.typed(")]");

    // The bracket was closed by the second call, so the first problem is the stray ']'.
    assert_eq!(
        builder.finish().unwrap_err(),
        BuildError::UnbalancedBracket { found: ']' }
    );
}

#[test]
fn test_bracket_left_open_inside_block_is_closed_there() {
    let mut builder = TreeBuilder::new();
    builder.sqrt(|b| {
        b.typed("(a");
    });
    builder.letter('b');

    match builder.finish() {
        Err(BuildError::UnclosedBracket { open }) => assert_eq!(open, '('),
        other => panic!("Expected unclosed bracket, got {:?}", other),
    }
}

#[test]
fn test_deeply_nested_brackets() {
    let depth = 200;
    let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let mut builder = TreeBuilder::new();
    builder.typed(&input);
    let tree = builder.finish().unwrap();

    let root = tree.syntax();
    assert_eq!(root.kind(), SyntaxKind::Root);
    let brackets = root
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::Bracket)
        .count();
    assert_eq!(brackets, depth);
}

#[test]
fn test_latex_covers_every_token() {
    let mut builder = TreeBuilder::new();
    builder.typed("\"a b\", 50% of $x");
    let tree = builder.finish().unwrap();

    let root = tree.syntax();
    assert_eq!(tree.latex(), r#""ab",50\%of\$x"#);
    assert_eq!(u32::from(root.text_range().len()) as usize, tree.latex().len());
}
