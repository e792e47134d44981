use expect_test::{expect, Expect};
use mathfield_semantics::{parse_semantic_types, Annotations, ExpressionTree};
use mathfield_syntax::TreeBuilder;

/// The identifiers, then every tagged node with its class names.
fn check(text: &str, expect: Expect) {
    let mut builder = TreeBuilder::new();
    builder.typed(text);
    let tree = builder.finish().unwrap();
    let root = tree.syntax();

    let mut annotations = Annotations::new();
    let result = parse_semantic_types(&root, &mut annotations);

    let mut actual = result.to_string();
    actual.push_str("--\n");
    root.post_order(&mut |node| {
        let view = root.view(node);
        let classes = annotations.tags(view.id).class_names("mq-");
        if !classes.is_empty() {
            actual.push_str(&format!("{} {}\n", view.glyph, classes.join(" ")));
        }
    });
    expect.assert_eq(&actual);
}

#[test]
fn test_quoted_literal() {
    check(
        "Let\"a\"x",
        expect![[r#"
            L:letter/object e:letter/object t:letter/object
            ":quote/literal a:letter/literal ":quote/literal
            x:letter/object
            --
            L mq-identifier mq-identifier-object
            e mq-identifier mq-identifier-object
            t mq-identifier mq-identifier-object
            " mq-literal
            a mq-literal
            " mq-literal
            x mq-identifier mq-identifier-object
        "#]],
    );
}

#[test]
fn test_mixed_expression() {
    check(
        "f.x+\"hi\",5{cm}",
        expect![[r#"
            f:letter/object .:period/period x:letter/property
            ":quote/literal h:letter/literal i:letter/literal ":quote/literal
            c:letter/object m:letter/object
            --
            f mq-identifier mq-identifier-object
            . mq-identifier mq-identifier-period
            x mq-identifier mq-identifier-property
            " mq-literal
            h mq-literal
            i mq-literal
            " mq-literal
            , mq-comma
            c mq-identifier mq-identifier-object mq-units
            m mq-identifier mq-identifier-object mq-units
        "#]],
    );
}

#[test]
fn test_numbers_only() {
    check(
        "3.14+2",
        expect![[r#"
            --
        "#]],
    );
}
