use pretty_assertions::assert_eq;
use turtle_logo::{ast::Tree, error::TreeError};

fn tree(description: &str) -> Tree<String> {
    description.parse()
               .unwrap_or_else(|e| panic!("Bad tree description {description:?}: {e}"))
}

fn leaf(value: &str) -> Tree<String> {
    Tree::new(value.to_string())
}

#[test]
fn builds_trees_from_owned_children() {
    let mut root = Tree::with_children("a".to_string(), [leaf("b"), leaf("c")]);
    root.add_child(tree("d(e)"));

    assert_eq!(root.to_string(), "a(b c d(e))");
    assert_eq!(root.child_count(), 3);
    assert!(!root.is_leaf());
    assert_eq!(root.first_child(), Some(&leaf("b")));
    assert_eq!(root.last_child(), Some(&tree("d(e)")));
    assert_eq!(root.child(1).unwrap().value(), "c");
}

#[test]
fn equality_is_structural() {
    assert_eq!(tree("+(a *(b c))"), tree("+(a *(b c))"));
    assert_ne!(tree("+(a b)"), tree("+(b a)"));
    assert_ne!(tree("+(a b)"), tree("+(a)"));
    assert_ne!(tree("+(a b)"), tree("-(a b)"));
    assert_ne!(tree("+(a b(c))"), tree("+(a b)"));
}

#[test]
fn inserts_children_at_an_index() {
    let mut root = tree("r(a c)");
    root.add_child_at(1, leaf("b")).unwrap();
    root.add_child_at(3, leaf("d")).unwrap();
    root.add_child_at(0, leaf("start")).unwrap();
    assert_eq!(root, tree("r(start a b c d)"));

    let err = root.add_child_at(9, leaf("late")).unwrap_err();
    assert!(matches!(err, TreeError::InvalidArgument { .. }));
    assert_eq!(root, tree("r(start a b c d)"));
}

#[test]
fn removes_children_by_index() {
    let mut root = tree("r(a b(x) c)");
    assert_eq!(root.remove_child(1).unwrap(), tree("b(x)"));
    assert_eq!(root, tree("r(a c)"));

    assert_eq!(root.remove_child(2), Err(TreeError::NoSuchElement { index: 2, count: 2 }));
    assert_eq!(root.child(5), Err(TreeError::NoSuchElement { index: 5, count: 2 }));
}

#[test]
fn children_iteration_restarts_on_every_call() {
    let root = tree("r(a b c)");
    let first: Vec<&str> = root.children().map(|c| c.value().as_str()).collect();
    let second: Vec<&str> = root.children().map(|c| c.value().as_str()).collect();
    assert_eq!(first, ["a", "b", "c"]);
    assert_eq!(first, second);
    assert_eq!(leaf("x").children().count(), 0);
}

#[test]
fn cursor_removes_the_last_yielded_child() {
    let mut root = tree("r(keep drop keep drop)");
    let mut cursor = root.children_cursor();

    assert!(matches!(cursor.remove(), Err(TreeError::NoSuchElement { .. })));

    while let Some(child) = cursor.advance() {
        if child.value() == "drop" {
            assert_eq!(cursor.remove().unwrap(), leaf("drop"));
            assert!(cursor.remove().is_err());
        }
    }
    assert_eq!(root, tree("r(keep keep)"));
}

#[test]
fn nested_mutation_through_child_mut() {
    let mut root = tree("r(a b)");
    root.child_mut(1).unwrap().add_child(leaf("c"));
    root.child_mut(0).unwrap().set_value("z".to_string());
    assert_eq!(root, tree("r(z b(c))"));
}

#[test]
fn reads_and_writes_descriptions() {
    for description in ["a", "+(a b)", "program(block(penup) list)", "x(y(z(w)) v)"] {
        assert_eq!(tree(description).to_string(), description);
    }

    // extra spacing is tolerated
    assert_eq!(tree("+( -(*(12 5) /(*(3 4) 6)) 8)"), tree("+(-(*(12 5) /(*(3 4) 6)) 8)"));
}

#[test]
fn rejects_malformed_descriptions() {
    for description in ["", "(a)", "a(b", "a(b))", "a b", "a()(", ")", "a(", "a(b(c", "a(b c", "a(b)c", "a(()"] {
        let result = description.parse::<Tree<String>>();
        assert!(matches!(result, Err(TreeError::InvalidArgument { .. })),
                "{description:?} should be rejected, got {result:?}");
    }
}

#[test]
fn handles_very_deep_trees() {
    let depth = 100_000;
    let description = format!("{}leaf{}", "n(".repeat(depth), ")".repeat(depth));
    let deep = tree(&description);

    let mut levels = 0;
    let mut node = &deep;
    while let Some(child) = node.first_child() {
        assert_eq!(node.child_count(), 1);
        levels += 1;
        node = child;
    }
    assert_eq!(levels, depth);
    assert_eq!(node.value(), "leaf");

    let copy = deep.clone();
    assert!(copy == deep);
    assert_eq!(deep.to_string(), description);
    assert_eq!(deep.map(&mut |value| value.len()).child_count(), 1);
    drop(copy);

    let unclosed = format!("{}leaf", "n(".repeat(depth));
    assert!(matches!(unclosed.parse::<Tree<String>>(), Err(TreeError::InvalidArgument { .. })));
}

#[test]
fn alternate_format_indents_each_level() {
    assert_eq!(format!("{:#}", tree("a(b c(d))")), "a\n  b\n  c\n    d\n");
}

#[test]
fn map_keeps_the_shape() {
    let lengths = tree("abc(de f(ghij))").map(&mut |value| value.len());
    assert_eq!(lengths, Tree::with_children(3, [Tree::new(2), Tree::with_children(1, [Tree::new(4)])]));
}
