//! Tests for Tree: creation, counting, separator handling and removal

use named_tree::util::testing;
use named_tree::{NodeId, Tree, TreeError};
use rstest::{fixture, rstest};

#[fixture]
fn tree() -> Tree<i32> {
    testing::init_test_setup();
    Tree::new()
}

// a
// ├── x
// │   └── leaf
// └── y
// b
// └── z
#[fixture]
fn populated() -> (Tree<i32>, Vec<NodeId>) {
    testing::init_test_setup();
    let mut tree = Tree::new();
    let a = tree.create_with("a", 1).unwrap();
    let b = tree.create_with("b", 2).unwrap();
    let x = tree.children_mut(a).unwrap().create_with("x", 3).unwrap();
    let y = tree.children_mut(a).unwrap().create_with("y", 4).unwrap();
    let z = tree.children_mut(b).unwrap().create_with("z", 5).unwrap();
    let leaf = tree.children_mut(x).unwrap().create_with("leaf", 6).unwrap();
    (tree, vec![a, b, x, y, z, leaf])
}

// ============================================================
// Creation
// ============================================================

#[rstest]
fn given_unique_names_when_creating_then_count_matches_and_all_contained(mut tree: Tree<i32>) {
    let names = ["alpha", "beta", "gamma", "delta"];
    for (i, name) in names.iter().enumerate() {
        tree.create_with(name, i as i32).unwrap();
    }

    assert_eq!(tree.count(), names.len());
    for name in names {
        assert!(tree.nodes().contains(name), "missing {}", name);
    }
}

#[rstest]
fn given_existing_name_when_creating_then_duplicate_name_and_count_unchanged(mut tree: Tree<i32>) {
    tree.create_with("a", 1).unwrap();

    let result = tree.create_with("a", 2);

    assert!(matches!(result, Err(TreeError::DuplicateName(ref name)) if name == "a"));
    assert_eq!(tree.count(), 1);
    assert_eq!(*tree.get_by_path("a").unwrap().value(), 1);
}

#[rstest]
fn given_empty_name_when_creating_then_invalid_name(mut tree: Tree<i32>) {
    let result = tree.create_with("", 1);

    assert!(matches!(result, Err(TreeError::InvalidName)));
    assert!(tree.is_empty());
}

#[rstest]
fn given_default_value_when_creating_then_node_holds_default() {
    let mut tree: Tree<String> = Tree::new();
    let id = tree.create("a").unwrap();

    assert_eq!(tree.value(id), Some(&String::new()));
}

#[rstest]
fn given_same_name_under_different_parents_when_creating_then_both_succeed(
    populated: (Tree<i32>, Vec<NodeId>),
) {
    let (mut tree, ids) = populated;
    let (a, b) = (ids[0], ids[1]);

    tree.children_mut(a).unwrap().create_with("shared", 10).unwrap();
    tree.children_mut(b).unwrap().create_with("shared", 20).unwrap();

    assert_eq!(*tree.get_by_path("a/shared").unwrap().value(), 10);
    assert_eq!(*tree.get_by_path("b/shared").unwrap().value(), 20);
}

// ============================================================
// Counting
// ============================================================

#[rstest]
fn given_nested_nodes_when_counting_then_only_root_level_is_counted(
    populated: (Tree<i32>, Vec<NodeId>),
) {
    let (tree, _) = populated;

    assert_eq!(tree.count(), 2);
    assert_eq!(tree.nodes().count(), 2);
    assert_eq!(tree.len(), 6);
}

// ============================================================
// Path separator
// ============================================================

#[rstest]
fn given_custom_separator_when_resolving_then_separator_is_used() {
    let mut tree: Tree<()> = Tree::with_separator('.');
    let a = tree.create("a").unwrap();
    let x = tree.children_mut(a).unwrap().create("x").unwrap();

    assert_eq!(tree.node(x).unwrap().full_name(), "a.x");
    assert_eq!(tree.get_by_path("a.x").unwrap().id(), x);
    assert!(tree.find_by_path("a/x").unwrap().is_none());
}

#[rstest]
fn given_changed_separator_when_computing_full_name_then_old_strings_are_kept(
    populated: (Tree<i32>, Vec<NodeId>),
) {
    let (mut tree, ids) = populated;
    let leaf = ids[5];
    let before = tree.node(leaf).unwrap().full_name();

    tree.set_path_separator(':');
    let after = tree.node(leaf).unwrap().full_name();

    assert_eq!(before, "a/x/leaf");
    assert_eq!(after, "a:x:leaf");
    assert_eq!(tree.get_by_path("a:x:leaf").unwrap().id(), leaf);
    assert!(tree.find_by_path("a/x/leaf").unwrap().is_none());
}

// ============================================================
// Removal
// ============================================================

#[rstest]
fn given_subtree_when_removing_then_subtree_unreachable_and_siblings_untouched(
    populated: (Tree<i32>, Vec<NodeId>),
) {
    let (mut tree, ids) = populated;
    let (a, b, x, y, z, leaf) = (ids[0], ids[1], ids[2], ids[3], ids[4], ids[5]);

    let removed = tree.children_mut(a).unwrap().remove("x");

    assert_eq!(removed, Some(3));
    assert!(!tree.contains_node(x));
    assert!(!tree.contains_node(leaf));
    assert!(tree.find_by_path("a/x").unwrap().is_none());
    let remaining: Vec<NodeId> = tree.descendants().map(|node| node.id()).collect();
    assert_eq!(remaining, vec![a, b, y, z]);
}

#[rstest]
fn given_unknown_name_when_removing_then_nothing_changes(populated: (Tree<i32>, Vec<NodeId>)) {
    let (mut tree, _) = populated;

    assert_eq!(tree.nodes_mut().remove("missing"), None);
    assert_eq!(tree.len(), 6);
}

#[rstest]
fn given_node_of_other_collection_when_removing_by_node_then_refused(
    populated: (Tree<i32>, Vec<NodeId>),
) {
    let (mut tree, ids) = populated;
    let z = ids[4];

    assert_eq!(tree.nodes_mut().remove_node(z), None);
    assert!(tree.contains_node(z));

    assert_eq!(tree.children_mut(ids[1]).unwrap().remove_node(z), Some(5));
    assert!(!tree.contains_node(z));
}

#[rstest]
fn given_removed_node_when_accessing_children_then_unknown_node(
    populated: (Tree<i32>, Vec<NodeId>),
) {
    let (mut tree, ids) = populated;
    let a = ids[0];
    tree.remove(a);

    assert!(matches!(tree.children_mut(a), Err(TreeError::UnknownNode(id)) if id == a));
    assert!(tree.children(a).is_none());
    assert!(matches!(tree.set_value(a, 1), Err(TreeError::UnknownNode(_))));
}

#[rstest]
fn given_removed_name_when_recreating_then_new_node_is_empty(
    populated: (Tree<i32>, Vec<NodeId>),
) {
    let (mut tree, ids) = populated;
    let a = ids[0];
    tree.nodes_mut().remove("a");

    let recreated = tree.create_with("a", 100).unwrap();

    assert_ne!(recreated, a);
    assert!(tree.node(recreated).unwrap().is_leaf());
    assert_eq!(tree.nodes().position("a"), Some(1));
}

#[rstest]
fn given_collection_when_clearing_then_all_subtrees_removed(populated: (Tree<i32>, Vec<NodeId>)) {
    let (mut tree, ids) = populated;

    tree.children_mut(ids[0]).unwrap().clear();
    assert_eq!(tree.len(), 3);

    tree.nodes_mut().clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

// ============================================================
// Values
// ============================================================

#[rstest]
fn given_node_when_mutating_value_then_value_changes(populated: (Tree<i32>, Vec<NodeId>)) {
    let (mut tree, ids) = populated;
    let leaf = ids[5];

    *tree.value_mut(leaf).unwrap() += 1;
    tree[leaf] *= 2;

    assert_eq!(tree[leaf], 14);
    assert_eq!(tree.set_value(leaf, 0).unwrap(), 14);
    assert_eq!(*tree.get_by_path("a/x/leaf").unwrap().value(), 0);
}
