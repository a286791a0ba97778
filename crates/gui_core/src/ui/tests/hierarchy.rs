//! Hierarchy and geometry tests

use super::square;
use crate::controls::GuiControl;
use crate::foundation::math::Vector2i;
use crate::ui::{GuiError, GuiTree, Side};

fn tree() -> GuiTree {
    GuiTree::new(Side::Client, GuiControl, square(100))
}

#[test]
fn test_nested_hit_test_finds_deepest_element() {
    let mut tree = tree();
    let root = tree.root();
    let x = tree.insert(root, GuiControl, Vector2i::new(10, 10), square(20)).unwrap();
    let y = tree.insert(x, GuiControl, Vector2i::new(5, 5), square(5)).unwrap();

    assert_eq!(tree.absolute_position(y), Some(Vector2i::new(15, 15)));
    assert_eq!(tree.element_at(Vector2i::new(17, 17)), y);
    assert_eq!(tree.element_at(Vector2i::new(12, 12)), x);
    assert_eq!(tree.element_at(Vector2i::new(90, 90)), root);
}

#[test]
fn test_hit_test_edges_are_inclusive() {
    let mut tree = tree();
    let x = tree.insert(tree.root(), GuiControl, Vector2i::new(10, 10), square(20)).unwrap();

    assert!(tree.point_in_element(x, Vector2i::new(10, 10)));
    assert!(tree.point_in_element(x, Vector2i::new(30, 30)));
    assert!(!tree.point_in_element(x, Vector2i::new(31, 30)));
    assert!(!tree.point_in_element(x, Vector2i::new(9, 15)));
}

#[test]
fn test_overlapping_siblings_first_inserted_wins() {
    let mut tree = tree();
    let root = tree.root();
    let first = tree.insert(root, GuiControl, Vector2i::new(0, 0), square(50)).unwrap();
    let _second = tree.insert(root, GuiControl, Vector2i::new(25, 25), square(50)).unwrap();

    assert_eq!(tree.element_at(Vector2i::new(40, 40)), first);
}

#[test]
fn test_localize_round_trip() {
    let mut tree = tree();
    let x = tree.insert(tree.root(), GuiControl, Vector2i::new(10, 20), square(30)).unwrap();
    let y = tree.insert(x, GuiControl, Vector2i::new(3, 4), square(5)).unwrap();

    let point = Vector2i::new(50, 60);
    let local = tree.localize_global(y, point).unwrap();
    assert_eq!(local, Vector2i::new(37, 36));
    assert_eq!(local + tree.absolute_position(y).unwrap(), point);
    assert_eq!(tree.localize_parent(y, Vector2i::new(3, 4)), Some(Vector2i::zeros()));
}

#[test]
fn test_local_mouse_position_follows_host() {
    let mut tree = tree();
    let x = tree.insert(tree.root(), GuiControl, Vector2i::new(10, 10), square(20)).unwrap();

    tree.mouse_moved(Vector2i::new(14, 18));
    assert_eq!(tree.global_mouse_position(), Vector2i::new(14, 18));
    assert_eq!(tree.local_mouse_position(x), Some(Vector2i::new(4, 8)));
}

#[test]
fn test_add_child_twice_is_idempotent() {
    let mut tree = tree();
    let root = tree.root();
    let a = tree.insert_detached(GuiControl, Vector2i::zeros(), square(10));

    tree.add_child(root, a).unwrap();
    tree.add_child(root, a).unwrap();

    assert_eq!(tree.children(root), &[a]);
    assert_eq!(tree.parent(a), Some(root));
}

#[test]
fn test_add_child_moves_between_parents() {
    let mut tree = tree();
    let root = tree.root();
    let p = tree.insert(root, GuiControl, Vector2i::zeros(), square(50)).unwrap();
    let q = tree.insert(root, GuiControl, Vector2i::new(50, 50), square(50)).unwrap();
    let c = tree.insert(p, GuiControl, Vector2i::zeros(), square(10)).unwrap();

    tree.add_child(q, c).unwrap();

    assert!(tree.children(p).is_empty());
    assert_eq!(tree.children(q), &[c]);
    assert_eq!(tree.parent(c), Some(q));
    assert_eq!(tree.absolute_position(c), Some(Vector2i::new(50, 50)));
}

#[test]
fn test_add_child_rejects_cycles() {
    let mut tree = tree();
    let root = tree.root();
    let a = tree.insert(root, GuiControl, Vector2i::zeros(), square(50)).unwrap();
    let b = tree.insert(a, GuiControl, Vector2i::zeros(), square(10)).unwrap();

    assert_eq!(tree.add_child(b, a), Err(GuiError::CycleDetected { parent: b, child: a }));
    assert_eq!(tree.add_child(a, a), Err(GuiError::CycleDetected { parent: a, child: a }));
    assert_eq!(tree.add_child(a, root), Err(GuiError::RootImmutable));
    assert_eq!(tree.parent(a), Some(root));
}

#[test]
fn test_remove_child_reports_membership() {
    let mut tree = tree();
    let root = tree.root();
    let a = tree.insert(root, GuiControl, Vector2i::zeros(), square(10)).unwrap();
    let stranger = tree.insert_detached(GuiControl, Vector2i::zeros(), square(10));

    assert_eq!(tree.remove_child(root, stranger), Ok(false));
    assert_eq!(tree.remove_child(root, a), Ok(true));
    assert_eq!(tree.parent(a), None);
    assert!(!tree.is_attached(a));
    assert_eq!(tree.remove_child(root, a), Ok(false));
}

#[test]
fn test_clear_children_orphans_children() {
    let mut tree = tree();
    let root = tree.root();
    let a = tree.insert(root, GuiControl, Vector2i::zeros(), square(10)).unwrap();
    let b = tree.insert(root, GuiControl, Vector2i::zeros(), square(10)).unwrap();

    let removed = tree.clear_children(root).unwrap();

    assert_eq!(removed, vec![a, b]);
    assert!(tree.children(root).is_empty());
    assert_eq!(tree.parent(a), None);
    assert_eq!(tree.parent(b), None);
    // Orphans stay alive and can be reattached
    assert!(tree.contains(a));
    tree.add_child(root, b).unwrap();
    assert_eq!(tree.children(root), &[b]);
}

#[test]
fn test_destroy_releases_subtree() {
    let mut tree = tree();
    let root = tree.root();
    let a = tree.insert(root, GuiControl, Vector2i::zeros(), square(50)).unwrap();
    let b = tree.insert(a, GuiControl, Vector2i::zeros(), square(10)).unwrap();
    let keep = tree.insert(root, GuiControl, Vector2i::zeros(), square(10)).unwrap();
    assert_eq!(tree.len(), 4);

    tree.destroy(a).unwrap();

    assert!(!tree.contains(a));
    assert!(!tree.contains(b));
    assert_eq!(tree.children(root), &[keep]);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.destroy(a), Err(GuiError::UnknownElement(a)));
    assert_eq!(tree.destroy(root), Err(GuiError::RootImmutable));
}

#[test]
fn test_top_parent_and_side() {
    let mut tree = GuiTree::new(Side::Server, GuiControl, square(100));
    let root = tree.root();
    let a = tree.insert(root, GuiControl, Vector2i::zeros(), square(10)).unwrap();
    let loose = tree.insert_detached(GuiControl, Vector2i::zeros(), square(10));

    assert!(tree.is_top_parent(root));
    assert!(!tree.is_top_parent(a));
    assert_eq!(tree.top_parent(a), Some(root));
    assert_eq!(tree.side_of(a), Some(Side::Server));
    assert_eq!(tree.top_parent(loose), None);
    assert_eq!(tree.side_of(loose), None);
}

#[test]
fn test_root_position_counts_in_absolute_position() {
    let mut tree = tree();
    let root = tree.root();
    tree.set_position(root, Vector2i::new(5, 5)).unwrap();
    let a = tree.insert(root, GuiControl, Vector2i::new(10, 10), square(10)).unwrap();

    assert_eq!(tree.absolute_position(root), Some(Vector2i::new(5, 5)));
    assert_eq!(tree.absolute_position(a), Some(Vector2i::new(15, 15)));
    assert_eq!(tree.element_at(Vector2i::new(16, 16)), a);
}

#[test]
fn test_positions_near_integer_limits_saturate() {
    let mut tree = tree();
    let root = tree.root();
    let far = tree
        .insert(root, GuiControl, Vector2i::new(i32::MAX - 10, i32::MAX - 10), square(5))
        .unwrap();
    let beyond = tree.insert(far, GuiControl, square(20), square(5)).unwrap();

    assert_eq!(tree.absolute_position(beyond), Some(Vector2i::new(i32::MAX, i32::MAX)));
    assert_eq!(tree.localize_global(beyond, Vector2i::new(i32::MIN, 0)), Some(Vector2i::new(i32::MIN, -i32::MAX)));
    assert!(tree.point_in_element(far, Vector2i::new(i32::MAX - 5, i32::MAX - 5)));
    assert_eq!(tree.element_at(Vector2i::new(i32::MAX - 5, i32::MAX - 5)), far);
}
