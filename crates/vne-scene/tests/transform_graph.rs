//! Transform hierarchy behaviour through the public API.

use approx::assert_relative_eq;
use vne_core::Error;
use vne_math::{Mat4, Vec3};
use vne_scene::TransformGraph;

fn tp() -> Mat4 {
    Mat4::translate_xyz(1.0, 2.0, 3.0) * Mat4::rotate_y(0.5)
}

fn tc() -> Mat4 {
    Mat4::rotate_x(-0.25) * Mat4::scale_xyz(2.0, 1.0, 0.5)
}

#[test]
fn test_fresh_node_is_identity_root_leaf() {
    let mut g = TransformGraph::new();
    let n = g.create_node();
    assert!(g.is_root(n).unwrap());
    assert!(g.is_leaf(n).unwrap());
    assert_eq!(g.parent(n).unwrap(), None);
    assert_eq!(g.model_matrix(n).unwrap(), Mat4::IDENTITY);
    assert_eq!(g.num_children(n).unwrap(), 0);
}

#[test]
fn test_set_parent_composes_exactly() {
    let mut g = TransformGraph::new();
    let parent = g.create_node_with(tp());
    let child = g.create_node_with(tc());
    g.set_parent(child, Some(parent)).unwrap();

    assert_eq!(g.parent(child).unwrap(), Some(parent));
    assert_eq!(g.num_children(parent).unwrap(), 1);
    assert_eq!(g.children(parent).unwrap(), vec![child]);
    assert!(!g.is_root(child).unwrap());
    assert!(!g.is_leaf(parent).unwrap());
    assert_eq!(g.root_transform(child).unwrap(), tp());
    assert_eq!(g.model_matrix(child).unwrap(), tp() * tc());
}

#[test]
fn test_remove_from_parent() {
    let mut g = TransformGraph::new();
    let parent = g.create_node();
    let child = g.create_node();
    g.set_parent(child, Some(parent)).unwrap();
    g.remove_from_parent(child).unwrap();

    assert_eq!(g.parent(child).unwrap(), None);
    assert_eq!(g.num_children(parent).unwrap(), 0);

    // No-op on a root
    g.remove_from_parent(child).unwrap();
    assert!(g.is_root(child).unwrap());
}

#[test]
fn test_remove_child_leaves_cache_stale() {
    let mut g = TransformGraph::new();
    let parent = g.create_node_with(Mat4::translate_xyz(5.0, 0.0, 0.0));
    let child = g.create_node();
    g.set_parent(child, Some(parent)).unwrap();

    assert!(g.remove_child(parent, child).unwrap());
    assert!(g.is_root(child).unwrap());
    assert_eq!(g.root_transform(child).unwrap().translation(), Vec3::new(5.0, 0.0, 0.0));

    g.update_root_transform(child).unwrap();
    assert_eq!(g.root_transform(child).unwrap(), Mat4::IDENTITY);
}

#[test]
fn test_removing_parent_orphans_children() {
    let mut g = TransformGraph::new();
    let grandparent = g.create_node();
    let parent = g.create_node_with(tp());
    let child = g.create_node_with(tc());
    g.set_parent(parent, Some(grandparent)).unwrap();
    g.set_parent(child, Some(parent)).unwrap();
    let world = g.model_matrix(child).unwrap();

    g.remove_node(parent).unwrap();

    assert!(g.contains(child));
    assert_eq!(g.parent(child).unwrap(), None);
    assert_eq!(g.local_transform(child).unwrap(), tc());
    assert_eq!(g.model_matrix(child).unwrap(), world);
    assert_eq!(g.num_children(grandparent).unwrap(), 0);
    assert_eq!(g.len(), 2);

    assert!(matches!(
        g.parent(parent),
        Err(Error::NodeNotFound { index, .. }) if index == parent.index()
    ));
    assert!(g.remove_node(parent).is_err());
}

#[test]
fn test_set_parent_none_resets_root() {
    let mut g = TransformGraph::new();
    let parent = g.create_node_with(tp());
    let child = g.create_node_with(tc());
    g.set_parent(child, Some(parent)).unwrap();
    g.set_parent(child, None).unwrap();

    assert!(g.is_root(child).unwrap());
    assert_eq!(g.num_children(parent).unwrap(), 0);
    assert_eq!(g.model_matrix(child).unwrap(), tc());
}

#[test]
fn test_reparent_moves_between_parents() {
    let mut g = TransformGraph::new();
    let a = g.create_node_with(Mat4::translate_xyz(1.0, 0.0, 0.0));
    let b = g.create_node_with(Mat4::translate_xyz(0.0, 1.0, 0.0));
    let c = g.create_node();
    g.set_parent(c, Some(a)).unwrap();
    g.set_parent(c, Some(b)).unwrap();

    assert_eq!(g.num_children(a).unwrap(), 0);
    assert_eq!(g.children(b).unwrap(), vec![c]);
    assert_eq!(g.model_matrix(c).unwrap().translation(), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_cycles_are_rejected() {
    let mut g = TransformGraph::new();
    let a = g.create_node();
    let b = g.create_node();
    let c = g.create_node();
    g.set_parent(b, Some(a)).unwrap();
    g.set_parent(c, Some(b)).unwrap();

    assert_eq!(
        g.set_parent(a, Some(c)),
        Err(Error::cyclic_parent(a.index(), c.index()))
    );
    assert!(g.set_parent(a, Some(a)).is_err_and(|e| e.is_graph_error()));

    // Nothing moved
    assert!(g.is_root(a).unwrap());
    assert_eq!(g.parent(c).unwrap(), Some(b));
}

#[test]
fn test_compose_transform_premultiplies() {
    let mut g = TransformGraph::new();
    let n = g.create_node_with(tc());
    let offset = Mat4::translate_xyz(0.0, 0.0, -4.0);
    g.compose_transform(n, &offset).unwrap();
    assert_eq!(g.local_transform(n).unwrap(), offset * tc());
}

#[test]
fn test_ancestor_change_needs_refresh() {
    let mut g = TransformGraph::new();
    let root = g.create_node();
    let mid = g.create_node_with(Mat4::translate_xyz(0.0, 1.0, 0.0));
    let leaf = g.create_node_with(Mat4::translate_xyz(0.0, 0.0, 1.0));
    g.set_parent(mid, Some(root)).unwrap();
    g.set_parent(leaf, Some(mid)).unwrap();

    g.set_local_transform(root, Mat4::translate_xyz(10.0, 0.0, 0.0)).unwrap();
    let stale = g.model_matrix(leaf).unwrap().translation();
    assert_eq!(stale, Vec3::new(0.0, 1.0, 1.0));

    assert_eq!(g.update_subtree(root).unwrap(), 3);
    let fresh = g.model_matrix(leaf).unwrap().translation();
    assert_eq!(fresh, Vec3::new(10.0, 1.0, 1.0));
}

#[test]
fn test_deep_chain_world_point() {
    let mut g = TransformGraph::new();
    let step = Mat4::rotate_z(std::f32::consts::FRAC_PI_2) * Mat4::translate_xyz(1.0, 0.0, 0.0);
    let mut prev = g.create_node_with(step);
    for _ in 0..3 {
        let next = g.create_node_with(step);
        g.set_parent(next, Some(prev)).unwrap();
        prev = next;
    }
    // Four quarter turns bring the point back to the start
    let p = g.model_matrix(prev).unwrap().transform_point(Vec3::ZERO);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
}

#[test]
fn test_stale_handles_fail_everywhere() {
    let mut g = TransformGraph::new();
    let live = g.create_node();
    let dead = g.create_node();
    g.remove_node(dead).unwrap();

    assert!(g.set_local_transform(dead, Mat4::IDENTITY).is_err());
    assert!(g.set_parent(live, Some(dead)).is_err());
    assert!(g.set_parent(dead, Some(live)).is_err());
    assert!(g.add_child(live, dead).is_err());
    assert!(g.update_subtree(dead).is_err());
    assert!(g.children(dead).is_err());
    assert_eq!(g.iter().collect::<Vec<_>>(), vec![live]);
}

#[test]
fn test_add_child_rejects_cycles() {
    let mut g = TransformGraph::new();
    let a = g.create_node();
    let b = g.create_node();
    g.set_parent(b, Some(a)).unwrap();

    assert_eq!(g.add_child(b, a), Err(Error::cyclic_parent(a.index(), b.index())));
    assert!(g.add_child(a, a).is_err_and(|e| e.is_graph_error()));
    assert_eq!(g.children(a).unwrap(), vec![b]);
    assert!(g.is_leaf(b).unwrap());

    // A loop through membership-only links is caught too
    let c = g.create_node();
    g.add_child(b, c).unwrap();
    assert!(g.add_child(c, a).is_err());
    assert!(g.set_parent(a, Some(c)).is_err());

    assert_eq!(g.update_subtree(a).unwrap(), 3);
}

#[test]
fn test_membership_link_is_refreshed_once() {
    let mut g = TransformGraph::new();
    let root = g.create_node();
    let left = g.create_node();
    let right = g.create_node();
    let shared = g.create_node();
    g.set_parent(left, Some(root)).unwrap();
    g.set_parent(right, Some(root)).unwrap();
    g.set_parent(shared, Some(left)).unwrap();
    g.add_child(right, shared).unwrap();

    assert_eq!(g.update_subtree(root).unwrap(), 4);
    assert_eq!(g.parent(shared).unwrap(), Some(left));
}

#[test]
fn test_removed_node_leaves_no_dead_ids() {
    let mut g = TransformGraph::new();
    let p = g.create_node();
    let c = g.create_node();
    let d = g.create_node();
    g.add_child(p, c).unwrap();
    g.set_parent(d, Some(p)).unwrap();

    g.remove_node(c).unwrap();

    assert_eq!(g.children(p).unwrap(), vec![d]);
    assert_eq!(g.num_children(p).unwrap(), 1);
    g.remove_from_parent(d).unwrap();
    assert!(g.is_leaf(p).unwrap());

    g.set_parent(d, Some(p)).unwrap();
    g.set_local_transform(p, Mat4::translate_uniform(1.0)).unwrap();
    assert_eq!(g.update_subtree(p).unwrap(), 2);
    assert_eq!(g.root_transform(d).unwrap().translation(), Vec3::ONE);
}
