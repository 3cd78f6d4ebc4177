//! Arena of transform nodes.
//!
//! Each node holds a local transform and a cached `root_transform`: the
//! accumulated parent-to-world matrix, not including the node's own local
//! transform. The world (model) matrix is `root_transform * local`.
//!
//! The cache is refreshed when the parent chain changes through
//! [`TransformGraph::set_parent`], or on request through
//! [`TransformGraph::update_root_transform`] and
//! [`TransformGraph::update_subtree`]. Changing an ancestor's local
//! transform does not touch its descendants.
//!
//! Nodes are addressed by [`NodeId`], an index plus a generation. Removing a
//! node bumps the generation of its slot, so every id handed out for it
//! fails with [`Error::NodeNotFound`] afterwards.

use std::fmt;

use tracing::{debug, trace, warn};
use vne_core::{Error, Result};
use vne_math::Mat4;

/// Generation-checked handle to a node in a [`TransformGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index in the owning graph.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this id was issued.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
struct Node {
    local: Mat4,
    root: Mat4,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(local: Mat4) -> Self {
        Self {
            local,
            root: Mat4::IDENTITY,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Owner of every transform node and of the links between them.
///
/// Invariants kept by every mutator except [`add_child`](Self::add_child):
///
/// - a node is a root iff its parent is `None`
/// - `parent(c) == Some(p)` iff `children(p)` contains `c`
/// - children are kept in insertion order, without duplicates
/// - children lists never form a cycle, [`add_child`](Self::add_child) included
///
/// # Example
///
/// ```rust
/// use vne_math::Mat4;
/// use vne_scene::TransformGraph;
///
/// let mut graph = TransformGraph::new();
/// let arm = graph.create_node_with(Mat4::translate_xyz(0.0, 2.0, 0.0));
/// let hand = graph.create_node_with(Mat4::translate_xyz(1.0, 0.0, 0.0));
/// graph.set_parent(hand, Some(arm))?;
///
/// let world = graph.model_matrix(hand)?;
/// assert_eq!(world.translation(), vne_math::Vec3::new(1.0, 2.0, 0.0));
/// # Ok::<(), vne_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct TransformGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl TransformGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the graph has no live nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `id` refers to a live node of this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    /// Iterates over the ids of all live nodes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.node.as_ref().map(|_| NodeId {
                index: index as u32,
                generation: slot.generation,
            })
        })
    }

    /// Creates an identity-transformed root node.
    pub fn create_node(&mut self) -> NodeId {
        self.create_node_with(Mat4::IDENTITY)
    }

    /// Creates a root node with the given local transform.
    pub fn create_node_with(&mut self, local: Mat4) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(Node::new(local));
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(Node::new(local)),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    /// Destroys a node.
    ///
    /// Its children become roots; their local and cached transforms are left
    /// as they are. The node is also removed from every children list it
    /// appears in, its parent's included.
    /// `id` and every copy of it become stale.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        self.node_mut_logged(id, "remove_node")?;
        let slot = &mut self.slots[id.index as usize];
        let Some(node) = slot.node.take() else {
            return Err(Error::node_not_found(id.index, id.generation));
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;

        for &child in &node.children {
            if let Ok(c) = self.node_mut(child) {
                if c.parent == Some(id) {
                    c.parent = None;
                }
            }
        }
        // Membership added through `add_child` alone may list it anywhere
        for other in self.slots.iter_mut().filter_map(|slot| slot.node.as_mut()) {
            other.children.retain(|&c| c != id);
        }
        debug!(
            node = %id,
            orphaned = node.children.len(),
            "Removed transform node"
        );
        Ok(())
    }

    /// Replaces the local transform. Cached transforms are not refreshed.
    pub fn set_local_transform(&mut self, id: NodeId, local: Mat4) -> Result<()> {
        self.node_mut_logged(id, "set_local_transform")?.local = local;
        Ok(())
    }

    /// Pre-multiplies `m` onto the local transform: `local = m * local`.
    pub fn compose_transform(&mut self, id: NodeId, m: &Mat4) -> Result<()> {
        let node = self.node_mut_logged(id, "compose_transform")?;
        node.local = *m * node.local;
        Ok(())
    }

    /// Local transform, relative to the parent.
    #[inline]
    pub fn local_transform(&self, id: NodeId) -> Result<Mat4> {
        Ok(self.node(id)?.local)
    }

    /// Cached accumulated transform of the ancestors.
    #[inline]
    pub fn root_transform(&self, id: NodeId) -> Result<Mat4> {
        Ok(self.node(id)?.root)
    }

    /// World transform: `root_transform * local_transform`.
    ///
    /// Reads the cache only; the parent chain is not walked.
    #[inline]
    pub fn model_matrix(&self, id: NodeId) -> Result<Mat4> {
        let node = self.node(id)?;
        Ok(node.root * node.local)
    }

    /// Parent of the node, `None` for a root.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Attaches `id` under `parent`, or makes it a root when `parent` is `None`.
    ///
    /// The node leaves its previous parent first. Attaching refreshes
    /// `root_transform` from the new parent's model matrix; detaching resets
    /// it to identity. Reattaching to the current parent keeps the node's
    /// position among its siblings.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either id is stale
    /// - [`Error::CyclicParent`] if `parent` is `id` or can be reached from
    ///   it through children lists; nothing is modified in that case
    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) -> Result<()> {
        let old = self.node_mut_logged(id, "set_parent")?.parent;
        if let Some(p) = parent {
            self.node_mut_logged(p, "set_parent")?;
            if self.reaches(id, p) {
                return Err(Error::cyclic_parent(id.index, p.index));
            }
        }

        if let Some(old) = old.filter(|&o| Some(o) != parent) {
            if let Ok(o) = self.node_mut(old) {
                o.children.retain(|&c| c != id);
            }
            debug!(node = %id, parent = %old, "Detached transform node");
        }

        self.node_mut(id)?.parent = parent;
        match parent {
            Some(p) => {
                self.add_child(p, id)?;
                self.update_root_transform(id)?;
                debug!(node = %id, parent = %p, "Attached transform node");
            }
            None => self.node_mut(id)?.root = Mat4::IDENTITY,
        }
        Ok(())
    }

    /// Registers `child` in the children of `parent`.
    ///
    /// Membership only: the child's parent link and cache are not touched.
    /// Adding a child that is already present does nothing.
    /// [`set_parent`](Self::set_parent) is the way to link both sides.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either id is stale
    /// - [`Error::CyclicParent`] if `parent` is `child` or can be reached
    ///   from it through children lists
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node_mut_logged(child, "add_child")?;
        self.node_mut_logged(parent, "add_child")?;
        if self.reaches(child, parent) {
            return Err(Error::cyclic_parent(child.index, parent.index));
        }
        let p = self.node_mut(parent)?;
        if !p.children.contains(&child) {
            p.children.push(child);
        }
        Ok(())
    }

    /// Removes `child` from the children of `parent` and clears its parent.
    ///
    /// The child's `root_transform` is left stale. Returns `false` if
    /// `child` was not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.node_mut_logged(child, "remove_child")?;
        let p = self.node_mut_logged(parent, "remove_child")?;
        let Some(pos) = p.children.iter().position(|&c| c == child) else {
            return Ok(false);
        };
        p.children.remove(pos);

        let c = self.node_mut(child)?;
        if c.parent == Some(parent) {
            c.parent = None;
        }
        debug!(node = %child, parent = %parent, "Detached transform node");
        Ok(true)
    }

    /// Detaches the node from its parent. A root is left as it is.
    pub fn remove_from_parent(&mut self, id: NodeId) -> Result<()> {
        let parent = self.node_mut_logged(id, "remove_from_parent")?.parent;
        if let Some(parent) = parent {
            self.remove_child(parent, id)?;
        }
        Ok(())
    }

    /// Recomputes `root_transform` from the parent's model matrix, or
    /// identity for a root.
    ///
    /// Descendants are not refreshed; see [`update_subtree`](Self::update_subtree).
    pub fn update_root_transform(&mut self, id: NodeId) -> Result<()> {
        let parent = self.node_mut_logged(id, "update_root_transform")?.parent;
        let root = match parent {
            Some(p) => self.model_matrix(p)?,
            None => Mat4::IDENTITY,
        };
        self.node_mut(id)?.root = root;
        trace!(node = %id, "Refreshed root transform");
        Ok(())
    }

    /// Refreshes `root_transform` of `id` and all its descendants, parents
    /// before children. Returns the number of nodes visited; a node listed
    /// under several parents is refreshed once.
    pub fn update_subtree(&mut self, id: NodeId) -> Result<usize> {
        self.node_mut_logged(id, "update_subtree")?;
        let mut seen = vec![false; self.slots.len()];
        let mut stack = vec![id];
        let mut visited = 0;
        while let Some(current) = stack.pop() {
            if std::mem::replace(&mut seen[current.index as usize], true) {
                continue;
            }
            self.update_root_transform(current)?;
            visited += 1;
            // Reversed so children are visited in insertion order
            stack.extend(self.node(current)?.children.iter().rev().copied());
        }
        trace!(node = %id, visited, "Refreshed subtree");
        Ok(visited)
    }

    /// Returns `true` if the node has no parent.
    #[inline]
    pub fn is_root(&self, id: NodeId) -> Result<bool> {
        Ok(self.node(id)?.parent.is_none())
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> Result<bool> {
        Ok(self.node(id)?.children.is_empty())
    }

    /// Number of direct children.
    #[inline]
    pub fn num_children(&self, id: NodeId) -> Result<usize> {
        Ok(self.node(id)?.children.len())
    }

    /// Snapshot of the direct children in insertion order.
    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.node(id)?.children.clone())
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(Error::node_not_found(id.index, id.generation))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(Error::node_not_found(id.index, id.generation))
    }

    fn node_mut_logged(&mut self, id: NodeId, op: &'static str) -> Result<&mut Node> {
        match self.node_mut(id) {
            Ok(node) => Ok(node),
            Err(e) => {
                warn!(node = %id, op, "Stale transform node handle");
                Err(e)
            }
        }
    }

    // Depth-first over children lists. Every parent link is mirrored in
    // its parent's list, so this also covers the parent chain.
    fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        let mut seen = vec![false; self.slots.len()];
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if std::mem::replace(&mut seen[current.index as usize], true) {
                continue;
            }
            if let Ok(node) = self.node(current) {
                stack.extend(node.children.iter().copied());
            }
        }
        false
    }
}
