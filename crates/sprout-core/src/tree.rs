//! The UI tree: an arena of nodes with incrementally maintained parent links.
//!
//! Nodes live in a single id-keyed map. Each node lists its children by id
//! and records its parent, so lookups are O(1) and structural edits never
//! need a full scan. Every mutation validates first and writes second, which
//! keeps the arena, the parent links and the root list consistent even when
//! an operation fails.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::TreeError;
use crate::registry::NodeTypeRegistry;
use crate::types::{NodeId, NodeType, PropValue, Props};

/// A node in the UI tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    node_type: NodeType,
    props: Props,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Get a single prop.
    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// The `text` prop, if present and textual.
    pub fn text(&self) -> Option<&str> {
        self.prop("text").and_then(PropValue::as_text)
    }

    /// Parent id (None for roots).
    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    /// Child ids, in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// An owned, nested copy of a subtree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub node_type: NodeType,
    pub props: Props,
    pub children: Vec<NodeSnapshot>,
}

impl Drop for NodeSnapshot {
    // Flatten before dropping so deep chains do not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut snapshot) = pending.pop() {
            pending.append(&mut snapshot.children);
        }
    }
}

/// Options controlling structural validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Reject children under leaf types with [`TreeError::InvalidStructure`].
    pub strict_structure: bool,
}

/// The mutable forest being edited.
#[derive(Debug, Clone)]
pub struct UiTree {
    registry: Arc<NodeTypeRegistry>,
    options: TreeOptions,
    /// All nodes in the tree, indexed by ID
    nodes: HashMap<NodeId, Node>,
    /// Root node IDs, in order
    roots: Vec<NodeId>,
    /// Counter for generating unique IDs; never rewinds
    next_id: u64,
}

impl UiTree {
    /// Create an empty, permissive tree.
    pub fn new(registry: Arc<NodeTypeRegistry>) -> Self {
        Self::with_options(registry, TreeOptions::default())
    }

    /// Create an empty tree with explicit options.
    pub fn with_options(registry: Arc<NodeTypeRegistry>, options: TreeOptions) -> Self {
        Self {
            registry,
            options,
            nodes: HashMap::new(),
            roots: Vec::new(),
            next_id: 1,
        }
    }

    pub fn registry(&self) -> &NodeTypeRegistry {
        &self.registry
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }

    /// Create a node of `node_type` with default props and append it to
    /// `parent` (or to the roots).
    pub fn insert(
        &mut self,
        parent: Option<&str>,
        node_type: NodeType,
    ) -> Result<NodeId, TreeError> {
        let props = self.registry.lookup(node_type)?.default_props();
        let parent = match parent {
            Some(parent_id) => {
                let missing = || TreeError::ParentNotFound {
                    id: parent_id.to_string(),
                };
                Some(self.check_parent(parent_id, node_type, missing)?)
            }
            None => None,
        };

        let id = self.generate_id(node_type);
        let node = Node {
            id: id.clone(),
            node_type,
            props,
            parent: parent.clone(),
            children: Vec::new(),
        };
        self.nodes.insert(id.clone(), node);
        self.attach(&id, parent.as_ref(), None);

        log::debug!(
            "inserted {} under {}",
            id,
            parent.as_ref().map(NodeId::as_str).unwrap_or("<root>")
        );
        Ok(id)
    }

    /// Replace a node's entire prop map.
    pub fn update_props(&mut self, id: &str, props: Props) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.props = props;
        log::debug!("replaced props of {}", id);
        Ok(())
    }

    /// Replace a single prop, leaving the rest of the map untouched.
    pub fn set_prop(&mut self, id: &str, key: &str, value: PropValue) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.props.insert(key.to_string(), value);
        Ok(())
    }

    /// Remove a node and its entire subtree. Returns the number of nodes removed.
    pub fn delete(&mut self, id: &str) -> Result<usize, TreeError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| TreeError::NodeNotFound { id: id.to_string() })?;
        let node_id = node.id.clone();
        let parent = node.parent.clone();

        self.detach(&node_id, parent.as_ref());

        let mut removed = 0;
        let mut stack = vec![node_id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                removed += 1;
                stack.extend(node.children);
            }
        }

        log::debug!("deleted {} ({} nodes)", id, removed);
        Ok(removed)
    }

    /// Find a node anywhere in the forest.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Check if a node exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Move a node (with its subtree) under `new_parent` (or to the roots).
    ///
    /// `position` indexes the destination sibling list after the node has
    /// been detached; `None` or an out-of-range index appends.
    pub fn move_node(
        &mut self,
        id: &str,
        new_parent: Option<&str>,
        position: Option<usize>,
    ) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| TreeError::NodeNotFound { id: id.to_string() })?;
        let node_id = node.id.clone();
        let node_type = node.node_type;
        let old_parent = node.parent.clone();

        let new_parent = match new_parent {
            Some(target) => {
                let target_id = self.check_parent(target, node_type, || TreeError::ParentNotFound {
                    id: target.to_string(),
                })?;
                if self.is_self_or_ancestor(&node_id, &target_id) {
                    return Err(TreeError::InvalidMove {
                        id: id.to_string(),
                        target: target.to_string(),
                    });
                }
                Some(target_id)
            }
            None => None,
        };

        self.detach(&node_id, old_parent.as_ref());
        self.attach(&node_id, new_parent.as_ref(), position);
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.parent = new_parent.clone();
        }

        log::debug!(
            "moved {} under {}",
            id,
            new_parent.as_ref().map(NodeId::as_str).unwrap_or("<root>")
        );
        Ok(())
    }

    /// Deep-copy a subtree with fresh ids, placing the copy right after the original.
    pub fn duplicate(&mut self, id: &str) -> Result<NodeId, TreeError> {
        let missing = || TreeError::NodeNotFound { id: id.to_string() };
        let node = self.nodes.get(id).ok_or_else(missing)?;
        let source = node.id.clone();
        let parent = node.parent.clone();

        let copy = self.copy_subtree(&source, parent.clone()).ok_or_else(missing)?;
        if let Some(siblings) = self.siblings_mut(parent.as_ref()) {
            let index = siblings
                .iter()
                .position(|s| s.as_str() == id)
                .map_or(siblings.len(), |i| i + 1);
            siblings.insert(index, copy.clone());
        }

        log::debug!("duplicated {} as {}", id, copy);
        Ok(copy)
    }

    /// Root node IDs, in order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of a node.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &Node> {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child_id| self.nodes.get(child_id))
    }

    /// Parent of a node.
    pub fn parent(&self, id: &str) -> Option<&Node> {
        self.nodes
            .get(id)
            .and_then(|n| n.parent.as_ref())
            .and_then(|p| self.nodes.get(p))
    }

    /// Number of nodes in the whole forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of strict descendants of a node.
    pub fn descendant_count(&self, id: &str) -> Option<usize> {
        let node = self.nodes.get(id)?;
        let mut count = 0;
        let mut stack: Vec<&NodeId> = node.children.iter().collect();
        while let Some(current) = stack.pop() {
            if let Some(child) = self.nodes.get(current) {
                count += 1;
                stack.extend(child.children.iter());
            }
        }
        Some(count)
    }

    /// Preorder traversal of the whole forest, yielding `(depth, node)`.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.roots.iter().rev().map(|id| (0, id)).collect(),
        }
    }

    /// Owned nested copy of the whole forest.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.roots
            .iter()
            .filter_map(|id| self.snapshot_of(id.as_str()))
            .collect()
    }

    /// Owned nested copy of one subtree.
    pub fn snapshot_of(&self, id: &str) -> Option<NodeSnapshot> {
        // (node, next child index, finished child snapshots)
        let mut stack: Vec<(&Node, usize, Vec<NodeSnapshot>)> =
            vec![(self.nodes.get(id)?, 0, Vec::new())];
        loop {
            let frame = stack.last_mut()?;
            let node: &Node = frame.0;
            if let Some(child_id) = node.children.get(frame.1) {
                frame.1 += 1;
                if let Some(child) = self.nodes.get(child_id) {
                    stack.push((child, 0, Vec::new()));
                }
                continue;
            }

            let (node, _, children) = stack.pop()?;
            let snapshot = NodeSnapshot {
                id: node.id.clone(),
                node_type: node.node_type,
                props: node.props.clone(),
                children,
            };
            match stack.last_mut() {
                Some((_, _, siblings)) => siblings.push(snapshot),
                None => return Some(snapshot),
            }
        }
    }

    fn generate_id(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(format!("{}-{}", node_type.as_str(), self.next_id));
        self.next_id += 1;
        id
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut Node, TreeError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| TreeError::NodeNotFound { id: id.to_string() })
    }

    /// Resolve a prospective parent, enforcing the structure rule in strict mode.
    fn check_parent(
        &self,
        parent_id: &str,
        child_type: NodeType,
        missing: impl FnOnce() -> TreeError,
    ) -> Result<NodeId, TreeError> {
        let parent = self.nodes.get(parent_id).ok_or_else(missing)?;
        let strict = self.options.strict_structure;
        if strict && !self.registry.lookup(parent.node_type)?.is_container() {
            return Err(TreeError::InvalidStructure {
                parent: parent_id.to_string(),
                node_type: child_type.as_str().to_string(),
            });
        }
        Ok(parent.id.clone())
    }

    /// Whether `ancestor` is `node` itself or lies on `node`'s parent chain.
    fn is_self_or_ancestor(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent.as_ref());
        }
        false
    }

    fn siblings_mut(&mut self, parent: Option<&NodeId>) -> Option<&mut Vec<NodeId>> {
        match parent {
            Some(parent_id) => self.nodes.get_mut(parent_id).map(|p| &mut p.children),
            None => Some(&mut self.roots),
        }
    }

    fn attach(&mut self, id: &NodeId, parent: Option<&NodeId>, position: Option<usize>) {
        if let Some(siblings) = self.siblings_mut(parent) {
            let index = position.unwrap_or(siblings.len()).min(siblings.len());
            siblings.insert(index, id.clone());
        }
    }

    fn detach(&mut self, id: &NodeId, parent: Option<&NodeId>) {
        if let Some(siblings) = self.siblings_mut(parent) {
            siblings.retain(|s| s != id);
        }
    }

    /// Copy a subtree with fresh ids, assigned in preorder. The new root is
    /// not attached to any sibling list; its descendants are.
    fn copy_subtree(&mut self, source: &NodeId, parent: Option<NodeId>) -> Option<NodeId> {
        let mut root = None;
        let mut pending = vec![(source.clone(), parent)];
        while let Some((from, parent)) = pending.pop() {
            let (node_type, props, children) = match self.nodes.get(&from) {
                Some(node) => (node.node_type, node.props.clone(), node.children.clone()),
                None => continue,
            };
            let id = self.generate_id(node_type);
            if root.is_none() {
                root = Some(id.clone());
            } else if let Some(p) = parent.as_ref().and_then(|p| self.nodes.get_mut(p)) {
                p.children.push(id.clone());
            }
            self.nodes.insert(
                id.clone(),
                Node {
                    id: id.clone(),
                    node_type,
                    props,
                    parent,
                    children: Vec::new(),
                },
            );
            pending.extend(children.into_iter().rev().map(|child| (child, Some(id.clone()))));
        }
        root
    }
}

/// Preorder iterator over a [`UiTree`].
pub struct Preorder<'a> {
    tree: &'a UiTree,
    stack: Vec<(usize, &'a NodeId)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, id)) = self.stack.pop() {
            if let Some(node) = self.tree.nodes.get(id) {
                self.stack
                    .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
                return Some((depth, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> UiTree {
        UiTree::new(Arc::new(NodeTypeRegistry::builtin()))
    }

    #[test]
    fn test_insert_root_with_defaults() {
        let mut tree = tree();
        let id = tree.insert(None, NodeType::Heading).unwrap();

        assert_eq!(id.as_str(), "heading-1");
        assert_eq!(tree.roots(), &[id.clone()]);

        let node = tree.find(id.as_str()).unwrap();
        assert_eq!(node.node_type(), NodeType::Heading);
        assert_eq!(node.text(), Some("Heading"));
        assert!(node.parent().is_none());
    }

    #[test]
    fn test_insert_appends_last() {
        let mut tree = tree();
        let card = tree.insert(None, NodeType::Card).unwrap();
        let a = tree.insert(Some(card.as_str()), NodeType::Text).unwrap();
        let b = tree.insert(Some(card.as_str()), NodeType::Button).unwrap();

        let children: Vec<_> = tree.children(card.as_str()).map(|n| n.id().clone()).collect();
        assert_eq!(children, vec![a.clone(), b]);
        assert_eq!(tree.parent(a.as_str()).map(Node::id), Some(&card));
    }

    #[test]
    fn test_insert_missing_parent() {
        let mut tree = tree();
        let err = tree.insert(Some("card-99"), NodeType::Text).unwrap_err();
        assert_eq!(err, TreeError::ParentNotFound { id: "card-99".into() });
        assert!(tree.is_empty());
    }

    #[test]
    fn test_insert_unknown_type_for_custom_registry() {
        let mut tree = UiTree::new(Arc::new(NodeTypeRegistry::new()));
        let err = tree.insert(None, NodeType::Table).unwrap_err();
        assert_eq!(err, TreeError::UnknownType { name: "table".into() });
        assert!(tree.is_empty());
    }

    #[test]
    fn test_siblings_do_not_share_props() {
        let mut tree = tree();
        let a = tree.insert(None, NodeType::Button).unwrap();
        let b = tree.insert(None, NodeType::Button).unwrap();

        tree.set_prop(a.as_str(), "text", PropValue::text("Save")).unwrap();
        assert_eq!(tree.find(a.as_str()).unwrap().text(), Some("Save"));
        assert_eq!(tree.find(b.as_str()).unwrap().text(), Some("Button"));
    }

    #[test]
    fn test_update_props_replaces_whole_map() {
        let mut tree = tree();
        let id = tree.insert(None, NodeType::Heading).unwrap();

        let props = Props::from([("text".to_string(), PropValue::text("Hello"))]);
        tree.update_props(id.as_str(), props).unwrap();

        let node = tree.find(id.as_str()).unwrap();
        assert_eq!(node.text(), Some("Hello"));
        assert!(node.prop("level").is_none());
    }

    #[test]
    fn test_update_props_missing_node() {
        let mut tree = tree();
        let err = tree.update_props("ghost-1", Props::new()).unwrap_err();
        assert_eq!(err, TreeError::NodeNotFound { id: "ghost-1".into() });
    }

    #[test]
    fn test_delete_removes_subtree() {
        let mut tree = tree();
        let section = tree.insert(None, NodeType::Section).unwrap();
        let card = tree.insert(Some(section.as_str()), NodeType::Card).unwrap();
        let text = tree.insert(Some(card.as_str()), NodeType::Text).unwrap();
        let other = tree.insert(None, NodeType::Divider).unwrap();

        assert_eq!(tree.descendant_count(section.as_str()), Some(2));
        assert_eq!(tree.delete(section.as_str()).unwrap(), 3);

        assert!(tree.find(section.as_str()).is_none());
        assert!(tree.find(card.as_str()).is_none());
        assert!(tree.find(text.as_str()).is_none());
        assert_eq!(tree.roots(), &[other]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_delete_missing_changes_nothing() {
        let mut tree = tree();
        tree.insert(None, NodeType::Text).unwrap();
        let before = tree.snapshot();

        assert!(tree.delete("text-42").is_err());
        assert_eq!(tree.snapshot(), before);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut tree = tree();
        let first = tree.insert(None, NodeType::Text).unwrap();
        tree.delete(first.as_str()).unwrap();
        let second = tree.insert(None, NodeType::Text).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_strict_structure_rejects_leaf_parent() {
        let registry = Arc::new(NodeTypeRegistry::builtin());
        let mut tree = UiTree::with_options(registry, TreeOptions { strict_structure: true });
        let button = tree.insert(None, NodeType::Button).unwrap();

        let err = tree.insert(Some(button.as_str()), NodeType::Text).unwrap_err();
        assert!(matches!(err, TreeError::InvalidStructure { .. }));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_permissive_mode_accepts_leaf_parent() {
        let mut tree = tree();
        let button = tree.insert(None, NodeType::Button).unwrap();
        let child = tree.insert(Some(button.as_str()), NodeType::Icon).unwrap();
        assert_eq!(tree.parent(child.as_str()).map(Node::id), Some(&button));
    }

    #[test]
    fn test_move_node() {
        let mut tree = tree();
        let left = tree.insert(None, NodeType::Column).unwrap();
        let right = tree.insert(None, NodeType::Column).unwrap();
        let a = tree.insert(Some(left.as_str()), NodeType::Text).unwrap();
        let b = tree.insert(Some(right.as_str()), NodeType::Text).unwrap();

        tree.move_node(a.as_str(), Some(right.as_str()), Some(0)).unwrap();

        assert_eq!(tree.children(left.as_str()).count(), 0);
        let order: Vec<_> = tree.children(right.as_str()).map(|n| n.id().clone()).collect();
        assert_eq!(order, vec![a.clone(), b]);
        assert_eq!(tree.parent(a.as_str()).map(Node::id), Some(&right));

        tree.move_node(a.as_str(), None, None).unwrap();
        assert_eq!(tree.roots().last(), Some(&a));
        assert!(tree.parent(a.as_str()).is_none());
    }

    #[test]
    fn test_move_into_descendant_is_rejected() {
        let mut tree = tree();
        let outer = tree.insert(None, NodeType::Container).unwrap();
        let inner = tree.insert(Some(outer.as_str()), NodeType::Card).unwrap();
        let before = tree.snapshot();

        let err = tree.move_node(outer.as_str(), Some(inner.as_str()), None).unwrap_err();
        assert!(matches!(err, TreeError::InvalidMove { .. }));
        let err = tree.move_node(outer.as_str(), Some(outer.as_str()), None).unwrap_err();
        assert!(matches!(err, TreeError::InvalidMove { .. }));
        assert_eq!(tree.snapshot(), before);
    }

    #[test]
    fn test_duplicate_subtree() {
        let mut tree = tree();
        let card = tree.insert(None, NodeType::Card).unwrap();
        tree.insert(Some(card.as_str()), NodeType::Heading).unwrap();
        tree.insert(Some(card.as_str()), NodeType::Button).unwrap();
        let tail = tree.insert(None, NodeType::Footer).unwrap();

        let copy = tree.duplicate(card.as_str()).unwrap();

        assert_eq!(tree.roots(), &[card.clone(), copy.clone(), tail]);
        assert_eq!(tree.len(), 7);

        let original = tree.snapshot_of(card.as_str()).unwrap();
        let duplicate = tree.snapshot_of(copy.as_str()).unwrap();
        assert_eq!(original.children.len(), duplicate.children.len());
        for (a, b) in original.children.iter().zip(&duplicate.children) {
            assert_eq!(a.node_type, b.node_type);
            assert_eq!(a.props, b.props);
            assert_ne!(a.id, b.id);
            assert_eq!(tree.parent(b.id.as_str()).map(Node::id), Some(&copy));
        }
    }

    #[test]
    fn test_preorder_iteration() {
        let mut tree = tree();
        let root = tree.insert(None, NodeType::Container).unwrap();
        let card = tree.insert(Some(root.as_str()), NodeType::Card).unwrap();
        let text = tree.insert(Some(card.as_str()), NodeType::Text).unwrap();
        let button = tree.insert(Some(root.as_str()), NodeType::Button).unwrap();

        let visited: Vec<_> = tree.iter().map(|(depth, n)| (depth, n.id().clone())).collect();
        assert_eq!(visited, vec![(0, root), (1, card), (2, text), (1, button)]);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut tree = tree();
        let id = tree.insert(None, NodeType::Alert).unwrap();
        assert_eq!(tree.find(id.as_str()), tree.find(id.as_str()));
    }

    #[test]
    fn test_deep_chain_snapshot_and_duplicate() {
        const DEPTH: usize = 20_000;
        let mut tree = tree();
        let root = tree.insert(None, NodeType::Container).unwrap();
        let mut parent = root.clone();
        for _ in 1..DEPTH {
            parent = tree.insert(Some(parent.as_str()), NodeType::Container).unwrap();
        }

        let snapshot = tree.snapshot_of(root.as_str()).unwrap();
        let mut depth = 1;
        let mut current = &snapshot;
        while let Some(child) = current.children.first() {
            depth += 1;
            current = child;
        }
        assert_eq!(depth, DEPTH);
        assert_eq!(current.id, parent);
        drop(snapshot);

        let copy = tree.duplicate(root.as_str()).unwrap();
        assert_eq!(tree.len(), 2 * DEPTH);
        assert_eq!(tree.roots(), &[root.clone(), copy.clone()]);
        assert_eq!(tree.descendant_count(copy.as_str()), Some(DEPTH - 1));
        assert_eq!(tree.iter().filter(|(d, _)| *d == DEPTH - 1).count(), 2);

        assert_eq!(tree.delete(copy.as_str()).unwrap(), DEPTH);
        assert_eq!(tree.len(), DEPTH);
    }

    #[test]
    fn test_duplicate_assigns_ids_in_preorder() {
        let mut tree = tree();
        let card = tree.insert(None, NodeType::Card).unwrap();
        let row = tree.insert(Some(card.as_str()), NodeType::Row).unwrap();
        tree.insert(Some(row.as_str()), NodeType::Text).unwrap();
        tree.insert(Some(card.as_str()), NodeType::Button).unwrap();

        let copy = tree.duplicate(card.as_str()).unwrap();
        assert_eq!(copy.as_str(), "card-5");
        let ids: Vec<String> = tree.iter().skip(4).map(|(_, n)| n.id().to_string()).collect();
        assert_eq!(ids, vec!["card-5", "row-6", "text-7", "button-8"]);
    }
}
