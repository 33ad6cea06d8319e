use generational_arena::{Arena, Index};
use tracing::instrument;

/// Tree node holding one line of input.
#[derive(Debug, Clone)]
pub struct Node {
    /// Raw line text, leading indent characters included
    pub value: String,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in document order
    pub children: Vec<Index>,
}

/// Arena-based document tree.
///
/// Uses a generational arena for memory-safe node references. Indices are
/// copyable non-owning handles, so the parent back-reference cannot form an
/// ownership cycle with the child list. Each document owns all of its nodes
/// and drops them together.
#[derive(Debug)]
pub struct Document {
    /// Arena storage for all nodes
    arena: Arena<Node>,
    /// Index of the root node, None for empty documents
    root: Option<Index>,
    /// Indent character the document was parsed with
    edge: char,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl Document {
    pub fn new(edge: char) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            edge,
        }
    }

    /// Inserts a node and wires it into its parent's child list.
    ///
    /// A parentless node becomes the document root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, value: String, parent: Option<Index>) -> Index {
        let node = Node {
            value,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&Node> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Indent character this document was parsed with.
    pub fn edge(&self) -> char {
        self.edge
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreorderIter {
        PreorderIter::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostorderIter {
        PostorderIter::new(self)
    }

    /// Number of levels in the tree; 0 for an empty document.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        if let Some(root) = self.root {
            self.subtree_height(root)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn subtree_height(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.subtree_height(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

/// Preorder iterator: nodes in document order.
pub struct PreorderIter<'a> {
    doc: &'a Document,
    stack: Vec<Index>,
}

impl<'a> PreorderIter<'a> {
    fn new(doc: &'a Document) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = doc.root() {
            stack.push(root);
        }
        Self { doc, stack }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = (Index, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.doc.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

/// Postorder iterator: every node after all of its descendants.
pub struct PostorderIter<'a> {
    doc: &'a Document,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostorderIter<'a> {
    fn new(doc: &'a Document) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = doc.root() {
            stack.push((root, false));
        }
        Self { doc, stack }
    }
}

impl<'a> Iterator for PostorderIter<'a> {
    type Item = (Index, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.doc.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
