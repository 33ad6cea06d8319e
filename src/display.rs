//! Terminal display tree for inspecting parsed documents.

use generational_arena::Index;
use termtree::Tree;

use crate::arena::Document;

impl Document {
    /// Converts the document into a `termtree` display tree of single-line
    /// views, for terminal inspection. Not a round-trip surface.
    pub fn to_display_tree(&self) -> Tree<String> {
        match self.root() {
            Some(root) => self.display_subtree(root),
            None => Tree::new("empty document".to_string()),
        }
    }

    fn display_subtree(&self, idx: Index) -> Tree<String> {
        let label = self.line(idx).unwrap_or_default().to_string();

        let leaves: Vec<Tree<String>> = self
            .get_node(idx)
            .map(|node| {
                node.children
                    .iter()
                    .map(|&child| self.display_subtree(child))
                    .collect()
            })
            .unwrap_or_default();

        Tree::new(label).with_leaves(leaves)
    }
}
