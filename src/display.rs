//! Text rendering of a tree snapshot
//!
//! Presentation proper (markdown, controls) belongs to embedders; this is
//! the library-level view for logs, debugging, and terminal embedders.

use termtree::Tree;

use crate::domain::Item;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for Item {
    fn to_tree_string(&self) -> Tree<String> {
        let marker = if self.is_checked() { "[x]" } else { "[ ]" };
        let label = match self {
            Item::Computed(group) => format!("{} {} ({})", marker, group.content, group.rule),
            Item::Checkbox(leaf) => format!("{} {}", marker, leaf.content),
            Item::Input(leaf) if leaf.input.is_empty() => format!("{} {}", marker, leaf.content),
            Item::Input(leaf) => format!("{} {}: {}", marker, leaf.content, leaf.input),
        };

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}
