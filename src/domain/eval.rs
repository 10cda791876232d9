//! Checked-state evaluator
//!
//! Computed items never store a checked flag; their state is reduced from
//! their children on every read. Evaluation is pure and on-demand against
//! the current snapshot, so repeated calls agree absent a mutation.

use crate::domain::entities::{ComputeRule, Item};

impl ComputeRule {
    /// Reduce the children's checked states under this rule.
    pub fn evaluate(self, children: &[Item]) -> bool {
        match self {
            // Vacuously true for an empty children sequence
            ComputeRule::All => children.iter().all(Item::is_checked),
            ComputeRule::AtLeastOne => children.iter().any(Item::is_checked),
            ComputeRule::One => children.iter().filter(|child| child.is_checked()).count() == 1,
        }
    }
}

impl Item {
    /// Effective checked state of this item.
    ///
    /// Leaves return their stored flag; computed items recurse into their
    /// children and reduce by their rule.
    pub fn is_checked(&self) -> bool {
        match self {
            Item::Computed(group) => group.rule.evaluate(&group.children),
            Item::Checkbox(leaf) => leaf.checked,
            Item::Input(leaf) => leaf.checked,
        }
    }
}
