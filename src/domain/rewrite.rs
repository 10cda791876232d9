//! Post-order tree rewrite
//!
//! The single building block every mutation composes with: apply a
//! transform to every node of the tree, children first. A computed node's
//! children are fully rebuilt before the transform sees the parent, so the
//! transform always receives a node whose children already reflect the
//! recursive result. Leaves get the transform directly.
//!
//! The input tree is consumed; the result is a brand-new tree. Callers that
//! need the previous snapshot clone before rewriting.

use std::collections::HashSet;

use crate::domain::entities::Item;
use crate::domain::error::{DomainError, DomainResult};

/// Apply `transform` to every node in post-order and return the new tree.
///
/// The transform may replace any field; it must preserve tree-wide uuid
/// uniqueness if it changes a node's uuid.
pub fn rewrite<F>(tree: Item, transform: &mut F) -> Item
where
    F: FnMut(Item) -> Item,
{
    match tree {
        Item::Computed(mut group) => {
            group.children = group
                .children
                .into_iter()
                .map(|child| rewrite(child, transform))
                .collect();
            transform(Item::Computed(group))
        }
        leaf => transform(leaf),
    }
}

/// Find the node with the given uuid, if present.
pub fn find<'a>(tree: &'a Item, uuid: &str) -> Option<&'a Item> {
    if tree.uuid() == uuid {
        return Some(tree);
    }
    tree.children()
        .iter()
        .find_map(|child| find(child, uuid))
}

/// Whether a node with the given uuid is present in the tree.
pub fn contains(tree: &Item, uuid: &str) -> bool {
    find(tree, uuid).is_some()
}

/// Check the tree-wide uuid uniqueness invariant.
///
/// The engine assumes unique uuids as a precondition; this helper lets
/// embedders and tests assert it explicitly.
pub fn validate_unique_uuids(tree: &Item) -> DomainResult<()> {
    fn walk<'a>(item: &'a Item, seen: &mut HashSet<&'a str>) -> DomainResult<()> {
        if !seen.insert(item.uuid()) {
            return Err(DomainError::DuplicateUuid(item.uuid().to_owned()));
        }
        for child in item.children() {
            walk(child, seen)?;
        }
        Ok(())
    }
    let mut seen = HashSet::new();
    walk(tree, &mut seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CheckboxItem, ComputeRule, ComputedItem};

    fn checkbox(uuid: &str) -> Item {
        Item::Checkbox(CheckboxItem {
            uuid: uuid.into(),
            content: String::new(),
            checked: false,
        })
    }

    fn group(uuid: &str, children: Vec<Item>) -> Item {
        Item::Computed(ComputedItem {
            uuid: uuid.into(),
            content: String::new(),
            rule: ComputeRule::All,
            children,
        })
    }

    #[test]
    fn test_rewrite_visits_children_before_parent() {
        let tree = group("root", vec![checkbox("a"), group("g", vec![checkbox("b")])]);

        let mut order = Vec::new();
        let rewritten = rewrite(tree, &mut |item| {
            order.push(item.uuid().to_owned());
            item
        });

        assert_eq!(order, vec!["a", "b", "g", "root"]);
        assert_eq!(rewritten.uuid(), "root");
    }

    #[test]
    fn test_rewrite_parent_sees_rebuilt_children() {
        let tree = group("root", vec![checkbox("a")]);

        let rewritten = rewrite(tree, &mut |item| match item {
            Item::Checkbox(mut leaf) => {
                leaf.checked = true;
                Item::Checkbox(leaf)
            }
            Item::Computed(group) => {
                // Child transform already ran when the parent is visited
                assert!(matches!(&group.children[0], Item::Checkbox(c) if c.checked));
                Item::Computed(group)
            }
            other => other,
        });

        assert!(matches!(&rewritten.children()[0], Item::Checkbox(c) if c.checked));
    }

    #[test]
    fn test_find_locates_nested_node() {
        let tree = group("root", vec![group("g", vec![checkbox("deep")])]);
        assert!(find(&tree, "deep").is_some());
        assert!(find(&tree, "missing").is_none());
        assert!(contains(&tree, "g"));
    }

    #[test]
    fn test_validate_unique_uuids_detects_duplicate() {
        let ok = group("root", vec![checkbox("a"), checkbox("b")]);
        assert!(validate_unique_uuids(&ok).is_ok());

        let bad = group("root", vec![checkbox("a"), checkbox("a")]);
        let err = validate_unique_uuids(&bad).unwrap_err();
        assert!(err.to_string().contains("a"));
    }
}
