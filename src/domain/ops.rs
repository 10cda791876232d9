//! Mutation operations
//!
//! Pure structural edits, each expressed through [`rewrite`]. All are total:
//! a target uuid absent from the tree makes the operation a no-op (the
//! rewrite simply never matches). Nothing here touches clipboard state; the
//! session layer composes these with [`Clipboard`](crate::domain::Clipboard)
//! transitions.

use tracing::trace;

use crate::domain::entities::{Item, ItemTag};
use crate::domain::rewrite::rewrite;

/// Replace the node matching `updated`'s uuid with `updated`'s full field
/// set (content, checked, input, rule, children as carried by the variant).
pub fn update_item(tree: Item, updated: Item) -> Item {
    trace!(uuid = updated.uuid(), "update_item");
    let uuid = updated.uuid().to_owned();
    let mut replacement = Some(updated);
    rewrite(tree, &mut |item| {
        if item.uuid() == uuid {
            if let Some(updated) = replacement.take() {
                return updated;
            }
        }
        item
    })
}

/// Rebuild the node with the given uuid under a new kind, preserving uuid
/// and content. See [`Item::retag`] for the per-transition field rules.
pub fn change_item_tag(tree: Item, uuid: &str, tag: ItemTag) -> Item {
    trace!(uuid, ?tag, "change_item_tag");
    rewrite(tree, &mut |item| {
        if item.uuid() == uuid {
            item.retag(tag)
        } else {
            item
        }
    })
}

/// Append `child` to the children of the computed node with `parent_uuid`.
///
/// A non-computed node with that uuid passes through unchanged; only
/// computed nodes carry a children sequence.
pub fn add_child(tree: Item, parent_uuid: &str, child: Item) -> Item {
    trace!(parent_uuid, child_uuid = child.uuid(), "add_child");
    let mut pending = Some(child);
    rewrite(tree, &mut |item| match item {
        Item::Computed(mut group) if group.uuid == parent_uuid => {
            if let Some(child) = pending.take() {
                group.children.push(child);
            }
            Item::Computed(group)
        }
        other => other,
    })
}

/// Remove the node with the given uuid (and its entire subtree) from its
/// parent's children sequence. Only computed parents support removal.
pub fn remove_item(tree: Item, uuid: &str) -> Item {
    trace!(uuid, "remove_item");
    rewrite(tree, &mut |item| match item {
        Item::Computed(mut group) => {
            group.children.retain(|child| child.uuid() != uuid);
            Item::Computed(group)
        }
        leaf => leaf,
    })
}

/// Insert `item` as the sibling immediately following the node with
/// `target_uuid`, inside the computed parent whose children contain it.
///
/// By uuid uniqueness the target occurs at most once, so at most one
/// insertion happens.
pub fn insert_after(tree: Item, target_uuid: &str, item: Item) -> Item {
    trace!(target_uuid, inserted_uuid = item.uuid(), "insert_after");
    let mut pending = Some(item);
    rewrite(tree, &mut |node| match node {
        Item::Computed(mut group) => {
            if let Some(pos) = group
                .children
                .iter()
                .position(|child| child.uuid() == target_uuid)
            {
                if let Some(item) = pending.take() {
                    group.children.insert(pos + 1, item);
                }
            }
            Item::Computed(group)
        }
        leaf => leaf,
    })
}
