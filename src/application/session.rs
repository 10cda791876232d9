//! Form session: the owned (tree, clipboard) pair
//!
//! Replaces the implicit global store of a UI framework with an explicit
//! session object. A rendering layer dispatches intents against it; every
//! mutation swaps in a freshly rewritten tree, so previously cloned
//! snapshots stay valid and independently observable.

use tracing::{debug, instrument, warn};

use crate::application::error::{SessionError, SessionResult};
use crate::config::ItemDefaults;
use crate::domain::{ops, rewrite, Clipboard, ComputeRule, ComputedItem, Item, ItemTag, Mode};

/// One editing session over a single form tree.
#[derive(Debug, Clone)]
pub struct FormSession {
    tree: Item,
    clipboard: Clipboard,
    defaults: ItemDefaults,
}

impl FormSession {
    /// Start a session over an existing tree with compiled-in defaults
    /// for newly created items.
    pub fn new(root: Item) -> Self {
        Self::with_defaults(root, ItemDefaults::default())
    }

    /// Start a session with explicit new-item defaults (see
    /// [`ItemDefaults::load`](crate::config::ItemDefaults::load)).
    pub fn with_defaults(root: Item, defaults: ItemDefaults) -> Self {
        Self {
            tree: root,
            clipboard: Clipboard::Standby,
            defaults,
        }
    }

    /// The current tree snapshot.
    pub fn tree(&self) -> &Item {
        &self.tree
    }

    /// The current clipboard state.
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// The current clipboard state tag.
    pub fn mode(&self) -> Mode {
        self.clipboard.mode()
    }

    /// Effective checked state of the node with the given uuid, or `None`
    /// if no such node exists in the current tree.
    pub fn is_checked(&self, uuid: &str) -> Option<bool> {
        rewrite::find(&self.tree, uuid).map(Item::is_checked)
    }

    /// Replace the node matching `updated`'s uuid with `updated`'s full
    /// field set. No-op when the uuid is absent.
    #[instrument(level = "debug", skip(self, updated), fields(uuid = updated.uuid()))]
    pub fn update_item(&mut self, updated: Item) {
        self.apply(|tree| ops::update_item(tree, updated));
    }

    /// Rebuild the node with the given uuid under a new kind, preserving
    /// uuid and content. No-op when the uuid is absent.
    #[instrument(level = "debug", skip(self))]
    pub fn change_item_tag(&mut self, uuid: &str, tag: ItemTag) {
        self.apply(|tree| ops::change_item_tag(tree, uuid, tag));
    }

    /// Append a freshly constructed empty computed child to the computed
    /// node with `parent_uuid`, built from the session's item defaults.
    /// No-op when the uuid is absent or names a leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent_uuid: &str) {
        let child = Item::empty_with(self.defaults.content.clone(), self.defaults.rule);
        debug!(child_uuid = child.uuid(), "appending empty child");
        self.apply(|tree| ops::add_child(tree, parent_uuid, child));
    }

    /// Remove `item`'s subtree from the tree and hold it on the clipboard.
    ///
    /// A previously held item is replaced and lost; the clipboard is a
    /// single slot. Cutting the root is rejected with
    /// [`SessionError::RootTarget`]: the root has no parent to remove it
    /// from, so its copy on the clipboard would duplicate every uuid on
    /// the next paste.
    #[instrument(level = "debug", skip(self, item), fields(uuid = item.uuid()))]
    pub fn cut_item(&mut self, item: Item) -> SessionResult<()> {
        if item.uuid() == self.tree.uuid() {
            warn!("attempted to cut the tree root");
            return Err(SessionError::RootTarget(item.uuid().to_owned()));
        }
        if !self.clipboard.is_empty() {
            warn!("clipboard already holds an item, previous subtree is discarded");
        }
        let uuid = item.uuid().to_owned();
        self.apply(|tree| ops::remove_item(tree, &uuid));
        self.clipboard = Clipboard::Cut(item);
        Ok(())
    }

    /// Insert the held subtree as the sibling immediately following the
    /// node with `target_uuid`, then reset the clipboard to standby.
    ///
    /// Rejections leave tree and clipboard untouched:
    /// - empty clipboard: [`SessionError::EmptyClipboard`]
    /// - target absent from the tree (including any uuid inside the held
    ///   subtree itself): [`SessionError::TargetNotFound`]
    /// - target is the root: [`SessionError::RootTarget`] — the root is
    ///   nobody's child, so there is no children sequence to insert a
    ///   sibling into
    #[instrument(level = "debug", skip(self))]
    pub fn paste_on_target(&mut self, target_uuid: &str) -> SessionResult<()> {
        if self.clipboard.is_empty() {
            warn!("attempted to paste without cutting or copying first");
            return Err(SessionError::EmptyClipboard);
        }
        if !rewrite::contains(&self.tree, target_uuid) {
            warn!(target_uuid, "paste target not present in tree, clipboard retained");
            return Err(SessionError::TargetNotFound(target_uuid.to_owned()));
        }
        if target_uuid == self.tree.uuid() {
            warn!(target_uuid, "paste target is the root, clipboard retained");
            return Err(SessionError::RootTarget(target_uuid.to_owned()));
        }
        let Some(held) = self.clipboard.take() else {
            return Err(SessionError::EmptyClipboard);
        };
        self.apply(|tree| ops::insert_after(tree, target_uuid, held));
        Ok(())
    }

    fn apply<F>(&mut self, op: F)
    where
        F: FnOnce(Item) -> Item,
    {
        // The placeholder is swapped back before any observer can run;
        // ops run to completion synchronously.
        let tree = std::mem::replace(&mut self.tree, Item::Computed(placeholder()));
        self.tree = op(tree);
    }
}

fn placeholder() -> ComputedItem {
    ComputedItem {
        uuid: String::new(),
        content: String::new(),
        rule: ComputeRule::All,
        children: Vec::new(),
    }
}
