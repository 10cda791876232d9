//! formtree: immutable form/checklist tree engine
//!
//! A renderer-agnostic library for an interactive form builder. The form is
//! a tree of items: computed groups whose checked state is derived from
//! their children by an aggregation rule, checkboxes, and free-text inputs.
//! All edits are pure: every mutation rewrites the whole tree post-order
//! and returns a brand-new snapshot, so history layers are trivially
//! stackable on top.
//!
//! A UI layer dispatches intents against a [`FormSession`], which owns the
//! (tree, clipboard) pair:
//!
//! ```
//! use formtree::{CheckboxItem, ComputedItem, ComputeRule, FormSession, Item};
//!
//! let checkbox = CheckboxItem::new("# bonjour");
//! let checkbox_uuid = checkbox.uuid.clone();
//! let root = Item::Computed(ComputedItem {
//!     children: vec![Item::Checkbox(checkbox)],
//!     ..ComputedItem::new("# hello", ComputeRule::All)
//! });
//!
//! let mut session = FormSession::new(root);
//! assert_eq!(session.is_checked(session.tree().uuid()), Some(false));
//!
//! let mut toggled = CheckboxItem::new("# bonjour");
//! toggled.uuid = checkbox_uuid;
//! toggled.checked = true;
//! session.update_item(Item::Checkbox(toggled));
//! assert_eq!(session.is_checked(session.tree().uuid()), Some(true));
//! ```

pub mod application;
pub mod config;
pub mod display;
pub mod domain;
pub mod util;

pub use application::{FormSession, SessionError, SessionResult};
pub use config::ItemDefaults;
pub use display::TreeDisplay;
pub use domain::{
    CheckboxItem, Clipboard, ComputeRule, ComputedItem, InputItem, Item, ItemTag, Mode,
};
