//! Domain entities: the editable item tree
//!
//! An [`Item`] is one node of the form tree. Three kinds exist: computed
//! groups (checked state derived from children), checkboxes, and free-text
//! inputs. Every item carries a stable string uuid assigned at creation and
//! never changed by any operation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content given to freshly created items when no defaults are configured.
pub const DEFAULT_CONTENT: &str = "# hello";

/// Aggregation rule reducing a computed item's children to one boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComputeRule {
    /// True iff every child is checked (vacuously true for no children)
    #[default]
    All,
    /// True iff exactly one child is checked
    One,
    /// True iff at least one child is checked (false for no children)
    AtLeastOne,
}

impl fmt::Display for ComputeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeRule::All => write!(f, "All"),
            ComputeRule::One => write!(f, "One"),
            ComputeRule::AtLeastOne => write!(f, "AtLeastOne"),
        }
    }
}

/// Discriminant for the three item kinds. Used as the retag target argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemTag {
    Computed,
    Checkbox,
    Input,
}

/// Group node whose checked state is derived from its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedItem {
    /// Stable identifier, unique tree-wide
    pub uuid: String,
    /// Markdown label
    pub content: String,
    /// How the children's checked states are reduced
    pub rule: ComputeRule,
    /// Ordered child items
    pub children: Vec<Item>,
}

/// Leaf node with a directly settable checked flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxItem {
    pub uuid: String,
    pub content: String,
    pub checked: bool,
}

/// Leaf node with a checked flag and an informational free-text field.
/// The input text does not participate in checked-state evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputItem {
    pub uuid: String,
    pub content: String,
    pub checked: bool,
    pub input: String,
}

/// One node of the form tree.
///
/// Internally tagged so serialized snapshots carry the variant name next to
/// the variant's fields, mirroring the shape embedders store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Item {
    Computed(ComputedItem),
    Checkbox(CheckboxItem),
    Input(InputItem),
}

fn fresh_uuid() -> String {
    Uuid::new_v4().to_string()
}

impl ComputedItem {
    /// Create a computed item with a fresh uuid and no children.
    pub fn new(content: impl Into<String>, rule: ComputeRule) -> Self {
        Self {
            uuid: fresh_uuid(),
            content: content.into(),
            rule,
            children: Vec::new(),
        }
    }
}

impl CheckboxItem {
    /// Create an unchecked checkbox with a fresh uuid.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            uuid: fresh_uuid(),
            content: content.into(),
            checked: false,
        }
    }
}

impl InputItem {
    /// Create an unchecked input with a fresh uuid and empty text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            uuid: fresh_uuid(),
            content: content.into(),
            checked: false,
            input: String::new(),
        }
    }
}

impl Item {
    /// Make an empty subtree root: fresh uuid, `Computed`, rule `All`,
    /// no children, default content.
    pub fn empty() -> Self {
        Self::empty_with(DEFAULT_CONTENT, ComputeRule::All)
    }

    /// Make an empty subtree root with explicit content and rule.
    pub fn empty_with(content: impl Into<String>, rule: ComputeRule) -> Self {
        Item::Computed(ComputedItem::new(content, rule))
    }

    /// Stable identifier of this item.
    pub fn uuid(&self) -> &str {
        match self {
            Item::Computed(item) => &item.uuid,
            Item::Checkbox(item) => &item.uuid,
            Item::Input(item) => &item.uuid,
        }
    }

    /// Markdown label of this item.
    pub fn content(&self) -> &str {
        match self {
            Item::Computed(item) => &item.content,
            Item::Checkbox(item) => &item.content,
            Item::Input(item) => &item.content,
        }
    }

    /// Kind discriminant of this item.
    pub fn tag(&self) -> ItemTag {
        match self {
            Item::Computed(_) => ItemTag::Computed,
            Item::Checkbox(_) => ItemTag::Checkbox,
            Item::Input(_) => ItemTag::Input,
        }
    }

    /// Child items; empty for leaf variants.
    pub fn children(&self) -> &[Item] {
        match self {
            Item::Computed(item) => &item.children,
            Item::Checkbox(_) | Item::Input(_) => &[],
        }
    }

    /// Rebuild this item under a new kind, preserving uuid and content.
    ///
    /// `Computed` to `Computed` retains children (rule resets to `All`);
    /// any other transition to `Computed` starts with no children. Leaf
    /// targets reset `checked` to false and `input` to the empty string.
    pub fn retag(self, tag: ItemTag) -> Item {
        match (self, tag) {
            (Item::Computed(item), ItemTag::Computed) => Item::Computed(ComputedItem {
                rule: ComputeRule::All,
                ..item
            }),
            (item, ItemTag::Computed) => {
                let (uuid, content) = item.into_identity();
                Item::Computed(ComputedItem {
                    uuid,
                    content,
                    rule: ComputeRule::All,
                    children: Vec::new(),
                })
            }
            (item, ItemTag::Checkbox) => {
                let (uuid, content) = item.into_identity();
                Item::Checkbox(CheckboxItem {
                    uuid,
                    content,
                    checked: false,
                })
            }
            (item, ItemTag::Input) => {
                let (uuid, content) = item.into_identity();
                Item::Input(InputItem {
                    uuid,
                    content,
                    checked: false,
                    input: String::new(),
                })
            }
        }
    }

    fn into_identity(self) -> (String, String) {
        match self {
            Item::Computed(item) => (item.uuid, item.content),
            Item::Checkbox(item) => (item.uuid, item.content),
            Item::Input(item) => (item.uuid, item.content),
        }
    }
}
