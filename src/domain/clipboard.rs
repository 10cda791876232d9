//! Clipboard state machine
//!
//! Tracks the subtree last cut (or, reserved, copied) while it awaits a
//! paste. A single slot: cutting again before pasting replaces the held
//! item and the previous subtree is lost.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Item;

/// Plain clipboard state tag, for read access and display binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Standby,
    Cut,
    Copy,
}

/// Clipboard state with its held subtree.
///
/// `Copy` is declared for embedders but no engine operation currently
/// produces it; `paste_on_target` honors whichever variant holds an item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "item")]
pub enum Clipboard {
    #[default]
    Standby,
    Cut(Item),
    Copy(Item),
}

impl Clipboard {
    /// The state tag without the held payload.
    pub fn mode(&self) -> Mode {
        match self {
            Clipboard::Standby => Mode::Standby,
            Clipboard::Cut(_) => Mode::Cut,
            Clipboard::Copy(_) => Mode::Copy,
        }
    }

    /// The held subtree, if any.
    pub fn held(&self) -> Option<&Item> {
        match self {
            Clipboard::Standby => None,
            Clipboard::Cut(item) | Clipboard::Copy(item) => Some(item),
        }
    }

    /// Whether no subtree is held.
    pub fn is_empty(&self) -> bool {
        matches!(self, Clipboard::Standby)
    }

    /// Take the held subtree out, resetting the clipboard to `Standby`.
    pub fn take(&mut self) -> Option<Item> {
        match std::mem::take(self) {
            Clipboard::Standby => None,
            Clipboard::Cut(item) | Clipboard::Copy(item) => Some(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CheckboxItem;

    #[test]
    fn test_take_resets_to_standby() {
        let mut clipboard = Clipboard::Cut(Item::Checkbox(CheckboxItem::new("a")));
        assert_eq!(clipboard.mode(), Mode::Cut);

        let held = clipboard.take();
        assert!(held.is_some());
        assert!(clipboard.is_empty());
        assert!(clipboard.take().is_none());
    }
}
