//! Domain layer: entities and pure tree logic
//!
//! This layer is independent of external concerns (no I/O, no config
//! loading, no session state). Every mutation is a pure function from a
//! tree to a new tree.

pub mod clipboard;
pub mod entities;
pub mod error;
pub mod eval;
pub mod ops;
pub mod rewrite;

pub use clipboard::{Clipboard, Mode};
pub use entities::{
    CheckboxItem, ComputeRule, ComputedItem, InputItem, Item, ItemTag, DEFAULT_CONTENT,
};
pub use error::{DomainError, DomainResult};
pub use rewrite::{contains, find, rewrite, validate_unique_uuids};
