//! In-memory data-access layer for list items.
//!
//! # Overview
//! `ListStore` keeps list items (a task plus two opaque date strings) in
//! insertion order and hands out ids from a counter that never goes back.
//! It offers create, bulk placeholder creation, list, get, partial update and
//! delete. Lookups that miss return `StoreError::NotFound`.
//!
//! # Design
//! - The store is a plain value owned by the host and passed by reference;
//!   there is no process-wide singleton.
//! - Mutations take `&mut self`. Hosts that share the store across threads
//!   put it behind one lock.
//! - Placeholder text is pluggable through `TextProvider`.

pub mod error;
pub mod generate;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use generate::{BulkDates, LoremProvider, TextProvider};
pub use store::ListStore;
pub use types::{ListItem, ListItemInput, ListItemPatch};
