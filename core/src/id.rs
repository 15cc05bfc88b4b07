//! Id generation strategies for new menu items.

use crate::domain::entity::menu_item::MenuItemId;
use uuid::Uuid;

/// Hands out ids for newly added items. An implementation must never return
/// the same id twice over its lifetime.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> MenuItemId;
}

/// Counter starting at 1, rendered in decimal. Removed ids are not reused.
///
/// The counter saturates at `u64::MAX`; after that every call returns the
/// same id, which the catalog rejects as a duplicate.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue counting after `last`, e.g. when items with ids up to
    /// `last` already exist elsewhere.
    pub fn starting_after(last: u64) -> Self {
        SequentialIds { last }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> MenuItemId {
        self.last = self.last.saturating_add(1);
        MenuItemId(self.last.to_string())
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> MenuItemId {
        MenuItemId(Uuid::new_v4().to_string())
    }
}
