use crate::domain::entity::menu_item::{MenuItem, MenuItemId};

/// Published after a catalog mutation has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    ItemAdded {
        item: MenuItem,
    },
    ItemUpdated {
        previous: MenuItem,
        current: MenuItem,
    },
    ItemRemoved {
        item: MenuItem,
    },
}

impl MenuEvent {
    pub fn item_id(&self) -> &MenuItemId {
        match self {
            MenuEvent::ItemAdded { item } | MenuEvent::ItemRemoved { item } => &item.id,
            MenuEvent::ItemUpdated { current, .. } => &current.id,
        }
    }

    /// Short confirmation text for the presentation layer.
    pub fn confirmation(&self) -> String {
        match self {
            MenuEvent::ItemAdded { item } => format!("Menu item added: {}", item.dish_name),
            MenuEvent::ItemUpdated { current, .. } => {
                format!("Menu item updated: {}", current.dish_name)
            }
            MenuEvent::ItemRemoved { item } => format!("Menu item removed: {}", item.dish_name),
        }
    }
}
