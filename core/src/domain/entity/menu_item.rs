use crate::domain::value_object::course::Course;
use crate::domain::value_object::price::Price;
use crate::repo::Keyed;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuItemId {
    fn from(value: &str) -> Self {
        MenuItemId(value.to_string())
    }
}

impl From<String> for MenuItemId {
    fn from(value: String) -> Self {
        MenuItemId(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
}

impl Keyed for MenuItem {
    type Key = MenuItemId;

    fn key(&self) -> &MenuItemId {
        &self.id
    }
}

/// Raw form input as the presentation layer collected it. Nothing here is
/// validated; the catalog decides whether it becomes a [`MenuItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemDraft {
    pub dish_name: String,
    pub description: String,
    /// Selected course name, empty when nothing was selected.
    pub course: String,
    pub price: String,
}

impl MenuItemDraft {
    pub fn new(
        dish_name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        MenuItemDraft {
            dish_name: dish_name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }

    /// Prefill an edit form from a stored item.
    pub fn from_item(item: &MenuItem) -> Self {
        MenuItemDraft {
            dish_name: item.dish_name.clone(),
            description: item.description.clone(),
            course: item.course.to_string(),
            price: item.price.amount().to_string(),
        }
    }
}
