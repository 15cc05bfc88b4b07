use crate::domain::entity::menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use crate::domain::value_object::course::Course;
use crate::domain::value_object::price::Price;
use crate::error::{CatalogError, Result};

/// Draft fields that passed validation, waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
}

impl ValidDraft {
    pub fn into_item(self, id: MenuItemId) -> MenuItem {
        MenuItem {
            id,
            dish_name: self.dish_name,
            description: self.description,
            course: self.course,
            price: self.price,
        }
    }
}

/// Checks name, description, course and price in that order and stops at
/// the first failure.
pub(crate) fn validate(draft: &MenuItemDraft) -> Result<ValidDraft> {
    let dish_name = draft.dish_name.trim();
    if dish_name.is_empty() {
        return Err(CatalogError::EmptyName);
    }

    let description = draft.description.trim();
    if description.is_empty() {
        return Err(CatalogError::EmptyDescription);
    }

    let course = draft
        .course
        .parse::<Course>()
        .map_err(|_| CatalogError::InvalidCourse {
            value: draft.course.clone(),
        })?;

    let price = Price::parse(&draft.price).ok_or_else(|| CatalogError::InvalidPrice {
        value: draft.price.clone(),
    })?;

    Ok(ValidDraft {
        dish_name: dish_name.to_string(),
        description: description.to_string(),
        course,
        price,
    })
}
