//! Catalog error types
//!
//! Every failure here is recoverable: validation errors mean the caller
//! should re-prompt, `NotFound` means its view of the catalog is stale.

use thiserror::Error;

/// Input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DishName,
    Description,
    Course,
    Price,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::DishName => "dish name",
            Field::Description => "description",
            Field::Course => "course",
            Field::Price => "price",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    // ========== Validation ==========
    /// Dish name was empty after trimming
    #[error("Please enter a dish name")]
    EmptyName,

    /// Description was empty after trimming
    #[error("Please enter a description")]
    EmptyDescription,

    /// Course missing or not one of Starters, Mains, Dessert
    #[error("Please select a course (got '{value}')")]
    InvalidCourse { value: String },

    /// Price not a finite number greater than zero
    #[error("Please enter a valid price (got '{value}')")]
    InvalidPrice { value: String },

    // ========== Identity ==========
    /// No item with this id in the catalog
    #[error("Menu item '{id}' not found")]
    NotFound { id: String },

    /// Id generator handed out an id that is already stored
    #[error("Menu item id '{id}' is already in use")]
    DuplicateId { id: String },

    // ========== Shared access ==========
    /// Shared catalog handle can no longer be locked
    #[error("Menu catalog unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Which input field failed, for targeted messages next to the form field.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::EmptyName => Some(Field::DishName),
            Self::EmptyDescription => Some(Field::Description),
            Self::InvalidCourse { .. } => Some(Field::Course),
            Self::InvalidPrice { .. } => Some(Field::Price),
            Self::NotFound { .. } | Self::DuplicateId { .. } | Self::Unavailable { .. } => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }
}
