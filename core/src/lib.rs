//! Menu catalog for "A Taste With Chef Christoffel".
//!
//! [`MenuCatalog`] owns the dishes and is the single place where form input
//! is validated. Presentation code builds a [`MenuItemDraft`] from raw text
//! and hands it to the catalog; everything stored afterwards is known good.

mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod id;
pub mod infrastructure;
mod repo;

pub use api::MenuApi;
pub use config::{CatalogConfig, ConfigError, IdStrategy, LogConfig};
pub use domain::entity::menu_item::{MenuItem, MenuItemDraft, MenuItemId};
pub use domain::event::MenuEvent;
pub use domain::service::catalog::{DEFAULT_MENU, MenuCatalog};
pub use domain::service::stats::{CatalogSummary, CourseAverages};
pub use domain::value_object::course::{Course, CourseFilter};
pub use domain::value_object::price::Price;
pub use error::{CatalogError, Field, Result};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use infrastructure::event_store::{EventStore, create_event_store};
