use crate::config::{CatalogConfig, IdStrategy};
use crate::domain::entity::menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use crate::domain::event::MenuEvent;
use crate::domain::service::stats::{CatalogSummary, CourseAverages};
use crate::domain::service::validation::validate;
use crate::domain::value_object::course::CourseFilter;
use crate::error::{CatalogError, Result};
use crate::id::{IdGenerator, SequentialIds, UuidIds};
use crate::infrastructure::event_store::publish_event;
use crate::repo::{Repository, VecRepository};
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Dishes the menu starts with: name, description, course, price.
pub const DEFAULT_MENU: [(&str, &str, &str, &str); 3] = [
    (
        "Tomato Bruschetta",
        "Grilled bread topped with fresh tomato and basil.",
        "Starters",
        "55",
    ),
    (
        "Seared Salmon",
        "Pan seared salmon with lemon butter.",
        "Mains",
        "165",
    ),
    (
        "Chocolate Mousse",
        "Light and airy chocolate mousse.",
        "Dessert",
        "70",
    ),
];

/// The menu: an insertion-ordered set of validated items.
///
/// A catalog is a plain owned value. Share it across threads through
/// [`crate::MenuApi`], which serializes access.
pub struct MenuCatalog {
    repository: VecRepository<MenuItem>,
    ids: Box<dyn IdGenerator>,
    event_sender: Option<Sender<MenuEvent>>,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuCatalog {
    /// Empty catalog with sequential ids.
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIds::new())
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        MenuCatalog {
            repository: VecRepository::new(),
            ids: Box::new(ids),
            event_sender: None,
        }
    }

    /// Publish a [`MenuEvent`] on `sender` after every successful mutation.
    pub fn with_events(mut self, sender: Sender<MenuEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    /// Catalog built from configuration: id strategy and optional seeding.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut catalog = match config.id_strategy {
            IdStrategy::Sequential => Self::with_id_generator(SequentialIds::new()),
            IdStrategy::Uuid => Self::with_id_generator(UuidIds),
        };
        if config.seed_default_menu {
            catalog.seed_default_menu()?;
        }
        Ok(catalog)
    }

    /// Add the three starting dishes through the regular validated path.
    pub fn seed_default_menu(&mut self) -> Result<Vec<MenuItem>> {
        DEFAULT_MENU
            .iter()
            .map(|(name, description, course, price)| {
                self.add(&MenuItemDraft::new(*name, *description, *course, *price))
            })
            .collect()
    }

    /// Validate `draft` and append it with a fresh id.
    pub fn add(&mut self, draft: &MenuItemDraft) -> Result<MenuItem> {
        let valid = validate(draft).inspect_err(|e| warn!("Rejected new menu item: {}", e))?;

        let id = self.ids.next_id();
        let item = valid.into_item(id);
        self.repository
            .add(item.clone())
            .map_err(|_| CatalogError::DuplicateId {
                id: item.id.to_string(),
            })?;

        info!(
            "Added menu item {} '{}' ({}, {})",
            item.id, item.dish_name, item.course, item.price
        );
        self.publish(MenuEvent::ItemAdded { item: item.clone() });

        Ok(item)
    }

    /// Replace every field of the item with `id`, keeping its id and
    /// position. A missing id is reported before any field problem.
    pub fn update(&mut self, id: &MenuItemId, draft: &MenuItemDraft) -> Result<MenuItem> {
        if !self.repository.contains(id) {
            warn!("Cannot update menu item {}: not found", id);
            return Err(CatalogError::not_found(id.as_str()));
        }

        let valid = validate(draft)
            .inspect_err(|e| warn!("Rejected update for menu item {}: {}", id, e))?;

        let item = valid.into_item(id.clone());
        let previous = self
            .repository
            .update(item.clone())
            .map_err(|_| CatalogError::not_found(id.as_str()))?;

        info!("Updated menu item {} '{}'", item.id, item.dish_name);
        self.publish(MenuEvent::ItemUpdated {
            previous,
            current: item.clone(),
        });

        Ok(item)
    }

    /// Remove the item with `id`. Returns false, and changes nothing, when
    /// no such item exists.
    pub fn remove(&mut self, id: &MenuItemId) -> bool {
        match self.repository.remove(id) {
            Ok(item) => {
                info!("Removed menu item {} '{}'", item.id, item.dish_name);
                self.publish(MenuEvent::ItemRemoved { item });
                true
            }
            Err(_) => {
                debug!("Remove of menu item {} ignored: not present", id);
                false
            }
        }
    }

    pub fn get(&self, id: &MenuItemId) -> Option<MenuItem> {
        self.repository.get(id).ok()
    }

    /// Snapshot of all items in insertion order.
    pub fn list(&self) -> Vec<MenuItem> {
        self.repository.get_all()
    }

    pub fn filter(&self, filter: &CourseFilter) -> Vec<MenuItem> {
        self.repository
            .iter()
            .filter(|item| filter.matches(item.course))
            .cloned()
            .collect()
    }

    /// `"All"` or an empty string selects everything, a course name selects
    /// that course, anything else selects nothing.
    pub fn filter_by_course(&self, course: &str) -> Vec<MenuItem> {
        let filter = CourseFilter::parse(course);
        if let CourseFilter::Unknown(value) = &filter {
            debug!("Unknown course filter '{}'", value);
        }
        self.filter(&filter)
    }

    pub fn count(&self) -> usize {
        self.repository.len()
    }

    pub fn average_price_by_course(&self) -> CourseAverages {
        CourseAverages::from_items(self.repository.iter())
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            count: self.count(),
            averages: self.average_price_by_course(),
        }
    }

    fn publish(&self, event: MenuEvent) {
        if let Some(sender) = &self.event_sender {
            publish_event(sender, event);
        }
    }
}
