use crate::domain::entity::menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use crate::domain::service::catalog::MenuCatalog;
use crate::domain::service::stats::{CatalogSummary, CourseAverages};
use crate::error::{CatalogError, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to one catalog for callers on several threads.
///
/// Every call takes the lock for its whole duration, so each operation is
/// applied atomically with respect to the others.
#[derive(Clone)]
pub struct MenuApi {
    catalog: Arc<Mutex<MenuCatalog>>,
}

impl MenuApi {
    pub fn new(catalog: MenuCatalog) -> Self {
        MenuApi {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MenuCatalog>> {
        self.catalog.lock().map_err(|e| CatalogError::Unavailable {
            reason: format!("catalog lock poisoned: {e}"),
        })
    }

    /// Add a new menu item
    pub fn add(&self, draft: &MenuItemDraft) -> Result<MenuItem> {
        self.lock()?.add(draft)
    }

    /// Replace an existing menu item
    pub fn update(&self, id: &MenuItemId, draft: &MenuItemDraft) -> Result<MenuItem> {
        self.lock()?.update(id, draft)
    }

    /// Remove a menu item; `Ok(false)` if it was not there
    pub fn remove(&self, id: &MenuItemId) -> Result<bool> {
        Ok(self.lock()?.remove(id))
    }

    pub fn get(&self, id: &MenuItemId) -> Result<Option<MenuItem>> {
        Ok(self.lock()?.get(id))
    }

    pub fn list(&self) -> Result<Vec<MenuItem>> {
        Ok(self.lock()?.list())
    }

    pub fn filter_by_course(&self, course: &str) -> Result<Vec<MenuItem>> {
        Ok(self.lock()?.filter_by_course(course))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.lock()?.count())
    }

    pub fn average_price_by_course(&self) -> Result<CourseAverages> {
        Ok(self.lock()?.average_price_by_course())
    }

    pub fn summary(&self) -> Result<CatalogSummary> {
        Ok(self.lock()?.summary())
    }
}
