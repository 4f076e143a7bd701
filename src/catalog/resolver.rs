use std::time::Instant;

use crate::config::CacheLocation;
use crate::error::CatalogError;
use crate::utils::debug_enabled;

use super::cache::{load_cached_catalog, save_raw_catalog};
use super::provider::CatalogSource;
use super::types::AppCatalog;

/// Resolves app ids to names from the on-disk catalog, refreshing it on a miss
pub(crate) struct CatalogResolver<'a, S> {
    cache: &'a CacheLocation,
    source: S,
}

impl<'a, S: CatalogSource> CatalogResolver<'a, S> {
    pub(crate) fn new(cache: &'a CacheLocation, source: S) -> Self {
        Self { cache, source }
    }

    /// `Ok(None)` when the id is absent even from a freshly fetched catalog.
    ///
    /// A cached catalog that lacks the id is refetched once; a catalog that
    /// was just fetched is never fetched again.
    pub(crate) fn resolve_name(&self, app_id: &str) -> Result<Option<String>, CatalogError> {
        let (catalog, fetched) = match load_cached_catalog(self.cache) {
            Ok(catalog) => (catalog, false),
            Err(e) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] Cached app list unusable ({e}), fetching");
                }
                (self.refresh()?, true)
            }
        };

        if let Some(name) = catalog.find_name(app_id) {
            return Ok(Some(name.to_string()));
        }
        if fetched {
            return Ok(None);
        }

        if debug_enabled() {
            eprintln!("[DEBUG] App {app_id} not in cached app list, refreshing");
        }
        let catalog = self.refresh()?;
        Ok(catalog.find_name(app_id).map(str::to_string))
    }

    fn refresh(&self) -> Result<AppCatalog, CatalogError> {
        let start = Instant::now();
        let raw = self.source.fetch_raw()?;
        let catalog = AppCatalog::from_json(&raw)?;
        save_raw_catalog(self.cache, &raw)?;
        if debug_enabled() {
            eprintln!(
                "[DEBUG] Fetched {} apps ({:.2}ms)",
                catalog.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        Ok(catalog)
    }
}
