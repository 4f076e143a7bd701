use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::CacheLocation;
use crate::error::CatalogError;

use super::types::AppCatalog;

pub(super) fn load_cached_catalog(location: &CacheLocation) -> Result<AppCatalog, CatalogError> {
    let path = location.file();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::ReadCache {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AppCatalog::from_json(&raw)?)
}

/// Replaces the cache file with `raw`, creating its directory first.
///
/// Written to a sibling temp file and renamed over the old one, so a failed
/// write leaves the previous cache untouched.
pub(super) fn save_raw_catalog(location: &CacheLocation, raw: &str) -> Result<(), CatalogError> {
    let dir = location.dir().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(|source| CatalogError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = location.file();
    let write_err = |source| CatalogError::WriteCache {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(raw.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
