use crate::error::AppResult;
use engine::Catalog;
use std::path::Path;

/// Catalog compiled into the binary, used when none is configured.
pub const DEFAULT_CATALOG: &str = include_str!("../catalog/default.toml");

/// Loads the catalog from `path`, or the built-in one when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> AppResult<Catalog> {
    match path {
        Some(path) => Ok(Catalog::from_file(path)?),
        None => {
            log::debug!("Using built-in overlay catalog");
            Ok(Catalog::from_toml_str(DEFAULT_CATALOG)?)
        }
    }
}
