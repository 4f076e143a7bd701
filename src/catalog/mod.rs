mod cache;
mod provider;
mod resolver;
mod types;

pub(crate) use provider::SteamCatalog;
pub(crate) use resolver::CatalogResolver;
