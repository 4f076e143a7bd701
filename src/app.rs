use crate::catalog::{CatalogResolver, SteamCatalog};
use crate::config::Settings;
use crate::process::{SteamAppId, find_target_app_id};

pub(crate) fn run(settings: &Settings) {
    match find_target_app_id() {
        Some(app_id) => {
            println!("Found Steam App ID: {app_id}");
            match lookup_game_name(settings, &app_id) {
                Some(name) => println!("Game Name: {name}"),
                None => println!("Could not find game name"),
            }
        }
        None => println!("No fossilize process found"),
    }
}

fn lookup_game_name(settings: &Settings, app_id: &SteamAppId) -> Option<String> {
    let Some(cache) = settings.cache.as_ref() else {
        eprintln!("Could not determine a cache directory; set XDG_CACHE_HOME");
        return None;
    };

    let source = SteamCatalog::new(settings.applist_url.as_str(), settings.timeout);
    match CatalogResolver::new(cache, source).resolve_name(app_id.as_str()) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("{e}");
            None
        }
    }
}
