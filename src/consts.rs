/// Executable name of the Steam shader-cache replay tool, matched case-insensitively
pub(crate) const REPLAY_PROCESS_TOKEN: &str = "fossilize_replay";

/// Path marker preceding a Steam application's shader cache directory
pub(crate) const SHADERCACHE_MARKER: &str = "steamapps/shadercache/";

/// Steam Web API endpoint returning the full application list
pub(crate) const STEAM_APPLIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";

/// Directory under the cache base holding the catalog
pub(crate) const CACHE_SUBDIR: &str = "fossilize_status";

pub(crate) const CACHE_FILENAME: &str = "steam_applist.json";

/// Environment variable overriding the per-user cache base directory
pub(crate) const CACHE_BASE_ENV: &str = "XDG_CACHE_HOME";

pub(crate) const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;
