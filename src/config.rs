use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::consts::{
    CACHE_BASE_ENV, CACHE_FILENAME, CACHE_SUBDIR, DEFAULT_FETCH_TIMEOUT_SECS, STEAM_APPLIST_URL,
};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) applist_url: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(config_paths: &[PathBuf]) -> Self {
        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if config.debug {
                            eprintln!("[DEBUG] Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Platform config dir: ~/.config/fossilize_status/config.toml on Linux
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CACHE_SUBDIR).join("config.toml"));
        }

        // 2. Home directory: ~/.fossilize_status.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".fossilize_status.toml"));
        }

        paths
    }
}

/// Where the app catalog lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CacheLocation {
    file: PathBuf,
}

impl CacheLocation {
    pub(crate) fn from_base(base: &Path) -> Self {
        Self {
            file: base.join(CACHE_SUBDIR).join(CACHE_FILENAME),
        }
    }

    /// `$XDG_CACHE_HOME` when set, else the platform cache root, else `~/.cache`
    pub(crate) fn resolve(env_base: Option<OsString>) -> Option<Self> {
        let base = env_base
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::cache_dir)
            .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))?;
        Some(Self::from_base(&base))
    }

    pub(crate) fn file(&self) -> &Path {
        &self.file
    }

    pub(crate) fn dir(&self) -> Option<&Path> {
        self.file.parent()
    }
}

/// Resolved runtime settings, built once in `main`
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) cache: Option<CacheLocation>,
    pub(crate) applist_url: String,
    pub(crate) timeout: Duration,
    pub(crate) debug: bool,
}

impl Settings {
    pub(crate) fn from_env(config: Config) -> Self {
        Self::resolve(config, std::env::var_os(CACHE_BASE_ENV))
    }

    fn resolve(config: Config, cache_base: Option<OsString>) -> Self {
        Self {
            cache: CacheLocation::resolve(cache_base),
            applist_url: config
                .applist_url
                .unwrap_or_else(|| STEAM_APPLIST_URL.to_string()),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)),
            debug: config.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_cover_config_dir_then_home() {
        let paths = Config::get_config_paths();
        let mut expected = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            expected.push(config_dir.join("fossilize_status").join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            expected.push(home.join(".fossilize_status.toml"));
        }
        assert_eq!(paths, expected);
    }

    #[test]
    fn load_from_reads_first_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        fs::write(&broken, "debug = [").unwrap();
        fs::write(
            &valid,
            "applist_url = \"http://127.0.0.1:9/applist\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = Config::load_from(&[dir.path().join("missing.toml"), broken, valid]);
        assert_eq!(
            config.applist_url.as_deref(),
            Some("http://127.0.0.1:9/applist")
        );
        assert_eq!(config.timeout_secs, Some(5));
        assert!(!config.debug);
    }

    #[test]
    fn load_from_defaults_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&[dir.path().join("none.toml")]);
        assert!(config.applist_url.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn cache_location_uses_env_base() {
        let loc = CacheLocation::resolve(Some(OsString::from("/tmp/xdg-cache"))).unwrap();
        assert_eq!(
            loc.file(),
            Path::new("/tmp/xdg-cache/fossilize_status/steam_applist.json")
        );
        assert_eq!(loc.dir(), Some(Path::new("/tmp/xdg-cache/fossilize_status")));
    }

    #[test]
    fn cache_location_ignores_empty_env() {
        let loc = CacheLocation::resolve(Some(OsString::new()));
        if let Some(loc) = loc {
            assert!(loc.file().ends_with("fossilize_status/steam_applist.json"));
            assert!(!loc.file().starts_with("fossilize_status"));
        }
    }

    #[test]
    fn settings_defaults() {
        let settings = Settings::resolve(Config::default(), Some(OsString::from("/c")));
        assert_eq!(settings.applist_url, STEAM_APPLIST_URL);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
        assert!(!settings.debug);
        assert_eq!(
            settings.cache,
            Some(CacheLocation::from_base(Path::new("/c")))
        );
    }

    #[test]
    fn settings_take_config_overrides() {
        let config = Config {
            debug: true,
            applist_url: Some("http://localhost/apps".to_string()),
            timeout_secs: Some(3),
        };
        let settings = Settings::resolve(config, None);
        assert_eq!(settings.applist_url, "http://localhost/apps");
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert!(settings.debug);
    }
}
