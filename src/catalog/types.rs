use std::fmt;

use serde::Deserialize;

/// Steam app list as returned by `ISteamApps/GetAppList/v2`
#[derive(Debug, Deserialize)]
pub(crate) struct AppCatalog {
    applist: AppList,
}

#[derive(Debug, Deserialize)]
struct AppList {
    #[serde(default)]
    apps: Vec<AppEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppEntry {
    pub(crate) appid: AppIdValue,
    #[serde(default)]
    pub(crate) name: String,
}

/// The API emits integers; older caches and mirrors may carry strings.
/// Any JSON number is accepted so a single odd entry cannot sink the list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AppIdValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for AppIdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppIdValue::Number(n) => write!(f, "{n}"),
            AppIdValue::Text(s) => f.write_str(s),
        }
    }
}

impl AppCatalog {
    pub(crate) fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub(crate) fn len(&self) -> usize {
        self.applist.apps.len()
    }

    /// First entry whose id, compared as a string, equals `app_id`
    pub(crate) fn find_name(&self, app_id: &str) -> Option<&str> {
        self.applist
            .apps
            .iter()
            .find(|entry| entry.appid.to_string() == app_id)
            .map(|entry| entry.name.as_str())
    }
}
