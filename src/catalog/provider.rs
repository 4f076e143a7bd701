use std::io::Read;
use std::time::Duration;

use crate::error::CatalogError;

/// Where a fresh copy of the app list comes from
pub(crate) trait CatalogSource {
    /// Raw response body; persisted verbatim after it parses
    fn fetch_raw(&self) -> Result<String, CatalogError>;
}

/// Steam Web API over ureq, one GET per call and no retries
pub(crate) struct SteamCatalog {
    agent: ureq::Agent,
    url: String,
}

impl SteamCatalog {
    pub(crate) fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            url: url.into(),
        }
    }
}

impl CatalogSource for SteamCatalog {
    fn fetch_raw(&self) -> Result<String, CatalogError> {
        let response = self.agent.get(&self.url).call()?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(CatalogError::Status(status));
        }

        // The full app list is larger than ureq's default read_to_string limit
        let mut body = response.into_body();
        let mut raw = String::new();
        body.as_reader()
            .read_to_string(&mut raw)
            .map_err(CatalogError::Body)?;
        Ok(raw)
    }
}
