//! Detect a running fossilize_replay process
//!
//! Lists processes with `ps -ef` and pulls the Steam app id out of the
//! `steamapps/shadercache/<appid>/...` path on the replay command line.

use std::fmt;
use std::process::{Command, Stdio};

use crate::consts::{REPLAY_PROCESS_TOKEN, SHADERCACHE_MARKER};
use crate::error::ScanError;
use crate::utils::debug_enabled;

/// Steam application id as it appears in the shader cache path
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SteamAppId(String);

impl SteamAppId {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SteamAppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn find_target_app_id() -> Option<SteamAppId> {
    match list_processes() {
        Ok(listing) => scan_process_list(&listing),
        Err(e) => {
            if debug_enabled() {
                eprintln!("[DEBUG] Process scan failed: {e}");
            }
            None
        }
    }
}

fn list_processes() -> Result<String, ScanError> {
    let output = Command::new("ps")
        .arg("-ef")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::NotFound
            } else {
                ScanError::Spawn(e)
            }
        })?;

    // ps may exit non-zero after printing a usable listing
    if !output.status.success() && debug_enabled() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        eprintln!("[DEBUG] ps exited with {}: {}", output.status, stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// First replay process line carrying a shader cache path wins
pub(crate) fn scan_process_list(listing: &str) -> Option<SteamAppId> {
    listing
        .lines()
        .filter(|line| line.to_lowercase().contains(REPLAY_PROCESS_TOKEN))
        .find_map(extract_app_id)
}

fn extract_app_id(line: &str) -> Option<SteamAppId> {
    let (_, rest) = line.split_once(SHADERCACHE_MARKER)?;
    let segment = rest
        .split('/')
        .next()?
        .split(char::is_whitespace)
        .next()?;
    if segment.is_empty() {
        return None;
    }
    Some(SteamAppId(segment.to_string()))
}
