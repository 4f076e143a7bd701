mod scanner;

pub(crate) use scanner::{SteamAppId, find_target_app_id};
