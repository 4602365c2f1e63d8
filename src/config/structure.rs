use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RoleBotConfigTOML {
    pub config: RoleBotConfigInner,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RoleBotConfigInner {
    pub discord: DiscordConfig,
    #[serde(default)]
    pub roles: RolesConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DiscordConfig {
    pub token: String,
    /// Registers the commands in this guild only, instead of globally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<u64>,
    /// Deletes the registered commands again when shutting down.
    #[serde(default)]
    pub remove_commands: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RolesConfig {
    pub path: PathBuf,
}

impl Default for RolesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("roleData.json"),
        }
    }
}
