use std::path::PathBuf;

use config::store::RoleBotConfig;
use roles::RoleStore;
use utils::log::Logger;

mod bot;
mod config;
mod roles;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Logger::init(None);

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));
    let config = RoleBotConfig::read(path)?;

    let roles = RoleStore::open(&config.roles.path).await?;

    let bot = bot::RoleBot::new(config, roles).await?;
    bot.run().await
}
