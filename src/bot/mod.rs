use anyhow::{Result, bail};
use handler::Handler;
use serenity::{Client, all::GatewayIntents};

use crate::{config::store::RoleBotConfig, roles::RoleStore};
pub use handler::Data;

mod handler;

pub struct RoleBot {
    client: Client,
    data: Data,
}

impl RoleBot {
    pub async fn new(config: RoleBotConfig, roles: RoleStore) -> Result<Self> {
        if config.discord.token.trim().is_empty() {
            bail!("no discord token set in {:?}", config.path);
        }

        let builder =
            serenity::Client::builder(&config.discord.token, GatewayIntents::non_privileged());

        let (framework, data) = handler::framework::framework(config, roles);
        let handler = Handler::new(data.clone());

        let client = builder.event_handler(handler).framework(framework).await?;

        Ok(Self { client, data })
    }

    /// Runs the gateway until ctrl-c, then optionally deregisters the commands and shuts down.
    ///
    /// The connection closing on its own (bad token, failed registration) is an error.
    pub async fn run(self) -> Result<()> {
        let RoleBot { mut client, data } = self;

        let shard_manager = client.shard_manager.clone();
        let http = client.http.clone();

        let mut gateway = tokio::spawn(async move { client.start().await });

        log::info!("Press Ctrl+C to exit");
        tokio::select! {
            result = &mut gateway => {
                result??;
                bail!("gateway connection closed before shutdown was requested");
            }
            signal = tokio::signal::ctrl_c() => signal?,
        }

        let removed = match data.config.discord.remove_commands {
            true => {
                let registered = data.registered.read().await;
                handler::framework::register::deregister(&http, &registered, data.guild()).await
            }
            false => Ok(()),
        };

        log::info!("Gracefully shutting down.");
        shard_manager.shutdown_all().await;
        gateway.await??;

        removed?;
        Ok(())
    }
}
