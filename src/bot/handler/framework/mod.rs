use std::sync::Arc;

use serenity::all::{Command, Framework, GuildId};
use tokio::sync::RwLock;

use crate::{config::store::RoleBotConfig, roles::RoleStore};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub mod register;
mod reload;
mod role;

pub struct InnerData {
    pub config: RoleBotConfig,
    pub roles: RoleStore,
    /// Commands as the platform acknowledged them during setup.
    pub registered: RwLock<Vec<Command>>,
}
pub type Data = Arc<InnerData>;

impl InnerData {
    /// Guild the commands are scoped to, `None` for global registration.
    pub fn guild(&self) -> Option<GuildId> {
        self.config
            .discord
            .guild
            .filter(|id| *id != 0)
            .map(GuildId::new)
    }
}

/// Every command the bot exposes, keyed by name when poise dispatches interactions.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![role::role(), reload::reload_roles()]
}

pub fn framework(config: RoleBotConfig, roles: RoleStore) -> (impl Framework + 'static, Data) {
    let data = Arc::new(InnerData {
        config,
        roles,
        registered: RwLock::new(Vec::new()),
    });

    (
        poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: commands(),
                on_error: |error| Box::pin(on_error(error)),
                ..Default::default()
            })
            .setup({
                let data = data.clone();
                move |ctx, _ready, framework| {
                    Box::pin({
                        async move {
                            let registered = register::register(
                                ctx,
                                &framework.options().commands,
                                data.guild(),
                            )
                            .await?;
                            *data.registered.write().await = registered;

                            Ok(data)
                        }
                    })
                }
            })
            .build(),
        data,
    )
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        // commands we never registered are dropped without a reply
        poise::FrameworkError::UnknownInteraction { .. } => {}
        poise::FrameworkError::Setup {
            error, framework, ..
        } => {
            log::error!("cannot register commands: {error}");
            framework.shard_manager().shutdown_all().await;
        }
        error => {
            if let Err(why) = poise::builtins::on_error(error).await {
                log::error!("error while handling error: {why:?}");
            }
        }
    }
}
