use serenity::{
    all::{Context, EventHandler, OnlineStatus, Ready},
    async_trait,
};

mod events;
pub mod framework;

pub use framework::Data;

pub struct Handler {
    pub data: Data,
}
impl Handler {
    pub fn new(data: Data) -> Self {
        Self { data }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!("Logged in as: {}", ready.user.tag());

        let roles = self.data.roles.snapshot().await;
        match roles.is_empty() {
            true => log::warn!("no roles indexed, check {:?}", self.data.roles.path()),
            false => log::info!("indexing {} roles", roles.len()),
        }

        ctx.set_presence(None, OnlineStatus::Online);
    }
}
