use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Reload role information.
#[poise::command(slash_command, rename = "reload-roles")]
pub(super) async fn reload_roles(ctx: Context<'_>) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::reload_roles(ctx).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
