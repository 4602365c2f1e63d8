use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Get information about the requested role, with possible jinxes.
#[poise::command(slash_command)]
pub(super) async fn role(
    ctx: Context<'_>,
    #[description = "The role you want information on."] role: String,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::role(ctx, role).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
