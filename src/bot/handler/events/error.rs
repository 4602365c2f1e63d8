use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::bot::handler::framework::Context;

use super::super::Handler;

impl Handler {
    /// relays an error back to whoever invoked the command, logging it either way
    pub async fn on_error(error: HandlerError<'_>) {
        let HandlerError { error, ctx } = error;

        log::error!("handling error:\n\n{error:?}\n");

        let embed = CreateEmbed::default()
            .color(0xFF6961)
            .title("Role bot encountered an error")
            .description(format!("```{error}```"));

        if let Err(why) = ctx
            .send(CreateReply::default().embed(embed).ephemeral(true))
            .await
        {
            log::error!("error during propagation of error to user: {why:?}");
        }
    }
}

pub struct HandlerError<'a> {
    error: anyhow::Error,
    ctx: Context<'a>,
}

pub enum HandlerResult<'a, T> {
    Ok(T),
    Err(HandlerError<'a>),
}

impl<'a, T> HandlerResult<'a, T> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    pub fn err(error: impl Into<anyhow::Error>, ctx: Context<'a>) -> Self {
        Self::Err(HandlerError {
            error: error.into(),
            ctx,
        })
    }
}
