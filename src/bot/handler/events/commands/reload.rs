use crate::bot::handler::{events::HandlerResult, framework::Context};

/// Rebuilds the role index from disk, the previous index survives a failed reload
pub async fn reload_roles(ctx: Context<'_>) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let count = data.roles.reload().await?;
        log::info!(
            "{} reloaded {:?}, now indexing {count} roles",
            ctx.author().name,
            data.roles.path()
        );

        ctx.say(reloaded(count)).await?;

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}

fn reloaded(count: usize) -> String {
    format!("Reloaded roles, now indexing {count} roles!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_reports_count() {
        assert_eq!(reloaded(5), "Reloaded roles, now indexing 5 roles!");
        assert_eq!(reloaded(0), "Reloaded roles, now indexing 0 roles!");
    }
}
