use serenity::all::{Command, GuildId, Http};

/// Registers `commands` in `guild`, or globally when no guild is given.
pub async fn register<U, E>(
    http: impl AsRef<Http>,
    commands: &[poise::Command<U, E>],
    guild: Option<GuildId>,
) -> Result<Vec<Command>, serenity::Error> {
    let builders = poise::builtins::create_application_commands(commands);

    log::info!("Adding commands...");
    let registered = match guild {
        Some(guild) => guild.set_commands(http, builders).await?,
        None => Command::set_global_commands(http, builders).await?,
    };

    for command in &registered {
        log::debug!("registered '{}' ({})", command.name, command.id);
    }

    Ok(registered)
}

pub async fn deregister(
    http: impl AsRef<Http>,
    commands: &[Command],
    guild: Option<GuildId>,
) -> Result<(), serenity::Error> {
    log::info!("Removing commands...");

    for command in commands {
        let removed = match guild {
            Some(guild) => guild.delete_command(&http, command.id).await,
            None => Command::delete_global_command(&http, command.id).await,
        };

        if let Err(why) = removed {
            log::error!("Cannot delete '{}' command: {why}", command.name);
            return Err(why);
        }
    }

    Ok(())
}
