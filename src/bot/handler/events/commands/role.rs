use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::bot::handler::{events::HandlerResult, framework::Context};
use crate::roles::Role;

/// Looks `query` up case-insensitively and replies with the role embed
pub async fn role(ctx: Context<'_>, query: String) -> HandlerResult<()> {
    let role = ctx.data().roles.lookup(&query).await;

    match ctx.send(reply(role.as_ref(), &query)).await {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}

fn reply(role: Option<&Role>, query: &str) -> CreateReply {
    match role {
        Some(role) => CreateReply::default().embed(embed(role)),
        None => CreateReply::default().content(not_found(query)),
    }
}

fn not_found(query: &str) -> String {
    format!("No role that matches '{query}' found. Try again with a different role.")
}

fn embed(role: &Role) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(&role.name);

    if let Some(colour) = role.colour() {
        embed = embed.colour(colour);
    }
    // empty strings are left off, the platform rejects them
    if !role.description.is_empty() {
        embed = embed.description(&role.description);
    }
    if !role.icon.is_empty() {
        embed = embed.thumbnail(&role.icon);
    }

    embed
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::roles::RoleIndex;

    fn imp() -> Role {
        Role {
            id: "imp".to_string(),
            name: "Imp".to_string(),
            kind: "demon".to_string(),
            description: "Each night...".to_string(),
            icon: "http://x/imp.png".to_string(),
        }
    }

    fn json(embed: &CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    #[test]
    fn found_role_renders_embed() {
        let index: RoleIndex = [imp()].into_iter().collect();

        let reply = reply(index.get("Imp"), "Imp");

        assert_eq!(reply.content, None);
        assert_eq!(reply.embeds.len(), 1);

        let embed = json(&reply.embeds[0]);
        assert_eq!(embed["title"], "Imp");
        assert_eq!(embed["color"], 15548997);
        assert_eq!(embed["description"], "Each night...");
        assert_eq!(embed["thumbnail"]["url"], "http://x/imp.png");
    }

    #[test]
    fn missing_role_echoes_original_input() {
        let index = RoleIndex::default();

        let reply = reply(index.get("IMP"), "IMP");

        assert!(reply.embeds.is_empty());
        assert_eq!(
            reply.content.as_deref(),
            Some("No role that matches 'IMP' found. Try again with a different role.")
        );
    }

    #[test]
    fn empty_document_reports_not_found() {
        let index: RoleIndex = Vec::<Role>::new().into_iter().collect();

        assert_eq!(
            reply(index.get("imp"), "imp").content.as_deref(),
            Some("No role that matches 'imp' found. Try again with a different role.")
        );
    }

    #[test]
    fn unknown_category_leaves_colour_unset() {
        let role = Role {
            kind: "loric".to_string(),
            ..imp()
        };

        let embed = json(&embed(&role));

        assert!(embed["color"].is_null());
        assert_eq!(embed["title"], "Imp");
    }

    #[test]
    fn every_category_sets_its_colour() {
        for (kind, colour) in [
            ("townsfolk", 3447003),
            ("outsider", 1752220),
            ("minion", 15105570),
            ("demon", 15548997),
            ("fabled", 15844367),
            ("traveler", 10181046),
        ] {
            let role = Role {
                kind: kind.to_string(),
                ..imp()
            };

            assert_eq!(json(&embed(&role))["color"], colour, "{kind}");
        }
    }
}
