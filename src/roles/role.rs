use serde::{Deserialize, Serialize};
use serenity::all::Colour;

/// A single entry of the role document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub icon: String,
}

impl Role {
    /// `None` when `type` is not one of the known categories.
    pub fn category(&self) -> Option<Category> {
        serde_plain::from_str(&self.kind).ok()
    }

    pub fn colour(&self) -> Option<Colour> {
        self.category().map(Category::colour)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Townsfolk,
    Outsider,
    Minion,
    Demon,
    Fabled,
    Traveler,
}

impl Category {
    pub const fn colour(self) -> Colour {
        match self {
            Self::Townsfolk => Colour::new(3447003),
            Self::Outsider => Colour::new(1752220),
            Self::Minion => Colour::new(15105570),
            Self::Demon => Colour::new(15548997),
            Self::Fabled => Colour::new(15844367),
            Self::Traveler => Colour::new(10181046),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(kind: &str) -> Role {
        Role {
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn known_categories_have_fixed_colours() {
        let expected = [
            ("townsfolk", 3447003),
            ("outsider", 1752220),
            ("minion", 15105570),
            ("demon", 15548997),
            ("fabled", 15844367),
            ("traveler", 10181046),
        ];

        for (kind, colour) in expected {
            assert_eq!(role(kind).colour(), Some(Colour::new(colour)), "{kind}");
        }
    }

    #[test]
    fn unknown_or_missing_category_is_unset() {
        assert_eq!(role("").colour(), None);
        assert_eq!(role("traveller").colour(), None);
        assert_eq!(role("Demon").colour(), None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let role: Role = serde_json::from_str(r#"{"id":"imp"}"#).unwrap();

        assert_eq!(role.id, "imp");
        assert_eq!(role.name, "");
        assert_eq!(role.category(), None);
    }
}
