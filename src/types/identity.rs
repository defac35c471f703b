//! Sprite identities and the output filename policy.
//!
//! An identity is the semantic key of one sprite: a base token (a padded
//! numeric id or a literal name such as `ball-love`) plus optional modifiers.
//! Modifiers are appended in a fixed order that downstream consumers rely on:
//!
//! ```text
//! <base>[-shiny][-<suffix>][-<game family>][-<form>].png
//! ```
//!
//! Grid identities only ever carry a suffix and a form; stylesheet identities
//! only ever carry the shiny flag, a game family and a form.

/// Base tokens whose output names are fixed regardless of modifiers.
const FIXED_NAMES: &[(&str, &str)] = &[("ball-love", "love-ball.png")];

/// Extension of every chopped sprite.
const EXTENSION: &str = "png";

/// The resolved naming key for one sprite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub base_token: String,
    pub suffix: Option<String>,
    pub form: Option<String>,
    pub game_family: Option<String>,
    pub shiny: bool,
}

impl ResolvedIdentity {
    /// Identity of a grid entry: the id is zero-padded to three digits.
    pub fn grid(id: u32, suffix: Option<&str>, form: Option<&str>) -> Self {
        Self {
            base_token: format!("{:03}", id),
            suffix: suffix.map(str::to_string),
            form: form.map(str::to_string),
            ..Default::default()
        }
    }

    /// Output filename of a grid entry.
    ///
    /// Grid tokens are never empty, so this always names the sprite.
    pub fn grid_file_name(id: u32, suffix: Option<&str>, form: Option<&str>) -> String {
        Self::grid(id, suffix, form).compose()
    }

    /// Output filename for this identity.
    ///
    /// Returns `None` when the base token is empty; such sprites cannot be
    /// named and are skipped by the caller.
    pub fn file_name(&self) -> Option<String> {
        if self.base_token.is_empty() {
            return None;
        }
        Some(self.compose())
    }

    fn compose(&self) -> String {
        if let Some((_, fixed)) = FIXED_NAMES
            .iter()
            .find(|(token, _)| *token == self.base_token)
        {
            return fixed.to_string();
        }

        let mut name = self.base_token.clone();
        if self.shiny {
            name.push_str("-shiny");
        }
        for part in [&self.suffix, &self.game_family, &self.form]
            .into_iter()
            .flatten()
        {
            name.push('-');
            name.push_str(part);
        }
        name.push('.');
        name.push_str(EXTENSION);

        name
    }
}
