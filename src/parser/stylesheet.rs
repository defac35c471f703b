//! Stylesheet rule parsing.
//!
//! Sprite sheets generated for the web ship with a stylesheet holding one
//! rule per sprite:
//!
//! ```text
//! .pkicon.pkicon-025.form-cap.game-family-legends_arceus.color-shiny { width: 21px; height: 20px; background-position: -67px -56px; }
//! .pkicon.pkicon-ball-love { width: 18px; height: 18px; background-position: 0px 0px; }
//! ```
//!
//! Modifier segments are recognised by their prefix (`form-`,
//! `game-family-`, `color-`) and may appear in any order. The one
//! unprefixed segment is the base token. Lines that do not match are
//! ignored, so the parser can be fed a whole stylesheet.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{PositionTable, ResolvedIdentity, SourceRect, SpritePosition};

const FORM_PREFIX: &str = "form-";
const GAME_FAMILY_PREFIX: &str = "game-family-";
const COLOR_PREFIX: &str = "color-";
const ICON_PREFIX: &str = "pkicon-";

/// Colour modifier that marks a shiny sprite.
const SHINY: &str = "shiny";

/// Key prefix used by position tables.
const POSITION_KEY_PREFIX: &str = "pokemon-";

fn rule_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"\.pkicon\.pkicon-(?P<selector>[^\s{]+)",
            r"\s*\{\s*width:\s*(?P<width>\d+)px;",
            r"\s*height:\s*(?P<height>\d+)px;",
            r"\s*background-position:\s*(?P<x>-?\d+)px\s*(?P<y>-?\d+)px;",
            r"\s*\}",
        ))
        .expect("stylesheet rule pattern is valid")
    })
}

/// One sprite rule from a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Base token: a numeric id such as `025` or a literal like `ball-love`.
    /// Empty when the selector only held modifiers.
    pub token: String,
    pub form: Option<String>,
    pub game_family: Option<String>,
    /// Raw colour modifier, e.g. `shiny`.
    pub color: Option<String>,
    pub width: u32,
    pub height: u32,
    /// CSS background-position; usually zero or negative.
    pub offset_x: i64,
    pub offset_y: i64,
    /// The offsets as written, e.g. `-0px -056px`.
    background_position: String,
}

impl StyleRule {
    pub fn is_shiny(&self) -> bool {
        self.color.as_deref() == Some(SHINY)
    }

    /// The naming identity of this rule.
    pub fn identity(&self) -> ResolvedIdentity {
        ResolvedIdentity {
            base_token: self.token.clone(),
            suffix: None,
            form: self.form.clone(),
            game_family: self.game_family.clone(),
            shiny: self.is_shiny(),
        }
    }

    /// The sheet region this rule points at.
    ///
    /// Background positions shift the sheet under the element, so the
    /// sprite's origin is the negated offset.
    pub fn source_rect(&self) -> SourceRect {
        SourceRect::new(-self.offset_x, -self.offset_y, self.width, self.height)
    }

    /// The background position exactly as it appeared in the stylesheet.
    pub fn background_position(&self) -> &str {
        &self.background_position
    }

    /// Key of this rule in a position table, e.g. `pokemon-25-cap-shiny`.
    ///
    /// Only numeric tokens have a key. Leading zeros are dropped and the
    /// modifiers follow in form, game family, shiny order.
    pub fn position_key(&self) -> Option<String> {
        if self.token.is_empty() || !self.token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let id: u64 = self.token.parse().ok()?;

        let mut key = format!("{}{}", POSITION_KEY_PREFIX, id);
        for part in [&self.form, &self.game_family].into_iter().flatten() {
            key.push('-');
            key.push_str(part);
        }
        if self.is_shiny() {
            key.push_str("-shiny");
        }
        Some(key)
    }
}

/// Parse a single stylesheet line.
///
/// Returns `None` for anything that is not a complete sprite rule.
pub fn parse_rule_line(line: &str) -> Option<StyleRule> {
    let caps = rule_pattern().captures(line)?;

    let mut rule = StyleRule {
        token: String::new(),
        form: None,
        game_family: None,
        color: None,
        width: caps["width"].parse().ok()?,
        height: caps["height"].parse().ok()?,
        offset_x: caps["x"].parse().ok()?,
        offset_y: caps["y"].parse().ok()?,
        background_position: format!("{}px {}px", &caps["x"], &caps["y"]),
    };

    for segment in caps["selector"].split('.').filter(|s| !s.is_empty()) {
        if let Some(form) = segment.strip_prefix(FORM_PREFIX) {
            rule.form = Some(form.to_string());
        } else if let Some(family) = segment.strip_prefix(GAME_FAMILY_PREFIX) {
            rule.game_family = Some(family.to_string());
        } else if let Some(color) = segment.strip_prefix(COLOR_PREFIX) {
            rule.color = Some(color.to_string());
        } else if segment.starts_with(ICON_PREFIX) {
            // A repeated class, not part of the identity.
        } else {
            rule.token = segment.to_string();
        }
    }

    Some(rule)
}

/// Parse every sprite rule in a stylesheet, in source order.
pub fn parse_stylesheet(source: &str) -> Vec<StyleRule> {
    source.lines().filter_map(parse_rule_line).collect()
}

/// Build a position table from a stylesheet.
///
/// Rules without a numeric token are left out. When a key repeats, the last
/// rule's position wins but the key keeps its first-seen place.
pub fn extract_positions(source: &str) -> PositionTable {
    let mut table = PositionTable::new();

    for rule in parse_stylesheet(source) {
        let Some(key) = rule.position_key() else {
            continue;
        };
        table.insert(
            key,
            SpritePosition {
                width: rule.width,
                height: rule.height,
                background_position: rule.background_position().to_string(),
            },
        );
    }

    table
}
