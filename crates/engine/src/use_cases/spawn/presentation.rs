//! Presentation mapping - monster to a render-ready card.

use serde::Serialize;

use monsterforge_domain::{Monster, MonsterStats};

/// The one rarity label rendered without emphasis.
pub const COMMON_RARITY: &str = "Common";

/// Decorative marker prefixed to every card title.
pub const TITLE_MARKER: &str = "👾";

/// Glyph used when an element has no dedicated emoji.
pub const FALLBACK_GLYPH: &str = "💎";

/// Accent tier of a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Default,
    Highlighted,
}

impl Accent {
    /// Literal comparison: anything other than exactly `Common` is highlighted,
    /// including misspellings and invented labels.
    pub fn for_rarity(rarity: &str) -> Self {
        if rarity == COMMON_RARITY {
            Accent::Default
        } else {
            Accent::Highlighted
        }
    }

    /// Embed colour as a 24-bit RGB value.
    pub fn color(&self) -> u32 {
        match self {
            Accent::Default => 0x7289DA,
            Accent::Highlighted => 0xFFD700,
        }
    }
}

/// One labeled value on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderField {
    pub name: String,
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

impl RenderField {
    fn new(name: &str, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline,
        }
    }
}

/// Display-ready card handed to the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSpec {
    pub title: String,
    pub accent: Accent,
    pub color: u32,
    pub description: String,
    pub thumbnail_glyph: &'static str,
    pub fields: Vec<RenderField>,
}

impl RenderSpec {
    /// Flatten the card into a markdown chat message for text-only boundaries.
    pub fn to_chat_text(&self) -> String {
        let mut lines = vec![format!("{} **{}**", self.thumbnail_glyph, self.title)];
        if !self.description.is_empty() {
            lines.push(format!("*{}*", self.description));
        }
        lines.push(String::new());
        lines.extend(
            self.fields
                .iter()
                .map(|field| format!("{}: {}", field.name, field.value)),
        );
        lines.join("\n")
    }
}

/// Map a monster onto its display card.
pub fn to_display(monster: &Monster) -> RenderSpec {
    let accent = Accent::for_rarity(monster.rarity());

    RenderSpec {
        title: format!("{} {}", TITLE_MARKER, monster.name()),
        accent,
        color: accent.color(),
        description: monster.bio().to_string(),
        thumbnail_glyph: element_glyph(monster.element()),
        fields: vec![
            RenderField::new("🧬 Element", format!("**{}**", monster.element()), true),
            RenderField::new("⭐ Rarity", monster.rarity(), true),
            RenderField::new("⚔️ Ability", monster.ability().as_str(), false),
            RenderField::new("📊 Stats", stats_summary(monster.stats()), false),
        ],
    }
}

/// `HP: 100 | ATK: 20 | DEF: 15 | SPD: 10`
pub fn stats_summary(stats: &MonsterStats) -> String {
    format!(
        "HP: {} | ATK: {} | DEF: {} | SPD: {}",
        stats.hp, stats.atk, stats.def, stats.spd
    )
}

/// Emoji for well-known element names, case-insensitive.
pub fn element_glyph(element: &str) -> &'static str {
    match element.trim().to_lowercase().as_str() {
        "fire" | "inferno" => "🔥",
        "water" => "💧",
        "earth" => "🪨",
        "lightning" | "plasma" => "⚡",
        "magic" => "🔮",
        "soul" | "spectre" => "👻",
        "legend" => "🐉",
        "abyssal" => "🌑",
        "cyber" => "📡",
        "void" => "🌀",
        "celestial" => "✨",
        "bio-hazard" => "☣️",
        "glitch" => "👾",
        "aura" => "🌸",
        "chrono" => "⏳",
        "vortex" => "🌪️",
        _ => FALLBACK_GLYPH,
    }
}
