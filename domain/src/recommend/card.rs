//! Result cards

use crate::catalog::bean::Bean;
use crate::catalog::persona::Persona;
use crate::core::ids::PersonaId;
use serde::{Deserialize, Serialize};

const DEFAULT_EMOJI: &str = "☕";

/// Persona block shown at the top of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaCard {
    pub emoji: String,
    pub name: String,
    pub description: String,
    pub personality: String,
}

impl PersonaCard {
    /// Fixed, non-personalized card used by omakase
    pub fn omakase() -> Self {
        Self {
            emoji: "🙏".to_string(),
            name: "迷わなくて正解です".to_string(),
            description: "店主が自信を持っておすすめする一杯をどうぞ。".to_string(),
            personality: String::new(),
        }
    }
}

impl From<&Persona> for PersonaCard {
    fn from(persona: &Persona) -> Self {
        Self {
            emoji: persona
                .emoji
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
            name: persona.name.clone(),
            description: persona.description.clone(),
            personality: persona.personality.clone().unwrap_or_default(),
        }
    }
}

/// Second recommendation drawn from the runner-up persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternatePick {
    pub bean: Bean,
    pub from_persona: String,
}

impl AlternatePick {
    /// Copy for the alternate card
    pub fn blurb(&self) -> String {
        format!(
            "「{}」の一面もあるあなたには、{}もおすすめ。",
            self.from_persona, self.bean.name
        )
    }
}

/// Full result of the diagnosis or omakase flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Winning persona; `None` for omakase
    pub persona_id: Option<PersonaId>,
    pub card: PersonaCard,
    pub primary: Bean,
    pub alternate: Option<AlternatePick>,
}

impl Recommendation {
    pub fn is_omakase(&self) -> bool {
        self.persona_id.is_none()
    }
}

/// A blend component with its bean resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    pub role: String,
    pub ratio: Option<u32>,
    pub bean: Bean,
}

impl ResolvedComponent {
    /// "60% / 中煎り" style caption; the ratio part is empty when absent
    pub fn caption(&self) -> String {
        let ratio = self.ratio.map(|r| format!("{}%", r)).unwrap_or_default();
        format!("{} / {}", ratio, self.bean.roast_label)
    }
}

/// Blend decomposed into its resolvable components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendBreakdown {
    pub blend_name: String,
    pub concept: String,
    pub components: Vec<ResolvedComponent>,
}

impl BlendBreakdown {
    pub fn title(&self) -> String {
        format!("🔍 {} の中身", self.blend_name)
    }
}
