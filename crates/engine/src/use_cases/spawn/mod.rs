//! Monster spawning - description in, render-ready card out.
//!
//! Pipeline: rarity roll, prompt composition, one LLM call, response parsing,
//! presentation mapping. Only the LLM call suspends; everything else is a
//! synchronous transformation over request-local data.

mod generation;
mod presentation;
mod prompt;
mod rarity;
mod response_parser;

use std::sync::Arc;

use tracing::Instrument;

use crate::infrastructure::ports::{LlmError, LlmPort, RandomPort};

pub use generation::{GenerationClient, DEFAULT_TEMPERATURE};
pub use presentation::{
    element_glyph, stats_summary, to_display, Accent, RenderField, RenderSpec, COMMON_RARITY,
};
pub use prompt::{build_prompt, MONSTER_SCHEMA};
pub use rarity::RarityPolicy;
pub use response_parser::{parse_monster, strip_code_fences, FormatError};

/// Container for spawn use cases.
pub struct SpawnUseCases {
    pub spawn: Arc<SpawnMonster>,
}

impl SpawnUseCases {
    pub fn new(spawn: Arc<SpawnMonster>) -> Self {
        Self { spawn }
    }
}

/// Why a spawn produced no monster.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpawnError {
    /// The generation call failed, timed out, or was rejected.
    #[error("generation failed: {0}")]
    Transport(#[from] LlmError),

    /// The completion arrived but was not a usable monster.
    #[error("generation returned an unusable monster: {0}")]
    Format(#[from] FormatError),
}

impl SpawnError {
    /// Message safe to show to the requesting user. Never includes the cause.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Transport(_) => {
                "⚠️ The ritual failed: the summoning circle went silent. Please try again."
            }
            Self::Format(_) => {
                "⚠️ The ritual failed: the creature took a shape no one could read. Please try again."
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Runs the whole spawn pipeline for one request.
pub struct SpawnMonster {
    policy: RarityPolicy,
    client: GenerationClient,
    random: Arc<dyn RandomPort>,
}

impl SpawnMonster {
    pub fn new(llm: Arc<dyn LlmPort>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            policy: RarityPolicy::new(random.clone()),
            client: GenerationClient::new(llm),
            random,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.client = self.client.with_temperature(temperature);
        self
    }

    /// Generate one monster from a free-text description.
    ///
    /// `eligible_for_custom` gates the invented-element tier; callers that
    /// allow rare generation pass `true`.
    pub async fn execute(
        &self,
        description: &str,
        eligible_for_custom: bool,
    ) -> Result<RenderSpec, SpawnError> {
        let request_id = self.random.gen_uuid();
        let span = tracing::info_span!("spawn", request_id = %request_id);

        async {
            let (tier, instruction) = self.policy.select_tier(eligible_for_custom);
            let prompt = build_prompt(description, &instruction);

            let raw = self.client.invoke(&prompt).await.map_err(|e| {
                tracing::warn!(error = %e, tier = %tier, "Monster generation failed");
                SpawnError::from(e)
            })?;

            let monster = parse_monster(&raw)?;
            tracing::info!(
                name = %monster.name(),
                element = %monster.element(),
                rarity = %monster.rarity(),
                tier = %tier,
                "Monster spawned"
            );

            Ok(to_display(&monster))
        }
        .instrument(span)
        .await
    }
}
