//! Generation client adapter - one prompt in, one raw completion out.

use std::sync::Arc;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest};

/// Sampling temperature used when none is configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Sends a composed prompt to the LLM port.
///
/// Exactly one `generate` call per `invoke`; retrying is left to whoever
/// composed the port.
pub struct GenerationClient {
    llm: Arc<dyn LlmPort>,
    temperature: f32,
}

impl GenerationClient {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self {
            llm,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Return the raw completion text.
    ///
    /// A blank completion is a transport failure: nothing was generated.
    pub async fn invoke(&self, prompt: &str) -> Result<String, LlmError> {
        let request = LlmRequest::new(prompt).with_temperature(self.temperature);

        let response = self.llm.generate(request).await?;

        if response.content.trim().is_empty() {
            return Err(LlmError::invalid_response("LLM returned an empty completion"));
        }

        tracing::debug!(
            finish_reason = ?response.finish_reason,
            chars = response.content.len(),
            total_tokens = response.usage.map(|u| u.total_tokens),
            "Received monster completion"
        );
        Ok(response.content)
    }
}
