use serde_json::Value;
use tracing::{debug, info};

use crate::creators::record::{coerce_reflection, PromptPair};
use crate::creators::settings::ArtifactBrief;
use crate::creators::template::{
    render_elements_request, render_finalize_request, render_reflection_request,
};
use crate::creators::vocabulary::Vocabulary;
use crate::llm::{normalize_response, CompletionClient, ExpectedShape, LlmError};

/// One pipeline engine for every artifact domain; the vocabulary carries
/// all portrait/sculpture differences. Holds no request state, so a single
/// instance is shared freely across concurrent requests.
#[derive(Clone)]
pub struct ArtifactCreator {
    client: CompletionClient,
    vocabulary: &'static Vocabulary,
}

impl ArtifactCreator {
    pub fn new(client: CompletionClient, vocabulary: &'static Vocabulary) -> Self {
        ArtifactCreator { client, vocabulary }
    }

    pub fn name(&self) -> &'static str {
        self.vocabulary.name
    }

    pub async fn generate_elements(&self, brief: &ArtifactBrief) -> Result<String, LlmError> {
        info!(
            "Generating {} description for concept: {}",
            self.vocabulary.name, brief.concept
        );
        debug!(
            "Generation parameters: seed={} steps={} samples={} cfg_scale={} model_type={}",
            brief.params.seed,
            brief.params.steps,
            brief.params.samples,
            brief.params.cfg_scale,
            brief.params.model_type
        );

        let user_text = render_elements_request(self.vocabulary, brief);
        let operation = format!("{}:generate_elements", self.vocabulary.name);
        let elements = self
            .client
            .complete(&operation, self.vocabulary.elements_system, &user_text)
            .await?;
        info!("Generated {} description", self.vocabulary.name);
        Ok(elements)
    }

    pub async fn reflect(&self, concept: &str, elements: &str) -> Result<Value, LlmError> {
        info!("Reflecting on {} description", self.vocabulary.name);
        let user_text = render_reflection_request(self.vocabulary, concept, elements);
        let operation = format!("{}:reflect", self.vocabulary.name);
        let response = self
            .client
            .complete(&operation, self.vocabulary.reflection_system, &user_text)
            .await?;
        info!("Completed {} reflection", self.vocabulary.name);

        let normalized = normalize_response(&response, ExpectedShape::Passthrough);
        Ok(coerce_reflection(normalized, concept))
    }

    pub async fn finalize_prompts(&self, description: &str) -> Result<Value, LlmError> {
        info!("Generating final {} prompts", self.vocabulary.name);
        let user_text = render_finalize_request(self.vocabulary, description);
        let operation = format!("{}:finalize_prompts", self.vocabulary.name);
        let response = self
            .client
            .complete(&operation, self.vocabulary.finalize_system, &user_text)
            .await?;
        info!("Generated final {} prompts", self.vocabulary.name);

        Ok(normalize_response(&response, ExpectedShape::PromptPair))
    }

    pub async fn generate(&self, brief: &ArtifactBrief) -> Result<PromptPair, LlmError> {
        let elements = self.generate_elements(brief).await?;
        let reflection = self.reflect(&brief.concept, &elements).await?;
        let description = description_text(&reflection);
        let prompts = self.finalize_prompts(&description).await?;
        Ok(PromptPair::from_value(&prompts))
    }
}

/// Reflection output may be a plain string or a structured record; either
/// way the next stage wants text.
pub fn description_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
