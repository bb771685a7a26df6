//! Catalog metadata for the models the agent knows about.

/// Vendors whose models appear in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelVendor {
    /// OpenAI.
    OpenAI,
    /// Anthropic.
    Anthropic,
    /// Meta.
    Meta,
    /// xAI.
    XAi,
    /// Google.
    Google,
}

/// What a cataloged model can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelCapability {
    /// Multi-turn chat.
    Chat,
    /// Plain text completion.
    Completion,
    /// Incremental output delivery.
    Streaming,
    /// Image understanding.
    Vision,
    /// Embedding generation.
    Embedding,
    /// Image generation.
    Image,
    /// Audio input and output.
    Audio,
    /// Tool use through declared functions.
    FunctionCalling,
}

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelInfo {
    /// The identifier sent to the inference endpoint.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Who serves the model.
    pub vendor: ModelVendor,
    /// What the model can do.
    pub capabilities: &'static [ModelCapability],
    /// The model's reply token ceiling.
    pub max_tokens: u32,
    /// Approximate cost per 1k tokens, in USD, when known.
    pub cost_per_1k_tokens: Option<f64>,
    /// Short description.
    pub description: &'static str,
}

impl ModelInfo {
    /// Returns whether the model supports the given capability.
    #[inline]
    pub fn supports(&self, capability: ModelCapability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// The models this agent knows how to talk to. The first entry is the
/// preferred default.
pub const AVAILABLE_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "openai/gpt-4o",
        name: "GPT-4o",
        vendor: ModelVendor::OpenAI,
        capabilities: &[
            ModelCapability::Chat,
            ModelCapability::Completion,
            ModelCapability::FunctionCalling,
            ModelCapability::Streaming,
            ModelCapability::Vision,
        ],
        max_tokens: 8192,
        cost_per_1k_tokens: Some(0.015),
        description: "Most capable model from OpenAI",
    },
    ModelInfo {
        id: "openai/gpt-4o-mini",
        name: "GPT-4o Mini",
        vendor: ModelVendor::OpenAI,
        capabilities: &[
            ModelCapability::Chat,
            ModelCapability::Completion,
            ModelCapability::FunctionCalling,
            ModelCapability::Streaming,
        ],
        max_tokens: 4096,
        cost_per_1k_tokens: Some(0.005),
        description: "Lightweight version of GPT-4o, optimized for speed \
                      and cost",
    },
    ModelInfo {
        id: "anthropic/claude-3.5-sonnet",
        name: "Claude 3.5 Sonnet",
        vendor: ModelVendor::Anthropic,
        capabilities: &[
            ModelCapability::Chat,
            ModelCapability::Completion,
            ModelCapability::FunctionCalling,
            ModelCapability::Streaming,
        ],
        max_tokens: 8192,
        cost_per_1k_tokens: Some(0.018),
        description: "Claude 3.5 Sonnet model from Anthropic",
    },
];

/// Returns the preferred default model.
#[inline]
pub fn default_model() -> &'static ModelInfo {
    &AVAILABLE_MODELS[0]
}

/// Looks a model up by its identifier.
#[inline]
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    AVAILABLE_MODELS.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_supports_function_calling() {
        assert!(default_model().supports(ModelCapability::FunctionCalling));
    }

    #[test]
    fn test_find_model() {
        let model = find_model("openai/gpt-4o-mini").unwrap();
        assert_eq!(model.name, "GPT-4o Mini");
        assert_eq!(model.vendor, ModelVendor::OpenAI);
        assert!(find_model("openai/gpt-2").is_none());
    }
}
