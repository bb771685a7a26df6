use serde::{Deserialize, Serialize};

/// A complete reply from the model provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelReply {
    /// The text content, if the model produced any.
    pub content: Option<String>,
    /// Tool calls requested by the model, in the order the provider
    /// returned them.
    pub tool_calls: Vec<ToolCallRequest>,
    /// The reason the model finished generating.
    pub finish_reason: ModelFinishReason,
    /// Token accounting reported by the provider, if available.
    pub usage: Option<TokenUsage>,
}

/// The reason why a model reply has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFinishReason {
    /// The model needs to call a tool.
    ToolCalls,
    /// The model has finished generating text.
    Stop,
}

/// Describes a tool call request from the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The unique identifier for the tool call request.
    pub id: String,
    /// The name of the tool to call.
    pub name: String,
    /// The argument payload, kept as the serialized text the provider
    /// sent. Parsing is deferred to the tool dispatch boundary so that a
    /// malformed payload fails one call, not the whole reply.
    pub arguments: String,
}

/// Token usage metadata for one round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,
    /// Tokens generated by the model.
    pub completion_tokens: u32,
    /// Total of both.
    pub total_tokens: u32,
}
