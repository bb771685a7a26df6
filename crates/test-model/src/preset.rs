use calc_agent_model::{
    ModelFinishReason, ModelReply, TokenUsage, ToolCallRequest,
};
use serde::{Deserialize, Serialize};

/// The preset reply for one scripted request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// The text content of the reply, if any.
    pub content: Option<String>,
    /// Tool calls the reply requests.
    pub tool_calls: Vec<ToolCallRequest>,
}

impl PresetReply {
    /// Creates a text-only reply.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            content: Some(text.into()),
            tool_calls: vec![],
        }
    }

    /// Creates a reply with neither content nor tool calls.
    #[inline]
    pub fn without_content() -> Self {
        Self {
            content: None,
            tool_calls: vec![],
        }
    }

    /// Creates a reply that requests the given tool calls.
    #[inline]
    pub fn with_tool_calls(
        tool_calls: impl Into<Vec<ToolCallRequest>>,
    ) -> Self {
        Self {
            content: None,
            tool_calls: tool_calls.into(),
        }
    }

    pub(crate) fn into_reply(self) -> ModelReply {
        let finish_reason = if self.tool_calls.is_empty() {
            ModelFinishReason::Stop
        } else {
            ModelFinishReason::ToolCalls
        };
        ModelReply {
            content: self.content,
            tool_calls: self.tool_calls,
            finish_reason,
            usage: Some(TokenUsage {
                prompt_tokens: 12,
                completion_tokens: 7,
                total_tokens: 19,
            }),
        }
    }
}
