mod builder;

use std::error::Error as StdError;
use std::fmt::{self, Display};

use calc_agent_model::{
    AssistantMessage, ErrorKind, ModelProviderError, ModelReply, ModelRequest,
    ToolChoice,
};

use crate::conversation::Conversation;
use crate::model_client::ModelClient;
use crate::tool::Executor as ToolExecutor;
pub use builder::AgentBuilder;

/// The fixed reply used when the model produced no usable text.
const FALLBACK_ANSWER: &str = "The model did not produce an answer.";

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Error returned when a chat call fails.
///
/// Only provider transport failures escape a chat call. Everything
/// that goes wrong while running a tool is contained per call and
/// reported back to the model instead.
#[derive(Debug)]
pub struct ChatError(Box<dyn ModelProviderError>);

impl ChatError {
    /// Returns the kind of the underlying provider error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for ChatError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_ref() as &(dyn StdError + 'static))
    }
}

/// An agent instance, which holds a model client, a toolset and the
/// system persona.
///
/// Every [`chat`](Agent::chat) call owns an independent conversation:
/// there is no memory across calls, and concurrent calls share no
/// mutable state.
pub struct Agent {
    model_client: ModelClient,
    tool_executor: ToolExecutor,
    system_prompt: String,
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("system_prompt", &self.system_prompt)
            .finish_non_exhaustive()
    }
}

impl Agent {
    /// Runs one full exchange and returns the model's final answer.
    ///
    /// The exchange is at most two round trips. The first offers the
    /// toolset and lets the model decide whether to use it. If the
    /// reply requests tool calls, each one is answered in provider
    /// order and a closing round trip, without tools, produces the
    /// final answer. A reply with no usable text yields a fixed
    /// fallback string, never an empty answer.
    pub async fn chat(&self, message: &str) -> Result<String, ChatError> {
        let mut conversation = Conversation::new(&self.system_prompt, message);

        let reply = self
            .model_client
            .send_request(ModelRequest {
                messages: conversation.messages().to_vec(),
                tools: self.tool_executor.definitions().to_vec(),
                tool_choice: Some(ToolChoice::Auto),
            })
            .await
            .map_err(ChatError)?;
        log_usage(&reply);

        if reply.tool_calls.is_empty() {
            return Ok(answer_or_fallback(reply.content));
        }

        debug!("model requested {} tool call(s)", reply.tool_calls.len());
        let requests = reply.tool_calls.clone();
        conversation.push_assistant(AssistantMessage {
            content: reply.content,
            tool_calls: reply.tool_calls,
        });
        for request in &requests {
            let result = self.tool_executor.dispatch(request).await;
            conversation.push_tool_result(result);
        }

        // The closing round trip doesn't solicit further tool use.
        let reply = self
            .model_client
            .send_request(ModelRequest {
                messages: conversation.messages().to_vec(),
                tools: vec![],
                tool_choice: None,
            })
            .await
            .map_err(ChatError)?;
        log_usage(&reply);

        Ok(answer_or_fallback(reply.content))
    }
}

fn answer_or_fallback(content: Option<String>) -> String {
    match content {
        Some(text) if !text.trim().is_empty() => text,
        _ => FALLBACK_ANSWER.to_owned(),
    }
}

fn log_usage(reply: &ModelReply) {
    if let Some(usage) = &reply.usage {
        debug!(
            "round trip used {} prompt + {} completion tokens",
            usage.prompt_tokens, usage.completion_tokens
        );
    }
}
