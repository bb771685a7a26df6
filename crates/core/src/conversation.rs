//! Conversation-related types.

use calc_agent_model::{AssistantMessage, ModelMessage, ToolCallResult};

/// The ordered transcript of a single exchange.
///
/// A conversation is created fresh for every chat call, seeded with
/// the system instructions and the user input, grown while tool calls
/// are being answered, and discarded once the final answer has been
/// produced. Its message list is what gets sent verbatim to the
/// provider on every round trip.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<ModelMessage>,
}

impl Conversation {
    pub(crate) fn new(system_prompt: &str, user_input: &str) -> Self {
        Self {
            messages: vec![
                ModelMessage::System(system_prompt.to_owned()),
                ModelMessage::User(user_input.to_owned()),
            ],
        }
    }

    pub(crate) fn push_assistant(&mut self, msg: AssistantMessage) {
        self.messages.push(ModelMessage::Assistant(msg));
    }

    /// Appends a tool result. The result must answer a tool call
    /// requested by a previously appended assistant turn.
    pub(crate) fn push_tool_result(&mut self, result: ToolCallResult) {
        debug_assert!(
            self.requested_tool_call_ids().any(|id| id == result.id),
            "unpaired tool result: {}",
            result.id
        );
        self.messages.push(ModelMessage::Tool(result));
    }

    /// Returns the messages in conversation order.
    #[inline]
    pub fn messages(&self) -> &[ModelMessage] {
        &self.messages
    }

    fn requested_tool_call_ids(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().flat_map(|msg| {
            let tool_calls = match msg {
                ModelMessage::Assistant(assistant) => &assistant.tool_calls[..],
                _ => &[],
            };
            tool_calls.iter().map(|req| req.id.as_str())
        })
    }
}
