use serde_json::Value;

use crate::ToolCallRequest;

/// A request to be sent to the model provider.
///
/// The message list is sent verbatim on every call, so it alone defines
/// the conversation the model sees.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelRequest {
    /// The input messages, in conversation order.
    pub messages: Vec<ModelMessage>,
    /// Tools that are available to the model.
    pub tools: Vec<ModelTool>,
    /// Tool usage policy. Expected to be set exactly when `tools` is
    /// non-empty.
    pub tool_choice: Option<ToolChoice>,
}

/// A complete message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelMessage {
    /// The system instructions.
    System(String),
    /// A user input text.
    User(String),
    /// An assistant turn, possibly carrying tool call requests.
    Assistant(AssistantMessage),
    /// A tool call result.
    Tool(ToolCallResult),
}

/// An assistant turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssistantMessage {
    /// The text content, if any was produced.
    pub content: Option<String>,
    /// Tool calls the assistant requested in this turn. Empty when the
    /// model answered with text only.
    pub tool_calls: Vec<ToolCallRequest>,
}

/// The result of calling a tool.
///
/// Invariant: the `id` must refer to a [`ToolCallRequest`] carried by a
/// preceding assistant message in the same request. Providers reject
/// unpaired results.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolCallResult {
    /// The unique identifier for the tool call request.
    pub id: String,
    /// The result of the tool call.
    pub content: String,
}

/// Describes a tool that can be used by the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelTool {
    /// Name of the tool.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// Parameters definition of the tool.
    ///
    /// For most model providers, the parameters should typically be
    /// defined by a [JSON schema](https://json-schema.org/).
    pub parameters: Value,
}

/// Policy for whether the model may emit tool call requests.
///
/// The set is deliberately closed: tool use is never forced and never
/// disabled here, the model always decides on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolChoice {
    /// The model autonomously decides whether to invoke a tool.
    #[default]
    Auto,
}
