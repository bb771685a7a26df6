use calc_agent_model::{
    ModelFinishReason, ModelMessage, ModelReply, ModelRequest, ModelTool,
    TokenUsage, ToolCallRequest, ToolChoice,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, OpenAIConfig};

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionToolCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub r#type: String,
    pub function: FunctionToolCall,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct FunctionTool {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct Tool {
    r#type: &'static str,
    function: FunctionTool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },
    Tool {
        tool_call_id: String,
        content: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &OpenAIConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: req.messages.iter().map(create_message).collect(),
        tools: req.tools.iter().map(create_tool).collect(),
        tool_choice: req.tool_choice.map(|choice| match choice {
            ToolChoice::Auto => "auto",
        }),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    }
}

#[inline]
fn create_message(msg: &ModelMessage) -> Message {
    match msg {
        ModelMessage::System(content) => Message::System {
            content: content.clone(),
        },
        ModelMessage::User(content) => Message::User {
            content: content.clone(),
        },
        ModelMessage::Assistant(assistant) => Message::Assistant {
            content: assistant.content.clone(),
            tool_calls: if assistant.tool_calls.is_empty() {
                None
            } else {
                Some(
                    assistant.tool_calls.iter().map(create_tool_call).collect(),
                )
            },
        },
        ModelMessage::Tool(result) => Message::Tool {
            tool_call_id: result.id.clone(),
            content: result.content.clone(),
        },
    }
}

#[inline]
fn create_tool(tool: &ModelTool) -> Tool {
    Tool {
        r#type: "function",
        function: FunctionTool {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.parameters.clone(),
        },
    }
}

#[inline]
fn create_tool_call(req: &ToolCallRequest) -> ToolCall {
    ToolCall {
        id: req.id.clone(),
        r#type: "function".to_owned(),
        function: FunctionToolCall {
            name: req.name.clone(),
            arguments: req.arguments.clone(),
        },
    }
}

pub fn create_reply(completion: ChatCompletion) -> Result<ModelReply, Error> {
    let Some(choice) = completion.choices.into_iter().next() else {
        return Err(Error::malformed("the reply contains no choices"));
    };

    let tool_calls = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| ToolCallRequest {
            id: call.id,
            name: call.function.name,
            arguments: call.function.arguments,
        })
        .collect();

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("tool_calls") => ModelFinishReason::ToolCalls,
        _ => ModelFinishReason::Stop,
    };

    Ok(ModelReply {
        content: choice.message.content,
        tool_calls,
        finish_reason,
        usage: completion.usage.map(|usage| TokenUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }),
    })
}

#[cfg(test)]
mod tests {
    use calc_agent_model::AssistantMessage;
    use serde_json::json;

    use super::*;
    use crate::OpenAIConfigBuilder;

    #[test]
    fn test_create_request_wire_shape() {
        let request = ModelRequest {
            messages: vec![
                ModelMessage::System("You are a helpful assistant.".to_owned()),
                ModelMessage::User("What is 15 times 23?".to_owned()),
            ],
            tools: vec![ModelTool {
                name: "calculator".to_owned(),
                description: "Performs basic arithmetic.".to_owned(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "a": { "type": "number" },
                        "b": { "type": "number" },
                    },
                    "required": ["a", "b"],
                }),
            }],
            tool_choice: Some(ToolChoice::Auto),
        };
        let config = OpenAIConfigBuilder::with_api_key("xxx")
            .with_model("custom")
            .with_temperature(0.5)
            .with_max_tokens(300)
            .build();

        let serialized =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        assert_eq!(
            serialized,
            json!({
                "model": "custom",
                "messages": [
                    {
                        "role": "system",
                        "content": "You are a helpful assistant.",
                    },
                    {
                        "role": "user",
                        "content": "What is 15 times 23?",
                    },
                ],
                "tools": [{
                    "type": "function",
                    "function": {
                        "name": "calculator",
                        "description": "Performs basic arithmetic.",
                        "parameters": {
                            "type": "object",
                            "properties": {
                                "a": { "type": "number" },
                                "b": { "type": "number" },
                            },
                            "required": ["a", "b"],
                        },
                    },
                }],
                "tool_choice": "auto",
                "temperature": 0.5,
                "max_tokens": 300,
            })
        );
    }

    #[test]
    fn test_closing_request_omits_tool_fields() {
        let request = ModelRequest {
            messages: vec![
                ModelMessage::Assistant(AssistantMessage {
                    content: None,
                    tool_calls: vec![ToolCallRequest {
                        id: "call_1".to_owned(),
                        name: "calculator".to_owned(),
                        arguments: r#"{"a":15,"b":23}"#.to_owned(),
                    }],
                }),
                ModelMessage::Tool(calc_agent_model::ToolCallResult {
                    id: "call_1".to_owned(),
                    content: r#"{"result":345.0}"#.to_owned(),
                }),
            ],
            tools: vec![],
            tool_choice: None,
        };
        let config = OpenAIConfigBuilder::with_api_key("xxx").build();

        let serialized =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        assert_eq!(
            serialized,
            json!({
                "model": "gpt-4o",
                "messages": [
                    {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "id": "call_1",
                            "type": "function",
                            "function": {
                                "name": "calculator",
                                "arguments": "{\"a\":15,\"b\":23}",
                            },
                        }],
                    },
                    {
                        "role": "tool",
                        "tool_call_id": "call_1",
                        "content": "{\"result\":345.0}",
                    },
                ],
            })
        );
    }

    #[test]
    fn test_create_reply() {
        let body = json!({
            "id": "chatcmpl-1",
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "calculator",
                            "arguments": "{\"operation\":\"multiply\",\"a\":15,\"b\":23}",
                        },
                    }],
                },
                "finish_reason": "tool_calls",
            }],
            "usage": {
                "prompt_tokens": 82,
                "completion_tokens": 21,
                "total_tokens": 103,
            },
        });
        let completion: ChatCompletion =
            serde_json::from_value(body).unwrap();
        let reply = create_reply(completion).unwrap();

        assert!(reply.content.is_none());
        assert_eq!(reply.finish_reason, ModelFinishReason::ToolCalls);
        assert_eq!(reply.tool_calls.len(), 1);
        assert_eq!(reply.tool_calls[0].id, "call_1");
        assert_eq!(reply.tool_calls[0].name, "calculator");
        assert_eq!(reply.usage.unwrap().total_tokens, 103);
    }

    #[test]
    fn test_create_reply_without_choices() {
        let completion: ChatCompletion =
            serde_json::from_value(json!({ "id": "chatcmpl-1", "choices": [] }))
                .unwrap();
        assert!(create_reply(completion).is_err());
    }
}
