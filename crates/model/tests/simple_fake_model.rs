use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use calc_agent_model::{
    ErrorKind, ModelFinishReason, ModelMessage, ModelProvider,
    ModelProviderError, ModelReply, ModelRequest, TokenUsage,
};
use tokio::time::sleep;

#[derive(Debug)]
struct FakeModelProviderError(ErrorKind);

impl Display for FakeModelProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for FakeModelProviderError {}

impl ModelProviderError for FakeModelProviderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// An echoing provider that answers the last user message after a
/// short artificial delay.
struct FakeModelProvider;

impl ModelProvider for FakeModelProvider {
    type Error = FakeModelProviderError;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        let last_user_input = req.messages.iter().rev().find_map(|msg| {
            if let ModelMessage::User(input) = msg {
                Some(input.clone())
            } else {
                None
            }
        });
        async move {
            sleep(Duration::from_millis(1)).await;
            let Some(input) = last_user_input else {
                return Err(FakeModelProviderError(ErrorKind::Other));
            };
            Ok(ModelReply {
                content: Some(format!("You said {input}")),
                tool_calls: vec![],
                finish_reason: ModelFinishReason::Stop,
                usage: Some(TokenUsage {
                    prompt_tokens: 1,
                    completion_tokens: 3,
                    total_tokens: 4,
                }),
            })
        }
    }
}

#[tokio::test]
async fn test_send_request() {
    let provider = FakeModelProvider;
    let req = ModelRequest {
        messages: vec![
            ModelMessage::System("Echo the user.".to_owned()),
            ModelMessage::User("Hi".to_owned()),
        ],
        tools: vec![],
        tool_choice: None,
    };

    let reply = provider.send_request(&req).await.unwrap();
    assert_eq!(reply.content.as_deref(), Some("You said Hi"));
    assert!(reply.tool_calls.is_empty());
    assert_eq!(reply.finish_reason, ModelFinishReason::Stop);
    assert_eq!(reply.usage.unwrap().total_tokens, 4);
}

#[tokio::test]
async fn test_error_reply() {
    let provider = FakeModelProvider;
    let req = ModelRequest {
        messages: vec![ModelMessage::System("Echo the user.".to_owned())],
        tools: vec![],
        tool_choice: None,
    };

    let err = provider.send_request(&req).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
}
