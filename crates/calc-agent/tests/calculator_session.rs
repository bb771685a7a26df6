use calc_agent::SessionBuilder;
use calc_agent_model::{ModelMessage, ToolCallRequest, ToolChoice};
use calc_agent_test_model::{PresetReply, TestModelProvider};

fn calculator_call(arguments: &str) -> ToolCallRequest {
    ToolCallRequest {
        id: "call_1".to_owned(),
        name: "calculator".to_owned(),
        arguments: arguments.to_owned(),
    }
}

#[tokio::test]
async fn test_multiplication_round_trip() {
    let mut provider = TestModelProvider::default();
    provider.add_reply(PresetReply::with_tool_calls([calculator_call(
        r#"{"operation":"multiply","a":15,"b":23}"#,
    )]));
    provider.add_reply(PresetReply::with_text("15 times 23 is 345."));

    let session = SessionBuilder::with_model_provider(provider.clone())
        .build()
        .unwrap();
    let answer = session.send("What is 15 times 23?").await.unwrap();
    assert!(answer.contains("345"));

    let requests = provider.recorded_requests();
    assert_eq!(requests.len(), 2);

    // The first round trip advertises the calculator and leaves the
    // decision to the model.
    assert_eq!(requests[0].tools.len(), 1);
    assert_eq!(requests[0].tools[0].name, "calculator");
    assert_eq!(requests[0].tool_choice, Some(ToolChoice::Auto));

    // The tool result carries the exact product, paired by id.
    let ModelMessage::Tool(result) = &requests[1].messages[3] else {
        panic!("expected a tool result");
    };
    assert_eq!(result.id, "call_1");
    assert!(result.content.contains("345"));
    assert!(result.content.contains("multiply"));
}

#[tokio::test]
async fn test_division_by_zero_still_answers() {
    let mut provider = TestModelProvider::default();
    provider.add_reply(PresetReply::with_tool_calls([calculator_call(
        r#"{"operation":"divide","a":10,"b":0}"#,
    )]));
    provider.add_reply(PresetReply::with_text(
        "Dividing by zero is undefined.",
    ));

    let session = SessionBuilder::with_model_provider(provider.clone())
        .build()
        .unwrap();
    let answer = session.send("What is 10 divided by 0?").await.unwrap();
    assert_eq!(answer, "Dividing by zero is undefined.");

    // The tool result is an error payload, not a numeric result.
    let requests = provider.recorded_requests();
    let ModelMessage::Tool(result) = &requests[1].messages[3] else {
        panic!("expected a tool result");
    };
    assert_eq!(result.id, "call_1");
    assert!(result.content.contains("error"));
    assert!(result.content.contains("division by zero"));
    assert!(!result.content.contains("result"));
}

#[tokio::test]
async fn test_non_arithmetic_input_is_answered_directly() {
    let mut provider = TestModelProvider::default();
    provider.add_reply(PresetReply::with_text(
        "Hello! Ask me an arithmetic question.",
    ));

    let session = SessionBuilder::with_model_provider(provider.clone())
        .build()
        .unwrap();
    let answer = session.send("Good morning!").await.unwrap();
    assert_eq!(answer, "Hello! Ask me an arithmetic question.");

    // One round trip, and the transcript only ever held the two seeded
    // messages.
    let requests = provider.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages.len(), 2);
}

#[tokio::test]
async fn test_word_problem_with_two_calls() {
    let mut provider = TestModelProvider::default();
    provider.add_reply(PresetReply::with_tool_calls([
        ToolCallRequest {
            id: "call_1".to_owned(),
            name: "calculator".to_owned(),
            arguments: r#"{"operation":"multiply","a":3,"b":25}"#.to_owned(),
        },
        ToolCallRequest {
            id: "call_2".to_owned(),
            name: "calculator".to_owned(),
            arguments: r#"{"operation":"subtract","a":100,"b":75}"#.to_owned(),
        },
    ]));
    provider.add_reply(PresetReply::with_text("You have 25 left."));

    let session = SessionBuilder::with_model_provider(provider.clone())
        .build()
        .unwrap();
    let answer = session
        .send("I have 100 and buy 3 shirts at 25 each, what's left?")
        .await
        .unwrap();
    assert_eq!(answer, "You have 25 left.");

    // Both requests got their own result, in provider order.
    let requests = provider.recorded_requests();
    let results: Vec<_> = requests[1]
        .messages
        .iter()
        .filter_map(|msg| match msg {
            ModelMessage::Tool(result) => Some(result),
            _ => None,
        })
        .collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "call_1");
    assert!(results[0].content.contains("75"));
    assert_eq!(results[1].id, "call_2");
    assert!(results[1].content.contains("25"));
}
